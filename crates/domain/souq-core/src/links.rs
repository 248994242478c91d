//! Outbound link construction for dialer, WhatsApp and map actions.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub fn tel_link(number: &str) -> String {
    format!("tel:{}", number.trim())
}

/// `wa.me` links take the number as digits only (no `+`, no spaces); an
/// optional prefilled message goes percent-encoded into `?text=`.
pub fn whatsapp_link(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    match text {
        Some(t) if !t.trim().is_empty() => {
            format!(
                "https://wa.me/{digits}?text={}",
                utf8_percent_encode(t, NON_ALPHANUMERIC)
            )
        }
        _ => format!("https://wa.me/{digits}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_keeps_plus_prefix() {
        assert_eq!(tel_link(" +963912345671 "), "tel:+963912345671");
    }

    #[test]
    fn whatsapp_link_strips_non_digits() {
        assert_eq!(
            whatsapp_link("+963 912 345 671", None),
            "https://wa.me/963912345671"
        );
    }

    #[test]
    fn whatsapp_text_is_percent_encoded() {
        let link = whatsapp_link("+963912345671", Some("hello there"));
        assert_eq!(link, "https://wa.me/963912345671?text=hello%20there");
    }
}
