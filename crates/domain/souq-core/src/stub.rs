//! Placeholder bill amounts for the simulated payment flows.
//!
//! These formulas are deliberately meaningless: they exist so the mock
//! inquiry produces a stable, plausible-looking number. Do not replace
//! them with a real tariff computation.

/// Telecom inquiry result: last four digits of the number, times 15,
/// plus 5000 SYP.
pub fn telecom_bill_amount(mobile: &str) -> u64 {
    let digits: Vec<u8> = mobile
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect();
    let tail = digits.iter().rev().take(4).rev();
    let n = tail.fold(0u64, |acc, d| acc * 10 + u64::from(*d));
    n * 15 + 5000
}

/// Utility-bill preview shown while typing: input length times 12 345 SYP.
pub fn invoice_amount_preview(invoice: &str) -> u64 {
    invoice.trim().chars().count() as u64 * 12_345
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telecom_amount_uses_last_four_digits() {
        assert_eq!(telecom_bill_amount("0911111111"), 1111 * 15 + 5000);
        assert_eq!(telecom_bill_amount("0988887777"), 7777 * 15 + 5000);
    }

    #[test]
    fn telecom_amount_is_deterministic() {
        assert_eq!(
            telecom_bill_amount("0933334444"),
            telecom_bill_amount("0933334444")
        );
    }

    #[test]
    fn short_or_empty_input_still_yields_base_amount() {
        assert_eq!(telecom_bill_amount(""), 5000);
        assert_eq!(telecom_bill_amount("7"), 7 * 15 + 5000);
    }

    #[test]
    fn invoice_preview_scales_with_length() {
        assert_eq!(invoice_amount_preview(""), 0);
        assert_eq!(invoice_amount_preview("ABC12"), 5 * 12_345);
    }
}
