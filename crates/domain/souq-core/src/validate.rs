use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mobile number must be 9 followed by eight digits, optionally prefixed with 0")]
    InvalidMobile,
    #[error("invoice number must not be empty")]
    EmptyInvoice,
}

/// Syrian mobile number: optional leading `0`, then `9`, then exactly
/// eight digits.
pub fn validate_mobile(input: &str) -> Result<(), ValidationError> {
    let trimmed = input.trim();
    let rest = trimmed.strip_prefix('0').unwrap_or(trimmed);
    let mut chars = rest.chars();
    if chars.next() != Some('9') {
        return Err(ValidationError::InvalidMobile);
    }
    let tail: Vec<char> = chars.collect();
    if tail.len() == 8 && tail.iter().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobile)
    }
}

pub fn validate_invoice(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        Err(ValidationError::EmptyInvoice)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_with_leading_zero_passes() {
        assert_eq!(validate_mobile("0911111111"), Ok(()));
    }

    #[test]
    fn mobile_without_leading_zero_passes() {
        assert_eq!(validate_mobile("944123456"), Ok(()));
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(validate_mobile("123"), Err(ValidationError::InvalidMobile));
    }

    #[test]
    fn landline_prefix_is_rejected() {
        assert_eq!(
            validate_mobile("0811111111"),
            Err(ValidationError::InvalidMobile)
        );
    }

    #[test]
    fn non_digit_tail_is_rejected() {
        assert_eq!(
            validate_mobile("09abcdefgh"),
            Err(ValidationError::InvalidMobile)
        );
    }

    #[test]
    fn blank_invoice_is_rejected() {
        assert_eq!(validate_invoice("   "), Err(ValidationError::EmptyInvoice));
        assert_eq!(validate_invoice("INV-100"), Ok(()));
    }
}
