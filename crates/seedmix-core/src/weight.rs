//! Selection weights entered by the user.

/// Weight given to a source when none has been set.
pub const DEFAULT_WEIGHT: u64 = 1;

/// Why a weight string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeightError {
    /// Nothing was entered.
    #[error("empty")]
    Empty,
    /// The value is below zero.
    #[error("must not be negative")]
    Negative,
    /// The value is not a whole number.
    #[error("not an integer")]
    NotAnInteger,
    /// The value does not fit in 64 bits.
    #[error("too large")]
    TooLarge,
}

/// Parse a user-entered weight.
///
/// Surrounding whitespace and a leading `+` are accepted. Anything that is
/// not a non-negative whole number is rejected rather than coerced.
pub fn parse_weight(input: &str) -> Result<u64, WeightError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WeightError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WeightError::NotAnInteger);
    }

    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(WeightError::Negative);
    }
    digits.parse().map_err(|_| WeightError::TooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_weight("0"), Ok(0));
        assert_eq!(parse_weight("3"), Ok(3));
        assert_eq!(parse_weight(" 12 "), Ok(12));
        assert_eq!(parse_weight("+7"), Ok(7));
        assert_eq!(parse_weight("-0"), Ok(0));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_weight(""), Err(WeightError::Empty));
        assert_eq!(parse_weight("   "), Err(WeightError::Empty));
        assert_eq!(parse_weight("-1"), Err(WeightError::Negative));
        assert_eq!(parse_weight("abc"), Err(WeightError::NotAnInteger));
        assert_eq!(parse_weight("1.5"), Err(WeightError::NotAnInteger));
        assert_eq!(parse_weight("-"), Err(WeightError::NotAnInteger));
        assert_eq!(parse_weight("1 2"), Err(WeightError::NotAnInteger));
        assert_eq!(
            parse_weight("99999999999999999999999"),
            Err(WeightError::TooLarge)
        );
    }

    #[test]
    fn huge_negative_is_negative() {
        assert_eq!(
            parse_weight("-99999999999999999999"),
            Err(WeightError::Negative)
        );
        assert_eq!(parse_weight("-000"), Ok(0));
    }

    proptest! {
        #[test]
        fn any_u64_round_trips(n in any::<u64>()) {
            prop_assert_eq!(parse_weight(&n.to_string()), Ok(n));
        }

        #[test]
        fn any_negative_is_rejected(n in 1u64..=u64::MAX) {
            prop_assert_eq!(parse_weight(&format!("-{n}")), Err(WeightError::Negative));
        }

        #[test]
        fn letters_are_rejected(s in "[a-zA-Z]{1,8}") {
            prop_assert_eq!(parse_weight(&s), Err(WeightError::NotAnInteger));
        }
    }
}
