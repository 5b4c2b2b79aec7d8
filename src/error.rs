use strum::IntoStaticStr;
use thiserror::Error;

/// Reason an account number was rejected.
///
/// None of these are surfaced by [crate::validate], which only returns a boolean. They are
/// available through [crate::check] and are used as the `reason` label of the invalid counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IbanValidationError {
    /// The input was absent, empty or only made of whitespace
    #[error("the account number is empty")]
    Empty,

    /// The first normalized character is neither an uppercase letter nor a digit
    #[error("the account number starts with {0:?}, expected a letter or a digit")]
    InvalidLeadingCharacter(char),

    /// Not enough characters to move the country code and check digits to the end
    #[error("the account number has {length} characters, at least {minimum} are required")]
    TooShort { length: usize, minimum: usize },

    /// A character of the rearranged sequence is neither a letter nor a digit
    #[error("invalid character {character:?} at position {position} of the rearranged account number")]
    InvalidCharacter { character: char, position: usize },

    /// The account number is well formed but its MOD97-10 remainder is not 1
    #[error("checksum mismatch, the remainder is {remainder}")]
    ChecksumMismatch { remainder: u32 },
}

impl IbanValidationError {
    /// Stable snake_case name of the rejection reason
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod test {
    use crate::error::IbanValidationError;

    #[test]
    fn test_reason_names() {
        let errors = vec![
            (IbanValidationError::Empty, "empty"),
            (
                IbanValidationError::InvalidLeadingCharacter('-'),
                "invalid_leading_character",
            ),
            (
                IbanValidationError::TooShort {
                    length: 3,
                    minimum: 4,
                },
                "too_short",
            ),
            (
                IbanValidationError::InvalidCharacter {
                    character: '.',
                    position: 7,
                },
                "invalid_character",
            ),
            (
                IbanValidationError::ChecksumMismatch { remainder: 42 },
                "checksum_mismatch",
            ),
        ];
        for (error, reason) in errors {
            assert_eq!(error.reason(), reason);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            IbanValidationError::InvalidCharacter {
                character: '.',
                position: 7
            }
            .to_string(),
            "invalid character '.' at position 7 of the rearranged account number"
        );
        assert_eq!(
            IbanValidationError::ChecksumMismatch { remainder: 42 }.to_string(),
            "checksum mismatch, the remainder is 42"
        );
    }
}
