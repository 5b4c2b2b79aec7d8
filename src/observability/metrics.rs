use crate::error::IbanValidationError;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

const REASON: &str = "reason";

/// Outcome counters of an instrumented validator, registered once at construction.
pub struct ValidationMetrics {
    valid: Counter,
    invalid_empty: Counter,
    invalid_leading_character: Counter,
    invalid_too_short: Counter,
    invalid_character: Counter,
    invalid_checksum: Counter,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        let invalid = |error: IbanValidationError| {
            counter!(
                "iban.validation.invalid",
                labels.clone_with_labels(&[(REASON, error.reason())])
            )
        };
        ValidationMetrics {
            valid: counter!("iban.validation.valid", labels.clone()),
            invalid_empty: invalid(IbanValidationError::Empty),
            invalid_leading_character: invalid(IbanValidationError::InvalidLeadingCharacter(
                char::default(),
            )),
            invalid_too_short: invalid(IbanValidationError::TooShort {
                length: 0,
                minimum: 0,
            }),
            invalid_character: invalid(IbanValidationError::InvalidCharacter {
                character: char::default(),
                position: 0,
            }),
            invalid_checksum: invalid(IbanValidationError::ChecksumMismatch { remainder: 0 }),
        }
    }

    pub fn record(&self, outcome: &Result<(), IbanValidationError>) {
        let counter = match outcome {
            Ok(()) => &self.valid,
            Err(IbanValidationError::Empty) => &self.invalid_empty,
            Err(IbanValidationError::InvalidLeadingCharacter(_)) => {
                &self.invalid_leading_character
            }
            Err(IbanValidationError::TooShort { .. }) => &self.invalid_too_short,
            Err(IbanValidationError::InvalidCharacter { .. }) => &self.invalid_character,
            Err(IbanValidationError::ChecksumMismatch { .. }) => &self.invalid_checksum,
        };
        counter.increment(1);
    }
}
