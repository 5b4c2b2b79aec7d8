use crate::checksum::{fold_contributions, fold_decimal_string, VALID_REMAINDER};
use crate::config::{IbanValidatorConfig, Mod97Variant};
use crate::digit_mapping::{contributions, expand_digits};
use crate::error::IbanValidationError;
use crate::normalization::{check_leading_character, normalize};
use crate::observability::labels::Labels;
use crate::observability::metrics::ValidationMetrics;
use crate::rearrangement::{materialize, RotatedChars};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, account_number: &str) -> bool;
}

/// Validate an account number with the ISO 7064 MOD97-10 scheme.
///
/// Whitespace is ignored and letters are case-insensitive. Anything malformed, including
/// `None` and the empty string, is invalid. This never panics.
///
/// ```
/// assert!(dd_iban::validate("GB29 NWBK 6016 1331 9268 19"));
/// assert!(!dd_iban::validate("GB29 NWBK 6016 1331 9268 18"));
/// assert!(!dd_iban::validate(None));
/// ```
pub fn validate<'a>(account_number: impl Into<Option<&'a str>>) -> bool {
    validate_with(account_number, Mod97Variant::default())
}

pub fn validate_with<'a>(
    account_number: impl Into<Option<&'a str>>,
    variant: Mod97Variant,
) -> bool {
    check(account_number, variant).is_ok()
}

/// Same verdict as [validate_with], with the reason of the rejection.
pub fn check<'a>(
    account_number: impl Into<Option<&'a str>>,
    variant: Mod97Variant,
) -> Result<(), IbanValidationError> {
    match remainder(account_number, variant)? {
        VALID_REMAINDER => Ok(()),
        remainder => Err(IbanValidationError::ChecksumMismatch { remainder }),
    }
}

/// MOD97-10 remainder of a well-formed account number, valid or not.
pub fn remainder<'a>(
    account_number: impl Into<Option<&'a str>>,
    variant: Mod97Variant,
) -> Result<u32, IbanValidationError> {
    remainder_with_inspect(account_number.into(), variant, |_| {})
}

/// Runs the whole pipeline, calling `inspect` with the running remainder after every digit.
pub(crate) fn remainder_with_inspect(
    account_number: Option<&str>,
    variant: Mod97Variant,
    inspect: impl FnMut(u32),
) -> Result<u32, IbanValidationError> {
    let normalized = normalize(account_number)?;
    check_leading_character(&normalized)?;

    match variant {
        Mod97Variant::Materialized => {
            let rearranged = materialize(&normalized)?;
            let digits = expand_digits(&rearranged)?;
            fold_decimal_string(&digits, inspect)
        }
        Mod97Variant::Streaming => {
            fold_contributions(contributions(RotatedChars::new(&normalized)?), inspect)
        }
    }
}

/// Stateless MOD97-10 checker
#[derive(Clone, Copy, Debug, Default)]
pub struct Mod97Checksum {
    pub variant: Mod97Variant,
}

impl Validator for Mod97Checksum {
    fn is_valid_match(&self, account_number: &str) -> bool {
        validate_with(account_number, self.variant)
    }
}

/// MOD97-10 checker counting its verdicts.
pub struct IbanValidator {
    variant: Mod97Variant,
    metrics: ValidationMetrics,
}

impl IbanValidator {
    pub fn new(config: &IbanValidatorConfig) -> Self {
        Self {
            variant: config.variant,
            metrics: ValidationMetrics::new(&Labels::from(&config.labels)),
        }
    }

    pub fn variant(&self) -> Mod97Variant {
        self.variant
    }
}

impl Validator for IbanValidator {
    fn is_valid_match(&self, account_number: &str) -> bool {
        let outcome = check(account_number, self.variant);
        self.metrics.record(&outcome);
        outcome.is_ok()
    }
}
