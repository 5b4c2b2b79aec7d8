// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod config;
mod digit_mapping;
mod error;
mod normalization;
mod observability;
mod rearrangement;
mod validator;

// This is the public API of the IBAN validation library
pub use checksum::{Mod97Accumulator, MODULUS, VALID_REMAINDER};
pub use config::{IbanValidatorConfig, Mod97Variant};
pub use digit_mapping::DigitContribution;
pub use error::IbanValidationError;
pub use observability::labels::Labels;
pub use rearrangement::{RotatedChars, PREFIX_LENGTH};
pub use validator::{
    check, remainder, validate, validate_with, IbanValidator, Mod97Checksum, Validator,
};
