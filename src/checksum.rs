use crate::digit_mapping::DigitContribution;
use crate::error::IbanValidationError;

pub const MODULUS: u32 = 97;

/// Remainder of a valid account number
pub const VALID_REMAINDER: u32 = 1;

/// Running MOD97-10 remainder of a decimal numeral fed one digit at a time.
///
/// The numeral itself is never built: a rearranged account number can be much longer than any
/// fixed-width integer, so the remainder is reduced after every digit and stays in [0, 96].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mod97Accumulator {
    remainder: Option<u32>,
}

impl Mod97Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_digit(&mut self, digit: u8) {
        let digit = u32::from(digit);
        self.remainder = Some(match self.remainder {
            None => digit,
            Some(remainder) => (remainder * 10 + digit) % MODULUS,
        });
    }

    pub fn push(&mut self, contribution: DigitContribution) {
        contribution.for_each_digit(|digit| self.push_digit(digit));
    }

    /// `None` until a digit has been pushed
    pub fn remainder(&self) -> Option<u32> {
        self.remainder
    }
}

/// Fold the contributions into a remainder, calling `inspect` with the remainder after every
/// digit.
pub(crate) fn fold_contributions<I>(
    contributions: I,
    mut inspect: impl FnMut(u32),
) -> Result<u32, IbanValidationError>
where
    I: IntoIterator<Item = Result<DigitContribution, IbanValidationError>>,
{
    let mut accumulator = Mod97Accumulator::new();
    for contribution in contributions {
        contribution?.for_each_digit(|digit| {
            accumulator.push_digit(digit);
            if let Some(remainder) = accumulator.remainder() {
                inspect(remainder);
            }
        });
    }
    accumulator.remainder().ok_or(IbanValidationError::Empty)
}

/// Same as [fold_contributions], from an already expanded decimal string.
pub(crate) fn fold_decimal_string(
    digits: &str,
    mut inspect: impl FnMut(u32),
) -> Result<u32, IbanValidationError> {
    let mut accumulator = Mod97Accumulator::new();
    for (position, character) in digits.chars().enumerate() {
        let digit = character
            .to_digit(10)
            .ok_or(IbanValidationError::InvalidCharacter {
                character,
                position,
            })?;
        accumulator.push_digit(digit as u8);
        if let Some(remainder) = accumulator.remainder() {
            inspect(remainder);
        }
    }
    accumulator.remainder().ok_or(IbanValidationError::Empty)
}
