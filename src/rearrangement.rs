use crate::digit_mapping::DigitContribution;
use crate::error::IbanValidationError;

/// Country code + check digits, moved to the end before computing the checksum
pub const PREFIX_LENGTH: usize = 4;

/// Build the rearranged account number: everything after the prefix, then the prefix.
pub fn materialize(normalized: &str) -> Result<String, IbanValidationError> {
    let split = match normalized.char_indices().nth(PREFIX_LENGTH) {
        Some((idx, _)) => idx,
        None => {
            let length = normalized.chars().count();
            if length < PREFIX_LENGTH {
                return Err(too_short(length));
            }
            normalized.len()
        }
    };
    let (prefix, rest) = normalized.split_at(split);

    let mut rearranged = String::with_capacity(normalized.len());
    rearranged.push_str(rest);
    rearranged.push_str(prefix);
    Ok(rearranged)
}

/// Iterates over the rearranged account number without building it, by starting right after
/// the prefix and wrapping around to index 0 at the end of the input.
///
/// Only ASCII input is walked. Anything else can't be a valid account number and is rejected
/// up front with the same error the digit mapping reports on the materialized string.
#[derive(Clone, Debug)]
pub struct RotatedChars<'a> {
    bytes: &'a [u8],
    index: usize,
    remaining: usize,
}

impl<'a> RotatedChars<'a> {
    pub fn new(normalized: &'a str) -> Result<Self, IbanValidationError> {
        if !normalized.is_ascii() {
            return Err(first_invalid_character(normalized));
        }
        let bytes = normalized.as_bytes();
        if bytes.len() < PREFIX_LENGTH {
            return Err(too_short(bytes.len()));
        }
        Ok(Self {
            bytes,
            index: PREFIX_LENGTH % bytes.len(),
            remaining: bytes.len(),
        })
    }
}

/// Error for a normalized input holding at least one non-ASCII char: too short if it has fewer
/// chars than the prefix, otherwise the first invalid char in rearranged order.
fn first_invalid_character(normalized: &str) -> IbanValidationError {
    let length = normalized.chars().count();
    if length < PREFIX_LENGTH {
        return too_short(length);
    }
    normalized
        .chars()
        .skip(PREFIX_LENGTH)
        .chain(normalized.chars().take(PREFIX_LENGTH))
        .enumerate()
        .find(|(_, c)| DigitContribution::from_char(*c).is_none())
        .map(|(position, character)| IbanValidationError::InvalidCharacter {
            character,
            position,
        })
        // non-ASCII chars are never mapped, one is always found
        .unwrap_or(too_short(length))
}

impl Iterator for RotatedChars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.remaining == 0 {
            return None;
        }
        let c = char::from(self.bytes[self.index]);
        self.index += 1;
        if self.index == self.bytes.len() {
            self.index = 0;
        }
        self.remaining -= 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RotatedChars<'_> {}

fn too_short(length: usize) -> IbanValidationError {
    IbanValidationError::TooShort {
        length,
        minimum: PREFIX_LENGTH,
    }
}
