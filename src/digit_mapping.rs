use crate::error::IbanValidationError;

/// Letters start at 10: 'A' => 10, 'Z' => 35
const LETTER_OFFSET: u8 = 10;

/// Decimal digits contributed by one character of the rearranged account number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitContribution {
    /// A digit character contributes its own value
    Single(u8),
    /// A letter contributes its two-digit code, tens digit first
    Pair { tens: u8, ones: u8 },
}

impl DigitContribution {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(DigitContribution::Single(c as u8 - b'0')),
            'A'..='Z' => {
                let value = c as u8 - b'A' + LETTER_OFFSET;
                Some(DigitContribution::Pair {
                    tens: value / 10,
                    ones: value % 10,
                })
            }
            _ => None,
        }
    }

    /// Numeric value of the source character (0-35)
    pub fn value(&self) -> u8 {
        match *self {
            DigitContribution::Single(digit) => digit,
            DigitContribution::Pair { tens, ones } => tens * 10 + ones,
        }
    }

    /// Call `f` with each decimal digit, in the order they are folded into the checksum.
    pub fn for_each_digit(&self, mut f: impl FnMut(u8)) {
        match *self {
            DigitContribution::Single(digit) => f(digit),
            DigitContribution::Pair { tens, ones } => {
                f(tens);
                f(ones);
            }
        }
    }
}

/// Map every character to its contribution, reporting the first character that is neither an
/// uppercase letter nor a digit.
pub fn contributions<I>(
    chars: I,
) -> impl Iterator<Item = Result<DigitContribution, IbanValidationError>>
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().enumerate().map(|(position, character)| {
        DigitContribution::from_char(character).ok_or(IbanValidationError::InvalidCharacter {
            character,
            position,
        })
    })
}

/// Write the decimal expansion of the rearranged account number, e.g. "NW" => "2332".
pub fn expand_digits(rearranged: &str) -> Result<String, IbanValidationError> {
    let mut expanded = String::with_capacity(rearranged.len() * 2);
    for contribution in contributions(rearranged.chars()) {
        expanded.push_str(&contribution?.value().to_string());
    }
    Ok(expanded)
}

#[cfg(test)]
mod test {
    use crate::digit_mapping::*;
    use crate::error::IbanValidationError;

    #[test]
    fn test_digits() {
        for (idx, c) in ('0'..='9').enumerate() {
            assert_eq!(
                DigitContribution::from_char(c),
                Some(DigitContribution::Single(idx as u8))
            );
        }
    }

    #[test]
    fn test_letters() {
        let letters = vec![
            ('A', 1, 0),
            ('B', 1, 1),
            ('J', 1, 9),
            ('K', 2, 0),
            ('T', 2, 9),
            ('U', 3, 0),
            ('Z', 3, 5),
        ];
        for (c, tens, ones) in letters {
            let contribution = DigitContribution::from_char(c).unwrap();
            assert_eq!(contribution, DigitContribution::Pair { tens, ones });
            assert_eq!(contribution.value(), c as u8 - 55);
        }
    }

    #[test]
    fn test_rejected_characters() {
        for c in ['a', 'z', ' ', '-', '/', 'é', 'Ä', '٣', '\u{80}'] {
            assert_eq!(DigitContribution::from_char(c), None);
        }
    }

    #[test]
    fn test_digit_order() {
        let mut digits = vec![];
        DigitContribution::from_char('W')
            .unwrap()
            .for_each_digit(|d| digits.push(d));
        DigitContribution::from_char('7')
            .unwrap()
            .for_each_digit(|d| digits.push(d));
        assert_eq!(digits, vec![3, 2, 7]);
    }

    #[test]
    fn test_expand_digits() {
        assert_eq!(
            expand_digits("NWBK60161331926819GB29").unwrap(),
            "2332112060161331926819161129"
        );
        assert_eq!(
            expand_digits("NW-BK"),
            Err(IbanValidationError::InvalidCharacter {
                character: '-',
                position: 2
            })
        );
    }
}
