use crate::error::IbanValidationError;

/// Remove all whitespace and fold ASCII letters to upper case.
///
/// Non-ASCII characters are kept as-is so that they are rejected later instead of being
/// case-mapped to an ASCII letter (e.g. `ı` upper-cases to `I`).
pub fn normalize(raw: Option<&str>) -> Result<String, IbanValidationError> {
    let normalized: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() {
        return Err(IbanValidationError::Empty);
    }
    Ok(normalized)
}

/// Minimal structural gate: only the class of the first character is checked, length and
/// country formats are not.
pub fn check_leading_character(normalized: &str) -> Result<(), IbanValidationError> {
    match normalized.chars().next() {
        None => Err(IbanValidationError::Empty),
        Some(c) if c.is_ascii_uppercase() || c.is_ascii_digit() => Ok(()),
        Some(c) => Err(IbanValidationError::InvalidLeadingCharacter(c)),
    }
}

#[cfg(test)]
mod test {
    use crate::error::IbanValidationError;
    use crate::normalization::*;

    #[test]
    fn test_normalize() {
        let inputs = vec![
            ("GB29NWBK60161331926819", "GB29NWBK60161331926819"),
            ("gb29 nwbk 6016 1331 9268 19", "GB29NWBK60161331926819"),
            (" GB29\tNWBK\n60161331926819 ", "GB29NWBK60161331926819"),
            ("de44-5001", "DE44-5001"),
            // non-ASCII characters are not case folded
            ("gbı9", "GBı9"),
        ];
        for (raw, expected) in inputs {
            assert_eq!(normalize(Some(raw)).unwrap(), expected);
        }
    }

    #[test]
    fn test_normalize_empty() {
        for raw in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(normalize(raw), Err(IbanValidationError::Empty));
        }
    }

    #[test]
    fn test_leading_character() {
        for valid in ["GB29", "0123", "Z"] {
            assert!(check_leading_character(valid).is_ok());
        }
        assert_eq!(
            check_leading_character("-GB29"),
            Err(IbanValidationError::InvalidLeadingCharacter('-'))
        );
        assert_eq!(
            check_leading_character("éGB29"),
            Err(IbanValidationError::InvalidLeadingCharacter('é'))
        );
        assert_eq!(
            check_leading_character(""),
            Err(IbanValidationError::Empty)
        );
    }

    #[test]
    fn test_only_first_character_is_checked() {
        assert!(check_leading_character("G!!!").is_ok());
    }
}
