//! Form field validation.
//!
//! The store trusts its callers, so every check on user input happens
//! here. Bounds are exclusive: `min_length(3)` means longer than three.

use thiserror::Error;

/// Why a field was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be longer than {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be shorter than {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be greater than {min}")]
    TooSmall { field: &'static str, min: i64 },

    #[error("{field} must be less than {max}")]
    TooLarge { field: &'static str, max: i64 },

    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
}

/// Raw value of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// A field together with the rules it must satisfy.
///
/// Length rules apply only to text, range rules only to numbers.
#[derive(Debug, Clone)]
pub struct Validatable<'a> {
    field: &'static str,
    value: FieldValue<'a>,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn text(field: &'static str, value: &'a str) -> Self {
        Self::with_value(field, FieldValue::Text(value))
    }

    pub fn number(field: &'static str, value: i64) -> Self {
        Self::with_value(field, FieldValue::Number(value))
    }

    fn with_value(field: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Checks every rule, reporting the first one that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let field = self.field;

        match self.value {
            FieldValue::Text(text) => {
                if self.required && text.trim().is_empty() {
                    return Err(ValidationError::Required { field });
                }
                let len = text.chars().count();
                if let Some(min) = self.min_length {
                    if len <= min {
                        return Err(ValidationError::TooShort { field, min });
                    }
                }
                if let Some(max) = self.max_length {
                    if len >= max {
                        return Err(ValidationError::TooLong { field, max });
                    }
                }
            }
            FieldValue::Number(n) => {
                if let Some(min) = self.min {
                    if n <= min {
                        return Err(ValidationError::TooSmall { field, min });
                    }
                }
                if let Some(max) = self.max {
                    if n >= max {
                        return Err(ValidationError::TooLarge { field, max });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Parses a required whole-number field.
pub fn parse_number(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(Validatable::text("title", "Build API").required().validate().is_ok());
        assert_eq!(
            Validatable::text("title", "   ").required().validate(),
            Err(ValidationError::Required { field: "title" })
        );
        // Not required: blank is fine.
        assert!(Validatable::text("title", "").validate().is_ok());
    }

    #[test]
    fn test_length_bounds_are_exclusive() {
        let rule = |v| Validatable::text("description", v).min_length(3).max_length(6);

        assert_eq!(
            rule("abc").validate(),
            Err(ValidationError::TooShort { field: "description", min: 3 })
        );
        assert!(rule("abcd").validate().is_ok());
        assert!(rule("abcde").validate().is_ok());
        assert_eq!(
            rule("abcdef").validate(),
            Err(ValidationError::TooLong { field: "description", max: 6 })
        );
    }

    #[test]
    fn test_number_bounds_are_exclusive() {
        let rule = |n| Validatable::number("people", n).required().min(0).max(10);

        assert_eq!(
            rule(0).validate(),
            Err(ValidationError::TooSmall { field: "people", min: 0 })
        );
        assert!(rule(1).validate().is_ok());
        assert!(rule(9).validate().is_ok());
        assert_eq!(
            rule(10).validate(),
            Err(ValidationError::TooLarge { field: "people", max: 10 })
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("people", " 3 "), Ok(3));
        assert_eq!(parse_number("people", "-2"), Ok(-2));
        assert_eq!(
            parse_number("people", ""),
            Err(ValidationError::Required { field: "people" })
        );
        assert_eq!(
            parse_number("people", "three"),
            Err(ValidationError::NotANumber {
                field: "people",
                value: "three".to_string()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::TooSmall { field: "people", min: 0 };
        assert_eq!(err.to_string(), "people must be greater than 0");
    }
}
