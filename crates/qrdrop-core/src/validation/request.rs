//! Generation request validation
//!
//! Checks run in a fixed order and the first failure is reported:
//! text presence/type, text length, size range, error-correction level.
//! Absent (or `null`) optional fields take their defaults before being checked.

use serde_json::{Number, Value};

use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MAX_TEXT_LENGTH, MIN_SIZE};
use crate::models::{ErrorCorrectionLevel, ValidatedParameters};

/// Why a generation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Text parameter is required and must be a string")]
    MissingOrInvalidText,

    #[error("Text parameter must be 2000 characters or less")]
    TextTooLong,

    #[error("Size parameter must be between 100 and 1000")]
    SizeOutOfRange,

    #[error("Error correction level must be one of: L, M, Q, H")]
    InvalidErrorLevel,
}

impl ValidationError {
    /// Machine-readable code for this rejection.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingOrInvalidText => "MISSING_OR_INVALID_TEXT",
            ValidationError::TextTooLong => "TEXT_TOO_LONG",
            ValidationError::SizeOutOfRange => "SIZE_OUT_OF_RANGE",
            ValidationError::InvalidErrorLevel => "INVALID_ERROR_LEVEL",
        }
    }
}

/// Validate a decoded JSON body into [`ValidatedParameters`].
///
/// A body that is not a JSON object has no `text` and is rejected as
/// [`ValidationError::MissingOrInvalidText`].
pub fn validate_generation_request(body: &Value) -> Result<ValidatedParameters, ValidationError> {
    let text = validate_text(body.get("text"))?;
    let size = validate_size(body.get("size"))?;
    let level = validate_error_level(body.get("errorCorrectionLevel"))?;

    Ok(ValidatedParameters::new(text, size, level))
}

fn validate_text(value: Option<&Value>) -> Result<String, ValidationError> {
    let text = match value {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(ValidationError::MissingOrInvalidText),
    };

    // Measured in UTF-16 code units.
    if text.encode_utf16().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::TextTooLong);
    }

    Ok(text.clone())
}

fn validate_size(value: Option<&Value>) -> Result<u32, ValidationError> {
    let size = match value {
        None | Some(Value::Null) => return Ok(DEFAULT_SIZE),
        Some(Value::Number(n)) => integral_value(n).ok_or(ValidationError::SizeOutOfRange)?,
        Some(_) => return Err(ValidationError::SizeOutOfRange),
    };

    if size < u64::from(MIN_SIZE) || size > u64::from(MAX_SIZE) {
        return Err(ValidationError::SizeOutOfRange);
    }

    // Bounded by MAX_SIZE above.
    Ok(size as u32)
}

/// Non-negative integer value of a JSON number, including floats with no
/// fractional part (`300.0`, `1e2`).
fn integral_value(n: &Number) -> Option<u64> {
    if let Some(v) = n.as_u64() {
        return Some(v);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && (0.0..=u64::from(MAX_SIZE) as f64).contains(&f) {
        Some(f as u64)
    } else {
        None
    }
}

fn validate_error_level(value: Option<&Value>) -> Result<ErrorCorrectionLevel, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(ErrorCorrectionLevel::default()),
        Some(Value::String(s)) => s
            .parse::<ErrorCorrectionLevel>()
            .map_err(|_| ValidationError::InvalidErrorLevel),
        Some(_) => Err(ValidationError::InvalidErrorLevel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_text_is_rejected() {
        assert_eq!(
            validate_generation_request(&json!({})),
            Err(ValidationError::MissingOrInvalidText)
        );
        assert_eq!(
            validate_generation_request(&json!({"text": null})),
            Err(ValidationError::MissingOrInvalidText)
        );
    }

    #[test]
    fn non_string_text_is_rejected() {
        for text in [json!(42), json!(true), json!(["a"]), json!({"a": 1})] {
            assert_eq!(
                validate_generation_request(&json!({ "text": text })),
                Err(ValidationError::MissingOrInvalidText)
            );
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(
            validate_generation_request(&json!({"text": ""})),
            Err(ValidationError::MissingOrInvalidText)
        );
    }

    #[test]
    fn non_object_body_is_rejected_as_missing_text() {
        for body in [json!(null), json!([1, 2]), json!("hello"), json!(7)] {
            assert_eq!(
                validate_generation_request(&body),
                Err(ValidationError::MissingOrInvalidText)
            );
        }
    }

    #[test]
    fn text_length_boundary() {
        let ok = "x".repeat(2000);
        assert!(validate_generation_request(&json!({ "text": ok })).is_ok());
        assert!(validate_generation_request(&json!({"text": "a"})).is_ok());

        let too_long = "x".repeat(2001);
        assert_eq!(
            validate_generation_request(&json!({ "text": too_long })),
            Err(ValidationError::TextTooLong)
        );
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let text = "é".repeat(2000);
        assert!(validate_generation_request(&json!({ "text": text })).is_ok());
    }

    #[test]
    fn text_length_counts_utf16_code_units() {
        // U+1F600 is outside the BMP: one char, two UTF-16 code units.
        let ok = "\u{1F600}".repeat(1000);
        assert!(validate_generation_request(&json!({ "text": ok })).is_ok());

        let too_long = "\u{1F600}".repeat(1001);
        assert_eq!(
            validate_generation_request(&json!({ "text": too_long })),
            Err(ValidationError::TextTooLong)
        );
    }

    #[test]
    fn size_defaults_to_200() {
        let params = validate_generation_request(&json!({"text": "a"})).unwrap();
        assert_eq!(params.size(), 200);

        let params = validate_generation_request(&json!({"text": "a", "size": null})).unwrap();
        assert_eq!(params.size(), 200);
    }

    #[test]
    fn size_range_is_inclusive() {
        for size in [100, 101, 500, 999, 1000] {
            let params = validate_generation_request(&json!({"text": "a", "size": size})).unwrap();
            assert_eq!(params.size(), size);
        }
        for size in [json!(0), json!(50), json!(99), json!(1001), json!(-5), json!(100000)] {
            assert_eq!(
                validate_generation_request(&json!({"text": "a", "size": size})),
                Err(ValidationError::SizeOutOfRange)
            );
        }
    }

    #[test]
    fn non_integer_size_is_rejected() {
        for size in [json!("300"), json!(150.5), json!(true)] {
            assert_eq!(
                validate_generation_request(&json!({"text": "a", "size": size})),
                Err(ValidationError::SizeOutOfRange)
            );
        }
    }

    #[test]
    fn whole_float_size_is_accepted() {
        let body: Value = serde_json::from_str(r#"{"text": "a", "size": 300.0}"#).unwrap();
        assert_eq!(validate_generation_request(&body).unwrap().size(), 300);

        let body: Value = serde_json::from_str(r#"{"text": "a", "size": 1e2}"#).unwrap();
        assert_eq!(validate_generation_request(&body).unwrap().size(), 100);

        let body: Value = serde_json::from_str(r#"{"text": "a", "size": 1e5}"#).unwrap();
        assert_eq!(
            validate_generation_request(&body),
            Err(ValidationError::SizeOutOfRange)
        );
    }

    #[test]
    fn error_level_defaults_to_m() {
        let params = validate_generation_request(&json!({"text": "a"})).unwrap();
        assert_eq!(params.error_correction_level(), ErrorCorrectionLevel::M);
    }

    #[test]
    fn all_error_levels_accepted() {
        for level in ErrorCorrectionLevel::ALL {
            let params = validate_generation_request(
                &json!({"text": "a", "errorCorrectionLevel": level.as_str()}),
            )
            .unwrap();
            assert_eq!(params.error_correction_level(), level);
        }
    }

    #[test]
    fn unknown_error_levels_rejected() {
        for level in [json!("l"), json!("X"), json!(""), json!("HIGH"), json!(1)] {
            assert_eq!(
                validate_generation_request(&json!({"text": "a", "errorCorrectionLevel": level})),
                Err(ValidationError::InvalidErrorLevel)
            );
        }
    }

    #[test]
    fn first_failing_check_wins() {
        let body = json!({"text": "x".repeat(2001), "size": 5, "errorCorrectionLevel": "Z"});
        assert_eq!(validate_generation_request(&body), Err(ValidationError::TextTooLong));

        let body = json!({"text": "ok", "size": 5, "errorCorrectionLevel": "Z"});
        assert_eq!(validate_generation_request(&body), Err(ValidationError::SizeOutOfRange));
    }

    #[test]
    fn revalidating_validated_parameters_succeeds() {
        let bodies = [
            json!({"text": "hello", "size": 300, "errorCorrectionLevel": "Q"}),
            json!({"text": "a"}),
            json!({"text": "x".repeat(2000), "size": 1000, "errorCorrectionLevel": "H"}),
        ];
        for body in bodies {
            let first = validate_generation_request(&body).unwrap();
            let second = validate_generation_request(&first.to_request_json()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(
            ValidationError::TextTooLong.to_string(),
            "Text parameter must be 2000 characters or less"
        );
        assert_eq!(ValidationError::SizeOutOfRange.code(), "SIZE_OUT_OF_RANGE");
    }
}
