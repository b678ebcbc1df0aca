//! Field checks for JSON request bodies.
//!
//! Bodies are taken as raw `serde_json::Value` so that a missing or
//! mistyped field becomes a 422 naming the field, instead of a generic
//! deserialization rejection.

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

use crate::error::ApiError;

/// Require every field in `fields` to be present and a string.
///
/// All fields are checked for presence before any is checked for type, so
/// the first missing field wins over an earlier mistyped one.
pub fn required_strings<'a, const N: usize>(
    body: &'a Value,
    fields: [&'static str; N],
) -> Result<[&'a str; N], ApiError> {
    let object = body.as_object();

    if let Some(missing) = fields
        .iter()
        .find(|field| object.is_none_or(|o| !o.contains_key(**field)))
    {
        return Err(ApiError::validation(
            *missing,
            format!("Missing `{missing}` in request body"),
        ));
    }

    if let Some(mistyped) = fields.iter().find(|field| !body[**field].is_string()) {
        return Err(ApiError::validation(
            *mistyped,
            format!("The `{mistyped}` must be of type `string`"),
        ));
    }

    Ok(fields.map(|field| body[field].as_str().unwrap_or_default()))
}

/// Reject values with leading or trailing whitespace.
pub fn explicitly_trimmed(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim() != value {
        return Err(ApiError::validation(
            field,
            format!("The `{field}` cannot begin or end with whitespace"),
        ));
    }
    Ok(())
}

/// Turn `validator` errors into a single 422, reporting the first failing
/// field of `order`.
pub fn first_field_error(errors: &ValidationErrors, order: &[&'static str]) -> ApiError {
    let field_errors = errors.field_errors();

    for field in order {
        if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
            return ApiError::validation(*field, describe(error));
        }
    }

    ApiError::validation("body", "Invalid request body")
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    if error.code == "length" {
        let len = error
            .params
            .get("value")
            .and_then(Value::as_str)
            .map_or(0, |v| v.chars().count() as u64);
        let min = error.params.get("min").and_then(Value::as_u64);
        let max = error.params.get("max").and_then(Value::as_u64);

        return match (min, max) {
            (Some(min), _) if len < min => format!("Must be at least {min} characters long"),
            (_, Some(max)) => format!("Must be at most {max} characters long"),
            _ => "Invalid length".to_string(),
        };
    }

    format!("Invalid value ({})", error.code)
}
