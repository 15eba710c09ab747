//! Route handlers.

pub mod employees;
pub mod feedback;
pub mod products;
pub mod roster;
pub mod sentiment;

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{Error, Result};

/// Parse and validate a JSON request body.
///
/// Handlers take the raw body so that malformed JSON, missing fields and
/// failed validation all surface as `InvalidRequest` with the standard
/// error envelope instead of a framework-shaped rejection.
pub(crate) fn parse_body<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_str(body)
        .map_err(|e| Error::InvalidRequest(format!("invalid request body: {e}")))?;

    payload
        .validate()
        .map_err(|e| Error::InvalidRequest(e.to_string()))?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewEmployee, NewProduct};

    #[test]
    fn malformed_json_is_an_invalid_request() {
        let result = parse_body::<NewProduct>("{not json");
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn missing_required_field_is_an_invalid_request() {
        // No salary
        let result = parse_body::<NewEmployee>(r#"{"emp_id": 1, "name": "Ada", "age": 36}"#);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn failed_validation_is_an_invalid_request() {
        let result = parse_body::<NewEmployee>(
            r#"{"emp_id": 1, "name": "", "age": 36, "salary": 50000}"#,
        );
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn well_formed_body_parses() {
        let employee: NewEmployee =
            parse_body(r#"{"emp_id": 1, "name": "Ada", "age": 36, "salary": 50000}"#).unwrap();
        assert_eq!(employee.emp_id, 1);
        assert_eq!(employee.name, "Ada");
    }
}
