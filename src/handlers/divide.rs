//! `GET /divide?a=&b=`: Integer division that reports internal errors.
//!
//! Parse and arithmetic failures are returned to the caller verbatim, with
//! status 200. In debug mode the error's internal type and fields follow.

use std::num::ParseIntError;

use axum::extract::{Query, State};
use thiserror::Error;

use crate::handlers::{first, QueryPairs};
use crate::http::server::AppState;

/// Why a division could not produce a quotient.
#[derive(Debug, Error)]
pub enum DivideError {
    #[error("invalid literal for int() with base 10: '{literal}' ({source})")]
    InvalidLiteral {
        literal: String,
        source: ParseIntError,
    },

    #[error("integer division or modulo by zero")]
    ZeroDivision,

    #[error("integer overflow in division")]
    Overflow,
}

/// Operand text, `"0"` when absent.
fn operand(query: &[(String, String)], name: &str) -> String {
    first(query, name).unwrap_or_else(|| "0".to_string())
}

fn parse_int(raw: &str) -> Result<i64, DivideError> {
    raw.trim()
        .parse()
        .map_err(|source| DivideError::InvalidLiteral {
            literal: raw.to_string(),
            source,
        })
}

/// Parse both operands and compute the integer quotient.
pub fn divide(a: &str, b: &str) -> Result<i64, DivideError> {
    let a = parse_int(a)?;
    let b = parse_int(b)?;
    if b == 0 {
        return Err(DivideError::ZeroDivision);
    }
    a.checked_div(b).ok_or(DivideError::Overflow)
}

/// Render the outcome, error detail included.
pub fn render(result: Result<i64, DivideError>, debug: bool) -> String {
    match result {
        Ok(quotient) => format!("Result: {}", quotient),
        Err(e) if debug => format!(
            "An error occurred: {}\n\n{}::{:?}",
            e,
            std::any::type_name::<DivideError>(),
            e
        ),
        Err(e) => format!("An error occurred: {}", e),
    }
}

pub async fn divide_handler(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> String {
    let (a, b) = (operand(&query, "a"), operand(&query, "b"));
    render(divide(&a, &b), state.config.debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotient() {
        assert_eq!(render(divide("7", "2"), false), "Result: 3");
        assert_eq!(render(divide("-9", " 3 "), false), "Result: -3");
    }

    #[test]
    fn test_zero_divisor_discloses_detail() {
        assert_eq!(
            render(divide("1", "0"), false),
            "An error occurred: integer division or modulo by zero"
        );
    }

    #[test]
    fn test_parse_failure_discloses_detail() {
        let out = render(divide("abc", "1"), false);
        assert_eq!(
            out,
            "An error occurred: invalid literal for int() with base 10: 'abc' (invalid digit found in string)"
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            divide(&i64::MIN.to_string(), "-1"),
            Err(DivideError::Overflow)
        ));
    }

    #[test]
    fn test_debug_adds_internal_type() {
        let out = render(divide("1", "0"), true);
        assert!(out.starts_with("An error occurred: integer division or modulo by zero"));
        assert!(out.contains("DivideError::ZeroDivision"));
    }
}
