//! Declarative per-entity validation.
//!
//! Each schema takes a candidate JSON object and produces either a
//! normalized, typed value or the first violated rule. Messages are the
//! user-facing strings the desktop client showed, kept verbatim.

pub mod course;
pub mod professor;
pub mod student;

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

pub(crate) const MSG_EMAIL: &str = "Email inválido";
pub(crate) const MSG_FULL_NAME: &str = "El nombre debe tener al menos 2 caracteres";
pub(crate) const MSG_PASSWORD: &str = "La contraseña debe tener al menos 6 caracteres";
const MSG_NO_CHANGES: &str = "No hay cambios para actualizar";

/// First violated rule, with the field it applies to (`None` for
/// object-level rules such as an empty update patch).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Option<&'static str>,
    pub message: String,
}

impl ValidationError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn no_changes() -> Self {
        Self {
            field: None,
            message: MSG_NO_CHANGES.to_string(),
        }
    }
}

/// A field counts as present only when set and non-null. Unknown fields are
/// ignored throughout.
pub(crate) fn present<'a>(input: &'a Value, field: &str) -> Option<&'a Value> {
    match input.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

pub(crate) fn string_min(
    value: &Value,
    field: &'static str,
    min_chars: usize,
    message: &str,
) -> Result<String, ValidationError> {
    match value.as_str() {
        Some(s) if s.chars().count() >= min_chars => Ok(s.to_string()),
        _ => Err(ValidationError::field(field, message)),
    }
}

pub(crate) fn email(value: &Value) -> Result<String, ValidationError> {
    let raw = value.as_str().unwrap_or_default();
    if is_valid_email(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::field("email", MSG_EMAIL))
    }
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.contains(char::is_whitespace)
}

pub(crate) fn password(value: &Value) -> Result<String, ValidationError> {
    string_min(value, "password", 6, MSG_PASSWORD)
}

pub(crate) fn full_name(value: &Value) -> Result<String, ValidationError> {
    string_min(value, "full_name", 2, MSG_FULL_NAME)
}

/// Integer with coercion: JSON integers, fraction-free floats, and numeric
/// strings all pass; anything else is rejected.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Integer without coercion, as the semester rule requires.
pub(crate) fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    }
}

pub(crate) fn uuid_value(value: &Value) -> Option<Uuid> {
    value.as_str().and_then(|s| Uuid::parse_str(s).ok())
}

pub use course::{CourseCreate, CourseUpdate};
pub use professor::{ProfessorCreate, ProfessorUpdate};
pub use student::{StudentCreate, StudentUpdate};
