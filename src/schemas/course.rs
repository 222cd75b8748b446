use serde_json::{json, Value};
use uuid::Uuid;

use super::{coerce_int, present, string_min, ValidationError};

const MSG_NAME: &str = "El nombre debe tener al menos 2 caracteres";
const MSG_CREDITS_INT: &str = "Créditos debe ser entero";
const MSG_CREDITS: &str = "Créditos inválidos";
const MSG_PROFESSOR_ID: &str = "Identificador de profesor inválido";

/// Normalized payload for course creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCreate {
    pub name: String,
    pub credits: i32,
    pub professor_id: Option<Uuid>,
}

impl CourseCreate {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let name = match present(input, "name") {
            Some(value) => string_min(value, "name", 2, MSG_NAME)?,
            None => return Err(ValidationError::field("name", MSG_NAME)),
        };

        let credits = match present(input, "credits") {
            Some(value) => parse_credits(value)?,
            None => return Err(ValidationError::field("credits", MSG_CREDITS_INT)),
        };

        let professor_id = parse_professor_id(input.get("professor_id"))?;

        Ok(Self {
            name,
            credits,
            professor_id,
        })
    }

    /// Row shape the backend expects on insert.
    pub fn into_row(self) -> Value {
        json!({
            "name": self.name,
            "credits": self.credits,
            "professor_id": self.professor_id,
        })
    }
}

/// Partial update: every field optional, but at least one must be set.
/// `professor_id: null` is a real change (clears the assignment), so it is
/// tracked separately from an absent field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub credits: Option<i32>,
    pub professor_id: Option<Option<Uuid>>,
}

impl CourseUpdate {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let name = match present(input, "name") {
            Some(value) => Some(string_min(value, "name", 2, MSG_NAME)?),
            None => None,
        };

        let credits = match present(input, "credits") {
            Some(value) => Some(parse_credits(value)?),
            None => None,
        };

        let professor_id = match input.get("professor_id") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(value) => Some(Some(parse_professor_ref(value)?)),
        };

        if name.is_none() && credits.is_none() && professor_id.is_none() {
            return Err(ValidationError::no_changes());
        }

        Ok(Self {
            name,
            credits,
            professor_id,
        })
    }

    /// Patch shape for the backend: only the fields that changed.
    pub fn into_patch(self) -> Value {
        let mut patch = serde_json::Map::new();
        if let Some(name) = self.name {
            patch.insert("name".to_string(), json!(name));
        }
        if let Some(credits) = self.credits {
            patch.insert("credits".to_string(), json!(credits));
        }
        if let Some(professor_id) = self.professor_id {
            patch.insert("professor_id".to_string(), json!(professor_id));
        }
        Value::Object(patch)
    }
}

fn parse_credits(value: &Value) -> Result<i32, ValidationError> {
    let credits = coerce_int(value)
        .ok_or_else(|| ValidationError::field("credits", MSG_CREDITS_INT))?;
    if !(0..=i32::MAX as i64).contains(&credits) {
        return Err(ValidationError::field("credits", MSG_CREDITS));
    }
    Ok(credits as i32)
}

fn parse_professor_id(value: Option<&Value>) -> Result<Option<Uuid>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(parse_professor_ref(value)?)),
    }
}

fn parse_professor_ref(value: &Value) -> Result<Uuid, ValidationError> {
    super::uuid_value(value).ok_or_else(|| ValidationError::field("professor_id", MSG_PROFESSOR_ID))
}
