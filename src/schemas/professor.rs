use serde_json::Value;

use super::{email, full_name, password, present, string_min, ValidationError};

const MSG_DEPARTMENT: &str = "Departamento requerido";
const MSG_TITLE: &str = "Título académico requerido";

#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorCreate {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub department: String,
    pub academic_title: String,
}

impl ProfessorCreate {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let email = match present(input, "email") {
            Some(value) => email(value)?,
            None => return Err(ValidationError::field("email", super::MSG_EMAIL)),
        };
        let full_name = match present(input, "full_name") {
            Some(value) => full_name(value)?,
            None => return Err(ValidationError::field("full_name", super::MSG_FULL_NAME)),
        };
        let password = match present(input, "password") {
            Some(value) => password(value)?,
            None => return Err(ValidationError::field("password", super::MSG_PASSWORD)),
        };
        let department = match present(input, "department") {
            Some(value) => string_min(value, "department", 2, MSG_DEPARTMENT)?,
            None => return Err(ValidationError::field("department", MSG_DEPARTMENT)),
        };
        let academic_title = match present(input, "academic_title") {
            Some(value) => string_min(value, "academic_title", 2, MSG_TITLE)?,
            None => return Err(ValidationError::field("academic_title", MSG_TITLE)),
        };

        Ok(Self {
            email,
            full_name,
            password,
            department,
            academic_title,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfessorUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub department: Option<String>,
    pub academic_title: Option<String>,
}

impl ProfessorUpdate {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let parsed = Self {
            email: present(input, "email").map(email).transpose()?,
            full_name: present(input, "full_name").map(full_name).transpose()?,
            password: present(input, "password").map(password).transpose()?,
            department: present(input, "department")
                .map(|v| string_min(v, "department", 2, MSG_DEPARTMENT))
                .transpose()?,
            academic_title: present(input, "academic_title")
                .map(|v| string_min(v, "academic_title", 2, MSG_TITLE))
                .transpose()?,
        };

        if parsed == Self::default() {
            return Err(ValidationError::no_changes());
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_valid_input() {
        let parsed = ProfessorCreate::parse(&json!({
            "email": "luis@uni.edu",
            "full_name": "Luis Soto",
            "password": "secreto",
            "department": "Ciencias",
            "academic_title": "Doctor",
        }))
        .unwrap();
        assert_eq!(parsed.department, "Ciencias");
    }

    #[test]
    fn rejects_short_department() {
        let err = ProfessorCreate::parse(&json!({
            "email": "luis@uni.edu",
            "full_name": "Luis Soto",
            "password": "secreto",
            "department": "C",
            "academic_title": "Doctor",
        }))
        .unwrap_err();
        assert_eq!(err.field, Some("department"));
        assert_eq!(err.message, MSG_DEPARTMENT);
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let err = ProfessorUpdate::parse(&json!({})).unwrap_err();
        assert_eq!(err.message, "No hay cambios para actualizar");
    }
}
