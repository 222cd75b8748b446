use serde_json::Value;

use super::{email, full_name, int_value, password, present, string_min, ValidationError};

const MSG_CODE: &str = "Código requerido";
const MSG_MAJOR: &str = "Carrera requerida";
const MSG_SEMESTER: &str = "Semestre inválido";

#[derive(Debug, Clone, PartialEq)]
pub struct StudentCreate {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub student_code: String,
    pub major: String,
    pub semester: i32,
}

impl StudentCreate {
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
        let student_code = match present(input, "student_code") {
            Some(value) => string_min(value, "student_code", 1, MSG_CODE)?,
            None => return Err(ValidationError::field("student_code", MSG_CODE)),
        };
        let major = match present(input, "major") {
            Some(value) => string_min(value, "major", 2, MSG_MAJOR)?,
            None => return Err(ValidationError::field("major", MSG_MAJOR)),
        };
        let semester = match present(input, "semester") {
            Some(value) => parse_semester(value)?,
            None => return Err(ValidationError::field("semester", MSG_SEMESTER)),
        };

        Ok(Self {
            email,
            full_name,
            password,
            student_code,
            major,
            semester,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub student_code: Option<String>,
    pub major: Option<String>,
    pub semester: Option<i32>,
}

impl StudentUpdate {
    pub fn parse(input: &Value) -> Result<Self, ValidationError> {
        let parsed = Self {
            email: present(input, "email").map(email).transpose()?,
            full_name: present(input, "full_name").map(full_name).transpose()?,
            password: present(input, "password").map(password).transpose()?,
            student_code: present(input, "student_code")
                .map(|v| string_min(v, "student_code", 1, MSG_CODE))
                .transpose()?,
            major: present(input, "major")
                .map(|v| string_min(v, "major", 2, MSG_MAJOR))
                .transpose()?,
            semester: present(input, "semester").map(parse_semester).transpose()?,
        };

        if parsed == Self::default() {
            return Err(ValidationError::no_changes());
        }
        Ok(parsed)
    }
}

fn parse_semester(value: &Value) -> Result<i32, ValidationError> {
    match int_value(value) {
        Some(n) if n > 0 && n <= i32::MAX as i64 => Ok(n as i32),
        _ => Err(ValidationError::field("semester", MSG_SEMESTER)),
    }
}
