//! Data-access objects: one per entity, each translating a domain operation
//! into a single remote query or procedure call and narrowing the raw JSON
//! into the entity's typed shape before it crosses into controller code.

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod professor;
pub mod report;
pub mod student;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::BackendError;

pub use course::CourseDao;
pub use enrollment::EnrollmentDao;
pub use grade::GradeDao;
pub use professor::ProfessorDao;
pub use report::ReportDao;
pub use student::StudentDao;

pub(crate) fn decode_row<T: DeserializeOwned>(row: Value) -> Result<T, BackendError> {
    serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string()))
}

pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, BackendError> {
    rows.into_iter().map(decode_row).collect()
}
