use serde_json::{json, Value};

use crate::backend::{Backend, BackendError};
use crate::models::CourseCountRow;

use super::decode_rows;

#[derive(Clone)]
pub struct ReportDao {
    backend: Backend,
}

impl ReportDao {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Courses with per-course enrollment counts and professor identity,
    /// computed entirely by the backend.
    pub async fn courses_with_counts(&self) -> Result<Vec<CourseCountRow>, BackendError> {
        let payload = self.backend.rpc("get_courses_with_counts", json!({})).await?;
        match payload {
            Value::Array(rows) => decode_rows(rows),
            Value::Null => Ok(Vec::new()),
            other => Err(BackendError::Decode(format!(
                "expected a row array, got: {}",
                other
            ))),
        }
    }
}
