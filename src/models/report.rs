use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the backend-computed course report. The aggregation happens
/// entirely server-side; the client only renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCountRow {
    pub course_id: Uuid,
    pub name: String,
    pub credits: i32,
    pub professor_name: Option<String>,
    pub professor_email: Option<String>,
    pub students_count: i64,
}
