use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::grade::Grade;
use super::user::{UserName, UserRef};

/// Links a student and a course. Listings expand either side depending on
/// who is asking: per-course listings embed the student, per-student
/// listings embed the course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub student: Option<EnrolledStudent>,
    #[serde(default)]
    pub course: Option<EnrolledCourse>,
    /// At most one row; the backend models the grade as a child table.
    #[serde(default)]
    pub grades: Vec<Grade>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledStudent {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub credits: Option<i32>,
    #[serde(default)]
    pub professor: Option<EnrolledCourseProfessor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledCourseProfessor {
    pub id: Uuid,
    #[serde(default)]
    pub user: Option<UserName>,
}
