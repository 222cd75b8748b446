use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::backend::{Backend, BackendError, SortDirection};
use crate::models::Enrollment;

use super::{decode_row, decode_rows};

const BY_COURSE_COLUMNS: &str =
    "id, student_id, course_id, created_at, student:students(id,user_id, user:users_app(id,full_name,email)), grades(id,value,note)";
const BY_STUDENT_COLUMNS: &str =
    "id, student_id, course_id, created_at, course:courses(id,name,credits, professor:professor_id(id, user:users_app(id,full_name))), grades(id,value,note)";

#[derive(Debug, Deserialize)]
struct EnrollmentId {
    id: Uuid,
}

#[derive(Clone)]
pub struct EnrollmentDao {
    backend: Backend,
}

impl EnrollmentDao {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Roster of a course, oldest enrollment first.
    pub async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Enrollment>, BackendError> {
        let rows = self
            .backend
            .from("enrollments")
            .select(BY_COURSE_COLUMNS)
            .eq("course_id", course_id)
            .order("created_at", SortDirection::Asc)
            .execute()
            .await?;
        decode_rows(rows)
    }

    /// Everything a student is enrolled in, with course and grade info.
    pub async fn list_by_student(&self, student_id: Uuid) -> Result<Vec<Enrollment>, BackendError> {
        let rows = self
            .backend
            .from("enrollments")
            .select(BY_STUDENT_COLUMNS)
            .eq("student_id", student_id)
            .execute()
            .await?;
        decode_rows(rows)
    }

    /// The enrollment for a (student, course) pair. Absence is a regular
    /// outcome, not an error.
    pub async fn find(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, BackendError> {
        let row = self
            .backend
            .from("enrollments")
            .select("id, student_id, course_id")
            .eq("student_id", student_id)
            .eq("course_id", course_id)
            .maybe_single()
            .await?;
        row.map(decode_row).transpose()
    }

    /// Insert the pair; a duplicate is rejected by the backend's uniqueness
    /// constraint and surfaces as a backend error.
    pub async fn enroll(&self, student_id: Uuid, course_id: Uuid) -> Result<Uuid, BackendError> {
        let row = self
            .backend
            .from("enrollments")
            .insert(json!({ "student_id": student_id, "course_id": course_id }))
            .select("id")
            .single()
            .await?;
        let EnrollmentId { id } = decode_row(row)?;
        Ok(id)
    }

    pub async fn unenroll(&self, student_id: Uuid, course_id: Uuid) -> Result<(), BackendError> {
        self.backend
            .from("enrollments")
            .delete()
            .eq("student_id", student_id)
            .eq("course_id", course_id)
            .execute()
            .await
    }
}
