use uuid::Uuid;

use crate::backend::{Backend, BackendError, SortDirection};
use crate::models::Course;
use crate::schemas::{CourseCreate, CourseUpdate};

use super::{decode_row, decode_rows};

const COURSE_COLUMNS: &str = "id,name,credits,professor_id,created_at";
const COURSE_LIST_COLUMNS: &str =
    "id,name,credits,professor_id,created_at, professor:professors(id,user_id, user:users_app(id,full_name,email))";

#[derive(Clone)]
pub struct CourseDao {
    backend: Backend,
}

impl CourseDao {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// All courses with their professor (and the professor's user),
    /// newest first.
    pub async fn list(&self) -> Result<Vec<Course>, BackendError> {
        let rows = self
            .backend
            .from("courses")
            .select(COURSE_LIST_COLUMNS)
            .order("created_at", SortDirection::Desc)
            .execute()
            .await?;
        decode_rows(rows)
    }

    pub async fn create(&self, input: CourseCreate) -> Result<Course, BackendError> {
        let row = self
            .backend
            .from("courses")
            .insert(input.into_row())
            .select(COURSE_COLUMNS)
            .single()
            .await?;
        decode_row(row)
    }

    pub async fn update(&self, id: Uuid, patch: CourseUpdate) -> Result<Course, BackendError> {
        let row = self
            .backend
            .from("courses")
            .update(patch.into_patch())
            .eq("id", id)
            .select(COURSE_COLUMNS)
            .single()
            .await?;
        decode_row(row)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), BackendError> {
        self.backend.from("courses").delete().eq("id", id).execute().await
    }
}
