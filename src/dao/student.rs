use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::{Backend, BackendError, SortDirection};
use crate::models::Student;
use crate::schemas::{StudentCreate, StudentUpdate};

use super::{decode_row, decode_rows};

const STUDENT_LIST_COLUMNS: &str =
    "id, user_id, student_code, major, semester, created_at, user:users_app(id,email,full_name,role)";
const STUDENT_FIND_COLUMNS: &str =
    "id, user_id, student_code, major, semester, user:users_app(id,email,full_name,role)";

#[derive(Clone)]
pub struct StudentDao {
    backend: Backend,
}

impl StudentDao {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Student>, BackendError> {
        let rows = self
            .backend
            .from("students")
            .select(STUDENT_LIST_COLUMNS)
            .order("created_at", SortDirection::Desc)
            .execute()
            .await?;
        decode_rows(rows)
    }

    /// The student row owned by a user account, if any.
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Student>, BackendError> {
        let row = self
            .backend
            .from("students")
            .select(STUDENT_FIND_COLUMNS)
            .eq("user_id", user_id)
            .maybe_single()
            .await?;
        row.map(decode_row).transpose()
    }

    /// Atomic account + student creation. The procedure creates the
    /// `users_app` row and the `students` row together, so a failed call
    /// never leaves an orphaned half.
    pub async fn create_with_user(&self, input: &StudentCreate) -> Result<Value, BackendError> {
        self.backend
            .rpc(
                "create_student_with_user",
                json!({
                    "p_email": input.email,
                    "p_password": input.password,
                    "p_full_name": input.full_name,
                    "p_student_code": input.student_code,
                    "p_major": input.major,
                    "p_semester": input.semester,
                }),
            )
            .await
    }

    /// Atomic account + student update. Absent fields are passed as null;
    /// the procedure interprets null as "no change".
    pub async fn update_with_user(
        &self,
        user_id: Uuid,
        patch: &StudentUpdate,
    ) -> Result<(), BackendError> {
        self.backend
            .rpc(
                "update_user_and_student",
                json!({
                    "p_user_id": user_id,
                    "p_email": patch.email,
                    "p_full_name": patch.full_name,
                    "p_password": patch.password,
                    "p_student_code": patch.student_code,
                    "p_major": patch.major,
                    "p_semester": patch.semester,
                }),
            )
            .await?;
        Ok(())
    }

    /// Deletes the student row only; the associated `users_app` row stays.
    pub async fn remove(&self, id: Uuid) -> Result<(), BackendError> {
        self.backend.from("students").delete().eq("id", id).execute().await
    }
}
