use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::{Backend, BackendError, SortDirection};
use crate::models::Professor;
use crate::schemas::{ProfessorCreate, ProfessorUpdate};

use super::{decode_row, decode_rows};

const PROFESSOR_LIST_COLUMNS: &str =
    "id,user_id,department,academic_title,created_at, user:users_app(id,email,full_name,role)";
const PROFESSOR_FIND_COLUMNS: &str = "id,user_id,department,academic_title";

#[derive(Clone)]
pub struct ProfessorDao {
    backend: Backend,
}

impl ProfessorDao {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Professor>, BackendError> {
        let rows = self
            .backend
            .from("professors")
            .select(PROFESSOR_LIST_COLUMNS)
            .order("created_at", SortDirection::Desc)
            .execute()
            .await?;
        decode_rows(rows)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Professor>, BackendError> {
        let row = self
            .backend
            .from("professors")
            .select(PROFESSOR_FIND_COLUMNS)
            .eq("user_id", user_id)
            .maybe_single()
            .await?;
        row.map(decode_row).transpose()
    }

    /// Atomic account + professor creation through the backend procedure.
    pub async fn create_with_user(&self, input: &ProfessorCreate) -> Result<Value, BackendError> {
        self.backend
            .rpc(
                "create_professor_with_user",
                json!({
                    "p_email": input.email,
                    "p_password": input.password,
                    "p_full_name": input.full_name,
                    "p_department": input.department,
                    "p_academic_title": input.academic_title,
                }),
            )
            .await
    }

    /// Atomic account + professor update; null parameters mean "no change".
    pub async fn update_with_user(
        &self,
        user_id: Uuid,
        patch: &ProfessorUpdate,
    ) -> Result<(), BackendError> {
        self.backend
            .rpc(
                "update_user_and_professor",
                json!({
                    "p_user_id": user_id,
                    "p_email": patch.email,
                    "p_full_name": patch.full_name,
                    "p_password": patch.password,
                    "p_department": patch.department,
                    "p_academic_title": patch.academic_title,
                }),
            )
            .await?;
        Ok(())
    }

    /// Deletes the professor row only; the associated `users_app` row stays.
    pub async fn remove(&self, id: Uuid) -> Result<(), BackendError> {
        self.backend.from("professors").delete().eq("id", id).execute().await
    }
}
