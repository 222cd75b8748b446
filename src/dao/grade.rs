use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::backend::{Backend, BackendError};

use super::decode_row;

#[derive(Debug, Deserialize)]
struct GradeId {
    id: Uuid,
}

#[derive(Clone)]
pub struct GradeDao {
    backend: Backend,
}

impl GradeDao {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Update the enrollment's grade if one exists, insert it otherwise.
    ///
    /// The lookup and the write are two separate round trips: two concurrent
    /// calls for the same enrollment can both observe "absent" and both
    /// insert. The backend schema is the only backstop against the duplicate.
    pub async fn upsert_by_enrollment(
        &self,
        enrollment_id: Uuid,
        value: f64,
        note: Option<String>,
    ) -> Result<(), BackendError> {
        let existing = self
            .backend
            .from("grades")
            .select("id")
            .eq("enrollment_id", enrollment_id)
            .maybe_single()
            .await?;

        match existing {
            Some(row) => {
                let GradeId { id } = decode_row(row)?;
                self.backend
                    .from("grades")
                    .update(json!({ "value": value, "note": note }))
                    .eq("id", id)
                    .execute()
                    .await?;
            }
            None => {
                self.backend
                    .from("grades")
                    .insert(json!({
                        "enrollment_id": enrollment_id,
                        "value": value,
                        "note": note,
                    }))
                    .execute()
                    .await?;
            }
        }
        Ok(())
    }
}
