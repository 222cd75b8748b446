use serde_json::Value;
use uuid::Uuid;

use crate::backend::Backend;
use crate::dao::ProfessorDao;
use crate::error::AppError;
use crate::models::Professor;
use crate::schemas::{ProfessorCreate, ProfessorUpdate};

#[derive(Clone)]
pub struct ProfessorController {
    dao: ProfessorDao,
}

impl ProfessorController {
    pub fn new(backend: Backend) -> Self {
        Self {
            dao: ProfessorDao::new(backend),
        }
    }

    pub async fn list(&self) -> Result<Vec<Professor>, AppError> {
        Ok(self.dao.list().await?)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Professor>, AppError> {
        Ok(self.dao.find_by_user_id(user_id).await?)
    }

    pub async fn create(&self, input: &Value) -> Result<Value, AppError> {
        let parsed = ProfessorCreate::parse(input)?;
        Ok(self.dao.create_with_user(&parsed).await?)
    }

    pub async fn update(&self, user_id: Uuid, patch: &Value) -> Result<(), AppError> {
        let parsed = ProfessorUpdate::parse(patch)?;
        Ok(self.dao.update_with_user(user_id, &parsed).await?)
    }

    /// Deletes the professor only; the underlying user account stays until
    /// a cleanup policy says otherwise.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.dao.remove(id).await?)
    }
}
