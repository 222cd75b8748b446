use serde_json::Value;
use uuid::Uuid;

use crate::backend::Backend;
use crate::dao::StudentDao;
use crate::error::AppError;
use crate::models::Student;
use crate::schemas::{StudentCreate, StudentUpdate};

#[derive(Clone)]
pub struct StudentController {
    dao: StudentDao,
}

impl StudentController {
    pub fn new(backend: Backend) -> Self {
        Self {
            dao: StudentDao::new(backend),
        }
    }

    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.dao.list().await?)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Student>, AppError> {
        Ok(self.dao.find_by_user_id(user_id).await?)
    }

    pub async fn create(&self, input: &Value) -> Result<Value, AppError> {
        let parsed = StudentCreate::parse(input)?;
        Ok(self.dao.create_with_user(&parsed).await?)
    }

    /// Updates are keyed by the user id, since the procedure touches both
    /// the account and the student row.
    pub async fn update(&self, user_id: Uuid, patch: &Value) -> Result<(), AppError> {
        let parsed = StudentUpdate::parse(patch)?;
        Ok(self.dao.update_with_user(user_id, &parsed).await?)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.dao.remove(id).await?)
    }
}
