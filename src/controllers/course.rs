use serde_json::Value;
use uuid::Uuid;

use crate::backend::Backend;
use crate::dao::CourseDao;
use crate::error::AppError;
use crate::models::Course;
use crate::schemas::{CourseCreate, CourseUpdate};

#[derive(Clone)]
pub struct CourseController {
    dao: CourseDao,
}

impl CourseController {
    pub fn new(backend: Backend) -> Self {
        Self {
            dao: CourseDao::new(backend),
        }
    }

    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.dao.list().await?)
    }

    /// Validation failures return before any remote call is made.
    pub async fn create(&self, input: &Value) -> Result<Course, AppError> {
        let parsed = CourseCreate::parse(input)?;
        Ok(self.dao.create(parsed).await?)
    }

    pub async fn update(&self, id: Uuid, patch: &Value) -> Result<Course, AppError> {
        let parsed = CourseUpdate::parse(patch)?;
        Ok(self.dao.update(id, parsed).await?)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.dao.remove(id).await?)
    }
}
