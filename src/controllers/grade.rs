use uuid::Uuid;

use crate::backend::Backend;
use crate::dao::GradeDao;
use crate::error::AppError;

#[derive(Clone)]
pub struct GradeController {
    dao: GradeDao,
}

impl GradeController {
    pub fn new(backend: Backend) -> Self {
        Self {
            dao: GradeDao::new(backend),
        }
    }

    pub async fn set(
        &self,
        enrollment_id: Uuid,
        value: f64,
        note: Option<String>,
    ) -> Result<(), AppError> {
        Ok(self.dao.upsert_by_enrollment(enrollment_id, value, note).await?)
    }
}
