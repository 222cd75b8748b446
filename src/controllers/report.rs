use crate::backend::Backend;
use crate::dao::ReportDao;
use crate::error::AppError;
use crate::models::CourseCountRow;

#[derive(Clone)]
pub struct ReportController {
    dao: ReportDao,
}

impl ReportController {
    pub fn new(backend: Backend) -> Self {
        Self {
            dao: ReportDao::new(backend),
        }
    }

    pub async fn courses(&self) -> Result<Vec<CourseCountRow>, AppError> {
        Ok(self.dao.courses_with_counts().await?)
    }
}
