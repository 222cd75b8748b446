use uuid::Uuid;

use crate::backend::Backend;
use crate::dao::EnrollmentDao;
use crate::error::AppError;
use crate::models::Enrollment;

/// Pure passthrough: enrollments carry no user-entered fields to validate.
#[derive(Clone)]
pub struct EnrollmentController {
    dao: EnrollmentDao,
}

impl EnrollmentController {
    pub fn new(backend: Backend) -> Self {
        Self {
            dao: EnrollmentDao::new(backend),
        }
    }

    pub async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Enrollment>, AppError> {
        Ok(self.dao.list_by_course(course_id).await?)
    }

    pub async fn list_by_student(&self, student_id: Uuid) -> Result<Vec<Enrollment>, AppError> {
        Ok(self.dao.list_by_student(student_id).await?)
    }

    pub async fn find(
        &self,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, AppError> {
        Ok(self.dao.find(student_id, course_id).await?)
    }

    pub async fn enroll(&self, student_id: Uuid, course_id: Uuid) -> Result<Uuid, AppError> {
        Ok(self.dao.enroll(student_id, course_id).await?)
    }

    pub async fn unenroll(&self, student_id: Uuid, course_id: Uuid) -> Result<(), AppError> {
        Ok(self.dao.unenroll(student_id, course_id).await?)
    }
}
