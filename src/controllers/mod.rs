//! Controllers: validate input with the entity's schema, delegate to the
//! DAO, and propagate errors unchanged. No other business rules live here.

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod professor;
pub mod report;
pub mod student;

pub use course::CourseController;
pub use enrollment::EnrollmentController;
pub use grade::GradeController;
pub use professor::ProfessorController;
pub use report::ReportController;
pub use student::StudentController;
