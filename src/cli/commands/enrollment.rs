use clap::Subcommand;
use uuid::Uuid;

use crate::cli::{utils, OutputFormat};
use crate::controllers::EnrollmentController;
use crate::models::Enrollment;

#[derive(Subcommand)]
pub enum EnrollmentCommands {
    #[command(about = "List a course's roster, oldest enrollment first")]
    ListByCourse {
        #[arg(help = "Course ID")]
        course_id: Uuid,
    },

    #[command(about = "List everything a student is enrolled in")]
    ListByStudent {
        #[arg(help = "Student ID")]
        student_id: Uuid,
    },

    #[command(about = "Look up one (student, course) enrollment")]
    Find {
        #[arg(help = "Student ID")]
        student_id: Uuid,
        #[arg(help = "Course ID")]
        course_id: Uuid,
    },

    #[command(about = "Enroll a student in a course")]
    Enroll {
        #[arg(help = "Student ID")]
        student_id: Uuid,
        #[arg(help = "Course ID")]
        course_id: Uuid,
    },

    #[command(about = "Remove a student from a course")]
    Unenroll {
        #[arg(help = "Student ID")]
        student_id: Uuid,
        #[arg(help = "Course ID")]
        course_id: Uuid,
    },
}

fn format_enrollment(enrollment: &Enrollment) -> String {
    let grade = enrollment
        .grades
        .first()
        .map(|g| format!("{}", g.value))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  student: {}  course: {}  grade: {}",
        enrollment.id, enrollment.student_id, enrollment.course_id, grade
    )
}

pub async fn handle(cmd: EnrollmentCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let controller = EnrollmentController::new(super::connect_backend()?);

    match cmd {
        EnrollmentCommands::ListByCourse { course_id } => {
            let enrollments = controller.list_by_course(course_id).await?;
            utils::output_rows(&output_format, "enrollments", &enrollments, format_enrollment)
        }
        EnrollmentCommands::ListByStudent { student_id } => {
            let enrollments = controller.list_by_student(student_id).await?;
            utils::output_rows(&output_format, "enrollments", &enrollments, format_enrollment)
        }
        EnrollmentCommands::Find {
            student_id,
            course_id,
        } => match controller.find(student_id, course_id).await? {
            Some(enrollment) => utils::output_success(
                &output_format,
                &format!("Enrollment {}", enrollment.id),
                Some(serde_json::json!({ "enrollment": enrollment })),
            ),
            None => utils::output_success(
                &output_format,
                "Not enrolled",
                Some(serde_json::json!({ "enrollment": null })),
            ),
        },
        EnrollmentCommands::Enroll {
            student_id,
            course_id,
        } => {
            let id = controller.enroll(student_id, course_id).await?;
            utils::output_success(
                &output_format,
                &format!("Enrolled ({})", id),
                Some(serde_json::json!({ "id": id })),
            )
        }
        EnrollmentCommands::Unenroll {
            student_id,
            course_id,
        } => {
            controller.unenroll(student_id, course_id).await?;
            utils::output_success(&output_format, "Unenrolled", None)
        }
    }
}
