use clap::Subcommand;
use uuid::Uuid;

use crate::cli::{utils, OutputFormat};
use crate::controllers::StudentController;

#[derive(Subcommand)]
pub enum StudentCommands {
    #[command(about = "List students with account info")]
    List,

    #[command(about = "Create a student (and its user account) from stdin JSON")]
    Create,

    #[command(about = "Update a student and its user account from stdin JSON")]
    Update {
        #[arg(help = "User ID owning the student record")]
        user_id: Uuid,
    },

    #[command(about = "Delete a student row (the user account stays)")]
    Remove {
        #[arg(help = "Student ID")]
        id: Uuid,
    },
}

pub async fn handle(cmd: StudentCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let controller = StudentController::new(super::connect_backend()?);

    match cmd {
        StudentCommands::List => {
            let students = controller.list().await?;
            utils::output_rows(&output_format, "students", &students, |student| {
                let name = student
                    .user
                    .as_ref()
                    .map(|u| u.full_name.as_str())
                    .unwrap_or("-");
                format!(
                    "{}  {}  {} ({})",
                    student.id, student.student_code, name, student.major
                )
            })
        }
        StudentCommands::Create => {
            let input = utils::read_json_stdin()?;
            let created = controller.create(&input).await?;
            utils::output_success(
                &output_format,
                "Created student",
                Some(serde_json::json!({ "student": created })),
            )
        }
        StudentCommands::Update { user_id } => {
            let patch = utils::read_json_stdin()?;
            controller.update(user_id, &patch).await?;
            utils::output_success(&output_format, "Updated student", None)
        }
        StudentCommands::Remove { id } => {
            controller.remove(id).await?;
            utils::output_success(&output_format, &format!("Removed student {}", id), None)
        }
    }
}
