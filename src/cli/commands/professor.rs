use clap::Subcommand;
use uuid::Uuid;

use crate::cli::{utils, OutputFormat};
use crate::controllers::ProfessorController;

#[derive(Subcommand)]
pub enum ProfessorCommands {
    #[command(about = "List professors with account info")]
    List,

    #[command(about = "Create a professor (and its user account) from stdin JSON")]
    Create,

    #[command(about = "Update a professor and its user account from stdin JSON")]
    Update {
        #[arg(help = "User ID owning the professor record")]
        user_id: Uuid,
    },

    #[command(about = "Delete a professor row (the user account stays)")]
    Remove {
        #[arg(help = "Professor ID")]
        id: Uuid,
    },
}

pub async fn handle(cmd: ProfessorCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let controller = ProfessorController::new(super::connect_backend()?);

    match cmd {
        ProfessorCommands::List => {
            let professors = controller.list().await?;
            utils::output_rows(&output_format, "professors", &professors, |professor| {
                let name = professor
                    .user
                    .as_ref()
                    .map(|u| u.full_name.as_str())
                    .unwrap_or("-");
                format!(
                    "{}  {}  {} ({})",
                    professor.id, name, professor.academic_title, professor.department
                )
            })
        }
        ProfessorCommands::Create => {
            let input = utils::read_json_stdin()?;
            let created = controller.create(&input).await?;
            utils::output_success(
                &output_format,
                "Created professor",
                Some(serde_json::json!({ "professor": created })),
            )
        }
        ProfessorCommands::Update { user_id } => {
            let patch = utils::read_json_stdin()?;
            controller.update(user_id, &patch).await?;
            utils::output_success(&output_format, "Updated professor", None)
        }
        ProfessorCommands::Remove { id } => {
            controller.remove(id).await?;
            utils::output_success(&output_format, &format!("Removed professor {}", id), None)
        }
    }
}
