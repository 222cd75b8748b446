use clap::Subcommand;
use uuid::Uuid;

use crate::cli::{utils, OutputFormat};
use crate::controllers::GradeController;

#[derive(Subcommand)]
pub enum GradeCommands {
    #[command(about = "Record or replace the grade for an enrollment")]
    Set {
        #[arg(help = "Enrollment ID")]
        enrollment_id: Uuid,
        #[arg(help = "Grade value (0-10)")]
        value: f64,
        #[arg(long, help = "Optional note")]
        note: Option<String>,
    },
}

pub async fn handle(cmd: GradeCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let controller = GradeController::new(super::connect_backend()?);

    match cmd {
        GradeCommands::Set {
            enrollment_id,
            value,
            note,
        } => {
            controller.set(enrollment_id, value, note).await?;
            utils::output_success(
                &output_format,
                &format!("Grade {} recorded for {}", value, enrollment_id),
                None,
            )
        }
    }
}
