use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::controllers::ReportController;

#[derive(Subcommand)]
pub enum ReportCommands {
    #[command(about = "Courses with enrollment counts and professor identity")]
    Courses,
}

pub async fn handle(cmd: ReportCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let controller = ReportController::new(super::connect_backend()?);

    match cmd {
        ReportCommands::Courses => {
            let rows = controller.courses().await?;
            utils::output_rows(&output_format, "courses", &rows, |row| {
                format!(
                    "{}  {} ({} cr.)  prof: {}  students: {}",
                    row.course_id,
                    row.name,
                    row.credits,
                    row.professor_name.as_deref().unwrap_or("-"),
                    row.students_count
                )
            })
        }
    }
}
