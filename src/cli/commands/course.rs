use clap::Subcommand;
use uuid::Uuid;

use crate::cli::{utils, OutputFormat};
use crate::controllers::CourseController;

#[derive(Subcommand)]
pub enum CourseCommands {
    #[command(about = "List courses with professor info")]
    List,

    #[command(about = "Create a course from stdin JSON")]
    Create,

    #[command(about = "Update a course from stdin JSON")]
    Update {
        #[arg(help = "Course ID")]
        id: Uuid,
    },

    #[command(about = "Delete a course")]
    Remove {
        #[arg(help = "Course ID")]
        id: Uuid,
    },
}

pub async fn handle(cmd: CourseCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let controller = CourseController::new(super::connect_backend()?);

    match cmd {
        CourseCommands::List => {
            let courses = controller.list().await?;
            utils::output_rows(&output_format, "courses", &courses, |course| {
                let professor = course
                    .professor
                    .as_ref()
                    .and_then(|p| p.user.as_ref())
                    .map(|u| u.full_name.as_str())
                    .unwrap_or("-");
                format!(
                    "{}  {} ({} cr.)  prof: {}",
                    course.id, course.name, course.credits, professor
                )
            })
        }
        CourseCommands::Create => {
            let input = utils::read_json_stdin()?;
            let course = controller.create(&input).await?;
            utils::output_success(
                &output_format,
                &format!("Created course {}", course.name),
                Some(serde_json::json!({ "course": course })),
            )
        }
        CourseCommands::Update { id } => {
            let patch = utils::read_json_stdin()?;
            let course = controller.update(id, &patch).await?;
            utils::output_success(
                &output_format,
                &format!("Updated course {}", course.name),
                Some(serde_json::json!({ "course": course })),
            )
        }
        CourseCommands::Remove { id } => {
            controller.remove(id).await?;
            utils::output_success(&output_format, &format!("Removed course {}", id), None)
        }
    }
}
