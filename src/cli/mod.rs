pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uniadmin")]
#[command(about = "UniAdmin CLI - university administration over a hosted backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Course management")]
    Course {
        #[command(subcommand)]
        cmd: commands::course::CourseCommands,
    },

    #[command(about = "Student management")]
    Student {
        #[command(subcommand)]
        cmd: commands::student::StudentCommands,
    },

    #[command(about = "Professor management")]
    Professor {
        #[command(subcommand)]
        cmd: commands::professor::ProfessorCommands,
    },

    #[command(about = "Enrollment operations")]
    Enrollment {
        #[command(subcommand)]
        cmd: commands::enrollment::EnrollmentCommands,
    },

    #[command(about = "Grade recording")]
    Grade {
        #[command(subcommand)]
        cmd: commands::grade::GradeCommands,
    },

    #[command(about = "Course reports")]
    Report {
        #[command(subcommand)]
        cmd: commands::report::ReportCommands,
    },
}

#[derive(Debug, Clone)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Course { cmd } => commands::course::handle(cmd, output_format).await,
        Commands::Student { cmd } => commands::student::handle(cmd, output_format).await,
        Commands::Professor { cmd } => commands::professor::handle(cmd, output_format).await,
        Commands::Enrollment { cmd } => commands::enrollment::handle(cmd, output_format).await,
        Commands::Grade { cmd } => commands::grade::handle(cmd, output_format).await,
        Commands::Report { cmd } => commands::report::handle(cmd, output_format).await,
    }
}
