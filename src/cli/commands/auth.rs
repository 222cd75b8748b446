use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::session::{AuthProvider, AuthState, SessionStore};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Sign in against the backend")]
    Login {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Clear the persisted session")]
    Logout,

    #[command(about = "Show current session status")]
    Status,

    #[command(about = "Show the signed-in user")]
    Whoami,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut provider = AuthProvider::new(super::connect_backend()?, SessionStore::open_default()?);
    provider.initialize();

    match cmd {
        AuthCommands::Login { email, password } => {
            let password = match password {
                Some(password) => password,
                None => read_password()?,
            };
            let session = provider.sign_in(&email, &password).await?;
            utils::output_success(
                &output_format,
                &format!("Signed in as {}", email),
                Some(json!({ "user": session })),
            )
        }
        AuthCommands::Logout => {
            provider.sign_out()?;
            utils::output_success(&output_format, "Signed out", None)
        }
        AuthCommands::Status => {
            let message = match provider.state() {
                AuthState::Authenticated(user) => format!(
                    "Authenticated as {}",
                    user.email.as_deref().unwrap_or("<unknown>")
                ),
                _ => "Anonymous".to_string(),
            };
            utils::output_success(
                &output_format,
                &message,
                Some(json!({ "authenticated": provider.is_authenticated() })),
            )
        }
        AuthCommands::Whoami => match provider.current_user() {
            Some(user) => utils::output_success(
                &output_format,
                user.full_name.as_deref().unwrap_or("<unnamed>"),
                Some(json!({ "user": user })),
            ),
            None => anyhow::bail!("not signed in"),
        },
    }
}

fn read_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end().to_string())
}
