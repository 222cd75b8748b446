pub mod auth;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod professor;
pub mod report;
pub mod student;

use crate::backend::Backend;
use crate::config::AppConfig;

pub(crate) fn connect_backend() -> anyhow::Result<Backend> {
    let config = AppConfig::from_env()?;
    Ok(Backend::connect(&config)?)
}
