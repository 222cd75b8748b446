use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

/// Normalized layout: account data lives in `users_app`, student-specific
/// fields in `students`, joined one-to-one through `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub user_id: Uuid,
    pub student_code: String,
    pub major: String,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}
