use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub department: String,
    pub academic_title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}
