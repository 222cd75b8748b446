use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub credits: i32,
    #[serde(default)]
    pub professor_id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Present only in listings that expand the professor relation.
    #[serde(default)]
    pub professor: Option<CourseProfessor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProfessor {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub user: Option<UserRef>,
}
