use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role strings exactly as the backend stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "profesor")]
    Professor,
    #[serde(rename = "estudiante")]
    Student,
}

/// User projection embedded in course and enrollment listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

/// Narrower projection used where only the display name is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserName {
    pub id: Uuid,
    pub full_name: String,
}

/// User projection embedded in student and professor listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}
