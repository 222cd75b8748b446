use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    #[serde(default)]
    pub enrollment_id: Option<Uuid>,
    pub value: f64,
    #[serde(default)]
    pub note: Option<String>,
}
