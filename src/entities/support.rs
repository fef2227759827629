use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl HelpRequest {
    pub fn new(user_id: Uuid, reason: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            reason,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssueReport {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub image_base64: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl IssueReport {
    pub fn new(user_id: Uuid, description: String, image_base64: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            image_base64,
            timestamp: Utc::now(),
        }
    }
}
