use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Plumbing,
    Electrical,
    Furniture,
    Cleanliness,
    Appliance,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Resolved,
}

impl MaintenanceStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(MaintenanceStatus::Open),
            "in-progress" => Some(MaintenanceStatus::InProgress),
            "resolved" => Some(MaintenanceStatus::Resolved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MaintenanceRequest {
    pub id: String,
    pub room_id: String,
    pub reported_by: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub status: MaintenanceStatus,
    pub priority: MaintenancePriority,
    pub images: Json<Vec<String>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewMaintenanceParams {
    pub room_id: String,
    pub reported_by: String,
    pub description: String,
    pub kind: MaintenanceKind,
    pub priority: MaintenancePriority,
    pub images: Vec<String>,
}

impl MaintenanceRequest {
    pub fn new(params: NewMaintenanceParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_id: params.room_id,
            reported_by: params.reported_by,
            description: params.description,
            kind: params.kind,
            status: MaintenanceStatus::Open,
            priority: params.priority,
            images: Json(params.images),
            resolved_at: None,
            notes: None,
            created_at: Utc::now(),
        }
    }
}
