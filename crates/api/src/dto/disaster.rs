use chrono::SecondsFormat;
use relief_domain::{AuditEntry, Disaster};
use serde::{Deserialize, Serialize};

/// Response DTO for a disaster record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterResponse {
    pub id: i64,
    pub title: String,
    pub location_name: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub owner_id: String,
    pub created_at: String,
    pub audit_trail: Vec<AuditEntry>,
}

impl DisasterResponse {
    pub fn from_disaster(disaster: Disaster) -> Self {
        Self {
            id: disaster.id.unwrap_or(0),
            title: disaster.title.to_string(),
            location_name: disaster.location_name.as_ref().map(|s| s.to_string()),
            description: disaster.description.as_ref().map(|s| s.to_string()),
            tags: disaster.tags,
            owner_id: disaster.owner_id.to_string(),
            created_at: disaster
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            audit_trail: disaster.audit_trail,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDisastersQuery {
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
