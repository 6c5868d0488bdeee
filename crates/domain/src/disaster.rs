use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::enrichment::Coordinates;
use crate::validators::{validate_description, validate_tags, validate_text_field};

/// Kind of mutation recorded in a disaster's audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(action: AuditAction, user_id: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            action,
            user_id: user_id.to_string(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disaster {
    pub id: Option<i64>,
    pub title: Arc<str>,
    pub location_name: Option<Arc<str>>,
    pub description: Option<Arc<str>>,
    pub tags: Vec<String>,
    pub owner_id: Arc<str>,
    pub created_at: DateTime<Utc>,
    pub audit_trail: Vec<AuditEntry>,
}

impl Disaster {
    /// Builds a freshly reported disaster with its trail seeded by a `create` entry.
    pub fn report(report: NewDisaster, owner_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: Arc::from(report.title.as_str()),
            location_name: report.location_name.as_deref().map(Arc::from),
            description: report.description.as_deref().map(Arc::from),
            tags: normalize_tags(report.tags),
            owner_id: Arc::from(owner_id),
            created_at: now,
            audit_trail: vec![AuditEntry::new(AuditAction::Create, owner_id, now)],
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Collapses tags into a set: trimmed, non-empty, first occurrence wins.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Payload of a disaster report submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewDisaster {
    pub title: String,
    pub location_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// When present, a resource row is recorded alongside the report.
    pub coordinates: Option<Coordinates>,
}

impl NewDisaster {
    pub fn validate(&self) -> Result<(), String> {
        validate_text_field(&self.title, "Title")?;
        if let Some(location) = &self.location_name {
            validate_text_field(location, "Location name")?;
        }
        validate_description(&self.description)?;
        validate_tags(&self.tags)?;
        if let Some(coords) = &self.coordinates {
            coords.validate()?;
        }
        Ok(())
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisasterUpdate {
    pub title: Option<String>,
    pub location_name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl DisasterUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            validate_text_field(title, "Title")?;
        }
        if let Some(location) = &self.location_name {
            validate_text_field(location, "Location name")?;
        }
        validate_description(&self.description)?;
        if let Some(tags) = &self.tags {
            validate_tags(tags)?;
        }
        Ok(())
    }

    /// Applies the update and replaces the audit trail with a single `update` entry.
    pub fn apply_to(self, disaster: &mut Disaster, user_id: &str, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            disaster.title = Arc::from(title.as_str());
        }
        if let Some(location) = self.location_name {
            disaster.location_name = Some(Arc::from(location.as_str()));
        }
        if let Some(description) = self.description {
            disaster.description = Some(Arc::from(description.as_str()));
        }
        if let Some(tags) = self.tags {
            disaster.tags = normalize_tags(tags);
        }
        disaster.audit_trail = vec![AuditEntry::new(AuditAction::Update, user_id, now)];
    }
}
