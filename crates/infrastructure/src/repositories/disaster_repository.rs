use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use relief_application::ports::DisasterRepository;
use relief_domain::{AuditEntry, Disaster, DomainError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type DisasterRow = (
    i64,
    String,
    Option<String>,
    Option<String>,
    String,
    String,
    String,
    String,
);

const SELECT_COLUMNS: &str =
    "SELECT id, title, location_name, description, tags, owner_id, created_at, audit_trail
     FROM disasters";

pub struct SqliteDisasterRepository {
    pool: SqlitePool,
}

impl SqliteDisasterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_disaster(row: DisasterRow) -> Result<Disaster, DomainError> {
        let (id, title, location_name, description, tags, owner_id, created_at, audit_trail) = row;

        let tags: Vec<String> = serde_json::from_str(&tags).map_err(|e| {
            DomainError::DatabaseError(format!("Corrupt tags for disaster {}: {}", id, e))
        })?;
        let audit_trail: Vec<AuditEntry> = serde_json::from_str(&audit_trail).map_err(|e| {
            DomainError::DatabaseError(format!("Corrupt audit trail for disaster {}: {}", id, e))
        })?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| {
                DomainError::DatabaseError(format!("Corrupt created_at for disaster {}: {}", id, e))
            })?
            .with_timezone(&Utc);

        Ok(Disaster {
            id: Some(id),
            title: Arc::from(title.as_str()),
            location_name: location_name.map(|s| Arc::from(s.as_str())),
            description: description.map(|s| Arc::from(s.as_str())),
            tags,
            owner_id: Arc::from(owner_id.as_str()),
            created_at,
            audit_trail,
        })
    }

    fn encode_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, DomainError> {
        serde_json::to_string(value).map_err(|e| DomainError::Serialization(e.to_string()))
    }
}

/// Fixed-width UTC timestamps so `ORDER BY created_at` is chronological.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait]
impl DisasterRepository for SqliteDisasterRepository {
    #[instrument(skip(self, disaster), fields(title = %disaster.title))]
    async fn create(&self, disaster: Disaster) -> Result<Disaster, DomainError> {
        let tags = Self::encode_json(&disaster.tags)?;
        let audit_trail = Self::encode_json(&disaster.audit_trail)?;

        let result = sqlx::query(
            "INSERT INTO disasters
                (title, location_name, description, tags, owner_id, created_at, audit_trail)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(disaster.title.as_ref())
        .bind(disaster.location_name.as_deref())
        .bind(disaster.description.as_deref())
        .bind(&tags)
        .bind(disaster.owner_id.as_ref())
        .bind(format_timestamp(disaster.created_at))
        .bind(&audit_trail)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create disaster");
            DomainError::DatabaseError(e.to_string())
        })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id).await?.ok_or_else(|| {
            DomainError::DatabaseError("Failed to fetch created disaster".to_string())
        })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Disaster>, DomainError> {
        let row = sqlx::query_as::<_, DisasterRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query disaster by id");
                DomainError::DatabaseError(e.to_string())
            })?;

        row.map(Self::row_to_disaster).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, tag: Option<&str>) -> Result<Vec<Disaster>, DomainError> {
        let rows = match tag {
            Some(tag) => {
                sqlx::query_as::<_, DisasterRow>(&format!(
                    "{SELECT_COLUMNS}
                     WHERE EXISTS (SELECT 1 FROM json_each(disasters.tags) WHERE json_each.value = ?)
                     ORDER BY created_at DESC, id DESC"
                ))
                .bind(tag)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, DisasterRow>(&format!(
                    "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            error!(error = %e, "Failed to list disasters");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(Self::row_to_disaster).collect()
    }

    #[instrument(skip(self, disaster), fields(id = ?disaster.id))]
    async fn update(&self, disaster: Disaster) -> Result<Disaster, DomainError> {
        let id = disaster
            .id
            .ok_or_else(|| DomainError::InvalidInput("Disaster has no id".to_string()))?;
        let tags = Self::encode_json(&disaster.tags)?;
        let audit_trail = Self::encode_json(&disaster.audit_trail)?;

        let result = sqlx::query(
            "UPDATE disasters
             SET title = ?, location_name = ?, description = ?, tags = ?, audit_trail = ?
             WHERE id = ?",
        )
        .bind(disaster.title.as_ref())
        .bind(disaster.location_name.as_deref())
        .bind(disaster.description.as_deref())
        .bind(&tags)
        .bind(&audit_trail)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update disaster");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DisasterNotFound(id));
        }

        self.get_by_id(id)
            .await?
            .ok_or(DomainError::DisasterNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM disasters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete disaster");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DisasterNotFound(id));
        }

        Ok(())
    }
}
