use crate::store::atomic_writer::AtomicWriter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use powerup_core::{PowerUpError, PowerUpResult, Scope, ScopedStore, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

pub const FORMAT_VERSION: u32 = 1;

/// Metadata written alongside the stored values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// ID of the instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl StoreMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// On-disk layout: namespace (`<scope>:<visibility>`) → key → value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: StoreMetadata,
    #[serde(default)]
    pub data: BTreeMap<String, BTreeMap<String, String>>,
}

impl JsonEnvelope {
    pub fn empty(instance_id: Uuid) -> Self {
        Self {
            version: FORMAT_VERSION,
            metadata: StoreMetadata::new(instance_id),
            data: BTreeMap::new(),
        }
    }

    pub fn to_json_string(&self) -> PowerUpResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PowerUpError::Serialization(e.to_string()))
    }
}

fn namespace(scope: &Scope, visibility: Visibility) -> String {
    format!("{}:{}", scope, visibility.as_str())
}

/// Scoped key-value store persisted to a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_instance_id(path, Uuid::new_v4())
    }

    /// Create a store with a specific instance ID
    /// (useful for testing or coordinating across instances)
    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn read_envelope(&self) -> PowerUpResult<JsonEnvelope> {
        if !self.exists().await {
            return Ok(JsonEnvelope::empty(self.instance_id));
        }

        let bytes = AtomicWriter::read_all(&self.path).await.map_err(|e| {
            PowerUpError::StoreUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| PowerUpError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(PowerUpError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        Ok(envelope)
    }
}

#[async_trait]
impl ScopedStore for JsonFileStore {
    async fn get(
        &self,
        scope: &Scope,
        visibility: Visibility,
        key: &str,
    ) -> PowerUpResult<Option<String>> {
        let envelope = self.read_envelope().await?;
        Ok(envelope
            .data
            .get(&namespace(scope, visibility))
            .and_then(|values| values.get(key))
            .cloned())
    }

    async fn set(
        &self,
        scope: &Scope,
        visibility: Visibility,
        key: &str,
        value: &str,
    ) -> PowerUpResult<()> {
        // Read-modify-write must not interleave with another set on this store
        let _guard = self.write_lock.lock().await;

        let mut envelope = self.read_envelope().await?;
        envelope
            .data
            .entry(namespace(scope, visibility))
            .or_default()
            .insert(key.to_string(), value.to_string());
        envelope.metadata = StoreMetadata::new(self.instance_id);

        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| PowerUpError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes)
            .await
            .map_err(|e| {
                PowerUpError::StoreUnavailable(format!("{}: {}", self.path.display(), e))
            })?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
