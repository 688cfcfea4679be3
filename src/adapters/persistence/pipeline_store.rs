//! Pipeline configuration file: `agent_task_config.json`.
//!
//! Read at startup when present (silently defaults otherwise), written by
//! the explicit save action. The stored type has no credential field, so
//! the API key cannot end up on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::domain::{CrewDefinition, DomainError};

/// Default file name, next to the working directory.
pub const PIPELINE_CONFIG_FILE: &str = "agent_task_config.json";

/// Persisted pipeline definition: the crew roster/tasks plus the default
/// sampling temperature offered in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub crew: CrewDefinition,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            crew: CrewDefinition::default(),
            temperature: default_temperature(),
        }
    }
}

/// JSON file-based pipeline config storage.
pub struct PipelineStore {
    path: PathBuf,
}

impl PipelineStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the stored pipeline. Missing file means "use the defaults";
    /// unreadable content is reported and also falls back to defaults.
    pub async fn load(&self) -> PipelineConfig {
        match fs::read_to_string(&self.path).await {
            Ok(s) => match serde_json::from_str::<PipelineConfig>(&s) {
                Ok(cfg) => {
                    info!(path = %self.path.display(), "loaded pipeline configuration");
                    cfg
                }
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "pipeline config unreadable, using defaults");
                    PipelineConfig::default()
                }
            },
            Err(_) => PipelineConfig::default(),
        }
    }

    /// Atomic save using the write-replace pattern:
    /// temp file, flush to disk, rename over the target.
    pub async fn save(&self, config: &PipelineConfig) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| DomainError::Config(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Config(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Config(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Config(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Config(format!("atomic rename failed: {}", e)))?;

        info!(path = %self.path.display(), "pipeline configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = PipelineStore::new(dir.path().join(PIPELINE_CONFIG_FILE));

        let mut config = PipelineConfig::default();
        config.temperature = 0.3;
        config.crew.tasks.truncate(2);
        store.save(&config).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.temperature, 0.3);
        assert_eq!(loaded.crew.tasks.len(), 2);
        assert_eq!(loaded.crew.agents.len(), 3);
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PipelineStore::new(dir.path().join(PIPELINE_CONFIG_FILE));

        let loaded = store.load().await;
        assert_eq!(loaded.crew.tasks.len(), 3);
        assert_eq!(loaded.temperature, 0.7);
    }

    #[tokio::test]
    async fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PIPELINE_CONFIG_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let loaded = PipelineStore::new(&path).load().await;
        assert_eq!(loaded.crew.tasks.len(), 3);
    }
}
