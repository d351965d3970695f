//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration and apply command-line overrides
//! - Validate the result before anything else starts
//! - Open the document store

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{load_config, validate_config, ConfigError, StoreConfig, TodoConfig};
use crate::store::{MemoryStore, StoreResult, TodoStore};

/// Settings given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub store_path: Option<PathBuf>,
}

/// Load (or default) the configuration, apply overrides, and validate.
pub fn prepare_config(path: Option<&Path>, overrides: Overrides) -> Result<TodoConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => TodoConfig::default(),
    };

    if let Some(port) = overrides.port {
        config = config.with_port(port);
    }
    if let Some(store_path) = overrides.store_path {
        config = config.with_store_path(store_path);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Open the configured store.
pub async fn open_store(config: &StoreConfig) -> StoreResult<Arc<dyn TodoStore>> {
    match &config.path {
        Some(path) => Ok(Arc::new(MemoryStore::open(path).await?)),
        None => {
            tracing::warn!("No store path configured; data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn overrides_apply_without_file() {
        let config = prepare_config(
            None,
            Overrides {
                port: Some(4100),
                store_path: Some(PathBuf::from("todo.json")),
            },
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:4100");
        assert_eq!(config.store.path, Some(PathBuf::from("todo.json")));
    }

    #[test]
    fn invalid_override_fails_validation() {
        let err = prepare_config(
            None,
            Overrides {
                port: None,
                store_path: Some(PathBuf::new()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[tokio::test]
    async fn in_memory_store_without_path() {
        let store = open_store(&StoreConfig::default()).await.unwrap();
        store.insert_items(vec![Item::new("x")]).await.unwrap();
        assert_eq!(store.find_items().await.unwrap().len(), 1);
    }
}
