//! Store factory for dependency injection.
//!
//! This module provides utilities for creating store instances based on
//! runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "local-store")]
use super::memory::LocalStore;
use super::traits::FullStore;

/// Store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// In-memory local store
    Local,
}

impl FromStr for StoreType {
    type Err = String;

    /// Parse store type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("local", "memory")
    ///
    /// # Returns
    /// * `Ok(StoreType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

impl StoreType {
    /// Get store type from the `STORE_TYPE` environment variable, defaulting
    /// to the local in-memory backend.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("STORE_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }
        Self::Local
    }
}

/// Factory for creating store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store for the given backend type.
    #[cfg(feature = "local-store")]
    pub fn create(store_type: StoreType) -> Arc<dyn FullStore> {
        match store_type {
            StoreType::Local => Self::create_local(),
        }
    }

    /// Create an in-memory local store.
    #[cfg(feature = "local-store")]
    pub fn create_local() -> Arc<dyn FullStore> {
        Arc::new(LocalStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_type_parsing() {
        assert_eq!("local".parse::<StoreType>().unwrap(), StoreType::Local);
        assert_eq!("MEMORY".parse::<StoreType>().unwrap(), StoreType::Local);
        assert!("firestore".parse::<StoreType>().is_err());
    }

    #[cfg(feature = "local-store")]
    #[tokio::test]
    async fn test_factory_creates_healthy_local_store() {
        use crate::store::traits::HealthCheck;

        let store = StoreFactory::create(StoreType::Local);
        assert!(store.health_check().await.unwrap());
    }
}
