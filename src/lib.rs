//! # Fleetline Backend
//!
//! Transit fleet tracking and trip matching engine.
//!
//! This crate tracks a fleet of vehicles operating on bidirectional routes
//! composed of ordered stops, matches passenger stop-to-stop queries against
//! scheduled vehicle shifts within a rolling future window, and pushes live
//! position updates to connected observers. The backend exposes a REST API
//! plus SSE channels via Axum.
//!
//! ## Features
//!
//! - **Route Catalog**: routes with automatically derived reverse companions
//! - **Shift Roster**: per-vehicle schedules with independent directional legs
//! - **Matching**: temporal eligibility of shift legs for passenger queries
//! - **Fleet State**: live position, capacity, and alarm tracking
//! - **Live Fan-out**: broadcast channels pushing position updates to observers
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: projection types returned by the query services
//! - [`models`]: domain types and calendar parsing
//! - [`store`]: document store traits, in-memory backend, and configuration
//! - [`services`]: business logic (catalog, roster, matcher, search, fleet, hub)
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod models;
pub mod store;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

// ==================== Store Singleton ====================

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

use store::{FullStore, StoreFactory, StoreType};

/// Global store instance initialized once per process.
static STORE: OnceLock<Arc<dyn FullStore>> = OnceLock::new();

/// Initialize the global store singleton for the selected backend.
pub fn init_store() -> Result<()> {
    if STORE.get().is_some() {
        return Ok(());
    }

    let store = StoreFactory::create(StoreType::from_env());
    let _ = STORE.set(store);
    Ok(())
}

/// Get a reference to the global store instance.
pub fn get_store() -> Result<&'static Arc<dyn FullStore>> {
    if STORE.get().is_none() {
        let _ = init_store();
    }

    STORE
        .get()
        .context("Store not initialized. Call init_store() first.")
}
