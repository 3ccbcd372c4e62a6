//! The availability-settings storage boundary.
//!
//! [`SettingsStore`] is the contract the editor drives; the production
//! implementation is the REST [`client::AvailabilityClient`], and
//! [`InMemoryStore`] backs the tests. Load failures are always recoverable
//! (the editor falls back to defaults with a categorized notice); save
//! failures surface the server's message and leave in-memory edits intact.

pub mod client;

use crate::availability::{AvailabilitySettings, BusinessHours, WorkingHours};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Failure loading availability data, categorized for the user notice
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("availability settings not found")]
    NotFound,
    #[error("server error (HTTP {0})")]
    Server(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// The user-visible warning shown when the editor falls back to defaults
    pub fn user_message(&self) -> String {
        match self {
            FetchError::NotFound => {
                "Availability settings not found, using defaults".to_string()
            }
            FetchError::Server(_) => {
                "Server error while loading availability settings, using defaults".to_string()
            }
            FetchError::Network(_) => {
                "Could not load availability settings. Please check your connection".to_string()
            }
            FetchError::Other(detail) => {
                format!("Failed to load availability settings: {}", detail)
            }
        }
    }
}

/// Failure persisting availability data
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveError {
    /// The server rejected the write and supplied its own message
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}

impl SaveError {
    /// The user-visible error: the server's message verbatim when it sent
    /// one, else a generic retry prompt
    pub fn user_message(&self) -> String {
        match self {
            SaveError::Rejected(message) => message.clone(),
            SaveError::Network(_) | SaveError::Other(_) => {
                "Failed to save availability settings. Please try again".to_string()
            }
        }
    }
}

/// Storage contract for availability settings and worker availability.
///
/// Settings are a single document, written in full on every save; there are
/// no partial updates.
#[async_trait]
pub trait SettingsStore: Send + Sync + 'static {
    /// Load the normalized settings document for an account
    async fn fetch_settings(&self, user_id: &str) -> Result<AvailabilitySettings, FetchError>;

    /// Overwrite the whole settings document for an account
    async fn save_settings(
        &self,
        user_id: &str,
        settings: &AvailabilitySettings,
    ) -> Result<(), SaveError>;

    /// Load a team member's availability, normalized into business hours
    async fn fetch_worker_availability(
        &self,
        team_member_id: &str,
    ) -> Result<BusinessHours, FetchError>;

    /// Persist a team member's working hours
    async fn save_worker_availability(
        &self,
        team_member_id: &str,
        working_hours: &WorkingHours,
    ) -> Result<(), SaveError>;
}

/// In-memory implementation of the store (for testing)
#[derive(Debug, Default)]
pub struct InMemoryStore {
    settings: tokio::sync::RwLock<HashMap<String, AvailabilitySettings>>,
    workers: tokio::sync::RwLock<HashMap<String, WorkingHours>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user's settings document
    pub async fn seed_settings(&self, user_id: &str, settings: AvailabilitySettings) {
        let mut map = self.settings.write().await;
        map.insert(user_id.to_string(), settings);
    }

    /// Read back a saved document, if any
    pub async fn saved_settings(&self, user_id: &str) -> Option<AvailabilitySettings> {
        let map = self.settings.read().await;
        map.get(user_id).cloned()
    }
}

#[async_trait]
impl SettingsStore for InMemoryStore {
    async fn fetch_settings(&self, user_id: &str) -> Result<AvailabilitySettings, FetchError> {
        let map = self.settings.read().await;
        map.get(user_id).cloned().ok_or(FetchError::NotFound)
    }

    async fn save_settings(
        &self,
        user_id: &str,
        settings: &AvailabilitySettings,
    ) -> Result<(), SaveError> {
        let mut map = self.settings.write().await;
        map.insert(user_id.to_string(), settings.clone());
        Ok(())
    }

    async fn fetch_worker_availability(
        &self,
        team_member_id: &str,
    ) -> Result<BusinessHours, FetchError> {
        let map = self.workers.read().await;
        map.get(team_member_id)
            .map(crate::availability::working_hours_to_business_hours)
            .ok_or(FetchError::NotFound)
    }

    async fn save_worker_availability(
        &self,
        team_member_id: &str,
        working_hours: &WorkingHours,
    ) -> Result<(), SaveError> {
        let mut map = self.workers.write().await;
        map.insert(team_member_id.to_string(), working_hours.clone());
        Ok(())
    }
}
