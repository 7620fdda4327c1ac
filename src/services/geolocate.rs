//! Geolocation fallback collaborator.
//!
//! Consulted opportunistically when a vehicle still sits at the origin
//! default. Callers treat every failure as "keep whatever is stored"; the
//! error type exists so that absorption is visible in signatures rather than
//! buried in a catch-all.

use async_trait::async_trait;
use serde::Deserialize;

use crate::store::config::GeolocateSettings;

/// Error type for geolocation lookups.
#[derive(Debug, thiserror::Error)]
pub enum GeolocateError {
    #[error("geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geolocation response missing coordinates")]
    MissingCoordinates,
}

/// Best-effort coordinate lookup.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Resolve a current (latitude, longitude) estimate.
    async fn locate(&self) -> Result<(f64, f64), GeolocateError>;
}

/// HTTP locator against an ip-api-style JSON endpoint.
pub struct HttpLocator {
    client: reqwest::Client,
    url: String,
}

#[derive(Deserialize)]
struct GeoPayload {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl HttpLocator {
    /// Build a locator from configuration.
    pub fn new(settings: &GeolocateSettings) -> Result<Self, GeolocateError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: settings.url.clone(),
        })
    }
}

#[async_trait]
impl GeoLocator for HttpLocator {
    async fn locate(&self) -> Result<(f64, f64), GeolocateError> {
        let payload: GeoPayload = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (payload.lat, payload.lon) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(GeolocateError::MissingCoordinates),
        }
    }
}

/// Locator returning a fixed coordinate pair. Used in tests and local
/// development where no outbound network is wanted.
pub struct FixedLocator {
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
impl GeoLocator for FixedLocator {
    async fn locate(&self) -> Result<(f64, f64), GeolocateError> {
        Ok((self.latitude, self.longitude))
    }
}

/// Locator that always fails. Stands in when the fallback is disabled.
pub struct UnavailableLocator;

#[async_trait]
impl GeoLocator for UnavailableLocator {
    async fn locate(&self) -> Result<(f64, f64), GeolocateError> {
        Err(GeolocateError::MissingCoordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_locator_returns_its_coordinates() {
        let locator = FixedLocator {
            latitude: 41.4,
            longitude: 2.2,
        };
        assert_eq!(locator.locate().await.unwrap(), (41.4, 2.2));
    }

    #[tokio::test]
    async fn test_unavailable_locator_always_fails() {
        assert!(UnavailableLocator.locate().await.is_err());
    }
}
