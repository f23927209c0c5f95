//! HTTP client for the simulation service.

use gloo_net::http::Request;
use orrery_core::{PresetCatalog, PresetsResponse, RunParameters, SimulateResponse, SimulationRun};
use thiserror::Error;

/// Where the simulation service listens by default.
pub const DEFAULT_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (network down, CORS, service
    /// stopped).
    #[error("simulation service unreachable: {0}")]
    Transport(String),
    /// Response arrived with a non-success status.
    #[error("simulation service answered HTTP {0}")]
    Status(u16),
    /// Body was not a shape we recognize.
    #[error("could not decode service response: {0}")]
    Decode(String),
}

/// Thin client over the two service endpoints. Cheap to clone into spawned
/// futures.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// `GET /presets`, normalized across both response shapes.
    pub async fn presets(&self) -> Result<PresetCatalog, ApiError> {
        let response = Request::get(&format!("{}/presets", self.base))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let parsed: PresetsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.normalize())
    }

    /// `POST /simulate`, normalized across both response shapes.
    pub async fn simulate(&self, params: &RunParameters) -> Result<SimulationRun, ApiError> {
        let response = Request::post(&format!("{}/simulate", self.base))
            .json(params)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let parsed: SimulateResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.into_run())
    }
}
