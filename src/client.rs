// Plan client
//
// Drives a generation backend and turns its raw text payload into a
// validated weekly plan. Validation is pass/fail: a partially valid payload
// is rejected outright so the state machine never sees a plan it cannot
// trust.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::plan::request::PlanRequest;
use crate::plan::schema::{self, ShapeError};
use crate::plan::types::WeeklyPlan;

/// A backend able to produce a plan payload from a compiled request.
///
/// Any generator that honors the instruction text and bound output schema is
/// substitutable here; the Gemini client is the production implementation.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Produce the raw text payload for a request. Expected to parse as JSON
    /// conforming to the request's response schema.
    async fn generate(&self, request: &PlanRequest) -> anyhow::Result<String>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Any failure between a compiled request and a validated weekly plan.
/// Always recoverable by the user via regenerate or reset.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation backend failed: {0}")]
    Backend(anyhow::Error),
    #[error("generation backend returned an empty response")]
    EmptyResponse,
    #[error("generated plan has an invalid shape: {0}")]
    InvalidShape(String),
}

impl From<ShapeError> for GenerationError {
    fn from(err: ShapeError) -> Self {
        GenerationError::InvalidShape(err.to_string())
    }
}

/// Client owning the backend handle. One outstanding call per invocation; no
/// internal concurrency.
#[derive(Clone)]
pub struct PlanClient {
    backend: Arc<dyn GenerationBackend>,
}

impl PlanClient {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Generate and validate a weekly plan.
    pub async fn generate(&self, request: &PlanRequest) -> Result<WeeklyPlan, GenerationError> {
        let payload = self
            .backend
            .generate(request)
            .await
            .map_err(|e| {
                tracing::error!(backend = self.backend.name(), error = %e, "generation failed");
                GenerationError::Backend(e)
            })?;

        if payload.trim().is_empty() {
            tracing::error!(backend = self.backend.name(), "empty generation payload");
            return Err(GenerationError::EmptyResponse);
        }

        let plan: WeeklyPlan = serde_json::from_str(&payload).map_err(|e| {
            tracing::error!(backend = self.backend.name(), error = %e, "unparseable plan payload");
            GenerationError::InvalidShape(e.to_string())
        })?;

        schema::validate(&plan)?;

        tracing::debug!(
            backend = self.backend.name(),
            days = plan.days.len(),
            "validated weekly plan"
        );
        Ok(plan)
    }
}
