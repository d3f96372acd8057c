// Application state controller
//
// The session-scoped state machine behind the UI: onboarding -> loading ->
// dashboard, loading -> error, dashboard/error -> onboarding (reset), and
// dashboard -> loading (regenerate with the stored profile). All state is
// process-local; one generation call is in flight at most.

use crate::client::{GenerationError, PlanClient};
use crate::plan::request::PlanRequest;
use crate::plan::state::{PlanBoard, SwapError};
use crate::plan::types::AlternativeMeal;
use crate::profile::UserProfile;

/// Message shown on the error screen, matching the product's locale.
const GENERATION_FAILED_MESSAGE: &str =
    "식단 생성에 실패했습니다. 잠시 후 다시 시도해주세요.";

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum AppPhase {
    /// Collecting the profile.
    Onboarding,
    /// A generation request is in flight.
    Loading,
    /// A validated plan is on screen.
    Dashboard,
    /// Generation failed; only reset is offered.
    Error { message: String },
}

/// Session controller owning the profile, the active plan, and the client.
pub struct App {
    client: PlanClient,
    phase: AppPhase,
    profile: Option<UserProfile>,
    board: Option<PlanBoard>,
}

impl App {
    pub fn new(client: PlanClient) -> Self {
        Self {
            client,
            phase: AppPhase::Onboarding,
            profile: None,
            board: None,
        }
    }

    pub fn phase(&self) -> &AppPhase {
        &self.phase
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn board(&self) -> Option<&PlanBoard> {
        self.board.as_ref()
    }

    /// Onboarding finished: store the profile and generate the first plan.
    pub async fn submit_profile(&mut self, profile: UserProfile) {
        if self.phase == AppPhase::Loading {
            tracing::warn!("profile submitted while a generation is in flight, ignoring");
            return;
        }
        self.profile = Some(profile);
        self.run_generation().await;
    }

    /// Re-run generation with the stored profile, discarding the current
    /// plan. Only valid from the dashboard.
    pub async fn regenerate(&mut self) {
        if self.phase != AppPhase::Dashboard {
            tracing::warn!(phase = ?self.phase, "regenerate requested outside the dashboard, ignoring");
            return;
        }
        if self.profile.is_none() {
            tracing::warn!("regenerate requested without a stored profile, ignoring");
            return;
        }
        self.run_generation().await;
    }

    /// Back to onboarding. Clears the profile and the plan.
    pub fn reset(&mut self) {
        self.phase = AppPhase::Onboarding;
        self.profile = None;
        self.board = None;
    }

    /// Swap a meal on the dashboard. A bad index or an unknown alternative
    /// leaves the plan untouched and logs a warning; the caller gets the
    /// error for its own diagnostics.
    pub fn swap_meal(
        &mut self,
        day_index: usize,
        meal_index: usize,
        chosen: &AlternativeMeal,
    ) -> Result<(), SwapError> {
        let Some(board) = self.board.as_mut() else {
            tracing::warn!("swap requested with no active plan, ignoring");
            return Ok(());
        };
        let result = board.swap(day_index, meal_index, chosen);
        if let Err(e) = &result {
            tracing::warn!(day_index, meal_index, error = %e, "swap rejected");
        }
        result
    }

    async fn run_generation(&mut self) {
        let request = match &self.profile {
            Some(profile) => PlanRequest::compile(profile),
            None => return,
        };

        self.phase = AppPhase::Loading;
        self.board = None;

        match self.client.generate(&request).await {
            Ok(plan) => {
                self.board = Some(PlanBoard::new(plan));
                self.phase = AppPhase::Dashboard;
            }
            Err(e) => {
                log_generation_failure(&e);
                self.phase = AppPhase::Error {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }
}

fn log_generation_failure(error: &GenerationError) {
    match error {
        GenerationError::Backend(cause) => {
            tracing::error!(%cause, "plan generation failed at the backend")
        }
        other => tracing::error!(error = %other, "plan generation failed"),
    }
}
