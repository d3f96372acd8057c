// Mealweek - AI-generated weekly meal plans with budget tracking
// Library exports

pub mod app;
pub mod client;
pub mod config;
pub mod gemini;
pub mod plan;
pub mod profile;

pub use app::{App, AppPhase};
pub use client::{GenerationBackend, GenerationError, PlanClient};
pub use config::{Config, ConfigError};
pub use gemini::GeminiClient;
pub use plan::state::{PlanBoard, SwapError};
pub use plan::types::{AlternativeMeal, BloodSugarImpact, DailyPlan, Meal, WeeklyPlan};
pub use profile::UserProfile;
