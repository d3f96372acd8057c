// Weekly plan domain: wire types, output schema contract, request
// compilation, and the in-memory plan state machine.

pub mod request;
pub mod schema;
pub mod state;
pub mod types;

pub use request::PlanRequest;
pub use schema::ShapeError;
pub use state::{PlanBoard, SwapError};
pub use types::{AlternativeMeal, BloodSugarImpact, DailyPlan, Meal, WeeklyPlan};
