// Plan request compiler
//
// Turns a user profile into the instruction payload plus bound output schema
// the generation backend consumes. Pure: same profile, same request.

use serde_json::Value;

use super::schema::response_schema;
use crate::profile::UserProfile;

/// Sampling temperature for plan generation. Moderate on purpose: enough
/// variety across regenerations without drifting from the constraints.
pub const PLAN_TEMPERATURE: f32 = 0.7;

/// A compiled generation request: instruction text, required output shape,
/// and sampling temperature.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub prompt: String,
    pub response_schema: Value,
    pub temperature: f32,
}

impl PlanRequest {
    /// Compile a profile into a generation request.
    pub fn compile(profile: &UserProfile) -> Self {
        PlanRequest {
            prompt: build_prompt(profile),
            response_schema: response_schema(),
            temperature: PLAN_TEMPERATURE,
        }
    }
}

fn build_prompt(profile: &UserProfile) -> String {
    let budget = format_krw(profile.budget);
    format!(
        "System Instruction: You are a professional nutritionist and budget \
manager for busy single-person households in South Korea. Based on the user \
profile below, create a personalized 7-day meal plan that meets the health \
goal and stays within budget. The response must strictly follow the provided \
JSON schema.

User Profile:
- Health goal: {goal}
- Weekly budget: {budget} KRW
- Allergies: {allergies}
- Disliked ingredients: {dislikes}
- Meals per day: {meals_per_day}
- Preferred maximum cooking time: {cooking_time} minutes

Task:
1. Plan 7 days of meals, Monday through Sunday.
2. Recommend exactly {meals_per_day} meals per day.
3. Every meal must include its name, description, estimated cost (KRW), \
cooking time (minutes), calories, carbohydrates, blood sugar impact \
(low/medium/high), and meal kit availability.
4. Every meal must come with exactly 2 completely different alternative \
meals, each carrying the same full set of fields.
5. Allergens and disliked ingredients must be excluded from the plan \
entirely.
6. Optimize so the total estimated cost for the 7 days does not exceed the \
weekly budget of {budget} KRW, keeping the plan as varied and nutritious as \
the budget allows.
7. Base every dish on ingredients easy to find in Korea or on popular meal \
kits.
8. Respond with pure JSON only. Do not add any commentary.",
        goal = profile.goal,
        budget = budget,
        allergies = profile.allergies_label(),
        dislikes = profile.dislikes_label(),
        meals_per_day = profile.meals_per_day,
        cooking_time = profile.cooking_time,
    )
}

/// Render a KRW amount with thousands separators, e.g. 70000 -> "70,000".
fn format_krw(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
