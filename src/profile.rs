// User dietary/budget profile collected by the onboarding wizard

use serde::{Deserialize, Serialize};

/// Preferences driving plan generation.
///
/// Built once when onboarding completes and treated as immutable afterwards;
/// regeneration re-submits the same profile, a new wizard run replaces it
/// wholesale. Range validation (budget positive, meals_per_day in 1..=3,
/// cooking_time in 10..=60) is the wizard's job, not this type's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Health goal, e.g. "glycemic control" or "weight loss".
    pub goal: String,
    /// Weekly food budget in KRW.
    pub budget: u32,
    /// Allergens to exclude entirely. May be empty.
    pub allergies: Vec<String>,
    /// Free-text comma-separated disliked ingredients. May be empty.
    pub dislikes: String,
    /// Meals per day, 1 to 3.
    pub meals_per_day: u8,
    /// Preferred maximum cooking time per meal, in minutes.
    pub cooking_time: u16,
}

impl UserProfile {
    /// Allergy list rendered for the prompt, or "none".
    pub fn allergies_label(&self) -> String {
        if self.allergies.is_empty() {
            "none".to_string()
        } else {
            self.allergies.join(", ")
        }
    }

    /// Disliked ingredients rendered for the prompt, or "none".
    pub fn dislikes_label(&self) -> &str {
        if self.dislikes.trim().is_empty() {
            "none"
        } else {
            &self.dislikes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            goal: "glycemic control".to_string(),
            budget: 70000,
            allergies: vec![],
            dislikes: String::new(),
            meals_per_day: 3,
            cooking_time: 30,
        }
    }

    #[test]
    fn test_empty_allergies_render_as_none() {
        assert_eq!(profile().allergies_label(), "none");
    }

    #[test]
    fn test_allergies_join() {
        let mut p = profile();
        p.allergies = vec!["peanut".to_string(), "shellfish".to_string()];
        assert_eq!(p.allergies_label(), "peanut, shellfish");
    }

    #[test]
    fn test_blank_dislikes_render_as_none() {
        let mut p = profile();
        p.dislikes = "   ".to_string();
        assert_eq!(p.dislikes_label(), "none");
    }

    #[test]
    fn test_dislikes_passthrough() {
        let mut p = profile();
        p.dislikes = "cilantro, eggplant".to_string();
        assert_eq!(p.dislikes_label(), "cilantro, eggplant");
    }
}
