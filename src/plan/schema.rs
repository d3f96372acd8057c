// Structured-output contract for generated plans
//
// Single source of truth for the plan's shape: the schema value sent to the
// generator as its required output format, and the structural checks applied
// to whatever comes back. Serde enforces field presence and types; the
// validator enforces what serde cannot express (day count, alternative
// count, non-negative figures).

use serde_json::{json, Value};
use thiserror::Error;

use super::types::WeeklyPlan;

/// Structural violation in a deserialized plan.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("plan has {0} days, expected exactly 7")]
    DayCount(usize),
    #[error("day {day} has no meals")]
    EmptyDay { day: usize },
    #[error("day {day} meal {meal} has {count} alternatives, expected exactly 2")]
    AlternativeCount { day: usize, meal: usize, count: usize },
    #[error("day {day} meal {meal}: {field} is negative or not finite")]
    BadFigure {
        day: usize,
        meal: usize,
        field: &'static str,
    },
}

/// Schema for a single meal without alternatives. Also the shape of every
/// alternative entry.
pub fn meal_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mealType": { "type": "STRING", "description": "Meal slot label (breakfast, lunch, dinner)" },
            "name": { "type": "STRING", "description": "Dish name" },
            "description": { "type": "STRING", "description": "One-sentence description of the dish" },
            "estimatedCost": { "type": "NUMBER", "description": "Estimated cost in KRW" },
            "cookingTime": { "type": "NUMBER", "description": "Cooking time in minutes" },
            "calories": { "type": "NUMBER", "description": "Estimated calories (kcal)" },
            "carbs": { "type": "NUMBER", "description": "Estimated carbohydrates (g)" },
            "bloodSugarImpact": {
                "type": "STRING",
                "description": "Expected blood sugar impact",
                "enum": ["low", "medium", "high"]
            },
            "isMealKitAvailable": { "type": "BOOLEAN", "description": "Whether a meal kit version is readily available" }
        },
        "required": [
            "mealType", "name", "description", "estimatedCost", "cookingTime",
            "calories", "carbs", "bloodSugarImpact", "isMealKitAvailable"
        ]
    })
}

/// Top-level schema bound to every generation request: an array of day
/// objects, each meal carrying exactly two alternative entries.
pub fn response_schema() -> Value {
    let base = meal_schema();
    let mut meal_with_alternatives = base.clone();
    meal_with_alternatives["properties"]["alternatives"] = json!({
        "type": "ARRAY",
        "description": "Exactly two substitute meals",
        "items": base
    });
    if let Some(required) = meal_with_alternatives["required"].as_array_mut() {
        required.push(json!("alternatives"));
    }

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": { "type": "STRING", "description": "Day-of-week label, Monday first" },
                "meals": {
                    "type": "ARRAY",
                    "items": meal_with_alternatives
                }
            },
            "required": ["day", "meals"]
        }
    })
}

/// Structural pass over a deserialized plan. Pass/fail: a plan that gets
/// through here satisfies every invariant the state machine relies on.
pub fn validate(plan: &WeeklyPlan) -> Result<(), ShapeError> {
    if plan.days.len() != 7 {
        return Err(ShapeError::DayCount(plan.days.len()));
    }

    for (day_index, day) in plan.days.iter().enumerate() {
        if day.meals.is_empty() {
            return Err(ShapeError::EmptyDay { day: day_index });
        }

        for (meal_index, meal) in day.meals.iter().enumerate() {
            if meal.alternatives.len() != 2 {
                return Err(ShapeError::AlternativeCount {
                    day: day_index,
                    meal: meal_index,
                    count: meal.alternatives.len(),
                });
            }

            check_figures(
                day_index,
                meal_index,
                meal.estimated_cost,
                meal.calories,
                meal.carbs,
            )?;
            for alt in &meal.alternatives {
                check_figures(
                    day_index,
                    meal_index,
                    alt.estimated_cost,
                    alt.calories,
                    alt.carbs,
                )?;
            }
        }
    }

    Ok(())
}

fn check_figures(
    day: usize,
    meal: usize,
    cost: f64,
    calories: f64,
    carbs: f64,
) -> Result<(), ShapeError> {
    for (field, value) in [
        ("estimatedCost", cost),
        ("calories", calories),
        ("carbs", carbs),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ShapeError::BadFigure { day, meal, field });
        }
    }
    Ok(())
}

#[cfg(test)]
pub mod test_support {
    use crate::plan::types::{AlternativeMeal, BloodSugarImpact, DailyPlan, Meal, WeeklyPlan};

    const DAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    pub fn sample_alternative(name: &str) -> AlternativeMeal {
        AlternativeMeal {
            meal_type: "lunch".to_string(),
            name: name.to_string(),
            description: format!("{} with seasonal vegetables", name),
            estimated_cost: 3000.0,
            cooking_time: 20,
            calories: 520.0,
            carbs: 60.0,
            blood_sugar_impact: BloodSugarImpact::Medium,
            is_meal_kit_available: false,
        }
    }

    /// A conformant 7-day plan with `meals_per_day` meals, every meal costing
    /// exactly 3,000 KRW and carrying two alternatives.
    pub fn sample_plan(meals_per_day: usize) -> WeeklyPlan {
        let days = DAYS
            .iter()
            .map(|day| DailyPlan {
                day: day.to_string(),
                meals: (0..meals_per_day)
                    .map(|slot| {
                        let base = format!("{} meal {}", day, slot);
                        Meal::from_alternative(
                            sample_alternative(&base),
                            vec![
                                sample_alternative(&format!("{} alt A", base)),
                                sample_alternative(&format!("{} alt B", base)),
                            ],
                        )
                    })
                    .collect(),
            })
            .collect();
        WeeklyPlan { days }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sample_plan;
    use super::*;

    #[test]
    fn test_meal_schema_requires_all_nine_fields() {
        let schema = meal_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 9);
        for field in [
            "mealType",
            "name",
            "description",
            "estimatedCost",
            "cookingTime",
            "calories",
            "carbs",
            "bloodSugarImpact",
            "isMealKitAvailable",
        ] {
            assert!(required.contains(&json!(field)), "missing {}", field);
        }
        // Alternatives never nest.
        assert!(schema["properties"].get("alternatives").is_none());
    }

    #[test]
    fn test_response_schema_binds_alternatives() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        let meal = &schema["items"]["properties"]["meals"]["items"];
        assert!(meal["required"]
            .as_array()
            .unwrap()
            .contains(&json!("alternatives")));
        // Alternative entries use the plain meal shape.
        assert!(meal["properties"]["alternatives"]["items"]["properties"]
            .get("alternatives")
            .is_none());
    }

    #[test]
    fn test_blood_sugar_enum_is_closed() {
        let schema = meal_schema();
        assert_eq!(
            schema["properties"]["bloodSugarImpact"]["enum"],
            json!(["low", "medium", "high"])
        );
    }

    #[test]
    fn test_validate_accepts_conformant_plan() {
        assert_eq!(validate(&sample_plan(3)), Ok(()));
    }

    #[test]
    fn test_validate_rejects_short_week() {
        let mut plan = sample_plan(2);
        plan.days.pop();
        assert_eq!(validate(&plan), Err(ShapeError::DayCount(6)));
    }

    #[test]
    fn test_validate_rejects_empty_day() {
        let mut plan = sample_plan(1);
        plan.days[4].meals.clear();
        assert_eq!(validate(&plan), Err(ShapeError::EmptyDay { day: 4 }));
    }

    #[test]
    fn test_validate_rejects_wrong_alternative_count() {
        let mut plan = sample_plan(2);
        plan.days[1].meals[1].alternatives.pop();
        assert_eq!(
            validate(&plan),
            Err(ShapeError::AlternativeCount {
                day: 1,
                meal: 1,
                count: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_cost() {
        let mut plan = sample_plan(1);
        plan.days[0].meals[0].estimated_cost = -1.0;
        assert_eq!(
            validate(&plan),
            Err(ShapeError::BadFigure {
                day: 0,
                meal: 0,
                field: "estimatedCost"
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_carbs_in_alternative() {
        let mut plan = sample_plan(1);
        plan.days[6].meals[0].alternatives[1].carbs = f64::NAN;
        assert_eq!(
            validate(&plan),
            Err(ShapeError::BadFigure {
                day: 6,
                meal: 0,
                field: "carbs"
            })
        );
    }
}
