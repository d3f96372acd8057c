// Weekly plan wire types
//
// Field names on the wire are camelCase to match the structured-output
// contract the generator is bound to. Every field is required: a payload
// missing any of them fails deserialization instead of being defaulted.

use serde::{Deserialize, Serialize};

/// Expected glycemic impact of a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloodSugarImpact {
    Low,
    Medium,
    High,
}

/// One meal slot in a daily plan, including up to two substitute options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Breakfast/lunch/dinner label.
    pub meal_type: String,
    pub name: String,
    pub description: String,
    /// Estimated cost in KRW.
    pub estimated_cost: f64,
    /// Cooking time in minutes.
    pub cooking_time: u32,
    pub calories: f64,
    /// Carbohydrates in grams.
    pub carbs: f64,
    pub blood_sugar_impact: BloodSugarImpact,
    pub is_meal_kit_available: bool,
    /// Substitute options, at most two. Alternatives carry no alternatives
    /// of their own.
    pub alternatives: Vec<AlternativeMeal>,
}

/// A substitute meal: the full meal field set minus nested alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeMeal {
    pub meal_type: String,
    pub name: String,
    pub description: String,
    pub estimated_cost: f64,
    pub cooking_time: u32,
    pub calories: f64,
    pub carbs: f64,
    pub blood_sugar_impact: BloodSugarImpact,
    pub is_meal_kit_available: bool,
}

/// One day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Day-of-week label, Monday first.
    pub day: String,
    pub meals: Vec<Meal>,
}

/// The 7-day plan, serialized as a bare JSON array of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    pub days: Vec<DailyPlan>,
}

impl Meal {
    /// Strip this meal down to its alternative form, dropping its own
    /// alternatives list.
    pub fn as_alternative(&self) -> AlternativeMeal {
        AlternativeMeal {
            meal_type: self.meal_type.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            estimated_cost: self.estimated_cost,
            cooking_time: self.cooking_time,
            calories: self.calories,
            carbs: self.carbs,
            blood_sugar_impact: self.blood_sugar_impact,
            is_meal_kit_available: self.is_meal_kit_available,
        }
    }

    /// Promote an alternative into a full meal with the given alternatives.
    pub fn from_alternative(alt: AlternativeMeal, alternatives: Vec<AlternativeMeal>) -> Self {
        Meal {
            meal_type: alt.meal_type,
            name: alt.name,
            description: alt.description,
            estimated_cost: alt.estimated_cost,
            cooking_time: alt.cooking_time,
            calories: alt.calories,
            carbs: alt.carbs,
            blood_sugar_impact: alt.blood_sugar_impact,
            is_meal_kit_available: alt.is_meal_kit_available,
            alternatives,
        }
    }
}

impl WeeklyPlan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
