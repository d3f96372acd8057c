// In-memory plan state
//
// Owns the current weekly plan between generation and reset. Swaps are
// local, synchronous mutations; nothing here ever calls the generation
// backend.

use thiserror::Error;

use super::types::{AlternativeMeal, DailyPlan, Meal, WeeklyPlan};

/// Invalid swap input. The plan is left untouched when any of these is
/// returned.
#[derive(Debug, Error, PartialEq)]
pub enum SwapError {
    #[error("day index {0} out of range (plan has {1} days)")]
    DayOutOfRange(usize, usize),
    #[error("meal index {0} out of range (day has {1} meals)")]
    MealOutOfRange(usize, usize),
    #[error("'{0}' is not among the current meal's alternatives")]
    UnknownAlternative(String),
}

/// Owner of the active weekly plan during a dashboard session.
#[derive(Debug, Clone)]
pub struct PlanBoard {
    plan: WeeklyPlan,
}

impl PlanBoard {
    pub fn new(plan: WeeklyPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn into_plan(self) -> WeeklyPlan {
        self.plan
    }

    pub fn day(&self, day_index: usize) -> Option<&DailyPlan> {
        self.plan.days.get(day_index)
    }

    pub fn meal_at(&self, day_index: usize, meal_index: usize) -> Option<&Meal> {
        self.day(day_index)?.meals.get(meal_index)
    }

    /// Sum of estimated costs across every meal of every day. Recomputed on
    /// each call; swaps change it, so caching would only invite staleness.
    pub fn total_cost(&self) -> f64 {
        self.plan
            .days
            .iter()
            .flat_map(|day| &day.meals)
            .map(|meal| meal.estimated_cost)
            .sum()
    }

    /// Budget left after the current plan, in KRW. Negative when the plan
    /// runs over.
    pub fn remaining_budget(&self, budget: u32) -> f64 {
        f64::from(budget) - self.total_cost()
    }

    pub fn is_over_budget(&self, budget: u32) -> bool {
        self.total_cost() > f64::from(budget)
    }

    /// Replace the meal at `(day_index, meal_index)` with one of its
    /// alternatives.
    ///
    /// The new meal's alternatives are rebuilt so the displaced meal stays
    /// reachable: it goes in first (stripped of its own alternatives),
    /// followed by the displaced meal's remaining alternatives minus any
    /// entry named like `chosen`, truncated to two. The list therefore never
    /// exceeds two entries and never immediately re-offers the chosen meal.
    pub fn swap(
        &mut self,
        day_index: usize,
        meal_index: usize,
        chosen: &AlternativeMeal,
    ) -> Result<(), SwapError> {
        let day_count = self.plan.days.len();
        let day = self
            .plan
            .days
            .get_mut(day_index)
            .ok_or(SwapError::DayOutOfRange(day_index, day_count))?;
        let meal_count = day.meals.len();
        let current = day
            .meals
            .get_mut(meal_index)
            .ok_or(SwapError::MealOutOfRange(meal_index, meal_count))?;

        if !current.alternatives.iter().any(|alt| alt == chosen) {
            return Err(SwapError::UnknownAlternative(chosen.name.clone()));
        }

        let mut alternatives = vec![current.as_alternative()];
        alternatives.extend(
            current
                .alternatives
                .iter()
                .filter(|alt| alt.name != chosen.name)
                .cloned(),
        );
        alternatives.truncate(2);

        *current = Meal::from_alternative(chosen.clone(), alternatives);
        Ok(())
    }
}
