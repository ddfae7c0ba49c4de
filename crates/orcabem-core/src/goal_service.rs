//! Mutation helpers for the savings-goal collection.

use orcabem_domain::Goal;
use uuid::Uuid;

use crate::CoreError;

pub struct GoalService;

impl GoalService {
    /// Creates a goal and returns its identifier.
    pub fn add(
        goals: &mut Vec<Goal>,
        title: impl Into<String>,
        target_amount: f64,
        category: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(CoreError::Validation("goal title must not be empty".into()));
        }
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(CoreError::Validation(
                "goal target must be a positive number".into(),
            ));
        }
        let goal = Goal::new(title, target_amount, category);
        let id = goal.id;
        goals.push(goal);
        Ok(id)
    }

    /// Adds `amount` to the goal's saved total. Negative amounts withdraw;
    /// the saved total never drops below zero.
    pub fn record_progress(goals: &mut [Goal], id: Uuid, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() {
            return Err(CoreError::Validation(
                "progress amount must be a finite number".into(),
            ));
        }
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        goal.current_amount = (goal.current_amount + amount).max(0.0);
        Ok(())
    }

    pub fn remove(goals: &mut Vec<Goal>, id: Uuid) -> Result<Goal, CoreError> {
        let index = goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(CoreError::GoalNotFound(id))?;
        Ok(goals.remove(index))
    }
}
