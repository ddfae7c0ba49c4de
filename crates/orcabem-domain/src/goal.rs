//! Domain types for savings goals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target the user is working towards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub category: String,
}

impl Goal {
    pub fn new(title: impl Into<String>, target_amount: f64, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            current_amount: 0.0,
            target_amount,
            category: category.into(),
        }
    }

    /// Progress towards the target as a percentage, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        ((self.current_amount / self.target_amount) * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_capped_at_one_hundred_percent() {
        let mut goal = Goal::new("Viagem de férias", 5000.0, "lazer");
        goal.current_amount = 1500.0;
        assert!((goal.progress_percent() - 30.0).abs() < f64::EPSILON);

        goal.current_amount = 9000.0;
        assert!((goal.progress_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn goal_serializes_with_camel_case_amounts() {
        let goal = Goal::new("Reserva de emergência", 15000.0, "emergência");
        let json = serde_json::to_value(&goal).unwrap();

        assert!(json.get("currentAmount").is_some());
        assert!(json.get("targetAmount").is_some());
        assert!(json.get("current_amount").is_none());
    }
}
