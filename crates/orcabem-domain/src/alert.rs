//! Domain types for configurable spending alerts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-configured alert condition checked against the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRule {
    pub id: Uuid,
    pub kind: AlertKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub limit: f64,
    pub enabled: bool,
    pub message: String,
}

impl AlertRule {
    pub fn new(
        kind: AlertKind,
        category: Option<String>,
        limit: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            category,
            limit,
            enabled: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the conditions an alert rule can watch.
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Expenses in one category reached the configured limit.
    SpendingLimit,
    /// Total spending reached 80% of the configured budget.
    BudgetWarning,
    /// A savings goal reached the configured progress percentage.
    GoalProgress,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertKind::SpendingLimit => "Spending Limit",
            AlertKind::BudgetWarning => "Budget Warning",
            AlertKind::GoalProgress => "Goal Progress",
        };
        f.write_str(label)
    }
}
