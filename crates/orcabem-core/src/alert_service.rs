//! Alert rule management and evaluation against the ledger.

use chrono::{Datelike, NaiveDate};
use orcabem_domain::{AlertKind, AlertRule, Goal};
use uuid::Uuid;

use crate::{CoreError, Ledger};

/// An alert rule whose condition currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggeredAlert {
    pub rule_id: Uuid,
    pub message: String,
}

pub struct AlertService;

impl AlertService {
    /// Creates an alert rule and returns its identifier.
    ///
    /// Spending-limit rules require a category; it is lower-cased so it lines
    /// up with the categories the ledger stores.
    pub fn add(
        rules: &mut Vec<AlertRule>,
        kind: AlertKind,
        category: Option<String>,
        limit: f64,
        message: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(CoreError::Validation(
                "alert limit must be a positive number".into(),
            ));
        }
        let message = message.into().trim().to_string();
        if message.is_empty() {
            return Err(CoreError::Validation(
                "alert message must not be empty".into(),
            ));
        }
        let category = category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());
        if kind == AlertKind::SpendingLimit && category.is_none() {
            return Err(CoreError::Validation(
                "spending-limit alerts require a category".into(),
            ));
        }
        let rule = AlertRule::new(kind, category, limit, message);
        let id = rule.id;
        rules.push(rule);
        Ok(id)
    }

    /// Flips the rule on or off and returns the new state.
    pub fn toggle(rules: &mut [AlertRule], id: Uuid) -> Result<bool, CoreError> {
        let rule = rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::AlertNotFound(id))?;
        rule.enabled = !rule.enabled;
        Ok(rule.enabled)
    }

    pub fn remove(rules: &mut Vec<AlertRule>, id: Uuid) -> Result<AlertRule, CoreError> {
        let index = rules
            .iter()
            .position(|r| r.id == id)
            .ok_or(CoreError::AlertNotFound(id))?;
        Ok(rules.remove(index))
    }

    /// Returns every enabled rule whose condition holds on `today`.
    ///
    /// Spending checks look at the calendar month containing `today`.
    pub fn evaluate(
        rules: &[AlertRule],
        ledger: &Ledger,
        goals: &[Goal],
        today: NaiveDate,
    ) -> Vec<TriggeredAlert> {
        rules
            .iter()
            .filter(|rule| rule.enabled && Self::is_triggered(rule, ledger, goals, today))
            .map(|rule| TriggeredAlert {
                rule_id: rule.id,
                message: rule.message.clone(),
            })
            .collect()
    }

    fn is_triggered(rule: &AlertRule, ledger: &Ledger, goals: &[Goal], today: NaiveDate) -> bool {
        match rule.kind {
            AlertKind::SpendingLimit => match rule.category.as_deref() {
                Some(category) => {
                    month_expenses(ledger, today, Some(category)) >= rule.limit
                }
                None => false,
            },
            AlertKind::BudgetWarning => {
                month_expenses(ledger, today, None) >= rule.limit * 0.8
            }
            AlertKind::GoalProgress => goals
                .iter()
                .filter(|goal| match rule.category.as_deref() {
                    Some(category) => goal.category.to_lowercase() == category,
                    None => true,
                })
                .any(|goal| goal.progress_percent() >= rule.limit),
        }
    }
}

fn month_expenses(ledger: &Ledger, reference: NaiveDate, category: Option<&str>) -> f64 {
    ledger
        .transactions()
        .iter()
        .filter(|t| t.kind.is_expense())
        .filter(|t| t.date.year() == reference.year() && t.date.month() == reference.month())
        .filter(|t| category.map_or(true, |c| t.category == c))
        .map(|t| t.amount)
        .sum()
}
