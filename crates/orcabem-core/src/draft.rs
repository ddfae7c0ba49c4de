//! Validation boundary between the entry form and the ledger.

use orcabem_domain::TransactionKind;

use crate::CoreError;

/// Already-validated input for a new ledger entry.
///
/// A draft can only be obtained through its validating constructors, so the
/// ledger accepts drafts without re-checking any field. Categories are
/// trimmed and lower-cased here; every stored category is lower-case and
/// category matching elsewhere is exact equality.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub(crate) description: String,
    pub(crate) amount: f64,
    pub(crate) kind: TransactionKind,
    pub(crate) category: String,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(CoreError::Validation("description must not be empty".into()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        let category = category.into().trim().to_lowercase();
        if category.is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }
        Ok(Self {
            description,
            amount,
            kind,
            category,
        })
    }

    /// Builds a draft from raw form fields, parsing the amount string the way
    /// the entry form submits it.
    pub fn from_form(
        description: &str,
        amount: &str,
        kind: TransactionKind,
        category: &str,
    ) -> Result<Self, CoreError> {
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation("amount is not a valid number".into()))?;
        Self::new(description, amount, kind, category)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
