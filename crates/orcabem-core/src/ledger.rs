//! In-memory transaction ledger and its derived aggregates.

use std::collections::HashSet;

use chrono::NaiveDate;
use orcabem_domain::{Transaction, TransactionKind};

use crate::{draft::TransactionDraft, time::Clock};

/// Single source of truth for recorded transactions.
///
/// Entries are kept most-recent-first: every insert prepends, and every
/// consumer reads in that order. Aggregates are recomputed from the full
/// sequence on each call; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Builds a ledger pre-populated with `seed`, in the order given.
    ///
    /// Callers wanting the canonical most-recent-first read order must pass
    /// the newest entry first.
    pub fn with_transactions(seed: Vec<Transaction>) -> Self {
        Self { transactions: seed }
    }

    /// The fixed sample set a fresh session starts with, newest first.
    pub fn sample() -> Self {
        let entries = [
            ("Gasolina", 120.0, TransactionKind::Expense, "transporte", 8),
            ("Venda de produtos", 320.0, TransactionKind::Income, "vendas", 7),
            ("Jantar no restaurante", 85.0, TransactionKind::Expense, "alimentação", 6),
            ("Conta de luz", 150.0, TransactionKind::Expense, "moradia", 5),
            ("Freelance projeto", 800.0, TransactionKind::Income, "freelance", 4),
            ("Pagamento de aluguel", 1200.0, TransactionKind::Expense, "moradia", 3),
            ("Compra no supermercado", 250.0, TransactionKind::Expense, "alimentação", 2),
            ("Salário mensal", 5500.0, TransactionKind::Income, "salário", 1),
        ];
        let transactions = entries
            .into_iter()
            .map(|(description, amount, kind, category, day)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
                Transaction::new(description, amount, kind, category, date)
            })
            .collect();
        Self { transactions }
    }

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records a new transaction and returns it.
    ///
    /// Assigns a fresh id, stamps today's date from `clock`, and prepends the
    /// entry so it becomes the new head of the sequence.
    pub fn add_transaction(&mut self, draft: TransactionDraft, clock: &dyn Clock) -> &Transaction {
        let transaction = Transaction::new(
            draft.description,
            draft.amount,
            draft.kind,
            draft.category,
            clock.today(),
        );
        self.transactions.insert(0, transaction);
        &self.transactions[0]
    }

    /// Sum of all income amounts. Zero for an empty ledger.
    pub fn total_income(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all expense amounts. Zero for an empty ledger.
    pub fn total_expenses(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Income minus expenses. May be negative.
    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expenses()
    }

    /// The `n` most recent transactions, fewer when the ledger is smaller.
    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    /// Transactions matching `filter`, in ledger order.
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// The category values currently present, in no particular order.
    pub fn distinct_categories(&self) -> HashSet<String> {
        self.transactions
            .iter()
            .map(|t| t.category.clone())
            .collect()
    }

    /// Replaces the whole sequence, used when a backup is applied.
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }
}

/// Search criteria for the transaction history view.
///
/// An empty search term matches every description; an unset or empty
/// category matches every category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: String,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        let matches_search = self.search.is_empty()
            || transaction
                .description
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_category = match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => transaction.category == category,
        };
        matches_search && matches_category
    }
}
