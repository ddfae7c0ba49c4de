//! Derived report views over the ledger.

use std::{cmp::Ordering, collections::BTreeMap};

use chrono::Datelike;

use crate::{CoreError, Ledger};

/// Totals shown on the dashboard summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Expense total for one category, with its share of all expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
    pub share_percent: f64,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

impl MonthlyTotals {
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger) -> LedgerSummary {
        LedgerSummary {
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            balance: ledger.balance(),
        }
    }

    /// Expense totals per category, largest first.
    pub fn category_breakdown(ledger: &Ledger) -> Vec<CategorySpending> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for transaction in ledger.transactions() {
            if transaction.kind.is_expense() {
                *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
            }
        }
        let spent: f64 = totals.values().sum();
        let mut breakdown: Vec<CategorySpending> = totals
            .into_iter()
            .map(|(category, total)| CategorySpending {
                category,
                total,
                share_percent: if spent > 0.0 { total / spent * 100.0 } else { 0.0 },
            })
            .collect();
        breakdown.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        breakdown
    }

    /// Income and expense totals grouped by calendar month, oldest first.
    pub fn monthly_totals(ledger: &Ledger) -> Vec<MonthlyTotals> {
        let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
        for transaction in ledger.transactions() {
            let key = (transaction.date.year(), transaction.date.month());
            let entry = months.entry(key).or_insert((0.0, 0.0));
            if transaction.kind.is_income() {
                entry.0 += transaction.amount;
            } else {
                entry.1 += transaction.amount;
            }
        }
        months
            .into_iter()
            .map(|((year, month), (income, expenses))| MonthlyTotals {
                year,
                month,
                income,
                expenses,
                net: income - expenses,
            })
            .collect()
    }

    /// Renders the monthly series as CSV, one row per month.
    pub fn monthly_report_csv(rows: &[MonthlyTotals]) -> Result<String, CoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["month", "income", "expenses", "net"])
            .map_err(|err| CoreError::Report(err.to_string()))?;
        for row in rows {
            writer
                .write_record([
                    row.label(),
                    format!("{:.2}", row.income),
                    format!("{:.2}", row.expenses),
                    format!("{:.2}", row.net),
                ])
                .map_err(|err| CoreError::Report(err.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| CoreError::Report(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| CoreError::Report(err.to_string()))
    }
}
