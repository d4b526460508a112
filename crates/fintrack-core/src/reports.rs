//! Report structures for API responses
//!
//! Plain serializable records; wire encoding belongs to the caller.

use chrono::{DateTime, Utc};
use fintrack_store::{BudgetPeriod, CategorySpendRow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interval::PeriodKind;

/// Income/expense totals for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Always `total_income - total_expense`
    pub net_balance: Decimal,
    /// Count of transactions of both kinds
    pub transaction_count: u64,
}

/// Transaction statistics with per-kind averages
///
/// Averages over an empty denominator are the zero decimal, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatistics {
    pub total_count: u64,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    /// `(total_income + total_expense) / total_count`
    pub average_transaction: Decimal,
    pub average_income: Decimal,
    pub average_expense: Decimal,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
}

/// Category display fields embedded in budget rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// One budget enriched with consumption and elapsed-time progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub id: i64,
    pub name: String,
    /// The spending cap
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub category: BudgetCategory,
    /// Expense total over the budget's OWN date range, not the report's
    pub used_amount: Decimal,
    /// `amount - used_amount`; negative when overspent, never clamped
    pub remaining_amount: Decimal,
    /// Elapsed-time percentage in [0, 100], two decimal places
    pub progress: Decimal,
}

/// One period's full report: totals, category breakdown, budget progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period_type: PeriodKind,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    pub transaction_count: u64,
    pub categories: Vec<CategorySpendRow>,
    pub budgets: Vec<BudgetProgress>,
}

/// Totals snapshot per well-known window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSnapshots {
    pub today: TransactionTotals,
    pub this_week: TransactionTotals,
    pub this_month: TransactionTotals,
    pub all_time: TransactionTotals,
}

/// All-time statistics with per-period snapshots and top categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStatistics {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    pub transaction_count: u64,
    pub period_stats: PeriodSnapshots,
    pub top_categories: Vec<CategorySpendRow>,
}

/// Condensed summary for dashboard views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    /// Trailing-window totals; the window length is configurable and
    /// defaults to 30 days, which the field names reflect.
    pub last_30_days_income: Decimal,
    pub last_30_days_expense: Decimal,
    pub top_categories: Vec<CategorySpendRow>,
}

// ==================== Tests ====================
