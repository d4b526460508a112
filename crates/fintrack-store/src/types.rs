//! Row and filter types shared by the store interfaces

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, refunds)
    Income,
    /// Money going out (purchases, bills)
    Expense,
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!("Invalid transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// Budget period enumeration
///
/// Informational only: the effective window of a budget is always its
/// explicit `start_date`/`end_date` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::str::FromStr for BudgetPeriod {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(BudgetPeriod::Daily),
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            _ => Err(format!("Invalid budget period: {}", s)),
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetPeriod::Daily => write!(f, "daily"),
            BudgetPeriod::Weekly => write!(f, "weekly"),
            BudgetPeriod::Monthly => write!(f, "monthly"),
            BudgetPeriod::Yearly => write!(f, "yearly"),
        }
    }
}

/// Transaction row as stored upstream
///
/// `amount` is always positive; the sign of a movement is derived from
/// `kind`, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Category row as stored upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub user_id: i64,
}

/// Budget row as stored upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub id: i64,
    pub name: String,
    /// The spending cap for the budget's category
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub category_id: i64,
    pub user_id: i64,
}

/// Date and category scoping for transaction queries
///
/// Both bounds are INCLUSIVE (`created_at >= start AND created_at <= end`).
/// The interval resolver upstream derives exclusive uppers, but the query
/// layer has always filtered inclusively on both ends; that behavior is kept
/// as-is so a transaction timestamped exactly at `end` is counted. A `None`
/// bound applies no predicate at all (unbounded mode).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub category_id: Option<i64>,
}

impl DateFilter {
    /// Filter with both bounds and no category scope
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            category_id: None,
        }
    }

    /// Unbounded filter (no date predicate)
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Scope the filter to a single category
    pub fn for_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Check whether a timestamp falls inside the filter bounds
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if at > end {
                return false;
            }
        }
        true
    }

    /// Check whether a transaction row matches the filter
    pub fn matches(&self, row: &TransactionRecord) -> bool {
        if let Some(category_id) = self.category_id {
            if row.category_id != Some(category_id) {
                return false;
            }
        }
        self.contains(row.created_at)
    }
}

/// The designated "no data" amount: an explicit two-place decimal zero
///
/// Aggregates over empty sets return this value rather than an absent field,
/// so callers never null-check sums.
pub fn zero_amount() -> Decimal {
    Decimal::new(0, 2)
}

/// One category's expense aggregate inside a window
///
/// Produced by `TransactionStore::expenses_by_category`; display fields are
/// carried through from the joined category row, not re-looked-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpendRow {
    pub category_id: i64,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub total_amount: Decimal,
    pub transaction_count: u64,
}

/// Budget row joined with its category's display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRow {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub category_id: i64,
    pub category_name: String,
    pub category_color: String,
    pub category_icon: String,
}
