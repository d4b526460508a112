//! Read-side store interfaces for the fintrack reporting engine
//!
//! The reporting core never owns persistence; it consumes transaction,
//! category and budget rows through the narrow query traits defined here.
//! `MemoryStore` is the in-memory reference backend used by tests and
//! embedders without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

pub mod error;
pub mod memory;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use types::{
    zero_amount, BudgetPeriod, BudgetRecord, BudgetRow, CategoryRecord, CategorySpendRow,
    DateFilter, TransactionKind, TransactionRecord,
};

/// Transaction store reference type
pub type TransactionStoreRef = Arc<dyn TransactionStore>;

/// Budget store reference type
pub type BudgetStoreRef = Arc<dyn BudgetStore>;

/// Category store reference type
pub type CategoryStoreRef = Arc<dyn CategoryStore>;

/// Read interface over a user's transactions
///
/// All queries are scoped by `user_id`; implementations must never leak rows
/// across users. Date bounds in `DateFilter` are inclusive on both ends.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Sum of `amount` over transactions of one kind matching the filter.
    /// Returns the zero decimal when nothing matches.
    async fn sum_amount(
        &self,
        user_id: i64,
        kind: TransactionKind,
        filter: &DateFilter,
    ) -> StoreResult<Decimal>;

    /// Count of transactions matching the filter, optionally restricted to
    /// one kind.
    async fn count(
        &self,
        user_id: i64,
        kind: Option<TransactionKind>,
        filter: &DateFilter,
    ) -> StoreResult<u64>;

    /// Expense totals grouped by category, inner-joined to the category row
    /// (categories with no matching expense are absent). Ordered by
    /// descending total, then ascending category id.
    async fn expenses_by_category(
        &self,
        user_id: i64,
        filter: &DateFilter,
    ) -> StoreResult<Vec<CategorySpendRow>>;
}

/// Read interface over a user's budgets
#[async_trait]
pub trait BudgetStore: Send + Sync {
    /// Budgets whose own `[start_date, end_date]` window overlaps the given
    /// interval (`start_date <= end AND end_date >= start`), each joined
    /// with its category's display fields.
    async fn find_overlapping(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<BudgetRow>>;
}

/// Read interface over a user's categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Look up a category by id, scoped to the owning user. Returns `None`
    /// when the category does not exist or belongs to someone else.
    async fn find_category(
        &self,
        user_id: i64,
        category_id: i64,
    ) -> StoreResult<Option<CategoryRecord>>;
}
