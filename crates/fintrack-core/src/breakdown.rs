//! Category expense breakdown
//!
//! Expense transactions grouped by category inside a window. The grouping is
//! an inner join: a category with no matching expense never appears, so the
//! breakdown carries no zero rows. Ordering is descending by total with
//! category id as the deterministic tie-break, both guaranteed by the store
//! contract.

use fintrack_store::{CategorySpendRow, DateFilter, TransactionStore};

use crate::error::ReportResult;

/// Per-category expense totals for a filter, largest first
pub async fn category_breakdown(
    store: &dyn TransactionStore,
    user_id: i64,
    filter: &DateFilter,
) -> ReportResult<Vec<CategorySpendRow>> {
    Ok(store.expenses_by_category(user_id, filter).await?)
}

/// All-time breakdown truncated to the `limit` biggest categories
pub async fn top_categories(
    store: &dyn TransactionStore,
    user_id: i64,
    limit: usize,
) -> ReportResult<Vec<CategorySpendRow>> {
    let mut rows = store
        .expenses_by_category(user_id, &DateFilter::unbounded())
        .await?;
    rows.truncate(limit);
    Ok(rows)
}

// ==================== Tests ====================
