//! Transaction aggregation
//!
//! Sums, counts and averages over a user's transactions inside a window.
//! Every aggregate has defined missing-data behavior: empty sets yield the
//! zero decimal, zero denominators yield the zero decimal, and only store
//! failures propagate as errors.

use chrono::{DateTime, Utc};
use fintrack_store::{
    zero_amount, CategoryStore, DateFilter, TransactionKind, TransactionStore,
};
use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};
use crate::reports::{TransactionStatistics, TransactionTotals};

/// Income/expense totals and transaction count for a filter
///
/// Unbounded mode: a filter with `None` bounds aggregates all-time.
pub async fn transaction_totals(
    store: &dyn TransactionStore,
    user_id: i64,
    filter: &DateFilter,
) -> ReportResult<TransactionTotals> {
    let total_income = store
        .sum_amount(user_id, TransactionKind::Income, filter)
        .await?;
    let total_expense = store
        .sum_amount(user_id, TransactionKind::Expense, filter)
        .await?;
    let transaction_count = store.count(user_id, None, filter).await?;

    Ok(TransactionTotals {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
        transaction_count,
    })
}

/// Totals enriched with per-kind averages
pub async fn transaction_statistics(
    store: &dyn TransactionStore,
    user_id: i64,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> ReportResult<TransactionStatistics> {
    let filter = DateFilter {
        start,
        end,
        category_id: None,
    };

    let total_income = store
        .sum_amount(user_id, TransactionKind::Income, &filter)
        .await?;
    let total_expense = store
        .sum_amount(user_id, TransactionKind::Expense, &filter)
        .await?;
    let total_count = store.count(user_id, None, &filter).await?;
    let income_count = store
        .count(user_id, Some(TransactionKind::Income), &filter)
        .await?;
    let expense_count = store
        .count(user_id, Some(TransactionKind::Expense), &filter)
        .await?;

    Ok(TransactionStatistics {
        total_count,
        total_income,
        total_expense,
        balance: total_income - total_expense,
        average_transaction: safe_average(total_income + total_expense, total_count),
        average_income: safe_average(total_income, income_count),
        average_expense: safe_average(total_expense, expense_count),
        period_start: start,
        period_end: end,
    })
}

/// Totals restricted to a single category
///
/// Verifies ownership first: a category that does not exist or belongs to
/// another user surfaces as `CategoryNotFound` rather than an empty result.
pub async fn category_statistics(
    transactions: &dyn TransactionStore,
    categories: &dyn CategoryStore,
    user_id: i64,
    category_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> ReportResult<TransactionTotals> {
    categories
        .find_category(user_id, category_id)
        .await?
        .ok_or(ReportError::CategoryNotFound { id: category_id })?;

    let filter = DateFilter::between(start, end).for_category(category_id);
    transaction_totals(transactions, user_id, &filter).await
}

fn safe_average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        zero_amount()
    } else {
        total / Decimal::from(count)
    }
}

// ==================== Tests ====================
