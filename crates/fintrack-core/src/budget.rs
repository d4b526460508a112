//! Budget progress calculation
//!
//! For every budget whose own date range overlaps the report window, compute
//! consumption and elapsed-time progress. Consumption is always measured over
//! the budget's OWN `[start_date, end_date]`, never the report window; the
//! window only selects which budgets appear.

use chrono::{DateTime, Utc};
use fintrack_store::{BudgetStore, DateFilter, TransactionKind, TransactionStore};
use rust_decimal::Decimal;

use crate::error::ReportResult;
use crate::reports::{BudgetCategory, BudgetProgress};

/// Progress rows for every budget overlapping `[start, end]`
///
/// Overlap is inclusive on both ends: a budget ending exactly at `start` or
/// starting exactly at `end` is still selected.
pub async fn budget_progress(
    budgets: &dyn BudgetStore,
    transactions: &dyn TransactionStore,
    user_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ReportResult<Vec<BudgetProgress>> {
    let rows = budgets.find_overlapping(user_id, start, end).await?;
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let lifetime = DateFilter::between(row.start_date, row.end_date)
            .for_category(row.category_id);
        let used_amount = transactions
            .sum_amount(user_id, TransactionKind::Expense, &lifetime)
            .await?;

        out.push(BudgetProgress {
            id: row.id,
            name: row.name,
            amount: row.amount,
            period: row.period,
            start_date: row.start_date,
            end_date: row.end_date,
            category: BudgetCategory {
                name: row.category_name,
                color: row.category_color,
                icon: row.category_icon,
            },
            used_amount,
            // Never clamped; negative means overspent
            remaining_amount: row.amount - used_amount,
            progress: elapsed_progress(row.start_date, row.end_date, now),
        });
    }

    Ok(out)
}

/// Elapsed-time percentage of a budget's lifetime, in [0, 100]
///
/// Whole-day arithmetic: both numerator and denominator truncate to days, so
/// progress moves in day-sized steps. A degenerate lifetime of zero or
/// negative days reports 0.
pub fn elapsed_progress(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Decimal {
    let total_days = (end - start).num_days();
    if total_days <= 0 {
        return Decimal::ZERO;
    }
    let elapsed_days = (now - start).num_days();
    let percent = Decimal::from(elapsed_days) / Decimal::from(total_days)
        * Decimal::ONE_HUNDRED;
    percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED).round_dp(2)
}

// ==================== Tests ====================
