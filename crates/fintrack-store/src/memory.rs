//! In-memory store backend
//!
//! Reference implementation of the store traits backed by plain row vectors.
//! Mirrors the inclusive-bound filtering and inner-join grouping that a
//! SQL-backed store performs, so the reporting core behaves identically on
//! either backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::types::{
    zero_amount, BudgetRecord, BudgetRow, CategoryRecord, CategorySpendRow, DateFilter,
    TransactionKind, TransactionRecord,
};
use crate::{BudgetStore, CategoryStore, TransactionStore};

/// In-memory row data
#[derive(Debug, Default)]
struct StoreData {
    transactions: Vec<TransactionRecord>,
    categories: Vec<CategoryRecord>,
    budgets: Vec<BudgetRecord>,
}

/// In-memory store implementing all three read interfaces
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&self, row: TransactionRecord) {
        self.data.write().unwrap().transactions.push(row);
    }

    pub fn add_category(&self, row: CategoryRecord) {
        self.data.write().unwrap().categories.push(row);
    }

    pub fn add_budget(&self, row: BudgetRecord) {
        self.data.write().unwrap().budgets.push(row);
    }

    /// Number of stored transactions across all users
    pub fn transaction_count(&self) -> usize {
        self.data.read().unwrap().transactions.len()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn sum_amount(
        &self,
        user_id: i64,
        kind: TransactionKind,
        filter: &DateFilter,
    ) -> StoreResult<Decimal> {
        let data = self.data.read().unwrap();
        let mut sum = Decimal::ZERO;
        let mut matched = false;
        for row in data
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && t.kind == kind && filter.matches(t))
        {
            sum += row.amount;
            matched = true;
        }
        // SQL SUM over zero rows is NULL; the contract substitutes 0.00
        if matched {
            Ok(sum)
        } else {
            Ok(zero_amount())
        }
    }

    async fn count(
        &self,
        user_id: i64,
        kind: Option<TransactionKind>,
        filter: &DateFilter,
    ) -> StoreResult<u64> {
        let data = self.data.read().unwrap();
        let count = data
            .transactions
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && kind.map_or(true, |k| t.kind == k)
                    && filter.matches(t)
            })
            .count();
        Ok(count as u64)
    }

    async fn expenses_by_category(
        &self,
        user_id: i64,
        filter: &DateFilter,
    ) -> StoreResult<Vec<CategorySpendRow>> {
        let data = self.data.read().unwrap();

        let categories: HashMap<i64, &CategoryRecord> = data
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| (c.id, c))
            .collect();

        let mut grouped: HashMap<i64, CategorySpendRow> = HashMap::new();
        for row in data.transactions.iter().filter(|t| {
            t.user_id == user_id && t.kind == TransactionKind::Expense && filter.matches(t)
        }) {
            // Inner join: uncategorized rows and dangling references drop out
            let category = match row.category_id.and_then(|id| categories.get(&id)) {
                Some(c) => *c,
                None => continue,
            };
            let entry = grouped.entry(category.id).or_insert_with(|| CategorySpendRow {
                category_id: category.id,
                name: category.name.clone(),
                color: category.color.clone(),
                icon: category.icon.clone(),
                total_amount: Decimal::ZERO,
                transaction_count: 0,
            });
            entry.total_amount += row.amount;
            entry.transaction_count += 1;
        }

        let mut rows: Vec<CategorySpendRow> = grouped.into_values().collect();
        rows.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then(a.category_id.cmp(&b.category_id))
        });
        Ok(rows)
    }
}

#[async_trait]
impl BudgetStore for MemoryStore {
    async fn find_overlapping(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<BudgetRow>> {
        let data = self.data.read().unwrap();
        let rows = data
            .budgets
            .iter()
            .filter(|b| b.user_id == user_id && b.start_date <= end && b.end_date >= start)
            .filter_map(|b| {
                // Inner join with the category for display fields
                let category = data
                    .categories
                    .iter()
                    .find(|c| c.id == b.category_id && c.user_id == user_id)?;
                Some(BudgetRow {
                    id: b.id,
                    name: b.name.clone(),
                    amount: b.amount,
                    period: b.period,
                    start_date: b.start_date,
                    end_date: b.end_date,
                    category_id: b.category_id,
                    category_name: category.name.clone(),
                    category_color: category.color.clone(),
                    category_icon: category.icon.clone(),
                })
            })
            .collect();
        Ok(rows)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn find_category(
        &self,
        user_id: i64,
        category_id: i64,
    ) -> StoreResult<Option<CategoryRecord>> {
        let data = self.data.read().unwrap();
        Ok(data
            .categories
            .iter()
            .find(|c| c.id == category_id && c.user_id == user_id)
            .cloned())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BudgetPeriod;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_category(CategoryRecord {
            id: 1,
            name: "Groceries".into(),
            color: "#00aa00".into(),
            icon: "cart".into(),
            user_id: 1,
        });
        store.add_category(CategoryRecord {
            id: 2,
            name: "Transport".into(),
            color: "#0000aa".into(),
            icon: "bus".into(),
            user_id: 1,
        });
        store.add_transaction(TransactionRecord {
            id: 1,
            amount: dec("120.50"),
            kind: TransactionKind::Expense,
            category_id: Some(1),
            user_id: 1,
            created_at: at(2026, 2, 10, 9),
        });
        store.add_transaction(TransactionRecord {
            id: 2,
            amount: dec("35.00"),
            kind: TransactionKind::Expense,
            category_id: Some(2),
            user_id: 1,
            created_at: at(2026, 2, 11, 12),
        });
        store.add_transaction(TransactionRecord {
            id: 3,
            amount: dec("2000.00"),
            kind: TransactionKind::Income,
            category_id: None,
            user_id: 1,
            created_at: at(2026, 2, 1, 8),
        });
        // Another user's row must never surface
        store.add_transaction(TransactionRecord {
            id: 4,
            amount: dec("999.99"),
            kind: TransactionKind::Expense,
            category_id: Some(1),
            user_id: 2,
            created_at: at(2026, 2, 10, 9),
        });
        store
    }

    #[tokio::test]
    async fn sum_is_scoped_by_user_and_kind() {
        let store = seeded();
        assert_eq!(store.transaction_count(), 4);
        let sum = store
            .sum_amount(1, TransactionKind::Expense, &DateFilter::unbounded())
            .await
            .unwrap();
        assert_eq!(sum, dec("155.50"));
    }

    #[tokio::test]
    async fn empty_sum_is_zero_decimal() {
        let store = MemoryStore::new();
        let sum = store
            .sum_amount(1, TransactionKind::Income, &DateFilter::unbounded())
            .await
            .unwrap();
        assert_eq!(sum, zero_amount());
        assert_eq!(sum.scale(), 2);
    }

    #[tokio::test]
    async fn date_bounds_are_inclusive_on_both_ends() {
        let store = seeded();
        let filter = DateFilter::between(at(2026, 2, 10, 9), at(2026, 2, 11, 12));
        let count = store.count(1, None, &filter).await.unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn group_by_category_orders_descending() {
        let store = seeded();
        let rows = store
            .expenses_by_category(1, &DateFilter::unbounded())
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category_id, 1);
        assert_eq!(rows[0].total_amount, dec("120.50"));
        assert_eq!(rows[1].category_id, 2);
        assert_eq!(rows[1].transaction_count, 1);
    }

    #[tokio::test]
    async fn group_by_category_breaks_ties_by_id() {
        let store = MemoryStore::new();
        for id in [2i64, 1] {
            store.add_category(CategoryRecord {
                id,
                name: format!("cat-{}", id),
                color: "#fff".into(),
                icon: "dot".into(),
                user_id: 1,
            });
            store.add_transaction(TransactionRecord {
                id,
                amount: dec("50.00"),
                kind: TransactionKind::Expense,
                category_id: Some(id),
                user_id: 1,
                created_at: at(2026, 3, 1, 0),
            });
        }
        let rows = store
            .expenses_by_category(1, &DateFilter::unbounded())
            .await
            .unwrap();
        assert_eq!(rows[0].category_id, 1);
        assert_eq!(rows[1].category_id, 2);
    }

    #[tokio::test]
    async fn uncategorized_expenses_drop_out_of_breakdown() {
        let store = seeded();
        store.add_transaction(TransactionRecord {
            id: 10,
            amount: dec("12.00"),
            kind: TransactionKind::Expense,
            category_id: None,
            user_id: 1,
            created_at: at(2026, 2, 12, 10),
        });
        let rows = store
            .expenses_by_category(1, &DateFilter::unbounded())
            .await
            .unwrap();
        let total: Decimal = rows.iter().map(|r| r.total_amount).sum();
        assert_eq!(total, dec("155.50"));
    }

    #[tokio::test]
    async fn overlapping_budgets_join_category_fields() {
        let store = seeded();
        store.add_budget(BudgetRecord {
            id: 1,
            name: "February groceries".into(),
            amount: dec("300.00"),
            period: BudgetPeriod::Monthly,
            start_date: at(2026, 2, 1, 0),
            end_date: at(2026, 3, 1, 0),
            category_id: 1,
            user_id: 1,
        });
        // Entirely outside the queried interval
        store.add_budget(BudgetRecord {
            id: 2,
            name: "January transport".into(),
            amount: dec("80.00"),
            period: BudgetPeriod::Monthly,
            start_date: at(2026, 1, 1, 0),
            end_date: at(2026, 1, 31, 0),
            category_id: 2,
            user_id: 1,
        });
        let rows = store
            .find_overlapping(1, at(2026, 2, 10, 0), at(2026, 2, 20, 0))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_name, "Groceries");
        assert_eq!(rows[0].category_icon, "cart");
    }

    #[tokio::test]
    async fn find_category_respects_ownership() {
        let store = seeded();
        assert!(store.find_category(1, 1).await.unwrap().is_some());
        assert!(store.find_category(2, 1).await.unwrap().is_none());
        assert!(store.find_category(1, 99).await.unwrap().is_none());
    }
}
