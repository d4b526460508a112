//! Report composition service
//!
//! `ReportService` owns the store handles and the reporting configuration and
//! assembles the full report payloads: per-period reports, the statistics
//! bundle with its well-known window snapshots, and the condensed financial
//! summary. All period math is delegated to `interval`; all numbers come from
//! `aggregate`, `breakdown` and `budget`.

use chrono::{DateTime, Datelike, Duration, Utc};
use fintrack_config::ReportingConfig;
use fintrack_store::{
    BudgetStoreRef, CategoryStoreRef, DateFilter, TransactionStoreRef,
};

use crate::aggregate;
use crate::breakdown;
use crate::budget;
use crate::error::ReportResult;
use crate::interval::{next_month_start, PeriodRequest, ReportInterval};
use crate::reports::{
    FinancialSummary, OverallStatistics, PeriodReport, PeriodSnapshots,
    TransactionStatistics, TransactionTotals,
};

/// Report composer over the store seam
pub struct ReportService {
    config: ReportingConfig,
    transactions: TransactionStoreRef,
    budgets: BudgetStoreRef,
    categories: CategoryStoreRef,
}

impl ReportService {
    /// Create a new service with config and store handles
    pub fn new(
        config: ReportingConfig,
        transactions: TransactionStoreRef,
        budgets: BudgetStoreRef,
        categories: CategoryStoreRef,
    ) -> Self {
        Self {
            config,
            transactions,
            budgets,
            categories,
        }
    }

    // ==================== Period Reports ====================

    /// Report for one calendar day (default: today)
    pub async fn daily_report(
        &self,
        user_id: i64,
        date: Option<DateTime<Utc>>,
    ) -> ReportResult<PeriodReport> {
        self.period_report(user_id, PeriodRequest::Daily { date }).await
    }

    /// Report for one week (default: Monday-aligned current week)
    pub async fn weekly_report(
        &self,
        user_id: i64,
        week_start: Option<DateTime<Utc>>,
    ) -> ReportResult<PeriodReport> {
        self.period_report(user_id, PeriodRequest::Weekly { week_start })
            .await
    }

    /// Report for one calendar month (default: the current month)
    pub async fn monthly_report(
        &self,
        user_id: i64,
        month: Option<DateTime<Utc>>,
    ) -> ReportResult<PeriodReport> {
        self.period_report(user_id, PeriodRequest::Monthly { month })
            .await
    }

    /// Report for caller-supplied bounds
    pub async fn custom_report(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ReportResult<PeriodReport> {
        self.period_report(user_id, PeriodRequest::Custom { start, end })
            .await
    }

    /// Resolve a period request and assemble its report
    pub async fn period_report(
        &self,
        user_id: i64,
        request: PeriodRequest,
    ) -> ReportResult<PeriodReport> {
        self.period_report_at(user_id, request, Utc::now()).await
    }

    /// Same as `period_report` with an explicit "now" for the resolver and
    /// the budget progress clock.
    pub async fn period_report_at(
        &self,
        user_id: i64,
        request: PeriodRequest,
        now: DateTime<Utc>,
    ) -> ReportResult<PeriodReport> {
        let interval = ReportInterval::resolve_at(request, now);
        log::debug!(
            target: "fintrack::report",
            "Resolved {} report for user {}: {} .. {}",
            interval.kind,
            user_id,
            interval.start,
            interval.end
        );
        if interval.is_inverted() {
            // Permissive: downstream filters simply match nothing
            log::warn!(
                target: "fintrack::report",
                "Inverted report interval for user {}: {} .. {}",
                user_id,
                interval.start,
                interval.end
            );
        }

        let filter = DateFilter::between(interval.start, interval.end);
        let totals =
            aggregate::transaction_totals(self.transactions.as_ref(), user_id, &filter).await?;
        let categories =
            breakdown::category_breakdown(self.transactions.as_ref(), user_id, &filter).await?;
        let budgets = budget::budget_progress(
            self.budgets.as_ref(),
            self.transactions.as_ref(),
            user_id,
            interval.start,
            interval.end,
            now,
        )
        .await?;

        Ok(PeriodReport {
            period_type: interval.kind,
            start_date: interval.start,
            end_date: interval.end,
            total_income: totals.total_income,
            total_expense: totals.total_expense,
            net_balance: totals.net_balance,
            transaction_count: totals.transaction_count,
            categories,
            budgets,
        })
    }

    // ==================== Statistics ====================

    /// All-time statistics with per-window snapshots and top categories
    pub async fn statistics(&self, user_id: i64) -> ReportResult<OverallStatistics> {
        self.statistics_at(user_id, Utc::now()).await
    }

    /// Same as `statistics` with an explicit "now" anchoring the snapshots
    ///
    /// The snapshot windows are anchored at `now` with its time-of-day kept:
    /// today is `[now, now + 1d]` and this_week runs from `now` minus the
    /// elapsed weekdays to `now` plus the remaining ones. The windows are
    /// deliberately not midnight-aligned.
    pub async fn statistics_at(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> ReportResult<OverallStatistics> {
        let store = self.transactions.as_ref();
        let all_time_filter =
            DateFilter::between(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC);
        let all_time = aggregate::transaction_totals(store, user_id, &all_time_filter).await?;

        let weekday = now.weekday().num_days_from_monday() as i64;
        let today = self.window_totals(user_id, now, now + Duration::days(1)).await?;
        let this_week = self
            .window_totals(
                user_id,
                now - Duration::days(weekday),
                now + Duration::days(7 - weekday),
            )
            .await?;
        let this_month = self
            .window_totals(
                user_id,
                now.with_day(1).unwrap_or(now),
                next_month_start(now),
            )
            .await?;

        let top_categories =
            breakdown::top_categories(store, user_id, self.config.top_categories).await?;

        Ok(OverallStatistics {
            total_income: all_time.total_income,
            total_expense: all_time.total_expense,
            net_balance: all_time.net_balance,
            transaction_count: all_time.transaction_count,
            period_stats: PeriodSnapshots {
                today,
                this_week,
                this_month,
                all_time,
            },
            top_categories,
        })
    }

    /// Condensed summary: all-time totals, trailing-window totals, top
    /// categories
    pub async fn overall_statistics(&self, user_id: i64) -> ReportResult<FinancialSummary> {
        self.overall_statistics_at(user_id, Utc::now()).await
    }

    /// Same as `overall_statistics` with an explicit "now"
    pub async fn overall_statistics_at(
        &self,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> ReportResult<FinancialSummary> {
        let store = self.transactions.as_ref();
        let all_time_filter =
            DateFilter::between(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC);
        let all_time = aggregate::transaction_totals(store, user_id, &all_time_filter).await?;

        let window_start = now - Duration::days(self.config.summary_window_days);
        let trailing = self.window_totals(user_id, window_start, now).await?;

        let top_categories =
            breakdown::top_categories(store, user_id, self.config.top_categories).await?;

        Ok(FinancialSummary {
            total_income: all_time.total_income,
            total_expense: all_time.total_expense,
            net_balance: all_time.net_balance,
            last_30_days_income: trailing.total_income,
            last_30_days_expense: trailing.total_expense,
            top_categories,
        })
    }

    /// Per-kind averages over optional bounds
    pub async fn transaction_statistics(
        &self,
        user_id: i64,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> ReportResult<TransactionStatistics> {
        aggregate::transaction_statistics(self.transactions.as_ref(), user_id, start, end).await
    }

    /// Shorthand for category ownership-checked totals
    pub async fn category_statistics(
        &self,
        user_id: i64,
        category_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ReportResult<TransactionTotals> {
        aggregate::category_statistics(
            self.transactions.as_ref(),
            self.categories.as_ref(),
            user_id,
            category_id,
            start,
            end,
        )
        .await
    }

    async fn window_totals(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ReportResult<TransactionTotals> {
        aggregate::transaction_totals(
            self.transactions.as_ref(),
            user_id,
            &DateFilter::between(start, end),
        )
        .await
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::PeriodKind;
    use chrono::TimeZone;
    use fintrack_store::{
        BudgetPeriod, BudgetRecord, CategoryRecord, MemoryStore, TransactionKind,
        TransactionRecord,
    };
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn service(store: MemoryStore) -> ReportService {
        let store = Arc::new(store);
        ReportService::new(
            ReportingConfig::default(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_category(CategoryRecord {
            id: 1,
            name: "Groceries".into(),
            color: "#0a0".into(),
            icon: "cart".into(),
            user_id: 1,
        });
        store.add_category(CategoryRecord {
            id: 2,
            name: "Transport".into(),
            color: "#00a".into(),
            icon: "bus".into(),
            user_id: 1,
        });
        // February activity
        store.add_transaction(TransactionRecord {
            id: 1,
            amount: dec("2000.00"),
            kind: TransactionKind::Income,
            category_id: None,
            user_id: 1,
            created_at: at(2026, 2, 2, 9),
        });
        store.add_transaction(TransactionRecord {
            id: 2,
            amount: dec("300.00"),
            kind: TransactionKind::Expense,
            category_id: Some(1),
            user_id: 1,
            created_at: at(2026, 2, 10, 18),
        });
        store.add_transaction(TransactionRecord {
            id: 3,
            amount: dec("80.00"),
            kind: TransactionKind::Expense,
            category_id: Some(2),
            user_id: 1,
            created_at: at(2026, 2, 17, 8),
        });
        // January expense, outside any February window
        store.add_transaction(TransactionRecord {
            id: 4,
            amount: dec("50.00"),
            kind: TransactionKind::Expense,
            category_id: Some(2),
            user_id: 1,
            created_at: at(2026, 1, 15, 12),
        });
        store.add_budget(BudgetRecord {
            id: 10,
            name: "February food".into(),
            amount: dec("400.00"),
            period: BudgetPeriod::Monthly,
            start_date: at(2026, 2, 1, 0),
            end_date: at(2026, 3, 1, 0),
            category_id: 1,
            user_id: 1,
        });
        store
    }

    #[tokio::test]
    async fn monthly_report_composes_all_three_blocks() {
        let svc = service(seeded());
        let now = at(2026, 2, 18, 14);
        let report = svc
            .period_report_at(1, PeriodRequest::Monthly { month: None }, now)
            .await
            .unwrap();

        assert_eq!(report.period_type, PeriodKind::Monthly);
        assert_eq!(report.start_date, at(2026, 2, 1, 0));
        assert_eq!(report.end_date, at(2026, 3, 1, 0));
        assert_eq!(report.total_income, dec("2000.00"));
        assert_eq!(report.total_expense, dec("380.00"));
        assert_eq!(report.net_balance, dec("1620.00"));
        assert_eq!(report.transaction_count, 3);

        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories[0].name, "Groceries");
        assert_eq!(report.categories[0].total_amount, dec("300.00"));

        assert_eq!(report.budgets.len(), 1);
        assert_eq!(report.budgets[0].used_amount, dec("300.00"));
        assert_eq!(report.budgets[0].remaining_amount, dec("100.00"));
    }

    #[tokio::test]
    async fn weekly_report_defaults_to_monday() {
        let svc = service(seeded());
        // 2026-02-18 is a Wednesday
        let now = at(2026, 2, 18, 14);
        let report = svc
            .period_report_at(1, PeriodRequest::Weekly { week_start: None }, now)
            .await
            .unwrap();
        assert_eq!(report.start_date, at(2026, 2, 16, 0));
        assert_eq!(report.end_date, at(2026, 2, 23, 0));
        // Only the Feb 17 expense falls in this week
        assert_eq!(report.total_expense, dec("80.00"));
        assert_eq!(report.transaction_count, 1);
    }

    #[tokio::test]
    async fn inverted_custom_report_is_empty_not_an_error() {
        let svc = service(seeded());
        let report = svc
            .custom_report(1, at(2026, 2, 20, 0), at(2026, 2, 1, 0))
            .await
            .unwrap();
        assert_eq!(report.transaction_count, 0);
        assert!(report.categories.is_empty());
    }

    #[tokio::test]
    async fn statistics_snapshots_are_now_anchored() {
        let svc = service(seeded());
        // Monday 14:00; the week snapshot runs Mon 14:00 .. next Mon 14:00
        let now = at(2026, 2, 16, 14);
        let stats = svc.statistics_at(1, now).await.unwrap();

        assert_eq!(stats.total_income, dec("2000.00"));
        assert_eq!(stats.total_expense, dec("430.00"));
        assert_eq!(stats.transaction_count, 4);
        assert_eq!(stats.period_stats.all_time.transaction_count, 4);

        // Today window [Feb 16 14:00, Feb 17 14:00] catches the 08:00 Feb 17
        // expense
        assert_eq!(stats.period_stats.today.total_expense, dec("80.00"));
        // Monday 14:00 start excludes nothing else this week
        assert_eq!(stats.period_stats.this_week.transaction_count, 1);
        assert_eq!(stats.period_stats.this_month.transaction_count, 3);

        assert_eq!(stats.top_categories.len(), 2);
        assert_eq!(stats.top_categories[0].name, "Groceries");
    }

    #[tokio::test]
    async fn financial_summary_uses_the_trailing_window() {
        let svc = service(seeded());
        let now = at(2026, 2, 20, 12);
        let summary = svc.overall_statistics_at(1, now).await.unwrap();

        assert_eq!(summary.total_income, dec("2000.00"));
        assert_eq!(summary.total_expense, dec("430.00"));
        assert_eq!(summary.net_balance, dec("1570.00"));
        // Trailing 30 days reaches back to Jan 21, dropping the Jan 15 row
        assert_eq!(summary.last_30_days_expense, dec("380.00"));
        assert_eq!(summary.last_30_days_income, dec("2000.00"));
        assert_eq!(summary.top_categories.len(), 2);
    }

    #[tokio::test]
    async fn top_categories_respect_the_configured_count() {
        let store = seeded();
        let arc = Arc::new(store);
        let svc = ReportService::new(
            ReportingConfig {
                top_categories: 1,
                ..ReportingConfig::default()
            },
            arc.clone(),
            arc.clone(),
            arc,
        );
        let stats = svc.statistics_at(1, at(2026, 2, 20, 12)).await.unwrap();
        assert_eq!(stats.top_categories.len(), 1);
        assert_eq!(stats.top_categories[0].name, "Groceries");
    }

    #[tokio::test]
    async fn empty_store_statistics_are_all_zero() {
        let svc = service(MemoryStore::new());
        let stats = svc.statistics_at(1, at(2026, 2, 20, 12)).await.unwrap();
        assert_eq!(stats.total_income, dec("0.00"));
        assert_eq!(stats.transaction_count, 0);
        assert!(stats.top_categories.is_empty());
        assert_eq!(stats.period_stats.today.transaction_count, 0);
    }

    #[tokio::test]
    async fn daily_report_supplied_anchor_spans_one_day() {
        let svc = service(seeded());
        let report = svc
            .daily_report(1, Some(at(2026, 2, 10, 0)))
            .await
            .unwrap();
        assert_eq!(report.period_type, PeriodKind::Daily);
        assert_eq!(report.total_expense, dec("300.00"));
        assert_eq!(report.transaction_count, 1);
    }
}
