//! Core reporting and statistics engine
//!
//! Resolves report periods, aggregates transactions, breaks expenses down by
//! category, computes budget progress and composes the full report payloads.
//! Data access goes through the `fintrack-store` traits; this crate never
//! touches a backend directly.

pub mod aggregate;
pub mod breakdown;
pub mod budget;
pub mod error;
pub mod interval;
pub mod reports;
pub mod service;

pub use error::{ReportError, ReportErrorCode, ReportResult};
pub use interval::{PeriodKind, PeriodRequest, ReportInterval};
pub use reports::{
    BudgetCategory, BudgetProgress, FinancialSummary, OverallStatistics, PeriodReport,
    PeriodSnapshots, TransactionStatistics, TransactionTotals,
};
pub use service::ReportService;
