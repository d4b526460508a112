//! Report period resolution
//!
//! A report request names a period kind and an optional anchor; this module
//! resolves it exactly once into a concrete `[start, end)` interval in UTC.
//! Everything downstream is interval-agnostic: the composer and aggregators
//! only ever see resolved bounds.
//!
//! Note the asymmetry documented on `DateFilter`: derivation computes an
//! exclusive upper bound, but the query layer filters inclusively on both
//! ends. Both halves are kept as-is.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Period kind tag carried on resolved intervals and report payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// One calendar day
    Daily,
    /// Monday-aligned seven days
    Weekly,
    /// First of month to first of next month
    Monthly,
    /// Caller-supplied bounds
    Custom,
}

impl std::str::FromStr for PeriodKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(PeriodKind::Daily),
            "weekly" => Ok(PeriodKind::Weekly),
            "monthly" => Ok(PeriodKind::Monthly),
            "custom" => Ok(PeriodKind::Custom),
            _ => Err(format!("Invalid period kind: {}", s)),
        }
    }
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodKind::Daily => write!(f, "daily"),
            PeriodKind::Weekly => write!(f, "weekly"),
            PeriodKind::Monthly => write!(f, "monthly"),
            PeriodKind::Custom => write!(f, "custom"),
        }
    }
}

/// A report request before resolution
///
/// Supplied anchors are used verbatim; only the defaults are normalized.
/// Callers passing their own `week_start` or `month` are expected to
/// pre-align it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeriodRequest {
    Daily { date: Option<DateTime<Utc>> },
    Weekly { week_start: Option<DateTime<Utc>> },
    Monthly { month: Option<DateTime<Utc>> },
    Custom { start: DateTime<Utc>, end: DateTime<Utc> },
}

/// A resolved reporting interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportInterval {
    pub kind: PeriodKind,
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Exclusive upper bound by derivation (see module docs)
    pub end: DateTime<Utc>,
}

impl ReportInterval {
    /// Resolve a request against the current instant
    pub fn resolve(request: PeriodRequest) -> Self {
        Self::resolve_at(request, Utc::now())
    }

    /// Resolve a request against an explicit "now"
    pub fn resolve_at(request: PeriodRequest, now: DateTime<Utc>) -> Self {
        match request {
            PeriodRequest::Daily { date } => {
                let start = date.unwrap_or_else(|| midnight(now));
                Self {
                    kind: PeriodKind::Daily,
                    start,
                    end: start + Duration::days(1),
                }
            }
            PeriodRequest::Weekly { week_start } => {
                let start = week_start.unwrap_or_else(|| monday_of_week(now));
                Self {
                    kind: PeriodKind::Weekly,
                    start,
                    end: start + Duration::days(7),
                }
            }
            PeriodRequest::Monthly { month } => {
                let start = month.unwrap_or_else(|| first_of_month(now));
                Self {
                    kind: PeriodKind::Monthly,
                    start,
                    end: next_month_start(start),
                }
            }
            PeriodRequest::Custom { start, end } => Self {
                kind: PeriodKind::Custom,
                start,
                end,
            },
        }
    }

    /// An inverted interval yields zero rows downstream rather than failing
    pub fn is_inverted(&self) -> bool {
        self.end <= self.start
    }
}

/// Truncate to midnight UTC
pub(crate) fn midnight(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|d| d.and_utc())
        .unwrap_or(at)
}

/// Monday of the given instant's week, at midnight UTC
pub(crate) fn monday_of_week(at: DateTime<Utc>) -> DateTime<Utc> {
    midnight(at) - Duration::days(at.weekday().num_days_from_monday() as i64)
}

/// First of the given instant's month, at midnight UTC
pub(crate) fn first_of_month(at: DateTime<Utc>) -> DateTime<Utc> {
    midnight(at).with_day(1).unwrap_or_else(|| midnight(at))
}

/// First of the month after the anchor's month, preserving the anchor's
/// time-of-day.
///
/// Jump to day 28 (valid in every month), add four days to land in the next
/// month regardless of month length, then snap back to day 1. Avoids any
/// month-length table.
pub(crate) fn next_month_start(anchor: DateTime<Utc>) -> DateTime<Utc> {
    anchor
        .with_day(28)
        .map(|d| d + Duration::days(4))
        .and_then(|d| d.with_day(1))
        .unwrap_or(anchor)
}

// ==================== Tests ====================
