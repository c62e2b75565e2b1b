use crate::schema::{PropertyFile, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived lifecycle of a ledger line relative to a reference day. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStatus {
    /// Balance outstanding, due today or later.
    PendingFuture,
    /// Balance outstanding, due date already passed.
    Overdue,
    /// The registry reports nothing outstanding on the line.
    Settled,
    /// Balance outstanding but the due date is absent or unreadable.
    Unscheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    ActionRequired,
    ActiveLedger,
    ClearanceVerified,
}

impl FileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ActionRequired => "Action Required",
            Self::ActiveLedger => "Active Ledger",
            Self::ClearanceVerified => "Clearance Verified",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Overdue,
    Upcoming,
}

/// The single ledger line a file surfaces on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub file_no: String,
    pub plot_size: String,
    pub transaction: Transaction,
}

impl Alert {
    pub fn is_overdue(&self) -> bool {
        self.kind == AlertKind::Overdue
    }

    /// Outstanding balance for an overdue alert, receivable for an upcoming one.
    pub fn display_amount(&self) -> f64 {
        match self.kind {
            AlertKind::Overdue => self.transaction.outstanding_or_zero(),
            AlertKind::Upcoming => self.transaction.receivable_or_zero(),
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.transaction.parsed_due_date()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub verified_assets: usize,
    pub active_records: usize,
    pub overdue_alerts: usize,
}

pub fn is_overdue(transaction: &Transaction, today: NaiveDate) -> bool {
    matches!(transaction.parsed_due_date(), Some(due) if due < today)
        && transaction.outstanding_or_zero() > 0.0
}

pub fn line_status(transaction: &Transaction, today: NaiveDate) -> LineStatus {
    if transaction.outstanding_or_zero() <= 0.0 {
        return LineStatus::Settled;
    }

    match transaction.parsed_due_date() {
        Some(due) if due < today => LineStatus::Overdue,
        Some(_) => LineStatus::PendingFuture,
        None => LineStatus::Unscheduled,
    }
}

fn is_next_commitment(transaction: &Transaction, today: NaiveDate) -> bool {
    matches!(transaction.parsed_due_date(), Some(due) if due >= today)
        && transaction.is_unpaid()
        && transaction.receivable_or_zero() > 0.0
}

fn earliest_due<'a, I>(candidates: I) -> Option<&'a Transaction>
where
    I: Iterator<Item = &'a Transaction>,
{
    // min_by_key yields the first of equal minima.
    candidates
        .filter_map(|t| t.parsed_due_date().map(|d| (d, t)))
        .min_by_key(|(d, _)| *d)
        .map(|(_, t)| t)
}

/// Earliest-due overdue line, falling back to the earliest-due unpaid commitment that
/// falls on or after `today`.
pub fn primary_alert(file: &PropertyFile, today: NaiveDate) -> Option<Alert> {
    let overdue = earliest_due(file.transactions.iter().filter(|t| is_overdue(t, today)));

    let (kind, transaction) = match overdue {
        Some(t) => (AlertKind::Overdue, t),
        None => {
            let next = earliest_due(
                file.transactions
                    .iter()
                    .filter(|t| is_next_commitment(t, today)),
            )?;
            (AlertKind::Upcoming, next)
        }
    };

    Some(Alert {
        kind,
        file_no: file.file_no.clone(),
        plot_size: file.plot_size.clone(),
        transaction: transaction.clone(),
    })
}

pub fn file_status(file: &PropertyFile, today: NaiveDate) -> FileStatus {
    if file.transactions.iter().any(|t| is_overdue(t, today)) {
        FileStatus::ActionRequired
    } else if file.balance > 0.0 {
        FileStatus::ActiveLedger
    } else {
        FileStatus::ClearanceVerified
    }
}

/// One alert per file at most, overdue alerts first, file order preserved within each kind.
pub fn portfolio_alerts(files: &[PropertyFile], today: NaiveDate) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = files
        .iter()
        .filter_map(|file| primary_alert(file, today))
        .collect();

    alerts.sort_by_key(|a| !a.is_overdue());
    alerts
}

pub fn dashboard_stats(files: &[PropertyFile], alerts: &[Alert]) -> DashboardStats {
    DashboardStats {
        verified_assets: files.len(),
        active_records: files.iter().filter(|f| f.balance > 0.0).count(),
        overdue_alerts: alerts.iter().filter(|a| a.is_overdue()).count(),
    }
}
