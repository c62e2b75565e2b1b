//! # Registry Ledger
//!
//! Account-ledger aggregation for a property registry portal. Turns the raw SAP-style
//! transaction log of each property file into an ordered statement with totals, and
//! classifies overdue lines into dashboard alerts.
//!
//! ## Core Concepts
//!
//! - **Payment Plan**: numbered installments (`u_intno > 0`), ordered by installment
//!   and receipt date
//! - **Other**: ad hoc charges outside the schedule, ordered by sequence
//! - **Totals**: null-as-zero sums; only the grand balance is clamped at zero
//! - **Overdue**: due date before the reference day with a positive authoritative
//!   outstanding balance
//! - **Render Pass**: one captured reference day shared by every derivation in a render
//!
//! ## Example
//!
//! ```rust,ignore
//! use registry_ledger::*;
//! use chrono::NaiveDate;
//!
//! let files = load_portfolio_from_str(include_str!("registry.json"))?;
//! let pass = RenderPass::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//!
//! let statement = pass.statement(&files[0]);
//! println!("Balance: {}", format_amount(Some(statement.totals.grand_balance)));
//!
//! let dashboard = pass.dashboard(&files);
//! for alert in &dashboard.alerts {
//!     println!("{} {:?} {}", alert.file_no, alert.kind, alert.display_amount());
//! }
//! ```

pub mod alerts;
pub mod engine;
pub mod error;
pub mod ingestion;
pub mod notifications;
pub mod schema;
pub mod utils;

#[cfg(feature = "gemini")]
pub mod llm;

pub use alerts::{
    dashboard_stats, file_status, is_overdue, line_status, portfolio_alerts, primary_alert,
    Alert, AlertKind, DashboardStats, FileStatus, LineStatus,
};
pub use engine::{build_statement, GroupedTransactions, LedgerAggregator, LedgerTotals, Statement};
pub use error::{LedgerError, Result};
pub use ingestion::*;
pub use notifications::*;
pub use schema::*;
pub use utils::*;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCard {
    pub file_no: String,
    pub plot_size: String,
    pub status: FileStatus,
    pub alert: Option<Alert>,
}

/// Dashboard view of a portfolio for one reference day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub cards: Vec<FileCard>,
    pub alerts: Vec<Alert>,
    pub stats: DashboardStats,
}

/// Holds the reference day for a single render so that every file is classified
/// against the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPass {
    today: NaiveDate,
}

impl RenderPass {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Captures the local calendar day.
    pub fn starting_now() -> Self {
        Self::new(local_today())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn statement(&self, file: &PropertyFile) -> Statement {
        LedgerAggregator::statement(file)
    }

    /// Statement lines flagged overdue for highlighting, in statement order.
    pub fn overdue_lines<'a>(&self, statement: &'a Statement) -> Vec<&'a Transaction> {
        statement
            .groups
            .payment_plan
            .iter()
            .chain(statement.groups.others.iter())
            .filter(|t| is_overdue(t, self.today))
            .collect()
    }

    pub fn dashboard(&self, files: &[PropertyFile]) -> Dashboard {
        debug!(
            "Building dashboard for {} files as of {}",
            files.len(),
            self.today
        );

        let cards = files
            .iter()
            .map(|file| FileCard {
                file_no: file.file_no.clone(),
                plot_size: file.plot_size.clone(),
                status: file_status(file, self.today),
                alert: primary_alert(file, self.today),
            })
            .collect();

        let alerts = portfolio_alerts(files, self.today);
        let stats = dashboard_stats(files, &alerts);

        Dashboard {
            today: self.today,
            cards,
            alerts,
            stats,
        }
    }

    pub fn notifications(&self, files: &[PropertyFile], user_id: &str) -> Vec<PortalNotification> {
        let alerts = portfolio_alerts(files, self.today);
        notifications_for_alerts(&alerts, user_id, &self.today.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> PropertyFile {
        PropertyFile {
            file_no: "DG-1".to_string(),
            plot_size: "5 Marla".to_string(),
            balance: 8000.0,
            transactions: vec![
                Transaction {
                    sequence: 2,
                    installment_number: 1,
                    installment_name: "1st Installment".to_string(),
                    due_date: "10-Jan-24".to_string(),
                    receivable: Some(5000.0),
                    outstanding_balance: Some(5000.0),
                    ..Default::default()
                },
                Transaction {
                    sequence: 3,
                    installment_number: 2,
                    installment_name: "2nd Installment".to_string(),
                    due_date: "10-Jun-24".to_string(),
                    receivable: Some(3000.0),
                    outstanding_balance: Some(3000.0),
                    ..Default::default()
                },
                Transaction {
                    sequence: 1,
                    installment_number: 0,
                    installment_name: "Processing Fee".to_string(),
                    due_date: "-".to_string(),
                    receivable: Some(1000.0),
                    amount_paid: Some(1000.0),
                    outstanding_balance: Some(0.0),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_pass_uses_one_reference_day() {
        let pass = RenderPass::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let file = sample_file();

        let statement = pass.statement(&file);
        let overdue = pass.overdue_lines(&statement);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].installment_name, "1st Installment");

        let dashboard = pass.dashboard(std::slice::from_ref(&file));
        assert_eq!(dashboard.cards[0].status, FileStatus::ActionRequired);
        assert_eq!(dashboard.alerts.len(), 1);
        assert!(dashboard.alerts[0].is_overdue());
        assert_eq!(dashboard.stats.overdue_alerts, 1);
    }

    #[test]
    fn test_later_pass_sees_upcoming_line_as_overdue() {
        let file = sample_file();
        let early = RenderPass::new(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        let late = RenderPass::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

        let early_alert = early.dashboard(std::slice::from_ref(&file)).alerts;
        assert_eq!(early_alert[0].kind, AlertKind::Upcoming);
        assert_eq!(early_alert[0].transaction.installment_number, 1);

        let late_statement = late.statement(&file);
        let late_overdue = late.overdue_lines(&late_statement);
        assert_eq!(late_overdue.len(), 2);
    }

    #[test]
    fn test_notifications_carry_pass_date() {
        let pass = RenderPass::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let notes = pass.notifications(&[sample_file()], "u-9");

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].date, "2024-03-01");
        assert_eq!(notes[0].notification_type, NotificationType::Critical);
    }
}
