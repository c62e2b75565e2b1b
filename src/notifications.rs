use crate::alerts::{Alert, AlertKind};
use crate::utils::format_amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationType {
    Critical,
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationCategory {
    Payment,
    Security,
    System,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalNotification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub category: NotificationCategory,
    pub date: String,
    pub is_read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NotificationMetadata>,
}

impl PortalNotification {
    /// Builds an unread payment notification for `user_id` from a dashboard alert.
    /// `date` is the render pass's reference day, already formatted by the caller.
    pub fn from_alert(alert: &Alert, user_id: &str, date: &str) -> Self {
        let t = &alert.transaction;
        let amount = alert.display_amount();
        let label = if t.installment_name.is_empty() {
            "Ledger entry"
        } else {
            t.installment_name.as_str()
        };

        let (notification_type, title, message) = match alert.kind {
            AlertKind::Overdue => (
                NotificationType::Critical,
                format!("Overdue: {}", label),
                format!(
                    "{} on file {} was due {} and has PKR {} outstanding.",
                    label,
                    alert.file_no,
                    t.due_date,
                    format_amount(Some(amount))
                ),
            ),
            AlertKind::Upcoming => (
                NotificationType::Warning,
                format!("Upcoming: {}", label),
                format!(
                    "{} on file {} of PKR {} is due {}.",
                    label,
                    alert.file_no,
                    format_amount(Some(amount)),
                    t.due_date
                ),
            ),
        };

        Self {
            id: format!("{}-{}-{}", alert.file_no, t.installment_number, t.sequence),
            user_id: user_id.to_string(),
            title,
            message,
            notification_type,
            category: NotificationCategory::Payment,
            date: date.to_string(),
            is_read: false,
            metadata: Some(NotificationMetadata {
                amount: Some(amount),
                file_no: Some(alert.file_no.clone()),
                due_date: Some(t.due_date.clone()),
            }),
        }
    }
}

pub fn notifications_for_alerts(
    alerts: &[Alert],
    user_id: &str,
    date: &str,
) -> Vec<PortalNotification> {
    alerts
        .iter()
        .map(|alert| PortalNotification::from_alert(alert, user_id, date))
        .collect()
}

pub fn unread_count(notifications: &[PortalNotification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
