use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::parse_sap_date;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[schemars(description = "Property owner. Sees only the files registered against their CNIC.")]
    Client,

    #[schemars(description = "Registry staff. Sees every property file in the registry.")]
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "CLIENT"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    pub id: String,
    pub cnic: String,
    pub name: String,
    pub role: UserRole,
}

/// One ledger line as exported from the registry (SAP Business One column names).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    #[serde(rename = "seq", default)]
    #[schemars(description = "Stable ordering key for lines outside the installment schedule")]
    pub sequence: i64,

    #[serde(rename = "u_intno", default)]
    #[schemars(
        description = "Installment number. 0 means the line is not part of the numbered payment plan."
    )]
    pub installment_number: u32,

    #[serde(rename = "u_intname", default)]
    #[schemars(description = "Installment label, e.g. 'Down Payment' or '1st Installment'")]
    pub installment_name: String,

    #[serde(rename = "duedate", default)]
    #[schemars(
        description = "Due date as DD-Mon-YY or DD-Mon-YYYY. '-', '' or 'NULL' mean no due date."
    )]
    pub due_date: String,

    #[serde(default)]
    pub receivable: Option<f64>,

    #[serde(default)]
    pub amount_paid: Option<f64>,

    #[serde(rename = "balduedeb", default)]
    #[schemars(
        description = "Outstanding balance reported by the registry for this line. Authoritative, never recomputed."
    )]
    pub outstanding_balance: Option<f64>,

    #[serde(default)]
    pub surcharge: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<String>,

    #[serde(rename = "mode", default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,

    #[serde(rename = "instrument_no", default, skip_serializing_if = "Option::is_none")]
    pub instrument_number: Option<String>,

    #[serde(rename = "transid", default, skip_serializing_if = "Option::is_none")]
    pub trans_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_id: Option<i64>,

    #[serde(rename = "itemcode", default, skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(rename = "doctotal", default, skip_serializing_if = "Option::is_none")]
    pub document_total: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Transaction {
    pub fn is_payment_plan(&self) -> bool {
        self.installment_number > 0
    }

    pub fn parsed_due_date(&self) -> Option<NaiveDate> {
        parse_sap_date(&self.due_date)
    }

    pub fn parsed_receipt_date(&self) -> Option<NaiveDate> {
        self.receipt_date.as_deref().and_then(parse_sap_date)
    }

    pub fn receivable_or_zero(&self) -> f64 {
        self.receivable.unwrap_or(0.0)
    }

    pub fn paid_or_zero(&self) -> f64 {
        self.amount_paid.unwrap_or(0.0)
    }

    pub fn outstanding_or_zero(&self) -> f64 {
        self.outstanding_balance.unwrap_or(0.0)
    }

    pub fn surcharge_or_zero(&self) -> f64 {
        self.surcharge.unwrap_or(0.0)
    }

    /// True when no payment has been recorded against the line.
    pub fn is_unpaid(&self) -> bool {
        self.paid_or_zero() == 0.0
    }
}

/// A registered plot with its pre-computed financial snapshot and raw ledger.
///
/// The snapshot fields (`plot_value`, `balance`, `payment_received`, `overdue`,
/// `surcharge`) come from the registry alongside the ledger and are displayed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFile {
    pub file_no: String,

    #[serde(default)]
    pub currency_no: String,

    #[serde(default)]
    pub plot_size: String,

    #[serde(default)]
    pub plot_value: f64,

    #[serde(default)]
    pub balance: f64,

    #[serde(default)]
    pub payment_received: f64,

    #[serde(default)]
    pub overdue: f64,

    #[serde(default)]
    pub surcharge: f64,

    #[serde(default)]
    pub owner_name: String,

    #[serde(rename = "ownerCNIC", default)]
    pub owner_cnic: String,

    #[serde(default)]
    pub father_name: String,

    #[serde(default)]
    pub cell_no: String,

    #[serde(default)]
    pub reg_date: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub plot_no: String,

    #[serde(default)]
    pub block: String,

    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl PropertyFile {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PropertyFile)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
