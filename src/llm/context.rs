use crate::schema::PropertyFile;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The per-file fields handed to the summarization service. Kept deliberately narrow:
/// changing this shape changes what the model sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileSnapshot {
    #[schemars(description = "Registry file number")]
    pub id: String,

    #[schemars(description = "Registered owner name")]
    pub owner: String,

    #[schemars(description = "Plot size label, e.g. '5 Marla'")]
    pub size: String,

    #[schemars(description = "Total plot value (PKR)")]
    pub total_val: f64,

    #[schemars(description = "Payments received to date (PKR)")]
    pub paid: f64,

    #[schemars(description = "Outstanding balance (PKR)")]
    pub balance: f64,

    #[schemars(description = "Amount currently overdue (PKR)")]
    pub overdue: f64,
}

impl From<&PropertyFile> for FileSnapshot {
    fn from(file: &PropertyFile) -> Self {
        Self {
            id: file.file_no.clone(),
            owner: file.owner_name.clone(),
            size: file.plot_size.clone(),
            total_val: file.plot_value,
            paid: file.payment_received,
            balance: file.balance,
            overdue: file.overdue,
        }
    }
}

impl FileSnapshot {
    pub fn json_schema() -> serde_json::Result<String> {
        serde_json::to_string_pretty(&schemars::schema_for!(Vec<FileSnapshot>))
    }
}

pub fn snapshot_files<'a, I>(files: I) -> Vec<FileSnapshot>
where
    I: IntoIterator<Item = &'a PropertyFile>,
{
    files.into_iter().map(FileSnapshot::from).collect()
}
