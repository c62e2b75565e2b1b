use crate::error::{LedgerError, Result};
use crate::schema::{PropertyFile, User, UserRole};
use crate::utils::normalize_cnic;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

/// Parses a registry export (a JSON array of property files).
///
/// Rejects exports that list the same `fileNo` twice.
pub fn load_portfolio_from_str(json: &str) -> Result<Vec<PropertyFile>> {
    let files: Vec<PropertyFile> = serde_json::from_str(json)?;
    ensure_unique_file_numbers(&files)?;

    info!(
        "Loaded {} property files ({} ledger lines)",
        files.len(),
        files.iter().map(|f| f.transactions.len()).sum::<usize>()
    );

    Ok(files)
}

pub fn load_portfolio_from_path(path: &Path) -> Result<Vec<PropertyFile>> {
    debug!("Reading registry export from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    load_portfolio_from_str(&json)
}

fn ensure_unique_file_numbers(files: &[PropertyFile]) -> Result<()> {
    let mut seen = HashSet::new();
    for file in files {
        if !seen.insert(file.file_no.as_str()) {
            return Err(LedgerError::DuplicateFile(file.file_no.clone()));
        }
    }
    Ok(())
}

/// Files registered against `cnic`, compared on digits and `X` only.
pub fn files_owned_by<'a>(files: &'a [PropertyFile], cnic: &str) -> Vec<&'a PropertyFile> {
    let wanted = normalize_cnic(cnic);
    files
        .iter()
        .filter(|f| normalize_cnic(&f.owner_cnic) == wanted)
        .collect()
}

/// Admins see the whole registry, clients only their own files.
pub fn visible_files<'a>(files: &'a [PropertyFile], user: &User) -> Vec<&'a PropertyFile> {
    match user.role {
        UserRole::Admin => files.iter().collect(),
        UserRole::Client => files_owned_by(files, &user.cnic),
    }
}
