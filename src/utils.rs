use chrono::{Local, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NO_DATE_SENTINELS: [&str; 3] = ["", "-", "NULL"];

/// Parses a registry date in `DD-Mon-YY` or `DD-Mon-YYYY` form.
///
/// Returns `None` for sentinels (`-`, empty, `NULL`), for any shape other than three
/// `-`-separated components, for unknown month tokens, and for days that do not exist
/// in the given month. Two-digit years are read as 20YY; years of 100 and above are
/// taken literally.
///
/// # Examples
/// - `"10-Jan-24"` → 2024-01-10
/// - `"10-jan-2024"` → 2024-01-10
/// - `"10/Jan/24"` → `None`
pub fn parse_sap_date(value: &str) -> Option<NaiveDate> {
    if NO_DATE_SENTINELS.contains(&value) {
        return None;
    }

    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month = month_number(parts[1].trim())?;
    let mut year: i32 = parts[2].trim().parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Looks up a month abbreviation case-insensitively. Only the exact three-letter forms
/// match; `January` or `Sept` yield `None`.
pub fn month_number(token: &str) -> Option<u32> {
    let mut chars = token.chars();
    let first = chars.next()?;
    let normalized: String = first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect();

    MONTHS
        .iter()
        .position(|m| *m == normalized)
        .map(|idx| idx as u32 + 1)
}

/// Formats a date back into the registry's `DD-Mon-YY` form.
pub fn format_sap_date(date: NaiveDate) -> String {
    date.format("%d-%b-%y").to_string()
}

/// The current local calendar day. Capture once per render pass.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Statement rendering of an amount: `-` when absent or zero, otherwise rounded to whole
/// units with thousands separators.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v == 0.0 || !v.is_finite() => "-".to_string(),
        Some(v) => group_thousands(v.round() as i64),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Strips a CNIC down to its digits and the `X` placeholder so differently punctuated
/// forms of the same identity compare equal.
pub fn normalize_cnic(cnic: &str) -> String {
    cnic.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X')
        .collect()
}
