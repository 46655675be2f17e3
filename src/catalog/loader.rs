//! CSV ingestion with default substitution and warning collection.
//!
//! Bad rows never abort a load: a row without a name is skipped with a
//! warning, and a malformed quantity or total falls back to its default with
//! a warning naming the row and field. Only a missing or unreadable file is
//! a hard error.

use std::path::Path;

use thiserror::Error;

use super::ItemRecord;

const DEFAULT_QUANTITY: i64 = 0;
const DEFAULT_TOTAL: f64 = 0.0;

/// Hard failure opening or reading a catalog file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV not found: {0}")]
    NotFound(String),

    #[error("Failed to read CSV: {0}")]
    Read(#[from] csv::Error),
}

/// Load item records from a headered CSV file.
///
/// Expected headers: `Name`, `Tab`, `Quantity`, `Total`. Returns the parsed
/// records together with any per-row warnings.
pub fn load_csv(path: &Path) -> Result<(Vec<ItemRecord>, Vec<String>), LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    if headers.is_empty() {
        warnings.push("CSV appears to be empty or missing headers.".to_string());
        return Ok((records, warnings));
    }

    let column = |name: &str| headers.iter().position(|header| header == name);
    let name_col = column("Name");
    let tab_col = column("Tab");
    let quantity_col = column("Quantity");
    let total_col = column("Total");

    // Row numbers are 1-based with the header as row 1, matching what a
    // spreadsheet shows the user.
    for (offset, row) in reader.records().enumerate() {
        let row = row?;
        let row_index = offset + 2;
        let field = |col: Option<usize>| col.and_then(|c| row.get(c)).unwrap_or("").trim();

        let name = field(name_col);
        if name.is_empty() {
            warnings.push(format!("Row {row_index}: missing Name, row skipped."));
            continue;
        }

        let quantity = parse_with_default(
            field(quantity_col),
            DEFAULT_QUANTITY,
            &mut warnings,
            row_index,
            "Quantity",
        );
        let total = parse_with_default(
            field(total_col),
            DEFAULT_TOTAL,
            &mut warnings,
            row_index,
            "Total",
        );

        records.push(ItemRecord {
            name: name.to_string(),
            tab: field(tab_col).to_string(),
            quantity,
            total,
        });
    }

    Ok((records, warnings))
}

fn parse_with_default<T>(
    value: &str,
    default: T,
    warnings: &mut Vec<String>,
    row_index: usize,
    field_name: &str,
) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    if value.is_empty() {
        return default;
    }
    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warnings.push(format!(
                "Row {row_index}: invalid {field_name} '{value}', defaulting to {default}."
            ));
            default
        }
    }
}
