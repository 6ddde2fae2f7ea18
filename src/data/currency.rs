use crate::error::{Result, TrackerError};

use super::model::{CellValue, Table};

const CURRENCY_SYMBOL: char = '$';
const THOUSANDS_SEPARATOR: char = ',';

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// What a column holds, decided before any conversion happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-null value is text and at least one starts with `$`.
    Currency,
    /// Every non-null value is text, none dollar-formatted.
    Text,
    /// Numbers, possibly mixed with nulls.
    Numeric,
    /// Only nulls.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClass {
    pub column: String,
    pub kind: ColumnKind,
}

/// Classify every column of `table`, in column order.
pub fn classify(table: &Table) -> Vec<ColumnClass> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| ColumnClass {
            column: name.clone(),
            kind: classify_column(table.column_values(idx)),
        })
        .collect()
}

fn classify_column<'a>(values: impl Iterator<Item = &'a CellValue>) -> ColumnKind {
    let mut saw_text = false;
    let mut saw_number = false;
    let mut saw_currency = false;

    for value in values {
        match value {
            CellValue::Text(s) => {
                saw_text = true;
                saw_currency |= s.trim_start().starts_with(CURRENCY_SYMBOL);
            }
            CellValue::Integer(_) | CellValue::Float(_) => saw_number = true,
            CellValue::Null => {}
        }
    }

    match (saw_text, saw_number) {
        (false, false) => ColumnKind::Empty,
        (false, true) => ColumnKind::Numeric,
        // Mixed columns are not "all text" and are left alone.
        (true, true) => ColumnKind::Text,
        (true, false) if saw_currency => ColumnKind::Currency,
        (true, false) => ColumnKind::Text,
    }
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// Return a copy of `table` with every currency column rewritten as floats.
///
/// Each value of a currency column is stripped of `$` and `,` and parsed;
/// plain numeric-looking strings in the same column convert too. Nulls stay
/// null. Running this on an already normalised table changes nothing.
pub fn normalize(table: &Table) -> Result<Table> {
    let mut out = table.clone();

    for (idx, class) in classify(table).iter().enumerate() {
        if class.kind != ColumnKind::Currency {
            continue;
        }
        for row in &mut out.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = parse_currency_cell(&class.column, cell)?;
            }
        }
    }

    Ok(out)
}

fn parse_currency_cell(column: &str, cell: &CellValue) -> Result<CellValue> {
    match cell {
        CellValue::Text(s) => parse_amount(s)
            .map(CellValue::Float)
            .ok_or_else(|| TrackerError::Parse {
                column: column.to_string(),
                value: s.clone(),
            }),
        other => Ok(other.clone()),
    }
}

/// `"$1,200"` -> `1200.0`, `"950"` -> `950.0`.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|&c| c != CURRENCY_SYMBOL && c != THOUSANDS_SEPARATOR)
        .collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
