use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, TrackerError};

/// Column every table must carry; identifies a player within one table.
pub const NAME_COLUMN: &str = "Name";

static NULL_CELL: CellValue = CellValue::Null;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a dataframe reader infers
/// from CSV: integers, floats, free text and missing values.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so cells can be sorted and deduplicated --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    /// Null < numbers < text. Integers and floats compare by value, so
    /// `Integer(1)` equals `Float(1.0)`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) | Float(_) => 1,
                Text(_) => 2,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (a, b) => {
                let fa = a.as_f64().unwrap_or(f64::NAN);
                let fb = b.as_f64().unwrap_or(f64::NAN);
                fa.total_cmp(&fb)
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{v:.0}"),
            CellValue::Float(v) => {
                let s = format!("{v:.3}");
                write!(f, "{}", s.trim_end_matches('0').trim_end_matches('.'))
            }
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell, `None` for text and missing values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – one loaded CSV file (or a derived slice of one)
// ---------------------------------------------------------------------------

/// Rectangular data: named columns, one `Vec<CellValue>` per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Table { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (`row`, column `name`), `None` when the column is absent.
    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        let idx = self.column_index(name)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Iterator over one column's cells.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().map(move |r| r.get(idx).unwrap_or(&NULL_CELL))
    }

    /// The player names of every row, in row order.
    pub fn names(&self) -> Vec<String> {
        let Some(idx) = self.column_index(NAME_COLUMN) else {
            return Vec::new();
        };
        self.column_values(idx).map(|v| v.to_string()).collect()
    }

    /// Columns other than `Name`, in table order.
    pub fn stat_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.as_str() != NAME_COLUMN)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Lookup keys
// ---------------------------------------------------------------------------

/// Free-agency class covered by the exported files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Y2022,
    Y2023,
    Y2024,
    Y2025,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Y2022, Season::Y2023, Season::Y2024, Season::Y2025];

    pub fn year(self) -> u16 {
        2000 + u16::from(self.suffix())
    }

    /// Two-digit suffix used in file names and lookups.
    pub fn suffix(self) -> u8 {
        match self {
            Season::Y2022 => 22,
            Season::Y2023 => 23,
            Season::Y2024 => 24,
            Season::Y2025 => 25,
        }
    }

    pub fn latest() -> Season {
        Season::Y2025
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerCategory {
    Hitters,
    Pitchers,
}

impl PlayerCategory {
    pub const ALL: [PlayerCategory; 2] = [PlayerCategory::Hitters, PlayerCategory::Pitchers];

    pub fn label(self) -> &'static str {
        match self {
            PlayerCategory::Hitters => "Hitters",
            PlayerCategory::Pitchers => "Pitchers",
        }
    }

    /// File-name prefix, e.g. `hitters_24.csv`.
    pub fn file_prefix(self) -> &'static str {
        match self {
            PlayerCategory::Hitters => "hitters",
            PlayerCategory::Pitchers => "pitchers",
        }
    }

    /// The tables exported for this category in every season.
    pub fn kinds(self) -> &'static [DataKind] {
        match self {
            PlayerCategory::Hitters => &[DataKind::Performance, DataKind::Contract],
            PlayerCategory::Pitchers => {
                &[DataKind::Performance, DataKind::Contract, DataKind::PitchMix]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataKind {
    Performance,
    Contract,
    /// Pitchers only.
    PitchMix,
}

impl DataKind {
    /// The kinds a user picks between on the pages.
    pub const SELECTABLE: [DataKind; 2] = [DataKind::Performance, DataKind::Contract];

    pub fn label(self) -> &'static str {
        match self {
            DataKind::Performance => "Performance Data",
            DataKind::Contract => "Contract Data",
            DataKind::PitchMix => "Pitch Mix Data",
        }
    }

    pub fn file_suffix(self) -> &'static str {
        match self {
            DataKind::Performance => "",
            DataKind::Contract => "_contract",
            DataKind::PitchMix => "_pitches",
        }
    }
}

/// `{category}_{YY}{suffix}.csv`
pub fn file_name(category: PlayerCategory, season: Season, kind: DataKind) -> String {
    format!(
        "{}_{}{}.csv",
        category.file_prefix(),
        season.suffix(),
        kind.file_suffix()
    )
}

// ---------------------------------------------------------------------------
// Dataset – every loaded table
// ---------------------------------------------------------------------------

pub type TableKey = (PlayerCategory, Season, DataKind);

/// The full corpus, indexed by (category, season, kind). Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    tables: BTreeMap<TableKey, Table>,
}

impl Dataset {
    pub fn from_tables(tables: BTreeMap<TableKey, Table>) -> Self {
        Dataset { tables }
    }

    pub fn table(&self, category: PlayerCategory, season: Season, kind: DataKind) -> Result<&Table> {
        self.tables.get(&(category, season, kind)).ok_or_else(|| {
            TrackerError::unavailable(
                file_name(category, season, kind),
                "table was not loaded",
            )
        })
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_follow_convention() {
        assert_eq!(
            file_name(PlayerCategory::Hitters, Season::Y2022, DataKind::Performance),
            "hitters_22.csv"
        );
        assert_eq!(
            file_name(PlayerCategory::Pitchers, Season::Y2024, DataKind::Contract),
            "pitchers_24_contract.csv"
        );
        assert_eq!(
            file_name(PlayerCategory::Pitchers, Season::Y2025, DataKind::PitchMix),
            "pitchers_25_pitches.csv"
        );
    }

    #[test]
    fn test_season_lookup() {
        assert_eq!(Season::Y2023.year(), 2023);
        assert_eq!(Season::latest().year(), 2025);
        assert_eq!(Season::latest(), *Season::ALL.last().unwrap());
    }

    #[test]
    fn test_cell_ordering_and_display() {
        let mut cells = vec![
            CellValue::Text("b".into()),
            CellValue::Float(2.5),
            CellValue::Null,
            CellValue::Integer(3),
            CellValue::Integer(1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                CellValue::Null,
                CellValue::Integer(1),
                CellValue::Float(2.5),
                CellValue::Integer(3),
                CellValue::Text("b".into()),
            ]
        );

        assert_eq!(CellValue::Float(1200.0).to_string(), "1200");
        assert_eq!(CellValue::Float(0.275).to_string(), "0.275");
        assert_eq!(CellValue::Float(3.10).to_string(), "3.1");
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn test_equality_agrees_with_ordering() {
        let pairs = [
            (CellValue::Integer(1), CellValue::Float(1.0)),
            (CellValue::Float(f64::NAN), CellValue::Float(f64::NAN)),
            (CellValue::Null, CellValue::Null),
            (CellValue::Integer(2), CellValue::Float(2.5)),
            (CellValue::Text("1".into()), CellValue::Integer(1)),
        ];
        for (a, b) in &pairs {
            assert_eq!(a == b, a.cmp(b) == std::cmp::Ordering::Equal, "{a:?} vs {b:?}");
            assert_eq!(a == b, b == a);
        }
        assert_eq!(CellValue::Integer(1), CellValue::Float(1.0));
        assert_ne!(CellValue::Integer(2), CellValue::Float(2.5));

        let nan = CellValue::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
    }

    #[test]
    fn test_missing_table_is_unavailable() {
        let ds = Dataset::default();
        let err = ds
            .table(PlayerCategory::Hitters, Season::Y2025, DataKind::PitchMix)
            .unwrap_err();
        assert!(matches!(err, TrackerError::DataUnavailable { .. }));
    }
}
