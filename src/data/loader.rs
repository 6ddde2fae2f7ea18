use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{Result, TrackerError};

use super::model::{file_name, CellValue, Dataset, PlayerCategory, Season, Table, NAME_COLUMN};

/// Per-row surrogate key present in some exports; never shown.
pub const ID_COLUMN: &str = "playerid";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every table for the given seasons from `dir`.
///
/// Hitters get Performance and Contract tables, Pitchers additionally get
/// their PitchMix table. Any missing or malformed file fails the whole load.
pub fn load_dataset(dir: &Path, seasons: &[Season]) -> Result<Dataset> {
    let mut tables = BTreeMap::new();

    for &season in seasons {
        for category in PlayerCategory::ALL {
            for &kind in category.kinds() {
                let path = dir.join(file_name(category, season, kind));
                let table = load_table(&path)?;
                tables.insert((category, season, kind), table);
            }
        }
    }

    Ok(Dataset::from_tables(tables))
}

/// CSV layout: header row with column names, one player per row.
/// A `Name` column is required; `playerid` is dropped when present.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| TrackerError::file_unavailable(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TrackerError::file_unavailable(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if !headers.iter().any(|h| h == NAME_COLUMN) {
        return Err(TrackerError::file_unavailable(
            path,
            format!("missing '{NAME_COLUMN}' column"),
        ));
    }

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            TrackerError::file_unavailable(path, format!("row {row_no}: {e}"))
        })?;
        raw_rows.push(record.iter().map(|v| v.to_string()).collect());
    }

    let table = infer_table(headers, raw_rows);
    let table = drop_column(table, ID_COLUMN);

    warn_duplicate_names(path, &table);
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );

    Ok(table)
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum InferredType {
    Integer,
    Float,
    Text,
}

/// Tokens a dataframe reader treats as missing, besides the empty cell.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(v: &str) -> bool {
    v.is_empty() || NA_TOKENS.contains(&v)
}

/// Pick one type per column the way a dataframe reader does: a column is
/// Integer when every present value parses as `i64`, Float when every one
/// parses as a finite `f64`, Text otherwise.
fn infer_column(values: &[&str]) -> InferredType {
    let present = values.iter().map(|v| v.trim()).filter(|v| !is_missing(v));
    let mut ty = InferredType::Integer;
    for v in present {
        if ty == InferredType::Integer && v.parse::<i64>().is_err() {
            ty = InferredType::Float;
        }
        if ty == InferredType::Float && parse_finite(v).is_none() {
            return InferredType::Text;
        }
    }
    ty
}

fn parse_finite(v: &str) -> Option<f64> {
    v.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn convert_cell(s: &str, ty: InferredType) -> CellValue {
    let trimmed = s.trim();
    if is_missing(trimmed) {
        return CellValue::Null;
    }
    match ty {
        InferredType::Integer => trimmed
            .parse::<i64>()
            .map(CellValue::Integer)
            .unwrap_or(CellValue::Null),
        InferredType::Float => parse_finite(trimmed)
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
        InferredType::Text => CellValue::Text(s.to_string()),
    }
}

fn infer_table(headers: Vec<String>, raw_rows: Vec<Vec<String>>) -> Table {
    let types: Vec<InferredType> = (0..headers.len())
        .map(|col| {
            let values: Vec<&str> = raw_rows
                .iter()
                .map(|r| r.get(col).map(String::as_str).unwrap_or(""))
                .collect();
            infer_column(&values)
        })
        .collect();

    let rows = raw_rows
        .iter()
        .map(|raw| {
            types
                .iter()
                .enumerate()
                .map(|(col, &ty)| convert_cell(raw.get(col).map(String::as_str).unwrap_or(""), ty))
                .collect()
        })
        .collect();

    Table::new(headers, rows)
}

fn drop_column(mut table: Table, name: &str) -> Table {
    if let Some(idx) = table.column_index(name) {
        log::debug!("Dropping '{name}' column");
        table.columns.remove(idx);
        for row in &mut table.rows {
            if idx < row.len() {
                row.remove(idx);
            }
        }
    }
    table
}

fn warn_duplicate_names(path: &Path, table: &Table) {
    let mut seen = HashSet::new();
    for name in table.names() {
        if !seen.insert(name.clone()) {
            log::warn!("{}: duplicate player name '{name}'", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::data::model::DataKind;

    fn write_season(dir: &Path, season: Season) {
        for category in PlayerCategory::ALL {
            for &kind in category.kinds() {
                let body = match kind {
                    DataKind::Performance => "playerid,Name,Team,WAR\n1,A,NYY,3.1\n2,B,BOS,5.0\n",
                    DataKind::Contract => "Name,Years,AAV\nA,3,\"$12,000,000\"\nB,1,$950\n",
                    DataKind::PitchMix => "Name, SL% ,vSL\nA,45.0%,88.2\n",
                };
                fs::write(dir.join(file_name(category, season, kind)), body).unwrap();
            }
        }
    }

    #[test]
    fn test_dataset_has_documented_kinds() {
        let dir = tempfile::tempdir().unwrap();
        write_season(dir.path(), Season::Y2024);
        write_season(dir.path(), Season::Y2025);

        let seasons = [Season::Y2024, Season::Y2025];
        let ds = load_dataset(dir.path(), &seasons).unwrap();
        assert_eq!(ds.len(), 10);

        for season in seasons {
            assert!(ds.table(PlayerCategory::Hitters, season, DataKind::Performance).is_ok());
            assert!(ds.table(PlayerCategory::Hitters, season, DataKind::Contract).is_ok());
            assert!(ds.table(PlayerCategory::Hitters, season, DataKind::PitchMix).is_err());
            assert!(ds.table(PlayerCategory::Pitchers, season, DataKind::Performance).is_ok());
            assert!(ds.table(PlayerCategory::Pitchers, season, DataKind::Contract).is_ok());
            assert!(ds.table(PlayerCategory::Pitchers, season, DataKind::PitchMix).is_ok());
        }
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_season(dir.path(), Season::Y2022);

        let first = load_dataset(dir.path(), &[Season::Y2022]).unwrap();
        let second = load_dataset(dir.path(), &[Season::Y2022]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_playerid_dropped_and_types_inferred() {
        let dir = tempfile::tempdir().unwrap();
        write_season(dir.path(), Season::Y2023);

        let table = load_table(&dir.path().join("hitters_23.csv")).unwrap();
        assert_eq!(table.columns, vec!["Name", "Team", "WAR"]);
        assert_eq!(table.rows[0][0], CellValue::Text("A".into()));
        assert_eq!(table.rows[1][2], CellValue::Float(5.0));

        let contract = load_table(&dir.path().join("hitters_23_contract.csv")).unwrap();
        assert_eq!(contract.rows[0][1], CellValue::Integer(3));
        assert_eq!(contract.rows[0][2], CellValue::Text("$12,000,000".into()));
    }

    #[test]
    fn test_headers_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        write_season(dir.path(), Season::Y2023);

        let table = load_table(&dir.path().join("pitchers_23_pitches.csv")).unwrap();
        assert!(table.has_column("SL%"));
        assert_eq!(table.cell(0, "SL%"), Some(&CellValue::Text("45.0%".into())));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_season(dir.path(), Season::Y2024);
        fs::remove_file(dir.path().join("pitchers_24_pitches.csv")).unwrap();

        let err = load_dataset(dir.path(), &[Season::Y2024]).unwrap_err();
        match err {
            TrackerError::DataUnavailable { what, .. } => {
                assert!(what.ends_with("pitchers_24_pitches.csv"))
            }
            other => panic!("Expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_column_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hitters_22.csv");
        fs::write(&path, "Player,WAR\nA,1.0\n").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, TrackerError::DataUnavailable { .. }));
    }

    #[test]
    fn test_ragged_rows_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hitters_22.csv");
        fs::write(&path, "Name,WAR\nA,1.0,extra\n").unwrap();

        assert!(matches!(
            load_table(&path),
            Err(TrackerError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_cells_become_null() {
        let table = infer_table(
            vec!["Name".into(), "WAR".into()],
            vec![vec!["A".into(), "".into()], vec!["B".into(), "2".into()]],
        );
        assert_eq!(table.rows[0][1], CellValue::Null);
        assert_eq!(table.rows[1][1], CellValue::Integer(2));
    }

    #[test]
    fn test_missing_value_tokens_become_null() {
        let table = infer_table(
            vec!["Name".into(), "WAR".into(), "G".into()],
            vec![
                vec!["A".into(), "1.5".into(), "NA".into()],
                vec!["B".into(), "N/A".into(), "140".into()],
                vec!["C".into(), "NaN".into(), "null".into()],
                vec!["D".into(), "9.8".into(), "#N/A".into()],
            ],
        );
        let war: Vec<CellValue> = table.column_values(1).cloned().collect();
        assert_eq!(
            war,
            vec![
                CellValue::Float(1.5),
                CellValue::Null,
                CellValue::Null,
                CellValue::Float(9.8)
            ]
        );
        assert!(matches!(table.rows[1][2], CellValue::Integer(140)));
        assert!(table.rows[2][2].is_null());
    }

    #[test]
    fn test_infinite_values_do_not_make_a_float_column() {
        assert_eq!(infer_column(&["1.0", "inf"]), InferredType::Text);
        assert_eq!(convert_cell("inf", InferredType::Float), CellValue::Null);
    }

    #[test]
    fn test_missing_tokens_in_text_column_are_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hitters_22_contract.csv");
        fs::write(&path, "Name,AAV\nA,\"$1,200\"\nB,N/A\n").unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows[0][1], CellValue::Text("$1,200".into()));
        assert_eq!(table.rows[1][1], CellValue::Null);
    }
}
