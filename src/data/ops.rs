use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{Result, TrackerError};

use super::model::{CellValue, Table, NAME_COLUMN};

// ---------------------------------------------------------------------------
// Row concatenation
// ---------------------------------------------------------------------------

/// Stack tables vertically. The result's columns are the ordered union of the
/// inputs' columns; cells a table does not have are Null. No deduplication.
pub fn concat<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Table {
    let tables: Vec<&Table> = tables.into_iter().collect();

    let mut columns: Vec<String> = Vec::new();
    for table in &tables {
        for col in &table.columns {
            if !columns.contains(col) {
                columns.push(col.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(tables.iter().map(|t| t.len()).sum());
    for table in &tables {
        let mapping: Vec<Option<usize>> = columns.iter().map(|c| table.column_index(c)).collect();
        for row in &table.rows {
            rows.push(
                mapping
                    .iter()
                    .map(|idx| {
                        idx.and_then(|i| row.get(i).cloned())
                            .unwrap_or(CellValue::Null)
                    })
                    .collect(),
            );
        }
    }

    Table::new(columns, rows)
}

// ---------------------------------------------------------------------------
// Name-based selection
// ---------------------------------------------------------------------------

/// Unique names in first-seen order.
pub fn unique_names(table: &Table) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .names()
        .into_iter()
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

/// Rows whose `Name` is one of `names`, in table order.
pub fn filter_by_names(table: &Table, names: &[String]) -> Table {
    let Some(name_idx) = table.column_index(NAME_COLUMN) else {
        return Table::new(table.columns.clone(), Vec::new());
    };
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            row.get(name_idx)
                .is_some_and(|v| names.iter().any(|n| *n == v.to_string()))
        })
        .cloned()
        .collect();
    Table::new(table.columns.clone(), rows)
}

/// Index of the last row for `name`. With seasons concatenated in ascending
/// order this is the player's most recent season.
pub fn last_row_for(table: &Table, name: &str) -> Option<usize> {
    let name_idx = table.column_index(NAME_COLUMN)?;
    table
        .rows
        .iter()
        .rposition(|row| row.get(name_idx).is_some_and(|v| v.to_string() == name))
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

/// Players side by side: one column per player, one row per stat.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub players: Vec<String>,
    pub stats: Vec<String>,
    /// `values[stat][player]`
    pub values: Vec<Vec<CellValue>>,
}

impl Comparison {
    /// Flatten into a table with a leading `Stat` label column.
    pub fn to_table(&self) -> Table {
        let mut columns = vec!["Stat".to_string()];
        columns.extend(self.players.iter().cloned());
        let rows = self
            .stats
            .iter()
            .zip(&self.values)
            .map(|(stat, vals)| {
                let mut row = vec![CellValue::Text(stat.clone())];
                row.extend(vals.iter().cloned());
                row
            })
            .collect();
        Table::new(columns, rows)
    }
}

/// Transpose the rows of `players` out of `table`.
///
/// Players keep the order given. A player with several rows contributes
/// their last one; a player with none is a validation error.
pub fn transpose(table: &Table, players: &[String]) -> Result<Comparison> {
    let row_indices = players
        .iter()
        .map(|p| {
            last_row_for(table, p)
                .ok_or_else(|| TrackerError::validation(format!("Player '{p}' is not in the table.")))
        })
        .collect::<Result<Vec<usize>>>()?;

    let stat_indices: Vec<(usize, &String)> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.as_str() != NAME_COLUMN)
        .collect();

    let values = stat_indices
        .iter()
        .map(|(col, _)| {
            row_indices
                .iter()
                .map(|&r| table.rows[r].get(*col).cloned().unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(Comparison {
        players: players.to_vec(),
        stats: stat_indices.into_iter().map(|(_, c)| c.clone()).collect(),
        values,
    })
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Null sorts last in both directions, like a dataframe's default.
fn compare_cells(a: &CellValue, b: &CellValue, descending: bool) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.cmp(a),
        (false, false) => a.cmp(b),
    }
}

/// Row order after a stable sort on column `col`.
pub fn sorted_indices(table: &Table, col: usize, descending: bool) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..table.len()).collect();
    let null = CellValue::Null;
    indices.sort_by(|&a, &b| {
        let va = table.rows[a].get(col).unwrap_or(&null);
        let vb = table.rows[b].get(col).unwrap_or(&null);
        compare_cells(va, vb, descending)
    });
    indices
}

/// The `n` rows with the highest `stat`, descending; ties keep table order.
pub fn top_n(table: &Table, stat: &str, n: usize) -> Result<Table> {
    let col = table
        .column_index(stat)
        .ok_or_else(|| TrackerError::validation(format!("Stat '{stat}' is not available.")))?;

    let rows = sorted_indices(table, col, true)
        .into_iter()
        .take(n)
        .map(|i| table.rows[i].clone())
        .collect();
    Ok(Table::new(table.columns.clone(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn war_table(names: &[&str], war: &[f64]) -> Table {
        Table::new(
            vec!["Name".into(), "WAR".into()],
            names
                .iter()
                .zip(war)
                .map(|(n, w)| vec![text(n), CellValue::Float(*w)])
                .collect(),
        )
    }

    #[test]
    fn test_top_n_is_stable_descending() {
        let table = war_table(&["A", "B", "C", "D"], &[3.1, 5.0, 1.2, 5.0]);
        let top = top_n(&table, "WAR", 10).unwrap();
        assert_eq!(top.names(), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_top_n_truncates_to_n() {
        let names: Vec<String> = (0..15).map(|i| format!("P{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let war: Vec<f64> = (0..15).map(f64::from).collect();
        let top = top_n(&war_table(&refs, &war), "WAR", 10).unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top.names()[0], "P14");
    }

    #[test]
    fn test_top_n_nulls_last() {
        let table = Table::new(
            vec!["Name".into(), "WAR".into()],
            vec![
                vec![text("A"), CellValue::Null],
                vec![text("B"), CellValue::Integer(1)],
                vec![text("C"), CellValue::Float(2.5)],
            ],
        );
        let top = top_n(&table, "WAR", 10).unwrap();
        assert_eq!(top.names(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_top_n_on_loaded_column_with_missing_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hitters_25.csv");
        std::fs::write(&path, "Name,WAR\nA,1.5\nB,N/A\nC,10.2\nD,9.8\nE,NaN\n").unwrap();

        let table = crate::data::loader::load_table(&path).unwrap();
        let top = top_n(&table, "WAR", 10).unwrap();
        assert_eq!(top.names(), vec!["C", "D", "A", "B", "E"]);
    }

    #[test]
    fn test_top_n_missing_stat_is_validation_error() {
        let table = war_table(&["A"], &[1.0]);
        assert!(matches!(
            top_n(&table, "ERA", 10),
            Err(TrackerError::Validation(_))
        ));
    }

    #[test]
    fn test_concat_keeps_every_row_and_unions_columns() {
        let a = war_table(&["A", "B"], &[1.0, 2.0]);
        let b = Table::new(
            vec!["Name".into(), "HR".into()],
            vec![vec![text("A"), CellValue::Integer(30)]],
        );
        let out = concat([&a, &b]);
        assert_eq!(out.columns, vec!["Name", "WAR", "HR"]);
        assert_eq!(out.len(), 3);
        assert_eq!(out.rows[0][2], CellValue::Null);
        assert_eq!(out.rows[2][1], CellValue::Null);
        assert_eq!(out.rows[2][2], CellValue::Integer(30));
    }

    #[test]
    fn test_transpose_one_column_per_player() {
        let table = Table::new(
            vec!["Name".into(), "Team".into(), "WAR".into()],
            vec![
                vec![text("A"), text("NYY"), CellValue::Float(1.0)],
                vec![text("B"), text("BOS"), CellValue::Float(2.0)],
                vec![text("C"), text("LAD"), CellValue::Float(3.0)],
                vec![text("A"), text("SEA"), CellValue::Float(4.0)],
            ],
        );
        let cmp = transpose(&table, &["C".into(), "A".into()]).unwrap();
        assert_eq!(cmp.players, vec!["C", "A"]);
        assert_eq!(cmp.stats, vec!["Team", "WAR"]);
        assert_eq!(cmp.values[0], vec![text("LAD"), text("SEA")]);
        assert_eq!(cmp.values[1], vec![CellValue::Float(3.0), CellValue::Float(4.0)]);

        let flat = cmp.to_table();
        assert_eq!(flat.columns, vec!["Stat", "C", "A"]);
        assert_eq!(flat.rows[1][0], text("WAR"));
    }

    #[test]
    fn test_transpose_unknown_player() {
        let table = war_table(&["A"], &[1.0]);
        assert!(transpose(&table, &["Z".into()]).is_err());
    }

    #[test]
    fn test_unique_names_and_filter() {
        let table = war_table(&["A", "B", "A", "C"], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(unique_names(&table), vec!["A", "B", "C"]);

        let picked = filter_by_names(&table, &["A".into(), "C".into()]);
        assert_eq!(picked.names(), vec!["A", "A", "C"]);
    }

    #[test]
    fn test_sorted_indices_ascending_keeps_ties() {
        let table = war_table(&["A", "B", "C"], &[2.0, 1.0, 2.0]);
        assert_eq!(sorted_indices(&table, 1, false), vec![1, 0, 2]);
        assert_eq!(sorted_indices(&table, 1, true), vec![0, 2, 1]);
    }
}
