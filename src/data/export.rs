use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value as JsonValue};

use super::model::{CellValue, Table};

/// Write `table` to `path`, picking the format from the extension.
pub fn export_file(table: &Table, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if !matches!(ext.as_str(), "csv" | "json") {
        bail!("Unsupported export extension: .{ext}");
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == "csv" {
        write_csv(table, file)?;
    } else {
        write_json(table, file)?;
    }

    log::info!("Exported {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Header row, then one record per row. Nulls become empty fields.
pub fn write_csv<W: Write>(table: &Table, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&table.columns).context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row.iter().map(csv_field))
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn csv_field(cell: &CellValue) -> String {
    match cell {
        CellValue::Float(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Records-oriented JSON: `[{"Name": "A", "WAR": 3.1}, ...]`.
pub fn write_json<W: Write>(table: &Table, out: W) -> Result<()> {
    let records: Vec<JsonValue> = table
        .rows
        .iter()
        .map(|row| -> serde_json::Result<JsonValue> {
            let obj: Map<String, JsonValue> = table
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| serde_json::to_value(cell).map(|v| (col.clone(), v)))
                .collect::<serde_json::Result<_>>()?;
            Ok(JsonValue::Object(obj))
        })
        .collect::<serde_json::Result<_>>()
        .context("serialising rows")?;

    serde_json::to_writer_pretty(out, &records).context("writing JSON")?;
    Ok(())
}
