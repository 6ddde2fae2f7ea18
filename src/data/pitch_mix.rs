use std::fmt;

use super::currency::parse_amount;
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Pitch types
// ---------------------------------------------------------------------------

/// Pitch-type codes used in the pitch-mix exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PitchType {
    FourSeam,
    Cutter,
    TwoSeam,
    Changeup,
    Slider,
    Curveball,
    Splitter,
    KnuckleCurve,
    Unknown,
}

impl PitchType {
    pub const ALL: [PitchType; 9] = [
        PitchType::FourSeam,
        PitchType::Cutter,
        PitchType::TwoSeam,
        PitchType::Changeup,
        PitchType::Slider,
        PitchType::Curveball,
        PitchType::Splitter,
        PitchType::KnuckleCurve,
        PitchType::Unknown,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PitchType::FourSeam => "4S",
            PitchType::Cutter => "CT",
            PitchType::TwoSeam => "2S",
            PitchType::Changeup => "CH",
            PitchType::Slider => "SL",
            PitchType::Curveball => "CB",
            PitchType::Splitter => "SPLT",
            PitchType::KnuckleCurve => "KCB",
            PitchType::Unknown => "XX",
        }
    }

    pub fn usage_column(self) -> String {
        format!("{}%", self.code())
    }

    pub fn velocity_column(self) -> String {
        format!("v{}", self.code())
    }

    pub fn value_column(self) -> String {
        format!("w{}", self.code())
    }

    pub fn stuff_column(self) -> String {
        format!("Stf+ {}", self.code())
    }
}

impl fmt::Display for PitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// One pie slice: a pitch type with its usage and whatever metrics exist.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchSlice {
    pub pitch: PitchType,
    /// Percentage of pitches thrown, e.g. `45.0`.
    pub usage: f64,
    pub velocity: Option<f64>,
    pub value: Option<f64>,
    pub stuff: Option<f64>,
}

/// Extract the usage breakdown from row `row` of a pitch-mix table.
///
/// Pitch types whose usage column is missing, unparsable or zero are
/// omitted.
/// Metric columns that are missing or unparsable come back as `None`.
pub fn breakdown(table: &Table, row: usize) -> Vec<PitchSlice> {
    PitchType::ALL
        .into_iter()
        .filter_map(|pitch| {
            let usage = table.cell(row, &pitch.usage_column()).and_then(parse_usage)?;
            Some(PitchSlice {
                pitch,
                usage,
                velocity: metric(table, row, &pitch.velocity_column()),
                value: metric(table, row, &pitch.value_column()),
                stuff: metric(table, row, &pitch.stuff_column()),
            })
        })
        .collect()
}

/// `"45.0%"` or a bare number above zero; anything else is skipped.
fn parse_usage(cell: &CellValue) -> Option<f64> {
    let usage = match cell {
        CellValue::Text(s) => {
            let digits = s.trim().strip_suffix('%')?;
            digits.trim().parse::<f64>().ok()?
        }
        other => other.as_f64()?,
    };
    (usage.is_finite() && usage > 0.0).then_some(usage)
}

fn metric(table: &Table, row: usize, column: &str) -> Option<f64> {
    match table.cell(row, column)? {
        CellValue::Text(s) => parse_amount(s.trim_end_matches('%')),
        other => other.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_missing_metric_columns_are_none() {
        let table = Table::new(
            vec!["Name".into(), "SL%".into(), "vSL".into()],
            vec![vec![text("A"), text("45.0%"), CellValue::Float(88.2)]],
        );
        let slices = breakdown(&table, 0);
        assert_eq!(
            slices,
            vec![PitchSlice {
                pitch: PitchType::Slider,
                usage: 45.0,
                velocity: Some(88.2),
                value: None,
                stuff: None,
            }]
        );
    }

    #[test]
    fn test_all_metrics_and_order() {
        let table = Table::new(
            vec![
                "Name".into(),
                "CH%".into(),
                "4S%".into(),
                "v4S".into(),
                "w4S".into(),
                "Stf+ 4S".into(),
            ],
            vec![vec![
                text("A"),
                text("20.5%"),
                text("60.1%"),
                CellValue::Float(95.3),
                CellValue::Float(-2.1),
                CellValue::Integer(104),
            ]],
        );
        let slices = breakdown(&table, 0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].pitch, PitchType::FourSeam);
        assert_eq!(slices[0].value, Some(-2.1));
        assert_eq!(slices[0].stuff, Some(104.0));
        assert_eq!(slices[1].pitch, PitchType::Changeup);
        assert_eq!(slices[1].velocity, None);
    }

    #[test]
    fn test_unparsable_usage_is_omitted() {
        let table = Table::new(
            vec!["Name".into(), "SL%".into(), "CB%".into(), "CT%".into()],
            vec![vec![text("A"), text("n/a"), CellValue::Null, text("12.0 %")]],
        );
        let slices = breakdown(&table, 0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].pitch, PitchType::Cutter);
        assert_eq!(slices[0].usage, 12.0);
    }

    #[test]
    fn test_zero_usage_is_omitted() {
        let table = Table::new(
            vec!["Name".into(), "SL%".into(), "CH%".into(), "4S%".into()],
            vec![
                vec![text("A"), text("0.0%"), text("0.0%"), CellValue::Float(0.0)],
                vec![text("B"), text("0.0%"), text("35.0%"), CellValue::Integer(65)],
            ],
        );
        assert!(breakdown(&table, 0).is_empty());

        let pitches: Vec<PitchType> = breakdown(&table, 1).iter().map(|s| s.pitch).collect();
        assert_eq!(pitches, vec![PitchType::FourSeam, PitchType::Changeup]);
    }

    #[test]
    fn test_no_usage_columns_gives_empty_breakdown() {
        let table = Table::new(vec!["Name".into()], vec![vec![text("A")]]);
        assert!(breakdown(&table, 0).is_empty());
    }

    #[test]
    fn test_column_patterns() {
        assert_eq!(PitchType::Splitter.usage_column(), "SPLT%");
        assert_eq!(PitchType::KnuckleCurve.velocity_column(), "vKCB");
        assert_eq!(PitchType::TwoSeam.value_column(), "w2S");
        assert_eq!(PitchType::Unknown.stuff_column(), "Stf+ XX");
    }
}
