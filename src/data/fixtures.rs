//! In-memory dataset for page tests.

use std::collections::BTreeMap;

use super::model::{CellValue, DataKind, Dataset, PlayerCategory, Season, Table};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn performance(season: Season, category: PlayerCategory) -> Table {
    let tag = format!("{}{}", &category.label()[..1], season.suffix());
    let rows = (0..3)
        .map(|i| {
            vec![
                text(&format!("{tag}-{i}")),
                text("NYY"),
                CellValue::Float(1.0 + f64::from(i)),
                CellValue::Integer(100 + i64::from(i)),
            ]
        })
        .collect();
    Table::new(
        vec!["Name".into(), "Team".into(), "WAR".into(), "G".into()],
        rows,
    )
}

fn contract(season: Season, category: PlayerCategory) -> Table {
    let tag = format!("{}{}", &category.label()[..1], season.suffix());
    let rows = (0..3)
        .map(|i| {
            vec![
                text(&format!("{tag}-{i}")),
                CellValue::Integer(1 + i64::from(i)),
                text(&format!("${},000,000", 5 + i)),
            ]
        })
        .collect();
    Table::new(vec!["Name".into(), "Years".into(), "AAV".into()], rows)
}

fn pitch_mix(season: Season) -> Table {
    let tag = format!("P{}", season.suffix());
    Table::new(
        vec![
            "Name".into(),
            "4S%".into(),
            "v4S".into(),
            "w4S".into(),
            "Stf+ 4S".into(),
            "SL%".into(),
            "vSL".into(),
        ],
        vec![
            vec![
                text(&format!("{tag}-0")),
                text("55.0%"),
                CellValue::Float(95.1),
                CellValue::Float(4.2),
                CellValue::Integer(108),
                text("45.0%"),
                CellValue::Float(88.2),
            ],
            vec![
                text(&format!("{tag}-1")),
                text("n/a"),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
            ],
        ],
    )
}

/// Three players per table, named `{H|P}{YY}-{i}`; pitch mix only for
/// `P{YY}-0` (usable) and `P{YY}-1` (no parsable usage).
pub fn dataset() -> Dataset {
    let mut tables = BTreeMap::new();
    for season in Season::ALL {
        for category in PlayerCategory::ALL {
            tables.insert(
                (category, season, DataKind::Performance),
                performance(season, category),
            );
            tables.insert((category, season, DataKind::Contract), contract(season, category));
        }
        tables.insert(
            (PlayerCategory::Pitchers, season, DataKind::PitchMix),
            pitch_mix(season),
        );
    }
    Dataset::from_tables(tables)
}
