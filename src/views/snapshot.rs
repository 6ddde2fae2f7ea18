use crate::data::model::{DataKind, Dataset, PlayerCategory, Season, Table};
use crate::error::Result;

use super::normalized_table;

/// Full hitters and pitchers tables of the most recent class.
#[derive(Debug, Clone)]
pub struct SnapshotView {
    pub title: String,
    pub hitters: Result<Table>,
    pub pitchers: Result<Table>,
}

pub fn year_snapshot(dataset: &Dataset, kind: DataKind) -> SnapshotView {
    let season = Season::latest();
    SnapshotView {
        title: format!("{season} Free Agents - {} Data", season.year() - 1),
        hitters: normalized_table(dataset, PlayerCategory::Hitters, season, kind),
        pitchers: normalized_table(dataset, PlayerCategory::Pitchers, season, kind),
    }
}
