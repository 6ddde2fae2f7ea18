use crate::data::model::{DataKind, Dataset, PlayerCategory, Season, Table};
use crate::data::ops;
use crate::error::{Result, TrackerError};

use super::normalized_table;

pub const LEADER_COUNT: usize = 10;
pub const DEFAULT_STAT: &str = "WAR";

#[derive(Debug, Clone, PartialEq)]
pub struct LeadersParams {
    pub season: Season,
    pub category: PlayerCategory,
    pub kind: DataKind,
    /// `None` picks [`default_stat`].
    pub stat: Option<String>,
}

impl Default for LeadersParams {
    fn default() -> Self {
        LeadersParams {
            season: Season::latest(),
            category: PlayerCategory::Hitters,
            kind: DataKind::Performance,
            stat: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeadersView {
    pub title: String,
    pub stat: String,
    pub stat_options: Vec<String>,
    pub leaders: Table,
    /// Pitchers + Performance only: the season's full pitch-mix table.
    pub pitch_mix: Option<Result<Table>>,
}

/// `WAR` when present, else the first column after `Name`.
pub fn default_stat(table: &Table) -> Option<String> {
    if table.has_column(DEFAULT_STAT) {
        return Some(DEFAULT_STAT.to_string());
    }
    table.stat_columns().into_iter().next()
}

pub fn stat_options(dataset: &Dataset, params: &LeadersParams) -> Result<Vec<String>> {
    Ok(dataset
        .table(params.category, params.season, params.kind)?
        .stat_columns())
}

pub fn top_leaders(dataset: &Dataset, params: &LeadersParams) -> Result<LeadersView> {
    let table = normalized_table(dataset, params.category, params.season, params.kind)?;

    let stat = match &params.stat {
        Some(stat) => stat.clone(),
        None => default_stat(&table)
            .ok_or_else(|| TrackerError::validation("No stats available to rank by."))?,
    };
    let leaders = ops::top_n(&table, &stat, LEADER_COUNT)?;

    let pitch_mix = (params.category == PlayerCategory::Pitchers
        && params.kind == DataKind::Performance)
        .then(|| {
            normalized_table(dataset, PlayerCategory::Pitchers, params.season, DataKind::PitchMix)
        });

    Ok(LeadersView {
        title: format!(
            "Top {LEADER_COUNT} {} by {stat}, {} class",
            params.category.label(),
            params.season
        ),
        stat,
        stat_options: table.stat_columns(),
        leaders,
        pitch_mix,
    })
}
