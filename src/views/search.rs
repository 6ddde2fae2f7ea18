use crate::data::model::{DataKind, Dataset, PlayerCategory, Season, Table};
use crate::data::ops::{self, Comparison};
use crate::data::pitch_mix::{self, PitchSlice};
use crate::error::{Result, TrackerError};

use super::{normalized_table, season_list};

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub seasons: Vec<Season>,
    pub category: PlayerCategory,
    pub kind: DataKind,
    /// Players to compare, in the order they were picked.
    pub players: Vec<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            seasons: vec![Season::latest()],
            category: PlayerCategory::Hitters,
            kind: DataKind::Performance,
            players: Vec::new(),
        }
    }
}

/// Per-pitcher pie chart data, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum MixOutcome {
    Chart(Vec<PitchSlice>),
    Warning(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PitcherMix {
    pub name: String,
    pub outcome: MixOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PitchSection {
    /// Pitch-mix rows of the selected players over the selected seasons.
    pub table: Table,
    pub warning: Option<String>,
    pub pitchers: Vec<PitcherMix>,
}

#[derive(Debug, Clone)]
pub struct SearchView {
    pub title: String,
    pub combined: Table,
    pub comparison_title: String,
    pub comparison: Result<Comparison>,
    /// Pitchers only.
    pub pitch_mix: Option<Result<PitchSection>>,
}

fn ordered_seasons(seasons: &[Season]) -> Result<Vec<Season>> {
    let mut seasons = seasons.to_vec();
    seasons.sort();
    seasons.dedup();
    if seasons.is_empty() {
        return Err(TrackerError::validation("Select at least one season."));
    }
    Ok(seasons)
}

/// Row-concatenation of the selected seasons' normalised tables, oldest first.
pub fn combined_table(
    dataset: &Dataset,
    seasons: &[Season],
    category: PlayerCategory,
    kind: DataKind,
) -> Result<Table> {
    let tables = ordered_seasons(seasons)?
        .into_iter()
        .map(|season| normalized_table(dataset, category, season, kind))
        .collect::<Result<Vec<Table>>>()?;
    Ok(ops::concat(&tables))
}

/// Names the comparison picker offers, first-seen order.
pub fn available_players(dataset: &Dataset, params: &SearchParams) -> Result<Vec<String>> {
    let combined = combined_table(dataset, &params.seasons, params.category, params.kind)?;
    Ok(ops::unique_names(&combined))
}

/// Players selected before the user touches the picker.
pub fn default_players(available: &[String]) -> Vec<String> {
    available.iter().take(MIN_COMPARE).cloned().collect()
}

pub fn validate_selection(players: &[String]) -> Result<()> {
    if players.len() < MIN_COMPARE {
        return Err(TrackerError::validation(format!(
            "Please select at least {MIN_COMPARE} players for comparison."
        )));
    }
    if players.len() > MAX_COMPARE {
        return Err(TrackerError::validation(format!(
            "Select at most {MAX_COMPARE} players for comparison."
        )));
    }
    Ok(())
}

pub fn search_compare(dataset: &Dataset, params: &SearchParams) -> Result<SearchView> {
    let seasons = ordered_seasons(&params.seasons)?;
    let combined = combined_table(dataset, &seasons, params.category, params.kind)?;
    let years = season_list(&seasons);

    let comparison = validate_selection(&params.players)
        .and_then(|()| ops::transpose(&combined, &params.players));

    let pitch_mix = (params.category == PlayerCategory::Pitchers)
        .then(|| pitch_section(dataset, &seasons, &params.players));

    Ok(SearchView {
        title: format!("{} {} for {years}", params.category.label(), params.kind.label()),
        combined,
        comparison_title: format!("{} Comparison for {years}", params.category.label()),
        comparison,
        pitch_mix,
    })
}

fn pitch_section(dataset: &Dataset, seasons: &[Season], players: &[String]) -> Result<PitchSection> {
    let all = combined_table(dataset, seasons, PlayerCategory::Pitchers, DataKind::PitchMix)?;
    let table = ops::filter_by_names(&all, players);

    if table.is_empty() {
        return Ok(PitchSection {
            table,
            warning: Some("No pitch type data available for the selected players.".to_string()),
            pitchers: Vec::new(),
        });
    }

    let pitchers = players
        .iter()
        .map(|name| PitcherMix {
            name: name.clone(),
            outcome: pitcher_outcome(&table, name),
        })
        .collect();

    Ok(PitchSection {
        table,
        warning: None,
        pitchers,
    })
}

fn pitcher_outcome(table: &Table, name: &str) -> MixOutcome {
    let Some(row) = ops::last_row_for(table, name) else {
        return MixOutcome::Warning(format!("No pitch data available for {name}."));
    };
    let slices = pitch_mix::breakdown(table, row);
    if slices.is_empty() {
        log::warn!("No parsable pitch usage for {name}");
        return MixOutcome::Warning(format!("No valid pitch usage data available for {name}."));
    }
    MixOutcome::Chart(slices)
}
