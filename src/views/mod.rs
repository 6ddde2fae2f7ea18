//! Pages as pure functions of `(&Dataset, parameters)`.
//!
//! Nothing here touches egui; `ui::pages` turns the returned view models into
//! widgets. None of these functions mutate the dataset.

pub mod home;
pub mod leaders;
pub mod search;
pub mod snapshot;

use crate::data::currency;
use crate::data::model::{DataKind, Dataset, PlayerCategory, Season, Table};
use crate::error::Result;

/// The page picked in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    SearchCompare,
    YearSnapshot,
    TopLeaders,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::SearchCompare,
        Page::YearSnapshot,
        Page::TopLeaders,
    ];

    pub fn label(self) -> String {
        match self {
            Page::Home => "Home".to_string(),
            Page::SearchCompare => "Search & Compare Free Agents".to_string(),
            Page::YearSnapshot => format!("{} Free Agents", Season::latest()),
            Page::TopLeaders => "Top Leaders".to_string(),
        }
    }
}

/// A table from the dataset with its currency columns converted.
pub fn normalized_table(
    dataset: &Dataset,
    category: PlayerCategory,
    season: Season,
    kind: DataKind,
) -> Result<Table> {
    currency::normalize(dataset.table(category, season, kind)?)
}

/// Season list as shown in titles: `2024, 2025`.
pub fn season_list(seasons: &[Season]) -> String {
    seasons
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
