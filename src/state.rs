use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::data::model::{DataKind, PlayerCategory, Season};
use crate::data::store::DataStore;
use crate::views::leaders::LeadersParams;
use crate::views::search::{self, SearchParams};
use crate::views::Page;

// ---------------------------------------------------------------------------
// Table sort state
// ---------------------------------------------------------------------------

/// Column a rendered table is sorted by; absent means source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub descending: bool,
}

impl SortState {
    /// Header click: new column sorts descending, same column flips.
    pub fn clicked(current: Option<SortState>, column: usize) -> SortState {
        match current {
            Some(s) if s.column == column => SortState {
                column,
                descending: !s.descending,
            },
            _ => SortState {
                column,
                descending: true,
            },
        }
    }
}

/// Message shown in the top bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Lazily loaded dataset shared by every page.
    pub store: DataStore,

    pub page: Page,

    pub search: SearchParams,
    /// Filter text for the comparison player picker.
    pub player_query: String,

    pub snapshot_kind: DataKind,

    pub leaders: LeadersParams,

    /// Per-table sort, keyed by the table's widget id.
    pub table_sorts: BTreeMap<String, SortState>,

    /// Status / error message shown in the top bar.
    pub status: Option<Status>,

    /// Slice the current player selection was made against.
    search_key: Option<(Vec<Season>, PlayerCategory, DataKind)>,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        Self {
            store,
            page: Page::default(),
            search: SearchParams::default(),
            player_query: String::new(),
            snapshot_kind: DataKind::Performance,
            leaders: LeadersParams::default(),
            table_sorts: BTreeMap::new(),
            status: None,
            search_key: None,
        }
    }

    /// Point the store at another directory and drop everything cached.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.store.set_dir(dir);
        self.reset_views();
    }

    pub fn reload(&mut self) {
        self.store.evict();
        self.reset_views();
    }

    fn reset_views(&mut self) {
        self.search.players.clear();
        self.search_key = None;
        self.table_sorts.clear();
        self.status = None;
    }

    /// Keep the comparison selection consistent with the names on offer.
    ///
    /// When the seasons/category/kind slice changes the selection resets to
    /// the first two names; otherwise names that vanished are dropped.
    pub fn sync_search_players(&mut self, available: &[String]) {
        let key = (
            self.search.seasons.clone(),
            self.search.category,
            self.search.kind,
        );
        if self.search_key.as_ref() != Some(&key) {
            self.search.players = search::default_players(available);
            self.search_key = Some(key);
            self.player_query.clear();
        } else {
            self.search.players.retain(|p| available.contains(p));
        }
    }

    /// Add or remove a player from the comparison, respecting the cap.
    pub fn toggle_player(&mut self, name: &str) {
        if let Some(pos) = self.search.players.iter().position(|p| p == name) {
            self.search.players.remove(pos);
        } else if self.search.players.len() < search::MAX_COMPARE {
            self.search.players.push(name.to_string());
        }
    }

    pub fn toggle_season(&mut self, season: Season) {
        if let Some(pos) = self.search.seasons.iter().position(|s| *s == season) {
            self.search.seasons.remove(pos);
        } else {
            self.search.seasons.push(season);
        }
    }

    /// Drop a chosen stat that the current leaders table does not have.
    pub fn sync_leaders_stat(&mut self, options: &[String]) {
        if let Some(stat) = &self.leaders.stat {
            if !options.contains(stat) {
                self.leaders.stat = None;
            }
        }
    }

    pub fn sort_for(&self, table_id: &str) -> Option<SortState> {
        self.table_sorts.get(table_id).copied()
    }

    pub fn click_header(&mut self, table_id: &str, column: usize) {
        let next = SortState::clicked(self.sort_for(table_id), column);
        self.table_sorts.insert(table_id.to_string(), next);
    }
}
