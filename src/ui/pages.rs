use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{DataKind, Dataset, PlayerCategory, Season};
use crate::error::TrackerError;
use crate::state::AppState;
use crate::views::search::{MixOutcome, PitchSection, MAX_COMPARE};
use crate::views::{home, leaders, search, snapshot, Page};

use super::{plot, table};

const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 0);

// ---------------------------------------------------------------------------
// Page router
// ---------------------------------------------------------------------------

/// Render the selected page in the central panel.
pub fn show(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.page {
            Page::Home => home_page(ui),
            Page::SearchCompare => search_page(ui, state),
            Page::YearSnapshot => snapshot_page(ui, state),
            Page::TopLeaders => leaders_page(ui, state),
        });
}

// ---------------------------------------------------------------------------
// Shared widgets
// ---------------------------------------------------------------------------

fn subheading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).size(18.0).strong());
}

fn error_label(ui: &mut Ui, err: &TrackerError) {
    ui.label(RichText::new(err.to_string()).color(Color32::RED));
}

fn warning_label(ui: &mut Ui, msg: &str) {
    ui.label(RichText::new(format!("⚠ {msg}")).color(WARNING_COLOR));
}

fn kind_radio(ui: &mut Ui, label: &str, kind: &mut DataKind) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        for k in DataKind::SELECTABLE {
            ui.radio_value(kind, k, k.label());
        }
    });
}

fn category_radio(ui: &mut Ui, category: &mut PlayerCategory) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Player Type");
        for c in PlayerCategory::ALL {
            ui.radio_value(category, c, c.label());
        }
    });
}

/// The cached dataset, or an error message in place of the page body.
fn dataset_or_error(ui: &mut Ui, state: &mut AppState) -> Option<Arc<Dataset>> {
    match state.store.dataset() {
        Ok(ds) => Some(ds),
        Err(e) => {
            error_label(ui, &e);
            ui.label("Use File → Open data folder… or File → Reload data.");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn home_page(ui: &mut Ui) {
    let content = home::content();
    ui.heading(content.title);
    ui.add_space(6.0);
    ui.label(content.intro);
    for (lead, rest) in content.features {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label("•");
            ui.strong(format!("{lead}:"));
            ui.label(rest);
        });
    }
    ui.add_space(24.0);
    ui.label(RichText::new(content.source_note).italics());
    ui.hyperlink(content.source_url);
}

// ---------------------------------------------------------------------------
// Search & Compare
// ---------------------------------------------------------------------------

fn search_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(Page::SearchCompare.label());

    kind_radio(ui, "Mode", &mut state.search.kind);
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Year(s)");
        for season in Season::ALL {
            let mut on = state.search.seasons.contains(&season);
            if ui.checkbox(&mut on, season.to_string()).changed() {
                state.toggle_season(season);
            }
        }
    });
    category_radio(ui, &mut state.search.category);

    let Some(dataset) = dataset_or_error(ui, state) else {
        return;
    };

    let available = match search::available_players(&dataset, &state.search) {
        Ok(names) => names,
        Err(e) => {
            error_label(ui, &e);
            return;
        }
    };
    state.sync_search_players(&available);
    player_picker(ui, state, &available);

    let view = match search::search_compare(&dataset, &state.search) {
        Ok(view) => view,
        Err(e) => {
            error_label(ui, &e);
            return;
        }
    };

    subheading(ui, &view.title);
    table::data_table(ui, state, "search_combined", &view.combined);

    subheading(ui, &view.comparison_title);
    match &view.comparison {
        Ok(comparison) => {
            table::data_table(ui, state, "search_comparison", &comparison.to_table())
        }
        Err(e) => warning_label(ui, &e.to_string()),
    }

    if let Some(section) = &view.pitch_mix {
        subheading(ui, "Pitch Type Usage & Performance");
        match section {
            Ok(section) => pitch_section(ui, state, section),
            Err(e) => error_label(ui, e),
        }
    }
}

fn player_picker(ui: &mut Ui, state: &mut AppState, available: &[String]) {
    let mut toggled: Option<String> = None;

    subheading(ui, format!("Select Players to Compare (Up to {MAX_COMPARE})"));
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for name in &state.search.players {
            if ui.small_button(format!("{name} ✖")).clicked() {
                toggled = Some(name.clone());
            }
        }
    });

    egui::CollapsingHeader::new("Choose players")
        .id_salt("player_picker")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Filter");
                ui.text_edit_singleline(&mut state.player_query);
            });

            let query = state.player_query.to_lowercase();
            let full = state.search.players.len() >= MAX_COMPARE;

            ScrollArea::vertical()
                .id_salt("player_picker_list")
                .max_height(200.0)
                .show(ui, |ui: &mut Ui| {
                    for name in available
                        .iter()
                        .filter(|n| n.to_lowercase().contains(&query))
                    {
                        let mut on = state.search.players.contains(name);
                        let enabled = on || !full;
                        if ui
                            .add_enabled(enabled, egui::Checkbox::new(&mut on, name.as_str()))
                            .changed()
                        {
                            toggled = Some(name.clone());
                        }
                    }
                });
        });

    if let Some(name) = toggled {
        state.toggle_player(&name);
        ui.ctx().request_repaint();
    }
}

fn pitch_section(ui: &mut Ui, state: &mut AppState, section: &PitchSection) {
    if let Some(warning) = &section.warning {
        warning_label(ui, warning);
        return;
    }

    table::data_table(ui, state, "search_pitch_mix", &section.table);

    for pitcher in &section.pitchers {
        ui.add_space(6.0);
        ui.strong(format!("{}'s Pitch Usage", pitcher.name));
        match &pitcher.outcome {
            MixOutcome::Chart(slices) => plot::pitch_pie(ui, &pitcher.name, slices),
            MixOutcome::Warning(msg) => warning_label(ui, msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Year snapshot
// ---------------------------------------------------------------------------

fn snapshot_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(Page::YearSnapshot.label());
    kind_radio(ui, "View Data Type", &mut state.snapshot_kind);

    let Some(dataset) = dataset_or_error(ui, state) else {
        return;
    };
    let view = snapshot::year_snapshot(&dataset, state.snapshot_kind);

    subheading(ui, &view.title);

    subheading(ui, "Hitters");
    match &view.hitters {
        Ok(t) => table::data_table(ui, state, "snapshot_hitters", t),
        Err(e) => error_label(ui, e),
    }

    subheading(ui, "Pitchers");
    match &view.pitchers {
        Ok(t) => table::data_table(ui, state, "snapshot_pitchers", t),
        Err(e) => error_label(ui, e),
    }
}

// ---------------------------------------------------------------------------
// Top leaders
// ---------------------------------------------------------------------------

fn leaders_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Top Leaders by Free Agency Class");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Year");
        egui::ComboBox::from_id_salt("leaders_year")
            .selected_text(state.leaders.season.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for season in Season::ALL {
                    ui.selectable_value(&mut state.leaders.season, season, season.to_string());
                }
            });
    });
    category_radio(ui, &mut state.leaders.category);
    kind_radio(ui, "View Data Type", &mut state.leaders.kind);

    let Some(dataset) = dataset_or_error(ui, state) else {
        return;
    };

    match leaders::stat_options(&dataset, &state.leaders) {
        Ok(options) => state.sync_leaders_stat(&options),
        Err(e) => {
            error_label(ui, &e);
            return;
        }
    }

    let view = match leaders::top_leaders(&dataset, &state.leaders) {
        Ok(view) => view,
        Err(e) => {
            error_label(ui, &e);
            return;
        }
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select a Stat");
        egui::ComboBox::from_id_salt("leaders_stat")
            .selected_text(view.stat.as_str())
            .show_ui(ui, |ui: &mut Ui| {
                for option in &view.stat_options {
                    if ui.selectable_label(*option == view.stat, option.as_str()).clicked() {
                        state.leaders.stat = Some(option.clone());
                        ui.ctx().request_repaint();
                    }
                }
            });
    });

    subheading(ui, &view.title);
    table::data_table(ui, state, "leaders", &view.leaders);

    if let Some(pitch_mix) = &view.pitch_mix {
        subheading(ui, "Pitch Type Usage & Performance");
        match pitch_mix {
            Ok(t) => table::data_table(ui, state, "leaders_pitch_mix", t),
            Err(e) => error_label(ui, e),
        }
    }
}
