use eframe::egui;

use crate::data::store::DataStore;
use crate::state::AppState;
use crate::ui::{pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FreeAgentApp {
    pub state: AppState,
}

impl FreeAgentApp {
    pub fn new(store: DataStore) -> Self {
        Self {
            state: AppState::new(store),
        }
    }
}

impl eframe::App for FreeAgentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: page selector ----
        egui::SidePanel::left("page_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            pages::show(ui, &mut self.state);
        });
    }
}
