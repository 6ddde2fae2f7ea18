use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Status};
use crate::views::Page;

// ---------------------------------------------------------------------------
// Left side panel – page selector
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("MLB Free Agent Analysis");
    ui.separator();

    ui.strong("Select a Page");
    for page in Page::ALL {
        ui.radio_value(&mut state.page, page, page.label());
    }

    ui.separator();
    ui.label(
        RichText::new(format!("Data folder: {}", state.store.dir().display()))
            .small()
            .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload data").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(msg.as_str());
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg.as_str()).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open free agent data folder")
        .set_directory(state.store.dir())
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
    }
}
