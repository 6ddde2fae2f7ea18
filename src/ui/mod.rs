//! egui rendering. Everything here reads view models from `crate::views`
//! and writes only UI parameters back into `AppState`.

pub mod pages;
pub mod panels;
pub mod plot;
pub mod table;
