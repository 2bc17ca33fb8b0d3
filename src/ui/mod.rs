//! egui widgets for the desktop viewer.

pub mod panels;
pub mod plot;
