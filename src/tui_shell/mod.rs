use anyhow::Result;

mod app;

mod input;
mod modal;
mod view;

// Make core TUI types available to submodules via `super::...`.
use app::{App, DishField, Modal, ModalKind, TextInputAction};

pub fn run() -> Result<()> {
    run_with_options(crate::tui::TuiRunOptions::default())
}

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
