use anyhow::Result;

use crate::model::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub base_url: String,
    pub verified_only: bool,
}

impl Default for TuiRunOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            verified_only: false,
        }
    }
}

pub fn run() -> Result<()> {
    crate::tui_shell::run()
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
