pub mod console;
pub mod logging;
pub mod model;
pub mod remote;
pub mod store;
pub mod tui;

mod tui_shell;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
