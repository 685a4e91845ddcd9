use anyhow::{Context, Result};

use hotel_admin::console::Console;
use hotel_admin::model::{Hotel, HotelId};
use hotel_admin::remote::RemoteClient;

use crate::cli_runtime::{Session, load_session, require_store};
use crate::{Commands, ConfigCommands};

mod dispatch;
mod hotels;
mod local;
mod merge;
mod output;

pub(super) fn handle_command(command: Commands, url: Option<String>) -> Result<()> {
    dispatch::handle_command(command, url)
}

/// Fills the console's list either from a name search or the full list.
fn load_rows(console: &mut Console<RemoteClient>, search: Option<&str>) -> Result<usize> {
    match search {
        Some(q) => console.search(q),
        None => console.load_all(),
    }
}

fn require_loaded<'a>(console: &'a Console<RemoteClient>, id: &HotelId) -> Result<&'a Hotel> {
    console
        .table()
        .get(id)
        .with_context(|| format!("hotel {} not found in the loaded list", id))
}
