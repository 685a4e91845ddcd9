use hotel_admin::model::HotelField;

use super::output::{print_hotel, print_hotels};
use super::*;

pub(super) fn handle_list_command(session: &Session, verified: bool, json: bool) -> Result<()> {
    let mut console = Console::new(session.client()?, verified || session.config.verified_only);
    console.load_all()?;
    print_hotels(console.table().hotels(), json)
}

pub(super) fn handle_search_command(session: &Session, query: &str, json: bool) -> Result<()> {
    let mut console = session.console()?;
    console.search(query)?;
    print_hotels(console.table().hotels(), json)
}

pub(super) fn handle_count_command(session: &Session, mobile: Option<&str>) -> Result<()> {
    let mut console = session.console()?;
    let count = console.refresh_count(mobile)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&count).context("serialize count json")?
    );
    Ok(())
}

pub(super) fn handle_approve_command(session: &Session, id: &HotelId, valid: bool) -> Result<()> {
    let mut console = session.console()?;
    console.approve(id, valid)?;
    println!("Hotel with ID {} approved.", id);
    Ok(())
}

pub(super) fn handle_edit_command(
    session: &Session,
    id: &HotelId,
    set: Vec<(HotelField, String)>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut console = session.console()?;
    load_rows(&mut console, search)?;
    require_loaded(&console, id)?;

    console.begin_edit(id)?;
    for (field, value) in &set {
        if let Err(err) = console.update_field(*field, value) {
            console.cancel_edit();
            return Err(err.context(format!("set {}", field.label())));
        }
    }
    let id = console.commit()?;
    let hotel = require_loaded(&console, &id)?;
    if !json {
        println!("Updated hotel {}", id);
    }
    print_hotel(hotel, json)
}
