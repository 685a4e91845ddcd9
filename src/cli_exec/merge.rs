use std::io::{self, BufRead, Write};

use hotel_admin::console::{DeleteOutcome, DishDraft, MERGE_CONFIRM_PROMPT};

use crate::cli_commands::merge::MergeArgs;

use super::*;

pub(super) fn handle_merge_command(session: &Session, args: MergeArgs) -> Result<()> {
    let mut console = session.console()?;
    load_rows(&mut console, args.search.as_deref())?;

    let mut ids = vec![args.original.clone()];
    for id in args.duplicates {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    for id in &ids {
        require_loaded(&console, id)?;
        console.toggle_select(id)?;
    }
    console.set_canonical(&args.original)?;

    let report = console.merge()?;
    println!(
        "Merged {} video(s) into hotel {}",
        report.merged.len(),
        report.canonical
    );

    let confirmed = if args.yes {
        true
    } else if args.keep_duplicates {
        false
    } else {
        ask(MERGE_CONFIRM_PROMPT)?
    };
    let outcome = console.confirm_delete(confirmed)?;
    println!("{}", outcome.message());
    if let DeleteOutcome::Deleted(ids) = &outcome {
        for id in ids {
            println!("deleted {}", id);
        }
    }
    Ok(())
}

pub(super) fn handle_dishes_command(
    session: &Session,
    id: &HotelId,
    dishes: Vec<DishDraft>,
    search: Option<&str>,
) -> Result<()> {
    let mut console = session.console()?;
    load_rows(&mut console, search)?;
    require_loaded(&console, id)?;

    console.open_dishes(id)?;
    {
        let editor = console.dishes_mut()?;
        for dish in dishes {
            editor.stage(dish)?;
        }
    }
    let res = console.submit_dishes();
    console.close_dishes();
    let added = res?;
    println!("Added {} dish(es) to hotel {}", added, id);
    Ok(())
}

/// Reads a yes/no answer from stdin. Anything but y/yes, including end of
/// input, is a no.
fn ask(prompt: &str) -> Result<bool> {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().context("flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation")?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
