use super::hotels::{
    handle_approve_command, handle_count_command, handle_edit_command, handle_list_command,
    handle_search_command,
};
use super::local::{handle_config_command, handle_init_command};
use super::merge::{handle_dishes_command, handle_merge_command};
use super::*;

pub(super) fn handle_command(command: Commands, url: Option<String>) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force, args.path, url)?,
        Commands::Config { command } => {
            let session = load_session(url.as_deref())?;
            handle_config_command(&session, command, url.as_deref())?
        }
        command => {
            let session = load_session(url.as_deref())?;
            handle_hotel_command(&session, command)?
        }
    }
    Ok(())
}

fn handle_hotel_command(session: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::List(args) => handle_list_command(session, args.verified, args.json)?,
        Commands::Search(args) => handle_search_command(session, &args.query, args.json)?,
        Commands::Count(args) => handle_count_command(session, args.mobile.as_deref())?,
        Commands::Approve(args) => handle_approve_command(session, &args.id, !args.invalid)?,
        Commands::Edit(args) => handle_edit_command(
            session,
            &args.id,
            args.set,
            args.search.as_deref(),
            args.json,
        )?,
        Commands::Merge(args) => handle_merge_command(session, args)?,
        Commands::Dishes(args) => {
            handle_dishes_command(session, &args.id, args.add, args.search.as_deref())?
        }
        Commands::Init(_) | Commands::Config { .. } => {
            anyhow::bail!("command does not talk to the backend")
        }
    }
    Ok(())
}
