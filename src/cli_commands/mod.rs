use clap::Subcommand;

use crate::ConfigCommands;

pub(crate) mod hotels;
pub(crate) mod local;
pub(crate) mod merge;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create a .hotel-admin config directory here
    Init(local::InitArgs),

    /// Show or change the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List hotels
    List(hotels::ListArgs),

    /// Search hotels by name (queries of 4 characters or less list everything)
    Search(hotels::SearchArgs),

    /// Show the backend's record count
    Count(hotels::CountArgs),

    /// Mark a hotel verified
    Approve(hotels::ApproveArgs),

    /// Change fields of one hotel
    Edit(hotels::EditArgs),

    /// Move duplicate hotels' videos onto the original, then delete the duplicates
    Merge(merge::MergeArgs),

    /// Add signature dishes to a hotel
    Dishes(merge::DishesArgs),
}
