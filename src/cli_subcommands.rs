use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the stored configuration and the effective base url
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Change stored settings (the global --url sets the base url)
    Set {
        /// Start lists in verified-only mode
        #[arg(long, value_name = "BOOL")]
        verified_only: Option<bool>,
    },
}
