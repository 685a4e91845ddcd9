use clap::Args;

use hotel_admin::console::DishDraft;
use hotel_admin::model::HotelId;

#[derive(Args)]
pub(crate) struct MergeArgs {
    /// The hotel that survives the merge
    #[arg(long)]
    pub(crate) original: HotelId,
    /// Duplicates of the original (the original may be repeated here)
    #[arg(required = true)]
    pub(crate) duplicates: Vec<HotelId>,
    /// Load the hotels through a name search instead of the full list
    #[arg(long, value_name = "QUERY")]
    pub(crate) search: Option<String>,
    /// Delete the duplicates without asking
    #[arg(long, conflicts_with = "keep_duplicates")]
    pub(crate) yes: bool,
    /// Keep the duplicates without asking
    #[arg(long)]
    pub(crate) keep_duplicates: bool,
}

#[derive(Args)]
pub(crate) struct DishesArgs {
    pub(crate) id: HotelId,
    /// NAME=PRICE; repeat to add several dishes in order
    #[arg(long = "add", value_name = "NAME=PRICE", required = true, value_parser = parse_dish)]
    pub(crate) add: Vec<DishDraft>,
    /// Load the hotel through a name search instead of the full list
    #[arg(long, value_name = "QUERY")]
    pub(crate) search: Option<String>,
}

fn parse_dish(s: &str) -> Result<DishDraft, String> {
    let (name, price) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PRICE, got `{}`", s))?;
    if name.trim().is_empty() || price.trim().is_empty() {
        return Err(format!("dish name and price are both required (got `{}`)", s));
    }
    Ok(DishDraft::new(name.trim(), price.trim()))
}
