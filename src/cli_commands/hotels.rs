use clap::Args;

use hotel_admin::model::{HotelField, HotelId};

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Only verified hotels (defaults to the stored setting)
    #[arg(long)]
    pub(crate) verified: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct SearchArgs {
    pub(crate) query: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CountArgs {
    /// Count records submitted from this mobile number
    #[arg(long)]
    pub(crate) mobile: Option<String>,
}

#[derive(Args)]
pub(crate) struct ApproveArgs {
    pub(crate) id: HotelId,
    /// Approve but mark the record invalid
    #[arg(long)]
    pub(crate) invalid: bool,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    pub(crate) id: HotelId,
    /// FIELD=VALUE; fields: name, address, city, map, video, lat, lng, category
    #[arg(long = "set", value_name = "FIELD=VALUE", required = true, value_parser = parse_assignment)]
    pub(crate) set: Vec<(HotelField, String)>,
    /// Load the hotel through a name search instead of the full list
    #[arg(long, value_name = "QUERY")]
    pub(crate) search: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_assignment(s: &str) -> Result<(HotelField, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{}`", s))?;
    let field: HotelField = field.parse().map_err(|e| format!("{}", e))?;
    Ok((field, value.to_string()))
}
