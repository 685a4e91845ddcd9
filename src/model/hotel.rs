use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::HotelId;
use super::lenient::{self, Numeric};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub hotel_id: HotelId,

    // Editable columns always serialize; a cleared value goes out as `null`.
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub hotel_address: Option<String>,
    #[serde(default)]
    pub hotel_city: Option<String>,
    #[serde(default)]
    pub hotel_map_location_link: Option<String>,
    #[serde(default)]
    pub hotel_category: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub latitude: Option<Numeric<f64>>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub longitude: Option<Numeric<f64>>,

    #[serde(default)]
    pub hotel_vlog_video_link: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub vlog_video_view_count: Option<Numeric<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlog_post_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub valid: bool,

    #[serde(default, deserialize_with = "lenient::list")]
    pub hotel_signature_dishes: Vec<SignatureDish>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub hotel_timings: Vec<HotelTiming>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    /// Columns this client does not model; sent back untouched on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_signature_dish_id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub dish_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub dish_price: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelTiming {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<TimingSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noon: Option<TimingSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<TimingSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_night: Option<TimingSlot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimingSlot {
    Flag(bool),
    Text(String),
}

impl fmt::Display for TimingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingSlot::Flag(true) => f.write_str("Yes"),
            TimingSlot::Flag(false) => f.write_str("No"),
            TimingSlot::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    NonVeg,
    Veg,
    Beverage,
    Cafe,
    Snacks,
    FastFood,
    Deserts,
    RestoBar,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::NonVeg,
        Category::Veg,
        Category::Beverage,
        Category::Cafe,
        Category::Snacks,
        Category::FastFood,
        Category::Deserts,
        Category::RestoBar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::NonVeg => "NonVeg",
            Category::Veg => "Veg",
            Category::Beverage => "Beverage",
            Category::Cafe => "Cafe",
            Category::Snacks => "Snacks",
            Category::FastFood => "Fast Food",
            Category::Deserts => "Deserts",
            Category::RestoBar => "RestoBar",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownCategory(s.to_string()))
    }
}

/// Columns an operator may change from the list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HotelField {
    Name,
    Address,
    City,
    MapLocationLink,
    VlogVideoLink,
    Latitude,
    Longitude,
    Category,
}

impl HotelField {
    pub const ALL: [HotelField; 8] = [
        HotelField::Name,
        HotelField::Address,
        HotelField::City,
        HotelField::MapLocationLink,
        HotelField::VlogVideoLink,
        HotelField::Latitude,
        HotelField::Longitude,
        HotelField::Category,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            HotelField::Name => "hotelName",
            HotelField::Address => "hotelAddress",
            HotelField::City => "hotelCity",
            HotelField::MapLocationLink => "hotelMapLocationLink",
            HotelField::VlogVideoLink => "hotelVlogVideoLink",
            HotelField::Latitude => "latitude",
            HotelField::Longitude => "longitude",
            HotelField::Category => "hotelCategory",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HotelField::Name => "name",
            HotelField::Address => "address",
            HotelField::City => "city",
            HotelField::MapLocationLink => "map",
            HotelField::VlogVideoLink => "video",
            HotelField::Latitude => "lat",
            HotelField::Longitude => "lng",
            HotelField::Category => "category",
        }
    }
}

impl FromStr for HotelField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let alias = match s.to_ascii_lowercase().as_str() {
            "latitude" => Some(HotelField::Latitude),
            "longitude" | "lon" => Some(HotelField::Longitude),
            "map-link" | "maplink" => Some(HotelField::MapLocationLink),
            "video-link" | "vlog" => Some(HotelField::VlogVideoLink),
            _ => None,
        };
        if let Some(f) = alias {
            return Ok(f);
        }
        HotelField::ALL
            .into_iter()
            .find(|f| f.wire_name() == s || f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("unknown category `{0}` (expected one of: NonVeg, Veg, Beverage, Cafe, Snacks, Fast Food, Deserts, RestoBar)")]
    UnknownCategory(String),
    #[error("{field} must be a number (got `{value}`)")]
    NotANumber { field: &'static str, value: String },
}

impl Hotel {
    pub fn field_value(&self, field: HotelField) -> String {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let num = |v: &Option<Numeric<f64>>| v.as_ref().map(ToString::to_string).unwrap_or_default();
        match field {
            HotelField::Name => text(&self.hotel_name),
            HotelField::Address => text(&self.hotel_address),
            HotelField::City => text(&self.hotel_city),
            HotelField::MapLocationLink => text(&self.hotel_map_location_link),
            HotelField::VlogVideoLink => text(&self.hotel_vlog_video_link),
            HotelField::Latitude => num(&self.latitude),
            HotelField::Longitude => num(&self.longitude),
            HotelField::Category => text(&self.hotel_category),
        }
    }

    /// Applies an operator-typed value. Empty input clears optional columns.
    pub fn set_field(&mut self, field: HotelField, value: &str) -> Result<(), FieldError> {
        let text = |v: &str| Some(v.to_string());
        match field {
            HotelField::Name => self.hotel_name = text(value),
            HotelField::Address => self.hotel_address = text(value),
            HotelField::City => self.hotel_city = text(value),
            HotelField::MapLocationLink => self.hotel_map_location_link = text(value),
            HotelField::VlogVideoLink => self.hotel_vlog_video_link = text(value),
            HotelField::Latitude => self.latitude = parse_coord(field, value)?,
            HotelField::Longitude => self.longitude = parse_coord(field, value)?,
            HotelField::Category => {
                let c: Category = value.parse()?;
                self.hotel_category = Some(c.as_str().to_string());
            }
        }
        Ok(())
    }

    pub fn display_name(&self) -> &str {
        self.hotel_name.as_deref().unwrap_or("")
    }

    pub fn video_preview(&self) -> VideoPreview {
        let Some(video_id) = self.video_id.as_deref().filter(|v| !v.is_empty()) else {
            return VideoPreview::None;
        };
        let is_youtube = self
            .video_type
            .as_deref()
            .map(|t| t.contains("Youtube"))
            .unwrap_or(false);
        if is_youtube {
            VideoPreview::YouTube {
                thumbnail: format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id),
                fallback: format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id),
            }
        } else {
            VideoPreview::Instagram
        }
    }

    pub fn map_link_is_url(&self) -> bool {
        self.hotel_map_location_link
            .as_deref()
            .map(|s| looks_like_url(s.trim()))
            .unwrap_or(false)
    }
}

fn parse_coord(field: HotelField, value: &str) -> Result<Option<Numeric<f64>>, FieldError> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(None);
    }
    v.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| Some(Numeric::Parsed(n)))
        .ok_or_else(|| FieldError::NotANumber {
            field: field.wire_name(),
            value: v.to_string(),
        })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoPreview {
    YouTube { thumbnail: String, fallback: String },
    Instagram,
    None,
}

impl fmt::Display for VideoPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoPreview::YouTube { thumbnail, .. } => f.write_str(thumbnail),
            VideoPreview::Instagram => f.write_str("Instagram Video"),
            VideoPreview::None => f.write_str("No Video"),
        }
    }
}

static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("valid regex")
});

/// Loose URL shape check: optional http(s) scheme, a dotted domain with an
/// alphabetic TLD or a dotted-quad host, then optional port/path/query/fragment.
pub fn looks_like_url(s: &str) -> bool {
    URL_SHAPE.is_match(s)
}

#[cfg(test)]
#[path = "../tests/model/hotel_tests.rs"]
mod tests;
