//! Request payloads sent to the hotel backend.

use serde::Serialize;

use crate::model::{HotelId, Numeric};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub hotel_id: HotelId,
    pub verified: bool,
    pub valid: bool,
}

/// Video columns of a duplicate row, re-targeted at the surviving hotel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelVideo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_vlog_video_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlog_video_view_count: Option<Numeric<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlog_post_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    pub verified: bool,
    pub hotel_id: HotelId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDish {
    pub hotel_id: HotelId,
    pub dish_name: String,
    pub dish_price: String,
}
