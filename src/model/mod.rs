mod config;
mod hotel;
mod ids;
mod lenient;

pub use self::config::{AdminConfig, DEFAULT_BASE_URL};
pub use self::hotel::{
    Category, FieldError, Hotel, HotelField, HotelTiming, SignatureDish, TimingSlot, VideoPreview,
    looks_like_url,
};
pub use self::ids::HotelId;
pub use self::lenient::Numeric;
