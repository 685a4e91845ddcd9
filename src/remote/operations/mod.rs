//! One method per backend endpoint.

use anyhow::{Context, Result};

use super::{HotelVideo, NewDish, RemoteClient, VerifyRequest};
use crate::model::{Hotel, HotelId};

mod dishes;
mod hotels;
mod videos;
