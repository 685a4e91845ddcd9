use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend-assigned hotel key.
///
/// The backend hands out numeric ids, but nothing in the contract promises
/// that, so string keys are accepted too and echoed back in the same shape.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelId {
    Int(i64),
    Text(String),
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelId::Int(n) => write!(f, "{}", n),
            HotelId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for HotelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => HotelId::Int(n),
            Err(_) => HotelId::Text(s.to_string()),
        })
    }
}

impl From<i64> for HotelId {
    fn from(n: i64) -> Self {
        HotelId::Int(n)
    }
}

impl From<&str> for HotelId {
    fn from(s: &str) -> Self {
        HotelId::Text(s.to_string())
    }
}
