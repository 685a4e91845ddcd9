//! Deserializers for columns the backend sends with inconsistent JSON types
//! (numbers as strings, `null` for booleans and lists).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A numeric column as the backend stored it. Anything that is not a number
/// is kept verbatim so the row still loads and is written back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric<T> {
    Parsed(T),
    Raw(Value),
}

impl<T: Copy> Numeric<T> {
    pub fn parsed(&self) -> Option<T> {
        match self {
            Numeric::Parsed(n) => Some(*n),
            Numeric::Raw(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Numeric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Parsed(n) => fmt::Display::fmt(n, f),
            Numeric::Raw(Value::String(s)) => f.write_str(s),
            Numeric::Raw(other) => fmt::Display::fmt(other, f),
        }
    }
}

fn numeric<T>(
    v: Value,
    from_number: impl Fn(&Number) -> Option<T>,
    from_str: impl Fn(&str) -> Option<T>,
) -> Numeric<T> {
    let parsed = match &v {
        Value::Number(n) => from_number(n),
        Value::String(s) => from_str(s.trim()),
        _ => None,
    };
    match parsed {
        Some(n) => Numeric::Parsed(n),
        None => Numeric::Raw(v),
    }
}

pub(crate) fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Numeric<f64>>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => None,
        Some(v) => Some(numeric(v, Number::as_f64, |s| {
            s.parse::<f64>().ok().filter(|n| n.is_finite())
        })),
    })
}

pub(crate) fn opt_u64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Numeric<u64>>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => None,
        Some(v) => Some(numeric(v, Number::as_u64, |s| s.parse::<u64>().ok())),
    })
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(d)?.unwrap_or(false))
}

pub(crate) fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string, got {}",
            other
        ))),
    }
}
