use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Seat count kept as the client sent it: whole numbers stay integers,
/// anything else numeric is stored as a float. No range check is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seats {
    Whole(i64),
    Fractional(f64),
}

impl Seats {
    pub fn as_f64(self) -> f64 {
        match self {
            Seats::Whole(n) => n as f64,
            Seats::Fractional(f) => f,
        }
    }
}

impl Default for Seats {
    fn default() -> Self {
        Seats::Whole(0)
    }
}

/// Stays whole until a fractional value joins the sum.
impl Sum for Seats {
    fn sum<I: Iterator<Item = Seats>>(iter: I) -> Self {
        iter.fold(Seats::default(), |acc, s| match (acc, s) {
            (Seats::Whole(a), Seats::Whole(b)) => Seats::Whole(a + b),
            (a, b) => Seats::Fractional(a.as_f64() + b.as_f64()),
        })
    }
}

#[derive(Debug, PartialEq)]
pub struct SeatsCastError(String);

impl fmt::Display for SeatsCastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cast to Number failed for value \"{}\" at path \"seats\"", self.0)
    }
}

impl std::error::Error for SeatsCastError {}

impl FromStr for Seats {
    type Err = SeatsCastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Seats::Whole(n));
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Seats::Fractional(f)),
            _ => Err(SeatsCastError(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeatsInput {
    Number(Seats),
    Text(String),
}

/// Request-side reader for `seats`: numbers pass through, numeric strings are cast.
pub(crate) fn deserialize_seats<'de, D>(deserializer: D) -> Result<Option<Seats>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<SeatsInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(SeatsInput::Number(seats)) => Ok(Some(seats)),
        Some(SeatsInput::Text(text)) => text.parse().map(Some).map_err(de::Error::custom),
    }
}
