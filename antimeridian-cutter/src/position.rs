//! Longitude/latitude positions.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::CutterError;

/// A longitude/latitude pair in degrees.
///
/// Longitude is not restricted to the `[-180, 180]` range: positions in continuous (unwrapped) coordinates can have
/// any longitude.
///
/// When serialized, a position is written as a `[lon, lat]` array. Deserialization accepts arrays with additional
/// dimensions (e.g. altitude), but only the first two values are kept.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Position {
    lon: f64,
    lat: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns a copy of the position with the given longitude.
    pub fn with_lon(self, lon: f64) -> Self {
        Self { lon, ..self }
    }

    /// Returns a copy of the position moved along the longitude axis by `offset` degrees.
    pub fn shifted(self, offset: f64) -> Self {
        Self {
            lon: self.lon + offset,
            ..self
        }
    }

    /// Returns true if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Position> for [f64; 2] {
    fn from(value: Position) -> Self {
        [value.lon, value.lat]
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = CutterError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = CutterError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match value {
            [lon, lat, ..] => Ok(Self::new(*lon, *lat)),
            _ => Err(CutterError::Conversion(
                "position must contain at least 2 dimensions".to_string(),
            )),
        }
    }
}

impl AbsDiffEq for Position {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}
