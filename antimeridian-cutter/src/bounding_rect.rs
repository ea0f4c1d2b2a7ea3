//! Bounding rectangles of positions.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Axis-aligned rectangle in longitude/latitude degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    /// Western edge.
    pub lon_min: f64,
    /// Southern edge.
    pub lat_min: f64,
    /// Eastern edge.
    pub lon_max: f64,
    /// Northern edge.
    pub lat_max: f64,
}

impl BoundingRect {
    /// Creates a new rectangle.
    pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// Rectangle of zero size at the given position.
    pub fn from_position(p: &Position) -> Self {
        Self {
            lon_min: p.lon(),
            lat_min: p.lat(),
            lon_max: p.lon(),
            lat_max: p.lat(),
        }
    }

    /// Smallest rectangle containing all the positions. Returns `None` if the iterator is empty.
    pub fn from_positions<'a>(mut positions: impl Iterator<Item = &'a Position>) -> Option<Self> {
        let first = positions.next()?;
        Some(positions.fold(Self::from_position(first), |rect, p| {
            rect.merge(Self::from_position(p))
        }))
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    /// Returns true if `other` lies inside `self`. Touching edges count as inside.
    pub fn contains(&self, other: &Self) -> bool {
        other.lon_min >= self.lon_min
            && other.lon_max <= self.lon_max
            && other.lat_min >= self.lat_min
            && other.lat_max <= self.lat_max
    }

    /// Width of the rectangle in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Longitude of the middle of the rectangle.
    pub fn center_lon(&self) -> f64 {
        (self.lon_min + self.lon_max) / 2.0
    }

    /// The rectangle as a GeoJSON `bbox` member: `[lon_min, lat_min, lon_max, lat_max]`.
    pub fn to_bbox(&self) -> Vec<f64> {
        vec![self.lon_min, self.lat_min, self.lon_max, self.lat_max]
    }
}
