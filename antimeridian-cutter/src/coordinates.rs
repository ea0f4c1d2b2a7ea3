//! Untagged coordinate arrays.
//!
//! GeoJSON coordinates are nested arrays whose nesting depth corresponds to the geometry type. When only the
//! coordinates are available, the type has to be inferred. [`Coordinates`] keeps the array shape; the
//! [`ClassifiedInput`](crate::ClassifiedInput) decides what geometry it represents.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Bare coordinate array of nesting depth 0 to 3.
///
/// Deserializing from JSON picks the variant matching the array depth:
///
/// ```
/// use antimeridian_cutter::{Coordinates, Position};
///
/// let coordinates: Coordinates = serde_json::from_str("[[170, 0], [-170, 0]]").unwrap();
/// assert_eq!(
///     coordinates,
///     Coordinates::Path(vec![Position::new(170.0, 0.0), Position::new(-170.0, 0.0)])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// Depth 0: a single position.
    Position(Position),
    /// Depth 1: a sequence of positions.
    Path(Vec<Position>),
    /// Depth 2: a sequence of paths.
    Rings(Vec<Vec<Position>>),
    /// Depth 3: a sequence of ring sets.
    Polygons(Vec<Vec<Vec<Position>>>),
}

impl Coordinates {
    /// Nesting depth of the array.
    pub fn depth(&self) -> usize {
        match self {
            Coordinates::Position(_) => 0,
            Coordinates::Path(_) => 1,
            Coordinates::Rings(_) => 2,
            Coordinates::Polygons(_) => 3,
        }
    }
}

impl From<Position> for Coordinates {
    fn from(value: Position) -> Self {
        Self::Position(value)
    }
}

impl From<Vec<Position>> for Coordinates {
    fn from(value: Vec<Position>) -> Self {
        Self::Path(value)
    }
}

impl From<Vec<Vec<Position>>> for Coordinates {
    fn from(value: Vec<Vec<Position>>) -> Self {
        Self::Rings(value)
    }
}

impl From<Vec<Vec<Vec<Position>>>> for Coordinates {
    fn from(value: Vec<Vec<Vec<Position>>>) -> Self {
        Self::Polygons(value)
    }
}
