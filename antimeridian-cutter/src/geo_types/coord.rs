use geo_types::{coord, Coord};

use crate::position::Position;

impl From<Coord<f64>> for Position {
    fn from(value: Coord<f64>) -> Self {
        Position::new(value.x, value.y)
    }
}

impl From<Position> for Coord<f64> {
    fn from(value: Position) -> Self {
        coord!(x: value.lon(), y: value.lat())
    }
}
