//! Geometry type inference for cutter inputs.

use crate::coordinates::Coordinates;
use crate::cutter::CutInput;
use crate::geometry::{Geometry, GeometryType};
use crate::position::Position;

/// Cutter input with its geometry type resolved.
///
/// Tagged geometries keep their type. Bare coordinate arrays are classified by their nesting depth:
///
/// | depth | geometry                                                                                 |
/// |-------|------------------------------------------------------------------------------------------|
/// | 0     | Point                                                                                    |
/// | 1     | Polygon with a single ring if the path is a closed ring, LineString otherwise            |
/// | 2     | Polygon if every path is a closed ring, MultiLineString otherwise                        |
/// | 3     | MultiPolygon                                                                             |
///
/// A path is a closed ring if it has at least 4 positions and its first and last positions are equal.
///
/// All variants borrow from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedInput<'a> {
    /// Single position.
    Point(&'a Position),
    /// Unconnected positions.
    MultiPoint(&'a [Position]),
    /// Open path.
    LineString(&'a [Position]),
    /// Open paths.
    MultiLineString(Vec<&'a [Position]>),
    /// Outer ring followed by its holes.
    Polygon(Vec<&'a [Position]>),
    /// Ring sets, each cut as a separate polygon.
    MultiPolygon(Vec<Vec<&'a [Position]>>),
    /// Member geometries, each cut separately.
    GeometryCollection(&'a [Geometry]),
}

impl<'a> ClassifiedInput<'a> {
    /// Resolves the geometry type of the input.
    pub fn classify(input: CutInput<'a>) -> Self {
        match input {
            CutInput::Geometry(geometry) => Self::from_geometry(geometry),
            CutInput::Coordinates(coordinates) => Self::from_coordinates(coordinates),
        }
    }

    fn from_geometry(geometry: &'a Geometry) -> Self {
        match geometry {
            Geometry::Point(p) => Self::Point(p),
            Geometry::MultiPoint(points) => Self::MultiPoint(points),
            Geometry::LineString(path) => Self::LineString(path),
            Geometry::MultiLineString(paths) => Self::MultiLineString(as_slices(paths)),
            Geometry::Polygon(rings) => Self::Polygon(as_slices(rings)),
            Geometry::MultiPolygon(polygons) => {
                Self::MultiPolygon(polygons.iter().map(|rings| as_slices(rings)).collect())
            }
            Geometry::GeometryCollection(geometries) => Self::GeometryCollection(geometries),
        }
    }

    fn from_coordinates(coordinates: &'a Coordinates) -> Self {
        match coordinates {
            Coordinates::Position(p) => Self::Point(p),
            Coordinates::Path(path) => {
                if is_closed_ring(path) {
                    Self::Polygon(vec![path.as_slice()])
                } else {
                    Self::LineString(path)
                }
            }
            Coordinates::Rings(rings) => {
                if rings.iter().all(|ring| is_closed_ring(ring)) {
                    Self::Polygon(as_slices(rings))
                } else {
                    Self::MultiLineString(as_slices(rings))
                }
            }
            Coordinates::Polygons(polygons) => {
                Self::MultiPolygon(polygons.iter().map(|rings| as_slices(rings)).collect())
            }
        }
    }

    /// Type of the geometry the input represents.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            ClassifiedInput::Point(_) => GeometryType::Point,
            ClassifiedInput::MultiPoint(_) => GeometryType::MultiPoint,
            ClassifiedInput::LineString(_) => GeometryType::LineString,
            ClassifiedInput::MultiLineString(_) => GeometryType::MultiLineString,
            ClassifiedInput::Polygon(_) => GeometryType::Polygon,
            ClassifiedInput::MultiPolygon(_) => GeometryType::MultiPolygon,
            ClassifiedInput::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Whether the paths of the input are polygon rings, which must be closed in the output.
    pub fn closes_rings(&self) -> bool {
        matches!(
            self,
            ClassifiedInput::Polygon(_) | ClassifiedInput::MultiPolygon(_)
        )
    }
}

/// Returns true if the path has at least 4 positions and ends where it starts.
pub(crate) fn is_closed_ring(path: &[Position]) -> bool {
    path.len() >= 4 && path.first() == path.last()
}

fn as_slices(paths: &[Vec<Position>]) -> Vec<&[Position]> {
    paths.iter().map(Vec::as_slice).collect()
}
