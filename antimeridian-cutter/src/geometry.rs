//! See documentation for [`Geometry`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::bounding_rect::BoundingRect;
use crate::position::Position;

/// GeoJSON-shaped geometry.
///
/// The coordinate payload of every variant has the nesting depth of the corresponding GeoJSON type. Polygon rings are
/// expected to be closed (the first and the last positions are equal), but the cutter closes open rings on read.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Single position.
    Point(Position),
    /// Unconnected positions.
    MultiPoint(Vec<Position>),
    /// Open path.
    LineString(Vec<Position>),
    /// Set of open paths.
    MultiLineString(Vec<Vec<Position>>),
    /// Outer ring followed by its holes.
    Polygon(Vec<Vec<Position>>),
    /// Set of polygons.
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    /// Ordered set of geometries.
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Iterates over all positions of the geometry, including the members of collections.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Point(p) => Box::new(std::iter::once(p)),
            Geometry::MultiPoint(points) | Geometry::LineString(points) => Box::new(points.iter()),
            Geometry::MultiLineString(rings) | Geometry::Polygon(rings) => {
                Box::new(rings.iter().flatten())
            }
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten().flatten()),
            Geometry::GeometryCollection(geometries) => {
                Box::new(geometries.iter().flat_map(|g| g.positions()))
            }
        }
    }

    /// Bounding rectangle of all positions, or `None` if the geometry is empty.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        BoundingRect::from_positions(self.positions())
    }
}

impl From<Position> for Geometry {
    fn from(value: Position) -> Self {
        Self::Point(value)
    }
}

/// Type of a [`Geometry`], named as in GeoJSON.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// Point
    Point,
    /// MultiPoint
    MultiPoint,
    /// LineString
    LineString,
    /// MultiLineString
    MultiLineString,
    /// Polygon
    Polygon,
    /// MultiPolygon
    MultiPolygon,
    /// GeometryCollection
    GeometryCollection,
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };

        write!(f, "{name}")
    }
}
