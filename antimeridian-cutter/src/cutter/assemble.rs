//! Output geometries built from cut coordinates.

use crate::geometry::Geometry;
use crate::position::Position;

/// A single path stays a LineString, several paths become a MultiLineString.
pub(crate) fn line_string(mut lines: Vec<Vec<Position>>) -> Geometry {
    match lines.len() {
        1 => Geometry::LineString(lines.remove(0)),
        _ => Geometry::MultiLineString(lines),
    }
}

/// A single ring set stays a Polygon, several become a MultiPolygon. No ring sets give an empty Polygon.
pub(crate) fn polygon(mut polygons: Vec<Vec<Vec<Position>>>) -> Geometry {
    match polygons.len() {
        0 => Geometry::Polygon(Vec::new()),
        1 => Geometry::Polygon(polygons.remove(0)),
        _ => Geometry::MultiPolygon(polygons),
    }
}

/// Points of a single band stay a MultiPoint, several bands give a collection of MultiPoints.
pub(crate) fn multi_point(mut groups: Vec<Vec<Position>>) -> Geometry {
    match groups.len() {
        0 => Geometry::MultiPoint(Vec::new()),
        1 => Geometry::MultiPoint(groups.remove(0)),
        _ => Geometry::GeometryCollection(groups.into_iter().map(Geometry::MultiPoint).collect()),
    }
}
