//! Conversions between [`Geometry`] and [`geo_types`] geometries.
//!
//! `geo_types` has no tagged-vs-bare distinction and a few geometry types of its own. `Line` is converted into a
//! LineString, `Rect` and `Triangle` into Polygons.

use geo_types::{Coord, LineString};

use crate::geometry::Geometry;
use crate::position::Position;

mod coord;

impl From<&geo_types::Geometry<f64>> for Geometry {
    fn from(value: &geo_types::Geometry<f64>) -> Self {
        match value {
            geo_types::Geometry::Point(p) => Geometry::Point(p.0.into()),
            geo_types::Geometry::Line(line) => {
                Geometry::LineString(vec![line.start.into(), line.end.into()])
            }
            geo_types::Geometry::LineString(line) => Geometry::LineString(convert_path(line)),
            geo_types::Geometry::Polygon(polygon) => Geometry::Polygon(convert_polygon(polygon)),
            geo_types::Geometry::MultiPoint(points) => {
                Geometry::MultiPoint(points.iter().map(|p| p.0.into()).collect())
            }
            geo_types::Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(lines.iter().map(convert_path).collect())
            }
            geo_types::Geometry::MultiPolygon(polygons) => {
                Geometry::MultiPolygon(polygons.iter().map(convert_polygon).collect())
            }
            geo_types::Geometry::GeometryCollection(collection) => {
                Geometry::GeometryCollection(collection.iter().map(Geometry::from).collect())
            }
            geo_types::Geometry::Rect(rect) => Geometry::Polygon(convert_polygon(&rect.to_polygon())),
            geo_types::Geometry::Triangle(triangle) => {
                Geometry::Polygon(convert_polygon(&triangle.to_polygon()))
            }
        }
    }
}

impl From<Geometry> for geo_types::Geometry<f64> {
    fn from(value: Geometry) -> Self {
        match value {
            Geometry::Point(p) => geo_types::Point(p.into()).into(),
            Geometry::MultiPoint(points) => geo_types::MultiPoint(
                points
                    .into_iter()
                    .map(|p| geo_types::Point(p.into()))
                    .collect(),
            )
            .into(),
            Geometry::LineString(path) => to_line_string(path).into(),
            Geometry::MultiLineString(paths) => {
                geo_types::MultiLineString(paths.into_iter().map(to_line_string).collect()).into()
            }
            Geometry::Polygon(rings) => to_polygon(rings).into(),
            Geometry::MultiPolygon(polygons) => {
                geo_types::MultiPolygon(polygons.into_iter().map(to_polygon).collect()).into()
            }
            Geometry::GeometryCollection(geometries) => geo_types::Geometry::GeometryCollection(
                geo_types::GeometryCollection(geometries.into_iter().map(geo_types::Geometry::from).collect()),
            ),
        }
    }
}

fn convert_path(line: &LineString<f64>) -> Vec<Position> {
    line.0.iter().map(|&c| c.into()).collect()
}

fn convert_polygon(polygon: &geo_types::Polygon<f64>) -> Vec<Vec<Position>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(convert_path)
        .collect()
}

fn to_line_string(path: Vec<Position>) -> LineString<f64> {
    LineString(path.into_iter().map(Coord::from).collect())
}

fn to_polygon(rings: Vec<Vec<Position>>) -> geo_types::Polygon<f64> {
    let mut rings = rings.into_iter().map(to_line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString(Vec::new()));
    geo_types::Polygon::new(exterior, rings.collect())
}
