//! Cutting of [GeoJSON](https://geojson.org) geometries.

use geojson::{JsonValue, LineStringType, PolygonType, Value};
use serde::Deserialize;

use crate::coordinates::Coordinates;
use crate::cutter::Cutter;
use crate::error::CutterError;
use crate::geometry::Geometry;
use crate::hole::HoleTest;
use crate::interpolate::Interpolator;
use crate::position::Position;

impl TryFrom<&Value> for Geometry {
    type Error = CutterError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(p) => Geometry::Point(convert_position(p)?),
            Value::MultiPoint(points) => Geometry::MultiPoint(convert_path(points)?),
            Value::LineString(line) => Geometry::LineString(convert_path(line)?),
            Value::MultiLineString(lines) => Geometry::MultiLineString(convert_rings(lines)?),
            Value::Polygon(polygon) => Geometry::Polygon(convert_rings(polygon)?),
            Value::MultiPolygon(mp) => Geometry::MultiPolygon(
                mp.iter()
                    .map(|polygon| convert_rings(polygon))
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(geometries) => Geometry::GeometryCollection(
                geometries
                    .iter()
                    .map(|geometry| Geometry::try_from(&geometry.value))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = CutterError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&value.value)
    }
}

impl From<Geometry> for Value {
    fn from(value: Geometry) -> Self {
        match value {
            Geometry::Point(p) => Value::Point(p.into()),
            Geometry::MultiPoint(points) => Value::MultiPoint(to_path(points)),
            Geometry::LineString(line) => Value::LineString(to_path(line)),
            Geometry::MultiLineString(lines) => Value::MultiLineString(to_rings(lines)),
            Geometry::Polygon(rings) => Value::Polygon(to_rings(rings)),
            Geometry::MultiPolygon(polygons) => {
                Value::MultiPolygon(polygons.into_iter().map(to_rings).collect())
            }
            Geometry::GeometryCollection(geometries) => Value::GeometryCollection(
                geometries.into_iter().map(geojson::Geometry::from).collect(),
            ),
        }
    }
}

impl From<Position> for geojson::Position {
    fn from(value: Position) -> Self {
        vec![value.lon(), value.lat()]
    }
}

impl TryFrom<&JsonValue> for Coordinates {
    type Error = CutterError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        Coordinates::deserialize(value).map_err(|e| CutterError::Conversion(e.to_string()))
    }
}

impl<I, H> Cutter<I, H>
where
    I: Interpolator,
    H: HoleTest,
{
    /// Cuts a GeoJSON geometry.
    ///
    /// Foreign members of the geometry are kept. If the geometry has a bounding box and
    /// [`update_bbox`](crate::CutterConfiguration::update_bbox) is set, the bounding box is recomputed from the
    /// output.
    pub fn cut_geojson(&self, geometry: &geojson::Geometry) -> Result<geojson::Geometry, CutterError> {
        let cut = self.cut(&Geometry::try_from(&geometry.value)?)?;

        let bbox = match &geometry.bbox {
            Some(_) if self.configuration().update_bbox() => cut.bounding_rect().map(|rect| rect.to_bbox()),
            bbox => bbox.clone(),
        };

        Ok(geojson::Geometry {
            bbox,
            value: cut.into(),
            foreign_members: geometry.foreign_members.clone(),
        })
    }

    /// Cuts a JSON value, which is either a GeoJSON geometry object or a bare coordinate array.
    ///
    /// The geometry type of a coordinate array is inferred from its nesting depth, see
    /// [`ClassifiedInput`](crate::ClassifiedInput).
    pub fn cut_json(&self, json: &JsonValue) -> Result<geojson::Geometry, CutterError> {
        if json.is_array() {
            let coordinates = Coordinates::try_from(json)?;
            return Ok(self.cut(&coordinates)?.into());
        }

        let geometry = geojson::Geometry::from_json_value(json.clone())
            .map_err(|e| CutterError::Conversion(e.to_string()))?;
        self.cut_geojson(&geometry)
    }
}

fn convert_position(position: &geojson::Position) -> Result<Position, CutterError> {
    Position::try_from(position.as_slice())
}

fn convert_path(path: &LineStringType) -> Result<Vec<Position>, CutterError> {
    path.iter().map(convert_position).collect()
}

fn convert_rings(rings: &PolygonType) -> Result<Vec<Vec<Position>>, CutterError> {
    rings.iter().map(convert_path).collect()
}

fn to_path(path: Vec<Position>) -> LineStringType {
    path.into_iter().map(geojson::Position::from).collect()
}

fn to_rings(rings: Vec<Vec<Position>>) -> PolygonType {
    rings.into_iter().map(to_path).collect()
}
