//! Cutting of geometries at the antimeridian.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bounding_rect::BoundingRect;
use crate::classify::ClassifiedInput;
use crate::coordinates::Coordinates;
use crate::error::CutterError;
use crate::geometry::Geometry;
use crate::hole::{BoundingBoxContainment, HoleTest};
use crate::interpolate::{Interpolator, LinearInterpolator};
use crate::position::Position;
use crate::unwrap::unwrap_path;
use crate::world::{copy_offset, wrap_longitude, Bands};

mod assemble;
mod dedup;
mod polygon;
mod split;

use dedup::{remove_later_duplicates, remove_repeated_positions, MIN_LINE_LEN, MIN_RING_LEN};
use polygon::{assign_holes, close_rings, separate_nested};
use split::{split_path, Slice};

/// Input accepted by [`Cutter::cut`]: either a tagged geometry or a bare coordinate array.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CutInput<'a> {
    /// Geometry with a known type.
    Geometry(&'a Geometry),
    /// Coordinates whose geometry type is inferred from their nesting depth.
    Coordinates(&'a Coordinates),
}

impl<'a> From<&'a Geometry> for CutInput<'a> {
    fn from(value: &'a Geometry) -> Self {
        Self::Geometry(value)
    }
}

impl<'a> From<&'a Coordinates> for CutInput<'a> {
    fn from(value: &'a Coordinates) -> Self {
        Self::Coordinates(value)
    }
}

/// Configuration of a [`Cutter`].
///
/// Missing fields take their default values when deserialized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutterConfiguration {
    apply_coordinate_translation: bool,
    update_bbox: bool,
}

impl Default for CutterConfiguration {
    fn default() -> Self {
        Self {
            apply_coordinate_translation: true,
            update_bbox: true,
        }
    }
}

impl CutterConfiguration {
    /// If true, output stays in continuous longitudes, which web maps render without a seam at the antimeridian.
    /// Otherwise geometries are cut at the antimeridian and every piece is moved into the `[-180, 180]` range.
    pub fn apply_coordinate_translation(&self) -> bool {
        self.apply_coordinate_translation
    }

    /// Sets whether the output stays in continuous longitudes.
    pub fn with_coordinate_translation(mut self, apply: bool) -> Self {
        self.apply_coordinate_translation = apply;
        self
    }

    /// Sets whether the output stays in continuous longitudes.
    pub fn set_coordinate_translation(&mut self, apply: bool) {
        self.apply_coordinate_translation = apply;
    }

    /// If true, a bounding box present on a GeoJSON input is recomputed from the cut geometry.
    pub fn update_bbox(&self) -> bool {
        self.update_bbox
    }

    /// Sets whether bounding boxes of GeoJSON inputs are recomputed.
    pub fn with_update_bbox(mut self, update: bool) -> Self {
        self.update_bbox = update;
        self
    }

    /// Sets whether bounding boxes of GeoJSON inputs are recomputed.
    pub fn set_update_bbox(&mut self, update: bool) {
        self.update_bbox = update;
    }
}

/// Cuts geometries at the antimeridian.
///
/// Every segment of a path is read as going the shorter way round the globe, so `170°` followed by `-170°` is a 20°
/// segment crossing the antimeridian. What happens next depends on the
/// [`apply_coordinate_translation`](CutterConfiguration::apply_coordinate_translation) option:
///
/// * **on** (default): the geometry is returned in continuous longitudes. Only geometries wrapping around the globe
///   are split, so that no piece spans more than 360°.
/// * **off**: the geometry is split at every crossing of the antimeridian and each piece is moved into the
///   `[-180, 180]` range. Pieces that become identical after moving are dropped.
///
/// Points of a crossing segment are produced by the [`Interpolator`] and pieces of a polygon ring are sorted into
/// outer rings and holes with the [`HoleTest`]. Both can be replaced.
///
/// ```
/// use antimeridian_cutter::{Cutter, Geometry, Position};
///
/// let ring = vec![
///     Position::new(170.0, 10.0),
///     Position::new(-170.0, 10.0),
///     Position::new(-170.0, -10.0),
///     Position::new(170.0, -10.0),
///     Position::new(170.0, 10.0),
/// ];
///
/// let cut = Cutter::new()
///     .with_coordinate_translation(false)
///     .cut(&Geometry::Polygon(vec![ring]))
///     .unwrap();
///
/// let Geometry::MultiPolygon(polygons) = cut else {
///     panic!("expected a multipolygon");
/// };
/// assert_eq!(polygons.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cutter<I = LinearInterpolator, H = BoundingBoxContainment> {
    config: CutterConfiguration,
    interpolator: I,
    hole_test: H,
}

impl Cutter {
    /// Creates a cutter with default configuration and strategies.
    pub fn new() -> Self {
        Self {
            config: CutterConfiguration::default(),
            interpolator: LinearInterpolator,
            hole_test: BoundingBoxContainment,
        }
    }
}

impl Default for Cutter {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, H> Cutter<I, H>
where
    I: Interpolator,
    H: HoleTest,
{
    /// Configuration of the cutter.
    pub fn configuration(&self) -> CutterConfiguration {
        self.config
    }

    /// Replaces the configuration of the cutter.
    pub fn with_configuration(mut self, config: CutterConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Sets whether the output stays in continuous longitudes. See [`CutterConfiguration`].
    pub fn with_coordinate_translation(mut self, apply: bool) -> Self {
        self.config.set_coordinate_translation(apply);
        self
    }

    /// Replaces the strategy computing the points where segments cross a meridian.
    pub fn with_interpolator<J: Interpolator>(self, interpolator: J) -> Cutter<J, H> {
        Cutter {
            config: self.config,
            interpolator,
            hole_test: self.hole_test,
        }
    }

    /// Replaces the strategy deciding whether a ring piece is a hole of another one.
    pub fn with_hole_test<T: HoleTest>(self, hole_test: T) -> Cutter<I, T> {
        Cutter {
            config: self.config,
            interpolator: self.interpolator,
            hole_test,
        }
    }

    /// Cuts the geometry at the antimeridian.
    ///
    /// The input is not modified. The output type follows the input type, upgraded to its multi-variant if the
    /// geometry is split: a LineString may become a MultiLineString and a Polygon a MultiPolygon. A MultiPoint with
    /// points in several world copies becomes a GeometryCollection of MultiPoints.
    pub fn cut<'a>(&self, input: impl Into<CutInput<'a>>) -> Result<Geometry, CutterError> {
        match ClassifiedInput::classify(input.into()) {
            ClassifiedInput::Point(position) => self.cut_point(position),
            ClassifiedInput::MultiPoint(points) => self.cut_multi_point(points),
            ClassifiedInput::LineString(path) => Ok(assemble::line_string(self.cut_path(path, 0)?)),
            ClassifiedInput::MultiLineString(paths) => {
                let mut lines = Vec::with_capacity(paths.len());
                for (index, path) in paths.into_iter().enumerate() {
                    lines.extend(self.cut_path(path, index)?);
                }

                Ok(Geometry::MultiLineString(lines))
            }
            ClassifiedInput::Polygon(rings) => Ok(assemble::polygon(self.cut_polygon(&rings)?)),
            ClassifiedInput::MultiPolygon(polygons) => {
                let mut cut = Vec::with_capacity(polygons.len());
                for rings in polygons {
                    cut.extend(self.cut_polygon(&rings)?);
                }

                Ok(Geometry::MultiPolygon(cut))
            }
            ClassifiedInput::GeometryCollection(geometries) => Ok(Geometry::GeometryCollection(
                geometries
                    .iter()
                    .map(|geometry| self.cut(geometry))
                    .collect::<Result<_, _>>()?,
            )),
        }
    }

    fn cut_point(&self, position: &Position) -> Result<Geometry, CutterError> {
        validate(std::slice::from_ref(position), 0)?;

        if self.config.apply_coordinate_translation() {
            Ok(Geometry::Point(*position))
        } else {
            Ok(Geometry::Point(position.with_lon(wrap_longitude(position.lon()))))
        }
    }

    fn cut_multi_point(&self, points: &[Position]) -> Result<Geometry, CutterError> {
        if points.is_empty() {
            return Ok(Geometry::MultiPoint(Vec::new()));
        }
        validate(points, 0)?;

        let bands = self.bands(points);
        let mut groups: Vec<(i32, Vec<Position>)> = Vec::new();
        for &position in points {
            let band = bands.band_of(position.lon());
            let placed = self.place_position(band, position);
            match groups.iter_mut().find(|(group_band, _)| *group_band == band) {
                Some((_, group)) => group.push(placed),
                None => groups.push((band, vec![placed])),
            }
        }

        Ok(assemble::multi_point(
            groups.into_iter().map(|(_, group)| group).collect(),
        ))
    }

    fn cut_path(&self, path: &[Position], index: usize) -> Result<Vec<Vec<Position>>, CutterError> {
        validate(path, index)?;

        let continuous = unwrap_path(path, None);
        let slices = split_path(&continuous, self.bands(&continuous), &self.interpolator, false)?;

        let mut lines: Vec<Vec<Position>> = slices
            .into_iter()
            .map(|mut slice| {
                remove_repeated_positions(&mut slice.points, MIN_LINE_LEN);
                self.place(slice)
            })
            .collect();
        self.prune_duplicates(&mut lines, "lines");

        Ok(lines)
    }

    fn cut_polygon(&self, rings: &[&[Position]]) -> Result<Vec<Vec<Vec<Position>>>, CutterError> {
        let Some((outer, inner)) = rings.split_first() else {
            return Ok(Vec::new());
        };
        for (index, ring) in rings.iter().enumerate() {
            validate(ring, index)?;
        }

        let outer = read_ring(outer, None);
        let center = BoundingRect::from_positions(outer.iter())
            .map(|rect| rect.center_lon())
            .unwrap_or_default();
        let bands = self.bands(&outer);

        let (outers, mut holes) = self.cut_ring(&outer, bands)?;
        for ring in inner {
            let ring = read_ring(ring, Some(center));
            let (pieces, nested) = self.cut_ring(&ring, bands)?;
            holes.extend(pieces);
            holes.extend(nested);
        }

        let mut polygons: Vec<Vec<Vec<Position>>> = assign_holes(outers, holes, &self.hole_test)
            .into_iter()
            .map(|polygon| polygon.rings.into_iter().map(|ring| self.place(ring)).collect())
            .collect();
        self.prune_duplicates(&mut polygons, "polygons");

        Ok(polygons)
    }

    /// Splits a closed ring into closed pieces. Returns the outer pieces and the pieces nested in them.
    fn cut_ring(&self, ring: &[Position], bands: Bands) -> Result<(Vec<Slice>, Vec<Slice>), CutterError> {
        let slices = split_path(ring, bands, &self.interpolator, true)?;
        let (outers, mut holes) = separate_nested(slices, &self.hole_test);
        let mut outers = close_rings(outers);

        for slice in outers.iter_mut().chain(holes.iter_mut()) {
            remove_repeated_positions(&mut slice.points, MIN_RING_LEN);
        }

        Ok((outers, holes))
    }

    fn bands(&self, continuous: &[Position]) -> Bands {
        if !self.config.apply_coordinate_translation() {
            return Bands::world_copies();
        }

        let center = BoundingRect::from_positions(continuous.iter())
            .map(|rect| rect.center_lon())
            .unwrap_or_default();
        Bands::centered(center)
    }

    fn place(&self, slice: Slice) -> Vec<Position> {
        let band = slice.band;
        if band == 0 || self.config.apply_coordinate_translation() {
            return slice.points;
        }

        slice
            .points
            .into_iter()
            .map(|position| self.place_position(band, position))
            .collect()
    }

    fn place_position(&self, band: i32, position: Position) -> Position {
        if self.config.apply_coordinate_translation() {
            position
        } else {
            position.shifted(-copy_offset(band))
        }
    }

    fn prune_duplicates<T: PartialEq>(&self, items: &mut Vec<T>, kind: &str) {
        if self.config.apply_coordinate_translation() {
            return;
        }

        let removed = remove_later_duplicates(items);
        if removed > 0 {
            debug!("Pruned {removed} duplicate {kind} after moving pieces into the central world copy");
        }
    }
}

fn validate(path: &[Position], ring: usize) -> Result<(), CutterError> {
    if path.is_empty() {
        return Err(CutterError::EmptyRing { ring });
    }

    match path.iter().position(|p| !p.is_finite()) {
        Some(position) => Err(CutterError::NonFiniteCoordinate { ring, position }),
        None => Ok(()),
    }
}

/// Closes the ring if its last position differs from the first one, and unwraps it.
fn read_ring(ring: &[Position], start_near: Option<f64>) -> Vec<Position> {
    if ring.first() == ring.last() {
        return unwrap_path(ring, start_near);
    }

    let mut closed = ring.to_vec();
    closed.extend(ring.first().copied());
    unwrap_path(&closed, start_near)
}
