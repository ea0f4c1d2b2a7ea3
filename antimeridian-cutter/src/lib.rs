//! Antimeridian-aware geometry cutting.
//!
//! Geographic geometries which cross the ±180° meridian are ambiguous for flat maps: a segment from `170°` to
//! `-170°` can be read as a 20° hop over the antimeridian or as a 340° trip around the globe. This crate always reads
//! segments as taking the shorter way round and then either:
//!
//! * keeps the geometry in **continuous** longitudes (e.g. `-195°` instead of `165°`), which web maps can render
//!   without seams. This is the default.
//! * **cuts** the geometry at the antimeridian into separate pieces which all lie inside the `[-180, 180]` range.
//!
//! Both modes are handled by a [`Cutter`]:
//!
//! ```
//! use antimeridian_cutter::{Cutter, Geometry, Position};
//!
//! let line = Geometry::LineString(vec![Position::new(-170.0, 0.0), Position::new(165.0, 0.0)]);
//!
//! let continuous = Cutter::new().cut(&line).unwrap();
//! assert_eq!(
//!     continuous,
//!     Geometry::LineString(vec![Position::new(-170.0, 0.0), Position::new(-195.0, 0.0)])
//! );
//!
//! let pieces = Cutter::new().with_coordinate_translation(false).cut(&line).unwrap();
//! assert_eq!(
//!     pieces,
//!     Geometry::MultiLineString(vec![
//!         vec![Position::new(-170.0, 0.0), Position::new(-180.0, 0.0)],
//!         vec![Position::new(180.0, 0.0), Position::new(165.0, 0.0)],
//!     ])
//! );
//! ```
//!
//! Besides tagged [`Geometry`] values, the cutter accepts bare [`Coordinates`] arrays and infers the geometry type
//! from their nesting depth (see [`ClassifiedInput`]).

pub mod bounding_rect;
pub mod classify;
pub mod coordinates;
pub mod cutter;
pub mod error;
pub mod geometry;
pub mod hole;
pub mod interpolate;
pub mod position;
pub mod world;

mod unwrap;

#[cfg(feature = "geo-types")]
pub mod geo_types;
#[cfg(feature = "geojson")]
pub mod geojson;

pub use bounding_rect::BoundingRect;
pub use classify::ClassifiedInput;
pub use coordinates::Coordinates;
pub use cutter::{CutInput, Cutter, CutterConfiguration};
pub use error::CutterError;
pub use geometry::{Geometry, GeometryType};
pub use hole::{BoundingBoxContainment, HoleTest};
pub use interpolate::{Interpolator, LinearInterpolator};
pub use position::Position;
pub use world::{world_copy, wrap_longitude};
