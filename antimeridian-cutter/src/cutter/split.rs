//! Splitting of paths at band edges.

use log::trace;

use crate::error::CutterError;
use crate::interpolate::Interpolator;
use crate::position::Position;
use crate::world::Bands;

/// Part of a path lying inside a single band.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice {
    pub band: i32,
    pub points: Vec<Position>,
}

impl Slice {
    pub fn new(band: i32, points: Vec<Position>) -> Self {
        Self { band, points }
    }

    /// Closed polygon ring: at least 4 points, the last equal to the first.
    pub fn is_closed(&self) -> bool {
        crate::classify::is_closed_ring(&self.points)
    }

    /// Repeats the first point until the slice is a closed ring.
    pub fn force_close(&mut self) {
        if let Some(&first) = self.points.first() {
            while !self.is_closed() {
                self.points.push(first);
            }
        }
    }

    /// Appends the points of `other`, skipping its first point if it repeats the current last one.
    pub fn append(&mut self, other: Slice) {
        let skip = usize::from(self.points.last() == other.points.first());
        self.points.extend(other.points.into_iter().skip(skip));
    }
}

/// Splits a path in continuous longitudes into slices lying inside single bands.
///
/// Every time a segment crosses a band edge, the crossing point returned by the `interpolator` ends the current slice
/// and starts the next one. A segment spanning several bands is split at every edge it crosses.
///
/// For `closed` paths (polygon rings) the last slice is joined to the front of the first one, since a ring has no
/// fixed starting point. This only happens if both lie in the same band, otherwise they stay separate slices.
///
/// The path must not be empty.
pub(crate) fn split_path<I>(
    path: &[Position],
    bands: Bands,
    interpolator: &I,
    closed: bool,
) -> Result<Vec<Slice>, CutterError>
where
    I: Interpolator + ?Sized,
{
    let mut positions = path.iter().copied();
    let Some(first) = positions.next() else {
        return Ok(Vec::new());
    };

    let mut slices = Vec::new();
    let mut band = bands.band_of(first.lon());
    let mut current = vec![first];

    for position in positions {
        let target = bands.band_of(position.lon());
        while band != target {
            let next = if target > band { band + 1 } else { band - 1 };
            let meridian = bands.edge(band, next);
            let from = current.last().copied().unwrap_or(first);

            let crossing = interpolator.interpolate(meridian, from, position);
            let Some(&joint) = crossing.last() else {
                return Err(CutterError::EmptyInterpolation { meridian });
            };
            trace!("Segment {from:?} -> {position:?} crosses meridian {meridian} at {joint:?}");

            current.extend(crossing);
            slices.push(Slice::new(band, std::mem::replace(&mut current, vec![joint])));
            band = next;
        }

        current.push(position);
    }

    let tail = Slice::new(band, current);
    if slices.is_empty() {
        slices.push(tail);
    } else if closed && slices[0].band == tail.band {
        let mut joined = tail;
        joined.append(slices.remove(0));
        slices.insert(0, joined);
    } else if tail.points.len() > 1 {
        slices.push(tail);
    }

    Ok(slices)
}
