//! Removal of repeated positions and duplicated pieces.

use crate::position::Position;

/// Minimum number of positions of a valid polygon ring.
pub(crate) const MIN_RING_LEN: usize = 4;
/// Minimum number of positions kept when removing duplicates from a line.
pub(crate) const MIN_LINE_LEN: usize = 3;

/// Removes consecutive repeated positions, but never more than would leave the path shorter than `min_len`.
///
/// Duplicates are removed from the start of the path on. Once the budget is spent, the remaining duplicates are kept.
pub(crate) fn remove_repeated_positions(points: &mut Vec<Position>, min_len: usize) {
    let mut budget = points.len().saturating_sub(min_len);
    let mut previous: Option<Position> = None;

    points.retain(|&position| {
        let repeated = previous == Some(position);
        previous = Some(position);

        if repeated && budget > 0 {
            budget -= 1;
            false
        } else {
            true
        }
    });
}

/// Removes items which have an equal item later in the list. The first item is always kept.
///
/// Returns the number of removed items.
pub(crate) fn remove_later_duplicates<T: PartialEq>(items: &mut Vec<T>) -> usize {
    let keep: Vec<bool> = (0..items.len())
        .map(|index| index == 0 || !items[index + 1..].contains(&items[index]))
        .collect();

    let before = items.len();
    let mut flags = keep.into_iter();
    items.retain(|_| flags.next().unwrap_or(true));

    before - items.len()
}
