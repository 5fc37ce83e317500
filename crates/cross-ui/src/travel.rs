//! Travel rules for a dragged handle
//!
//! A proposed offset is either accepted as-is or rejected outright. Rejected
//! move ticks are dropped; the handle keeps its previous offset until a later
//! tick lands inside the allowed travel again.

use crate::error::{ensure_non_negative, ConfigError};

/// The opposing handle of a bounded slider, seen from the moving handle
///
/// `offset` is expressed in the moving handle's own frame: for the leading
/// handle that is the trailing handle's distance from the start of the
/// track, and the other way round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Offset of the other handle
    pub offset: f32,
    /// Pixels that must stay free between the two handles
    pub minimum_gap: f32,
}

impl Neighbor {
    pub const fn new(offset: f32, minimum_gap: f32) -> Self {
        Self {
            offset,
            minimum_gap,
        }
    }

    /// Check a configured gap, rejecting negative or non-finite values
    pub fn validate_gap(minimum_gap: f32) -> Result<f32, ConfigError> {
        ensure_non_negative("minimum_gap", minimum_gap)
    }

    /// Highest offset the moving handle may take
    pub fn limit(&self) -> f32 {
        self.offset - self.minimum_gap
    }
}

/// Accept or reject a proposed handle offset
///
/// Returns `Some(raw_offset)` when the offset lies within
/// `[-knob_width, track_length + knob_width]` and, if a neighbor is given,
/// does not pass `neighbor.offset - neighbor.minimum_gap`. Returns `None`
/// otherwise; the offset is never pulled back to a boundary.
pub fn clamp_offset(
    raw_offset: f32,
    track_length: f32,
    knob_width: f32,
    neighbor: Option<Neighbor>,
) -> Option<f32> {
    if !raw_offset.is_finite() {
        return None;
    }
    if raw_offset < -knob_width || raw_offset > track_length + knob_width {
        return None;
    }
    if let Some(neighbor) = neighbor {
        if raw_offset > neighbor.limit() {
            return None;
        }
    }
    Some(raw_offset)
}

/// Nearest point index that does not pass `limit`
///
/// Starts at the nearest point and walks toward index 0 until the point
/// sits at or below `limit`. See [`index_within`] for the fallback.
pub fn nearest_index_within(points: &[f32], offset: f32, limit: Option<f32>) -> usize {
    let index = crate::nearest_point_index(points, offset);
    match limit {
        Some(limit) => index_within(points, index, limit),
        None => index,
    }
}

/// Walk `index` toward 0 until its point sits at or below `limit`
///
/// When even point 0 passes `limit` (a gap wider than the room left by the
/// neighbor), index 0 is returned anyway: the handle's own end is as far as
/// it can give way, and the gap is then smaller than requested.
pub fn index_within(points: &[f32], index: usize, limit: f32) -> usize {
    let mut index = index.min(points.len().saturating_sub(1));
    while index > 0 && points[index] > limit {
        index -= 1;
    }
    index
}
