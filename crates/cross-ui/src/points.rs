//! Snap points along a slider track
//!
//! A [`PointSet`] holds `step_count + 1` evenly spaced pixel offsets. Handles
//! travel continuously while dragged and settle on one of these points when
//! the drag ends.

use crate::error::{ensure_non_negative, ConfigError};

/// Measured geometry of the interactive track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Travel length of a handle in pixels
    pub track_length: f32,
    /// Physical width of a knob; also the overrun tolerated past either edge
    pub knob_width: f32,
}

impl TrackGeometry {
    /// Create track geometry, rejecting negative or non-finite measurements
    pub fn new(track_length: f32, knob_width: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            track_length: ensure_non_negative("track_length", track_length)?,
            knob_width: ensure_non_negative("knob_width", knob_width)?,
        })
    }

    /// Whether a layout measurement has arrived yet
    pub fn is_measured(&self) -> bool {
        self.track_length > 0.0
    }

    /// Lowest offset a handle may be dragged to
    pub fn min_travel(&self) -> f32 {
        -self.knob_width
    }

    /// Highest offset a handle may be dragged to
    pub fn max_travel(&self) -> f32 {
        self.track_length + self.knob_width
    }
}

/// Ordered, read-only snap points
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<f32>,
}

impl PointSet {
    /// Points spread over `[0, track_length]`
    pub fn new(track_length: f32, step_count: usize) -> Self {
        generate_points(track_length, step_count)
    }

    /// The snap points in increasing order
    pub fn as_slice(&self) -> &[f32] {
        &self.points
    }

    /// Number of points (`step_count + 1`)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for sets built by this module
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the last point
    pub fn last_index(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Offset of point `index`, clamped to the last point
    pub fn get(&self, index: usize) -> f32 {
        self.points
            .get(index.min(self.last_index()))
            .copied()
            .unwrap_or(0.0)
    }

    /// See [`nearest_point_index`]
    pub fn nearest_index(&self, offset: f32) -> usize {
        nearest_point_index(&self.points, offset)
    }

    /// See [`snap_to_nearest`]
    pub fn snap(&self, offset: f32) -> f32 {
        snap_to_nearest(&self.points, offset)
    }
}

/// Generate `step_count + 1` points evenly spaced across `[0, track_length]`
///
/// The first point is exactly `0.0` and the last exactly `track_length`.
/// A zero-length track collapses every point to `0.0`. A `step_count` of
/// zero is treated as one interval.
pub fn generate_points(track_length: f32, step_count: usize) -> PointSet {
    spread(0.0, track_length, step_count)
}

/// Generate points spread across `[inset, track_length - inset]`
///
/// Used when a knob has physical width and its centre must stay `inset`
/// pixels away from both edges. When the track is too short to leave any
/// usable span, every point collapses to the track centre.
pub fn generate_inset_points(track_length: f32, step_count: usize, inset: f32) -> PointSet {
    let inset = inset.max(0.0);
    let track_length = track_length.max(0.0);
    if track_length - 2.0 * inset <= 0.0 {
        let centre = track_length / 2.0;
        return spread(centre, centre, step_count);
    }
    spread(inset, track_length - inset, step_count)
}

fn spread(start: f32, end: f32, step_count: usize) -> PointSet {
    let step_count = step_count.max(1);
    let span = end - start;
    let step = span / step_count as f32;

    let mut points = Vec::with_capacity(step_count + 1);
    points.push(start);
    for i in 1..step_count {
        points.push(start + i as f32 * step);
    }
    points.push(end);

    PointSet { points }
}

/// Index of the point closest to `offset`
///
/// Linear scan with a strict comparison, so when two points are equally
/// close the lower index wins. Offsets beyond either end resolve to that
/// end. An empty slice or a non-finite offset yields 0.
pub fn nearest_point_index(points: &[f32], offset: f32) -> usize {
    let mut best_index = 0;
    let mut best_distance = f32::INFINITY;

    for (index, point) in points.iter().enumerate() {
        let distance = (point - offset).abs();
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    best_index
}

/// Replace `offset` with the nearest point
///
/// Snapped offsets are fixed points: snapping twice equals snapping once.
pub fn snap_to_nearest(points: &[f32], offset: f32) -> f32 {
    points
        .get(nearest_point_index(points, offset))
        .copied()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_generate_points_scenario() {
        let points = generate_points(200.0, 10);
        let expected: Vec<f32> = (0..=10).map(|i| i as f32 * 20.0).collect();
        assert_eq!(points.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_generate_points_zero_length() {
        let points = generate_points(0.0, 4);
        assert_eq!(points.as_slice(), &[0.0; 5]);
        assert_eq!(points.nearest_index(37.0), 0);
    }

    #[test]
    fn test_generate_points_properties() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let track_length: f32 = rng.random_range(0.0..5000.0);
            let step_count: usize = rng.random_range(1..120);
            let points = generate_points(track_length, step_count);
            let slice = points.as_slice();

            assert_eq!(slice.len(), step_count + 1);
            assert_eq!(slice[0], 0.0);
            assert_eq!(slice[step_count], track_length);
            assert!(slice.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_generate_points_deterministic() {
        assert_eq!(generate_points(317.3, 7), generate_points(317.3, 7));
    }

    #[test]
    fn test_inset_points() {
        let points = generate_inset_points(232.0, 10, 16.0);
        assert_eq!(points.get(0), 16.0);
        assert_eq!(points.get(10), 216.0);
        assert_eq!(points.get(5), 116.0);

        let collapsed = generate_inset_points(20.0, 3, 16.0);
        assert!(collapsed.as_slice().iter().all(|&p| p == 10.0));
    }

    #[test]
    fn test_nearest_point_index_ties_go_low() {
        let points = generate_points(200.0, 10);
        // 30 is halfway between 20 (index 1) and 40 (index 2)
        assert_eq!(points.nearest_index(30.0), 1);
        assert_eq!(points.nearest_index(30.01), 2);
        assert_eq!(nearest_point_index(&[0.0, 10.0, 10.0], 10.0), 1);
    }

    #[test]
    fn test_nearest_point_index_bounds() {
        let points = generate_points(200.0, 10);
        assert_eq!(points.nearest_index(-1000.0), 0);
        assert_eq!(points.nearest_index(1000.0), 10);
        assert_eq!(points.nearest_index(f32::NAN), 0);
        assert_eq!(nearest_point_index(&[], 5.0), 0);
    }

    #[test]
    fn test_nearest_point_index_always_valid() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let step_count: usize = rng.random_range(1..100);
            let points = generate_points(rng.random_range(0.0..1000.0), step_count);
            let index = points.nearest_index(rng.random_range(-2000.0..2000.0));
            assert!(index <= step_count);
        }
    }

    #[test]
    fn test_snap_scenario() {
        let points = generate_points(200.0, 10);
        assert_eq!(points.nearest_index(95.0), 5);
        assert_eq!(points.snap(95.0), 100.0);
    }

    #[test]
    fn test_snap_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let points = generate_points(rng.random_range(0.0..1000.0), rng.random_range(1..60));
            let x: f32 = rng.random_range(-500.0..1500.0);
            let once = snap_to_nearest(points.as_slice(), x);
            let twice = snap_to_nearest(points.as_slice(), once);
            assert_eq!(once, twice);
            assert!(points.as_slice().contains(&once));
        }
    }
}
