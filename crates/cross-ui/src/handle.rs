//! Per-handle drag state machine
//!
//! A [`Handle`] is either idle, resting on a snap point, or being dragged.
//! While dragging its offset follows the pointer freely (subject to the
//! travel rules); on drag end it settles on the nearest snap point.

use crate::{clamp_offset, travel::nearest_index_within, Neighbor, PointSet, TrackGeometry};

/// Drag phase of a handle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HandlePhase {
    /// Resting on a snap point
    #[default]
    Idle,
    /// Following a drag gesture
    Dragging {
        /// Offset captured when the gesture started
        base: f32,
    },
}

/// Result of feeding one move tick to a dragging handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The offset moved; `index` is the snap point it is currently closest to
    Accepted { offset: f32, index: usize },
    /// The tick was outside the allowed travel, or the handle is idle
    Rejected,
}

/// One draggable handle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Handle {
    offset: f32,
    index: usize,
    phase: HandlePhase,
}

impl Handle {
    /// A handle resting on point `index`
    pub fn at_index(points: &PointSet, index: usize) -> Self {
        let index = index.min(points.last_index());
        Self {
            offset: points.get(index),
            index,
            phase: HandlePhase::Idle,
        }
    }

    /// Current pixel offset (live while dragging)
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Snap index last settled on, or the live nearest index while dragging
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> HandlePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, HandlePhase::Dragging { .. })
    }

    /// Idle -> Dragging
    ///
    /// Captures the current offset as the base that cumulative translations
    /// are added to. Starting a drag on a dragging handle restarts it from
    /// the current offset.
    pub fn begin_drag(&mut self) {
        self.phase = HandlePhase::Dragging { base: self.offset };
        log::trace!("handle drag started at {}", self.offset);
    }

    /// Dragging -> Dragging
    ///
    /// `translation` is the cumulative pointer travel since the gesture
    /// started. The live index honours `neighbor`, so it never reports a
    /// point the handle could not settle on.
    pub fn drag_to(
        &mut self,
        translation: f32,
        points: &PointSet,
        track: &TrackGeometry,
        neighbor: Option<Neighbor>,
    ) -> DragOutcome {
        let HandlePhase::Dragging { base } = self.phase else {
            return DragOutcome::Rejected;
        };

        let raw = base + translation;
        let Some(offset) = clamp_offset(raw, track.track_length, track.knob_width, neighbor)
        else {
            log::trace!("handle move to {} rejected", raw);
            return DragOutcome::Rejected;
        };

        self.offset = offset;
        self.index = nearest_index_within(points.as_slice(), offset, neighbor.map(|n| n.limit()));
        DragOutcome::Accepted {
            offset,
            index: self.index,
        }
    }

    /// Dragging -> Idle
    ///
    /// Snaps to the nearest point that respects `neighbor` and returns its
    /// index. Ending an idle handle re-snaps it in place. Cancelled gestures
    /// take this same path.
    pub fn end_drag(&mut self, points: &PointSet, neighbor: Option<Neighbor>) -> usize {
        self.index = nearest_index_within(points.as_slice(), self.offset, neighbor.map(|n| n.limit()));
        self.offset = points.get(self.index);
        self.phase = HandlePhase::Idle;
        log::trace!("handle settled on point {} ({})", self.index, self.offset);
        self.index
    }

    /// Re-seat the handle after the point set was regenerated
    ///
    /// Keeps the current index. A drag in progress is settled first, since
    /// its base and translation refer to the old geometry.
    pub fn relayout(&mut self, points: &PointSet) {
        self.phase = HandlePhase::Idle;
        self.index = self.index.min(points.last_index());
        self.offset = points.get(self.index);
    }

    /// Jump to point `index` without a gesture
    pub fn set_index(&mut self, points: &PointSet, index: usize) {
        self.index = index.min(points.last_index());
        self.offset = points.get(self.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PointSet, TrackGeometry) {
        let _ = env_logger::builder().is_test(true).try_init();
        (
            PointSet::new(200.0, 10),
            TrackGeometry::new(200.0, 32.0).unwrap(),
        )
    }

    #[test]
    fn test_full_gesture_snaps() {
        let (points, track) = setup();
        let mut handle = Handle::at_index(&points, 0);
        assert_eq!(handle.phase(), HandlePhase::Idle);

        handle.begin_drag();
        assert_eq!(handle.phase(), HandlePhase::Dragging { base: 0.0 });

        let outcome = handle.drag_to(95.0, &points, &track, None);
        assert_eq!(
            outcome,
            DragOutcome::Accepted {
                offset: 95.0,
                index: 5
            }
        );
        // Displayed offset stays unsnapped while dragging
        assert_eq!(handle.offset(), 95.0);

        assert_eq!(handle.end_drag(&points, None), 5);
        assert_eq!(handle.offset(), 100.0);
        assert!(!handle.is_dragging());
    }

    #[test]
    fn test_translation_is_relative_to_base() {
        let (points, track) = setup();
        let mut handle = Handle::at_index(&points, 5);
        handle.begin_drag();
        handle.drag_to(-41.0, &points, &track, None);
        assert_eq!(handle.offset(), 59.0);
        assert_eq!(handle.end_drag(&points, None), 3);
    }

    #[test]
    fn test_rejected_tick_keeps_offset() {
        let (points, track) = setup();
        let mut handle = Handle::at_index(&points, 0);
        handle.begin_drag();
        handle.drag_to(180.0, &points, &track, None);

        assert_eq!(
            handle.drag_to(400.0, &points, &track, None),
            DragOutcome::Rejected
        );
        assert_eq!(handle.offset(), 180.0);

        // A later tick back inside the track is accepted again
        assert!(matches!(
            handle.drag_to(210.0, &points, &track, None),
            DragOutcome::Accepted { offset, .. } if offset == 210.0
        ));
        assert_eq!(handle.end_drag(&points, None), 10);
        assert_eq!(handle.offset(), 200.0);
    }

    #[test]
    fn test_idle_handle_ignores_moves() {
        let (points, track) = setup();
        let mut handle = Handle::at_index(&points, 2);
        assert_eq!(
            handle.drag_to(50.0, &points, &track, None),
            DragOutcome::Rejected
        );
        assert_eq!(handle.offset(), 40.0);
    }

    #[test]
    fn test_neighbor_limits_settle_point() {
        let (points, track) = setup();
        let neighbor = Neighbor::new(115.0, 20.0);
        let mut handle = Handle::at_index(&points, 0);
        handle.begin_drag();

        // 94 is nearest to point 5 (100), which would pass the limit of 95
        assert_eq!(
            handle.drag_to(94.0, &points, &track, Some(neighbor)),
            DragOutcome::Accepted {
                offset: 94.0,
                index: 4
            }
        );
        assert_eq!(handle.end_drag(&points, Some(neighbor)), 4);
        assert_eq!(handle.offset(), 80.0);
    }

    #[test]
    fn test_relayout_keeps_index() {
        let (points, track) = setup();
        let mut handle = Handle::at_index(&points, 3);
        handle.begin_drag();
        handle.drag_to(5.0, &points, &track, None);

        let wider = PointSet::new(400.0, 10);
        handle.relayout(&wider);
        assert!(!handle.is_dragging());
        assert_eq!(handle.index(), 3);
        assert_eq!(handle.offset(), 120.0);
    }
}
