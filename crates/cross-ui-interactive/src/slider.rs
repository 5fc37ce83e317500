//! Slider component
//!
//! A draggable slider that snaps to `step_count + 1` evenly spaced values.
//! In bounded mode it has two handles selecting a span; the trailing handle
//! counts its offset from the far end of the track and the two handles keep
//! `minimum_gap` pixels between them.

use cross_ui::{
    generate_inset_points, generate_points, index_within, ConfigError, DragEvent, DragOutcome,
    Handle, Neighbor, PointSet, TrackGeometry, ValueRange,
};

use crate::{LiveSender, Selection, SliderConfig, SliderUpdate, Thumb, UpdatePhase};

/// Per-handle bookkeeping next to the core [`Handle`]
#[derive(Debug, Clone, Default)]
struct HandleSlot {
    handle: Handle,
    /// Whether this handle has produced a value yet
    reported: bool,
    /// Index of the last live update, to only report changes
    last_live_index: Option<usize>,
}

/// A slider selecting one value, or a span in bounded mode
///
/// # Example
///
/// ```
/// use cross_ui::{DragEvent, Point};
/// use cross_ui_interactive::{Selection, Slider, SliderConfig, Thumb};
///
/// let mut slider = Slider::new(SliderConfig::default()).unwrap();
/// slider.set_track_length(200.0).unwrap();
///
/// slider.handle_event(Thumb::Leading, &DragEvent::Start { position: Point::zero() });
/// slider.handle_event(Thumb::Leading, &DragEvent::Move {
///     position: Point::new(95.0, 0.0),
///     translation: Point::new(95.0, 0.0),
///     delta: Point::new(95.0, 0.0),
/// });
/// let update = slider.handle_event(Thumb::Leading, &DragEvent::Cancel).unwrap();
/// assert_eq!(update.selection, Selection::Single(50.0));
/// assert_eq!(update.offset, 100.0);
/// ```
pub struct Slider {
    config: SliderConfig,
    range: ValueRange,
    track: TrackGeometry,
    points: PointSet,
    leading: HandleSlot,
    trailing: Option<HandleSlot>,
    on_change: Option<Box<dyn FnMut(&SliderUpdate)>>,
    live: Option<LiveSender<Selection>>,
}

impl Slider {
    /// Create a slider from a validated configuration
    ///
    /// The track starts unmeasured (length 0); every handle reports index 0
    /// until [`set_track_length`](Self::set_track_length) is called.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        let range = config.validate().inspect_err(|err| {
            log::debug!("{}: rejected configuration: {}", config.id, err);
        })?;
        let track = TrackGeometry::new(0.0, config.knob_width)?;
        let points = build_points(&config, &track, range.step_count());

        let leading = HandleSlot {
            handle: Handle::at_index(&points, 0),
            ..Default::default()
        };
        let trailing = config.bounded.then(|| HandleSlot {
            handle: Handle::at_index(&points, 0),
            ..Default::default()
        });

        Ok(Self {
            config,
            range,
            track,
            points,
            leading,
            trailing,
            on_change: None,
            live: None,
        })
    }

    /// Start the single handle (or the leading handle) at `value`
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(Thumb::Leading, value);
        self
    }

    /// Start a bounded slider at `[leading, trailing]`
    ///
    /// The two values are swapped if given in the wrong order. Has no effect
    /// on the trailing handle of a single slider.
    pub fn with_range_values(mut self, leading: f32, trailing: f32) -> Self {
        let (low, high) = if leading <= trailing {
            (leading, trailing)
        } else {
            (trailing, leading)
        };
        self.set_value(Thumb::Leading, low);
        self.set_value(Thumb::Trailing, high);
        self
    }

    /// Set a callback invoked with every live and final update
    pub fn on_change(mut self, f: impl FnMut(&SliderUpdate) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Post the selection of every accepted move tick to `sender`
    pub fn with_live_sender(mut self, sender: LiveSender<Selection>) -> Self {
        self.live = Some(sender);
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn track_length(&self) -> f32 {
        self.track.track_length
    }

    pub fn is_bounded(&self) -> bool {
        self.trailing.is_some()
    }

    /// Apply a layout measurement of the track
    ///
    /// Regenerates the snap points and re-seats both handles on their current
    /// indices. A drag in progress is settled without a callback. In bounded
    /// mode a shorter track can squeeze the handles below `minimum_gap`; they
    /// then step back toward their own ends until the gap holds again.
    pub fn set_track_length(&mut self, track_length: f32) -> Result<(), ConfigError> {
        let track = TrackGeometry::new(track_length, self.track.knob_width)?;
        if track == self.track {
            return Ok(());
        }

        self.track = track;
        self.points = build_points(&self.config, &self.track, self.range.step_count());
        let points = &self.points;
        for slot in std::iter::once(&mut self.leading).chain(self.trailing.as_mut()) {
            slot.handle.relayout(points);
            slot.last_live_index = None;
        }
        self.keep_gap(Thumb::Leading);
        self.keep_gap(Thumb::Trailing);

        let span = self.points.get(self.points.last_index()) - self.points.get(0);
        if self.is_bounded() && self.track.is_measured() && self.config.minimum_gap > span {
            log::warn!(
                "{}: minimum gap {} does not fit the {} px between the outer points",
                self.config.id,
                self.config.minimum_gap,
                span
            );
        }

        log::debug!("{}: track length now {}", self.config.id, track.track_length);
        Ok(())
    }

    /// Move a handle to the point closest to `value` without a gesture
    ///
    /// Does not invoke the change callback. In bounded mode the handle stops
    /// at the last point that keeps `minimum_gap` to the other handle.
    pub fn set_value(&mut self, thumb: Thumb, value: f32) {
        let index = match thumb {
            Thumb::Leading => self.range.index_of(value),
            Thumb::Trailing => self.range.mirror_index(self.range.index_of(value)),
        };
        let points = &self.points;
        let Some(slot) = slot_mut(&mut self.leading, &mut self.trailing, thumb) else {
            log::debug!("{}: no trailing handle to set", self.config.id);
            return;
        };
        slot.handle.set_index(points, index);
        slot.reported = true;
        self.keep_gap(thumb);
    }

    /// Current value of a handle; `None` for the trailing handle of a single slider
    pub fn value(&self, thumb: Thumb) -> Option<f32> {
        let slot = self.slot(thumb)?;
        Some(self.value_of(thumb, slot.handle.index()))
    }

    /// Current selection, once every handle has produced a value
    pub fn selection(&self) -> Option<Selection> {
        if !self.leading.reported {
            return None;
        }
        let leading = self.value_of(Thumb::Leading, self.leading.handle.index());

        match &self.trailing {
            None => Some(Selection::Single(leading)),
            Some(trailing) if trailing.reported => Some(Selection::Range {
                leading,
                trailing: self.value_of(Thumb::Trailing, trailing.handle.index()),
            }),
            Some(_) => None,
        }
    }

    /// Position of a handle from the start of the track
    pub fn offset(&self, thumb: Thumb) -> Option<f32> {
        let slot = self.slot(thumb)?;
        Some(self.to_track_position(thumb, slot.handle.offset()))
    }

    /// Whether a handle is in the middle of a drag
    pub fn is_dragging(&self, thumb: Thumb) -> bool {
        self.slot(thumb).is_some_and(|s| s.handle.is_dragging())
    }

    /// Span of the track to highlight as selected, in track pixels
    ///
    /// From the track start to the handle for a single slider, between the
    /// two handles in bounded mode.
    pub fn highlight(&self) -> (f32, f32) {
        let leading = self.leading.handle.offset();
        match &self.trailing {
            None => (0.0, leading),
            Some(trailing) => (
                leading,
                self.to_track_position(Thumb::Trailing, trailing.handle.offset()),
            ),
        }
    }

    /// The handle a press at track position `x` should grab
    ///
    /// The nearer handle wins. When both are equally near, the press goes to
    /// the trailing handle only if it lies beyond the leading one.
    pub fn thumb_at(&self, x: f32) -> Thumb {
        let Some(trailing) = &self.trailing else {
            return Thumb::Leading;
        };

        let leading_pos = self.leading.handle.offset();
        let trailing_pos = self.to_track_position(Thumb::Trailing, trailing.handle.offset());
        let to_leading = (x - leading_pos).abs();
        let to_trailing = (x - trailing_pos).abs();

        if to_leading < to_trailing {
            Thumb::Leading
        } else if to_trailing < to_leading || x > leading_pos {
            Thumb::Trailing
        } else {
            Thumb::Leading
        }
    }

    /// Feed one drag event for `thumb`
    ///
    /// Returns the update passed to the change callback, if any: a live
    /// update when a move brings the handle closest to a different point,
    /// and a final update whenever a drag ends or is cancelled.
    pub fn handle_event(&mut self, thumb: Thumb, event: &DragEvent) -> Option<SliderUpdate> {
        if self.slot(thumb).is_none() {
            log::debug!("{}: ignoring {:?} for missing {:?} handle", self.config.id, event, thumb);
            return None;
        }

        match event {
            DragEvent::Start { .. } => {
                let slot = self.slot_mut(thumb)?;
                slot.handle.begin_drag();
                slot.last_live_index = Some(slot.handle.index());
                None
            }
            DragEvent::Move { translation, .. } => self.drag(thumb, translation.x),
            DragEvent::End { translation, .. } => {
                if !self.is_dragging(thumb) {
                    return None;
                }
                // The release position is one last move tick
                self.drag(thumb, translation.x);
                self.settle(thumb)
            }
            DragEvent::Cancel => {
                if !self.is_dragging(thumb) {
                    return None;
                }
                self.settle(thumb)
            }
        }
    }

    /// Dragging -> Dragging
    fn drag(&mut self, thumb: Thumb, translation_x: f32) -> Option<SliderUpdate> {
        // The trailing handle's offset grows toward the track start
        let translation = match thumb {
            Thumb::Leading => translation_x,
            Thumb::Trailing => -translation_x,
        };
        let neighbor = self.neighbor_of(thumb);
        let points = &self.points;
        let track = &self.track;
        let slot = slot_mut(&mut self.leading, &mut self.trailing, thumb)?;

        let DragOutcome::Accepted { index, .. } =
            slot.handle.drag_to(translation, points, track, neighbor)
        else {
            return None;
        };
        slot.reported = true;

        let changed = slot.last_live_index != Some(index);
        slot.last_live_index = Some(index);

        if let (Some(live), Some(selection)) = (&self.live, self.selection()) {
            live.post(selection);
        }

        if !changed {
            return None;
        }
        log::trace!("{}: {:?} now nearest to point {}", self.config.id, thumb, index);
        self.emit(thumb, UpdatePhase::Live)
    }

    /// Dragging -> Idle
    fn settle(&mut self, thumb: Thumb) -> Option<SliderUpdate> {
        let neighbor = self.neighbor_of(thumb);
        let points = &self.points;
        let slot = slot_mut(&mut self.leading, &mut self.trailing, thumb)?;

        let index = slot.handle.end_drag(points, neighbor);
        slot.reported = true;
        slot.last_live_index = None;

        log::debug!(
            "{}: {:?} settled on point {} ({})",
            self.config.id,
            thumb,
            index,
            self.value_of(thumb, index)
        );
        self.emit(thumb, UpdatePhase::Final)
    }

    /// Step a resting handle back toward its own end until it keeps
    /// `minimum_gap` to the other handle
    ///
    /// Skipped on an unmeasured track, where every point sits at 0 and the
    /// indices are kept for the first measurement.
    fn keep_gap(&mut self, thumb: Thumb) {
        if !self.track.is_measured() {
            return;
        }
        let Some(neighbor) = self.neighbor_of(thumb) else {
            return;
        };
        let points = &self.points;
        let Some(slot) = slot_mut(&mut self.leading, &mut self.trailing, thumb) else {
            return;
        };

        let index = index_within(points.as_slice(), slot.handle.index(), neighbor.limit());
        if index != slot.handle.index() {
            log::debug!(
                "{}: {:?} moved from point {} to {} to keep the gap",
                self.config.id,
                thumb,
                slot.handle.index(),
                index
            );
            slot.handle.set_index(points, index);
        }
    }

    fn emit(&mut self, thumb: Thumb, phase: UpdatePhase) -> Option<SliderUpdate> {
        let selection = self.selection()?;
        let slot = self.slot(thumb)?;
        let update = SliderUpdate {
            thumb,
            selection,
            offset: self.to_track_position(thumb, slot.handle.offset()),
            index: slot.handle.index(),
            phase,
        };

        if let Some(ref mut on_change) = self.on_change {
            on_change(&update);
        }
        Some(update)
    }

    /// The other handle, expressed in `thumb`'s own frame
    fn neighbor_of(&self, thumb: Thumb) -> Option<Neighbor> {
        let trailing = self.trailing.as_ref()?;
        let other_offset = match thumb {
            Thumb::Leading => trailing.handle.offset(),
            Thumb::Trailing => self.leading.handle.offset(),
        };
        Some(Neighbor::new(
            self.track.track_length - other_offset,
            self.config.minimum_gap,
        ))
    }

    fn value_of(&self, thumb: Thumb, index: usize) -> f32 {
        let raw = self.range.value_at(index);
        match thumb {
            Thumb::Leading => raw,
            Thumb::Trailing => self.range.mirror(raw),
        }
    }

    fn to_track_position(&self, thumb: Thumb, offset: f32) -> f32 {
        match thumb {
            Thumb::Leading => offset,
            Thumb::Trailing => self.track.track_length - offset,
        }
    }

    fn slot(&self, thumb: Thumb) -> Option<&HandleSlot> {
        match thumb {
            Thumb::Leading => Some(&self.leading),
            Thumb::Trailing => self.trailing.as_ref(),
        }
    }

    fn slot_mut(&mut self, thumb: Thumb) -> Option<&mut HandleSlot> {
        slot_mut(&mut self.leading, &mut self.trailing, thumb)
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("track", &self.track)
            .field("leading", &self.leading)
            .field("trailing", &self.trailing)
            .field("has_on_change", &self.on_change.is_some())
            .field("has_live", &self.live.is_some())
            .finish()
    }
}

/// Borrow one handle slot without borrowing the whole slider
fn slot_mut<'a>(
    leading: &'a mut HandleSlot,
    trailing: &'a mut Option<HandleSlot>,
    thumb: Thumb,
) -> Option<&'a mut HandleSlot> {
    match thumb {
        Thumb::Leading => Some(leading),
        Thumb::Trailing => trailing.as_mut(),
    }
}

fn build_points(config: &SliderConfig, track: &TrackGeometry, step_count: usize) -> PointSet {
    if config.inset_points {
        generate_inset_points(track.track_length, step_count, track.knob_width / 2.0)
    } else {
        generate_points(track.track_length, step_count)
    }
}
