//! Values reported by a slider

/// Which handle of a slider an event or value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// The only handle of a single slider, or the lower handle of a bounded one
    Leading,
    /// The upper handle of a bounded slider
    Trailing,
}

/// The value(s) a slider currently selects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Single-handle slider
    Single(f32),
    /// Bounded slider
    Range { leading: f32, trailing: f32 },
}

impl Selection {
    /// Lower end of the selection
    pub fn start(&self) -> f32 {
        match *self {
            Selection::Single(value) => value,
            Selection::Range { leading, .. } => leading,
        }
    }

    /// Upper end of the selection (same as `start` for a single value)
    pub fn end(&self) -> f32 {
        match *self {
            Selection::Single(value) => value,
            Selection::Range { trailing, .. } => trailing,
        }
    }
}

/// Whether an update comes from an ongoing drag or a settled handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    /// The dragged handle is now closest to a different point
    Live,
    /// The handle snapped to its final point
    Final,
}

/// Payload of the slider's change callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderUpdate {
    /// Handle that caused the update
    pub thumb: Thumb,
    /// Current selection
    pub selection: Selection,
    /// Position of `thumb` from the start of the track, for rendering
    pub offset: f32,
    /// Snap index of `thumb`, counted from its own end of the track
    pub index: usize,
    pub phase: UpdatePhase,
}
