//! Backend-agnostic pointer state tracking
//!
//! Windowing or touch backends convert their native events into updates on
//! [`PointerState`]; the [`GestureRecognizer`](crate::GestureRecognizer)
//! turns that state into drag events once per frame.

use crate::Point;

/// Tracks the primary pointer (mouse button or touch) across frames
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Current pointer position in track-local coordinates, if known
    pub position: Option<Point>,

    /// Whether the pointer is currently held down
    pub pressed: bool,

    /// Whether the pointer went down this frame
    pub just_pressed: bool,

    /// Whether the pointer was released this frame
    pub just_released: bool,
}

impl PointerState {
    /// Create a new pointer state with no active input
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to clear frame-specific state
    pub fn begin_frame(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }

    /// Record the pointer going down
    pub fn press(&mut self) {
        self.pressed = true;
        self.just_pressed = true;
    }

    /// Record the pointer going up
    pub fn release(&mut self) {
        self.pressed = false;
        self.just_released = true;
    }

    /// Update pointer position; `None` means the pointer left the surface
    pub fn set_position(&mut self, position: Option<Point>) {
        self.position = position;
    }
}
