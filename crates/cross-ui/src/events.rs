//! Drag gesture events
//!
//! [`DragEvent`] is the input vocabulary of a slider: a gesture starts,
//! moves by a cumulative translation, and ends or is cancelled. Hosts with a
//! native pan recognizer can build these events directly; hosts that only
//! report raw pointer state can use [`GestureRecognizer`].

use crate::{Point, PointerState};

/// Minimum per-frame movement reported as a move event
const MOVE_EPSILON: f32 = 0.001;

/// One step of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Gesture started (pointer pressed and activated)
    Start {
        /// Position where the pointer went down
        position: Point,
    },
    /// Pointer moved while dragging
    Move {
        /// Current pointer position
        position: Point,
        /// Cumulative travel since the gesture started
        translation: Point,
        /// Travel since the previous event
        delta: Point,
    },
    /// Pointer released
    End {
        /// Position where the pointer was released
        position: Point,
        /// Cumulative travel since the gesture started
        translation: Point,
    },
    /// Gesture interrupted (pointer lost, host cancelled)
    ///
    /// Sliders treat this exactly like [`DragEvent::End`].
    Cancel,
}

impl DragEvent {
    /// Horizontal cumulative travel, if the event carries one
    pub fn translation_x(&self) -> Option<f32> {
        match self {
            DragEvent::Move { translation, .. } | DragEvent::End { translation, .. } => {
                Some(translation.x)
            }
            DragEvent::Start { .. } => Some(0.0),
            DragEvent::Cancel => None,
        }
    }

    /// Whether this event finishes the gesture
    pub fn is_terminal(&self) -> bool {
        matches!(self, DragEvent::End { .. } | DragEvent::Cancel)
    }
}

/// Recognizer phase
#[derive(Debug, Clone, Copy, PartialEq)]
enum GesturePhase {
    /// No pointer down
    Released,
    /// Pointer down, not yet past the activation distance
    Pending { origin: Point },
    /// Drag in progress
    Dragging { origin: Point, last_pos: Point },
}

/// Turns per-frame pointer state into drag events
///
/// This maintains state across frames to detect when a press becomes a
/// drag, and reports movement relative to the press origin.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    phase: GesturePhase,
    activation_distance: f32,
}

impl GestureRecognizer {
    /// Create a recognizer that starts dragging as soon as the pointer goes down
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Released,
            activation_distance: 0.0,
        }
    }

    /// Require the pointer to travel `distance` pixels before a drag starts
    pub fn with_activation_distance(mut self, distance: f32) -> Self {
        self.activation_distance = distance.max(0.0);
        self
    }

    /// Whether a drag is currently in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Produce the drag events for this frame
    ///
    /// Call once per frame after feeding the backend's input into `pointer`.
    pub fn recognize(&mut self, pointer: &PointerState) -> Vec<DragEvent> {
        let mut events = Vec::new();

        match self.phase {
            GesturePhase::Dragging { origin, last_pos } => {
                let Some(position) = pointer.position else {
                    log::debug!("pointer lost mid-drag, cancelling");
                    self.phase = GesturePhase::Released;
                    events.push(DragEvent::Cancel);
                    return events;
                };

                if pointer.just_released || !pointer.pressed {
                    self.phase = GesturePhase::Released;
                    events.push(DragEvent::End {
                        position,
                        translation: position.delta_from(origin),
                    });
                    return events;
                }

                let delta = position.delta_from(last_pos);
                if delta.x.abs() > MOVE_EPSILON || delta.y.abs() > MOVE_EPSILON {
                    events.push(DragEvent::Move {
                        position,
                        translation: position.delta_from(origin),
                        delta,
                    });
                    self.phase = GesturePhase::Dragging {
                        origin,
                        last_pos: position,
                    };
                }
            }
            GesturePhase::Pending { origin } => {
                let position = match pointer.position {
                    Some(position) if pointer.pressed && !pointer.just_released => position,
                    _ => {
                        self.phase = GesturePhase::Released;
                        return events;
                    }
                };
                self.activate_if_far_enough(origin, position, &mut events);
            }
            GesturePhase::Released => {
                if !(pointer.just_pressed && pointer.pressed) {
                    return events;
                }
                let Some(origin) = pointer.position else {
                    return events;
                };
                self.phase = GesturePhase::Pending { origin };
                self.activate_if_far_enough(origin, origin, &mut events);
            }
        }

        events
    }

    fn activate_if_far_enough(&mut self, origin: Point, position: Point, events: &mut Vec<DragEvent>) {
        if position.distance(origin) < self.activation_distance {
            return;
        }

        self.phase = GesturePhase::Dragging {
            origin,
            last_pos: position,
        };
        events.push(DragEvent::Start { position: origin });

        let translation = position.delta_from(origin);
        if translation.x.abs() > MOVE_EPSILON || translation.y.abs() > MOVE_EPSILON {
            events.push(DragEvent::Move {
                position,
                translation,
                delta: translation,
            });
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pointer: &mut PointerState, update: impl FnOnce(&mut PointerState)) {
        pointer.begin_frame();
        update(pointer);
    }

    #[test]
    fn test_press_move_release() {
        let mut recognizer = GestureRecognizer::new();
        let mut pointer = PointerState::new();

        frame(&mut pointer, |p| {
            p.set_position(Some(Point::new(10.0, 5.0)));
            p.press();
        });
        assert_eq!(
            recognizer.recognize(&pointer),
            vec![DragEvent::Start {
                position: Point::new(10.0, 5.0)
            }]
        );
        assert!(recognizer.is_dragging());

        frame(&mut pointer, |p| p.set_position(Some(Point::new(25.0, 6.0))));
        assert_eq!(
            recognizer.recognize(&pointer),
            vec![DragEvent::Move {
                position: Point::new(25.0, 6.0),
                translation: Point::new(15.0, 1.0),
                delta: Point::new(15.0, 1.0),
            }]
        );

        frame(&mut pointer, |p| p.set_position(Some(Point::new(30.0, 6.0))));
        let events = recognizer.recognize(&pointer);
        assert_eq!(events[0].translation_x(), Some(20.0));

        frame(&mut pointer, |p| p.release());
        assert_eq!(
            recognizer.recognize(&pointer),
            vec![DragEvent::End {
                position: Point::new(30.0, 6.0),
                translation: Point::new(20.0, 1.0),
            }]
        );
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn test_stationary_frames_emit_nothing() {
        let mut recognizer = GestureRecognizer::new();
        let mut pointer = PointerState::new();

        frame(&mut pointer, |p| {
            p.set_position(Some(Point::zero()));
            p.press();
        });
        recognizer.recognize(&pointer);

        frame(&mut pointer, |_| {});
        assert!(recognizer.recognize(&pointer).is_empty());
    }

    #[test]
    fn test_pointer_lost_cancels() {
        let mut recognizer = GestureRecognizer::new();
        let mut pointer = PointerState::new();

        frame(&mut pointer, |p| {
            p.set_position(Some(Point::zero()));
            p.press();
        });
        recognizer.recognize(&pointer);

        frame(&mut pointer, |p| p.set_position(None));
        let events = recognizer.recognize(&pointer);
        assert_eq!(events, vec![DragEvent::Cancel]);
        assert!(events[0].is_terminal());
        assert!(!recognizer.is_dragging());
    }

    #[test]
    fn test_activation_distance() {
        let mut recognizer = GestureRecognizer::new().with_activation_distance(8.0);
        let mut pointer = PointerState::new();

        frame(&mut pointer, |p| {
            p.set_position(Some(Point::zero()));
            p.press();
        });
        assert!(recognizer.recognize(&pointer).is_empty());

        frame(&mut pointer, |p| p.set_position(Some(Point::new(5.0, 0.0))));
        assert!(recognizer.recognize(&pointer).is_empty());
        assert!(!recognizer.is_dragging());

        frame(&mut pointer, |p| p.set_position(Some(Point::new(12.0, 0.0))));
        let events = recognizer.recognize(&pointer);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            DragEvent::Start {
                position: Point::zero()
            }
        );
        assert_eq!(events[1].translation_x(), Some(12.0));
    }

    #[test]
    fn test_tap_below_activation_is_ignored() {
        let mut recognizer = GestureRecognizer::new().with_activation_distance(8.0);
        let mut pointer = PointerState::new();

        frame(&mut pointer, |p| {
            p.set_position(Some(Point::zero()));
            p.press();
        });
        recognizer.recognize(&pointer);

        frame(&mut pointer, |p| p.release());
        assert!(recognizer.recognize(&pointer).is_empty());
        assert!(!recognizer.is_dragging());
    }
}
