//! Drive a slider from raw pointer state
//!
//! Hosts without their own pan recognizer feed [`PointerState`] once per
//! frame; the driver recognizes drags, decides which handle a press grabs
//! and forwards the events to the slider.

use cross_ui::{DragEvent, GestureRecognizer, PointerState};

use crate::{Slider, SliderUpdate, Thumb};

/// Routes pointer input to the handles of one slider
#[derive(Debug, Clone, Default)]
pub struct SliderDriver {
    recognizer: GestureRecognizer,
    active: Option<Thumb>,
}

impl SliderDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom gesture recognizer (e.g. with an activation distance)
    pub fn with_recognizer(mut self, recognizer: GestureRecognizer) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Handle currently being dragged, if any
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.active
    }

    /// Process one frame of pointer input
    ///
    /// `pointer` positions are track-local. Returns every update the slider
    /// produced this frame, in order.
    pub fn update(&mut self, slider: &mut Slider, pointer: &PointerState) -> Vec<SliderUpdate> {
        let mut updates = Vec::new();

        for event in self.recognizer.recognize(pointer) {
            if let DragEvent::Start { position } = event {
                self.active = Some(slider.thumb_at(position.x));
            }

            let Some(thumb) = self.active else {
                continue;
            };

            updates.extend(slider.handle_event(thumb, &event));

            if event.is_terminal() {
                self.active = None;
            }
        }

        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Selection, SliderConfig, UpdatePhase};
    use cross_ui::Point;

    fn frame(pointer: &mut PointerState, update: impl FnOnce(&mut PointerState)) {
        pointer.begin_frame();
        update(pointer);
    }

    #[test]
    fn test_drag_single_slider() {
        let mut slider = Slider::new(SliderConfig::default()).unwrap();
        slider.set_track_length(200.0).unwrap();
        let mut driver = SliderDriver::new();
        let mut pointer = PointerState::new();

        frame(&mut pointer, |p| {
            p.set_position(Some(Point::new(0.0, 10.0)));
            p.press();
        });
        assert!(driver.update(&mut slider, &pointer).is_empty());
        assert_eq!(driver.active_thumb(), Some(Thumb::Leading));

        frame(&mut pointer, |p| p.set_position(Some(Point::new(95.0, 12.0))));
        let updates = driver.update(&mut slider, &pointer);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].phase, UpdatePhase::Live);

        frame(&mut pointer, |p| p.release());
        let updates = driver.update(&mut slider, &pointer);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].phase, UpdatePhase::Final);
        assert_eq!(updates[0].selection, Selection::Single(50.0));
        assert_eq!(driver.active_thumb(), None);
    }

    #[test]
    fn test_press_grabs_nearest_thumb() {
        let config = SliderConfig::default().with_bounded(true);
        let mut slider = Slider::new(config)
            .unwrap()
            .with_range_values(20.0, 80.0);
        slider.set_track_length(200.0).unwrap();
        let mut driver = SliderDriver::new();
        let mut pointer = PointerState::new();

        // Trailing handle sits at 160
        frame(&mut pointer, |p| {
            p.set_position(Some(Point::new(150.0, 0.0)));
            p.press();
        });
        driver.update(&mut slider, &pointer);
        assert_eq!(driver.active_thumb(), Some(Thumb::Trailing));

        frame(&mut pointer, |p| p.set_position(Some(Point::new(110.0, 0.0))));
        driver.update(&mut slider, &pointer);

        frame(&mut pointer, |p| p.set_position(None));
        let updates = driver.update(&mut slider, &pointer);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].thumb, Thumb::Trailing);
        assert_eq!(updates[0].offset, 120.0);
        assert_eq!(
            updates[0].selection,
            Selection::Range {
                leading: 20.0,
                trailing: 60.0
            }
        );
    }
}
