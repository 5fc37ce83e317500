//! # cross-ui-interactive
//!
//! Interactive slider component for cross-ui.
//!
//! [`Slider`] maps drag gestures onto a discretized value range, in single
//! or bounded (two-handle) mode. It reports values through a change callback
//! and, optionally, a [`live_channel`] that an animation thread can post to
//! without blocking. [`SliderDriver`] feeds it from raw pointer state.

mod config;
mod driver;
mod live;
mod selection;
mod slider;

pub use config::*;
pub use driver::*;
pub use live::*;
pub use selection::*;
pub use slider::*;
