//! # cross-ui
//!
//! Backend agnostic slider core.
//!
//! This crate turns continuous drag positions into one of a fixed number of
//! evenly spaced values. It has no knowledge of rendering or of any specific
//! windowing library; hosts feed it layout widths and drag events and read
//! back offsets and snap indices. Interactive components live in
//! `cross-ui-interactive`.
//!
//! ## Value mapping
//!
//! - [`ValueRange`] - `[minimum, maximum]` split into `step_count` intervals
//! - [`PointSet`] - the matching snap points along a measured track
//! - [`nearest_point_index`] / [`snap_to_nearest`] - offset to snap point
//! - [`clamp_offset`] - accept or reject a proposed handle offset
//!
//! ## Dragging
//!
//! - [`Handle`] - per-handle Idle/Dragging state machine
//! - [`DragEvent`] - start/move/end/cancel gesture steps
//! - [`PointerState`] + [`GestureRecognizer`] - raw pointer to drag events

mod error;
mod events;
mod handle;
mod input;
mod points;
mod primitives;
mod range;
mod travel;

pub use error::*;
pub use events::*;
pub use handle::*;
pub use input::*;
pub use points::*;
pub use primitives::*;
pub use range::*;
pub use travel::{clamp_offset, index_within, nearest_index_within, Neighbor};
