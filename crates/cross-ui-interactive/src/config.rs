//! Slider configuration

use cross_ui::{ConfigError, Neighbor, TrackGeometry, ValueRange};
use cross_ui_macros::WithBuilders;

/// Overrun tolerated past either track edge by default, in pixels
pub const DEFAULT_KNOB_WIDTH: f32 = 32.0;

/// Configuration for a [`Slider`](crate::Slider)
///
/// # Example
///
/// ```
/// use cross_ui_interactive::SliderConfig;
///
/// let config = SliderConfig::default()
///     .with_id("price")
///     .with_maximum(500.0)
///     .with_step_count(50)
///     .with_bounded(true)
///     .with_minimum_gap(12.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct SliderConfig {
    /// Identifier used in log output
    #[with_builders(into)]
    pub id: String,
    /// Lowest selectable value
    pub minimum: f32,
    /// Highest selectable value
    pub maximum: f32,
    /// Number of equal intervals between `minimum` and `maximum`
    pub step_count: usize,
    /// Two handles selecting a `[leading, trailing]` span
    pub bounded: bool,
    /// Physical knob width; handles may overrun either edge by this much
    pub knob_width: f32,
    /// Pixels kept free between the two handles in bounded mode
    pub minimum_gap: f32,
    /// Keep snap points half a knob away from both edges
    pub inset_points: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            id: "slider".to_string(),
            minimum: 0.0,
            maximum: 100.0,
            step_count: 10,
            bounded: false,
            knob_width: DEFAULT_KNOB_WIDTH,
            minimum_gap: 0.0,
            inset_points: false,
        }
    }
}

impl SliderConfig {
    /// Check the configuration and build its value range
    ///
    /// # Errors
    /// Any [`ConfigError`] from the range, or a negative / non-finite
    /// `knob_width` or `minimum_gap`.
    pub fn validate(&self) -> Result<ValueRange, ConfigError> {
        let range = ValueRange::new(self.minimum, self.maximum, self.step_count)?;
        TrackGeometry::new(0.0, self.knob_width)?;
        Neighbor::validate_gap(self.minimum_gap)?;
        Ok(range)
    }
}
