//! The value domain a slider selects from
//!
//! A [`ValueRange`] splits `[minimum, maximum]` into `step_count` equal
//! intervals. Snap point `i` on the track maps to value `i` of the range.

use crate::error::{ensure_finite, ConfigError};

/// Immutable description of a discretized value domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    minimum: f32,
    maximum: f32,
    step_count: usize,
}

impl ValueRange {
    /// Create a new range, rejecting degenerate configurations
    ///
    /// # Errors
    /// - [`ConfigError::NonFinite`] if either bound is NaN or infinite
    /// - [`ConfigError::EmptyRange`] if `maximum <= minimum`
    /// - [`ConfigError::NoSteps`] if `step_count == 0`
    pub fn new(minimum: f32, maximum: f32, step_count: usize) -> Result<Self, ConfigError> {
        let minimum = ensure_finite("minimum", minimum)?;
        let maximum = ensure_finite("maximum", maximum)?;
        if maximum <= minimum {
            return Err(ConfigError::EmptyRange { minimum, maximum });
        }
        if step_count == 0 {
            return Err(ConfigError::NoSteps);
        }
        Ok(Self {
            minimum,
            maximum,
            step_count,
        })
    }

    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Number of intervals; there are `step_count + 1` selectable values
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Distance between two neighbouring values
    pub fn step_size(&self) -> f32 {
        (self.maximum - self.minimum) / self.step_count as f32
    }

    /// Value at snap index `index`, clamped to the last index
    ///
    /// Both ends are exact: index 0 is `minimum`, index `step_count` is `maximum`.
    pub fn value_at(&self, index: usize) -> f32 {
        if index == 0 {
            self.minimum
        } else if index >= self.step_count {
            self.maximum
        } else {
            self.minimum + index as f32 * self.step_size()
        }
    }

    /// Index of the value closest to `value`
    ///
    /// Values outside the range resolve to the nearest end. Halfway values
    /// round toward the lower index.
    pub fn index_of(&self, value: f32) -> usize {
        if !value.is_finite() || value <= self.minimum {
            return 0;
        }
        if value >= self.maximum {
            return self.step_count;
        }
        let exact = (value - self.minimum) / self.step_size();
        let lower = exact.floor();
        let index = if exact - lower > 0.5 { lower + 1.0 } else { lower };
        (index as usize).min(self.step_count)
    }

    /// Mirror a value across the range: `maximum - (value - minimum)`
    ///
    /// The trailing handle of a bounded slider counts its steps from the
    /// far end, so its raw value goes through this before being reported.
    pub fn mirror(&self, value: f32) -> f32 {
        self.maximum - (value - self.minimum)
    }

    /// Index counted from the opposite end
    pub fn mirror_index(&self, index: usize) -> usize {
        self.step_count - index.min(self.step_count)
    }

    /// All selectable values in increasing order
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        (0..=self.step_count).map(move |i| self.value_at(i))
    }
}
