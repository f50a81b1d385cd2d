//! Engine configuration: zoom limits, animation timing, drag behaviour, padding.
//!
//! Every field is optional when loaded from JSON; missing fields take the
//! defaults below. Listener callbacks are not part of the options because they
//! cannot be serialized; see [`crate::notify::Listeners`].

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;

pub const DEFAULT_TAP_ZOOM_FACTOR: f64 = 2.0;
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 1.2;
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 300.0;
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;

/// Errors produced while building or loading [`ZoomOptions`].
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// A numeric field is NaN or infinite.
    #[error("option {field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// A numeric field is below its allowed minimum.
    #[error("option {field} must be at least {min}, got {value}")]
    TooSmall { field: &'static str, min: f64, value: f64 },

    /// `minZoom` is greater than `maxZoom`.
    #[error("minZoom ({min}) exceeds maxZoom ({max})")]
    ZoomRange { min: f64, max: f64 },

    /// The JSON document could not be parsed.
    #[error("options parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomOptions {
    /// Zoom factor a double tap zooms in to.
    pub tap_zoom_factor: f64,
    /// Gestures ending below this zoom factor snap back to native scale.
    pub zoom_out_factor: f64,
    /// Duration of every corrective or double-tap animation.
    pub animation_duration_ms: f64,
    /// Progress curve of those animations.
    pub easing: Easing,
    pub max_zoom: f64,
    pub min_zoom: f64,
    /// Allow a single finger to pan while at native scale.
    pub draggable_unzoomed: bool,
    /// Restrict each drag step to its dominant axis.
    pub lock_drag_axis: bool,
    /// Compute the initial offset only on the first layout.
    pub set_offsets_once: bool,
    /// Paint with 2D transforms when idle (3D while interacting or animating).
    #[serde(rename = "use2d")]
    pub use_2d: bool,
    /// Start centred on the overflow instead of at the origin.
    pub center_initial_offset: bool,
    pub vertical_padding: f64,
    pub horizontal_padding: f64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            tap_zoom_factor: DEFAULT_TAP_ZOOM_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::Swing,
            max_zoom: DEFAULT_MAX_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            draggable_unzoomed: true,
            lock_drag_axis: false,
            set_offsets_once: false,
            use_2d: true,
            center_initial_offset: false,
            vertical_padding: 0.0,
            horizontal_padding: 0.0,
        }
    }
}

impl ZoomOptions {
    /// Parse options from a JSON object and validate them.
    ///
    /// Missing fields take their defaults, so `{}` is a valid document.
    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (field, value) in [
            ("tapZoomFactor", self.tap_zoom_factor),
            ("zoomOutFactor", self.zoom_out_factor),
            ("animationDurationMs", self.animation_duration_ms),
            ("maxZoom", self.max_zoom),
            ("minZoom", self.min_zoom),
            ("verticalPadding", self.vertical_padding),
            ("horizontalPadding", self.horizontal_padding),
        ] {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { field, value });
            }
        }

        if self.min_zoom <= 0.0 {
            return Err(OptionsError::TooSmall { field: "minZoom", min: f64::MIN_POSITIVE, value: self.min_zoom });
        }
        if self.tap_zoom_factor <= 0.0 {
            return Err(OptionsError::TooSmall {
                field: "tapZoomFactor",
                min: f64::MIN_POSITIVE,
                value: self.tap_zoom_factor,
            });
        }
        if self.min_zoom > self.max_zoom {
            return Err(OptionsError::ZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        for (field, value) in [
            ("animationDurationMs", self.animation_duration_ms),
            ("verticalPadding", self.vertical_padding),
            ("horizontalPadding", self.horizontal_padding),
        ] {
            if value < 0.0 {
                return Err(OptionsError::TooSmall { field, min: 0.0, value });
            }
        }
        Ok(())
    }
}
