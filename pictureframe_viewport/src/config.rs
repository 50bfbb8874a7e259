// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::PointerButton;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Default multiplier applied by one zoom-in or zoom-out step.
pub const DEFAULT_ZOOM_STEP: f64 = 1.25;

/// User-facing knobs of a [`ViewportController`](crate::ViewportController).
///
/// Every field also has a plain setter on the controller with immediate
/// effect; this struct exists so hosts can build, store, and hand over a
/// complete configuration at once. Nothing here is persisted by this crate.
///
/// ```
/// use pictureframe_viewport::{PixelSize, PointerButton, ViewportConfig, ViewportController};
///
/// let config = ViewportConfig::new()
///     .with_max_zoom(8.0)
///     .with_smoothing(true)
///     .with_pan_button(PointerButton::Auxiliary);
/// let view = ViewportController::with_config(PixelSize::new(640, 480), config);
/// assert_eq!(view.max_scale(), 8.0);
/// assert!(view.is_smoothing());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewportConfig {
    /// Upper zoom bound. Values below `1.0` (and NaN) are raised to `1.0`.
    pub max_zoom: f64,
    /// Multiplier for [`zoom_in`](crate::ViewportController::zoom_in) and
    /// [`zoom_out`](crate::ViewportController::zoom_out). Values that are not
    /// finite and greater than `1.0` fall back to [`DEFAULT_ZOOM_STEP`].
    pub zoom_step: f64,
    /// Request interpolated rendering while the image is scaled below 1:1.
    pub smoothing: bool,
    /// Honor pointer and wheel events.
    pub interactive: bool,
    /// Button that starts a pan drag.
    pub pan_button: PointerButton,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            smoothing: false,
            interactive: true,
            pan_button: PointerButton::Primary,
        }
    }
}

impl ViewportConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upper zoom bound.
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the zoom step multiplier.
    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Enables or disables the smoothing hint.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Enables or disables pointer and wheel handling.
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Sets the button that starts a pan drag.
    #[must_use]
    pub fn with_pan_button(mut self, button: PointerButton) -> Self {
        self.pan_button = button;
        self
    }
}

/// Applies the `>= 1.0` floor to a requested maximum zoom.
pub(crate) fn floor_max_zoom(max_zoom: f64) -> f64 {
    if max_zoom > 1.0 { max_zoom } else { 1.0 }
}

/// Replaces unusable zoom steps with the default.
pub(crate) fn sanitize_zoom_step(step: f64) -> f64 {
    if step.is_finite() && step > 1.0 {
        step
    } else {
        DEFAULT_ZOOM_STEP
    }
}
