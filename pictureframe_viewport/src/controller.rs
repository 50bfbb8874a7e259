// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use tracing::{debug, trace};

use crate::config::{ViewportConfig, floor_max_zoom, sanitize_zoom_step};
use crate::drag::DragState;
use crate::error::ImageSizeError;
use crate::event::{CursorIcon, PointerButton, Response};
use crate::geometry::{Anchor, ImageSize, ImageSource, Offset, PixelSize};

/// Pan/zoom state of one image shown on one resizable surface.
///
/// The controller keeps the scaled image either centered (when it fits the
/// surface on an axis) or clamped so that no empty space shows past its
/// edges (when it overflows). While [fitted](Self::is_fitted), the whole
/// image is visible, panning is disabled, and every resize re-fits it.
///
/// All operations are total: without an image they do nothing, and
/// out-of-range scales are clamped rather than rejected. Side effects for the
/// host (repaint, cursor changes) accumulate in a pending [`Response`] that
/// is drained by [`take_response`](Self::take_response) or returned from
/// [`handle`](Self::handle).
#[derive(Clone, Debug)]
pub struct ViewportController {
    image: Option<ImageSize>,
    surface: PixelSize,
    scale: f64,
    scale_min: f64,
    scale_max: f64,
    zoom_step: f64,
    offset: Offset,
    scaled: PixelSize,
    fitted: bool,
    smoothing: bool,
    interactive: bool,
    pan_button: PointerButton,
    cursor: CursorIcon,
    pub(crate) drag: DragState,
    pending: Response,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(PixelSize::ZERO)
    }
}

impl ViewportController {
    /// Creates a controller without an image for a surface of `surface` pixels.
    ///
    /// The initial state is fitted with scale `0` and a maximum zoom of `20`.
    #[must_use]
    pub fn new(surface: PixelSize) -> Self {
        Self::with_config(surface, ViewportConfig::default())
    }

    /// Creates a controller without an image, using `config`.
    #[must_use]
    pub fn with_config(surface: PixelSize, config: ViewportConfig) -> Self {
        Self {
            image: None,
            surface,
            scale: 0.0,
            scale_min: 0.0,
            scale_max: floor_max_zoom(config.max_zoom),
            zoom_step: sanitize_zoom_step(config.zoom_step),
            offset: Offset::ZERO,
            scaled: PixelSize::ZERO,
            fitted: true,
            smoothing: config.smoothing,
            interactive: config.interactive,
            pan_button: config.pan_button,
            cursor: CursorIcon::Default,
            drag: DragState::default(),
            pending: Response::NONE,
        }
    }

    /// Creates a controller already showing `image`, fitted to the surface.
    #[must_use]
    pub fn with_image(surface: PixelSize, image: ImageSize) -> Self {
        let mut view = Self::new(surface);
        view.set_image(Some(image), true);
        view
    }

    /// Sets the zoom to `requested`, keeping the content under `anchor` in place.
    ///
    /// The scale is clamped into `[min_scale, max_scale]` (NaN lands on the
    /// maximum). The offset is shifted so the image point under the anchor
    /// stays under it, then each axis is centered if the scaled image fits
    /// the surface, or clamped into `[surface - scaled, 0]` otherwise.
    /// Requesting the current scale only re-runs the center/clamp step.
    ///
    /// Does nothing without an image.
    pub fn apply_zoom(&mut self, requested: f64, anchor: Anchor) {
        let Some(image) = self.image else {
            return;
        };
        let anchor = anchor.resolve(self.surface);
        let previous = self.scale;

        self.scale = clamp_scale(requested, self.scale_min, self.scale_max);
        self.scaled = image.scaled(self.scale);
        self.fitted = self.scale == self.scale_min;
        self.set_cursor(if self.fitted {
            CursorIcon::Default
        } else {
            CursorIcon::Move
        });

        // A zero previous scale has no meaningful anchor; treat it as no motion.
        let factor = if previous == 0.0 {
            0.0
        } else {
            1.0 - self.scale / previous
        };
        let bias = if self.scale > previous { 0.5 } else { -0.5 };

        let x = self
            .offset
            .x
            .saturating_sub(anchored_shift(self.offset.x, anchor.x, factor, bias));
        let y = self
            .offset
            .y
            .saturating_sub(anchored_shift(self.offset.y, anchor.y, factor, bias));
        self.offset = Offset::new(
            center_or_clamp(x, self.surface.width, self.scaled.width),
            center_or_clamp(y, self.surface.height, self.scaled.height),
        );

        trace!(
            scale = self.scale,
            previous,
            x = self.offset.x,
            y = self.offset.y,
            fitted = self.fitted,
            "zoom applied"
        );
        self.request_repaint();
    }

    /// Recomputes the minimum scale and re-applies the current mode.
    ///
    /// The minimum is the largest scale at which the whole image fits the
    /// surface, capped at `1` so small images are never magnified by a fit.
    /// A fitted view is re-fitted at the center; otherwise the current scale
    /// is re-applied at `anchor` to re-clamp the offset.
    ///
    /// Runs automatically on resize and image replacement.
    pub fn refresh(&mut self, anchor: Anchor) {
        let Some(image) = self.image else {
            return;
        };
        self.scale_min = fit_scale(image, self.surface);
        debug!(
            scale_min = self.scale_min,
            fitted = self.fitted,
            "minimum scale recomputed"
        );
        if self.fitted {
            self.fit();
        } else {
            self.apply_zoom(self.scale, anchor);
        }
    }

    /// Moves the image by `(dx, dy)` surface pixels.
    ///
    /// Only axes where the scaled image overflows the surface move, and they
    /// stay clamped into `[surface - scaled, 0]`. Does nothing while fitted
    /// or without an image.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        if self.image.is_none() || self.fitted {
            return;
        }
        self.place(
            self.offset.x.saturating_add(dx),
            self.offset.y.saturating_add(dy),
        );
        trace!(dx, dy, x = self.offset.x, y = self.offset.y, "panned");
    }

    /// Places the image's top-left corner at `(x, y)`.
    ///
    /// Uses the same overflow-only clamp as [`pan`](Self::pan) but ignores the
    /// fitted guard. An axis on which the image fits the surface is left
    /// untouched, so it stays centered.
    pub fn set_location(&mut self, x: i32, y: i32) {
        if self.image.is_none() {
            return;
        }
        self.place(x, y);
        trace!(x = self.offset.x, y = self.offset.y, "location set");
    }

    fn place(&mut self, x: i32, y: i32) {
        if let Some(x) = clamp_overflow(x, self.surface.width, self.scaled.width) {
            self.offset.x = x;
        }
        if let Some(y) = clamp_overflow(y, self.surface.height, self.scaled.height) {
            self.offset.y = y;
        }
        self.request_repaint();
    }

    /// Zooms to the minimum scale at the surface center.
    pub fn fit(&mut self) {
        self.apply_zoom(self.scale_min, Anchor::Center);
    }

    /// Zooms to one image pixel per surface pixel at the surface center.
    pub fn original(&mut self) {
        self.apply_zoom(1.0, Anchor::Center);
    }

    /// Multiplies the scale by the zoom step around `anchor`.
    pub fn zoom_in(&mut self, anchor: Anchor) {
        self.apply_zoom(self.scale * self.zoom_step, anchor);
    }

    /// Divides the scale by the zoom step around `anchor`.
    pub fn zoom_out(&mut self, anchor: Anchor) {
        self.apply_zoom(self.scale / self.zoom_step, anchor);
    }

    /// Replaces the image.
    ///
    /// `None` clears the image and requests a repaint; the zoom bookkeeping is
    /// kept so the next image loaded without `fit_on_load` reuses it.
    ///
    /// With `fit_on_load`, the view becomes fitted. Loading without it never
    /// un-fits an already fitted view. Either way the minimum scale is
    /// recomputed for the new image.
    pub fn set_image(&mut self, image: Option<ImageSize>, fit_on_load: bool) {
        self.image = image;
        let Some(image) = image else {
            self.offset = Offset::ZERO;
            self.scaled = PixelSize::ZERO;
            self.drag.end();
            debug!("image cleared");
            self.request_repaint();
            return;
        };

        self.fitted |= fit_on_load;
        if self.fitted {
            self.scale = 0.0;
        }
        debug!(
            width = image.width(),
            height = image.height(),
            fitted = self.fitted,
            "image replaced"
        );
        self.refresh(Anchor::Center);
    }

    /// Validates the dimensions of `source` and shows it.
    ///
    /// # Errors
    ///
    /// Returns [`ImageSizeError`] if `source` has a zero dimension; the
    /// current state is left unchanged in that case.
    pub fn load_image<S: ImageSource + ?Sized>(
        &mut self,
        source: &S,
        fit_on_load: bool,
    ) -> Result<ImageSize, ImageSizeError> {
        let size = source.image_size()?;
        self.set_image(Some(size), fit_on_load);
        Ok(size)
    }

    /// Removes the image. Equivalent to `set_image(None, false)`.
    pub fn clear_image(&mut self) {
        self.set_image(None, false);
    }

    /// Records a new surface size and refreshes the view around its center.
    pub fn set_surface_size(&mut self, surface: PixelSize) {
        debug!(
            width = surface.width,
            height = surface.height,
            "surface resized"
        );
        self.surface = surface;
        self.refresh(Anchor::Center);
    }

    /// Sets the maximum zoom. Values below `1.0` (and NaN) become `1.0`.
    ///
    /// If the current scale exceeds the new maximum it is pulled down to it
    /// around the surface center.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        self.scale_max = floor_max_zoom(max_zoom);
        if self.image.is_some() && self.scale > self.scale_max {
            self.apply_zoom(self.scale_max, Anchor::Center);
        }
    }

    /// Sets the zoom step multiplier. Values that are not finite and greater
    /// than `1.0` fall back to the default of `1.25`.
    pub fn set_zoom_step(&mut self, step: f64) {
        self.zoom_step = sanitize_zoom_step(step);
    }

    /// Enables or disables pointer and wheel handling. Disabling ends any drag.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.drag.end();
        }
    }

    /// Enables or disables the smoothing hint.
    pub fn set_smoothing(&mut self, smoothing: bool) {
        if self.smoothing != smoothing {
            self.smoothing = smoothing;
            self.request_repaint();
        }
    }

    /// Sets the button that starts a pan drag. Changing it ends any drag.
    pub fn set_pan_button(&mut self, button: PointerButton) {
        if self.pan_button != button {
            self.pan_button = button;
            self.drag.end();
        }
    }

    /// Applies every field of `config`.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.set_zoom_step(config.zoom_step);
        self.set_smoothing(config.smoothing);
        self.set_interactive(config.interactive);
        self.set_pan_button(config.pan_button);
        self.set_max_zoom(config.max_zoom);
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        ViewportConfig {
            max_zoom: self.scale_max,
            zoom_step: self.zoom_step,
            smoothing: self.smoothing,
            interactive: self.interactive,
            pan_button: self.pan_button,
        }
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Smallest allowed zoom: the fit scale for the current image and surface.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.scale_min
    }

    /// Largest allowed zoom.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.scale_max
    }

    /// Zoom step multiplier.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Returns `true` while the scale equals the minimum scale.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Returns `true` at one image pixel per surface pixel.
    #[must_use]
    pub fn is_original(&self) -> bool {
        self.scale == 1.0
    }

    /// Returns `true` if pointer and wheel events are honored.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Returns `true` if the smoothing hint is enabled.
    #[must_use]
    pub fn is_smoothing(&self) -> bool {
        self.smoothing
    }

    /// Button that starts a pan drag.
    #[must_use]
    pub fn pan_button(&self) -> PointerButton {
        self.pan_button
    }

    /// Dimensions of the current image.
    #[must_use]
    pub fn image_size(&self) -> Option<ImageSize> {
        self.image
    }

    /// Last known surface size.
    #[must_use]
    pub fn surface_size(&self) -> PixelSize {
        self.surface
    }

    /// Top-left of the scaled image on the surface, if an image is shown.
    #[must_use]
    pub fn offset(&self) -> Option<Offset> {
        self.image.map(|_| self.offset)
    }

    /// Size of the image at the current scale, if an image is shown.
    #[must_use]
    pub fn scaled_size(&self) -> Option<PixelSize> {
        self.image.map(|_| self.scaled)
    }

    /// Cursor the surface should show over the image.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Returns `true` while a pan drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Everything the surface needs to draw the image, if one is shown.
    #[must_use]
    pub fn render_params(&self) -> Option<RenderParams> {
        self.image.map(|_| RenderParams {
            offset: self.offset,
            size: self.scaled,
            smooth: self.smoothing && self.scale < 1.0,
        })
    }

    /// Image-to-surface transform using the unrounded scale.
    #[must_use]
    pub fn image_to_surface(&self) -> Option<Affine> {
        self.image?;
        Some(Affine::translate(self.offset.to_vec2()) * Affine::scale(self.scale))
    }

    /// Maps a surface point to image pixel coordinates.
    ///
    /// Returns `None` without an image or at a zero scale.
    #[must_use]
    pub fn surface_to_image_point(&self, point: Point) -> Option<Point> {
        if self.scale <= 0.0 {
            return None;
        }
        self.image_to_surface().map(|t| t.inverse() * point)
    }

    /// Maps an image pixel coordinate to the surface.
    #[must_use]
    pub fn image_to_surface_point(&self, point: Point) -> Option<Point> {
        self.image_to_surface().map(|t| t * point)
    }

    /// The part of the image, in image pixels, currently visible on the surface.
    ///
    /// Returns `None` without an image or at a zero scale. The rectangle is
    /// empty when the surface is.
    #[must_use]
    pub fn visible_image_rect(&self) -> Option<Rect> {
        let image = self.image?;
        if self.scale <= 0.0 {
            return None;
        }
        let surface = Rect::new(
            0.0,
            0.0,
            f64::from(self.surface.width),
            f64::from(self.surface.height),
        );
        let bounds = Rect::new(
            0.0,
            0.0,
            f64::from(image.width()),
            f64::from(image.height()),
        );
        let to_image = self.image_to_surface()?.inverse();
        Some(to_image.transform_rect_bbox(surface).intersect(bounds))
    }

    /// Takes the side effects accumulated since the last call.
    pub fn take_response(&mut self) -> Response {
        core::mem::take(&mut self.pending)
    }

    pub(crate) fn request_repaint(&mut self) {
        self.pending.repaint = true;
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorIcon) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.pending.cursor = Some(cursor);
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            image: self.image,
            surface: self.surface,
            scale: self.scale,
            min_scale: self.scale_min,
            max_scale: self.scale_max,
            offset: self.offset,
            scaled: self.scaled,
            fitted: self.fitted,
            smoothing: self.smoothing,
            interactive: self.interactive,
            cursor: self.cursor,
        }
    }
}

/// Placement handed to the surface at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderParams {
    /// Top-left of the scaled image on the surface.
    pub offset: Offset,
    /// Size to draw the image at.
    pub size: PixelSize,
    /// Whether to request interpolated (bilinear) sampling. Only set while
    /// smoothing is enabled and the image is scaled below 1:1.
    pub smooth: bool,
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Current image dimensions.
    pub image: Option<ImageSize>,
    /// Current surface dimensions.
    pub surface: PixelSize,
    /// Current zoom factor.
    pub scale: f64,
    /// Minimum (fit) zoom factor.
    pub min_scale: f64,
    /// Maximum zoom factor.
    pub max_scale: f64,
    /// Image offset on the surface.
    pub offset: Offset,
    /// Image size at the current scale.
    pub scaled: PixelSize,
    /// Fitted flag.
    pub fitted: bool,
    /// Smoothing hint.
    pub smoothing: bool,
    /// Whether pointer input is honored.
    pub interactive: bool,
    /// Current cursor affordance.
    pub cursor: CursorIcon,
}

/// Largest scale at which `image` fits inside `surface`, capped at 1.
fn fit_scale(image: ImageSize, surface: PixelSize) -> f64 {
    let sx = f64::from(surface.width) / f64::from(image.width());
    let sy = f64::from(surface.height) / f64::from(image.height());
    sx.min(sy).min(1.0)
}

/// Clamps into `[min, max]`; anything not below `max` (NaN included) becomes `max`.
fn clamp_scale(requested: f64, min: f64, max: f64) -> f64 {
    if requested < max {
        if requested > min { requested } else { min }
    } else {
        max
    }
}

/// How far the offset moves so the content under `anchor` stays there.
///
/// Adds `bias` (±0.5, in the direction of the zoom) and truncates toward
/// zero, so ties round away from zero the way the zoom is moving. Zooming
/// back with the same anchor undoes the shift exactly.
#[allow(
    clippy::cast_possible_truncation,
    reason = "truncation toward zero is the rounding rule; the cast saturates"
)]
fn anchored_shift(offset: i32, anchor: f64, factor: f64, bias: f64) -> i32 {
    ((f64::from(offset) - anchor) * factor + bias) as i32
}

/// `surface - scaled`, saturated into `i32`.
fn slack(surface: u32, scaled: u32) -> i32 {
    let slack = i64::from(surface) - i64::from(scaled);
    i32::try_from(slack).unwrap_or(if slack < 0 { i32::MIN } else { i32::MAX })
}

/// Centers the axis if the image fits, otherwise clamps it into `[slack, 0]`.
fn center_or_clamp(offset: i32, surface: u32, scaled: u32) -> i32 {
    let slack = slack(surface, scaled);
    if slack >= 0 {
        slack / 2
    } else {
        offset.clamp(slack, 0)
    }
}

/// Clamps into `[slack, 0]` only if the image overflows the axis.
fn clamp_overflow(offset: i32, surface: u32, scaled: u32) -> Option<i32> {
    let slack = slack(surface, scaled);
    (slack < 0).then(|| offset.clamp(slack, 0))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{
        ViewportController, anchored_shift, center_or_clamp, clamp_overflow, clamp_scale,
        fit_scale,
    };
    use crate::config::ViewportConfig;
    use crate::event::{CursorIcon, PointerButton, Response};
    use crate::geometry::{Anchor, ImageSize, Offset, PixelSize};

    fn image(width: u32, height: u32) -> ImageSize {
        ImageSize::new(width, height).unwrap()
    }

    /// 800×600 image on a 400×300 surface, fitted.
    fn fitted_view() -> ViewportController {
        ViewportController::with_image(PixelSize::new(400, 300), image(800, 600))
    }

    #[test]
    fn new_controller_starts_fitted_at_zero() {
        let view = ViewportController::new(PixelSize::new(400, 300));
        assert_eq!(view.scale(), 0.0);
        assert_eq!(view.min_scale(), 0.0);
        assert_eq!(view.max_scale(), 20.0);
        assert!(view.is_fitted());
        assert_eq!(view.offset(), None);
        assert_eq!(view.scaled_size(), None);
        assert_eq!(view.render_params(), None);
    }

    #[test]
    fn operations_without_image_are_noops() {
        let mut view = ViewportController::new(PixelSize::new(400, 300));
        let before = view.debug_info();
        view.apply_zoom(3.0, Anchor::Center);
        view.zoom_in(Anchor::Center);
        view.original();
        view.pan(10, 10);
        view.set_location(-5, -5);
        view.refresh(Anchor::Center);
        assert_eq!(view.debug_info(), before);
        assert_eq!(view.take_response(), Response::NONE);
    }

    #[test]
    fn loading_with_fit_fills_the_surface() {
        let view = fitted_view();
        assert_eq!(view.min_scale(), 0.5);
        assert_eq!(view.scale(), 0.5);
        assert_eq!(view.scaled_size(), Some(PixelSize::new(400, 300)));
        assert_eq!(view.offset(), Some(Offset::ZERO));
        assert!(view.is_fitted());
        assert_eq!(view.cursor(), CursorIcon::Default);
    }

    #[test]
    fn zoom_in_at_pointer_keeps_anchor_and_clamps() {
        let mut view = fitted_view();
        view.take_response();
        view.zoom_in(Anchor::At(Point::new(200.0, 150.0)));

        assert_eq!(view.scale(), 0.625);
        assert_eq!(view.scaled_size(), Some(PixelSize::new(500, 375)));
        // (0 - 200) * -0.25 + 0.5 = 50.5 -> 50; (0 - 150) * -0.25 + 0.5 = 38.0 -> 38
        assert_eq!(view.offset(), Some(Offset::new(-50, -38)));
        assert!(!view.is_fitted());
        assert_eq!(
            view.take_response(),
            Response {
                repaint: true,
                cursor: Some(CursorIcon::Move),
            }
        );
    }

    #[test]
    fn small_images_are_centered_and_never_magnified_by_fit() {
        let view = ViewportController::with_image(PixelSize::new(400, 300), image(101, 50));
        assert_eq!(view.min_scale(), 1.0);
        assert_eq!(view.scale(), 1.0);
        // (400 - 101) / 2 = 149, (300 - 50) / 2 = 125
        assert_eq!(view.offset(), Some(Offset::new(149, 125)));
        assert!(view.is_fitted());
    }

    #[test]
    fn resize_refits_a_fitted_view() {
        let mut view = fitted_view();
        view.set_surface_size(PixelSize::new(800, 600));
        assert_eq!(view.min_scale(), 1.0);
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.offset(), Some(Offset::ZERO));
        assert!(view.is_fitted());

        // Wider surface: height constrains, image centered horizontally.
        view.set_surface_size(PixelSize::new(1000, 300));
        assert_eq!(view.scale(), 0.5);
        assert_eq!(view.offset(), Some(Offset::new(300, 0)));
    }

    #[test]
    fn resize_reclamps_an_explicit_zoom() {
        let mut view = fitted_view();
        view.original();
        assert_eq!(view.offset(), Some(Offset::new(-200, -150)));

        // Growing the surface pulls the overflowing image back into range.
        view.set_surface_size(PixelSize::new(700, 500));
        assert_eq!(view.scale(), 1.0);
        assert!(!view.is_fitted());
        let offset = view.offset().unwrap();
        assert!((-100..=0).contains(&offset.x));
        assert!((-100..=0).contains(&offset.y));
    }

    #[test]
    fn pan_moves_within_slack_then_clamps() {
        let mut view = fitted_view();
        view.original();
        assert_eq!(view.offset(), Some(Offset::new(-200, -150)));

        view.pan(50, 50);
        assert_eq!(view.offset(), Some(Offset::new(-150, -100)));
        view.pan(500, 500);
        assert_eq!(view.offset(), Some(Offset::ZERO));
        view.pan(-1000, -1000);
        assert_eq!(view.offset(), Some(Offset::new(-400, -300)));
    }

    #[test]
    fn pan_is_ignored_while_fitted() {
        let mut view = fitted_view();
        view.take_response();
        view.pan(40, -40);
        assert_eq!(view.offset(), Some(Offset::ZERO));
        assert_eq!(view.take_response(), Response::NONE);
    }

    #[test]
    fn pan_leaves_a_fitting_axis_alone() {
        // 800×200 image on 400×300: at 1:1 x overflows, y fits.
        let mut view = ViewportController::with_image(PixelSize::new(400, 300), image(800, 200));
        view.original();
        assert_eq!(view.offset(), Some(Offset::new(-200, 50)));
        view.pan(-30, 99);
        assert_eq!(view.offset(), Some(Offset::new(-230, 50)));
    }

    #[test]
    fn set_location_ignores_fitted_guard_but_only_touches_overflow() {
        let mut view = fitted_view();
        // Exactly fitted: neither axis overflows.
        view.set_location(-10, -10);
        assert_eq!(view.offset(), Some(Offset::ZERO));

        view.original();
        view.set_location(-1000, 7);
        assert_eq!(view.offset(), Some(Offset::new(-400, 0)));
    }

    #[test]
    fn max_zoom_has_a_floor_of_one_and_pulls_scale_down() {
        let mut view = fitted_view();
        view.apply_zoom(4.0, Anchor::Center);
        assert_eq!(view.scale(), 4.0);

        view.set_max_zoom(0.5);
        assert_eq!(view.max_scale(), 1.0);
        assert_eq!(view.scale(), 1.0);

        view.apply_zoom(5.0, Anchor::Center);
        assert_eq!(view.scale(), 1.0);
        assert!(!view.is_fitted());
    }

    #[test]
    fn max_zoom_then_oversized_request_from_zoomed_state() {
        let mut view = fitted_view();
        view.zoom_in(Anchor::At(Point::new(200.0, 150.0)));
        view.set_max_zoom(0.5);
        view.apply_zoom(5.0, Anchor::Center);

        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.scaled_size(), Some(PixelSize::new(800, 600)));
        // x: (-50 - 200) * -0.6 + 0.5 -> 150; y: (-38 - 150) * -0.6 + 0.5 -> 113
        assert_eq!(view.offset(), Some(Offset::new(-200, -151)));
    }

    #[test]
    fn zoom_requests_are_clamped() {
        let mut view = fitted_view();
        view.apply_zoom(0.01, Anchor::Center);
        assert_eq!(view.scale(), 0.5);
        assert!(view.is_fitted());

        view.apply_zoom(100.0, Anchor::Center);
        assert_eq!(view.scale(), 20.0);

        view.apply_zoom(f64::NAN, Anchor::Center);
        assert_eq!(view.scale(), 20.0);
    }

    #[test]
    fn zoom_out_back_to_minimum_becomes_fitted() {
        let mut view = fitted_view();
        view.zoom_in(Anchor::Center);
        assert!(!view.is_fitted());
        view.zoom_out(Anchor::Center);
        assert_eq!(view.scale(), 0.5);
        assert!(view.is_fitted());
        assert_eq!(view.offset(), Some(Offset::ZERO));
        assert_eq!(view.cursor(), CursorIcon::Default);
    }

    #[test]
    fn custom_zoom_step_drives_zoom_in_and_out() {
        let mut view = fitted_view();
        view.original();
        view.set_zoom_step(2.0);
        assert_eq!(view.zoom_step(), 2.0);

        view.zoom_in(Anchor::Center);
        assert_eq!(view.scale(), 2.0);
        assert_eq!(view.scaled_size(), Some(PixelSize::new(1600, 1200)));
        view.zoom_out(Anchor::Center);
        view.zoom_out(Anchor::Center);
        assert_eq!(view.scale(), 0.5);
        assert!(view.is_fitted());

        view.set_zoom_step(0.5);
        assert_eq!(view.zoom_step(), 1.25);
    }

    #[test]
    fn set_config_applies_every_field_and_floors_max_zoom() {
        let mut view = fitted_view();
        view.apply_zoom(4.0, Anchor::Center);

        let config = ViewportConfig::new()
            .with_max_zoom(0.3)
            .with_zoom_step(1.5)
            .with_smoothing(true)
            .with_interactive(false)
            .with_pan_button(PointerButton::Auxiliary);
        view.set_config(config);

        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.offset(), Some(Offset::new(-200, -150)));
        assert_eq!(
            view.config(),
            ViewportConfig {
                max_zoom: 1.0,
                ..config
            }
        );
    }

    #[test]
    fn config_round_trips_through_the_controller() {
        let config = ViewportConfig::new()
            .with_max_zoom(6.0)
            .with_zoom_step(1.1)
            .with_pan_button(PointerButton::Other(4));
        let view = ViewportController::with_config(PixelSize::new(10, 10), config);
        assert_eq!(view.config(), config);

        let mut other = ViewportController::default();
        other.set_config(view.config());
        assert_eq!(other.config(), config);
    }

    #[test]
    fn zoom_round_trip_at_center_restores_offset() {
        let mut view = fitted_view();
        view.original();
        let before = view.offset();

        view.zoom_in(Anchor::Center);
        assert_eq!(view.scale(), 1.25);
        assert_eq!(view.offset(), Some(Offset::new(-300, -225)));

        view.zoom_out(Anchor::Center);
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.offset(), before);
    }

    #[test]
    fn image_replacement_without_fit_keeps_zoom() {
        let mut view = fitted_view();
        view.original();
        view.set_image(Some(image(1600, 1200)), false);
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.min_scale(), 0.25);
        assert!(!view.is_fitted());

        view.set_image(Some(image(1600, 1200)), true);
        assert_eq!(view.scale(), 0.25);
        assert!(view.is_fitted());

        // Fitted is sticky: loading without fit stays fitted.
        view.set_image(Some(image(400, 300)), false);
        assert!(view.is_fitted());
        assert_eq!(view.scale(), 1.0);
    }

    #[test]
    fn clearing_the_image_requests_repaint() {
        let mut view = fitted_view();
        view.take_response();
        view.clear_image();
        assert_eq!(view.image_size(), None);
        assert_eq!(view.offset(), None);
        assert!(view.take_response().repaint);
    }

    #[test]
    fn load_image_validates_dimensions() {
        let mut view = ViewportController::new(PixelSize::new(400, 300));
        assert!(view.load_image(&(0_u32, 10_u32), true).is_err());
        assert_eq!(view.image_size(), None);

        let size = view.load_image(&(800_u32, 600_u32), true).unwrap();
        assert_eq!(size, image(800, 600));
        assert_eq!(view.scale(), 0.5);
    }

    #[test]
    fn zero_surface_degenerates_to_origin() {
        let mut view = ViewportController::with_image(PixelSize::ZERO, image(800, 600));
        assert_eq!(view.min_scale(), 0.0);
        assert_eq!(view.scale(), 0.0);
        assert_eq!(view.offset(), Some(Offset::ZERO));
        assert_eq!(view.scaled_size(), Some(PixelSize::ZERO));

        view.original();
        assert_eq!(view.scale(), 1.0);
        assert_eq!(view.offset(), Some(Offset::ZERO));
        view.pan(-50, -50);
        assert_eq!(view.offset(), Some(Offset::new(-50, -50)));
    }

    #[test]
    fn render_params_request_smoothing_only_when_shrunk() {
        let mut view = fitted_view();
        view.set_smoothing(true);
        assert!(view.render_params().unwrap().smooth);

        view.original();
        let params = view.render_params().unwrap();
        assert!(!params.smooth);
        assert_eq!(params.size, PixelSize::new(800, 600));
        assert_eq!(params.offset, Offset::new(-200, -150));
    }

    #[test]
    fn point_conversions_invert_each_other() {
        let mut view = fitted_view();
        view.original();
        let surface_pt = Point::new(10.0, 20.0);
        let image_pt = view.surface_to_image_point(surface_pt).unwrap();
        assert_eq!(image_pt, Point::new(210.0, 170.0));
        assert_eq!(view.image_to_surface_point(image_pt), Some(surface_pt));
    }

    #[test]
    fn visible_rect_tracks_the_viewport() {
        let mut view = fitted_view();
        assert_eq!(
            view.visible_image_rect(),
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
        view.original();
        assert_eq!(
            view.visible_image_rect(),
            Some(Rect::new(200.0, 150.0, 600.0, 450.0))
        );
    }

    #[test]
    fn clamp_scale_edges() {
        assert_eq!(clamp_scale(0.7, 0.5, 2.0), 0.7);
        assert_eq!(clamp_scale(0.1, 0.5, 2.0), 0.5);
        assert_eq!(clamp_scale(2.0, 0.5, 2.0), 2.0);
        assert_eq!(clamp_scale(f64::NAN, 0.5, 2.0), 2.0);
    }

    #[test]
    fn fit_scale_takes_tightest_axis() {
        assert_eq!(fit_scale(image(800, 600), PixelSize::new(400, 300)), 0.5);
        assert_eq!(fit_scale(image(800, 600), PixelSize::new(400, 600)), 0.5);
        assert_eq!(fit_scale(image(800, 600), PixelSize::new(1600, 300)), 0.5);
        assert_eq!(fit_scale(image(10, 10), PixelSize::new(400, 300)), 1.0);
        assert_eq!(fit_scale(image(10, 10), PixelSize::new(0, 300)), 0.0);
    }

    #[test]
    fn anchored_shift_biases_in_zoom_direction() {
        // Zooming in: ties go up.
        assert_eq!(anchored_shift(0, 200.0, -0.25, 0.5), 50);
        assert_eq!(anchored_shift(0, 150.0, -0.25, 0.5), 38);
        // Zooming out: ties go down, truncation toward zero.
        assert_eq!(anchored_shift(-50, 200.0, 0.2, -0.5), -50);
        // No motion.
        assert_eq!(anchored_shift(-17, 3.0, 0.0, -0.5), 0);
        assert_eq!(anchored_shift(-17, 3.0, 0.0, 0.5), 0);
    }

    #[test]
    fn center_and_clamp_rules() {
        assert_eq!(center_or_clamp(-80, 400, 301), 49);
        assert_eq!(center_or_clamp(-80, 400, 400), 0);
        assert_eq!(center_or_clamp(30, 400, 500), 0);
        assert_eq!(center_or_clamp(-130, 400, 500), -100);
        assert_eq!(center_or_clamp(-60, 400, 500), -60);

        assert_eq!(clamp_overflow(-60, 400, 500), Some(-60));
        assert_eq!(clamp_overflow(-60, 400, 400), None);
        assert_eq!(clamp_overflow(10, 0, 1), Some(0));
    }
}
