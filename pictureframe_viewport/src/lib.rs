// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pictureframe Viewport: a headless pan/zoom controller for one image on a
//! resizable surface.
//!
//! [`ViewportController`] answers one question after every zoom, pan or
//! resize: at what scale, and at which top-left offset, should the image be
//! drawn? It guarantees that:
//! - The scale stays within `[min_scale, max_scale]`, where the minimum is
//!   the largest scale at which the whole image fits (never above 1:1) and
//!   the maximum is configurable with a floor of 1.
//! - On each axis, a scaled image smaller than the surface is centered, and
//!   a larger one is clamped so no empty space shows past its edges.
//! - Zooming around an anchor keeps the content under the anchor in place.
//! - A fitted view cannot be panned and re-fits itself on every resize.
//!
//! It does **not** decode, own, or draw pixels. Callers are expected to:
//! - Report surface resizes and pointer/wheel input, either through the
//!   direct API or as [`ViewportEvent`]s passed to
//!   [`ViewportController::handle`].
//! - Carry out the returned [`Response`] (repaint, cursor), optionally via
//!   a [`Surface`] implementation.
//! - Draw the image at [`ViewportController::render_params`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use pictureframe_viewport::{Anchor, ImageSize, Offset, PixelSize, ViewportController};
//!
//! let mut view = ViewportController::new(PixelSize::new(400, 300));
//! view.set_image(Some(ImageSize::new(800, 600)?), true);
//! assert_eq!(view.scale(), 0.5);
//! assert!(view.is_fitted());
//!
//! // Zoom in around the pointer; the wider image is clamped to the surface.
//! view.zoom_in(Anchor::At(Point::new(200.0, 150.0)));
//! assert_eq!(view.scale(), 0.625);
//! assert_eq!(view.scaled_size(), Some(PixelSize::new(500, 375)));
//! assert_eq!(view.offset(), Some(Offset::new(-50, -38)));
//!
//! // Pan as far right as the image allows.
//! view.pan(500, 0);
//! assert_eq!(view.offset(), Some(Offset::new(0, -38)));
//!
//! // Resizing a non-fitted view keeps the zoom and re-clamps.
//! view.set_surface_size(PixelSize::new(450, 350));
//! assert_eq!(view.scale(), 0.625);
//! assert!(!view.is_fitted());
//! assert_eq!(view.offset(), Some(Offset::new(0, -25)));
//! # Ok::<(), pictureframe_viewport::ImageSizeError>(())
//! ```
//!
//! ## Rounding
//!
//! Offsets are whole pixels. When zooming, the offset shift is computed in
//! floating point, biased by half a pixel in the direction of the zoom and
//! truncated toward zero. One `zoom_in` followed by one `zoom_out` around the
//! same anchor therefore returns to the same offset. Round trips between
//! arbitrary scales may drift by a pixel, since offsets are whole pixels.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: float math for `no_std` builds.
//! - `serde`: `Serialize`/`Deserialize` for [`ViewportConfig`] and the plain
//!   geometry types.
//! - `image`: [`ImageSource`] for `image::DynamicImage` and `image::ImageBuffer`.
//!
//! Diagnostics are emitted through `tracing` at `debug` and `trace` level.
//!
//! This crate is `no_std` without the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod controller;
mod drag;
mod error;
mod event;
mod geometry;

pub use config::{DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_STEP, ViewportConfig};
pub use controller::{RenderParams, ViewportController, ViewportDebugInfo};
pub use drag::DragState;
pub use error::ImageSizeError;
pub use event::{CursorIcon, PointerButton, Response, Surface, ViewportEvent};
pub use geometry::{Anchor, ImageSize, ImageSource, Offset, PixelSize};
