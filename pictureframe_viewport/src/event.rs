// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host events in, host side effects out.
//!
//! A host translates its windowing system's events into [`ViewportEvent`]s
//! and feeds them to [`ViewportController::handle`]. The returned
//! [`Response`] says whether to repaint and which cursor to show; it can be
//! forwarded to anything implementing [`Surface`].
//!
//! ```
//! use kurbo::Point;
//! use pictureframe_viewport::{
//!     CursorIcon, ImageSize, PixelSize, PointerButton, ViewportController, ViewportEvent,
//! };
//!
//! let mut view = ViewportController::new(PixelSize::new(400, 300));
//! view.set_image(Some(ImageSize::new(800, 600).unwrap()), true);
//! view.take_response();
//!
//! // Wheel up over the middle of the surface zooms in there.
//! let response = view.handle(ViewportEvent::Wheel {
//!     delta: -1.0,
//!     position: Point::new(200.0, 150.0),
//! });
//! assert!(response.repaint);
//! assert_eq!(response.cursor, Some(CursorIcon::Move));
//!
//! // Drag with the primary button to pan.
//! view.handle(ViewportEvent::PointerDown {
//!     position: Point::new(100.0, 100.0),
//!     button: PointerButton::Primary,
//! });
//! view.handle(ViewportEvent::PointerDrag {
//!     position: Point::new(90.0, 95.0),
//! });
//! assert_eq!(view.offset().map(|o| (o.x, o.y)), Some((-60, -43)));
//! ```

use kurbo::Point;

use crate::controller::ViewportController;
use crate::geometry::{Anchor, Offset, PixelSize};

/// Pointer button identity, as far as panning cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button or wheel click.
    Auxiliary,
    /// Any other button, by host-specific number.
    Other(u16),
}

/// Cursor affordance over the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    /// The image cannot be panned.
    #[default]
    Default,
    /// The image can be dragged.
    Move,
}

/// An input or command for [`ViewportController::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// The surface changed size.
    Resized(PixelSize),
    /// A pointer button was pressed over the surface.
    PointerDown {
        /// Pointer position in surface coordinates.
        position: Point,
        /// Button that was pressed.
        button: PointerButton,
    },
    /// The pointer moved while a button was held.
    PointerDrag {
        /// Pointer position in surface coordinates.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp {
        /// Button that was released.
        button: PointerButton,
    },
    /// The pointer entered the surface.
    PointerEnter,
    /// The pointer left the surface.
    PointerLeave,
    /// The wheel rotated. Negative deltas zoom in, positive deltas zoom out.
    Wheel {
        /// Signed rotation; only the sign matters.
        delta: f64,
        /// Pointer position in surface coordinates.
        position: Point,
    },
    /// Fit the image to the surface.
    Fit,
    /// Show the image at 1:1.
    Original,
    /// Zoom to an explicit scale.
    ZoomTo {
        /// Requested scale; clamped into the allowed range.
        scale: f64,
        /// Point to keep in place.
        anchor: Anchor,
    },
    /// Place the image's top-left corner.
    SetLocation(Offset),
}

/// Side effects the host should carry out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The surface should be redrawn.
    pub repaint: bool,
    /// The surface cursor should change.
    pub cursor: Option<CursorIcon>,
}

impl Response {
    /// Nothing to do.
    pub const NONE: Self = Self {
        repaint: false,
        cursor: None,
    };

    /// Combines two responses; the later cursor wins.
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        Self {
            repaint: self.repaint || later.repaint,
            cursor: later.cursor.or(self.cursor),
        }
    }

    /// Returns `true` if there is nothing to do.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Forwards the side effects to `surface`.
    pub fn apply_to<S: Surface + ?Sized>(self, surface: &mut S) {
        if let Some(cursor) = self.cursor {
            surface.set_cursor(cursor);
        }
        if self.repaint {
            surface.request_repaint();
        }
    }
}

/// The display area an image is drawn onto.
///
/// Repaint requests are fire-and-forget; implementations may coalesce them.
pub trait Surface {
    /// Current size in pixels.
    fn size(&self) -> PixelSize;

    /// Schedules a redraw.
    fn request_repaint(&mut self);

    /// Changes the cursor shown over the surface.
    fn set_cursor(&mut self, cursor: CursorIcon);
}

impl ViewportController {
    /// Handles one host event and returns the side effects it produced,
    /// together with any accumulated from direct calls since the last drain.
    ///
    /// Pointer, drag and wheel events are ignored while the controller is not
    /// interactive. Resizes and commands are always honored.
    pub fn handle(&mut self, event: ViewportEvent) -> Response {
        match event {
            ViewportEvent::Resized(size) => self.set_surface_size(size),
            ViewportEvent::PointerDown { position, button } => {
                if self.is_interactive()
                    && self.image_size().is_some()
                    && button == self.pan_button()
                {
                    self.drag.start(position);
                }
            }
            ViewportEvent::PointerDrag { position } => {
                if self.is_interactive()
                    && self.image_size().is_some()
                    && let Some((dx, dy)) = self.drag.update(position)
                {
                    self.pan(dx, dy);
                }
            }
            ViewportEvent::PointerUp { button } => {
                if button == self.pan_button() {
                    self.drag.end();
                }
            }
            ViewportEvent::PointerEnter => {
                if self.is_interactive() && !self.is_fitted() {
                    self.set_cursor(CursorIcon::Move);
                }
            }
            ViewportEvent::PointerLeave => {
                if self.is_interactive() && !self.is_fitted() {
                    self.set_cursor(CursorIcon::Default);
                }
            }
            ViewportEvent::Wheel { delta, position } => {
                if self.is_interactive() {
                    if delta < 0.0 {
                        self.zoom_in(Anchor::At(position));
                    } else if delta > 0.0 {
                        self.zoom_out(Anchor::At(position));
                    }
                }
            }
            ViewportEvent::Fit => self.fit(),
            ViewportEvent::Original => self.original(),
            ViewportEvent::ZoomTo { scale, anchor } => self.apply_zoom(scale, anchor),
            ViewportEvent::SetLocation(offset) => self.set_location(offset.x, offset.y),
        }
        self.take_response()
    }

    /// Pulls the size from `surface` (refreshing if it changed) and pushes
    /// pending side effects back to it.
    pub fn sync_surface<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let size = surface.size();
        if size != self.surface_size() {
            self.set_surface_size(size);
        }
        self.take_response().apply_to(surface);
    }
}
