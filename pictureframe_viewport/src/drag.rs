// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan-drag tracking in whole surface pixels.
//!
//! Pointer positions are snapped to the nearest pixel as they arrive, so the
//! deltas fed to [`ViewportController::pan`](crate::ViewportController::pan)
//! are always integral and never accumulate sub-pixel drift.
//!
//! ```
//! use kurbo::Point;
//! use pictureframe_viewport::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.2, 20.0));
//! assert!(drag.is_dragging());
//!
//! // (15, 25) - (10, 20)
//! assert_eq!(drag.update(Point::new(15.0, 24.6)), Some((5, 5)));
//! assert_eq!(drag.update(Point::new(20.0, 20.0)), Some((5, -5)));
//!
//! drag.end();
//! assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::Point;

/// Tracks the pointer during a pan drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Snapped position where the drag started.
    pub start_pos: Option<Point>,
    /// Snapped position of the last update.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Starts a drag at `pos`.
    pub fn start(&mut self, pos: Point) {
        let pos = pos.round();
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position and returns the pixel delta since the
    /// previous one, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<(i32, i32)> {
        self.start_pos?;
        let pos = pos.round();
        let delta = self.last_pos.map(|last| pixel_delta(last, pos));
        self.last_pos = Some(pos);
        delta
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "both points are already snapped; the cast saturates for absurd coordinates"
)]
fn pixel_delta(from: Point, to: Point) -> (i32, i32) {
    let delta = to - from;
    (delta.x as i32, delta.y as i32)
}
