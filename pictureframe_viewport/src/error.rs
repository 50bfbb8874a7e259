// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Reasons raw dimensions cannot describe a displayable image.
///
/// Returned by [`ImageSize::new`](crate::ImageSize::new) and anything built on
/// it, such as [`ViewportController::load_image`](crate::ViewportController::load_image).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ImageSizeError {
    /// The image is zero pixels wide.
    #[error("image width must be non-zero")]
    ZeroWidth,
    /// The image is zero pixels tall.
    #[error("image height must be non-zero")]
    ZeroHeight,
}
