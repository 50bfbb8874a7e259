// Copyright 2026 the Pictureframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry shared by the controller and its collaborators.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::error::ImageSizeError;

/// Width × height in whole pixels.
///
/// Used for the display surface, whose dimensions may be zero, and for the
/// scaled image size reported to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either axis is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Integer center `(width / 2, height / 2)`, used as the default zoom anchor.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Dimensions of a source image. Both axes are guaranteed non-zero.
///
/// The controller never touches pixels; this is all it keeps of the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    /// Validates raw dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ImageSizeError`] if either dimension is zero.
    pub const fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 {
            return Err(ImageSizeError::ZeroWidth);
        }
        if height == 0 {
            return Err(ImageSizeError::ZeroHeight);
        }
        Ok(Self { width, height })
    }

    /// Width in source pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in source pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size of the image drawn at `scale`, each axis rounded to the nearest pixel.
    ///
    /// A zero, negative or NaN scale yields an empty size.
    #[must_use]
    pub fn scaled(self, scale: f64) -> PixelSize {
        PixelSize::new(
            scale_length(self.width, scale),
            scale_length(self.height, scale),
        )
    }
}

impl TryFrom<PixelSize> for ImageSize {
    type Error = ImageSizeError;

    fn try_from(size: PixelSize) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int casts saturate; out-of-range scales collapse to 0 or u32::MAX"
)]
fn scale_length(length: u32, scale: f64) -> u32 {
    (scale * f64::from(length)).round() as u32
}

/// Top-left position of the scaled image relative to the surface's top-left.
///
/// Negative components mean the image extends past the surface's left/top edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Horizontal position in surface pixels.
    pub x: i32,
    /// Vertical position in surface pixels.
    pub y: i32,
}

impl Offset {
    /// The surface origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new offset.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The offset as a translation in surface space.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Surface point whose underlying image content stays put across a zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Anchor {
    /// The surface's integer center, `(width / 2, height / 2)`.
    #[default]
    Center,
    /// An explicit point in surface coordinates, usually the pointer.
    At(Point),
}

impl Anchor {
    /// Resolves the anchor against the current surface size.
    #[must_use]
    pub fn resolve(self, surface: PixelSize) -> Point {
        match self {
            Self::Center => surface.center(),
            Self::At(point) => point,
        }
    }
}

impl From<Point> for Anchor {
    fn from(point: Point) -> Self {
        Self::At(point)
    }
}

/// Anything the controller can take image dimensions from.
///
/// The image itself stays owned by the caller; only its size is recorded.
pub trait ImageSource {
    /// Raw `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ImageSizeError`] if either dimension is zero.
    fn image_size(&self) -> Result<ImageSize, ImageSizeError> {
        let (width, height) = self.dimensions();
        ImageSize::new(width, height)
    }
}

impl ImageSource for ImageSize {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn image_size(&self) -> Result<ImageSize, ImageSizeError> {
        Ok(*self)
    }
}

impl ImageSource for PixelSize {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl ImageSource for (u32, u32) {
    fn dimensions(&self) -> (u32, u32) {
        *self
    }
}

#[cfg(feature = "image")]
impl ImageSource for image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

#[cfg(feature = "image")]
impl<P, C> ImageSource for image::ImageBuffer<P, C>
where
    P: image::Pixel,
    C: core::ops::Deref<Target = [P::Subpixel]>,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}
