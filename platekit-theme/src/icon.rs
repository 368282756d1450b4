//! # Icons
//!
//! Bitmap icons decoded with the `image` crate and converted into vello
//! image brushes for painting.

use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use vello::peniko::{Blob, ImageAlphaType, ImageBrush, ImageData, ImageFormat};

use crate::error::{StyleError, StyleResult};

/// An RGBA8 bitmap.
///
/// An icon with zero width or height stands for a broken image: it paints
/// nothing but is otherwise a normal value.
#[derive(Clone)]
pub struct Icon {
    pixels: Arc<RgbaImage>,
}

impl Icon {
    /// Wrap decoded pixels.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    /// The broken/empty icon.
    pub fn empty() -> Self {
        Self::from_image(RgbaImage::new(0, 0))
    }

    /// Decode an icon file.
    pub fn try_load(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|err| StyleError::icon_load(path, err))?;
        Ok(Self::from_image(image.to_rgba8()))
    }

    /// Decode an icon file, returning [Icon::empty] if that fails.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(icon) => {
                log::debug!("Loaded icon {:?} ({}x{})", path, icon.width(), icon.height());
                icon
            },
            Err(err) => {
                log::warn!("{}", err);
                Self::empty()
            },
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Whether this is the broken/empty icon.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The raw pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// A copy resized to exactly `width` x `height` with smooth filtering.
    ///
    /// The aspect ratio is not preserved. Scaling an empty icon yields a
    /// transparent bitmap of the requested size.
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if self.is_empty() {
            return Self::from_image(RgbaImage::new(width, height));
        }
        if self.width() == width && self.height() == height {
            return self.clone();
        }
        Self::from_image(imageops::resize(
            &*self.pixels,
            width,
            height,
            FilterType::Lanczos3,
        ))
    }

    /// Convert into a brush that vello can draw.
    pub fn to_image_brush(&self) -> ImageBrush {
        let data = ImageData {
            data: Blob::from(self.pixels.as_raw().clone()),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width: self.width(),
            height: self.height(),
        };
        ImageBrush::new(data)
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::empty()
    }
}

impl Debug for Icon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Icon({}x{})", self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker(width: u32, height: u32) -> Icon {
        Icon::from_image(RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        }))
    }

    #[test]
    fn scaling_produces_exact_dimensions() {
        let icon = checker(64, 48);
        for (w, h) in [(16, 16), (100, 20), (1, 300)] {
            let scaled = icon.scaled(w, h);
            assert_eq!((scaled.width(), scaled.height()), (w, h));
        }
    }

    #[test]
    fn missing_icon_is_empty() {
        let icon = Icon::load("/nonexistent/icon.png");
        assert!(icon.is_empty());
        assert!(Icon::try_load("/nonexistent/icon.png").is_err());
    }

    #[test]
    fn empty_icon_scales_to_requested_size() {
        let scaled = Icon::empty().scaled(12, 8);
        assert_eq!((scaled.width(), scaled.height()), (12, 8));
    }

    #[test]
    fn icon_loads_from_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        checker(8, 4).pixels().save(&path).unwrap();

        let icon = Icon::load(&path);
        assert_eq!((icon.width(), icon.height()), (8, 4));
    }
}
