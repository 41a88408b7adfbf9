//! Portable frame image handle.
//!
//! [`FrameImage`] is the single image type the crate hands around, backed
//! by [`image::DynamicImage`] on every platform. It can be loaded from disk
//! or materialized from a raw, possibly row-padded pixel buffer as decoders
//! typically produce.

use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::error::VideoFramesError;

/// Width and height of a frame in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Create a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Pixel layout of a raw frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 8-bit RGB (24 bpp). This is the default.
    #[default]
    Rgb8,
    /// 8-bit RGBA (32 bpp).
    Rgba8,
    /// 8-bit grayscale (8 bpp).
    Gray8,
}

impl PixelFormat {
    /// Bytes used by a single pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// A decoded frame.
#[derive(Debug, Clone)]
pub struct FrameImage {
    image: DynamicImage,
}

impl FrameImage {
    /// Load an image file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`VideoFramesError::ImageError`] if the file cannot be read or
    /// decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, VideoFramesError> {
        let image = image::open(path)?;
        Ok(Self { image })
    }

    /// Build an image from a raw pixel buffer.
    ///
    /// `stride` is the number of bytes between the starts of two rows and
    /// may exceed `width * bytes_per_pixel`; the padding is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`VideoFramesError::FramePixelBuffer`] if `size` is empty,
    /// `stride` is shorter than a packed row, or `data` is too short.
    pub fn from_pixel_buffer(
        size: FrameSize,
        format: PixelFormat,
        data: &[u8],
        stride: usize,
    ) -> Result<Self, VideoFramesError> {
        if size.is_empty() {
            return Err(VideoFramesError::FramePixelBuffer(format!(
                "invalid frame size {}x{}",
                size.width, size.height
            )));
        }

        let buffer = pack_rows(data, size, format.bytes_per_pixel(), stride)?;
        let too_short = || {
            VideoFramesError::FramePixelBuffer("pixel buffer does not match frame size".to_string())
        };

        let image = match format {
            PixelFormat::Rgb8 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(size.width, size.height, buffer).ok_or_else(too_short)?,
            ),
            PixelFormat::Rgba8 => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(size.width, size.height, buffer).ok_or_else(too_short)?,
            ),
            PixelFormat::Gray8 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(size.width, size.height, buffer).ok_or_else(too_short)?,
            ),
        };

        Ok(Self { image })
    }

    /// Pixel dimensions.
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.image.width(), self.image.height())
    }

    /// Write the image to disk; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), VideoFramesError> {
        self.image.save(path)?;
        Ok(())
    }

    /// Borrow the underlying image.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Unwrap into the underlying image.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }
}

impl From<DynamicImage> for FrameImage {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}

/// Copy rows out of a strided buffer into a tightly-packed one.
fn pack_rows(
    data: &[u8],
    size: FrameSize,
    bytes_per_pixel: usize,
    stride: usize,
) -> Result<Vec<u8>, VideoFramesError> {
    let rows = size.height as usize;
    let row_bytes = (size.width as usize)
        .checked_mul(bytes_per_pixel)
        .ok_or_else(|| {
            VideoFramesError::FramePixelBuffer(format!("row of {} pixels overflows", size.width))
        })?;

    if stride < row_bytes {
        return Err(VideoFramesError::FramePixelBuffer(format!(
            "stride {stride} is shorter than a row of {row_bytes} bytes"
        )));
    }

    // The last row needs no trailing padding.
    let required = stride
        .checked_mul(rows - 1)
        .and_then(|padded| padded.checked_add(row_bytes))
        .ok_or_else(|| {
            VideoFramesError::FramePixelBuffer(format!(
                "stride {stride} overflows for {rows} rows"
            ))
        })?;
    if data.len() < required {
        return Err(VideoFramesError::FramePixelBuffer(format!(
            "buffer holds {} bytes, expected at least {required}",
            data.len()
        )));
    }

    if stride == row_bytes {
        return Ok(data[..row_bytes * rows].to_vec());
    }

    let mut buffer = Vec::with_capacity(row_bytes * rows);
    for row in 0..rows {
        let row_start = row * stride;
        buffer.extend_from_slice(&data[row_start..row_start + row_bytes]);
    }
    Ok(buffer)
}
