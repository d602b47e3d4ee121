//! The pixel buffer and its point/rectangle primitives.
//!
//! Pixels are stored row-major as non-premultiplied RGBA in an
//! [`image::RgbaImage`]. Coordinates are signed so callers can pass geometry
//! that hangs off the canvas; anything outside the buffer is clipped away and
//! never panics.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use ochre_css::{ColorValue, LayoutBox};

use crate::raster::PixelRect;

/// Upper bound for the height derived from a layout's content in
/// [`Canvas::for_layout`].
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A fixed-size RGBA raster target.
///
/// Size changes only through [`Canvas::resize`]. Cloning produces a fully
/// independent copy of the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Create an opaque white canvas of exactly `width × height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: ImageBuffer::from_pixel(width, height, WHITE),
        }
    }

    /// Create a canvas for painting `root` into a viewport.
    ///
    /// The height grows past `viewport_height` when the layout's content
    /// extends below it, capped at [`MAX_CANVAS_DIMENSION`].
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn for_layout(root: Option<&LayoutBox>, viewport_width: u32, viewport_height: u32) -> Self {
        let content_bottom = root.map_or(0.0, LayoutBox::content_bottom);
        let content_height = if content_bottom.is_finite() {
            content_bottom
                .ceil()
                .clamp(0.0, MAX_CANVAS_DIMENSION as f32) as u32
        } else {
            0
        };
        Self::new(viewport_width, viewport_height.max(content_height))
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Raw row-major RGBA bytes, four per pixel.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// The whole canvas as a rectangle.
    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(
            0,
            0,
            i32::try_from(self.width()).unwrap_or(i32::MAX),
            i32::try_from(self.height()).unwrap_or(i32::MAX),
        )
    }

    /// Intersect `rect` with the canvas bounds.
    ///
    /// Returns `None` when nothing of `rect` lands on the canvas.
    #[must_use]
    pub fn clip_rect(&self, rect: PixelRect) -> Option<PixelRect> {
        rect.intersect(&self.bounds())
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: ColorValue) {
        let rgba = Rgba(color.to_array());
        for pixel in self.buffer.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Reallocate to a new size.
    ///
    /// The overlapping region keeps its pixels; newly exposed area is white.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width() && height == self.height() {
            return;
        }
        let mut resized = ImageBuffer::from_pixel(width, height, WHITE);
        for y in 0..height.min(self.height()) {
            for x in 0..width.min(self.width()) {
                resized.put_pixel(x, y, *self.buffer.get_pixel(x, y));
            }
        }
        self.buffer = resized;
    }

    /// Overwrite one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: ColorValue) {
        if let Some((x, y)) = self.locate(x, y) {
            self.buffer.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    /// Read one pixel. Out-of-range coordinates read as transparent black.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> ColorValue {
        self.locate(x, y)
            .map_or(ColorValue::TRANSPARENT, |(x, y)| {
                color_of(*self.buffer.get_pixel(x, y))
            })
    }

    /// Composite `color` over one pixel with source-over.
    ///
    /// Fully opaque colors overwrite, fully transparent ones are no-ops.
    pub fn set_pixel_blend(&mut self, x: i32, y: i32, color: ColorValue) {
        if color.is_transparent() {
            return;
        }
        if color.is_opaque() {
            self.set_pixel(x, y, color);
            return;
        }
        if let Some((x, y)) = self.locate(x, y) {
            self.blend_at(x, y, color);
        }
    }

    /// Fill a rectangle, clipped to the canvas.
    ///
    /// Zero or negative sizes draw nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: ColorValue) {
        self.fill_pixel_rect(PixelRect::new(x, y, width, height), color);
    }

    /// [`Canvas::fill_rect`] taking a [`PixelRect`].
    #[allow(clippy::cast_sign_loss)]
    pub fn fill_pixel_rect(&mut self, rect: PixelRect, color: ColorValue) {
        if color.is_transparent() {
            return;
        }
        let Some(clipped) = self.clip_rect(rect) else {
            return;
        };
        // Clipped coordinates are inside the buffer, so they are non-negative.
        let (x0, y0) = (clipped.x as u32, clipped.y as u32);
        let (x1, y1) = (clipped.right() as u32, clipped.bottom() as u32);

        if color.is_opaque() {
            let rgba = Rgba(color.to_array());
            for y in y0..y1 {
                for x in x0..x1 {
                    self.buffer.put_pixel(x, y, rgba);
                }
            }
        } else {
            for y in y0..y1 {
                for x in x0..x1 {
                    self.blend_at(x, y, color);
                }
            }
        }
    }

    /// A copy of the pixels as an [`RgbaImage`].
    #[must_use]
    pub fn to_image(&self) -> RgbaImage {
        self.buffer.clone()
    }

    /// Consume the canvas, returning its pixels.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }

    /// Write the canvas as a binary PPM (P6). Alpha is dropped.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width(), self.height())?;
        for pixel in self.buffer.pixels() {
            writer.write_all(&pixel.0[..3])?;
        }
        writer.flush()
    }

    /// Save the canvas to a file, choosing the format from the extension.
    ///
    /// `.ppm` is written natively as P6; everything else goes through the
    /// `image` crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or encoded.
    pub fn save(&self, path: &Path) -> Result<()> {
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            self.write_ppm(BufWriter::new(file))
                .with_context(|| format!("failed to write PPM to '{}'", path.display()))?;
        } else {
            self.buffer
                .save(path)
                .with_context(|| format!("failed to save image to '{}'", path.display()))?;
        }
        Ok(())
    }

    fn locate(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }

    fn blend_at(&mut self, x: u32, y: u32, color: ColorValue) {
        let pixel = self.buffer.get_pixel_mut(x, y);
        pixel.0 = source_over(color, color_of(*pixel)).to_array();
    }
}

const fn color_of(pixel: Rgba<u8>) -> ColorValue {
    let [r, g, b, a] = pixel.0;
    ColorValue::rgba(r, g, b, a)
}

/// Porter-Duff source-over of non-premultiplied colors.
///
/// `out_a = src_a + dst_a·(1 - src_a)` and
/// `out_c = (src_c·src_a + dst_c·dst_a·(1 - src_a)) / out_a`, rounded to the
/// nearest channel value. A zero result alpha yields transparent black.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn source_over(src: ColorValue, dst: ColorValue) -> ColorValue {
    let src_a = f32::from(src.a) / 255.0;
    let dst_a = f32::from(dst.a) / 255.0;
    let dst_weight = dst_a * (1.0 - src_a);
    let out_a = src_a + dst_weight;
    if out_a <= 0.0 {
        return ColorValue::TRANSPARENT;
    }

    let channel = |s: u8, d: u8| -> u8 {
        let value = f32::from(s).mul_add(src_a, f32::from(d) * dst_weight) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    ColorValue::rgba(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_over_onto_transparent_keeps_source() {
        let src = ColorValue::rgba(10, 20, 30, 128);
        assert_eq!(source_over(src, ColorValue::TRANSPARENT), src);
    }

    #[test]
    fn source_over_of_two_transparent_is_transparent() {
        assert_eq!(
            source_over(ColorValue::TRANSPARENT, ColorValue::TRANSPARENT),
            ColorValue::TRANSPARENT
        );
    }

    #[test]
    fn half_white_over_black_is_mid_gray() {
        let out = source_over(ColorValue::rgba(255, 255, 255, 128), ColorValue::BLACK);
        assert_eq!(out.a, 255);
        assert!((127..=129).contains(&out.r));
    }
}
