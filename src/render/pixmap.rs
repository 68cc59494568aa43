use std::path::Path;

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::foundation::error::MotionPlotResult;
use crate::render::plan::TextAnchor;
use crate::render::surface::DrawSurface;

/// Bundled software surface over a straight-alpha RGBA8 buffer.
///
/// Good enough for tests, demos, and PNG export of animation frames. The
/// rasterization is deliberately rudimentary: axis-aligned lines become
/// solid bands of their stroke width, diagonal lines a one-pixel walk, and
/// circles are center-sampled with a one-pixel border ring.
///
/// Text ops are acknowledged but not rasterized; font handling stays a host
/// concern. A skipped text op is reported at debug level and counted in
/// [`skipped_text_ops`](Self::skipped_text_ops).
#[derive(Clone)]
pub struct PixmapSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    skipped_text: usize,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("skipped_text", &self.skipped_text)
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// A fully transparent surface matching the canvas size.
    pub fn new(canvas: Canvas) -> Self {
        let len = canvas.width as usize * canvas.height as usize * 4;
        Self {
            width: canvas.width,
            height: canvas.height,
            pixels: vec![0; len],
            skipped_text: 0,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw straight-alpha RGBA8 pixels, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Number of text ops skipped since creation.
    pub fn skipped_text_ops(&self) -> usize {
        self.skipped_text
    }

    /// Encode the surface as a PNG in memory.
    pub fn png_bytes(&self) -> MotionPlotResult<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(anyhow::Error::new)?;
        Ok(out)
    }

    /// Encode and write the surface to `path` as a PNG.
    #[tracing::instrument(skip(self))]
    pub fn save_png(&self, path: impl AsRef<Path> + std::fmt::Debug) -> MotionPlotResult<()> {
        std::fs::write(path.as_ref(), self.png_bytes()?).map_err(anyhow::Error::new)?;
        Ok(())
    }

    fn put_px(&mut self, x: i64, y: i64, color: Rgb8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
        self.pixels[i + 3] = 0xff;
    }

    /// Fill pixels whose row is in `[y0, y1)` and column in `[x0, x1)` after
    /// rounding, clamped to the surface.
    fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb8) {
        let col0 = x0.round().max(0.0) as i64;
        let col1 = (x1.round() as i64).min(i64::from(self.width));
        let row0 = y0.round().max(0.0) as i64;
        let row1 = (y1.round() as i64).min(i64::from(self.height));
        for y in row0..row1 {
            for x in col0..col1 {
                self.put_px(x, y, color);
            }
        }
    }

    fn diagonal_line(&mut self, from: Point, to: Point, color: Rgb8) {
        // Classic integer Bresenham over rounded endpoints.
        let (mut x, mut y) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_px(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl DrawSurface for PixmapSurface {
    fn clear(&mut self, region: Rect, color: Rgb8) -> MotionPlotResult<()> {
        self.fill_rect(region.x0, region.y0, region.x1, region.y1, color);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Rgb8,
    ) -> MotionPlotResult<()> {
        let half = width.max(1.0) / 2.0;
        if from.y == to.y {
            let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
            self.fill_rect(x0, from.y - half, x1 + 1.0, from.y + half, color);
        } else if from.x == to.x {
            let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
            self.fill_rect(from.x - half, y0, from.x + half, y1 + 1.0, color);
        } else {
            self.diagonal_line(from, to, color);
        }
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Rgb8,
        border: Rgb8,
    ) -> MotionPlotResult<()> {
        if radius <= 0.0 || !radius.is_finite() {
            return Ok(());
        }
        let outer_sq = radius * radius;
        let inner = (radius - 1.0).max(0.0);
        let inner_sq = inner * inner;
        let y_lo = (center.y - radius).floor() as i64;
        let y_hi = (center.y + radius).ceil() as i64;
        let x_lo = (center.x - radius).floor() as i64;
        let x_hi = (center.x + radius).ceil() as i64;
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                // Sample at the pixel center.
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                let d_sq = dx * dx + dy * dy;
                if d_sq > outer_sq {
                    continue;
                }
                let color = if d_sq >= inner_sq { border } else { fill };
                self.put_px(x, y, color);
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        pos: Point,
        content: &str,
        _anchor: TextAnchor,
        _rotation_rad: f64,
    ) -> MotionPlotResult<()> {
        self.skipped_text += 1;
        tracing::debug!(x = pos.x, y = pos.y, content, "pixmap surface skips text ops");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pixmap.rs"]
mod tests;
