use crate::color::{Color, alpha_blend, alpha_blend_with_background};
use crate::error::{Error, Result};
use crate::geometry::Point;

/// A mutable 2D drawing target. Fills paint over whatever is already there.
pub trait DrawingSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fills the closed polygon through `points` (last point joins the first) using the
    /// nonzero winding rule.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// Row-major RGBA8 pixel buffer, transparent until drawn on.
///
/// Pixels are covered when their center lies inside a shape; there is no antialiasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::check_size(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; 4 * width as usize * height as usize],
        })
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        Self::check_size(width, height)?;
        let expected = 4 * width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn check_size(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::EmptySurface { width, height });
        }
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel_index(x, y).map(|index| {
            let mut rgba = [0; 4];
            rgba.copy_from_slice(&self.pixels[index..index + 4]);
            Color::from_rgba(rgba)
        })
    }

    pub fn clear(&mut self, color: Color) {
        let rgba = color.rgba();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Copies the surface into an RGBA frame of the same size, flattening translucent
    /// pixels onto `background`.
    pub fn copy_to_frame(&self, frame: &mut [u8], background: Color) {
        debug_assert_eq!(frame.len(), self.pixels.len());

        for (source, target) in self.pixels.chunks_exact(4).zip(frame.chunks_exact_mut(4)) {
            let color = Color::from_rgba([source[0], source[1], source[2], source[3]]);
            target.copy_from_slice(&alpha_blend_with_background(color, background).rgba());
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(4 * (y as usize * self.width as usize + x as usize))
        } else {
            None
        }
    }

    fn blend_pixel(&mut self, index: usize, color: Color) {
        let pixel = &mut self.pixels[index..index + 4];
        let below = Color::from_rgba([pixel[0], pixel[1], pixel[2], pixel[3]]);
        pixel.copy_from_slice(&alpha_blend(color, below).rgba());
    }

    // Covers the pixels of `row` whose centers lie in [left, right).
    fn fill_span(&mut self, row: u32, left: f32, right: f32, color: Color) {
        let start = self.clamp_column(left);
        let end = self.clamp_column(right);
        for col in start..end {
            if let Some(index) = self.pixel_index(col, row) {
                self.blend_pixel(index, color);
            }
        }
    }

    fn clamp_column(&self, x: f32) -> u32 {
        (x - 0.5).ceil().clamp(0.0, self.width as f32) as u32
    }

    // Rows whose centers lie in [top, bottom).
    fn rows_between(&self, top: f32, bottom: f32) -> std::ops::Range<u32> {
        let height = self.height as f32;
        let first = (top - 0.5).ceil().clamp(0.0, height) as u32;
        let last = (bottom - 0.5).ceil().clamp(0.0, height) as u32;
        first..last
    }
}

impl DrawingSurface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 || color.alpha() == 0 || !points.iter().all(Point::is_finite) {
            return;
        }

        let top = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let bottom = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

        let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(points.len());
        for row in self.rows_between(top, bottom) {
            let sample_y = row as f32 + 0.5;

            crossings.clear();
            for (i, &start) in points.iter().enumerate() {
                let end = points[(i + 1) % points.len()];
                let (upper, lower, winding) = if start.y < end.y {
                    (start, end, 1)
                } else {
                    (end, start, -1)
                };
                if sample_y < upper.y || sample_y >= lower.y {
                    continue;
                }
                let t = (sample_y - upper.y) / (lower.y - upper.y);
                crossings.push((upper.x + t * (lower.x - upper.x), winding));
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding != 0 {
                    self.fill_span(row, pair[0].0, pair[1].0, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if radius <= 0.0 || color.alpha() == 0 || !center.is_finite() || !radius.is_finite() {
            return;
        }

        for row in self.rows_between(center.y - radius, center.y + radius) {
            let dy = row as f32 + 0.5 - center.y;
            if dy.abs() >= radius {
                continue;
            }
            let half_width = (radius * radius - dy * dy).sqrt();
            self.fill_span(row, center.x - half_width, center.x + half_width, color);
        }
    }
}
