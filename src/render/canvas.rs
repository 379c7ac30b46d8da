//! Equirectangular drawing surface.

use image::{Rgb, RgbImage};

use super::font::{glyph, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::error_handling::RenderError;

/// Upper bound on canvas pixels (a 1200 DPI, 10 inch wide map is ~72M).
const MAX_PIXELS: u64 = 80_000_000;

/// An RGB image whose lower part is a plate carrée world map.
///
/// Rows `0..map_top` form the title band; the map spans longitude -180..180
/// left to right and latitude 90..-90 top to bottom below it.
pub struct Canvas {
    image: RgbImage,
    map_top: u32,
    map_width: u32,
    map_height: u32,
}

impl Canvas {
    pub fn new(map_width: u32, title_band: u32, background: Rgb<u8>) -> Result<Self, RenderError> {
        let map_height = map_width / 2;
        let height = map_height.saturating_add(title_band);
        if map_width < 2 || map_height < 2 || u64::from(map_width) * u64::from(height) > MAX_PIXELS {
            return Err(RenderError::CanvasSize {
                width: map_width,
                height,
            });
        }
        Ok(Canvas {
            image: RgbImage::from_pixel(map_width, height, background),
            map_top: title_band,
            map_width,
            map_height,
        })
    }

    pub fn map_top(&self) -> u32 {
        self.map_top
    }

    pub fn map_width(&self) -> u32 {
        self.map_width
    }

    pub fn map_height(&self) -> u32 {
        self.map_height
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    #[cfg(test)]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Pixel position of a coordinate. Values outside the valid range are
    /// clamped to the map edge.
    pub fn project(&self, longitude: f64, latitude: f64) -> (i64, i64) {
        let lon = longitude.clamp(-180.0, 180.0);
        let lat = latitude.clamp(-90.0, 90.0);
        let x = (lon + 180.0) / 360.0 * f64::from(self.map_width - 1);
        let y = (90.0 - lat) / 180.0 * f64::from(self.map_height - 1);
        (x.round() as i64, i64::from(self.map_top) + y.round() as i64)
    }

    /// Sets a pixel, ignoring positions off the canvas.
    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Sets a pixel of the map area by map-relative position.
    pub fn put_map(&mut self, x: u32, y: u32, color: Rgb<u8>) {
        self.put(i64::from(x), i64::from(self.map_top + y), color);
    }

    /// Filled isosceles triangle centred on `(cx, cy)` with half-size `r`,
    /// tip pointing right when `right` is true and left otherwise.
    pub fn triangle(&mut self, cx: i64, cy: i64, r: i64, right: bool, color: Rgb<u8>) {
        for step in -r..=r {
            // Distance from the base: 0 at the base, 2r at the tip
            let from_base = (step + r) as f64;
            let half = ((2 * r) as f64 - from_base) / 2.0;
            let half = half.round() as i64;
            let dx = if right { step } else { -step };
            for dy in -half..=half {
                self.put(cx + dx, cy + dy, color);
            }
        }
    }

    /// Draws `text` with its bottom-left corner at `(x, y)`.
    pub fn text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
        let scale = i64::from(scale.max(1));
        let top = y - i64::from(GLYPH_HEIGHT) * scale + 1;
        let mut left = x;
        for c in text.chars() {
            let rows = glyph(c);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let px = left + i64::from(col) * scale;
                    let py = top + row as i64 * scale;
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.put(px + sx, py + sy, color);
                        }
                    }
                }
            }
            left += i64::from(GLYPH_ADVANCE) * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn test_dimensions() {
        let canvas = Canvas::new(720, 40, BLACK).unwrap();
        assert_eq!(canvas.map_height(), 360);
        assert_eq!(canvas.image().height(), 400);
        assert_eq!(canvas.image().width(), 720);
    }

    #[test]
    fn test_rejects_degenerate_size() {
        assert!(matches!(
            Canvas::new(1, 0, BLACK),
            Err(RenderError::CanvasSize { .. })
        ));
        assert!(matches!(
            Canvas::new(100_000, 0, BLACK),
            Err(RenderError::CanvasSize { .. })
        ));
    }

    #[test]
    fn test_projection_corners() {
        let canvas = Canvas::new(361, 10, BLACK).unwrap();
        // map is 361 x 180
        assert_eq!(canvas.project(-180.0, 90.0), (0, 10));
        assert_eq!(canvas.project(180.0, -90.0), (360, 10 + 179));
        assert_eq!(canvas.project(0.0, 0.0), (180, 10 + 90));
        assert_eq!(canvas.project(500.0, -500.0), canvas.project(180.0, -90.0));
    }

    #[test]
    fn test_put_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(10, 0, BLACK).unwrap();
        canvas.put(-1, 0, RED);
        canvas.put(0, 100, RED);
        assert!(canvas.image().pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn test_triangle_points_the_right_way() {
        let mut canvas = Canvas::new(40, 0, BLACK).unwrap();
        canvas.triangle(10, 10, 3, true, RED);
        // Tip to the right, full height at the base on the left
        assert_eq!(*canvas.image().get_pixel(13, 10), RED);
        assert_eq!(*canvas.image().get_pixel(7, 13), RED);
        assert_eq!(*canvas.image().get_pixel(13, 13), BLACK);

        let mut canvas = Canvas::new(40, 0, BLACK).unwrap();
        canvas.triangle(10, 10, 3, false, RED);
        assert_eq!(*canvas.image().get_pixel(7, 10), RED);
        assert_eq!(*canvas.image().get_pixel(13, 13), RED);
        assert_eq!(*canvas.image().get_pixel(7, 13), BLACK);
    }

    #[test]
    fn test_text_is_drawn_above_baseline() {
        let mut canvas = Canvas::new(100, 0, BLACK).unwrap();
        canvas.text(2, 20, "1", 1, RED);
        let drawn: Vec<(u32, u32)> = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == RED)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!drawn.is_empty());
        assert!(drawn.iter().all(|(_, y)| *y <= 20 && *y >= 14));
        assert!(drawn.iter().all(|(x, _)| *x >= 2 && *x < 7));
    }
}
