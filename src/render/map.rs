//! World map of enriched IPs.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::{debug, info};

use super::canvas::Canvas;
use super::font::{text_width, GLYPH_HEIGHT};
use super::world;
use crate::error_handling::RenderError;
use crate::models::{EnrichedIp, Service};

const PAGE: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const LAND: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const WATER: Rgb<u8> = Rgb([0x00, 0x22, 0x44]);
const COASTLINE: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const BORDER: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const LABEL: Rgb<u8> = Rgb([0x80, 0x80, 0x80]);
const APACHE_MARKER: Rgb<u8> = Rgb([0xff, 0x00, 0x00]);
const SSHD_MARKER: Rgb<u8> = Rgb([0xff, 0xff, 0x00]);

/// Point sizes, converted to pixels with the DPI.
const MARKER_SIZE_PT: f64 = 0.5;
const ANNOTATION_SIZE_PT: f64 = 5.0;
const TITLE_SIZE_PT: f64 = 12.0;

/// Anchor of the first annotation and the spacing below it, in degrees
const ANNOTATION_LONGITUDE: f64 = -175.0;
const ANNOTATION_LATITUDES: [f64; 4] = [-15.0, -20.0, -25.0, -30.0];

/// Rendering options.
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub dpi: u32,
    pub figure_width_inches: f64,
    /// Equirectangular world raster replacing the built-in outlines.
    /// Blue-dominant pixels are water (oceans and lakes), near-white pixels
    /// are borders, anything else is land.
    pub basemap: Option<PathBuf>,
    pub title: String,
}

/// Run totals printed in the lower left of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSummary {
    pub total_hits: usize,
    pub total_unique: usize,
    pub known: usize,
    pub unknown: usize,
}

impl MapSummary {
    fn lines(&self) -> [String; 4] {
        [
            format!("Total Hits: {}", self.total_hits),
            format!("Total Unique: {}", self.total_unique),
            format!("Known Location: {}", self.known),
            format!("UnKnown Location: {}", self.unknown),
        ]
    }
}

/// Renders the map and saves it as a PNG at `path`.
///
/// # Returns
///
/// The number of markers drawn.
pub fn render_map(
    path: &Path,
    entries: &[EnrichedIp],
    summary: &MapSummary,
    options: &MapOptions,
) -> Result<usize, RenderError> {
    let (image, markers) = draw_map(entries, summary, options)?;
    save_png(path, &image, options.dpi)?;
    info!(
        "Map saved to {} ({}x{}, {} markers)",
        path.display(),
        image.width(),
        image.height(),
        markers
    );
    Ok(markers)
}

/// Draws the map in memory.
pub fn draw_map(
    entries: &[EnrichedIp],
    summary: &MapSummary,
    options: &MapOptions,
) -> Result<(RgbImage, usize), RenderError> {
    let dpi = f64::from(options.dpi);
    let width = (options.figure_width_inches * dpi).round();
    let width = if width.is_finite() && width > 0.0 && width < f64::from(u32::MAX) {
        width as u32
    } else {
        0
    };

    let title_scale = points_to_scale(TITLE_SIZE_PT, dpi);
    let padding = title_scale * 2;
    let title_band = GLYPH_HEIGHT * title_scale + 2 * padding;

    let mut canvas = Canvas::new(width, title_band, PAGE)?;

    let (map_width, map_height) = (canvas.map_width(), canvas.map_height());
    let surface = match &options.basemap {
        Some(path) => SurfaceGrid::from_raster(path, map_width, map_height)?,
        None => SurfaceGrid::from_outlines(map_width, map_height),
    };
    surface.paint(&mut canvas);

    let marker_radius = ((MARKER_SIZE_PT * dpi / 72.0).round() as i64).max(1);
    let mut markers = 0;
    for entry in entries {
        let Some((lon, lat)) = entry.plot_coordinates() else {
            continue;
        };
        let (x, y) = canvas.project(lon, lat);
        match entry.service {
            Service::Apache => canvas.triangle(x, y, marker_radius, true, APACHE_MARKER),
            Service::Sshd => canvas.triangle(x, y, marker_radius, false, SSHD_MARKER),
        }
        markers += 1;
    }
    debug!("Plotted {} of {} entries", markers, entries.len());

    let annotation_scale = points_to_scale(ANNOTATION_SIZE_PT, dpi);
    for (line, lat) in summary.lines().iter().zip(ANNOTATION_LATITUDES) {
        let (x, y) = canvas.project(ANNOTATION_LONGITUDE, lat);
        canvas.text(x, y, line, annotation_scale, LABEL);
    }

    let title_width = text_width(&options.title, title_scale);
    let title_x = (i64::from(canvas.map_width()) - i64::from(title_width)) / 2;
    let title_baseline = i64::from(canvas.map_top() - padding) - 1;
    canvas.text(title_x.max(0), title_baseline, &options.title, title_scale, LABEL);

    Ok((canvas.into_image(), markers))
}

/// Pixel multiplier that makes a 7-row glyph roughly `points` tall.
fn points_to_scale(points: f64, dpi: f64) -> u32 {
    let pixels = points * dpi / 72.0;
    ((pixels / f64::from(GLYPH_HEIGHT)).round() as u32).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Water,
    Land,
    Border,
}

fn classify(pixel: &Rgb<u8>) -> Surface {
    let [r, g, b] = pixel.0.map(i32::from);
    if b > r + 16 && b >= g {
        Surface::Water
    } else if r.min(g).min(b) >= 200 {
        Surface::Border
    } else {
        Surface::Land
    }
}

/// Row-major surface grid of the map area, `width * height` cells.
struct SurfaceGrid {
    width: u32,
    height: u32,
    cells: Vec<Surface>,
}

impl SurfaceGrid {
    fn from_raster(path: &Path, width: u32, height: u32) -> Result<Self, RenderError> {
        let source = image::open(path)
            .map_err(|source| RenderError::Basemap {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();
        let scaled = imageops::resize(&source, width, height, FilterType::Triangle);
        Ok(SurfaceGrid {
            width,
            height,
            cells: scaled.pixels().map(classify).collect(),
        })
    }

    fn from_outlines(width: u32, height: u32) -> Self {
        let mut grid = SurfaceGrid {
            width,
            height,
            cells: vec![Surface::Water; width as usize * height as usize],
        };
        for ring in world::LAND {
            grid.fill_ring(ring, Surface::Land);
        }
        for ring in world::LAKES {
            grid.fill_ring(ring, Surface::Water);
        }
        for line in world::BORDERS {
            for pair in line.windows(2) {
                grid.trace_border(pair[0], pair[1]);
            }
        }
        grid
    }

    fn at(&self, x: u32, y: u32) -> Surface {
        self.cells[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: u32, y: u32, surface: Surface) {
        self.cells[(y * self.width + x) as usize] = surface;
    }

    /// Same plate carrée mapping as `Canvas::project`, in fractional cells.
    fn to_cell(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            (lon + 180.0) / 360.0 * f64::from(self.width - 1),
            (90.0 - lat) / 180.0 * f64::from(self.height - 1),
        )
    }

    /// Even-odd scanline fill of a closed ring.
    fn fill_ring(&mut self, ring: &[(f64, f64)], surface: Surface) {
        let mut crossings: Vec<f64> = Vec::new();
        for y in 0..self.height {
            let lat = 90.0 - f64::from(y) / f64::from(self.height - 1) * 180.0;
            crossings.clear();
            for (i, &(lon_a, lat_a)) in ring.iter().enumerate() {
                let (lon_b, lat_b) = ring[(i + 1) % ring.len()];
                if (lat_a > lat) != (lat_b > lat) {
                    crossings.push(lon_a + (lat - lat_a) * (lon_b - lon_a) / (lat_b - lat_a));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let (x0, _) = self.to_cell(span[0], lat);
                let (x1, _) = self.to_cell(span[1], lat);
                let first = x0.ceil().max(0.0) as u32;
                let last = (x1.floor() as i64).min(i64::from(self.width) - 1);
                for x in i64::from(first)..=last {
                    self.set(x as u32, y, surface);
                }
            }
        }
    }

    /// Marks the land cells along a border segment.
    fn trace_border(&mut self, from: (f64, f64), to: (f64, f64)) {
        let (x0, y0) = self.to_cell(from.0, from.1);
        let (x1, y1) = self.to_cell(to.0, to.1);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            let x = (x0 + (x1 - x0) * t).round();
            let y = (y0 + (y1 - y0) * t).round();
            if x < 0.0 || y < 0.0 || x >= f64::from(self.width) || y >= f64::from(self.height) {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            if self.at(x, y) == Surface::Land {
                self.set(x, y, Surface::Border);
            }
        }
    }

    /// Water with land on any side.
    fn is_coast(&self, x: u32, y: u32) -> bool {
        [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ]
        .iter()
        .any(|&(nx, ny)| nx < self.width && ny < self.height && self.at(nx, ny) != Surface::Water)
    }

    fn paint(&self, canvas: &mut Canvas) {
        for y in 0..self.height {
            for x in 0..self.width {
                let color = match self.at(x, y) {
                    Surface::Land => LAND,
                    Surface::Border => BORDER,
                    Surface::Water if self.is_coast(x, y) => COASTLINE,
                    Surface::Water => WATER,
                };
                canvas.put_map(x, y, color);
            }
        }
    }
}

fn save_png(path: &Path, image: &RgbImage, dpi: u32) -> Result<(), RenderError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let pixels_per_meter = (f64::from(dpi) / 0.0254).round() as u32;
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}
