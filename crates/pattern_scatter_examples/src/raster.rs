use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::DVec2;
use image::RgbaImage;
use pattern_scatter::generators::fill::FillRegion;
use pattern_scatter::prelude::*;

/// Alpha at or above which a pixel counts as part of the silhouette.
const ALPHA_THRESHOLD: u8 = 128;
/// Opaque pixels brighter than this are treated as background.
const LUMA_THRESHOLD: f64 = 235.0;

/// PNG images keyed by asset id; backs the image-fill style.
#[derive(Default, Clone)]
pub struct PngRasters {
    images: HashMap<String, Arc<RgbaImage>>,
}

impl PngRasters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_png(&mut self, id: impl Into<String>, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let img = image::open(path.as_ref())?.to_rgba8();
        self.insert(id, img);
        Ok(())
    }

    pub fn insert(&mut self, id: impl Into<String>, img: RgbaImage) {
        self.images.insert(id.into(), Arc::new(img));
    }
}

fn is_silhouette(px: &image::Rgba<u8>) -> bool {
    let [r, g, b, a] = px.0;
    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    a >= ALPHA_THRESHOLD && luma < LUMA_THRESHOLD
}

impl RasterSource for PngRasters {
    fn prepare(
        &self,
        config: &LayerConfig,
        width: f64,
        height: f64,
    ) -> pattern_scatter::error::Result<Box<dyn RasterLookup>> {
        let options = &config.image_fill_options;
        let id = options
            .asset_id
            .as_deref()
            .ok_or_else(|| Error::RasterUnavailable("image fill has no asset id".into()))?;
        let img = self
            .images
            .get(id)
            .cloned()
            .ok_or_else(|| Error::RasterUnavailable(format!("unknown image asset '{id}'")))?;
        if img.width() == 0 || img.height() == 0 {
            return Err(Error::RasterUnavailable(format!("image asset '{id}' is empty")));
        }
        let region = FillRegion::for_image(options, width, height);
        let extent = region.max - region.min;
        let pixels = DVec2::new(img.width() as f64, img.height() as f64);
        Ok(Box::new(move |x: f64, y: f64| {
            let uv = (DVec2::new(x, y) - region.min) / extent;
            if !(0.0..1.0).contains(&uv.x) || !(0.0..1.0).contains(&uv.y) {
                return RasterSample::outside();
            }
            let p = (uv * pixels).floor();
            let px = img.get_pixel(p.x as u32, p.y as u32);
            if !is_silhouette(px) {
                return RasterSample::outside();
            }
            let [r, g, b, _] = px.0;
            RasterSample::inside().with_color(format!("#{r:02x}{g:02x}{b:02x}"))
        }))
    }
}

/// Text silhouette from a built-in 5×7 bitmap font; backs the text-fill style.
///
/// Covers `A`–`Z`, `0`–`9` and space; lowercase maps to uppercase and other characters
/// render as a solid block.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmapTextMask;

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;

fn glyph_rows(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'B' => [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e],
        'C' => [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e],
        'D' => [0x1e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1e],
        'E' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f],
        'F' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10],
        'G' => [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f],
        'H' => [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'I' => [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f],
        'M' => [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e],
        'P' => [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10],
        'Q' => [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d],
        'R' => [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11],
        'S' => [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e],
        'T' => [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a],
        'X' => [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0a, 0x04, 0x04, 0x04],
        'Z' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f],
        '0' => [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e],
        '1' => [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e],
        '2' => [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f],
        '3' => [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e],
        '4' => [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02],
        '5' => [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e],
        '6' => [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e],
        '7' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e],
        '9' => [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c],
        _ => [0x1f; 7],
    }
}

/// Whether the glyph cell `(col, row)` is lit.
fn glyph_bit(c: char, col: usize, row: usize) -> bool {
    col < GLYPH_COLS && row < GLYPH_ROWS && glyph_rows(c)[row] & (1 << (GLYPH_COLS - 1 - col)) != 0
}

impl RasterSource for BitmapTextMask {
    fn prepare(
        &self,
        config: &LayerConfig,
        width: f64,
        height: f64,
    ) -> pattern_scatter::error::Result<Box<dyn RasterLookup>> {
        let options = &config.text_fill_options;
        let lines: Vec<Vec<char>> = options.text.lines().map(|l| l.chars().collect()).collect();
        if lines.iter().all(|l| l.iter().all(|c| c.is_whitespace())) {
            return Err(Error::RasterUnavailable("text fill has no visible characters".into()));
        }
        let region = FillRegion::for_text(options, width, height);
        let widest = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);
        // Advance is six glyph columns: five lit plus one of spacing.
        let advance = (region.max.x - region.min.x) / widest as f64;
        let line_px = (region.max.y - region.min.y) / lines.len().max(1) as f64;
        Ok(Box::new(move |x: f64, y: f64| {
            let local = DVec2::new(x, y) - region.min;
            if local.x < 0.0 || local.y < 0.0 {
                return RasterSample::outside();
            }
            let line = (local.y / line_px) as usize;
            let Some(chars) = lines.get(line) else {
                return RasterSample::outside();
            };
            // Centre shorter lines under the widest one.
            let pad = (widest - chars.len()) as f64 * advance * 0.5;
            let lx = local.x - pad;
            if lx < 0.0 {
                return RasterSample::outside();
            }
            let Some(&c) = chars.get((lx / advance) as usize) else {
                return RasterSample::outside();
            };
            let col = ((lx % advance) / advance * (GLYPH_COLS + 1) as f64) as usize;
            let row = ((local.y % line_px) / line_px * GLYPH_ROWS as f64) as usize;
            if glyph_bit(c, col, row) {
                RasterSample::inside()
            } else {
                RasterSample::outside()
            }
        }))
    }
}
