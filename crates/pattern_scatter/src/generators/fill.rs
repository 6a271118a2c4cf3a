//! Mosaic fill: a jittered sampling grid filtered through a [`RasterLookup`].
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;

use crate::config::{FillColorMode, ImageFillOptions, TextFillOptions};
use crate::generators::raster::RasterLookup;
use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::{rand01, rand_range};
use crate::shape::ShapeData;

/// Chance that an inside sample is dropped for organic coverage.
pub const DROP_CHANCE: f64 = 0.15;
const TEXT_STEP: f64 = 0.8;
const IMAGE_STEP: f64 = 0.75;
/// Average glyph advance relative to the font size.
const GLYPH_ADVANCE: f64 = 0.6;

/// Axis-aligned sampling region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillRegion {
    pub min: DVec2,
    pub max: DVec2,
}

impl FillRegion {
    /// Region of `size` centred on the canvas, clipped to it.
    pub fn centered(width: f64, height: f64, size: DVec2) -> Self {
        let canvas = DVec2::new(width, height);
        let half = size.min(canvas) * 0.5;
        let c = canvas * 0.5;
        Self {
            min: c - half,
            max: c + half,
        }
    }

    /// Estimated bounds of the rendered text block.
    pub fn for_text(options: &TextFillOptions, width: f64, height: f64) -> Self {
        let font_px = options.font_size * height;
        let lines: Vec<&str> = options.text.lines().collect();
        let chars = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let size = DVec2::new(
            chars as f64 * font_px * GLYPH_ADVANCE,
            lines.len() as f64 * font_px * options.line_height,
        );
        Self::centered(width, height, size)
    }

    /// Canvas inset so the region covers `coverage` of each axis.
    pub fn for_image(options: &ImageFillOptions, width: f64, height: f64) -> Self {
        let coverage = options.coverage.clamp(0.0, 1.0);
        Self::centered(width, height, DVec2::new(width, height) * coverage)
    }

    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }
}

fn element_size(ctx: &GenerateContext<'_>) -> f64 {
    ctx.min_side() / 40.0 * ctx.config.effective_scale()
}

fn sample_region(
    ctx: &GenerateContext<'_>,
    rng: &mut dyn RngCore,
    lookup: &dyn RasterLookup,
    region: FillRegion,
    step_factor: f64,
    raw_colors: bool,
) -> Vec<ShapeData> {
    let element = element_size(ctx);
    if region.is_empty() || element <= 0.0 {
        return Vec::new();
    }
    let step = element * step_factor;
    let cols = ((region.max.x - region.min.x) / step).ceil() as u32;
    let rows = ((region.max.y - region.min.y) / step).ceil() as u32;
    let brush = Brush::new(ctx.config);

    let mut shapes = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let x = region.min.x + (col as f64 + 0.5) * step + (rand01(rng) - 0.5) * step;
            let y = region.min.y + (row as f64 + 0.5) * step + (rand01(rng) - 0.5) * step;
            let hit = lookup.sample(x, y);
            if !hit.inside || rand01(rng) < DROP_CHANCE {
                continue;
            }
            let (kind, asset) = brush.kind(rng);
            let size = rand_range(rng, 0.6, 1.2) * element;
            let rotation = rand01(rng) * TAU;
            let stroke = brush.stroke(rng);
            let color = match hit.color {
                Some(c) if raw_colors => c,
                _ => brush.color(rng),
            };
            let mut shape = ShapeData::new(shapes.len() as u32, kind, x, y, size)
                .with_rotation(rotation)
                .with_stroke(stroke)
                .with_color(color);
            if let Some(asset) = asset {
                shape = shape.with_asset(asset);
            }
            shapes.push(shape);
        }
    }
    shapes
}

/// Fills the silhouette of `text_fill_options.text`.
pub struct TextFillGenerator<'a> {
    lookup: &'a dyn RasterLookup,
}

impl<'a> TextFillGenerator<'a> {
    pub fn new(lookup: &'a dyn RasterLookup) -> Self {
        Self { lookup }
    }
}

impl StyleGenerator for TextFillGenerator<'_> {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let region = FillRegion::for_text(&ctx.config.text_fill_options, ctx.width, ctx.height);
        sample_region(ctx, rng, self.lookup, region, TEXT_STEP, false)
    }
}

/// Fills the opaque area of an image, optionally keeping its pixel colors.
pub struct ImageFillGenerator<'a> {
    lookup: &'a dyn RasterLookup,
}

impl<'a> ImageFillGenerator<'a> {
    pub fn new(lookup: &'a dyn RasterLookup) -> Self {
        Self { lookup }
    }
}

impl StyleGenerator for ImageFillGenerator<'_> {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let options = &ctx.config.image_fill_options;
        let region = FillRegion::for_image(options, ctx.width, ctx.height);
        let raw = options.color_mode == FillColorMode::Raw;
        sample_region(ctx, rng, self.lookup, region, IMAGE_STEP, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayerConfig, Style};
    use crate::generators::raster::RasterSample;
    use crate::rng::SeededRng;

    fn disc(x: f64, y: f64) -> RasterSample {
        if (x - 200.0).powi(2) + (y - 200.0).powi(2) < 100.0 * 100.0 {
            RasterSample::inside().with_color("#abcdef")
        } else {
            RasterSample::outside()
        }
    }

    #[test]
    fn text_region_estimate() {
        let options = TextFillOptions::new("AB\nCDEF");
        let r = FillRegion::for_text(&options, 1000.0, 100.0);
        // 4 chars × 35px × 0.6 wide, 2 lines × 35px × 1.2 high.
        assert!((r.max.x - r.min.x - 84.0).abs() < 1e-9);
        assert!((r.max.y - r.min.y - 84.0).abs() < 1e-9);
        assert!((r.min.x + r.max.x - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn only_inside_samples_survive() {
        let config = LayerConfig::new(10, Style::ImageFill);
        let ctx = GenerateContext::new(400.0, 400.0, &config);
        let shapes = ImageFillGenerator::new(&disc).generate(&ctx, &mut SeededRng::new(10));
        assert!(!shapes.is_empty());
        for (i, s) in shapes.iter().enumerate() {
            assert_eq!(s.index, i as u32);
            assert!(disc(s.x, s.y).inside);
            assert!((6.0..12.0).contains(&s.size));
            assert_ne!(s.color, "#abcdef");
        }
        // Roughly 85% of the ~π·100²/7.5² grid points inside the disc.
        let expected = std::f64::consts::PI * 100.0 * 100.0 / (7.5 * 7.5) * 0.85;
        let ratio = shapes.len() as f64 / expected;
        assert!((0.8..1.2).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn raw_mode_keeps_source_colors() {
        let config = LayerConfig::new(10, Style::ImageFill).with_image_fill(
            ImageFillOptions::default().with_color_mode(FillColorMode::Raw),
        );
        let ctx = GenerateContext::new(400.0, 400.0, &config);
        let shapes = ImageFillGenerator::new(&disc).generate(&ctx, &mut SeededRng::new(10));
        assert!(shapes.iter().all(|s| s.color == "#abcdef"));
    }

    #[test]
    fn empty_text_fills_nothing() {
        let config =
            LayerConfig::new(10, Style::TextFill).with_text_fill(TextFillOptions::new(""));
        let ctx = GenerateContext::new(400.0, 400.0, &config);
        let everywhere = |_: f64, _: f64| RasterSample::inside();
        let shapes = TextFillGenerator::new(&everywhere).generate(&ctx, &mut SeededRng::new(1));
        assert!(shapes.is_empty());
    }
}
