//! Style generators that turn a layer configuration into an ordered shape sequence.
//!
//! Every generator implements [`StyleGenerator`]. Generators are pure: they read only the
//! [`GenerateContext`] and draw only from the RNG they are handed. The number and order of
//! draws per shape is part of the output format.
use std::f64::consts::{FRAC_PI_2, PI};

use rand::RngCore;

use crate::config::{LayerConfig, COMPLEXITY_RANGE};
use crate::rng::{pick, rand01, rand_range};
use crate::shape::{AssetId, Color, ShapeKind};

pub mod fill;
pub mod grid;
pub mod guilloche;
pub mod herringbone;
pub mod hex;
pub mod isometric;
pub mod mosaic;
pub mod pool;
pub mod radial;
pub mod raster;
pub mod scatter;
pub mod truchet;
pub mod waves;

pub use fill::{ImageFillGenerator, TextFillGenerator};
pub use grid::GridGenerator;
pub use guilloche::GuillocheGenerator;
pub use herringbone::HerringboneGenerator;
pub use hex::HexGenerator;
pub use isometric::IsometricGenerator;
pub use mosaic::MosaicGenerator;
pub use radial::RadialGenerator;
pub use raster::{RasterLookup, RasterSample, RasterSource};
pub use scatter::ScatterGenerator;
pub use truchet::TruchetGenerator;
pub use waves::WavesGenerator;

use crate::shape::ShapeData;

/// Inputs shared by every generator for one call.
#[derive(Clone, Copy, Debug)]
pub struct GenerateContext<'a> {
    pub width: f64,
    pub height: f64,
    /// `min(width, height) * scale / 10`, the tiling unit.
    pub base_size: f64,
    pub config: &'a LayerConfig,
}

impl<'a> GenerateContext<'a> {
    pub fn new(width: f64, height: f64, config: &'a LayerConfig) -> Self {
        Self {
            width,
            height,
            base_size: width.min(height) * config.effective_scale() / 10.0,
            config,
        }
    }

    /// True when the canvas or complexity cannot produce shapes.
    pub fn is_degenerate(&self) -> bool {
        !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
            || self.config.complexity <= 0
    }

    /// Complexity floored at 0 and capped at the top of [`COMPLEXITY_RANGE`].
    pub fn complexity(&self) -> u32 {
        self.config.complexity.clamp(0, COMPLEXITY_RANGE.1) as u32
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Trait for style generators.
pub trait StyleGenerator: Send + Sync {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData>;
}

/// Quarter turns in radians.
pub(crate) const QUARTER_TURNS: [f64; 4] = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];

/// Per-shape styling draws shared across generators.
pub(crate) struct Brush<'a> {
    config: &'a LayerConfig,
    kinds: &'a [ShapeKind],
    assets: Vec<&'a str>,
}

impl<'a> Brush<'a> {
    pub fn new(config: &'a LayerConfig) -> Self {
        Self {
            config,
            kinds: pool::resolve_kinds(config.style, &config.style_options),
            assets: config.custom_image.enabled_ids(),
        }
    }

    pub fn has_assets(&self) -> bool {
        !self.assets.is_empty()
    }

    /// Kind (and asset) for the next shape; exactly one draw.
    pub fn kind(&self, rng: &mut dyn RngCore) -> (ShapeKind, Option<AssetId>) {
        if self.has_assets() {
            let id = pick(rng, &self.assets).map(|id| id.to_string());
            return (ShapeKind::Image, id);
        }
        let kind = pick(rng, self.kinds).copied().unwrap_or(ShapeKind::Circle);
        (kind, None)
    }

    /// Palette color; exactly one draw.
    pub fn color(&self, rng: &mut dyn RngCore) -> Color {
        self.config.palette.pick(rng)
    }

    /// Stroke flag; one draw in random mode, none otherwise.
    pub fn stroke(&self, rng: &mut dyn RngCore) -> bool {
        self.config.stroke_mode.resolve(rng)
    }

    /// Speed factor and phase offset; two draws.
    pub fn animation(&self, rng: &mut dyn RngCore) -> (f64, f64) {
        let speed = rand_range(rng, 0.5, 1.5);
        let phase = rand01(rng) * 2.0 * PI;
        (speed, phase)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::{CustomImages, Style};
    use crate::rng::SeededRng;

    /// Indices unique and strictly increasing.
    pub(crate) fn assert_indices_increasing(shapes: &[ShapeData]) {
        let mut seen = HashSet::new();
        let mut last: Option<u32> = None;
        for s in shapes {
            assert!(seen.insert(s.index), "duplicate index {}", s.index);
            if let Some(prev) = last {
                assert!(s.index > prev);
            }
            last = Some(s.index);
        }
    }

    #[test]
    fn context_base_size_uses_effective_scale() {
        let config = LayerConfig::new(1, Style::Hex).with_scale(2.0);
        let ctx = GenerateContext::new(400.0, 300.0, &config);
        assert_eq!(ctx.base_size, 60.0);
    }

    #[test]
    fn degenerate_context_detection() {
        let config = LayerConfig::new(1, Style::Grid).with_complexity(0);
        assert!(GenerateContext::new(100.0, 100.0, &config).is_degenerate());
        let config = LayerConfig::new(1, Style::Grid);
        assert!(GenerateContext::new(0.0, 100.0, &config).is_degenerate());
        assert!(GenerateContext::new(100.0, -1.0, &config).is_degenerate());
        assert!(!GenerateContext::new(100.0, 100.0, &config).is_degenerate());
    }

    #[test]
    fn complexity_is_capped_for_generation() {
        let huge = LayerConfig::new(1, Style::Geometric).with_complexity(1_000_000);
        assert_eq!(GenerateContext::new(100.0, 100.0, &huge).complexity(), 200);
        let negative = LayerConfig::new(1, Style::Geometric).with_complexity(-5);
        assert_eq!(GenerateContext::new(100.0, 100.0, &negative).complexity(), 0);
        let within = LayerConfig::new(1, Style::Geometric).with_complexity(37);
        assert_eq!(GenerateContext::new(100.0, 100.0, &within).complexity(), 37);

        let shapes = ScatterGenerator.generate(
            &GenerateContext::new(400.0, 400.0, &huge),
            &mut SeededRng::new(1),
        );
        assert_eq!(shapes.len(), 200);
    }

    #[test]
    fn brush_prefers_enabled_assets() {
        let config =
            LayerConfig::new(3, Style::Geometric).with_custom_images(CustomImages::new(["x", "y"]));
        let brush = Brush::new(&config);
        let mut rng = SeededRng::new(3);
        for _ in 0..10 {
            let (kind, asset) = brush.kind(&mut rng);
            assert_eq!(kind, ShapeKind::Image);
            assert!(matches!(asset.as_deref(), Some("x") | Some("y")));
        }
    }
}
