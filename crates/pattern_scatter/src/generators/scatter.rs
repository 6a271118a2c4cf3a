//! Free scatter through the composition positioner.
//!
//! Shared by the geometric, organic, bauhaus, confetti, memphis, typo and seasonal styles;
//! they differ only in their allow-list and a few per-style draws.
use std::f64::consts::TAU;

use mint::Vector2;
use rand::RngCore;

use crate::config::Style;
use crate::generators::pool::TYPO_CHARSET;
use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::{pick, rand01, rand_range};
use crate::shape::{ShapeData, ShapeKind};

/// Size range before scaling.
pub const SCATTER_SIZE_RANGE: (f64, f64) = (20.0, 80.0);

#[derive(Debug, Clone, Default)]
pub struct ScatterGenerator;

impl StyleGenerator for ScatterGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let config = ctx.config;
        let extent = Vector2 {
            x: ctx.width,
            y: ctx.height,
        };
        let scale = config.effective_scale();
        let size_factor = if config.style == Style::Confetti {
            0.5
        } else {
            1.0
        };
        let brush = Brush::new(config);

        (0..ctx.complexity())
            .map(|index| {
                let p = config
                    .composition
                    .sample(extent, &config.composition_options, rng);
                let (kind, asset) = brush.kind(rng);
                let size = rand_range(rng, SCATTER_SIZE_RANGE.0, SCATTER_SIZE_RANGE.1)
                    * scale
                    * size_factor;
                let rotation = rand01(rng) * TAU;

                let mut shape = ShapeData::new(index, kind, p.x, p.y, size).with_rotation(rotation);
                if config.style == Style::Typo {
                    let glyph = pick(rng, TYPO_CHARSET).copied().unwrap_or('A');
                    if kind == ShapeKind::Glyph {
                        shape = shape.with_glyph(glyph);
                    }
                }
                if config.style == Style::Organic {
                    let seed = (rand01(rng) * (u32::MAX as f64 + 1.0)) as u32;
                    shape = shape.with_seed(seed);
                }
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase) = brush.animation(rng);
                shape = shape
                    .with_color(color)
                    .with_stroke(stroke)
                    .with_animation(speed, phase);
                if let Some(asset) = asset {
                    shape = shape.with_asset(asset);
                }
                shape
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::Composition;
    use crate::config::{CustomImages, LayerConfig, StyleOptions};
    use crate::generators::pool::default_kinds;
    use crate::rng::SeededRng;

    fn run(config: &LayerConfig) -> Vec<ShapeData> {
        let ctx = GenerateContext::new(600.0, 400.0, config);
        ScatterGenerator.generate(&ctx, &mut SeededRng::new(config.seed))
    }

    #[test]
    fn emits_one_shape_per_complexity_unit() {
        let config = LayerConfig::new(5, Style::Geometric).with_complexity(40);
        let shapes = run(&config);
        assert_eq!(shapes.len(), 40);
        let indices: Vec<u32> = shapes.iter().map(|s| s.index).collect();
        assert_eq!(indices, (0..40).collect::<Vec<_>>());
        let pool = default_kinds(Style::Geometric);
        for s in &shapes {
            assert!(pool.contains(&s.kind));
            assert!((20.0..80.0).contains(&s.size));
            assert!((0.0..=600.0).contains(&s.x) && (0.0..=400.0).contains(&s.y));
            assert!(s.has_legal_fields());
        }
    }

    #[test]
    fn confetti_is_half_size() {
        let config = LayerConfig::new(5, Style::Confetti).with_scale(2.0);
        assert!(run(&config).iter().all(|s| (20.0..80.0).contains(&s.size)));
    }

    #[test]
    fn typo_shapes_carry_a_glyph() {
        let config = LayerConfig::new(8, Style::Typo).with_complexity(20);
        let shapes = run(&config);
        assert!(shapes.iter().all(|s| s.kind == ShapeKind::Glyph
            && s.glyph.is_some_and(|c| TYPO_CHARSET.contains(&c))
            && !s.stroke));
    }

    #[test]
    fn organic_shapes_carry_a_seed() {
        let config = LayerConfig::new(8, Style::Organic).with_complexity(20);
        assert!(run(&config).iter().all(|s| s.seed.is_some()));
    }

    #[test]
    fn user_selection_replaces_style_pool() {
        let config = LayerConfig::new(8, Style::Winter)
            .with_style_options(StyleOptions::default().with_shape_types(vec![ShapeKind::Butterfly]));
        assert!(run(&config).iter().all(|s| s.kind == ShapeKind::Butterfly));
    }

    #[test]
    fn enabled_assets_are_sampled_uniformly() {
        let config = LayerConfig::new(8, Style::Memphis)
            .with_complexity(100)
            .with_custom_images(CustomImages::new(["a", "b"]));
        let shapes = run(&config);
        let a = shapes.iter().filter(|s| s.asset_id.as_deref() == Some("a")).count();
        assert!(shapes.iter().all(|s| s.kind == ShapeKind::Image));
        assert!((20..80).contains(&a));
    }

    #[test]
    fn composition_bottom_biases_toward_the_bottom_edge() {
        let config = LayerConfig::new(31, Style::Geometric)
            .with_complexity(200)
            .with_composition(Composition::Bottom);
        let shapes = run(&config);
        let mean_y = shapes.iter().map(|s| s.y).sum::<f64>() / shapes.len() as f64;
        assert!(mean_y > 200.0);
    }
}
