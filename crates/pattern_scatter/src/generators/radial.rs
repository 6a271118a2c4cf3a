//! Concentric rings of evenly spaced shapes around the canvas centre.
use std::f64::consts::TAU;

use rand::RngCore;

use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::rand01;
use crate::shape::ShapeData;

pub const RADIAL_SKIP_CHANCE: f64 = 0.2;
/// Angular offset added per ring, in radians.
const RING_PHASE: f64 = 0.15;

#[derive(Debug, Clone, Default)]
pub struct RadialGenerator;

impl RadialGenerator {
    pub fn ring_count(complexity: u32) -> u32 {
        complexity / 10 + 2
    }

    /// Items on ring `i`.
    pub fn ring_items(i: u32) -> u32 {
        3 * i + 4
    }
}

impl StyleGenerator for RadialGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let rings = Self::ring_count(ctx.complexity());
        let cx = ctx.width * 0.5;
        let cy = ctx.height * 0.5;
        let min = ctx.min_side();
        let scale = ctx.config.effective_scale();
        let brush = Brush::new(ctx.config);

        let mut shapes = Vec::new();
        let mut index = 0u32;
        for ring in 0..rings {
            let radius = (ring + 1) as f64 / rings as f64 * 0.45 * min;
            let size = min / 20.0 * scale * (1.0 + 0.25 * ring as f64);
            let items = Self::ring_items(ring);
            let phase = RING_PHASE * ring as f64;
            for item in 0..items {
                let item_index = index;
                index += 1;
                if rand01(rng) < RADIAL_SKIP_CHANCE {
                    continue;
                }
                let angle = item as f64 / items as f64 * TAU + phase;
                let (kind, asset) = brush.kind(rng);
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase_offset) = brush.animation(rng);
                // Shapes face outward.
                let mut shape = ShapeData::new(
                    item_index,
                    kind,
                    cx + radius * angle.cos(),
                    cy + radius * angle.sin(),
                    size,
                )
                .with_rotation(angle)
                .with_color(color)
                .with_stroke(stroke)
                .with_animation(speed, phase_offset);
                if let Some(asset) = asset {
                    shape = shape.with_asset(asset);
                }
                shapes.push(shape);
            }
        }
        shapes
    }
}
