//! Diamond-offset cube tiling.
use rand::RngCore;

use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::rand01;
use crate::shape::{ShapeData, ShapeKind};

pub const ISOMETRIC_SKIP_CHANCE: f64 = 0.2;

#[derive(Debug, Clone, Default)]
pub struct IsometricGenerator;

impl IsometricGenerator {
    /// Column and row pitch for cube size `s`.
    pub fn pitch(s: f64) -> (f64, f64) {
        (3.0_f64.sqrt() * s, 1.5 * s)
    }
}

impl StyleGenerator for IsometricGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() || ctx.base_size <= 0.0 {
            return Vec::new();
        }
        let s = ctx.base_size;
        let (dx, dy) = Self::pitch(s);
        let cols = (ctx.width / dx).ceil() as u32 + 1;
        let rows = (ctx.height / dy).ceil() as u32 + 1;
        let brush = Brush::new(ctx.config);

        let mut shapes = Vec::new();
        let mut index = 0u32;
        for row in 0..rows {
            let offset = if row % 2 == 1 { dx * 0.5 } else { 0.0 };
            for col in 0..cols {
                let cell_index = index;
                index += 1;
                if rand01(rng) < ISOMETRIC_SKIP_CHANCE {
                    continue;
                }
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase) = brush.animation(rng);
                shapes.push(
                    ShapeData::new(
                        cell_index,
                        ShapeKind::Cube,
                        col as f64 * dx + offset,
                        row as f64 * dy,
                        s,
                    )
                    .with_color(color)
                    .with_stroke(stroke)
                    .with_animation(speed, phase),
                );
            }
        }
        shapes
    }
}
