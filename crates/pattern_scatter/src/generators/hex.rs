//! Offset-coordinate hexagon tiling.
use std::f64::consts::FRAC_PI_6;

use rand::RngCore;

use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::rand01;
use crate::shape::{ShapeData, ShapeKind};

/// Probability that a hex cell stays empty.
pub const HEX_SKIP_CHANCE: f64 = 0.3;

/// Pointy rows of hexagons sized from the base size; odd rows shift by half a hex width.
#[derive(Debug, Clone, Default)]
pub struct HexGenerator;

impl HexGenerator {
    /// Horizontal and vertical pitch for hexagon radius `r`.
    pub fn pitch(r: f64) -> (f64, f64) {
        (3.0_f64.sqrt() * r, 1.5 * r)
    }
}

impl StyleGenerator for HexGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() || ctx.base_size <= 0.0 {
            return Vec::new();
        }
        let r = ctx.base_size;
        let (dx, dy) = Self::pitch(r);
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
                if rand01(rng) < HEX_SKIP_CHANCE {
                    continue;
                }
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase) = brush.animation(rng);
                let x = col as f64 * dx + offset;
                let y = row as f64 * dy;
                shapes.push(
                    ShapeData::new(cell_index, ShapeKind::Hexagon, x, y, r)
                        .with_rotation(FRAC_PI_6)
                        .with_points(6)
                        .with_color(color)
                        .with_stroke(stroke)
                        .with_animation(speed, phase),
                );
            }
        }
        shapes
    }
}
