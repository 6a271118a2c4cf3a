//! Square grid of independently skipped cells.
use rand::RngCore;

use crate::generators::{Brush, GenerateContext, StyleGenerator, QUARTER_TURNS};
use crate::rng::{pick, rand01};
use crate::shape::ShapeData;

/// Probability that a grid cell stays empty.
pub const GRID_SKIP_CHANCE: f64 = 0.2;

/// `ceil(sqrt(complexity))` square grid; skipped cells still consume their index.
#[derive(Debug, Clone, Default)]
pub struct GridGenerator;

impl GridGenerator {
    /// Columns (and rows) for `complexity`.
    pub fn dimension(complexity: u32) -> u32 {
        (complexity as f64).sqrt().ceil() as u32
    }
}

impl StyleGenerator for GridGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let n = Self::dimension(ctx.complexity());
        let cell_w = ctx.width / n as f64;
        let cell_h = ctx.height / n as f64;
        let gap = ctx.config.style_options.grid_gap.max(0.0);
        let size = (cell_w.min(cell_h) - gap).max(1.0) * 0.8;
        let brush = Brush::new(ctx.config);

        let mut shapes = Vec::with_capacity((n * n) as usize);
        let mut index = 0u32;
        for row in 0..n {
            for col in 0..n {
                let cell_index = index;
                index += 1;
                if rand01(rng) < GRID_SKIP_CHANCE {
                    continue;
                }
                let (kind, asset) = brush.kind(rng);
                let rotation = pick(rng, &QUARTER_TURNS).copied().unwrap_or(0.0);
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase) = brush.animation(rng);

                let x = (col as f64 + 0.5) * cell_w;
                let y = (row as f64 + 0.5) * cell_h;
                let mut shape = ShapeData::new(cell_index, kind, x, y, size)
                    .with_rotation(rotation)
                    .with_color(color)
                    .with_stroke(stroke)
                    .with_animation(speed, phase);
                if let Some(asset) = asset {
                    shape = shape.with_asset(asset);
                }
                shapes.push(shape);
            }
        }
        shapes
    }
}
