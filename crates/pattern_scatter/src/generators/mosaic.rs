//! Blocked grid packer: cells grow into 2×2, 2×1 or 1×2 blocks before falling back to 1×1.
use std::collections::HashSet;

use rand::RngCore;

use crate::generators::{Brush, GenerateContext, StyleGenerator, QUARTER_TURNS};
use crate::rng::{pick, rand01};
use crate::shape::{ShapeData, ShapePayload};

/// Cumulative thresholds for the 2×2, 2×1 and 1×2 block rolls.
const BLOCK_ROLLS: [(f64, u32, u32); 3] = [(0.15, 2, 2), (0.30, 2, 1), (0.45, 1, 2)];
/// Chance that a 1×1 cell stays empty.
pub const MOSAIC_SKIP_CHANCE: f64 = 0.25;

#[derive(Debug, Clone, Default)]
pub struct MosaicGenerator;

struct Occupancy {
    cols: u32,
    rows: u32,
    taken: HashSet<(u32, u32)>,
}

impl Occupancy {
    fn fits(&self, col: u32, row: u32, span_c: u32, span_r: u32) -> bool {
        if col + span_c > self.cols || row + span_r > self.rows {
            return false;
        }
        (row..row + span_r).all(|r| (col..col + span_c).all(|c| !self.taken.contains(&(c, r))))
    }

    fn claim(&mut self, col: u32, row: u32, span_c: u32, span_r: u32) {
        for r in row..row + span_r {
            for c in col..col + span_c {
                self.taken.insert((c, r));
            }
        }
    }
}

impl StyleGenerator for MosaicGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() || ctx.base_size <= 0.0 {
            return Vec::new();
        }
        let cell = ctx.base_size;
        let mut grid = Occupancy {
            cols: (ctx.width / cell).ceil() as u32,
            rows: (ctx.height / cell).ceil() as u32,
            taken: HashSet::new(),
        };
        let brush = Brush::new(ctx.config);

        let mut shapes = Vec::new();
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                if grid.taken.contains(&(col, row)) {
                    continue;
                }
                let roll = rand01(rng);
                let (span_c, span_r) = BLOCK_ROLLS
                    .iter()
                    .find(|(threshold, c, r)| roll < *threshold && grid.fits(col, row, *c, *r))
                    .map(|(_, c, r)| (*c, *r))
                    .unwrap_or((1, 1));
                grid.claim(col, row, span_c, span_r);
                if (span_c, span_r) == (1, 1) && rand01(rng) < MOSAIC_SKIP_CHANCE {
                    continue;
                }

                let width = span_c as f64 * cell;
                let height = span_r as f64 * cell;
                let (kind, asset) = brush.kind(rng);
                let rotation = if span_c == span_r {
                    pick(rng, &QUARTER_TURNS).copied().unwrap_or(0.0)
                } else {
                    0.0
                };
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase) = brush.animation(rng);

                let mut shape = ShapeData::new(
                    shapes.len() as u32,
                    kind,
                    col as f64 * cell + width * 0.5,
                    row as f64 * cell + height * 0.5,
                    width.min(height) * 0.9,
                )
                .with_rotation(rotation)
                .with_color(color)
                .with_stroke(stroke)
                .with_animation(speed, phase)
                .with_payload(ShapePayload::Mosaic {
                    span_cols: span_c,
                    span_rows: span_r,
                    width,
                    height,
                });
                if let Some(asset) = asset {
                    shape = shape.with_asset(asset);
                }
                shapes.push(shape);
            }
        }
        shapes
    }
}
