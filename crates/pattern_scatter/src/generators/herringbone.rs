//! Rectangular tile weaves: herringbone, chevron and basket-weave.
//!
//! Rotations are in degrees. Tiles whose centre falls more than one tile length outside the
//! canvas are not emitted.
use std::f64::consts::SQRT_2;

use rand::RngCore;

use crate::config::{HerringbonePattern, TileColorMode};
use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::shape::{Color, ShapeData, ShapeKind, ShapePayload};

#[derive(Debug, Clone, Default)]
pub struct HerringboneGenerator;

/// Placement of one tile before styling.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TileSlot {
    x: f64,
    y: f64,
    rotation: f64,
    /// Orientation parity used by alternating color mode.
    parity: usize,
    length: f64,
    width: f64,
}

impl HerringboneGenerator {
    /// Short and long tile sides.
    pub fn tile_size(ctx: &GenerateContext<'_>) -> (f64, f64) {
        let short = ctx.min_side() / (2.0 * (ctx.complexity() as f64).sqrt())
            * ctx.config.effective_scale();
        (short, short * ctx.config.herringbone_options.clamped_ratio())
    }

    fn diagonal_slots(w: f64, h: f64, short: f64, long: f64, staggered: bool) -> Vec<TileSlot> {
        let dx = long / SQRT_2;
        let dy = short * SQRT_2;
        let cols = (w / dx).ceil() as i64 + 1;
        let rows = (h / dy).ceil() as i64 + 1;
        let mut slots = Vec::new();
        for row in -1..=rows {
            for col in -1..=cols {
                let odd = col.rem_euclid(2) as usize;
                let shift = if staggered && odd == 1 { dy * 0.5 } else { 0.0 };
                slots.push(TileSlot {
                    x: (col as f64 + 0.5) * dx,
                    y: row as f64 * dy + shift,
                    rotation: if odd == 0 { 45.0 } else { 135.0 },
                    parity: odd,
                    length: long,
                    width: short,
                });
            }
        }
        slots
    }

    fn basket_slots(w: f64, h: f64, short: f64, long: f64) -> Vec<TileSlot> {
        // Each square block holds as many parallel tiles as fit across the long side.
        let per_block = ((long / short).floor() as u32).max(1);
        let strip = long / per_block as f64;
        let cols = (w / long).ceil() as i64;
        let rows = (h / long).ceil() as i64;
        let mut slots = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let parity = (row + col).rem_euclid(2) as usize;
                let (bx, by) = (col as f64 * long, row as f64 * long);
                for k in 0..per_block {
                    let offset = (k as f64 + 0.5) * strip;
                    let (x, y, rotation) = if parity == 0 {
                        (bx + long * 0.5, by + offset, 0.0)
                    } else {
                        (bx + offset, by + long * 0.5, 90.0)
                    };
                    slots.push(TileSlot {
                        x,
                        y,
                        rotation,
                        parity,
                        length: long,
                        width: strip,
                    });
                }
            }
        }
        slots
    }
}

impl StyleGenerator for HerringboneGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let options = &ctx.config.herringbone_options;
        let (short, long) = Self::tile_size(ctx);
        if short <= 0.0 || !short.is_finite() {
            return Vec::new();
        }
        let (w, h) = (ctx.width, ctx.height);
        let slots = match options.pattern {
            HerringbonePattern::Herringbone => Self::diagonal_slots(w, h, short, long, true),
            HerringbonePattern::Chevron => Self::diagonal_slots(w, h, short, long, false),
            HerringbonePattern::BasketWeave => Self::basket_slots(w, h, short, long),
        };
        let palette = &ctx.config.palette;
        let brush = Brush::new(ctx.config);

        slots
            .into_iter()
            .filter(|t| t.x >= -long && t.x <= w + long && t.y >= -long && t.y <= h + long)
            .enumerate()
            .map(|(i, t)| {
                let color: Color = match options.color_mode {
                    TileColorMode::Mono => palette.color_at(0),
                    TileColorMode::Alternating => palette.color_at(t.parity),
                    TileColorMode::Random => brush.color(rng),
                };
                let stroke = brush.stroke(rng);
                ShapeData::new(i as u32, ShapeKind::HerringboneTile, t.x, t.y, t.length)
                    .with_rotation(t.rotation)
                    .with_color(color)
                    .with_stroke(stroke)
                    .with_payload(ShapePayload::Tile {
                        length: t.length,
                        width: t.width,
                    })
            })
            .collect()
    }
}
