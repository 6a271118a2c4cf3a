//! Truchet maze: quarter-arc tiles chosen with a neighbour-aware weighted draw.
//!
//! A tile that alternates with its left and top neighbours continues their paths, so each
//! such match adds [`MATCH_BONUS`] to that candidate's weight. The choice stays random, which
//! leaves mazes mostly, but not always, connected.
use rand::RngCore;
use tracing::warn;

use crate::config::TruchetOptions;
use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::rand01;
use crate::shape::{ShapeData, ShapeKind, ShapePayload, TruchetTile, TruchetVariant};

const BASE_SCORE: f64 = 1.0;
pub const MATCH_BONUS: f64 = 10.0;

#[derive(Debug, Clone, Default)]
pub struct TruchetGenerator;

/// Weight of `candidate` given the already placed neighbours.
fn score(candidate: TruchetVariant, left: Option<TruchetVariant>, top: Option<TruchetVariant>) -> f64 {
    [left, top]
        .into_iter()
        .flatten()
        .filter(|n| *n != candidate)
        .fold(BASE_SCORE, |acc, _| acc + MATCH_BONUS)
}

/// Picks a variant from one uniform `roll` in `[0, 1)`.
pub fn choose_variant(
    left: Option<TruchetVariant>,
    top: Option<TruchetVariant>,
    roll: f64,
) -> TruchetVariant {
    let a = score(TruchetVariant::ArcA, left, top);
    let b = score(TruchetVariant::ArcB, left, top);
    if roll * (a + b) < a {
        TruchetVariant::ArcA
    } else {
        TruchetVariant::ArcB
    }
}

impl TruchetGenerator {
    /// Cell size and grid dimensions for a canvas.
    pub fn layout(width: f64, height: f64, options: &TruchetOptions) -> (f64, u32, u32) {
        let cell = width.min(height) / options.clamped_density() as f64;
        (
            cell,
            (width / cell).ceil() as u32,
            (height / cell).ceil() as u32,
        )
    }
}

impl StyleGenerator for TruchetGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let options = &ctx.config.truchet_options;
        if options.clamped_density() != options.maze_density {
            warn!(
                density = options.maze_density,
                "maze density out of range, clamping to {}",
                options.clamped_density()
            );
        }
        let (cell, cols, rows) = Self::layout(ctx.width, ctx.height, options);
        let brush = Brush::new(ctx.config);

        let mut placed: Vec<TruchetVariant> = Vec::with_capacity((cols * rows) as usize);
        let mut shapes = Vec::with_capacity((cols * rows) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let left = (col > 0).then(|| placed[(row * cols + col - 1) as usize]);
                let top = (row > 0).then(|| placed[((row - 1) * cols + col) as usize]);
                let variant = choose_variant(left, top, rand01(rng));
                placed.push(variant);
                let color = brush.color(rng);

                let tile = TruchetTile {
                    variant,
                    stroke_weight: options.stroke_weight,
                    arc_weight: options.arc_weight,
                    concentric_rings: options.concentric_rings,
                };
                let rotation = match variant {
                    TruchetVariant::ArcA => 0.0,
                    TruchetVariant::ArcB => 90.0,
                };
                shapes.push(
                    ShapeData::new(
                        row * cols + col,
                        ShapeKind::TruchetTile,
                        (col as f64 + 0.5) * cell,
                        (row as f64 + 0.5) * cell,
                        cell,
                    )
                    .with_rotation(rotation)
                    .with_color(color)
                    .with_points(tile.packed_code())
                    .with_seed(tile.packed_weights())
                    .with_payload(ShapePayload::Truchet(tile)),
                );
            }
        }
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayerConfig, Style};
    use crate::rng::SeededRng;

    use TruchetVariant::{ArcA, ArcB};

    #[test]
    fn density_10_on_500_square_gives_100_tiles() {
        let config = LayerConfig::new(1234, Style::Truchet)
            .with_truchet(TruchetOptions::default().with_maze_density(10));
        let (cell, cols, rows) = TruchetGenerator::layout(500.0, 500.0, &config.truchet_options);
        assert_eq!((cell, cols, rows), (50.0, 10, 10));

        let ctx = GenerateContext::new(500.0, 500.0, &config);
        let shapes = TruchetGenerator.generate(&ctx, &mut SeededRng::new(1234));
        assert_eq!(shapes.len(), 100);
        for (i, s) in shapes.iter().enumerate() {
            assert_eq!(s.index, i as u32);
            assert!(s.rotation == 0.0 || s.rotation == 90.0);
            let Some(ShapePayload::Truchet(tile)) = &s.payload else {
                panic!("truchet payload missing");
            };
            assert_eq!(s.points, Some(tile.packed_code()));
            assert_eq!(TruchetTile::unpack(tile.packed_code(), tile.packed_weights()).variant, tile.variant);
        }
    }

    #[test]
    fn first_cell_is_a_fair_coin() {
        assert_eq!(choose_variant(None, None, 0.49), ArcA);
        assert_eq!(choose_variant(None, None, 0.51), ArcB);
    }

    #[test]
    fn matching_neighbours_dominate_but_do_not_force() {
        // Left and top are ArcA: ArcB scores 21, ArcA scores 1.
        assert_eq!(choose_variant(Some(ArcA), Some(ArcA), 0.5), ArcB);
        assert_eq!(choose_variant(Some(ArcA), Some(ArcA), 0.01), ArcA);
        // Mixed neighbours tie at 11 each.
        assert_eq!(choose_variant(Some(ArcA), Some(ArcB), 0.49), ArcA);
        assert_eq!(choose_variant(Some(ArcA), Some(ArcB), 0.51), ArcB);
    }

    #[test]
    fn mazes_mostly_alternate() {
        let config = LayerConfig::new(7, Style::Truchet)
            .with_truchet(TruchetOptions::default().with_maze_density(20));
        let ctx = GenerateContext::new(400.0, 400.0, &config);
        let shapes = TruchetGenerator.generate(&ctx, &mut SeededRng::new(7));
        let variant = |s: &ShapeData| match &s.payload {
            Some(ShapePayload::Truchet(t)) => t.variant,
            _ => unreachable!(),
        };
        let alternating = shapes
            .windows(2)
            .enumerate()
            .filter(|(i, _)| (i + 1) % 20 != 0)
            .filter(|(_, w)| variant(&w[0]) != variant(&w[1]))
            .count();
        assert!(alternating > 300, "only {alternating} of 380 pairs alternate");
    }

    #[test]
    fn out_of_range_density_is_clamped() {
        let config = LayerConfig::new(7, Style::Truchet)
            .with_truchet(TruchetOptions::default().with_maze_density(100));
        let ctx = GenerateContext::new(200.0, 200.0, &config);
        assert_eq!(TruchetGenerator.generate(&ctx, &mut SeededRng::new(7)).len(), 400);
    }
}
