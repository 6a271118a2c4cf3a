//! Horizontal wave bands spanning the full canvas width.
use rand::RngCore;

use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::rng::rand_range;
use crate::shape::{ShapeData, ShapeKind, ShapePayload};

/// Amplitude range as a fraction of canvas height.
pub const AMPLITUDE_RANGE: (f64, f64) = (0.04, 0.12);
/// Full periods across the canvas width.
pub const FREQUENCY_RANGE: (f64, f64) = (1.0, 4.0);

#[derive(Debug, Clone, Default)]
pub struct WavesGenerator;

impl WavesGenerator {
    pub fn band_count(complexity: u32) -> u32 {
        complexity / 10 + 3
    }
}

impl StyleGenerator for WavesGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let n = Self::band_count(ctx.complexity());
        let brush = Brush::new(ctx.config);

        (0..n)
            .map(|band| {
                let y = (band + 1) as f64 / (n + 1) as f64 * ctx.height;
                let amplitude =
                    rand_range(rng, AMPLITUDE_RANGE.0, AMPLITUDE_RANGE.1) * ctx.height;
                let frequency = rand_range(rng, FREQUENCY_RANGE.0, FREQUENCY_RANGE.1);
                let color = brush.color(rng);
                let stroke = brush.stroke(rng);
                let (speed, phase) = brush.animation(rng);
                ShapeData::new(band, ShapeKind::Wave, ctx.width * 0.5, y, ctx.width)
                    .with_points(band)
                    .with_color(color)
                    .with_stroke(stroke)
                    .with_animation(speed, phase)
                    .with_payload(ShapePayload::Wave {
                        band,
                        amplitude,
                        frequency,
                    })
            })
            .collect()
    }
}
