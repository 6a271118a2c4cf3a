//! Guilloché rosettes built from closed hypotrochoid and epitrochoid curves.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;
use tracing::warn;

use crate::config::{CurveFamily, GuillocheOptions};
use crate::generators::{Brush, GenerateContext, StyleGenerator};
use crate::shape::{GuillocheCurve, ShapeData, ShapeKind, ShapePayload};

/// Sample count bounds for one closed curve.
pub const SAMPLE_RANGE: (u32, u32) = (200, 1000);
/// Outermost layer radius as a fraction of the shorter canvas side.
const FIT_FRACTION: f64 = 0.45;

#[derive(Debug, Clone, Default)]
pub struct GuillocheGenerator;

pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Turns of the rolling circle until the pen returns to its start.
pub fn revolutions(major: u32, minor: u32) -> u32 {
    match gcd(major, minor) {
        0 => 0,
        g => minor / g,
    }
}

pub fn sample_count(revolutions: u32) -> u32 {
    ((revolutions as f64 * 100.0).round() as u32).clamp(SAMPLE_RANGE.0, SAMPLE_RANGE.1)
}

/// Samples one full closed curve in design units, centred on the origin.
pub fn trace(options: &GuillocheOptions) -> Vec<DVec2> {
    let rev = revolutions(options.major_radius, options.minor_radius);
    if rev == 0 {
        return Vec::new();
    }
    let big = options.major_radius as f64;
    let small = options.minor_radius as f64;
    let d = options.pen_offset * small;
    let samples = sample_count(rev);
    let t_end = TAU * rev as f64;

    (0..samples)
        .map(|k| {
            let t = k as f64 / (samples - 1) as f64 * t_end;
            match options.curve {
                CurveFamily::Hypotrochoid => {
                    let k = (big - small) / small * t;
                    DVec2::new(
                        (big - small) * t.cos() + d * k.cos(),
                        (big - small) * t.sin() - d * k.sin(),
                    )
                }
                CurveFamily::Epitrochoid => {
                    let k = (big + small) / small * t;
                    DVec2::new(
                        (big + small) * t.cos() - d * k.cos(),
                        (big + small) * t.sin() - d * k.sin(),
                    )
                }
            }
        })
        .collect()
}

impl StyleGenerator for GuillocheGenerator {
    fn generate(&self, ctx: &GenerateContext<'_>, rng: &mut dyn RngCore) -> Vec<ShapeData> {
        if ctx.is_degenerate() {
            return Vec::new();
        }
        let options = &ctx.config.guilloche_options;
        let layers = options.clamped_layer_count();
        let shrink = options.clamped_layer_shrink();
        if layers != options.layer_count || shrink != options.layer_shrink {
            warn!(
                layer_count = options.layer_count,
                layer_shrink = options.layer_shrink,
                "guilloche layering out of range, clamping to {layers} layers at {shrink}"
            );
        }
        let base = trace(options);
        let extent = base.iter().map(|p| p.length()).fold(0.0, f64::max);
        if base.is_empty() || extent <= f64::EPSILON {
            warn!(
                major = options.major_radius,
                minor = options.minor_radius,
                "guilloche radii produce no curve"
            );
            return Vec::new();
        }
        let rev = revolutions(options.major_radius, options.minor_radius);
        let fit = FIT_FRACTION * ctx.min_side() * ctx.config.effective_scale() / extent;
        let center = DVec2::new(ctx.width * 0.5, ctx.height * 0.5);
        let brush = Brush::new(ctx.config);

        (0..layers)
            .map_while(|layer| {
                let factor = 1.0 - layer as f64 * shrink;
                (factor > 0.0).then_some((layer, factor))
            })
            .map(|(layer, factor)| {
                let color = brush.color(rng);
                let k = fit * factor;
                let points: Vec<[f64; 2]> = base.iter().map(|p| [p.x * k, p.y * k]).collect();
                ShapeData::new(layer, ShapeKind::GuillocheCurve, center.x, center.y, extent * k)
                    .with_rotation(layer as f64 * options.layer_rotation)
                    .with_color(color)
                    .with_points(points.len() as u32)
                    .with_payload(ShapePayload::Guilloche(GuillocheCurve {
                        layer,
                        revolutions: rev,
                        line_width: options.line_width,
                        points,
                    }))
            })
            .collect()
    }
}
