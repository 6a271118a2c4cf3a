//! Per-shape normalization: grid regularity, size variation, rotation lock, color assignment.
use glam::DVec2;

use crate::config::{ColorDistribution, Palette, RotationUnit, StructureConfig};
use crate::rng::seed_for_shape;
use crate::shape::ShapeData;

/// Cells per axis of the regularity grid.
pub const REGULARITY_CELLS: f64 = 10.0;

/// Uniform reference size that `size_variation = 0` collapses to.
pub fn reference_size(scale: f64) -> f64 {
    scale * 30.0
}

/// Snaps a rotation to the nearest multiple of `step` degrees by wrapped distance.
/// The result is in `[0, 360)` degrees, expressed in `unit`.
pub fn snap_rotation(rotation: f64, step: f64, unit: RotationUnit) -> f64 {
    let deg = unit.to_degrees(rotation).rem_euclid(360.0);
    let candidates = (360.0 / step).round() as u32;
    let best = (0..candidates)
        .map(|k| k as f64 * step)
        .min_by(|a, b| wrapped_distance(deg, *a).total_cmp(&wrapped_distance(deg, *b)))
        .unwrap_or(0.0);
    unit.from_degrees(best)
}

fn wrapped_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn gradient_index(t: f64, len: usize) -> usize {
    ((t.clamp(0.0, 1.0) * len as f64).floor() as usize).min(len.saturating_sub(1))
}

/// Color for `shape` under `mode`, or `None` to keep the generated one.
pub fn distributed_color(
    mode: ColorDistribution,
    shape: &ShapeData,
    extent: DVec2,
    palette: &Palette,
    seed: u32,
) -> Option<String> {
    let len = palette.len().max(1);
    let i = match mode {
        ColorDistribution::Keep => return None,
        ColorDistribution::GradientH => gradient_index(shape.x / extent.x, len),
        ColorDistribution::GradientV => gradient_index(shape.y / extent.y, len),
        ColorDistribution::GradientRadial => {
            let c = extent * 0.5;
            let d = DVec2::new(shape.x, shape.y).distance(c);
            gradient_index(d / c.length(), len)
        }
        ColorDistribution::Zones => {
            let right = usize::from(shape.x >= extent.x * 0.5);
            let bottom = usize::from(shape.y >= extent.y * 0.5);
            right + 2 * bottom
        }
        ColorDistribution::Alternating => shape.index as usize,
        ColorDistribution::Random => (seed_for_shape(seed, shape.index) % len as u64) as usize,
    };
    Some(palette.color_at(i))
}

/// Applies the normalization pass in place.
pub fn normalize(
    shapes: &mut [ShapeData],
    config: &StructureConfig,
    extent: DVec2,
    scale: f64,
    unit: RotationUnit,
    palette: &Palette,
    seed: u32,
) {
    let t = config.regularity_factor();
    let v = config.size_variation_factor();
    let reference = reference_size(scale);
    let cell = extent / REGULARITY_CELLS;

    for s in shapes.iter_mut() {
        if t > 0.0 {
            let col = (s.x / cell.x).floor().clamp(0.0, REGULARITY_CELLS - 1.0);
            let row = (s.y / cell.y).floor().clamp(0.0, REGULARITY_CELLS - 1.0);
            let target = DVec2::new((col + 0.5) * cell.x, (row + 0.5) * cell.y);
            s.x += (target.x - s.x) * t;
            s.y += (target.y - s.y) * t;
        }
        if v < 1.0 {
            s.size = reference + (s.size - reference) * v;
        }
        if let Some(step) = config.rotation_lock.step_degrees() {
            s.rotation = snap_rotation(s.rotation, step, unit);
        }
        if let Some(color) = distributed_color(config.color_distribution, s, extent, palette, seed) {
            s.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::config::RotationLock;
    use crate::shape::ShapeKind;

    const EXTENT: DVec2 = DVec2::new(200.0, 100.0);

    fn palette() -> Palette {
        Palette::new(["#a", "#b", "#c", "#d"], "#fff")
    }

    fn shape(index: u32, x: f64, y: f64) -> ShapeData {
        ShapeData::new(index, ShapeKind::Circle, x, y, 12.0)
            .with_rotation(1.3)
            .with_color("#orig")
    }

    #[test]
    fn extremes_are_identity() {
        let original = vec![shape(0, 13.7, 91.2), shape(1, 150.3, 4.4)];
        let mut out = original.clone();
        normalize(
            &mut out,
            &StructureConfig::default(),
            EXTENT,
            1.0,
            RotationUnit::Radians,
            &palette(),
            9,
        );
        assert_eq!(out, original);
    }

    #[test]
    fn full_regularity_snaps_to_cell_centres() {
        let mut out = vec![shape(0, 13.7, 91.2)];
        let config = StructureConfig::default().with_regularity(100.0);
        normalize(&mut out, &config, EXTENT, 1.0, RotationUnit::Radians, &palette(), 9);
        assert!((out[0].x - 10.0).abs() < 1e-9);
        assert!((out[0].y - 95.0).abs() < 1e-9);
    }

    #[test]
    fn zero_size_variation_gives_reference_size() {
        let mut out = vec![shape(0, 1.0, 1.0)];
        let config = StructureConfig::default().with_size_variation(0.0);
        normalize(&mut out, &config, EXTENT, 2.0, RotationUnit::Radians, &palette(), 9);
        assert_eq!(out[0].size, 60.0);
    }

    #[test]
    fn rotation_snaps_by_wrapped_distance() {
        assert_eq!(snap_rotation(350.0, 90.0, RotationUnit::Degrees), 0.0);
        assert_eq!(snap_rotation(-100.0, 90.0, RotationUnit::Degrees), 270.0);
        assert_eq!(snap_rotation(30.0, 45.0, RotationUnit::Degrees), 45.0);
        assert!((snap_rotation(1.3, 90.0, RotationUnit::Radians) - FRAC_PI_2).abs() < 1e-12);

        let mut out = vec![shape(0, 1.0, 1.0)];
        let config = StructureConfig::default().with_rotation_lock(RotationLock::Deg45);
        normalize(&mut out, &config, EXTENT, 1.0, RotationUnit::Radians, &palette(), 9);
        assert!((out[0].rotation - 45f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn color_modes() {
        let p = palette();
        let at = |mode, s: &ShapeData| distributed_color(mode, s, EXTENT, &p, 3);
        assert_eq!(at(ColorDistribution::Keep, &shape(0, 0.0, 0.0)), None);
        assert_eq!(at(ColorDistribution::GradientH, &shape(0, 199.0, 0.0)).as_deref(), Some("#d"));
        assert_eq!(at(ColorDistribution::GradientV, &shape(0, 0.0, 30.0)).as_deref(), Some("#b"));
        assert_eq!(at(ColorDistribution::GradientRadial, &shape(0, 100.0, 50.0)).as_deref(), Some("#a"));
        assert_eq!(at(ColorDistribution::Zones, &shape(0, 150.0, 80.0)).as_deref(), Some("#d"));
        assert_eq!(at(ColorDistribution::Alternating, &shape(6, 0.0, 0.0)).as_deref(), Some("#c"));
        let r1 = at(ColorDistribution::Random, &shape(5, 0.0, 0.0));
        let r2 = at(ColorDistribution::Random, &shape(5, 99.0, 9.0));
        assert_eq!(r1, r2);
    }

    #[test]
    fn empty_palette_falls_back() {
        let empty = Palette::new(Vec::<String>::new(), "#fff");
        let c = distributed_color(ColorDistribution::Zones, &shape(0, 150.0, 80.0), EXTENT, &empty, 1);
        assert_eq!(c.as_deref(), Some(crate::shape::FALLBACK_COLOR));
    }
}
