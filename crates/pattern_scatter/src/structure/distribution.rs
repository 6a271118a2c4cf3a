//! Position remaps that blend each shape toward a formula-driven target.
use std::f64::consts::PI;

use glam::DVec2;

use crate::config::DistributionMode;
use crate::shape::ShapeData;

/// Golden angle in radians.
pub const GOLDEN_ANGLE: f64 = 2.399963;
const CLUSTER_CENTRES: [(f64, f64); 3] = [(0.3, 0.35), (0.7, 0.4), (0.5, 0.7)];

/// Target position for the `i`-th of `n` shapes, and the weight kept from the original.
fn target(mode: DistributionMode, p: DVec2, i: usize, n: usize, extent: DVec2) -> Option<(DVec2, f64)> {
    let (w, h) = (extent.x, extent.y);
    let fi = i as f64 / n as f64;
    match mode {
        DistributionMode::Scatter => None,
        DistributionMode::Flow => {
            let y = h * 0.5 + (3.0 * PI * p.x / w).sin() * 0.3 * h + (fi - 0.5) * 0.4 * h;
            Some((DVec2::new(p.x, y), 0.3))
        }
        DistributionMode::Cluster => {
            let (cx, cy) = CLUSTER_CENTRES[i % CLUSTER_CENTRES.len()];
            Some((DVec2::new(cx * w, cy * h), 0.4))
        }
        DistributionMode::Wave => {
            let y = h * 0.5 + (4.0 * PI * p.x / w).sin() * 0.25 * h;
            Some((DVec2::new(p.x, y), 0.5))
        }
        DistributionMode::Spiral => {
            let angle = i as f64 * GOLDEN_ANGLE;
            let r = fi.sqrt() * 0.45 * w.min(h);
            Some((extent * 0.5 + DVec2::new(angle.cos(), angle.sin()) * r, 0.2))
        }
    }
}

/// Remaps positions in place; `scatter` is a no-op.
pub fn distribute(shapes: &mut [ShapeData], mode: DistributionMode, extent: DVec2) {
    let n = shapes.len();
    for (i, s) in shapes.iter_mut().enumerate() {
        let p = DVec2::new(s.x, s.y);
        if let Some((t, keep)) = target(mode, p, i, n, extent) {
            let q = p * keep + t * (1.0 - keep);
            s.x = q.x;
            s.y = q.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    fn shapes(n: u32) -> Vec<ShapeData> {
        (0..n)
            .map(|i| ShapeData::new(i, ShapeKind::Circle, 10.0 + i as f64 * 30.0, 50.0, 10.0))
            .collect()
    }

    const EXTENT: DVec2 = DVec2::new(400.0, 200.0);

    #[test]
    fn scatter_is_identity() {
        let mut s = shapes(5);
        distribute(&mut s, DistributionMode::Scatter, EXTENT);
        assert_eq!(s, shapes(5));
    }

    #[test]
    fn cluster_pulls_toward_three_centres() {
        let mut s = shapes(6);
        distribute(&mut s, DistributionMode::Cluster, EXTENT);
        // Shape 0: 0.4·(10, 50) + 0.6·(120, 70).
        assert!((s[0].x - 76.0).abs() < 1e-9);
        assert!((s[0].y - 62.0).abs() < 1e-9);
        // Shape 4 shares the centre of shape 1.
        assert!((s[4].y - (0.4 * 50.0 + 0.6 * 80.0)).abs() < 1e-9);
    }

    #[test]
    fn wave_moves_only_y() {
        let mut s = shapes(4);
        distribute(&mut s, DistributionMode::Wave, EXTENT);
        for (a, b) in s.iter().zip(shapes(4)) {
            assert_eq!(a.x, b.x);
            let target = 100.0 + (4.0 * PI * b.x / 400.0).sin() * 50.0;
            assert!((a.y - (0.5 * b.y + 0.5 * target)).abs() < 1e-9);
        }
    }

    #[test]
    fn spiral_first_shape_heads_to_centre() {
        let mut s = shapes(3);
        distribute(&mut s, DistributionMode::Spiral, EXTENT);
        assert!((s[0].x - (0.2 * 10.0 + 0.8 * 200.0)).abs() < 1e-9);
        assert!((s[0].y - (0.2 * 50.0 + 0.8 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn flow_keeps_x() {
        let mut s = shapes(3);
        distribute(&mut s, DistributionMode::Flow, EXTENT);
        assert!(s.iter().zip(shapes(3)).all(|(a, b)| (a.x - b.x).abs() < 1e-12));
    }
}
