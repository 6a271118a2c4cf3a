//! Pairwise minimum-spacing relaxation.
//!
//! Updates are applied in pair order, so later pairs see earlier pushes. The pass is
//! sequential and must stay that way to keep results stable.
use glam::DVec2;

use crate::shape::ShapeData;

/// Fixed number of relaxation sweeps.
pub const SPACING_ITERATIONS: usize = 3;

/// Required centre distance between two shapes.
pub fn threshold(a: &ShapeData, b: &ShapeData, clearance: f64) -> f64 {
    (a.size + b.size) * 0.5 * (1.0 + clearance)
}

/// Sum of pairwise shortfalls below the threshold.
pub fn total_overlap(shapes: &[ShapeData], clearance: f64) -> f64 {
    let mut total = 0.0;
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            let d = DVec2::new(a.x, a.y).distance(DVec2::new(b.x, b.y));
            total += (threshold(a, b, clearance) - d).max(0.0);
        }
    }
    total
}

/// One sweep over all pairs; positions are clamped to the canvas after each push.
pub fn relax_spacing_step(shapes: &mut [ShapeData], clearance: f64, extent: DVec2) {
    let n = shapes.len();
    for i in 0..n {
        for j in i + 1..n {
            let (head, tail) = shapes.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            let pa = DVec2::new(a.x, a.y);
            let pb = DVec2::new(b.x, b.y);
            let min = threshold(a, b, clearance);
            let d = pa.distance(pb);
            if d >= min {
                continue;
            }
            // Coincident centres separate along x.
            let dir = if d > f64::EPSILON { (pb - pa) / d } else { DVec2::X };
            let push = dir * (min - d) * 0.5;
            let na = (pa - push).clamp(DVec2::ZERO, extent);
            let nb = (pb + push).clamp(DVec2::ZERO, extent);
            (a.x, a.y) = (na.x, na.y);
            (b.x, b.y) = (nb.x, nb.y);
        }
    }
}

/// Runs the fixed number of sweeps.
pub fn relax_spacing(shapes: &mut [ShapeData], clearance: f64, extent: DVec2) {
    for _ in 0..SPACING_ITERATIONS {
        relax_spacing_step(shapes, clearance, extent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    fn row(xs: &[f64]) -> Vec<ShapeData> {
        xs.iter()
            .enumerate()
            .map(|(i, x)| ShapeData::new(i as u32, ShapeKind::Circle, *x, 50.0, 20.0))
            .collect()
    }

    const EXTENT: DVec2 = DVec2::new(300.0, 100.0);

    #[test]
    fn overlap_never_grows_across_sweeps() {
        let mut shapes = row(&[100.0, 110.0, 120.0]);
        let mut last = total_overlap(&shapes, 0.01);
        assert!(last > 0.0);
        for _ in 0..SPACING_ITERATIONS {
            relax_spacing_step(&mut shapes, 0.01, EXTENT);
            let now = total_overlap(&shapes, 0.01);
            assert!(now <= last, "{now} > {last}");
            last = now;
        }
        assert!(last < 1.0);
    }

    #[test]
    fn coincident_shapes_split_along_x() {
        let mut shapes = row(&[150.0, 150.0]);
        relax_spacing_step(&mut shapes, 0.0, EXTENT);
        assert_eq!(shapes[0].x, 140.0);
        assert_eq!(shapes[1].x, 160.0);
        assert_eq!(shapes[0].y, 50.0);
    }

    #[test]
    fn pushes_are_clamped_to_the_canvas() {
        let mut shapes = row(&[1.0, 2.0]);
        relax_spacing(&mut shapes, 0.5, EXTENT);
        assert!(shapes.iter().all(|s| s.x >= 0.0 && s.x <= 300.0));
        assert_eq!(shapes[0].x, 0.0);
    }

    #[test]
    fn distant_shapes_are_untouched() {
        let mut shapes = row(&[20.0, 200.0]);
        relax_spacing(&mut shapes, 1.0, EXTENT);
        assert_eq!(shapes, row(&[20.0, 200.0]));
    }
}
