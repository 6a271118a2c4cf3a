//! Wallpaper-group style replication of a finished shape sequence.
//!
//! Copies are appended block by block and the whole result is re-indexed from 0, so override
//! keys stay unique across the replicated set.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::RotationUnit;
use crate::shape::ShapeData;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SymmetryGroup {
    #[default]
    None,
    /// Original plus an X-mirror.
    Pm,
    /// Original plus X-, Y- and XY-mirrors.
    Pmm,
    /// Four quarter-turn rotations, each followed by its X-mirror.
    P4m,
}

impl SymmetryGroup {
    /// Output length divided by input length.
    pub fn multiplicity(self) -> usize {
        match self {
            SymmetryGroup::None => 1,
            SymmetryGroup::Pm => 2,
            SymmetryGroup::Pmm => 4,
            SymmetryGroup::P4m => 8,
        }
    }

    /// Replicates `shapes` about `center`. Rotations are interpreted in `unit`.
    pub fn apply(self, shapes: &[ShapeData], center: DVec2, unit: RotationUnit) -> Vec<ShapeData> {
        let mut out: Vec<ShapeData> = match self {
            SymmetryGroup::None => shapes.to_vec(),
            SymmetryGroup::Pm => shapes
                .iter()
                .cloned()
                .chain(shapes.iter().map(|s| mirror_x(s, center)))
                .collect(),
            SymmetryGroup::Pmm => shapes
                .iter()
                .cloned()
                .chain(shapes.iter().map(|s| mirror_x(s, center)))
                .chain(shapes.iter().map(|s| mirror_y(s, center, unit)))
                .chain(shapes.iter().map(|s| mirror_xy(s, center, unit)))
                .collect(),
            SymmetryGroup::P4m => (0..4)
                .flat_map(|quarter| {
                    let turned: Vec<ShapeData> = shapes
                        .iter()
                        .map(|s| rotate_about(s, center, quarter, unit))
                        .collect();
                    let mirrored: Vec<ShapeData> =
                        turned.iter().map(|s| mirror_x(s, center)).collect();
                    turned.into_iter().chain(mirrored)
                })
                .collect(),
        };
        reindex(&mut out);
        out
    }
}

/// Reflects across the vertical axis through `center`.
pub fn mirror_x(shape: &ShapeData, center: DVec2) -> ShapeData {
    let mut s = shape.clone();
    s.x = 2.0 * center.x - shape.x;
    s.rotation = -shape.rotation;
    s
}

/// Reflects across the horizontal axis through `center`.
pub fn mirror_y(shape: &ShapeData, center: DVec2, unit: RotationUnit) -> ShapeData {
    let mut s = shape.clone();
    s.y = 2.0 * center.y - shape.y;
    s.rotation = unit.half_turn() - shape.rotation;
    s
}

/// Point reflection through `center`.
pub fn mirror_xy(shape: &ShapeData, center: DVec2, unit: RotationUnit) -> ShapeData {
    let mut s = shape.clone();
    s.x = 2.0 * center.x - shape.x;
    s.y = 2.0 * center.y - shape.y;
    s.rotation = shape.rotation + unit.half_turn();
    s
}

/// Rotates by `quarters` quarter turns about `center`.
pub fn rotate_about(shape: &ShapeData, center: DVec2, quarters: u32, unit: RotationUnit) -> ShapeData {
    let mut s = shape.clone();
    let d = DVec2::new(shape.x, shape.y) - center;
    // Exact quarter turns avoid accumulating trig error.
    let r = match quarters % 4 {
        0 => d,
        1 => DVec2::new(-d.y, d.x),
        2 => -d,
        _ => DVec2::new(d.y, -d.x),
    };
    s.x = center.x + r.x;
    s.y = center.y + r.y;
    s.rotation = shape.rotation + unit.half_turn() * 0.5 * (quarters % 4) as f64;
    s
}

fn reindex(shapes: &mut [ShapeData]) {
    for (i, s) in shapes.iter_mut().enumerate() {
        s.index = i as u32;
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::shape::ShapeKind;

    fn sample() -> Vec<ShapeData> {
        vec![
            ShapeData::new(0, ShapeKind::Circle, 10.0, 20.0, 5.0).with_rotation(0.3),
            ShapeData::new(3, ShapeKind::Square, 70.0, 40.0, 8.0).with_rotation(1.2),
        ]
    }

    #[test]
    fn cardinality_matches_group() {
        let c = DVec2::new(50.0, 50.0);
        for group in [
            SymmetryGroup::None,
            SymmetryGroup::Pm,
            SymmetryGroup::Pmm,
            SymmetryGroup::P4m,
        ] {
            let out = group.apply(&sample(), c, RotationUnit::Radians);
            assert_eq!(out.len(), sample().len() * group.multiplicity());
            let indices: Vec<u32> = out.iter().map(|s| s.index).collect();
            assert_eq!(indices, (0..out.len() as u32).collect::<Vec<_>>());
        }
    }

    #[test]
    fn mirror_x_is_an_involution() {
        let c = DVec2::new(37.5, 12.0);
        for s in sample() {
            let back = mirror_x(&mirror_x(&s, c), c);
            assert!((back.x - s.x).abs() < 1e-9);
            assert_eq!(back.y, s.y);
            assert!((back.rotation - s.rotation).abs() < 1e-12);
        }
    }

    #[test]
    fn mirror_rotations_follow_handedness() {
        let c = DVec2::new(50.0, 50.0);
        let s = &sample()[0];
        assert_eq!(mirror_x(s, c).rotation, -0.3);
        assert!((mirror_y(s, c, RotationUnit::Radians).rotation - (PI - 0.3)).abs() < 1e-12);
        assert!((mirror_xy(s, c, RotationUnit::Radians).rotation - (0.3 + PI)).abs() < 1e-12);
        assert_eq!(mirror_y(s, c, RotationUnit::Degrees).rotation, 180.0 - 0.3);
    }

    #[test]
    fn p4m_rotates_around_center() {
        let c = DVec2::new(50.0, 50.0);
        let shape = ShapeData::new(0, ShapeKind::Circle, 60.0, 50.0, 5.0);
        let out = SymmetryGroup::P4m.apply(&[shape], c, RotationUnit::Degrees);
        // Blocks: R0, M(R0), R90, M(R90), ...
        assert_eq!((out[2].x, out[2].y), (50.0, 60.0));
        assert_eq!(out[2].rotation, 90.0);
        assert_eq!((out[3].x, out[3].y), (50.0, 60.0));
        assert_eq!(out[3].rotation, -90.0);
        assert_eq!((out[4].x, out[4].y), (40.0, 50.0));
    }

    #[test]
    fn none_is_identity_apart_from_reindex() {
        let out = SymmetryGroup::None.apply(&sample(), DVec2::ZERO, RotationUnit::Radians);
        assert_eq!(out[1].x, 70.0);
        assert_eq!(out[1].index, 1);
    }
}
