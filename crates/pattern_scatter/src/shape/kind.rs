//! Closed set of draw-kinds a generated shape can carry.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the renderer should draw for a shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    // Geometric primitives.
    Circle,
    Square,
    Triangle,
    Rectangle,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Cross,
    Ring,
    Semicircle,
    QuarterCircle,
    Arc,
    Line,
    Ellipse,
    // Organic.
    Blob,
    Leaf,
    Droplet,
    Petal,
    Pebble,
    Squiggle,
    // Bauhaus.
    Bar,
    Arch,
    HalfRing,
    // Confetti.
    Streamer,
    Sprinkle,
    Dot,
    // Memphis.
    Zigzag,
    Pill,
    DotGrid,
    TriangleOutline,
    Spiral,
    /// A single character; the only kind that carries `glyph`.
    Glyph,
    // Spring.
    Flower,
    Tulip,
    Butterfly,
    Raindrop,
    Sprout,
    // Summer.
    Sun,
    PalmLeaf,
    Shell,
    IceCream,
    Starfish,
    // Autumn.
    MapleLeaf,
    Acorn,
    Mushroom,
    Pumpkin,
    // Winter.
    Snowflake,
    PineTree,
    Mitten,
    Icicle,
    // Generator-specific.
    /// Externally loaded asset referenced by `asset_id`.
    Image,
    Cube,
    Wave,
    TruchetTile,
    GuillocheCurve,
    HerringboneTile,
}

impl ShapeKind {
    /// Kinds the renderer always fills.
    pub fn is_fill_only(self) -> bool {
        matches!(
            self,
            ShapeKind::Image | ShapeKind::Cube | ShapeKind::Glyph | ShapeKind::Dot | ShapeKind::DotGrid
        )
    }

    /// Kinds the renderer always strokes.
    pub fn is_stroke_only(self) -> bool {
        matches!(
            self,
            ShapeKind::Line
                | ShapeKind::Arc
                | ShapeKind::Squiggle
                | ShapeKind::Zigzag
                | ShapeKind::Spiral
                | ShapeKind::Streamer
                | ShapeKind::Wave
                | ShapeKind::TruchetTile
                | ShapeKind::GuillocheCurve
        )
    }

    /// Resolves the stroke flag against the kind's construction constraints.
    pub fn constrain_stroke(self, stroke: bool) -> bool {
        if self.is_fill_only() {
            false
        } else if self.is_stroke_only() {
            true
        } else {
            stroke
        }
    }

    /// Polygon side count (or star point count) implied by the kind.
    pub fn polygon_sides(self) -> Option<u32> {
        match self {
            ShapeKind::Triangle | ShapeKind::TriangleOutline => Some(3),
            ShapeKind::Pentagon | ShapeKind::Star | ShapeKind::Starfish => Some(5),
            ShapeKind::Hexagon | ShapeKind::Snowflake => Some(6),
            ShapeKind::Octagon => Some(8),
            _ => None,
        }
    }

    /// Whether `points` is meaningful for this kind.
    pub fn allows_points(self) -> bool {
        self.polygon_sides().is_some()
            || matches!(
                self,
                ShapeKind::Wave | ShapeKind::TruchetTile | ShapeKind::GuillocheCurve
            )
    }

    /// Whether `glyph` is meaningful for this kind.
    pub fn allows_glyph(self) -> bool {
        self == ShapeKind::Glyph
    }

    /// Whether `asset_id` is meaningful for this kind.
    pub fn allows_asset(self) -> bool {
        self == ShapeKind::Image
    }

    /// Whether a structured payload is meaningful for this kind.
    pub fn allows_payload(self) -> bool {
        matches!(
            self,
            ShapeKind::Wave
                | ShapeKind::TruchetTile
                | ShapeKind::GuillocheCurve
                | ShapeKind::HerringboneTile
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_and_stroke_sets_are_disjoint() {
        let all = [
            ShapeKind::Image,
            ShapeKind::Cube,
            ShapeKind::Glyph,
            ShapeKind::Dot,
            ShapeKind::DotGrid,
            ShapeKind::Line,
            ShapeKind::Wave,
            ShapeKind::TruchetTile,
            ShapeKind::Circle,
        ];
        for kind in all {
            assert!(!(kind.is_fill_only() && kind.is_stroke_only()), "{kind:?}");
        }
    }

    #[test]
    fn constrain_stroke_respects_construction() {
        assert!(!ShapeKind::Cube.constrain_stroke(true));
        assert!(ShapeKind::Wave.constrain_stroke(false));
        assert!(ShapeKind::Circle.constrain_stroke(true));
        assert!(!ShapeKind::Circle.constrain_stroke(false));
    }

    #[test]
    fn optional_field_legality() {
        assert!(ShapeKind::Glyph.allows_glyph());
        assert!(!ShapeKind::Circle.allows_glyph());
        assert!(ShapeKind::Image.allows_asset());
        assert!(ShapeKind::Hexagon.allows_points());
        assert!(!ShapeKind::Circle.allows_points());
        assert_eq!(ShapeKind::Hexagon.polygon_sides(), Some(6));
    }
}
