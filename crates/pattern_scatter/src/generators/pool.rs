//! Default shape allow-lists per style.
use crate::config::{Style, StyleOptions};
use crate::shape::ShapeKind;

const GEOMETRIC: &[ShapeKind] = &[
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Triangle,
    ShapeKind::Rectangle,
    ShapeKind::Diamond,
    ShapeKind::Pentagon,
    ShapeKind::Hexagon,
    ShapeKind::Octagon,
    ShapeKind::Star,
    ShapeKind::Cross,
    ShapeKind::Ring,
    ShapeKind::Ellipse,
];

const ORGANIC: &[ShapeKind] = &[
    ShapeKind::Blob,
    ShapeKind::Leaf,
    ShapeKind::Droplet,
    ShapeKind::Petal,
    ShapeKind::Pebble,
    ShapeKind::Squiggle,
];

const BAUHAUS: &[ShapeKind] = &[
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Semicircle,
    ShapeKind::QuarterCircle,
    ShapeKind::Bar,
    ShapeKind::Arch,
    ShapeKind::HalfRing,
    ShapeKind::Triangle,
];

const CONFETTI: &[ShapeKind] = &[
    ShapeKind::Streamer,
    ShapeKind::Sprinkle,
    ShapeKind::Dot,
    ShapeKind::Square,
    ShapeKind::Triangle,
    ShapeKind::Circle,
];

const MEMPHIS: &[ShapeKind] = &[
    ShapeKind::Zigzag,
    ShapeKind::Pill,
    ShapeKind::DotGrid,
    ShapeKind::TriangleOutline,
    ShapeKind::Spiral,
    ShapeKind::Squiggle,
    ShapeKind::Circle,
];

const TYPO: &[ShapeKind] = &[ShapeKind::Glyph];

const SPRING: &[ShapeKind] = &[
    ShapeKind::Flower,
    ShapeKind::Tulip,
    ShapeKind::Butterfly,
    ShapeKind::Raindrop,
    ShapeKind::Sprout,
    ShapeKind::Petal,
];

const SUMMER: &[ShapeKind] = &[
    ShapeKind::Sun,
    ShapeKind::PalmLeaf,
    ShapeKind::Shell,
    ShapeKind::IceCream,
    ShapeKind::Starfish,
];

const AUTUMN: &[ShapeKind] = &[
    ShapeKind::MapleLeaf,
    ShapeKind::Acorn,
    ShapeKind::Mushroom,
    ShapeKind::Pumpkin,
    ShapeKind::Leaf,
];

const WINTER: &[ShapeKind] = &[
    ShapeKind::Snowflake,
    ShapeKind::PineTree,
    ShapeKind::Mitten,
    ShapeKind::Icicle,
    ShapeKind::Star,
];

const GRID: &[ShapeKind] = &[
    ShapeKind::Square,
    ShapeKind::Circle,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
    ShapeKind::Cross,
    ShapeKind::Ring,
    ShapeKind::Semicircle,
    ShapeKind::QuarterCircle,
];

const RADIAL: &[ShapeKind] = &[
    ShapeKind::Circle,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
    ShapeKind::Petal,
    ShapeKind::Star,
];

const MOSAIC: &[ShapeKind] = &[
    ShapeKind::Square,
    ShapeKind::Circle,
    ShapeKind::QuarterCircle,
    ShapeKind::Semicircle,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
];

const FILL: &[ShapeKind] = &[
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
    ShapeKind::Hexagon,
    ShapeKind::Star,
];

/// Glyphs drawn by the `typo` style.
pub const TYPO_CHARSET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '&', '@', '#', '?', '!', '*',
];

/// Built-in allow-list for `style`.
pub fn default_kinds(style: Style) -> &'static [ShapeKind] {
    match style {
        Style::Grid => GRID,
        Style::Radial => RADIAL,
        Style::Mosaic => MOSAIC,
        Style::Geometric => GEOMETRIC,
        Style::Organic => ORGANIC,
        Style::Bauhaus => BAUHAUS,
        Style::Confetti => CONFETTI,
        Style::Memphis => MEMPHIS,
        Style::Typo => TYPO,
        Style::Spring => SPRING,
        Style::Summer => SUMMER,
        Style::Autumn => AUTUMN,
        Style::Winter => WINTER,
        Style::TextFill | Style::ImageFill => FILL,
        Style::Hex => &[ShapeKind::Hexagon],
        Style::Isometric => &[ShapeKind::Cube],
        Style::Waves => &[ShapeKind::Wave],
        Style::Truchet => &[ShapeKind::TruchetTile],
        Style::Guilloche => &[ShapeKind::GuillocheCurve],
        Style::Herringbone => &[ShapeKind::HerringboneTile],
    }
}

/// User selection replaces the defaults entirely; it is never intersected with them.
pub fn resolve_kinds(style: Style, options: &StyleOptions) -> &[ShapeKind] {
    match &options.shape_types {
        Some(kinds) if !kinds.is_empty() => kinds.as_slice(),
        _ => default_kinds(style),
    }
}
