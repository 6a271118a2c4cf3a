//! Per-style option bags with explicit defaults.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shape::{AssetId, ShapeKind};

/// Shape allow-list override and grid spacing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOptions {
    /// Replaces the style's default allow-list wholesale when present and non-empty.
    pub shape_types: Option<Vec<ShapeKind>>,
    /// Pixels removed from each grid cell before sizing its shape.
    pub grid_gap: f64,
}

impl StyleOptions {
    pub fn with_shape_types(mut self, kinds: Vec<ShapeKind>) -> Self {
        self.shape_types = Some(kinds);
        self
    }

    pub fn with_grid_gap(mut self, gap: f64) -> Self {
        self.grid_gap = gap;
        self
    }
}

/// Reference to an externally loaded image.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRef {
    pub id: AssetId,
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

#[cfg(feature = "serde")]
fn enabled_by_default() -> bool {
    true
}

impl AssetRef {
    pub fn new(id: impl Into<AssetId>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Up to five custom images that replace generated shape kinds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomImages {
    pub assets: Vec<AssetRef>,
    /// Draw images in their own colors rather than tinted with the shape color. Read by the
    /// renderer only; generation ignores it.
    pub use_original_colors: bool,
}

impl CustomImages {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AssetId>,
    {
        Self {
            assets: ids.into_iter().map(AssetRef::new).collect(),
            use_original_colors: false,
        }
    }

    /// Ids of enabled assets, in configuration order.
    pub fn enabled_ids(&self) -> Vec<&str> {
        self.assets
            .iter()
            .filter(|a| a.enabled)
            .map(|a| a.id.as_str())
            .collect()
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct TruchetOptions {
    /// Cells along the shorter canvas side; clamped to 4–20.
    pub maze_density: u32,
    /// Stroke width as a fraction of the cell size.
    pub stroke_weight: f64,
    /// Arc thickness as a fraction of the cell size.
    pub arc_weight: f64,
    /// Extra concentric arcs drawn inside each quarter circle.
    pub concentric_rings: u32,
}

impl Default for TruchetOptions {
    fn default() -> Self {
        Self {
            maze_density: 10,
            stroke_weight: 0.08,
            arc_weight: 0.5,
            concentric_rings: 0,
        }
    }
}

impl TruchetOptions {
    pub const DENSITY_RANGE: (u32, u32) = (4, 20);

    pub fn with_maze_density(mut self, density: u32) -> Self {
        self.maze_density = density;
        self
    }

    pub fn with_concentric_rings(mut self, rings: u32) -> Self {
        self.concentric_rings = rings;
        self
    }

    pub fn clamped_density(&self) -> u32 {
        self.maze_density
            .clamp(Self::DENSITY_RANGE.0, Self::DENSITY_RANGE.1)
    }
}

/// Which trochoid family a guilloché layer draws.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveFamily {
    /// Circle rolling inside another.
    #[default]
    Hypotrochoid,
    /// Circle rolling outside another.
    Epitrochoid,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct GuillocheOptions {
    pub curve: CurveFamily,
    /// Fixed circle radius in design units (integer so closure can be computed exactly).
    pub major_radius: u32,
    /// Rolling circle radius in design units.
    pub minor_radius: u32,
    /// Pen distance from the rolling circle's centre, as a fraction of `minor_radius`.
    pub pen_offset: f64,
    pub layer_count: u32,
    /// Radius reduction per layer, e.g. 0.12 shrinks each layer by 12%.
    pub layer_shrink: f64,
    /// Rotation added per layer, in radians.
    pub layer_rotation: f64,
    pub line_width: f64,
}

impl Default for GuillocheOptions {
    fn default() -> Self {
        Self {
            curve: CurveFamily::Hypotrochoid,
            major_radius: 100,
            minor_radius: 40,
            pen_offset: 0.8,
            layer_count: 3,
            layer_shrink: 0.12,
            layer_rotation: 0.1,
            line_width: 1.0,
        }
    }
}

impl GuillocheOptions {
    pub fn with_radii(mut self, major: u32, minor: u32) -> Self {
        self.major_radius = major;
        self.minor_radius = minor;
        self
    }

    pub fn with_curve(mut self, curve: CurveFamily) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_layer_count(mut self, count: u32) -> Self {
        self.layer_count = count;
        self
    }

    pub fn with_layer_shrink(mut self, shrink: f64) -> Self {
        self.layer_shrink = shrink;
        self
    }

    pub const LAYER_RANGE: (u32, u32) = (1, 12);
    /// Upper bound for [`Self::layer_shrink`]; keeps every layer at a positive radius.
    pub const MAX_LAYER_SHRINK: f64 = 0.95;

    pub fn clamped_layer_count(&self) -> u32 {
        self.layer_count
            .clamp(Self::LAYER_RANGE.0, Self::LAYER_RANGE.1)
    }

    /// Shrink in `[0, MAX_LAYER_SHRINK]`; non-finite values disable shrinking.
    pub fn clamped_layer_shrink(&self) -> f64 {
        if self.layer_shrink.is_finite() {
            self.layer_shrink.clamp(0.0, Self::MAX_LAYER_SHRINK)
        } else {
            0.0
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HerringbonePattern {
    #[default]
    Herringbone,
    Chevron,
    BasketWeave,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileColorMode {
    /// First palette color for every tile.
    Mono,
    /// Palette color by tile parity.
    #[default]
    Alternating,
    /// Palette color drawn per tile.
    Random,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct HerringboneOptions {
    pub pattern: HerringbonePattern,
    /// Tile length divided by tile width; clamped to 1.5–6.
    pub tile_ratio: f64,
    pub color_mode: TileColorMode,
}

impl Default for HerringboneOptions {
    fn default() -> Self {
        Self {
            pattern: HerringbonePattern::Herringbone,
            tile_ratio: 3.0,
            color_mode: TileColorMode::Alternating,
        }
    }
}

impl HerringboneOptions {
    pub const RATIO_RANGE: (f64, f64) = (1.5, 6.0);

    pub fn with_pattern(mut self, pattern: HerringbonePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_color_mode(mut self, mode: TileColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    pub fn clamped_ratio(&self) -> f64 {
        if self.tile_ratio.is_finite() {
            self.tile_ratio
                .clamp(Self::RATIO_RANGE.0, Self::RATIO_RANGE.1)
        } else {
            3.0
        }
    }
}

/// Text silhouette for the text-fill mosaic.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct TextFillOptions {
    pub text: String,
    /// Font size as a fraction of the canvas height.
    pub font_size: f64,
    pub line_height: f64,
}

impl Default for TextFillOptions {
    fn default() -> Self {
        Self {
            text: "HELLO".into(),
            font_size: 0.35,
            line_height: 1.2,
        }
    }
}

impl TextFillOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillColorMode {
    #[default]
    Palette,
    /// Use the sampled source pixel color.
    Raw,
}

/// Image silhouette for the image-fill mosaic.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFillOptions {
    /// Source image, resolved by the raster collaborator.
    pub asset_id: Option<AssetId>,
    pub color_mode: FillColorMode,
    /// Fraction of the canvas the image region covers, 0–1.
    pub coverage: f64,
}

impl Default for ImageFillOptions {
    fn default() -> Self {
        Self {
            asset_id: None,
            color_mode: FillColorMode::Palette,
            coverage: 0.9,
        }
    }
}

impl ImageFillOptions {
    pub fn with_color_mode(mut self, mode: FillColorMode) -> Self {
        self.color_mode = mode;
        self
    }
}
