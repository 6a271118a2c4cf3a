//! Layer configuration: the durable artifact a shape sequence is derived from.
//!
//! Every option bag is default-constructed here, so generators never coalesce missing
//! options themselves.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::composition::{Composition, CompositionOptions};
use crate::error::{Error, Result};
use crate::rng::rand01;
use crate::shape::{Color, FALLBACK_COLOR};
use crate::symmetry::SymmetryGroup;

pub mod options;
pub mod structure;

pub use options::{
    AssetRef, CurveFamily, CustomImages, FillColorMode, GuillocheOptions, HerringboneOptions,
    HerringbonePattern, ImageFillOptions, StyleOptions, TextFillOptions, TileColorMode,
    TruchetOptions,
};
pub use structure::{ColorDistribution, DistributionMode, RotationLock, StructureConfig};

/// Inclusive range accepted for [`LayerConfig::complexity`].
pub const COMPLEXITY_RANGE: (i32, i32) = (10, 200);
/// Inclusive range accepted for [`LayerConfig::scale`].
pub const SCALE_RANGE: (f64, f64) = (0.5, 3.0);
/// Maximum number of custom image references on one layer.
pub const MAX_CUSTOM_IMAGES: usize = 5;

/// Pattern style; selects the generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    Grid,
    Hex,
    Isometric,
    Radial,
    #[default]
    Geometric,
    Organic,
    Bauhaus,
    Confetti,
    Memphis,
    Typo,
    Spring,
    Summer,
    Autumn,
    Winter,
    Waves,
    Mosaic,
    Truchet,
    Guilloche,
    Herringbone,
    TextFill,
    ImageFill,
}

/// Unit of [`crate::shape::ShapeData::rotation`] for a style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationUnit {
    Radians,
    Degrees,
}

impl RotationUnit {
    /// Half a turn in this unit.
    pub fn half_turn(self) -> f64 {
        match self {
            RotationUnit::Radians => std::f64::consts::PI,
            RotationUnit::Degrees => 180.0,
        }
    }

    pub fn from_degrees(self, degrees: f64) -> f64 {
        match self {
            RotationUnit::Radians => degrees.to_radians(),
            RotationUnit::Degrees => degrees,
        }
    }

    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            RotationUnit::Radians => value.to_degrees(),
            RotationUnit::Degrees => value,
        }
    }
}

impl Style {
    /// Styles that place shapes through the composition positioner.
    pub fn is_scatter_family(self) -> bool {
        matches!(
            self,
            Style::Geometric
                | Style::Organic
                | Style::Bauhaus
                | Style::Confetti
                | Style::Memphis
                | Style::Typo
                | Style::Spring
                | Style::Summer
                | Style::Autumn
                | Style::Winter
        )
    }

    /// Styles whose layout is already regular; the structure pass skips them.
    pub fn is_self_structured(self) -> bool {
        matches!(
            self,
            Style::Truchet
                | Style::Guilloche
                | Style::Herringbone
                | Style::Waves
                | Style::Isometric
                | Style::Grid
                | Style::Hex
                | Style::Mosaic
        )
    }

    /// Styles that need an external raster lookup.
    pub fn needs_raster(self) -> bool {
        matches!(self, Style::TextFill | Style::ImageFill)
    }

    pub fn rotation_unit(self) -> RotationUnit {
        match self {
            Style::Truchet | Style::Herringbone => RotationUnit::Degrees,
            _ => RotationUnit::Radians,
        }
    }
}

/// Ordered colors plus a background.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub colors: Vec<Color>,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            ["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"],
            "#fdf6e3",
        )
    }
}

impl Palette {
    pub fn new<I, C>(colors: I, background: impl Into<Color>) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Color>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            background: background.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `i` modulo the palette length, or [`FALLBACK_COLOR`].
    pub fn color_at(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            return FALLBACK_COLOR.to_owned();
        }
        self.colors[i % self.colors.len()].clone()
    }

    /// Uniformly drawn color. Consumes one draw even when the palette is empty.
    pub fn pick(&self, rng: &mut dyn RngCore) -> Color {
        let roll = rand01(rng);
        if self.colors.is_empty() {
            return FALLBACK_COLOR.to_owned();
        }
        let i = ((roll * self.colors.len() as f64).floor() as usize).min(self.colors.len() - 1);
        self.colors[i].clone()
    }
}

/// How the stroke flag is chosen per shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeMode {
    #[default]
    Random,
    Fill,
    Stroke,
}

impl StrokeMode {
    /// Resolves the stroke flag; `Random` consumes exactly one draw.
    pub fn resolve(self, rng: &mut dyn RngCore) -> bool {
        match self {
            StrokeMode::Random => rand01(rng) < 0.5,
            StrokeMode::Fill => false,
            StrokeMode::Stroke => true,
        }
    }
}

/// Surface finish applied by the renderer; carried through untouched.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceTexture {
    #[default]
    None,
    Grain,
    Paper,
    Noise,
    Halftone,
}

/// Everything that determines one layer's shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    pub seed: u32,
    pub style: Style,
    pub composition: Composition,
    pub composition_options: CompositionOptions,
    /// Count/density driver, nominally 10–200. Values ≤ 0 generate nothing; values above
    /// the range are capped during generation.
    pub complexity: i32,
    pub scale: f64,
    pub palette: Palette,
    pub stroke_mode: StrokeMode,
    /// Surface finish for the renderer; passed through untouched by generation.
    pub texture: SurfaceTexture,
    pub custom_image: CustomImages,
    pub style_options: StyleOptions,
    pub structure: Option<StructureConfig>,
    pub symmetry: SymmetryGroup,
    pub truchet_options: TruchetOptions,
    pub guilloche_options: GuillocheOptions,
    pub herringbone_options: HerringboneOptions,
    pub text_fill_options: TextFillOptions,
    pub image_fill_options: ImageFillOptions,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            style: Style::default(),
            composition: Composition::default(),
            composition_options: CompositionOptions::default(),
            complexity: 50,
            scale: 1.0,
            palette: Palette::default(),
            stroke_mode: StrokeMode::default(),
            texture: SurfaceTexture::default(),
            custom_image: CustomImages::default(),
            style_options: StyleOptions::default(),
            structure: None,
            symmetry: SymmetryGroup::default(),
            truchet_options: TruchetOptions::default(),
            guilloche_options: GuillocheOptions::default(),
            herringbone_options: HerringboneOptions::default(),
            text_fill_options: TextFillOptions::default(),
            image_fill_options: ImageFillOptions::default(),
        }
    }
}

impl LayerConfig {
    /// Creates a config with default options for `style`.
    pub fn new(seed: u32, style: Style) -> Self {
        Self {
            seed,
            style,
            ..Default::default()
        }
    }

    pub fn with_complexity(mut self, complexity: i32) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_composition_options(mut self, options: CompositionOptions) -> Self {
        self.composition_options = options;
        self
    }

    pub fn with_stroke_mode(mut self, stroke_mode: StrokeMode) -> Self {
        self.stroke_mode = stroke_mode;
        self
    }

    pub fn with_style_options(mut self, options: StyleOptions) -> Self {
        self.style_options = options;
        self
    }

    pub fn with_custom_images(mut self, images: CustomImages) -> Self {
        self.custom_image = images;
        self
    }

    pub fn with_structure(mut self, structure: StructureConfig) -> Self {
        self.structure = Some(structure);
        self
    }

    pub fn with_symmetry(mut self, symmetry: SymmetryGroup) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_truchet(mut self, options: TruchetOptions) -> Self {
        self.truchet_options = options;
        self
    }

    pub fn with_guilloche(mut self, options: GuillocheOptions) -> Self {
        self.guilloche_options = options;
        self
    }

    pub fn with_herringbone(mut self, options: HerringboneOptions) -> Self {
        self.herringbone_options = options;
        self
    }

    pub fn with_text_fill(mut self, options: TextFillOptions) -> Self {
        self.text_fill_options = options;
        self
    }

    pub fn with_image_fill(mut self, options: ImageFillOptions) -> Self {
        self.image_fill_options = options;
        self
    }

    /// Scale clamped to [`SCALE_RANGE`]; non-finite values fall back to 1.
    pub fn effective_scale(&self) -> f64 {
        if self.scale.is_finite() {
            self.scale.clamp(SCALE_RANGE.0, SCALE_RANGE.1)
        } else {
            warn!("Non-finite scale {}; using 1.0.", self.scale);
            1.0
        }
    }

    /// Checks the caller-side contract. Generation tolerates violations (empty palette falls
    /// back to black, scale and complexity are clamped), but persisted configs should pass.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = COMPLEXITY_RANGE;
        if !(lo..=hi).contains(&self.complexity) {
            return Err(Error::InvalidConfig(format!(
                "complexity must be in {lo}..={hi}, got {}",
                self.complexity
            )));
        }
        if self.seed & 0x7fff_ffff == 0 {
            return Err(Error::InvalidConfig(
                "seed must be non-zero for reproducible output".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig("scale must be finite and > 0".into()));
        }
        if self.custom_image.assets.len() > MAX_CUSTOM_IMAGES {
            return Err(Error::InvalidConfig(format!(
                "at most {MAX_CUSTOM_IMAGES} custom images are supported, got {}",
                self.custom_image.assets.len()
            )));
        }
        if let Some(kinds) = &self.style_options.shape_types {
            if kinds.is_empty() {
                return Err(Error::InvalidConfig(
                    "styleOptions.shapeTypes must not be empty when present".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::tests::FixedRng;

    #[test]
    fn default_config_validates() {
        LayerConfig::default().validate().expect("default is valid");
    }

    #[test]
    fn validate_rejects_contract_violations() {
        let empty = LayerConfig::default().with_palette(Palette::new(Vec::<String>::new(), "#fff"));
        assert!(matches!(empty.validate(), Err(Error::InvalidConfig(_))));

        let zero_seed = LayerConfig::new(0, Style::Grid);
        assert!(zero_seed.validate().is_err());

        let mut many = LayerConfig::default();
        many.custom_image.assets = (0..6).map(|i| AssetRef::new(format!("a{i}"))).collect();
        assert!(many.validate().is_err());
    }

    #[test]
    fn validate_bounds_complexity() {
        for bad in [1_000_000, 201, 9, 0, -3] {
            let config = LayerConfig::default().with_complexity(bad);
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig(_))),
                "complexity {bad} accepted"
            );
        }
        for good in [COMPLEXITY_RANGE.0, 120, COMPLEXITY_RANGE.1] {
            assert!(LayerConfig::default().with_complexity(good).validate().is_ok());
        }
    }

    #[test]
    fn empty_palette_pick_falls_back_but_consumes_draw() {
        let palette = Palette::new(Vec::<String>::new(), "#fff");
        let mut rng = crate::rng::SeededRng::new(5);
        let before = rng.state();
        assert_eq!(palette.pick(&mut rng), FALLBACK_COLOR);
        assert_ne!(rng.state(), before);
    }

    #[test]
    fn stroke_mode_resolves() {
        let mut low = FixedRng::at(0.1);
        let mut high = FixedRng::at(0.9);
        assert!(StrokeMode::Random.resolve(&mut low));
        assert!(!StrokeMode::Random.resolve(&mut high));
        assert!(StrokeMode::Stroke.resolve(&mut high));
        assert!(!StrokeMode::Fill.resolve(&mut low));
    }

    #[test]
    fn self_structured_and_scatter_families_are_disjoint() {
        for style in [Style::Grid, Style::Hex, Style::Waves, Style::Truchet, Style::Mosaic] {
            assert!(style.is_self_structured());
            assert!(!style.is_scatter_family());
        }
        assert!(!Style::Radial.is_self_structured());
        assert!(!Style::TextFill.is_self_structured());
        assert!(Style::Winter.is_scatter_family());
    }

    #[test]
    fn effective_scale_is_clamped() {
        assert_eq!(LayerConfig::default().with_scale(10.0).effective_scale(), 3.0);
        assert_eq!(LayerConfig::default().with_scale(0.1).effective_scale(), 0.5);
    }
}
