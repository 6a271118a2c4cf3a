#![forbid(unsafe_code)]
//! pattern_scatter: Seeded, deterministic generation of decorative shape patterns.
//!
//! Modules:
//! - rng: the LCG seeded engine behind every draw
//! - composition: layout strategies for scattered styles
//! - config: layer configuration and option bags
//! - shape: shape records, kinds, payloads and overrides
//! - generators: per-style generators and the raster lookup seam for mosaic fills
//! - structure: distribution, normalization and spacing passes
//! - symmetry: wallpaper-group replication
//! - pipeline: dispatcher, events and hit testing
//!
//! Generation is a pure function of `(LayerConfig, canvas)`: the same seed always yields the
//! same shape sequence.
pub mod composition;
pub mod config;
pub mod error;
pub mod generators;
pub mod pipeline;
pub mod rng;
pub mod shape;
pub mod structure;
pub mod symmetry;

/// Convenient re-exports for common types. Import with `use pattern_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::composition::{Composition, CompositionOptions, DiagonalDirection};
    pub use crate::config::{
        AssetRef, ColorDistribution, CurveFamily, CustomImages, DistributionMode,
        FillColorMode, GuillocheOptions, HerringboneOptions, HerringbonePattern,
        ImageFillOptions, LayerConfig, Palette, RotationLock, RotationUnit, StrokeMode,
        StructureConfig, Style, StyleOptions, SurfaceTexture, TextFillOptions, TileColorMode,
        TruchetOptions,
    };
    pub use crate::error::{Error, Result};
    pub use crate::generators::fill::FillRegion;
    pub use crate::generators::{
        GenerateContext, RasterLookup, RasterSample, RasterSource, StyleGenerator,
    };
    pub use crate::pipeline::{
        generate_layer, shape_contains, AppState, Canvas, EventSink, FnSink, GenerationEvent,
        GenerationEventKind, Generator, HitResult, LayerState, MultiSink, VecSink,
    };
    pub use crate::rng::{seed_for_shape, SeededRng};
    pub use crate::shape::{
        apply_overrides, Color, ShapeData, ShapeKind, ShapeOverride, ShapeOverrides,
        ShapePayload, TruchetTile, TruchetVariant,
    };
    pub use crate::structure::{apply_structure, StructureContext};
    pub use crate::symmetry::SymmetryGroup;
}
