//! Structure post-processor applied after generation.
//!
//! Passes run in a fixed order: distribution remap, per-shape normalization (including color
//! assignment), then minimum-spacing relaxation. None of them draw from the layer RNG.
use glam::DVec2;
use tracing::debug;

use crate::config::{LayerConfig, Palette, RotationUnit, StructureConfig};
use crate::shape::ShapeData;

pub mod distribution;
pub mod normalize;
pub mod spacing;

pub use distribution::distribute;
pub use normalize::{distributed_color, normalize, snap_rotation};
pub use spacing::{relax_spacing, relax_spacing_step, total_overlap};

/// Canvas and layer facts the structure passes need.
#[derive(Clone, Copy, Debug)]
pub struct StructureContext<'a> {
    pub extent: DVec2,
    pub scale: f64,
    pub unit: RotationUnit,
    pub palette: &'a Palette,
    pub seed: u32,
}

impl<'a> StructureContext<'a> {
    pub fn new(width: f64, height: f64, config: &'a LayerConfig) -> Self {
        Self {
            extent: DVec2::new(width, height),
            scale: config.effective_scale(),
            unit: config.style.rotation_unit(),
            palette: &config.palette,
            seed: config.seed,
        }
    }
}

/// Whether the structure pass runs for `config`.
pub fn applies_to(config: &LayerConfig) -> bool {
    config.structure.is_some() && !config.style.is_self_structured()
}

/// Runs every structure pass over `shapes`.
///
/// Spacing relaxation is skipped entirely when `min_spacing` is 0; overlapping shapes are
/// then not pushed out to the `(sizeA + sizeB) / 2` contact distance.
pub fn apply_structure(
    mut shapes: Vec<ShapeData>,
    structure: &StructureConfig,
    ctx: &StructureContext<'_>,
) -> Vec<ShapeData> {
    distribute(&mut shapes, structure.distribution_mode, ctx.extent);
    normalize(
        &mut shapes,
        structure,
        ctx.extent,
        ctx.scale,
        ctx.unit,
        ctx.palette,
        ctx.seed,
    );
    let clearance = structure.min_spacing_factor();
    if clearance > 0.0 {
        relax_spacing(&mut shapes, clearance, ctx.extent);
    }
    debug!(
        count = shapes.len(),
        mode = ?structure.distribution_mode,
        clearance,
        "structure applied"
    );
    shapes
}
