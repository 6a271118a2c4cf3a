//! Generated shape records and the sparse user overrides keyed onto them.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod kind;
pub mod payload;

pub use kind::ShapeKind;
pub use payload::{GuillocheCurve, ShapePayload, TruchetTile, TruchetVariant};

/// CSS-style color string, e.g. `#1a2b3c`.
pub type Color = String;

/// Weak reference to an externally loaded image asset.
pub type AssetId = String;

/// Color used whenever a palette turns out to be empty.
pub const FALLBACK_COLOR: &str = "#000000";

/// One generated primitive in layer-local coordinates.
///
/// `index` is the override key and also drives z-order. Optional fields are only meaningful
/// for some kinds; see [`ShapeData::has_legal_fields`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeData {
    pub index: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Radians or degrees, fixed per style (see [`crate::config::Style::rotation_unit`]).
    pub rotation: f64,
    pub color: Color,
    pub stroke: bool,
    pub speed_factor: f64,
    pub phase_offset: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub points: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "char", default, skip_serializing_if = "Option::is_none")
    )]
    pub glyph: Option<char>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub asset_id: Option<AssetId>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub payload: Option<ShapePayload>,
}

impl ShapeData {
    /// Creates a shape with neutral styling; generators fill the rest via the builders.
    pub fn new(index: u32, kind: ShapeKind, x: f64, y: f64, size: f64) -> Self {
        Self {
            index,
            kind,
            x,
            y,
            size,
            rotation: 0.0,
            color: FALLBACK_COLOR.to_owned(),
            stroke: kind.constrain_stroke(false),
            speed_factor: 1.0,
            phase_offset: 0.0,
            points: kind.polygon_sides(),
            seed: None,
            glyph: None,
            asset_id: None,
            payload: None,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the stroke flag, subject to the kind's fill/stroke constraints.
    pub fn with_stroke(mut self, stroke: bool) -> Self {
        self.stroke = self.kind.constrain_stroke(stroke);
        self
    }

    pub fn with_animation(mut self, speed_factor: f64, phase_offset: f64) -> Self {
        self.speed_factor = speed_factor;
        self.phase_offset = phase_offset;
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn with_asset(mut self, asset_id: impl Into<AssetId>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_payload(mut self, payload: ShapePayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Wave amplitude from the payload, if this is a wave band.
    pub fn wave_amplitude(&self) -> Option<f64> {
        match self.payload {
            Some(ShapePayload::Wave { amplitude, .. }) => Some(amplitude),
            _ => None,
        }
    }

    /// Checks the per-kind optional field table.
    pub fn has_legal_fields(&self) -> bool {
        let points_ok = self.points.is_none() || self.kind.allows_points();
        let glyph_ok = self.glyph.is_none() || self.kind.allows_glyph();
        let asset_ok = self.asset_id.is_none() || self.kind.allows_asset();
        let payload_ok = match &self.payload {
            None | Some(ShapePayload::Mosaic { .. }) => true,
            Some(_) => self.kind.allows_payload(),
        };
        let stroke_ok = self.kind.constrain_stroke(self.stroke) == self.stroke;
        points_ok && glyph_ok && asset_ok && payload_ok && stroke_ok
    }
}

/// User edit for one shape, applied at render/hit-test time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeOverride {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub size: Option<f64>,
    pub rotation: Option<f64>,
    pub color: Option<Color>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
}

impl ShapeOverride {
    fn apply(&self, shape: &mut ShapeData) {
        if let Some(x) = self.x {
            shape.x = x;
        }
        if let Some(y) = self.y {
            shape.y = y;
        }
        if let Some(size) = self.size {
            shape.size = size;
        }
        if let Some(rotation) = self.rotation {
            shape.rotation = rotation;
        }
        if let Some(color) = &self.color {
            shape.color = color.clone();
        }
    }
}

/// Overrides keyed by [`ShapeData::index`].
pub type ShapeOverrides = BTreeMap<u32, ShapeOverride>;

/// Returns an edited copy of `shapes`; hidden shapes are dropped. The input is untouched.
pub fn apply_overrides(shapes: &[ShapeData], overrides: &ShapeOverrides) -> Vec<ShapeData> {
    shapes
        .iter()
        .filter_map(|shape| match overrides.get(&shape.index) {
            Some(ov) if ov.hidden => None,
            Some(ov) => {
                let mut edited = shape.clone();
                ov.apply(&mut edited);
                Some(edited)
            }
            None => Some(shape.clone()),
        })
        .collect()
}
