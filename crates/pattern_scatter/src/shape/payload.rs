//! Structured per-family data attached to generator-specific shapes.
//!
//! The legacy wire format packs some of this into `points`/`seed`; generators still fill
//! those for renderer compatibility, and the payload is the typed source of truth.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Auxiliary data for one shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "family", rename_all = "kebab-case"))]
#[derive(Clone, Debug, PartialEq)]
pub enum ShapePayload {
    /// One horizontal wave band.
    Wave {
        band: u32,
        amplitude: f64,
        frequency: f64,
    },
    Truchet(TruchetTile),
    Guilloche(GuillocheCurve),
    /// Footprint of a mosaic block, in cells and pixels.
    Mosaic {
        span_cols: u32,
        span_rows: u32,
        width: f64,
        height: f64,
    },
    /// Rectangular herringbone/chevron/basket-weave tile.
    Tile { length: f64, width: f64 },
}

/// Which arc pair a truchet tile draws.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TruchetVariant {
    /// North↔East and South↔West.
    ArcA,
    /// North↔West and East↔South.
    ArcB,
}

impl TruchetVariant {
    pub fn code(self) -> u32 {
        match self {
            TruchetVariant::ArcA => 0,
            TruchetVariant::ArcB => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            TruchetVariant::ArcA => TruchetVariant::ArcB,
            TruchetVariant::ArcB => TruchetVariant::ArcA,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TruchetTile {
    pub variant: TruchetVariant,
    pub stroke_weight: f64,
    pub arc_weight: f64,
    pub concentric_rings: u32,
}

impl TruchetTile {
    /// Packed tile code carried in `points`: variant in bit 0, ring count above it.
    pub fn packed_code(&self) -> u32 {
        self.variant.code() | (self.concentric_rings << 1)
    }

    /// Packed weights carried in `seed`: stroke and arc weight in per-mille, 16 bits each.
    pub fn packed_weights(&self) -> u32 {
        let stroke = (self.stroke_weight * 1000.0).round().clamp(0.0, 65_535.0) as u32;
        let arc = (self.arc_weight * 1000.0).round().clamp(0.0, 65_535.0) as u32;
        (stroke << 16) | arc
    }

    /// Inverse of [`Self::packed_code`] and [`Self::packed_weights`].
    pub fn unpack(code: u32, weights: u32) -> Self {
        Self {
            variant: if code & 1 == 0 {
                TruchetVariant::ArcA
            } else {
                TruchetVariant::ArcB
            },
            concentric_rings: code >> 1,
            stroke_weight: (weights >> 16) as f64 / 1000.0,
            arc_weight: (weights & 0xffff) as f64 / 1000.0,
        }
    }
}

/// A sampled closed trochoid curve. Points are offsets from the shape's `(x, y)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GuillocheCurve {
    pub layer: u32,
    pub revolutions: u32,
    pub line_width: f64,
    pub points: Vec<[f64; 2]>,
}
