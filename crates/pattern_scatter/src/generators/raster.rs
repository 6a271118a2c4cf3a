//! Raster lookup seam used by the text-fill and image-fill generators.
//!
//! The core never rasterizes. A [`RasterSource`] prepares a per-call [`RasterLookup`] over a
//! silhouette the caller renders; the lookup is dropped when the generation call returns.
use crate::config::LayerConfig;
use crate::error::Result;
use crate::shape::Color;

/// Result of probing one point of the silhouette.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterSample {
    pub inside: bool,
    /// Source pixel color, when the raster carries one.
    pub color: Option<Color>,
}

impl RasterSample {
    pub fn outside() -> Self {
        Self::default()
    }

    pub fn inside() -> Self {
        Self {
            inside: true,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Read-only inside/color oracle over canvas coordinates.
pub trait RasterLookup: Send + Sync {
    fn sample(&self, x: f64, y: f64) -> RasterSample;
}

impl<F> RasterLookup for F
where
    F: Fn(f64, f64) -> RasterSample + Send + Sync,
{
    fn sample(&self, x: f64, y: f64) -> RasterSample {
        self(x, y)
    }
}

/// Builds a lookup for one layer and canvas.
pub trait RasterSource: Send + Sync {
    fn prepare(&self, config: &LayerConfig, width: f64, height: f64)
        -> Result<Box<dyn RasterLookup>>;
}
