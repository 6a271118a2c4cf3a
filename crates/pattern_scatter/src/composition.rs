//! Layout strategies that place scattered shapes on the canvas.
//!
//! Each strategy maps a canvas extent and the layer RNG to one point. Draw order inside a
//! strategy is fixed; changing it changes every shape that follows for a given seed.
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use glam::DVec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rng::{rand01, rand_range};

/// Named layout strategy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Composition {
    /// Gaussian cloud around the centre.
    Center,
    /// Bands along the four edges.
    Frame,
    Diagonal,
    /// Rule-of-thirds intersections.
    Thirds,
    Bottom,
    Cross,
    XShape,
    Ring,
    SplitV,
    SplitH,
    Corners,
    #[default]
    Random,
}

/// Direction of the [`Composition::Diagonal`] line in screen space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiagonalDirection {
    /// Top-left to bottom-right.
    #[default]
    Descending,
    /// Bottom-left to top-right.
    Ascending,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct CompositionOptions {
    /// Edge band thickness for [`Composition::Frame`], as a fraction of each axis.
    pub margin: f64,
    pub diagonal: DiagonalDirection,
}

impl Default for CompositionOptions {
    fn default() -> Self {
        Self {
            margin: 0.25,
            diagonal: DiagonalDirection::Descending,
        }
    }
}

const CENTER_SPREAD: f64 = 0.2;
const DIAGONAL_NOISE: f64 = 0.5;
const THIRDS: [(f64, f64); 4] = [(0.33, 0.33), (0.66, 0.33), (0.33, 0.66), (0.66, 0.66)];
const THIRDS_JITTER: f64 = 0.15;
const CROSS_THICKNESS: f64 = 0.4;
const X_SHAPE_JITTER: f64 = 0.15;
const RING_RADII: (f64, f64) = (0.25, 0.45);
const CORNER_EXTENT: f64 = 0.25;

impl Composition {
    /// Samples one position inside a `extent.x × extent.y` canvas with origin top-left.
    pub fn sample(
        self,
        extent: Vector2<f64>,
        options: &CompositionOptions,
        rng: &mut dyn RngCore,
    ) -> Vector2<f64> {
        let extent = DVec2::from(extent);
        let (w, h) = (extent.x, extent.y);
        let p = match self {
            Composition::Center => {
                let (nx, ny) = box_muller_pair(rng);
                let p = DVec2::new(w * 0.5 + nx * w * CENTER_SPREAD, h * 0.5 + ny * h * CENTER_SPREAD);
                p.clamp(DVec2::ZERO, extent)
            }
            Composition::Frame => {
                let edge = (rand01(rng) * 4.0).floor() as u32;
                let m = options.margin.clamp(0.0, 0.5);
                let u = rand01(rng);
                let v = rand01(rng);
                match edge {
                    0 => DVec2::new(u * w, v * m * h),
                    1 => DVec2::new(w - v * m * w, u * h),
                    2 => DVec2::new(u * w, h - v * m * h),
                    _ => DVec2::new(v * m * w, u * h),
                }
            }
            Composition::Diagonal => {
                let x = rand01(rng) * w;
                let t = x / w;
                let ideal = match options.diagonal {
                    DiagonalDirection::Descending => t * h,
                    DiagonalDirection::Ascending => (1.0 - t) * h,
                };
                let noise = (rand01(rng) - 0.5) * DIAGONAL_NOISE * h;
                DVec2::new(x, (ideal + noise).clamp(0.0, h))
            }
            Composition::Thirds => {
                let (fx, fy) = THIRDS[(rand01(rng) * 4.0).floor().min(3.0) as usize];
                let jx = rand_range(rng, -THIRDS_JITTER, THIRDS_JITTER);
                let jy = rand_range(rng, -THIRDS_JITTER, THIRDS_JITTER);
                DVec2::new((fx + jx) * w, (fy + jy) * h)
            }
            Composition::Bottom => {
                let x = rand01(rng) * w;
                // sqrt pushes mass towards y = h, the bottom edge in screen space.
                let y = rand01(rng).sqrt() * h;
                DVec2::new(x, y)
            }
            Composition::Cross => {
                let horizontal = rand01(rng) < 0.5;
                let along = rand01(rng);
                let across = rand01(rng) - 0.5;
                if horizontal {
                    DVec2::new(along * w, h * 0.5 + across * CROSS_THICKNESS * h)
                } else {
                    DVec2::new(w * 0.5 + across * CROSS_THICKNESS * w, along * h)
                }
            }
            Composition::XShape => {
                let main = rand01(rng) < 0.5;
                let t = rand01(rng);
                let offset = rand_range(rng, -X_SHAPE_JITTER, X_SHAPE_JITTER) * w.min(h);
                let (base, normal) = if main {
                    (DVec2::new(t * w, t * h), DVec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2))
                } else {
                    (DVec2::new(t * w, (1.0 - t) * h), DVec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2))
                };
                base + normal * offset
            }
            Composition::Ring => {
                let angle = rand01(rng) * 2.0 * PI;
                let r = rand_range(rng, RING_RADII.0, RING_RADII.1) * w.min(h);
                extent * 0.5 + DVec2::new(angle.cos(), angle.sin()) * r
            }
            Composition::SplitV => DVec2::new(w * 0.5 + rand01(rng) * w * 0.5, rand01(rng) * h),
            Composition::SplitH => {
                let x = rand01(rng) * w;
                DVec2::new(x, h * 0.5 + rand01(rng) * h * 0.5)
            }
            Composition::Corners => {
                let corner = (rand01(rng) * 4.0).floor() as u32;
                let s = CORNER_EXTENT * w.min(h);
                let dx = rand01(rng) * s;
                let dy = rand01(rng) * s;
                match corner {
                    0 => DVec2::new(dx, dy),
                    1 => DVec2::new(w - dx, dy),
                    2 => DVec2::new(dx, h - dy),
                    _ => DVec2::new(w - dx, h - dy),
                }
            }
            Composition::Random => {
                let x = rand01(rng) * w;
                DVec2::new(x, rand01(rng) * h)
            }
        };
        p.into()
    }
}

/// Standard normal pair via Box–Muller; consumes two draws.
pub(crate) fn box_muller_pair(rng: &mut dyn RngCore) -> (f64, f64) {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;

    (r * theta.cos(), r * theta.sin())
}
