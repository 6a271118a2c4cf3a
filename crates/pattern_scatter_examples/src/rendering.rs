use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};
use pattern_scatter::prelude::*;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Output image size and the canvas it previews.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub canvas: Canvas,
    pub background: [u8; 3],
    /// Outline width in image pixels for stroked shapes and line kinds.
    pub line_width: f64,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), canvas: Canvas) -> Self {
        Self {
            image_size,
            canvas,
            background: [250, 246, 227],
            line_width: 2.0,
        }
    }

    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    /// Uses the palette background when it parses.
    pub fn with_palette_background(mut self, palette: &Palette) -> Self {
        if let Some(rgb) = parse_color(&palette.background) {
            self.background = rgb;
        }
        self
    }

    fn pixels_per_unit(&self) -> DVec2 {
        DVec2::new(
            self.image_size.0 as f64 / self.canvas.width,
            self.image_size.1 as f64 / self.canvas.height,
        )
    }
}

/// Parses `#rgb` or `#rrggbb`.
pub fn parse_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some([nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?]),
        _ => None,
    }
}

/// One generated layer together with the rotation unit of its style.
#[derive(Debug, Clone)]
pub struct RenderedLayer<'a> {
    pub shapes: &'a [ShapeData],
    pub unit: RotationUnit,
}

impl<'a> RenderedLayer<'a> {
    pub fn new(shapes: &'a [ShapeData], style: Style) -> Self {
        Self {
            shapes,
            unit: style.rotation_unit(),
        }
    }
}

/// Rasterizes layers bottom-first and writes a PNG.
pub fn render_layers_to_png(
    layers: &[RenderedLayer<'_>],
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = rc.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(rc.background));
    for layer in layers {
        let mut painter = Painter {
            img: &mut img,
            scale: rc.pixels_per_unit(),
            line_width: rc.line_width,
        };
        for shape in layer.shapes {
            painter.shape(shape, layer.unit);
        }
    }
    img.save(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), "wrote preview");
    Ok(())
}

/// Convenience wrapper for a single layer.
pub fn render_shapes_to_png(
    shapes: &[ShapeData],
    style: Style,
    rc: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    render_layers_to_png(&[RenderedLayer::new(shapes, style)], rc, path)
}

struct Painter<'a> {
    img: &'a mut RgbImage,
    scale: DVec2,
    line_width: f64,
}

impl Painter<'_> {
    fn shape(&mut self, s: &ShapeData, unit: RotationUnit) {
        let color = parse_color(&s.color).unwrap_or([128, 128, 128]);
        let center = DVec2::new(s.x, s.y);
        let angle = unit.to_degrees(s.rotation).to_radians();
        match (&s.kind, &s.payload) {
            (ShapeKind::Wave, Some(ShapePayload::Wave { amplitude, frequency, .. })) => {
                let left = s.x - s.size * 0.5;
                let points: Vec<DVec2> = (0..=200)
                    .map(|i| {
                        let t = i as f64 / 200.0;
                        let phase = t * frequency * std::f64::consts::TAU;
                        DVec2::new(left + t * s.size, s.y + amplitude * phase.sin())
                    })
                    .collect();
                self.polyline(&points, color, self.line_width * 2.0);
            }
            (ShapeKind::TruchetTile, Some(ShapePayload::Truchet(tile))) => {
                self.truchet(center, s.size, s.rotation, tile, color);
            }
            (ShapeKind::GuillocheCurve, Some(ShapePayload::Guilloche(curve))) => {
                let rot = DVec2::from_angle(angle);
                let points: Vec<DVec2> = curve
                    .points
                    .iter()
                    .map(|p| center + rot.rotate(DVec2::new(p[0], p[1])))
                    .collect();
                self.polyline(&points, color, curve.line_width.max(1.0));
            }
            (_, Some(ShapePayload::Tile { length, width })) => {
                self.rect(center, DVec2::new(*length, *width), angle, color, s.stroke);
            }
            (_, Some(ShapePayload::Mosaic { width, height, .. })) => {
                self.rect(center, DVec2::new(*width, *height), angle, color, s.stroke);
            }
            (ShapeKind::Square | ShapeKind::Image | ShapeKind::Cube, _) => {
                self.rect(center, DVec2::splat(s.size), angle, color, s.stroke);
            }
            (ShapeKind::Diamond, _) => {
                let a = angle + std::f64::consts::FRAC_PI_4;
                self.rect(center, DVec2::splat(s.size * 0.7), a, color, s.stroke);
            }
            (ShapeKind::Rectangle | ShapeKind::Bar | ShapeKind::Pill | ShapeKind::Streamer, _) => {
                let dims = DVec2::new(s.size, s.size * 0.4);
                self.rect(center, dims, angle, color, s.stroke);
            }
            (ShapeKind::Line, _) => {
                let d = DVec2::from_angle(angle) * s.size * 0.5;
                self.polyline(&[center - d, center + d], color, self.line_width);
            }
            _ => self.disc(center, s.size * 0.5, color, s.stroke),
        }
    }

    fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    /// Paints every image pixel in `min..max` (canvas units) whose centre passes `inside`.
    fn fill_where(
        &mut self,
        min: DVec2,
        max: DVec2,
        color: [u8; 3],
        inside: impl Fn(DVec2) -> bool,
    ) {
        let limit = DVec2::new(self.img.width() as f64, self.img.height() as f64);
        let lo = (min * self.scale).floor().max(DVec2::ZERO);
        let hi = (max * self.scale).ceil().min(limit);
        for py in lo.y as i64..=hi.y as i64 {
            for px in lo.x as i64..=hi.x as i64 {
                let p = (DVec2::new(px as f64, py as f64) + 0.5) / self.scale;
                if inside(p) {
                    self.put(px, py, color);
                }
            }
        }
    }

    fn disc(&mut self, c: DVec2, r: f64, color: [u8; 3], ring: bool) {
        let inner = if ring {
            (r - self.line_width / self.scale.x).max(0.0)
        } else {
            -1.0
        };
        self.fill_where(c - r, c + r, color, |p| {
            let d = p.distance(c);
            d <= r && d > inner
        });
    }

    fn rect(&mut self, c: DVec2, dims: DVec2, angle: f64, color: [u8; 3], outline: bool) {
        let half = dims * 0.5;
        let inv = DVec2::from_angle(-angle);
        let edge = self.line_width / self.scale.x;
        let reach = half.length();
        self.fill_where(c - reach, c + reach, color, |p| {
            let q = inv.rotate(p - c).abs();
            let inside = q.x <= half.x && q.y <= half.y;
            inside && (!outline || q.x > half.x - edge || q.y > half.y - edge)
        });
    }

    fn polyline(&mut self, points: &[DVec2], color: [u8; 3], width: f64) {
        let radius = (width * 0.5).max(0.5);
        for pair in points.windows(2) {
            let (a, b) = (pair[0] * self.scale, pair[1] * self.scale);
            let steps = a.distance(b).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let p = a.lerp(b, i as f64 / steps as f64);
                self.stamp(p, radius, color);
            }
        }
    }

    fn stamp(&mut self, p: DVec2, radius: f64, color: [u8; 3]) {
        let r = radius.ceil() as i64;
        let (cx, cy) = (p.x.round() as i64, p.y.round() as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if ((dx * dx + dy * dy) as f64) <= radius * radius {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Two quarter arcs joining edge midpoints; rotation is in degrees.
    fn truchet(&mut self, c: DVec2, size: f64, rotation: f64, tile: &TruchetTile, color: [u8; 3]) {
        let h = size * 0.5;
        let quarter_turned = (rotation.rem_euclid(180.0) - 90.0).abs() < 1.0;
        let variant = if quarter_turned {
            tile.variant.other()
        } else {
            tile.variant
        };
        let corners = match variant {
            TruchetVariant::ArcA => [DVec2::new(h, -h), DVec2::new(-h, h)],
            TruchetVariant::ArcB => [DVec2::new(-h, -h), DVec2::new(h, h)],
        };
        let width = (tile.stroke_weight * size * self.scale.x).max(1.0);
        let rings = tile.concentric_rings.max(1);
        for corner in corners {
            for ring in 1..=rings {
                let radius = h * ring as f64 / rings as f64;
                let points: Vec<DVec2> = (0..=32)
                    .map(|i| {
                        let t = i as f64 / 32.0 * std::f64::consts::TAU;
                        c + corner + DVec2::from_angle(t) * radius
                    })
                    .filter(|p| (*p - c).abs().max_element() <= h)
                    .collect();
                self.polyline(&points, color, width);
            }
        }
    }
}
