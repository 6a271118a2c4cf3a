use image::{Rgba, RgbaImage};
use pattern_scatter::prelude::*;
use pattern_scatter_examples::{init_tracing, render_shapes_to_png, PngRasters, RenderConfig};

/// Radial color wheel on a transparent background, used when no PNG is given.
fn color_wheel(size: u32) -> RgbaImage {
    let c = size as f64 * 0.5;
    RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as f64 - c, y as f64 - c);
        if dx.hypot(dy) > c * 0.95 {
            return Rgba([0, 0, 0, 0]);
        }
        let hue = (dy.atan2(dx) / std::f64::consts::TAU + 0.5) * 3.0;
        let channel = |offset: f64| {
            let d = ((hue - offset).rem_euclid(3.0) - 1.5).abs();
            (255.0 * (1.5 - d).clamp(0.0, 1.0)) as u8
        };
        Rgba([channel(0.0), channel(1.0), channel(2.0), 255])
    })
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(800.0, 800.0);

    let mut rasters = PngRasters::new();
    match std::env::args().nth(1) {
        Some(path) => rasters.load_png("source", path)?,
        None => rasters.insert("source", color_wheel(256)),
    }

    let config = LayerConfig::new(3, Style::ImageFill)
        .with_complexity(180)
        .with_image_fill(ImageFillOptions {
            asset_id: Some("source".into()),
            ..ImageFillOptions::default().with_color_mode(FillColorMode::Raw)
        });

    let shapes = Generator::try_new(canvas)?
        .with_raster_source(&rasters)
        .generate(&config);
    tracing::info!(count = shapes.len(), "image mosaic generated");

    let rc = RenderConfig::new((800, 800), canvas).with_background([24, 24, 24]);
    render_shapes_to_png(&shapes, config.style, &rc, "fill-image-mosaic.png")?;
    Ok(())
}
