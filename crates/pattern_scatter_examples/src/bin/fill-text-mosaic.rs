use pattern_scatter::prelude::*;
use pattern_scatter_examples::{init_tracing, render_shapes_to_png, BitmapTextMask, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(1200.0, 500.0);
    let text = std::env::args().nth(1).unwrap_or_else(|| "RUST".to_owned());

    let config = LayerConfig::new(12, Style::TextFill)
        .with_complexity(150)
        .with_text_fill(TextFillOptions {
            font_size: 0.6,
            ..TextFillOptions::new(text)
        });

    let mask = BitmapTextMask;
    let shapes = Generator::try_new(canvas)?
        .with_raster_source(&mask)
        .generate(&config);
    tracing::info!(count = shapes.len(), "text mosaic generated");

    let rc = RenderConfig::new((1200, 500), canvas).with_palette_background(&config.palette);
    render_shapes_to_png(&shapes, config.style, &rc, "fill-text-mosaic.png")?;
    Ok(())
}
