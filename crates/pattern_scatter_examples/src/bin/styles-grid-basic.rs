use pattern_scatter::prelude::*;
use pattern_scatter_examples::{init_tracing, render_shapes_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(800.0, 800.0);

    // 100 cells on a 10×10 grid; roughly a fifth are skipped.
    let config = LayerConfig::new(2025, Style::Grid)
        .with_complexity(100)
        .with_style_options(StyleOptions::default().with_grid_gap(6.0));

    let generator = Generator::try_new(canvas)?;
    let shapes = generator.generate(&config);
    tracing::info!(count = shapes.len(), "grid generated");

    let rc = RenderConfig::new((800, 800), canvas).with_palette_background(&config.palette);
    render_shapes_to_png(&shapes, config.style, &rc, "styles-grid-basic.png")?;
    Ok(())
}
