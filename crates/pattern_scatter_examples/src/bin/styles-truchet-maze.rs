use pattern_scatter::prelude::*;
use pattern_scatter_examples::{init_tracing, render_shapes_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(900.0, 600.0);

    // Higher density means smaller tiles; rings add concentric arcs per corner.
    let config = LayerConfig::new(7, Style::Truchet)
        .with_palette(Palette::new(["#1d3557", "#457b9d"], "#f1faee"))
        .with_truchet(TruchetOptions::default().with_maze_density(14).with_concentric_rings(2));

    let shapes = Generator::try_new(canvas)?.generate(&config);
    tracing::info!(tiles = shapes.len(), "truchet maze generated");

    let rc = RenderConfig::new((900, 600), canvas).with_palette_background(&config.palette);
    render_shapes_to_png(&shapes, config.style, &rc, "styles-truchet-maze.png")?;
    Ok(())
}
