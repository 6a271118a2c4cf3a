use pattern_scatter::prelude::*;
use pattern_scatter_examples::{init_tracing, render_shapes_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(800.0, 800.0);

    // Shapes are drawn into the top-left corner, then replicated eightfold.
    let config = LayerConfig::new(88, Style::Memphis)
        .with_complexity(24)
        .with_composition(Composition::Corners)
        .with_symmetry(SymmetryGroup::P4m);

    let mut log = FnSink::new(|event: GenerationEvent| {
        if let GenerationEvent::SymmetryApplied { group, before, after } = event {
            tracing::info!(?group, before, after, "symmetry applied");
        }
    });
    let shapes = Generator::try_new(canvas)?.generate_with_events(&config, &mut log);

    let rc = RenderConfig::new((800, 800), canvas).with_palette_background(&config.palette);
    render_shapes_to_png(&shapes, config.style, &rc, "symmetry-p4m.png")?;
    Ok(())
}
