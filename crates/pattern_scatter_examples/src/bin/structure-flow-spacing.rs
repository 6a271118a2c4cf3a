use pattern_scatter::prelude::*;
use pattern_scatter_examples::{
    init_tracing, render_layers_to_png, RenderConfig, RenderedLayer,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(1000.0, 600.0);
    let base = LayerConfig::new(404, Style::Confetti).with_complexity(160);

    // Same draws, three structure settings side by side in separate files.
    let variants = [
        ("structure-none.png", None),
        (
            "structure-flow.png",
            Some(
                StructureConfig::default()
                    .with_distribution(DistributionMode::Flow)
                    .with_rotation_lock(RotationLock::Deg45)
                    .with_color_distribution(ColorDistribution::GradientH),
            ),
        ),
        (
            "structure-flow-spacing.png",
            Some(
                StructureConfig::default()
                    .with_distribution(DistributionMode::Flow)
                    .with_size_variation(30.0)
                    .with_min_spacing(60.0)
                    .with_color_distribution(ColorDistribution::GradientH),
            ),
        ),
    ];

    let mut sink = VecSink::filtered([GenerationEventKind::StructureApplied]);
    let generator = Generator::try_new(canvas)?;
    for (out, structure) in variants {
        let mut config = base.clone();
        config.structure = structure;
        let shapes = generator.generate_with_events(&config, &mut sink);
        let rc = RenderConfig::new((1000, 600), canvas).with_palette_background(&config.palette);
        render_layers_to_png(&[RenderedLayer::new(&shapes, config.style)], &rc, out)?;
    }
    for event in sink.as_slice() {
        tracing::info!(?event, "structure pass");
    }
    Ok(())
}
