use pattern_scatter::prelude::*;
use pattern_scatter_examples::{
    init_tracing, render_layers_to_png, RenderConfig, RenderedLayer,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(600.0, 600.0);
    let generator = Generator::try_new(canvas)?;
    let palette = Palette::new(["#8d6e63", "#a1887f", "#6d4c41"], "#3e2723");

    for (pattern, out) in [
        (HerringbonePattern::Herringbone, "styles-herringbone.png"),
        (HerringbonePattern::Chevron, "styles-chevron.png"),
        (HerringbonePattern::BasketWeave, "styles-basket-weave.png"),
    ] {
        let config = LayerConfig::new(5, Style::Herringbone)
            .with_palette(palette.clone())
            .with_herringbone(
                HerringboneOptions::default()
                    .with_pattern(pattern)
                    .with_color_mode(TileColorMode::Random),
            );
        let shapes = generator.generate(&config);
        tracing::info!(?pattern, tiles = shapes.len(), "floor generated");
        let rc = RenderConfig::new((600, 600), canvas).with_palette_background(&palette);
        render_layers_to_png(&[RenderedLayer::new(&shapes, config.style)], &rc, out)?;
    }
    Ok(())
}
