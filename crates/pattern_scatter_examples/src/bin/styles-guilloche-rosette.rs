use pattern_scatter::prelude::*;
use pattern_scatter_examples::{init_tracing, render_shapes_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let canvas = Canvas::new(800.0, 800.0);

    // 96/36 reduces to 8/3, so the pen closes after three revolutions.
    let hypo = LayerConfig::new(31, Style::Guilloche)
        .with_palette(Palette::new(["#6d597a", "#b56576", "#e56b6f"], "#fefae0"))
        .with_guilloche(GuillocheOptions::default().with_radii(96, 36).with_layer_count(5));
    let epi = hypo.clone().with_guilloche(
        GuillocheOptions::default()
            .with_curve(CurveFamily::Epitrochoid)
            .with_radii(60, 14)
            .with_layer_count(2),
    );

    let generator = Generator::try_new(canvas)?;
    for (config, out) in [
        (&hypo, "styles-guilloche-rosette.png"),
        (&epi, "styles-guilloche-epitrochoid.png"),
    ] {
        let shapes = generator.generate(config);
        let rc = RenderConfig::new((800, 800), canvas).with_palette_background(&config.palette);
        render_shapes_to_png(&shapes, config.style, &rc, out)?;
    }
    Ok(())
}
