use pattern_scatter::prelude::*;
use pattern_scatter_examples::{
    init_tracing, load_scene, render_layers_to_png, BitmapTextMask, RenderConfig, RenderedLayer,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        format!("{}/configs/scene.ron", env!("CARGO_MANIFEST_DIR"))
    });
    let scene = load_scene(&path)?;
    let canvas = scene.canvas();
    let mask = BitmapTextMask;
    let generator = Generator::try_new(canvas)?.with_raster_source(&mask);

    let generated: Vec<(Style, Vec<ShapeData>)> = scene
        .layers
        .iter()
        .filter(|layer| layer.visible)
        .map(|layer| {
            let shapes = apply_overrides(&generator.generate(&layer.config), &layer.overrides);
            (layer.config.style, shapes)
        })
        .collect();
    let layers: Vec<RenderedLayer<'_>> = generated
        .iter()
        .map(|(style, shapes)| RenderedLayer::new(shapes, *style))
        .collect();

    let background = scene
        .layers
        .first()
        .map(|l| l.config.palette.clone())
        .unwrap_or_default();
    let rc = RenderConfig::new((canvas.width as u32, canvas.height as u32), canvas)
        .with_palette_background(&background);
    render_layers_to_png(&layers, &rc, "configs-ron-scene.png")?;

    // Probe the centre the way a pointer click would.
    let state = scene.app_state();
    let center = canvas.center();
    match state.hit_test(center.x, center.y, Some(&mask as &dyn RasterSource)) {
        Some(hit) => tracing::info!(
            layer = %hit.layer_id,
            index = hit.shape.index,
            kind = ?hit.shape.kind,
            "hit at canvas centre"
        ),
        None => tracing::info!("nothing under the canvas centre"),
    }
    Ok(())
}
