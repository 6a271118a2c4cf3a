//! Generator dispatcher: style generator, then structure, then symmetry.
use glam::DVec2;
use rand::RngCore;
use tracing::{debug, warn};

use crate::config::{LayerConfig, Style};
use crate::error::{Error, Result};
use crate::generators::{
    GenerateContext, GridGenerator, GuillocheGenerator, HerringboneGenerator, HexGenerator,
    ImageFillGenerator, IsometricGenerator, MosaicGenerator, RadialGenerator, RasterSource,
    ScatterGenerator, StyleGenerator, TextFillGenerator, TruchetGenerator, WavesGenerator,
};
use crate::pipeline::events::{EventSink, GenerationEvent, GenerationEventKind};
use crate::rng::SeededRng;
use crate::shape::ShapeData;
use crate::structure::{self, StructureContext};
use crate::symmetry::SymmetryGroup;

/// Canvas the layer is generated for.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Validates the canvas, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(Error::InvalidConfig("canvas size must be finite".into()));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidConfig(
                "canvas width and height must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Runs the full pipeline for layers on one canvas.
pub struct Generator<'a> {
    pub canvas: Canvas,
    raster: Option<&'a dyn RasterSource>,
}

impl<'a> Generator<'a> {
    pub fn try_new(canvas: Canvas) -> Result<Self> {
        canvas.validate()?;
        Ok(Self::new(canvas))
    }

    pub fn new(canvas: Canvas) -> Self {
        debug_assert!(
            canvas.width > 0.0 && canvas.height > 0.0,
            "canvas must be > 0 in both dimensions"
        );
        Self {
            canvas,
            raster: None,
        }
    }

    /// Sets the collaborator that backs text-fill and image-fill.
    pub fn with_raster_source(mut self, source: &'a dyn RasterSource) -> Self {
        self.raster = Some(source);
        self
    }

    pub fn generate(&self, config: &LayerConfig) -> Vec<ShapeData> {
        generate_layer(config, self.canvas, self.raster, &mut ())
    }

    pub fn generate_with_events(
        &self,
        config: &LayerConfig,
        sink: &mut dyn EventSink,
    ) -> Vec<ShapeData> {
        generate_layer(config, self.canvas, self.raster, sink)
    }
}

fn warn_event(sink: &mut dyn EventSink, context: &str, message: String) {
    if sink.wants(GenerationEventKind::Warning) {
        sink.send(GenerationEvent::Warning {
            context: context.into(),
            message,
        });
    }
}

/// Generates one layer. Never fails; problems are logged and reported as warnings.
pub fn generate_layer(
    config: &LayerConfig,
    canvas: Canvas,
    raster: Option<&dyn RasterSource>,
    sink: &mut dyn EventSink,
) -> Vec<ShapeData> {
    let context = format!("{:?}", config.style);
    if sink.wants(GenerationEventKind::Started) {
        sink.send(GenerationEvent::Started {
            style: config.style,
            seed: config.seed,
            width: canvas.width,
            height: canvas.height,
        });
    }
    if let Err(e) = canvas.validate() {
        warn!("{e}; generating nothing");
        warn_event(sink, &context, e.to_string());
        return finish(Vec::new(), sink);
    }
    if let Err(e) = config.validate() {
        warn!(style = ?config.style, "{e}");
        warn_event(sink, &context, e.to_string());
    }
    if config.seed == 0 {
        warn!("seed 0 requests a non-deterministic run");
    }

    let mut rng = SeededRng::new(config.seed);
    let ctx = GenerateContext::new(canvas.width, canvas.height, config);
    let mut shapes = dispatch(&ctx, &mut rng, raster, sink, &context);
    if sink.wants(GenerationEventKind::ShapesGenerated) {
        sink.send(GenerationEvent::ShapesGenerated {
            style: config.style,
            count: shapes.len(),
            index_span: shapes.iter().map(|s| s.index + 1).max().unwrap_or(0),
        });
    }

    if let Some(structure_config) = config
        .structure
        .as_ref()
        .filter(|_| structure::applies_to(config))
    {
        let sctx = StructureContext::new(canvas.width, canvas.height, config);
        shapes = structure::apply_structure(shapes, structure_config, &sctx);
        if sink.wants(GenerationEventKind::StructureApplied) {
            sink.send(GenerationEvent::StructureApplied {
                mode: structure_config.distribution_mode,
                count: shapes.len(),
            });
        }
    }

    if config.symmetry != SymmetryGroup::None {
        let before = shapes.len();
        shapes = config
            .symmetry
            .apply(&shapes, canvas.center(), config.style.rotation_unit());
        if sink.wants(GenerationEventKind::SymmetryApplied) {
            sink.send(GenerationEvent::SymmetryApplied {
                group: config.symmetry,
                before,
                after: shapes.len(),
            });
        }
    }

    debug!(
        style = ?config.style,
        seed = config.seed,
        count = shapes.len(),
        "layer generated"
    );
    finish(shapes, sink)
}

fn finish(shapes: Vec<ShapeData>, sink: &mut dyn EventSink) -> Vec<ShapeData> {
    if sink.wants(GenerationEventKind::Finished) {
        sink.send(GenerationEvent::Finished {
            count: shapes.len(),
        });
    }
    shapes
}

fn dispatch(
    ctx: &GenerateContext<'_>,
    rng: &mut dyn RngCore,
    raster: Option<&dyn RasterSource>,
    sink: &mut dyn EventSink,
    context: &str,
) -> Vec<ShapeData> {
    let style = ctx.config.style;
    match style {
        Style::Grid => GridGenerator.generate(ctx, rng),
        Style::Hex => HexGenerator.generate(ctx, rng),
        Style::Isometric => IsometricGenerator.generate(ctx, rng),
        Style::Radial => RadialGenerator.generate(ctx, rng),
        Style::Waves => WavesGenerator.generate(ctx, rng),
        Style::Mosaic => MosaicGenerator.generate(ctx, rng),
        Style::Truchet => TruchetGenerator.generate(ctx, rng),
        Style::Guilloche => GuillocheGenerator.generate(ctx, rng),
        Style::Herringbone => HerringboneGenerator.generate(ctx, rng),
        Style::TextFill | Style::ImageFill => {
            let Some(source) = raster else {
                warn!(?style, "no raster source configured; generating nothing");
                warn_event(sink, context, "no raster source configured".into());
                return Vec::new();
            };
            let lookup = match source.prepare(ctx.config, ctx.width, ctx.height) {
                Ok(lookup) => lookup,
                Err(e) => {
                    warn!(?style, "raster lookup unavailable: {e}");
                    warn_event(sink, context, e.to_string());
                    return Vec::new();
                }
            };
            if style == Style::TextFill {
                TextFillGenerator::new(lookup.as_ref()).generate(ctx, rng)
            } else {
                ImageFillGenerator::new(lookup.as_ref()).generate(ctx, rng)
            }
        }
        _ => ScatterGenerator.generate(ctx, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CustomImages, DistributionMode, Palette, StructureConfig, SurfaceTexture};
    use crate::generators::{RasterLookup, RasterSample};
    use crate::pipeline::events::VecSink;

    struct FailingSource;

    impl RasterSource for FailingSource {
        fn prepare(&self, _: &LayerConfig, _: f64, _: f64) -> Result<Box<dyn RasterLookup>> {
            Err(Error::RasterUnavailable("no surface".into()))
        }
    }

    struct Everywhere;

    impl RasterSource for Everywhere {
        fn prepare(&self, _: &LayerConfig, _: f64, _: f64) -> Result<Box<dyn RasterLookup>> {
            Ok(Box::new(|_: f64, _: f64| RasterSample::inside()))
        }
    }

    fn canvas() -> Canvas {
        Canvas::new(400.0, 300.0)
    }

    #[test]
    fn canvas_validation() {
        assert!(Canvas::new(10.0, 10.0).validate().is_ok());
        assert!(Canvas::new(0.0, 10.0).validate().is_err());
        assert!(Canvas::new(f64::NAN, 10.0).validate().is_err());
        assert!(Generator::try_new(Canvas::new(-1.0, 5.0)).is_err());
    }

    #[test]
    fn generation_is_deterministic() {
        let gen = Generator::new(canvas());
        for style in [Style::Geometric, Style::Truchet, Style::Mosaic, Style::Guilloche] {
            let config = LayerConfig::new(4242, style);
            assert_eq!(gen.generate(&config), gen.generate(&config));
        }
    }

    #[test]
    fn renderer_fields_do_not_change_generation() {
        let gen = Generator::new(canvas());
        let base = LayerConfig::new(77, Style::Memphis)
            .with_custom_images(CustomImages::new(["badge", "star"]));
        let mut passthrough = base.clone();
        passthrough.texture = SurfaceTexture::Halftone;
        passthrough.custom_image.use_original_colors = true;
        assert_eq!(gen.generate(&base), gen.generate(&passthrough));
    }

    #[test]
    fn events_follow_pipeline_order() {
        let config = LayerConfig::new(9, Style::Geometric)
            .with_complexity(20)
            .with_structure(StructureConfig::default().with_distribution(DistributionMode::Flow))
            .with_symmetry(SymmetryGroup::Pm);
        let mut sink = VecSink::new();
        let shapes = Generator::new(canvas()).generate_with_events(&config, &mut sink);
        assert_eq!(shapes.len(), 40);
        let kinds: Vec<GenerationEventKind> = sink.as_slice().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                GenerationEventKind::Started,
                GenerationEventKind::ShapesGenerated,
                GenerationEventKind::StructureApplied,
                GenerationEventKind::SymmetryApplied,
                GenerationEventKind::Finished,
            ]
        );
    }

    #[test]
    fn structure_is_skipped_for_self_structured_styles() {
        let base = LayerConfig::new(9, Style::Grid);
        let structured = base
            .clone()
            .with_structure(StructureConfig::default().with_distribution(DistributionMode::Spiral));
        let gen = Generator::new(canvas());
        assert_eq!(gen.generate(&base), gen.generate(&structured));
    }

    #[test]
    fn fill_without_raster_warns_and_returns_nothing() {
        let config = LayerConfig::new(9, Style::TextFill);
        let mut sink = VecSink::filtered([GenerationEventKind::Warning]);
        assert!(Generator::new(canvas())
            .generate_with_events(&config, &mut sink)
            .is_empty());
        assert_eq!(sink.len(), 1);

        let mut sink = VecSink::filtered([GenerationEventKind::Warning]);
        let shapes = Generator::new(canvas())
            .with_raster_source(&FailingSource)
            .generate_with_events(&config, &mut sink);
        assert!(shapes.is_empty());
        assert!(matches!(
            &sink.as_slice()[0],
            GenerationEvent::Warning { message, .. } if message.contains("no surface")
        ));
    }

    #[test]
    fn fill_with_raster_produces_shapes() {
        let config = LayerConfig::new(9, Style::ImageFill);
        let shapes = Generator::new(canvas())
            .with_raster_source(&Everywhere)
            .generate(&config);
        assert!(!shapes.is_empty());
    }

    #[test]
    fn empty_palette_warns_but_still_generates() {
        let config = LayerConfig::new(9, Style::Geometric)
            .with_palette(Palette::new(Vec::<String>::new(), "#fff"));
        let mut sink = VecSink::filtered([GenerationEventKind::Warning]);
        let shapes = Generator::new(canvas()).generate_with_events(&config, &mut sink);
        assert_eq!(sink.len(), 1);
        assert!(shapes.iter().all(|s| s.color == crate::shape::FALLBACK_COLOR));
    }

    #[test]
    fn invalid_canvas_generates_nothing() {
        let config = LayerConfig::new(9, Style::Geometric);
        assert!(generate_layer(&config, Canvas::new(0.0, 100.0), None, &mut ()).is_empty());
    }
}
