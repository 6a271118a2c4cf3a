#![forbid(unsafe_code)]

mod raster;
mod rendering;
mod scene;

pub use raster::{BitmapTextMask, PngRasters};
pub use rendering::{
    init_tracing, parse_color, render_layers_to_png, render_shapes_to_png, RenderConfig,
    RenderedLayer,
};
pub use scene::{load_scene, parse_scene, Scene};
