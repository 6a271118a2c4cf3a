//! Layer pipeline: dispatcher, events and hit testing.
pub mod events;
pub mod runner;

pub use events::{EventSink, FnSink, GenerationEvent, GenerationEventKind, MultiSink, VecSink};
pub use hit_test::{shape_contains, AppState, HitResult, LayerState};
pub use runner::{generate_layer, Canvas, Generator};
