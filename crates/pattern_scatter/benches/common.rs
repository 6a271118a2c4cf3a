use std::time::Duration;

use criterion::{Criterion, Throughput};
use pattern_scatter::prelude::Canvas;

/// Generation calls are short; fewer samples keep whole-suite runs quick.
const SAMPLES: usize = 30;

/// Canvas shared by benches that don't vary it.
pub fn bench_canvas() -> Canvas {
    Canvas::new(1024.0, 768.0)
}

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLES)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Throughput in shapes, never zero so empty layers still report.
pub fn shapes_throughput(shapes: usize) -> Throughput {
    Throughput::Elements(shapes.max(1) as u64)
}
