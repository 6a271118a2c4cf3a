mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use glam::DVec2;
use pattern_scatter::prelude::{
    apply_structure, Canvas, ColorDistribution, DistributionMode, Generator, LayerConfig,
    StructureConfig, StructureContext, Style,
};
use pattern_scatter::structure::relax_spacing;

const MODES: [DistributionMode; 5] = [
    DistributionMode::Scatter,
    DistributionMode::Flow,
    DistributionMode::Cluster,
    DistributionMode::Wave,
    DistributionMode::Spiral,
];

fn bench_distribution_modes(c: &mut Criterion) {
    let canvas = common::bench_canvas();
    let config = LayerConfig::new(99, Style::Geometric).with_complexity(200);
    let shapes = Generator::new(canvas).generate(&config);
    let ctx = StructureContext::new(canvas.width, canvas.height, &config);
    let mut group = c.benchmark_group("structure_modes");
    group.throughput(common::shapes_throughput(shapes.len()));

    for mode in MODES {
        let structure = StructureConfig::default()
            .with_distribution(mode)
            .with_regularity(40.0)
            .with_color_distribution(ColorDistribution::GradientRadial);
        group.bench_function(BenchmarkId::from_parameter(format!("{mode:?}")), |b| {
            b.iter_batched(
                || shapes.clone(),
                |input| black_box(apply_structure(input, &structure, &ctx)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_spacing(c: &mut Criterion) {
    let extent = DVec2::new(1024.0, 768.0);
    let mut group = c.benchmark_group("spacing_relaxation");

    for complexity in [50, 100, 200] {
        let config = LayerConfig::new(5, Style::Geometric).with_complexity(complexity);
        let shapes = Generator::new(Canvas::new(extent.x, extent.y)).generate(&config);
        group.throughput(common::shapes_throughput(shapes.len()));
        group.bench_with_input(BenchmarkId::from_parameter(complexity), &shapes, |b, shapes| {
            b.iter_batched(
                || shapes.clone(),
                |mut input| {
                    relax_spacing(&mut input, 0.5, extent);
                    black_box(input)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = bench_distribution_modes, bench_spacing
}
criterion_main!(benches);
