mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pattern_scatter::prelude::{
    Canvas, Generator, GuillocheOptions, LayerConfig, Style, TruchetOptions,
};

const STYLES: [Style; 10] = [
    Style::Grid,
    Style::Hex,
    Style::Isometric,
    Style::Radial,
    Style::Geometric,
    Style::Waves,
    Style::Mosaic,
    Style::Truchet,
    Style::Guilloche,
    Style::Herringbone,
];

const COMPLEXITIES: [i32; 3] = [10, 50, 200];

fn bench_styles(c: &mut Criterion) {
    let generator = Generator::new(common::bench_canvas());
    let mut group = c.benchmark_group("generate_style");

    for style in STYLES {
        for complexity in COMPLEXITIES {
            let config = LayerConfig::new(1234, style).with_complexity(complexity);
            let produced = generator.generate(&config).len();
            group.throughput(common::shapes_throughput(produced));
            group.bench_with_input(
                BenchmarkId::new(format!("{style:?}"), complexity),
                &config,
                |b, config| b.iter(|| black_box(generator.generate(black_box(config)))),
            );
        }
    }

    group.finish();
}

fn bench_truchet_density(c: &mut Criterion) {
    let generator = Generator::new(Canvas::new(1000.0, 1000.0));
    let mut group = c.benchmark_group("truchet_density");

    for density in [4_u32, 10, 20] {
        let config = LayerConfig::new(7, Style::Truchet)
            .with_truchet(TruchetOptions::default().with_maze_density(density));
        group.bench_with_input(BenchmarkId::from_parameter(density), &config, |b, config| {
            b.iter(|| black_box(generator.generate(black_box(config))))
        });
    }

    group.finish();
}

fn bench_guilloche_revolutions(c: &mut Criterion) {
    let generator = Generator::new(Canvas::new(800.0, 800.0));
    let mut group = c.benchmark_group("guilloche_radii");

    for (major, minor) in [(100_u32, 40_u32), (96, 35), (120, 7)] {
        let config = LayerConfig::new(7, Style::Guilloche).with_guilloche(
            GuillocheOptions::default()
                .with_radii(major, minor)
                .with_layer_count(5),
        );
        group.bench_with_input(
            BenchmarkId::new("radii", format!("{major}/{minor}")),
            &config,
            |b, config| b.iter(|| black_box(generator.generate(black_box(config)))),
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = bench_styles, bench_truchet_density, bench_guilloche_revolutions
}
criterion_main!(benches);
