use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use octave_noise::{
    Layout, NoiseParameters, SeedField, linear, palette, spatial,
};
use rand::{SeedableRng, rngs::SmallRng};
use std::hint::black_box;

fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");

    for size in [256, 512] {
        let layout = Layout::Spatial {
            width: size,
            height: size,
        };
        group.bench_with_input(
            BenchmarkId::new("generate", size),
            &layout,
            |b, &layout| {
                let mut rng = SmallRng::seed_from_u64(42);
                b.iter(|| {
                    SeedField::<f32>::generate(black_box(layout), &mut rng)
                })
            },
        );
    }

    group.finish();
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    let seed = SeedField::<f32>::from_seed(Layout::Linear(256), 42).unwrap();

    for octaves in [1, 4, 9] {
        group.bench_with_input(
            BenchmarkId::new("synthesize", octaves),
            &octaves,
            |b, &octaves| {
                b.iter(|| linear::synthesize(&seed, black_box(octaves), 2.0))
            },
        );
    }

    group.finish();
}

fn bench_spatial(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial");

    for size in [256, 512] {
        let layout = Layout::Spatial {
            width: size,
            height: size,
        };
        let seed = SeedField::<f32>::from_seed(layout, 42).unwrap();

        for octaves in [1, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("synthesize_{size}"), octaves),
                &octaves,
                |b, &octaves| {
                    b.iter(|| {
                        spatial::synthesize(
                            &seed,
                            size,
                            size,
                            black_box(octaves),
                            2.0,
                        )
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_palette(c: &mut Criterion) {
    let layout = Layout::Spatial {
        width: 512,
        height: 512,
    };
    let noise = SeedField::<f32>::from_seed(layout, 42)
        .and_then(|seed| seed.synthesize(&NoiseParameters::new(8, 2.0)))
        .unwrap();

    c.bench_function("map_to_gray_512", |b| {
        b.iter(|| palette::map_to_gray(black_box(&noise)))
    });
}

criterion_group!(
    benches,
    bench_seed,
    bench_linear,
    bench_spatial,
    bench_palette
);
criterion_main!(benches);
