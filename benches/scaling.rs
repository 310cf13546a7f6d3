use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridbin::{Accumulator, GridBuilder, GridOptions, ParallelAccumulator, PointSet, SerialAccumulator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 5] = [1_000, 10_000, 100_000, 1_000_000, 4_000_000];

/// Points in a 100^3 cube, with a tenth of them scattered outside the fixed box below.
fn random_points(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    (0..n * 3).map(|_| rng.gen_range(-5.0..105.0)).collect()
}

fn bench_framing<A: Accumulator + Clone>(
    c: &mut Criterion,
    name: &str,
    options: &GridOptions,
    accumulator: A,
) {
    let mut group = c.benchmark_group(format!("scaling_{}", name));
    group.sample_size(10);

    for &size in &SIZES {
        let coords = random_points(size);
        let points = PointSet::new(&coords, 3).unwrap();
        let builder = GridBuilder::with_accumulator(options.clone(), accumulator.clone());
        let cells = builder.geometry(&points).unwrap().cell_count();

        // Report points gridded per second rather than time per build.
        group.throughput(Throughput::Elements(size as u64));
        println!("{}: N {:8}, cells {:9}", name, size, cells);
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| builder.build(points, None).unwrap())
        });
    }
    group.finish();
}

fn benchmark_scaling(c: &mut Criterion) {
    // One unit voxels: 110^3 cells fitted to the data, 100^3 in the fixed box.
    let fitted = GridOptions::new();
    let fixed = GridOptions::new().fixed(100.0).center(vec![50.0; 3]);

    bench_framing(c, "fitted_serial", &fitted, SerialAccumulator);
    bench_framing(c, "fitted_parallel", &fitted, ParallelAccumulator::default());
    bench_framing(c, "fixed_serial", &fixed, SerialAccumulator);
    bench_framing(c, "fixed_parallel", &fixed, ParallelAccumulator::default());
}

criterion_group!(benches, benchmark_scaling);
criterion_main!(benches);
