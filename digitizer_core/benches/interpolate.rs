use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use digitizer_core::{GridParams, LinearInterpolator, RealPoint, interpolate};

// Synthetic hand-digitized curve: monotone-ish y with jitter, x = f(y)
fn synth_curve(n: usize, seed: u32) -> Vec<RealPoint> {
    let mut state = seed.max(1);
    let mut next_f64 = || {
        let mut x = state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state = x;
        f64::from(x) / (f64::from(u32::MAX) + 1.0)
    };
    (0..n)
        .map(|i| {
            let y = i as f64 * 0.1 + (next_f64() - 0.5) * 0.05;
            RealPoint::new((y / 10.0).sin() * 50.0, y)
        })
        .collect()
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    for &n in &[100usize, 10_000] {
        let curve = synth_curve(n, 42);
        group.bench_function(format!("resample_{n}_points_bin_0.01"), |b| {
            b.iter(|| {
                interpolate(black_box(&curve), GridParams { start: 0.0, bin: 0.01 })
                    .map(|c| c.len())
                    .unwrap_or(0)
            })
        });
    }
    group.finish();
}

fn bench_build_lookup(c: &mut Criterion) {
    let curve = synth_curve(10_000, 7);
    c.bench_function("lookup_build_10k", |b| {
        b.iter_batched(
            || curve.clone(),
            |pts| LinearInterpolator::new(pts.into_iter().map(|p| (p.y, p.x))).len(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_interpolate, bench_build_lookup);
criterion_main!(benches);
