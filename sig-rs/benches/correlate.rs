use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::ThreadRng;
use sig_rs::kernel::KernelLifecycle;
use sig_rs::signal::correlate::{CorrelateConfig, CorrelateKernel};
use sig_rs::signal::traits::Correlate1D;
use sig_rs::{Complex, Signal};

/// Random complex samples in the unit square.
fn randomized_signal(mut rng: ThreadRng, n: usize) -> Signal {
    use rand::Rng;

    (0..n)
        .map(|_| Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect()
}

/// Correlate a reference against a delayed copy over growing lag windows.
fn correlate_lags(c: &mut Criterion) {
    const N: usize = 1 << 12;
    const DELAY: usize = 37;

    let reference = randomized_signal(rand::rng(), N);
    let degraded: Signal = std::iter::repeat(Complex::default())
        .take(DELAY)
        .chain(reference.iter().copied())
        .take(N)
        .collect();

    let mut group = c.benchmark_group("correlate");
    for max_lag in [16usize, 64, 256, 1024] {
        let kernel = CorrelateKernel::try_new(CorrelateConfig {
            min_lag: 0,
            max_lag,
        })
        .expect("lag window is ordered");
        let mut out = Signal::zeros(Correlate1D::<f64>::output_len(&kernel));

        group.bench_with_input(
            BenchmarkId::new("max_lag", max_lag),
            &(&reference, &degraded),
            |bench, (r, d)| {
                bench.iter(|| {
                    kernel
                        .run_into(black_box(*r), black_box(*d), &mut out)
                        .expect("output sized by output_len")
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, correlate_lags);
criterion_main!(benches);
