use band_cut::spectrum::fft::{forward_transform, inverse_transform};
use band_cut::{filter_samples, Band};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use rustfft::FftPlanner;

fn signal(len: usize) -> Vec<f64> {
    (0..len).map(|n| (n as f64 * 0.013).sin() + 0.3 * (n as f64 * 0.41).cos()).collect()
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");

    for size in [1024usize, 16384, 131072] {
        let input = signal(size);

        group.bench_with_input(BenchmarkId::new("radix2", size), &input, |b, input| {
            b.iter(|| forward_transform(black_box(input)))
        });

        let fft = FftPlanner::<f64>::new().plan_fft_forward(size);
        group.bench_with_input(BenchmarkId::new("rustfft", size), &input, |b, input| {
            b.iter(|| {
                let mut buffer: Vec<Complex64> = input.iter().map(|&s| Complex64::new(s, 0.0)).collect();
                fft.process(black_box(&mut buffer));
                buffer
            })
        });
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let input = signal(44100);
    c.bench_function("round_trip_44100", |b| {
        b.iter(|| inverse_transform(forward_transform(black_box(&input))))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let input = signal(44100 * 5);
    let bands = [
        Band::new(50, 60, 0.0, 0.0),
        Band::new(4000, 8000, 0.2, 0.6),
    ];

    c.bench_function("pipeline_5s_two_bands", |b| {
        b.iter(|| filter_samples(black_box(&input), 44100, &bands, 100))
    });
}

criterion_group!(benches, bench_forward, bench_round_trip, bench_pipeline);
criterion_main!(benches);
