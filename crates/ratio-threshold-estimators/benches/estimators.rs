use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratio_threshold_estimators::{EstimatorKind, EstimatorParams, Ratio};

fn synthetic_u8(width: usize, height: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..width * height)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // Gradient plus a little noise, roughly like a scanned page.
            let base = (i % width) * 200 / width;
            (base + (state >> 60) as usize) as u8
        })
        .collect()
}

fn synthetic_u16(width: usize, height: usize) -> Vec<u16> {
    synthetic_u8(width, height)
        .into_iter()
        .map(|v| (v as u16) << 8 | v as u16)
        .collect()
}

fn bench_estimators(c: &mut Criterion) {
    let params = EstimatorParams {
        ratio: Ratio::new(0.33).expect("ratio"),
        sample_stride: 10,
    };
    let img8 = synthetic_u8(1920, 1080);
    let img16 = synthetic_u16(1920, 1080);

    let mut group = c.benchmark_group("estimators_1080p");
    group.sample_size(20);
    for kind in EstimatorKind::ALL {
        group.bench_with_input(BenchmarkId::new("u8", kind.id()), &img8, |b, img| {
            b.iter(|| kind.estimate(black_box(img), &params))
        });
        group.bench_with_input(BenchmarkId::new("u16", kind.id()), &img16, |b, img| {
            b.iter(|| kind.estimate(black_box(img), &params))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimators);
criterion_main!(benches);
