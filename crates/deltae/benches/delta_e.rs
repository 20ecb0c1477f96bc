use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deltae::metric::{find_closest, Cie76, Oklab};
use deltae::{delta_e_ok_squared, delta_e_squared, srgb_to_xyz, xyz_to_lab, OkVersion, WhitePoint};

const VGA_COLORS: [[f64; 3]; 16] = [
    [0.0, 0.0, 0.0],
    [170.0, 0.0, 0.0],
    [0.0, 170.0, 0.0],
    [170.0, 85.0, 0.0],
    [0.0, 0.0, 170.0],
    [170.0, 0.0, 170.0],
    [0.0, 170.0, 170.0],
    [170.0, 170.0, 170.0],
    [85.0, 85.0, 85.0],
    [255.0, 85.0, 85.0],
    [85.0, 255.0, 85.0],
    [255.0, 255.0, 85.0],
    [85.0, 85.0, 255.0],
    [255.0, 85.0, 255.0],
    [85.0, 255.0, 255.0],
    [255.0, 255.0, 255.0],
];

pub fn run_benchmarks(c: &mut Criterion) {
    let chic = [215.0, 40.0, 39.0];
    let teal = [0.0, 128.0, 128.0];

    let mut group = c.benchmark_group("per-pixel");

    group.bench_function("srgb-to-lab", |b| {
        b.iter(|| xyz_to_lab(&srgb_to_xyz(black_box(&chic)), &WhitePoint::D65))
    });

    group.bench_function("delta-e-cie76", |b| {
        b.iter(|| delta_e_squared(black_box(&chic), black_box(&teal)))
    });

    group.bench_function("delta-e-oklrab", |b| {
        b.iter(|| delta_e_ok_squared(black_box(&chic), black_box(&teal), OkVersion::Revised))
    });

    group.finish();

    let mut group = c.benchmark_group("closest-vga");

    group.bench_function("cie76", |b| {
        b.iter(|| find_closest(black_box(&chic), &VGA_COLORS, &Cie76::default()))
    });

    group.bench_function("oklrab", |b| {
        b.iter(|| find_closest(black_box(&chic), &VGA_COLORS, &Oklab(OkVersion::Revised)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
