use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ripeness_image::{Image, ImageSize};
use ripeness_imgproc::{color, filter, padding::PaddingMode, threshold};

fn bench_hsv_in_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("HsvInRange");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));
        let label = format!("{width}x{height}");

        let size = ImageSize {
            width: *width,
            height: *height,
        };
        let rgb = Image::<u8, 3>::from_size_pixel(size, [40, 180, 60]).unwrap();

        group.bench_with_input(BenchmarkId::new("hsv_blur_in_range", &label), &rgb, |b, i| {
            let mut hsv = Image::<u8, 3>::from_size_val(size, 0).unwrap();
            let mut blurred = hsv.clone();
            let mut mask = Image::<u8, 1>::from_size_val(size, 0).unwrap();
            b.iter(|| {
                color::hsv_from_rgb(i, &mut hsv).unwrap();
                filter::gaussian_blur(&hsv, &mut blurred, (5, 5), (0.0, 0.0), PaddingMode::Reflect101)
                    .unwrap();
                threshold::in_range(&blurred, &mut mask, &[35, 50, 50], &[85, 255, 255]).unwrap();
                std::hint::black_box(&mask);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hsv_in_range);
criterion_main!(benches);
