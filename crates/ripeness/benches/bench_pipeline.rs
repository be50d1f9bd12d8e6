use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ripeness::{Pipeline, PipelineConfig};
use ripeness_image::{Image, ImageSize};

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analyze");
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));
        let label = format!("{width}x{height}");

        let size = ImageSize {
            width: *width,
            height: *height,
        };

        // left half green, right half orange
        let data = (0..width * height)
            .flat_map(|i| {
                if i % width < width / 2 {
                    [0u8, 200, 0]
                } else {
                    [255u8, 128, 0]
                }
            })
            .collect();
        let image = Image::<u8, 3>::new(size, data).unwrap();

        group.bench_with_input(BenchmarkId::new("analyze", &label), &image, |b, i| {
            b.iter(|| std::hint::black_box(pipeline.analyze(i).unwrap()))
        });

        let analysis = pipeline.analyze(&image).unwrap();
        group.bench_with_input(BenchmarkId::new("compose", &label), &image, |b, i| {
            b.iter(|| std::hint::black_box(pipeline.compose(i, &analysis).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
