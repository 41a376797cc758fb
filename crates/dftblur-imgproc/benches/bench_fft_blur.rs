use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dftblur_image::Image;
use dftblur_imgproc::filter::gaussian_blur_fft;

fn bench_fft_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur FFT");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 9, 17].iter() {
            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            // input image
            let image_data = (0..width * height).map(|i| (i % 256) as u8).collect();
            let image_size = [*width, *height].into();
            let image = Image::<u8, 1>::new(image_size, image_data).unwrap();

            // output image
            let output = Image::<u8, 1>::from_size_val(image_size, 0).unwrap();

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_fft", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(gaussian_blur_fft(src, &mut dst, *kernel_size)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fft_blur);
criterion_main!(benches);
