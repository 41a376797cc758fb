use dftblur_image::{Image, ImageSize};
use dftblur_imgproc::{color, filter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();
    let image_path = args
        .get(1)
        .ok_or("usage: fft_blur <image_path> [kernel_size] [output_path]")?;
    let kernel_size = match args.get(2) {
        Some(arg) => arg.parse::<usize>()?,
        None => 5,
    };
    let output_path = args.get(3).map(String::as_str).unwrap_or("blurred.png");

    // read the image and convert it to grayscale
    let rgb = image::open(image_path)?.into_rgb8();
    let size = ImageSize {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
    };
    let rgb = Image::<u8, 3>::new(size, rgb.into_raw())?;
    log::info!("loaded {image_path} ({size})");

    let mut gray = Image::<u8, 1>::from_size_val(size, 0)?;
    color::gray_from_rgb(&rgb, &mut gray)?;

    // blur the image in the frequency domain
    let mut blurred = Image::<u8, 1>::from_size_val(size, 0)?;
    filter::gaussian_blur_fft(&gray, &mut blurred, kernel_size)?;
    log::info!("applied a {kernel_size}x{kernel_size} gaussian blur");

    // write the result
    let out = image::GrayImage::from_raw(
        size.width as u32,
        size.height as u32,
        blurred.as_slice().to_vec(),
    )
    .ok_or("failed to build the output image buffer")?;
    out.save(output_path)?;
    log::info!("wrote {output_path}");

    Ok(())
}
