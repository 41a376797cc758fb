use dftblur_image::{Image, ImageError, ImageSize};

use super::kernels;
use crate::{crop::crop_image, fft, normalize::normalize_min_max, padding};

/// Blur a grayscale image with a gaussian filter applied in the frequency
/// domain.
///
/// The image is zero-padded to the nearest efficient transform size, both
/// the image and the embedded gaussian kernel are forward transformed, their
/// spectra are multiplied elementwise (circular convolution by the
/// convolution theorem) and the product is transformed back. The recovered
/// real plane is min-max rescaled to [0, 255], cropped back to the source
/// geometry and quantized to bytes.
///
/// # Arguments
///
/// * `src` - The source grayscale image.
/// * `dst` - The destination image, same size as `src`.
/// * `kernel_size` - The side of the gaussian kernel, a positive odd
///   integer. Sigma is derived with [`kernels::gaussian_sigma_auto`].
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `dst` does not match `src`
/// in size, and [`ImageError::InvalidKernelSize`] for a zero or even
/// `kernel_size`.
///
/// # Examples
///
/// ```
/// use dftblur_image::{Image, ImageSize};
/// use dftblur_imgproc::filter::gaussian_blur_fft;
///
/// let image = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 16, height: 12 }, 128,
/// ).unwrap();
///
/// let mut blurred = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gaussian_blur_fft(&image, &mut blurred, 5).unwrap();
///
/// assert_eq!(blurred.size(), image.size());
/// ```
pub fn gaussian_blur_fft(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel_size: usize,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            dst.cols(),
            dst.rows(),
            src.cols(),
            src.rows(),
        ));
    }

    // transform canvas with cheap mixed-radix factors in both axes
    let padded_size = ImageSize {
        width: padding::optimal_fft_size(src.cols()),
        height: padding::optimal_fft_size(src.rows()),
    };

    // zero-extend the image on the bottom/right border
    let src_f32 = src.cast::<f32>()?;
    let mut padded = Image::from_size_val(padded_size, 0.0f32)?;
    padding::pad_to_size(&src_f32, &mut padded)?;

    // forward transforms of the image and the embedded kernel
    let spectrum = fft::fft_image(&padded);
    let kernel = kernels::gaussian_kernel_2d(kernel_size)?;
    let kernel_spectrum = fft::fft_image(&kernels::embed_kernel(&kernel, padded_size)?);

    // low-pass filtering via the convolution theorem
    let filtered = fft::mul_spectrums(&spectrum, &kernel_spectrum)?;
    let restored = fft::ifft_real(filtered)?;

    // back to the display range, then drop the padding
    let mut normalized = Image::from_size_val(padded_size, 0.0f32)?;
    normalize_min_max(&restored, &mut normalized, 0.0, 255.0)?;

    let mut cropped = Image::from_size_val(src.size(), 0.0f32)?;
    crop_image(&normalized, &mut cropped, 0, 0)?;

    *dst = cropped.cast::<u8>()?;

    Ok(())
}
