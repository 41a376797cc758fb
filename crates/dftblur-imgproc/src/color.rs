use dftblur_image::{Image, ImageDtype, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use dftblur_image::{Image, ImageSize};
/// use dftblur_imgproc::color::gray_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// gray_from_rgb(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 1>) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            dst.cols(),
            dst.rows(),
            src.cols(),
            src.rows(),
        ));
    }

    src.as_slice()
        .chunks_exact(3)
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(rgb, gray)| {
            let r: f32 = rgb[0].into();
            let g: f32 = rgb[1].into();
            let b: f32 = rgb[2].into();
            *gray = T::from_f32(RW * r + GW * g + BW * b);
        });

    Ok(())
}
