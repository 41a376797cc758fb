use dftblur_image::{Image, ImageError};

/// Compute the smallest size greater than or equal to `n` for which the 2D
/// fourier transform runs efficiently.
///
/// These are the sizes whose prime factorization contains only 2, 3 and 5,
/// keeping the FFT in its fast mixed-radix code paths.
///
/// # Arguments
///
/// * `n` - The minimum size of the transform axis.
///
/// # Examples
///
/// ```
/// use dftblur_imgproc::padding::optimal_fft_size;
///
/// assert_eq!(optimal_fft_size(7), 8);
/// assert_eq!(optimal_fft_size(100), 100);
/// ```
pub fn optimal_fft_size(n: usize) -> usize {
    let mut candidate = n.max(1);
    loop {
        let mut m = candidate;
        for factor in [2, 3, 5] {
            while m % factor == 0 {
                m /= factor;
            }
        }
        if m == 1 {
            return candidate;
        }
        candidate += 1;
    }
}

/// Pad an image to the size of the destination image.
///
/// The source is copied with its top-left corner at the destination's
/// top-left corner; the bottom/right border introduced by the larger canvas
/// is filled with the default value (zero for numeric types). This keeps the
/// original content top-left aligned so it can be recovered by cropping.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image holding the padded result.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if `dst` is smaller than `src`
/// in either axis.
///
/// # Examples
///
/// ```
/// use dftblur_image::{Image, ImageSize};
/// use dftblur_imgproc::padding::pad_to_size;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1.0, 2.0, 3.0, 4.0],
/// ).unwrap();
///
/// let mut padded = Image::<f32, 1>::from_size_val(
///     ImageSize { width: 3, height: 2 }, 0.0,
/// ).unwrap();
///
/// pad_to_size(&image, &mut padded).unwrap();
///
/// assert_eq!(padded.as_slice(), &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0]);
/// ```
pub fn pad_to_size<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy + Default,
{
    if dst.rows() < src.rows() || dst.cols() < src.cols() {
        return Err(ImageError::InvalidDimension(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // a zero-area destination has no rows to fill
    if dst.as_slice().is_empty() {
        return Ok(());
    }

    let src_rows = src.rows();
    let src_row_len = src.cols() * C;
    let dst_row_len = dst.cols() * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .chunks_exact_mut(dst_row_len)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row.fill(T::default());
            if y < src_rows {
                let src_row = &src_data[y * src_row_len..(y + 1) * src_row_len];
                dst_row[..src_row_len].copy_from_slice(src_row);
            }
        });

    Ok(())
}
