use dftblur_image::{Image, ImageError};

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if the requested region extends
/// beyond the source image.
///
/// # Examples
///
/// ```rust
/// use dftblur_image::{Image, ImageSize};
/// use dftblur_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy,
{
    if x + dst.cols() > src.cols() || y + dst.rows() > src.rows() {
        return Err(ImageError::InvalidDimension(
            x + dst.cols(),
            y + dst.rows(),
            src.cols(),
            src.rows(),
        ));
    }

    // a zero-area region never exceeds the source and has nothing to copy
    if dst.as_slice().is_empty() {
        return Ok(());
    }

    let dst_cols = dst.cols();
    let src_cols = src.cols();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src_cols * C + x * C;
            let src_slice = &src_data[offset..offset + dst_cols * C];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}
