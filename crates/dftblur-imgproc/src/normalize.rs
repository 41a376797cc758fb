use num_traits::Float;

use dftblur_image::{Image, ImageError};

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `image` - The input image of shape (height, width, channels).
///
/// # Returns
///
/// A tuple containing the minimum and maximum values in the image.
///
/// # Errors
///
/// If the image data is empty, an error is returned.
pub fn find_min_max<T, const C: usize>(image: &Image<T, C>) -> Result<(T, T), ImageError>
where
    T: Copy + PartialOrd,
{
    let first_element = match image.as_slice().iter().next() {
        Some(x) => x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    let mut min = first_element;
    let mut max = first_element;

    for x in image.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((*min, *max))
}

/// Normalize an image using its observed minimum and maximum values.
///
/// The formula for normalizing an image is:
///
/// (image - observed_min) * (max - min) / (observed_max - observed_min) + min
///
/// The rescale is based on the values actually present in the grid, not on
/// theoretical bounds. A constant input maps to `min` everywhere.
///
/// # Arguments
///
/// * `src` - The input image of shape (height, width, channels).
/// * `dst` - The output image of shape (height, width, channels).
/// * `min` - The lower bound of the output range.
/// * `max` - The upper bound of the output range.
///
/// # Example
///
/// ```
/// use dftblur_image::{Image, ImageSize};
/// use dftblur_imgproc::normalize::normalize_min_max;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![0.0, 1.0, 2.0, 4.0],
/// ).unwrap();
///
/// let mut normalized = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// normalize_min_max(&image, &mut normalized, 0.0, 1.0).unwrap();
///
/// assert_eq!(normalized.as_slice(), &[0.0, 0.25, 0.5, 1.0]);
/// ```
pub fn normalize_min_max<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    min: T,
    max: T,
) -> Result<(), ImageError>
where
    T: Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            dst.cols(),
            dst.rows(),
            src.cols(),
            src.rows(),
        ));
    }

    let (min_val, max_val) = find_min_max(src)?;

    let range = max_val - min_val;
    if range == T::zero() {
        dst.as_slice_mut().fill(min);
        return Ok(());
    }

    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(&src_val, dst_val)| {
            *dst_val = (src_val - min_val) * (max - min) / range + min;
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use dftblur_image::{Image, ImageError, ImageSize};

    #[test]
    fn find_min_max() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![-3.0, 1.0, 7.0, 0.5],
        )?;

        let (min, max) = super::find_min_max(&image)?;
        assert_eq!(min, -3.0);
        assert_eq!(max, 7.0);

        Ok(())
    }

    #[test]
    fn normalize_min_max() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![10.0, 20.0, 30.0],
        )?;

        let mut normalized = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;
        super::normalize_min_max(&image, &mut normalized, 0.0, 255.0)?;

        let expected = [0.0, 127.5, 255.0];
        for (a, b) in normalized.as_slice().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-4);
        }

        Ok(())
    }

    #[test]
    fn normalize_constant_input() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 2,
            },
            42.0,
        )?;

        let mut normalized = Image::<f32, 1>::from_size_val(image.size(), -1.0)?;
        super::normalize_min_max(&image, &mut normalized, 7.0, 255.0)?;

        assert!(normalized.as_slice().iter().all(|&v| v == 7.0));

        Ok(())
    }

    #[test]
    fn normalize_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let mut dst = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;

        assert!(matches!(
            super::normalize_min_max(&image, &mut dst, 0.0, 1.0),
            Err(ImageError::InvalidImageSize(3, 2, 2, 2))
        ));

        Ok(())
    }
}
