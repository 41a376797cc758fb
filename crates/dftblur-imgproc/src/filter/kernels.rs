use dftblur_image::{Image, ImageError, ImageSize};

use crate::padding::pad_to_size;

/// Derive the gaussian standard deviation from a kernel size.
///
/// Uses the conventional heuristic `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`
/// for odd kernel sizes.
pub fn gaussian_sigma_auto(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Create a gaussian blur kernel.
///
/// The kernel is sampled symmetrically around its center and normalized so
/// its values sum to one.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel, a positive odd integer.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] if `kernel_size` is zero or
/// even.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Result<Vec<f32>, ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }

    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);

    Ok(kernel)
}

/// Create a 2D gaussian kernel as the outer product of the separable 1D
/// kernel with itself, with sigma derived by [`gaussian_sigma_auto`].
///
/// The result is a `kernel_size` x `kernel_size` single channel image whose
/// values sum to one.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] if `kernel_size` is zero or
/// even.
pub fn gaussian_kernel_2d(kernel_size: usize) -> Result<Image<f32, 1>, ImageError> {
    let kernel_1d = gaussian_kernel_1d(kernel_size, gaussian_sigma_auto(kernel_size))?;

    let mut data = Vec::with_capacity(kernel_size * kernel_size);
    for ky in &kernel_1d {
        for kx in &kernel_1d {
            data.push(ky * kx);
        }
    }

    Image::new(
        ImageSize {
            width: kernel_size,
            height: kernel_size,
        },
        data,
    )
}

/// Embed a kernel into a zero canvas of the given size.
///
/// The kernel's [0, 0] element lands at the canvas's [0, 0]. The kernel is
/// deliberately not centered: multiplying spectra realizes a circular
/// convolution, and the top-left anchor matches the top-left aligned padded
/// image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if the canvas is smaller than
/// the kernel in either axis.
pub fn embed_kernel(kernel: &Image<f32, 1>, size: ImageSize) -> Result<Image<f32, 1>, ImageError> {
    let mut canvas = Image::from_size_val(size, 0.0)?;
    pad_to_size(kernel, &mut canvas)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use dftblur_image::{ImageError, ImageSize};

    #[test]
    fn gaussian_kernel_1d_matches_sigma_rule() -> Result<(), ImageError> {
        let sigma = super::gaussian_sigma_auto(3);
        assert!((sigma - 0.8).abs() < 1e-6);

        let kernel = super::gaussian_kernel_1d(3, sigma)?;

        // expectations derived from the documented formula, not hard-coded
        let side = (-1.0f32 / (2.0 * sigma * sigma)).exp();
        let norm = 1.0 + 2.0 * side;
        let expected = [side / norm, 1.0 / norm, side / norm];

        for (k, e) in kernel.iter().zip(expected.iter()) {
            assert!((k - e).abs() < 1e-6);
        }

        assert_eq!(kernel[0], kernel[2]);
        assert!((kernel.iter().sum::<f32>() - 1.0).abs() < 1e-6);

        Ok(())
    }

    #[test]
    fn gaussian_kernel_2d_unit_sum() -> Result<(), ImageError> {
        for kernel_size in [1, 3, 5, 7, 9] {
            let kernel = super::gaussian_kernel_2d(kernel_size)?;
            assert_eq!(kernel.rows(), kernel_size);
            assert_eq!(kernel.cols(), kernel_size);

            let sum = kernel.as_slice().iter().sum::<f32>();
            assert!((sum - 1.0).abs() < 1e-5);
            assert!(kernel.as_slice().iter().all(|&k| k >= 0.0));
        }

        Ok(())
    }

    #[test]
    fn gaussian_kernel_invalid_size() {
        assert!(matches!(
            super::gaussian_kernel_1d(0, 1.0),
            Err(ImageError::InvalidKernelSize(0))
        ));
        assert!(matches!(
            super::gaussian_kernel_2d(4),
            Err(ImageError::InvalidKernelSize(4))
        ));
    }

    #[test]
    fn embed_kernel_top_left() -> Result<(), ImageError> {
        let kernel = super::gaussian_kernel_2d(3)?;
        let canvas = super::embed_kernel(
            &kernel,
            ImageSize {
                width: 6,
                height: 5,
            },
        )?;

        for y in 0..5 {
            for x in 0..6 {
                let expected = if y < 3 && x < 3 {
                    *kernel.get(y, x, 0).unwrap()
                } else {
                    0.0
                };
                assert_eq!(canvas.get(y, x, 0), Some(&expected));
            }
        }

        Ok(())
    }

    #[test]
    fn embed_kernel_too_small() -> Result<(), ImageError> {
        let kernel = super::gaussian_kernel_2d(5)?;
        assert!(matches!(
            super::embed_kernel(
                &kernel,
                ImageSize {
                    width: 4,
                    height: 8,
                },
            ),
            Err(ImageError::InvalidDimension(5, 5, 4, 8))
        ));

        Ok(())
    }
}
