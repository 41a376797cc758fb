use dftblur_image::{Image, ImageError, ImageSize};
use rustfft::{num_complex::Complex, FftDirection, FftPlanner};

/// Frequency-domain representation of a single channel image.
///
/// Every cell holds one complex coefficient. The grid has the same
/// dimensions as the spatial image it was produced from and is stored in
/// row major order.
#[derive(Clone)]
pub struct Spectrum {
    size: ImageSize,
    data: Vec<Complex<f32>>,
}

impl Spectrum {
    /// Create a new spectrum from complex coefficients.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the given size, an error is
    /// returned.
    pub fn new(size: ImageSize, data: Vec<Complex<f32>>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height,
            ));
        }
        Ok(Self { size, data })
    }

    /// Get the size of the spectrum grid.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of rows of the spectrum grid.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the spectrum grid.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the complex coefficients as a slice.
    pub fn as_slice(&self) -> &[Complex<f32>] {
        &self.data
    }
}

/// Transpose a row major grid of complex values.
fn transposed(rows: usize, cols: usize, data: &[Complex<f32>]) -> Vec<Complex<f32>> {
    let mut out = vec![Complex::default(); data.len()];
    for y in 0..rows {
        for x in 0..cols {
            out[x * rows + y] = data[y * cols + x];
        }
    }
    out
}

/// Apply the 2D transform in place as a row pass, a transpose, a column pass
/// and a transpose back. The transform is not normalized in either direction;
/// [`ifft_real`] applies the single 1/(rows*cols) factor at the end.
fn fft_2d_with_direction(
    rows: usize,
    cols: usize,
    data: &mut [Complex<f32>],
    direction: FftDirection,
) {
    let mut planner = FftPlanner::new();

    // transform each row of the grid
    let fft_cols = planner.plan_fft(cols, direction);
    let mut scratch = vec![Complex::default(); fft_cols.get_inplace_scratch_len()];
    for row in data.chunks_exact_mut(cols) {
        fft_cols.process_with_scratch(row, &mut scratch);
    }

    // transpose to transform the columns as contiguous rows
    let mut tr = transposed(rows, cols, data);
    let fft_rows = planner.plan_fft(rows, direction);
    scratch.resize(fft_rows.get_inplace_scratch_len(), Complex::default());
    for col in tr.chunks_exact_mut(rows) {
        fft_rows.process_with_scratch(col, &mut scratch);
    }

    data.copy_from_slice(&transposed(cols, rows, &tr));
}

/// Compute the forward 2D fourier transform of a single channel image.
///
/// The image becomes the real plane of a complex grid whose imaginary plane
/// is zero, and the grid is transformed in both axes. The output has the
/// same dimensions as the input.
///
/// # Examples
///
/// ```
/// use dftblur_image::{Image, ImageSize};
/// use dftblur_imgproc::fft::fft_image;
///
/// let image = Image::<f32, 1>::from_size_val(
///     ImageSize { width: 4, height: 4 }, 1.0,
/// ).unwrap();
///
/// let spectrum = fft_image(&image);
/// assert_eq!(spectrum.rows(), 4);
/// assert_eq!(spectrum.cols(), 4);
/// // the DC coefficient carries the total energy
/// assert!((spectrum.as_slice()[0].re - 16.0).abs() < 1e-4);
/// ```
pub fn fft_image(src: &Image<f32, 1>) -> Spectrum {
    let mut data = src
        .as_slice()
        .iter()
        .map(|&p| Complex::new(p, 0.0))
        .collect::<Vec<_>>();

    fft_2d_with_direction(src.rows(), src.cols(), &mut data, FftDirection::Forward);

    Spectrum {
        size: src.size(),
        data,
    }
}

/// Compute the inverse 2D fourier transform and keep the real plane.
///
/// The result is scaled by 1/(rows*cols) so that
/// `ifft_real(fft_image(x))` reconstructs `x` up to floating point
/// tolerance. The imaginary plane is discarded; for a real-valued filtered
/// result it only carries numerical residue.
pub fn ifft_real(mut spectrum: Spectrum) -> Result<Image<f32, 1>, ImageError> {
    let (rows, cols) = (spectrum.rows(), spectrum.cols());
    fft_2d_with_direction(rows, cols, &mut spectrum.data, FftDirection::Inverse);

    let scale = 1.0 / (rows * cols) as f32;
    let data = spectrum.data.iter().map(|c| c.re * scale).collect();

    Image::new(spectrum.size, data)
}

/// Multiply two spectra elementwise.
///
/// This is the frequency-domain counterpart of circular convolution in the
/// spatial domain. No scaling is applied.
///
/// # Errors
///
/// Returns [`ImageError::ShapeMismatch`] if the two grids differ in
/// dimensions.
pub fn mul_spectrums(a: &Spectrum, b: &Spectrum) -> Result<Spectrum, ImageError> {
    if a.size != b.size {
        return Err(ImageError::ShapeMismatch(
            a.cols(),
            a.rows(),
            b.cols(),
            b.rows(),
        ));
    }

    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&ca, &cb)| ca * cb)
        .collect();

    Ok(Spectrum { size: a.size, data })
}
