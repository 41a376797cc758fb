use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use dftblur_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image data types.
pub trait ImageDtype: Copy + Default + Into<f32> {
    /// Convert a f32 value to the image data type.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored contiguously in row major order with shape
/// (H, W, C), where H is the height of the image, W the width and C the
/// number of channels.
#[derive(Clone)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftblur_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 1);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * C {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * C];
        Image::new(size, data)
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Returns
    ///
    /// A new image with the pixel data cast to the given type.
    ///
    /// # Examples
    ///
    /// ```
    /// use dftblur_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 1>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![0.0f32, 300.0],
    /// ).unwrap();
    ///
    /// let bytes = image.cast::<u8>().unwrap();
    /// assert_eq!(bytes.as_slice(), &[0u8, 255]);
    /// ```
    pub fn cast<U>(&self) -> Result<Image<U, C>, ImageError>
    where
        U: ImageDtype,
        T: ImageDtype,
    {
        let casted_data = self
            .as_slice()
            .iter()
            .map(|&x| U::from_f32(x.into()))
            .collect::<Vec<U>>();

        Image::new(self.size(), casted_data)
    }

    /// Get a channel of the image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Copy,
    {
        if channel >= C {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, C));
        }

        let channel_data = self
            .data
            .iter()
            .skip(channel)
            .step_by(C)
            .copied()
            .collect::<Vec<T>>();

        Image::new(self.size(), channel_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the pixel data of the image as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data of the image as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a reference to the pixel value at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `y` - The row of the pixel.
    /// * `x` - The column of the pixel.
    /// * `ch` - The channel index of the pixel.
    pub fn get(&self, y: usize, x: usize, ch: usize) -> Option<&T> {
        if y >= self.size.height || x >= self.size.width || ch >= C {
            return None;
        }
        self.data.get((y * self.size.width + x) * C + ch)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_data_mismatch() {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 3],
        );
        assert!(matches!(
            image,
            Err(ImageError::InvalidChannelShape(3, 4))
        ));
    }

    #[test]
    fn image_cast_quantizes() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![-4.0, 0.4, 127.6, 280.0],
        )?;

        let bytes = image.cast::<u8>()?;
        assert_eq!(bytes.as_slice(), &[0u8, 0, 128, 255]);

        Ok(())
    }

    #[test]
    fn image_channel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1u8, 2, 3, 4, 5, 6],
        )?;

        let channel = image.channel(1)?;
        assert_eq!(channel.as_slice(), &[2u8, 5]);

        assert!(matches!(
            image.channel(3),
            Err(ImageError::ChannelIndexOutOfBounds(3, 3))
        ));

        Ok(())
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1u8, 2, 3, 4],
        )?;

        assert_eq!(image.get(1, 0, 0), Some(&3));
        assert_eq!(image.get(2, 0, 0), None);

        Ok(())
    }
}
