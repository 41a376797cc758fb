#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image cropping module.
pub mod crop;

/// 2d fourier transform module.
pub mod fft;

/// image filtering module.
pub mod filter;

/// operations to normalize images.
pub mod normalize;

/// image padding module.
pub mod padding;
