#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use dftblur_image as image;

#[doc(inline)]
pub use dftblur_imgproc as imgproc;
