//! Filter operations
//!
//! This module provides frequency-domain filter operations for image
//! processing.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
