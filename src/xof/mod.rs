//! Extendable Output Functions (XOF)
//!
//! This module contains the TurboSHAKE extendable output functions, which
//! produce deterministic output streams of arbitrary length.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{Error, Result};

pub mod turboshake;

// Re-exports
pub use turboshake::{TurboShake128, TurboShake256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF with the default domain
    /// separation byte
    fn new() -> Self
    where
        Self: Sized;

    /// Creates a new instance with a custom domain separation byte
    fn with_domain(domain: u8) -> Result<Self>
    where
        Self: Sized;

    /// Updates the XOF state with new data
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    #[cfg(feature = "alloc")]
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to generate output in a single call
    #[cfg(feature = "alloc")]
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze_into_vec(len)
    }
}

// Error constructors for XOF-specific state errors
impl Error {
    /// Create the error for an `update` on a context that already
    /// transitioned to squeezing
    pub(crate) fn update_after_finalize() -> Self {
        Error::State {
            operation: "update",
            details: "context is already squeezing",
        }
    }
}
