//! TurboSHAKE extendable output functions
//!
//! This crate implements the TurboSHAKE family of extendable output
//! functions (XOFs) as specified in RFC 9861: TurboSHAKE128 and
//! TurboSHAKE256, built on the 12-round Keccak-p[1600] permutation for
//! roughly twice the throughput of SHA-3/SHAKE.
//!
//! Both one-shot and incremental streaming interfaces are provided. A
//! context absorbs an arbitrary-length message together with a
//! caller-chosen domain separation byte, then produces an output stream of
//! any requested length. Outputs are deterministic.
//!
//! The library is usable in both `std` and `no_std` environments; the
//! allocating conveniences (one-shot helpers, `squeeze_into_vec`, hex
//! output) are gated on the `alloc` feature.
//!
//! # Security Features
//!
//! - Sponge state and input buffer are zeroized when a context is dropped
//! - No `unsafe` code
//!
//! Constant-time execution against side-channel attackers is *not* a goal
//! of this crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Keccak-p[1600] permutation and lane-level byte codec
mod keccak;

// Hex encoding helpers
#[cfg(feature = "alloc")]
pub mod encoding;

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, TurboShake128, TurboShake256};

#[cfg(feature = "alloc")]
pub use xof::turboshake::{turboshake128, turboshake128_hex, turboshake256, turboshake256_hex};
