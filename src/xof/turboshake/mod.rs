//! TurboSHAKE128 and TurboSHAKE256 (RFC 9861)
//!
//! TurboSHAKE is a family of extendable output functions built on the
//! Keccak permutation reduced to 12 rounds for improved performance. Each
//! instance is parameterized by a rate (168 bytes for the 128-bit security
//! level, 136 for the 256-bit level) and a domain separation byte mixed
//! into the final input block.
//!
//! A context is a two-state machine: it starts *absorbing* (any number of
//! `update` calls) and transitions to *squeezing* on the first output
//! request. The transition is one-way; `update` after it is an error, but
//! squeezing may continue indefinitely.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec, vec::Vec};

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ExtendableOutputFunction;
use crate::error::{validate, Error, Result};
use crate::keccak;

/// Rate in bytes of TurboSHAKE128 (1344 bits).
pub const TURBOSHAKE128_RATE: usize = 168;

/// Rate in bytes of TurboSHAKE256 (1088 bits).
pub const TURBOSHAKE256_RATE: usize = 136;

/// Default domain separation byte for plain TurboSHAKE.
pub const DEFAULT_DOMAIN: u8 = 0x1F;

/// Shared sponge engine behind both variants.
///
/// Holds the permutation state, a rate-sized staging buffer for partial
/// input blocks while absorbing, and the output cursor while squeezing.
/// `buffer_idx < RATE` holds between calls until finalization; afterwards
/// the buffer stays zeroed and `squeeze_idx` in `0..=RATE` tracks the next
/// unread byte of the current output block (`RATE` meaning a fresh
/// permutation is due).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct TurboShakeCore<const RATE: usize> {
    state: [u64; keccak::STATE_LANES],
    buffer: [u8; RATE],
    buffer_idx: usize,
    squeeze_idx: usize,
    domain: u8,
    finalized: bool,
}

impl<const RATE: usize> TurboShakeCore<RATE> {
    fn new(domain: u8) -> Self {
        Self {
            state: [0u64; keccak::STATE_LANES],
            buffer: [0u8; RATE],
            buffer_idx: 0,
            squeeze_idx: 0,
            domain,
            finalized: false,
        }
    }

    fn update(&mut self, mut data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::update_after_finalize());
        }

        // Top up a partially filled block first.
        if self.buffer_idx > 0 {
            let to_copy = (RATE - self.buffer_idx).min(data.len());
            self.buffer[self.buffer_idx..self.buffer_idx + to_copy]
                .copy_from_slice(&data[..to_copy]);
            self.buffer_idx += to_copy;
            data = &data[to_copy..];

            if self.buffer_idx == RATE {
                keccak::xor_block(&mut self.state, &self.buffer);
                keccak::p1600(&mut self.state, keccak::TURBO_ROUNDS);
                self.buffer_idx = 0;
            }
        }

        // Absorb whole blocks straight from the input, without copying.
        let mut blocks = data.chunks_exact(RATE);
        for block in &mut blocks {
            keccak::xor_block(&mut self.state, block);
            keccak::p1600(&mut self.state, keccak::TURBO_ROUNDS);
        }

        // Stash the trailing partial block.
        let tail = blocks.remainder();
        if !tail.is_empty() {
            self.buffer[..tail.len()].copy_from_slice(tail);
            self.buffer_idx = tail.len();
        }

        Ok(())
    }

    /// Pad and transition to squeezing. Idempotent; invoked by the first
    /// output request.
    ///
    /// The domain byte lands at the current buffer position and the 0x80
    /// pad terminator at the last rate byte; together they form pad10*1
    /// domain-separated by D. When the pending block is RATE - 1 bytes
    /// long both XORs hit the same byte and combine there.
    fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        if self.buffer_idx >= RATE {
            return Err(Error::Internal {
                location: "turboshake::finalize",
            });
        }

        keccak::xor_block(&mut self.state, &self.buffer[..self.buffer_idx]);
        keccak::xor_byte(&mut self.state, self.buffer_idx, self.domain);
        keccak::xor_byte(&mut self.state, RATE - 1, 0x80);
        keccak::p1600(&mut self.state, keccak::TURBO_ROUNDS);

        self.buffer.zeroize();
        self.buffer_idx = 0;
        self.squeeze_idx = 0;
        self.finalized = true;
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.finalize()?;

        let mut offset = 0;
        while offset < output.len() {
            if self.squeeze_idx == RATE {
                keccak::p1600(&mut self.state, keccak::TURBO_ROUNDS);
                self.squeeze_idx = 0;
            }

            let chunk = (RATE - self.squeeze_idx).min(output.len() - offset);
            keccak::read_bytes(
                &self.state,
                self.squeeze_idx,
                &mut output[offset..offset + chunk],
            );
            self.squeeze_idx += chunk;
            offset += chunk;
        }

        Ok(())
    }

    fn squeeze_into(&mut self, target: &mut [u8], offset: usize, len: usize) -> Result<()> {
        let end = offset
            .checked_add(len)
            .ok_or(Error::param("length", "offset + length overflows"))?;
        validate::max_length("squeeze target", end, target.len())?;
        self.squeeze(&mut target[offset..end])
    }

    #[cfg(feature = "alloc")]
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    #[cfg(feature = "alloc")]
    fn squeeze_hex(&mut self, len: usize) -> Result<String> {
        let bytes = self.squeeze_into_vec(len)?;
        Ok(crate::encoding::encode_upper(&bytes))
    }
}

/// TurboSHAKE128 context
///
/// Rate 168 bytes, capacity 32 bytes, 128-bit security level.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TurboShake128 {
    core: TurboShakeCore<TURBOSHAKE128_RATE>,
}

/// TurboSHAKE256 context
///
/// Rate 136 bytes, capacity 64 bytes, 256-bit security level.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TurboShake256 {
    core: TurboShakeCore<TURBOSHAKE256_RATE>,
}

macro_rules! impl_turboshake_variant {
    ($name:ident, $rate:expr, $level:expr) => {
        impl $name {
            /// Rate in bytes: input and output are processed in blocks of
            /// this size.
            pub const RATE: usize = $rate;

            /// Creates a context with the default domain separation byte
            /// (0x1F).
            pub fn new() -> Self {
                Self {
                    core: TurboShakeCore::new(DEFAULT_DOMAIN),
                }
            }

            /// Creates a context with a custom domain separation byte.
            ///
            /// Every value in `0x01..=0xFF` defines a distinct XOF
            /// instance; `0x00` is rejected with a parameter error.
            pub fn with_domain(domain: u8) -> Result<Self> {
                validate::parameter(
                    domain != 0x00,
                    "domain",
                    "separation byte must be in 0x01..=0xFF",
                )?;
                Ok(Self {
                    core: TurboShakeCore::new(domain),
                })
            }

            /// Absorbs message bytes.
            ///
            /// May be called any number of times; splitting a message
            /// across calls does not change the output. Fails with a state
            /// error once the context has started squeezing, leaving the
            /// context untouched.
            pub fn update(&mut self, data: &[u8]) -> Result<()> {
                self.core.update(data)
            }

            /// Squeezes `output.len()` bytes into `output`.
            ///
            /// The first call finalizes the input; consecutive calls
            /// continue the same output stream. Squeezing into an empty
            /// buffer is a no-op that still performs the transition.
            pub fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                self.core.squeeze(output)
            }

            /// Squeezes `len` bytes into `target[offset..offset + len]`.
            ///
            /// Fails with a length error if the range does not fit in
            /// `target`; the target and the output stream are unchanged on
            /// error.
            pub fn squeeze_into(
                &mut self,
                target: &mut [u8],
                offset: usize,
                len: usize,
            ) -> Result<()> {
                self.core.squeeze_into(target, offset, len)
            }

            /// Squeezes `len` bytes into a new vector.
            #[cfg(feature = "alloc")]
            pub fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
                self.core.squeeze_into_vec(len)
            }

            /// Squeezes `len` bytes and returns them as uppercase hex,
            /// two characters per byte.
            #[cfg(feature = "alloc")]
            pub fn squeeze_hex(&mut self, len: usize) -> Result<String> {
                self.core.squeeze_hex(len)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self::new()
            }

            fn with_domain(domain: u8) -> Result<Self> {
                Self::with_domain(domain)
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                self.update(data)
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                self.squeeze(output)
            }

            #[cfg(feature = "alloc")]
            fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
                self.squeeze_into_vec(len)
            }

            fn security_level() -> usize {
                $level
            }
        }
    };
}

impl_turboshake_variant!(TurboShake128, TURBOSHAKE128_RATE, 128);
impl_turboshake_variant!(TurboShake256, TURBOSHAKE256_RATE, 256);

/// Computes TurboSHAKE128 of `message` under domain separation byte
/// `domain`, producing `output_len` bytes.
#[cfg(feature = "alloc")]
pub fn turboshake128(message: &[u8], domain: u8, output_len: usize) -> Result<Vec<u8>> {
    let mut xof = TurboShake128::with_domain(domain)?;
    xof.update(message)?;
    xof.squeeze_into_vec(output_len)
}

/// Computes TurboSHAKE256 of `message` under domain separation byte
/// `domain`, producing `output_len` bytes.
#[cfg(feature = "alloc")]
pub fn turboshake256(message: &[u8], domain: u8, output_len: usize) -> Result<Vec<u8>> {
    let mut xof = TurboShake256::with_domain(domain)?;
    xof.update(message)?;
    xof.squeeze_into_vec(output_len)
}

/// [`turboshake128`], with the output returned as uppercase hex.
#[cfg(feature = "alloc")]
pub fn turboshake128_hex(message: &[u8], domain: u8, output_len: usize) -> Result<String> {
    let mut xof = TurboShake128::with_domain(domain)?;
    xof.update(message)?;
    xof.squeeze_hex(output_len)
}

/// [`turboshake256`], with the output returned as uppercase hex.
#[cfg(feature = "alloc")]
pub fn turboshake256_hex(message: &[u8], domain: u8, output_len: usize) -> Result<String> {
    let mut xof = TurboShake256::with_domain(domain)?;
    xof.update(message)?;
    xof.squeeze_hex(output_len)
}
