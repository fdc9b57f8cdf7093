//! Parameterized CRC-16 checksums.
//!
//! A small engine computing CRC-16 over byte slices for any
//! `(poly, init, xor_out, reflect)` configuration, plus named presets.
//!
//! # Presets
//!
//! | Type | Polynomial | Init | XorOut | Reflected |
//! |------|------------|------|--------|-----------|
//! | [`Crc16Xmodem`] | 0x1021 | 0x0000 | 0x0000 | no |
//! | [`Crc16Kermit`] | 0x8408 | 0x0000 | 0x0000 | yes |
//! | [`Crc16CcittFalse`] | 0x1021 | 0xFFFF | 0x0000 | no |
//! | [`Crc16Usb`] | 0xA001 | 0xFFFF | 0xFFFF | yes |
//! | [`Crc16Arc`] | 0xA001 | 0x0000 | 0x0000 | yes |
//! | [`Crc16Modbus`] | 0xA001 | 0xFFFF | 0x0000 | yes |
//! | [`Crc16IbmSdlc`] | 0x8408 | 0xFFFF | 0xFFFF | yes |
//! | [`Crc16Genibus`] | 0x1021 | 0xFFFF | 0xFFFF | no |
//! | [`Crc16Mcrf4xx`] | 0x8408 | 0xFFFF | 0x0000 | yes |
//!
//! Reflected polynomials are given in reflected form; [`reflect::reflect16`]
//! derives them from the normal form.
//!
//! # Example
//!
//! ```rust
//! use crc16::{Checksum, ChecksumCombine, Crc16, Crc16Params, Crc16Xmodem};
//!
//! // Preset, one-shot
//! let crc = Crc16Xmodem::checksum(b"123456789");
//! assert_eq!(crc, 0x31C3);
//!
//! // Preset, streaming
//! let mut hasher = Crc16Xmodem::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Combine
//! let (a, b) = b"123456789".split_at(4);
//! assert_eq!(Crc16Xmodem::combine(Crc16Xmodem::checksum(a), Crc16Xmodem::checksum(b), b.len()), crc);
//!
//! // Runtime configuration
//! let engine = Crc16::new(Crc16Params::new(0x1021, 0x0000, 0x0000, false));
//! assert_eq!(engine.checksum(b"123456789"), crc);
//! ```
//!
//! # Length Counters
//!
//! Slices are counted in `usize` and never truncated. Code that must mirror a
//! narrow byte counter picks it explicitly:
//!
//! ```rust
//! use crc16::{Crc16Xmodem, LengthError};
//!
//! let data = [0u8; 300];
//! assert_eq!(
//!   Crc16Xmodem::checksum_counted::<u8>(&data),
//!   Err(LengthError::new(300, 255))
//! );
//! // A u8 counter sees 300 as 44.
//! assert_eq!(
//!   Crc16Xmodem::checksum_truncated::<u8>(&data),
//!   Crc16Xmodem::checksum(&data[..44])
//! );
//! ```
//!
//! # Backends
//!
//! Bitwise and lookup-table tiers give identical results. The table tier is the
//! default; `CRC16_FORCE=bitwise` selects the other (requires `std`).
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crc16 = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod combine;
pub mod config;
pub mod engine;
mod error;
pub mod len;
mod params;
pub mod reflect;
mod tables;
mod variants;

pub use config::{Crc16Config, Crc16Force};
pub use engine::{ByteKernel, Crc16, Crc16Digest, process_forward_byte, process_reflected_byte};
pub use error::LengthError;
pub use len::BufferLen;
pub use params::Crc16Params;
pub use reflect::{reflect8, reflect16};
pub use traits::{Checksum, ChecksumCombine};
pub use variants::{
  Crc16Arc, Crc16CcittFalse, Crc16Genibus, Crc16IbmSdlc, Crc16Kermit, Crc16Mcrf4xx, Crc16Modbus, Crc16Usb, Crc16Xmodem,
};
