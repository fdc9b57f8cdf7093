//! The CRC-16 engine.
//!
//! Two table-free byte kernels do all of the arithmetic:
//!
//! - [`process_forward_byte`]: MSB-first, for normal-form polynomials
//! - [`process_reflected_byte`]: LSB-first, for reflected polynomials
//!
//! A configuration picks one of them once ([`ByteKernel`]); the drivers below
//! then run a loop that never re-examines the reflect flag. [`Crc16`] bundles a
//! configuration, its kernel, and a lookup table derived from that kernel.
//!
//! The register is a `u16` throughout, so no bit above 15 is ever observable.

// SAFETY: indexing in the const drivers is bounded by `data.len()`; table
// lookups use a `u8` index into a 256-entry array.
#![allow(clippy::indexing_slicing)]

use crate::{
  combine,
  config::{self, Crc16Force},
  error::LengthError,
  len::BufferLen,
  params::Crc16Params,
  tables,
};

// ─────────────────────────────────────────────────────────────────────────────
// Byte Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// Feed one byte into a forward (MSB-first) register.
///
/// For each bit of `byte`, most significant first: when the register's top bit
/// differs from the data bit, shift left and XOR `poly`; otherwise only shift.
#[inline]
#[must_use]
pub const fn process_forward_byte(crc: u16, byte: u8, poly: u16) -> u16 {
  let mut crc = crc;
  let mut byte = byte;
  let mut bit = 0;
  while bit < 8 {
    if ((crc & 0x8000) >> 8) ^ (byte as u16 & 0x80) != 0 {
      crc = (crc << 1) ^ poly;
    } else {
      crc <<= 1;
    }
    byte <<= 1;
    bit += 1;
  }
  crc
}

/// Feed one byte into a reflected (LSB-first) register.
///
/// The byte is XORed into the low half of the register, then eight
/// shift-right steps apply `poly` whenever the bit shifted out was set.
#[inline]
#[must_use]
pub const fn process_reflected_byte(crc: u16, byte: u8, poly: u16) -> u16 {
  let mut crc = crc ^ byte as u16;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    bit += 1;
  }
  crc
}

/// Which byte kernel a configuration runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteKernel {
  /// [`process_forward_byte`].
  Forward,
  /// [`process_reflected_byte`].
  Reflected,
}

impl ByteKernel {
  #[inline]
  #[must_use]
  pub const fn for_params(params: &Crc16Params) -> Self {
    if params.reflect { Self::Reflected } else { Self::Forward }
  }

  /// Process a single byte with this kernel.
  #[inline]
  #[must_use]
  pub const fn apply(self, crc: u16, byte: u8, poly: u16) -> u16 {
    match self {
      Self::Forward => process_forward_byte(crc, byte, poly),
      Self::Reflected => process_reflected_byte(crc, byte, poly),
    }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Forward => "forward",
      Self::Reflected => "reflected",
    }
  }
}

/// Run `kernel` over every byte of `data`, starting from register `crc`.
///
/// Returns the raw register: no initial value is loaded and no output mask is
/// applied.
#[must_use]
pub const fn update_bitwise(kernel: ByteKernel, poly: u16, crc: u16, data: &[u8]) -> u16 {
  let mut crc = crc;
  let mut i = 0;
  match kernel {
    ByteKernel::Forward => {
      while i < data.len() {
        crc = process_forward_byte(crc, data[i], poly);
        i += 1;
      }
    }
    ByteKernel::Reflected => {
      while i < data.len() {
        crc = process_reflected_byte(crc, data[i], poly);
        i += 1;
      }
    }
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC-16 engine bound to one configuration.
///
/// Construction is `const`, so a preset engine (including its lookup table) can
/// live in a `static` or associated constant. The engine is immutable and
/// `Sync`; any number of threads may compute with it concurrently.
///
/// # Example
///
/// ```
/// use crc16::{Crc16, Crc16Params};
///
/// const XMODEM: Crc16 = Crc16::new(Crc16Params::XMODEM);
///
/// assert_eq!(XMODEM.checksum(b"123456789"), 0x31C3);
/// assert_eq!(XMODEM.checksum(b""), 0x0000);
/// ```
#[derive(Clone, Debug)]
pub struct Crc16 {
  params: Crc16Params,
  kernel: ByteKernel,
  table: [u16; 256],
}

impl Crc16 {
  #[must_use]
  pub const fn new(params: Crc16Params) -> Self {
    Self {
      params,
      kernel: ByteKernel::for_params(&params),
      table: tables::build(&params),
    }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &Crc16Params {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> ByteKernel {
    self.kernel
  }

  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u16; 256] {
    &self.table
  }

  /// Compute the checksum of `data`.
  ///
  /// Loads `init`, processes every byte, and XORs `xor_out` exactly once, so an
  /// empty slice yields `init ^ xor_out`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u16 {
    self.update(self.params.init, data) ^ self.params.xor_out
  }

  /// Compute the checksum of `data` starting from an explicit register value.
  ///
  /// `checksum_with_init(update(init, a), b)` equals `checksum(a || b)`.
  #[inline]
  #[must_use]
  pub fn checksum_with_init(&self, init: u16, data: &[u8]) -> u16 {
    self.update(init, data) ^ self.params.xor_out
  }

  /// Bitwise-only checksum, usable in `const` context.
  #[must_use]
  pub const fn checksum_bitwise(&self, data: &[u8]) -> u16 {
    self.bitwise(self.params.init, data) ^ self.params.xor_out
  }

  /// Checksum through a narrow length counter, failing instead of truncating.
  ///
  /// # Errors
  ///
  /// Returns [`LengthError`] when `data.len()` is not representable in `L`.
  #[inline]
  pub fn checksum_counted<L: BufferLen>(&self, data: &[u8]) -> Result<u16, LengthError> {
    L::check(data.len())?;
    Ok(self.checksum(data))
  }

  /// Checksum through a narrow length counter, truncating like a narrowing cast.
  ///
  /// Only the first `data.len() mod 2^L::BITS` bytes are processed. A 300-byte
  /// buffer counted in `u8` covers 44 bytes. This reproduces counters on
  /// small targets and is never what a general-purpose caller wants; use
  /// [`checksum`](Self::checksum) or [`checksum_counted`](Self::checksum_counted)
  /// instead.
  #[inline]
  #[must_use]
  pub fn checksum_truncated<L: BufferLen>(&self, data: &[u8]) -> u16 {
    self.checksum(L::truncate(data))
  }

  /// Advance a raw register over `data` with the configured backend.
  #[inline]
  #[must_use]
  pub fn update(&self, crc: u16, data: &[u8]) -> u16 {
    self.update_with(config::get().effective_force, crc, data)
  }

  #[inline]
  fn update_with(&self, force: Crc16Force, crc: u16, data: &[u8]) -> u16 {
    match force {
      Crc16Force::Bitwise => self.bitwise(crc, data),
      Crc16Force::Auto | Crc16Force::Table => self.table_update(crc, data),
    }
  }

  /// Advance a raw register with the bitwise kernels.
  #[inline]
  #[must_use]
  pub const fn bitwise(&self, crc: u16, data: &[u8]) -> u16 {
    update_bitwise(self.kernel, self.params.poly, crc, data)
  }

  /// Advance a raw register with the lookup table.
  #[inline]
  #[must_use]
  pub fn table_update(&self, crc: u16, data: &[u8]) -> u16 {
    match self.kernel {
      ByteKernel::Forward => tables::update_forward(&self.table, crc, data),
      ByteKernel::Reflected => tables::update_reflected(&self.table, crc, data),
    }
  }

  /// `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)`.
  #[inline]
  #[must_use]
  pub fn combine(&self, crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
    combine::combine(&self.params, crc_a, crc_b, len_b)
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> Crc16Digest<'_> {
    self.digest_with_init(self.params.init)
  }

  /// Start a streaming computation from an explicit register value.
  #[inline]
  #[must_use]
  pub const fn digest_with_init(&self, init: u16) -> Crc16Digest<'_> {
    Crc16Digest {
      engine: self,
      state: init,
      initial: init,
    }
  }
}

/// Streaming state over a borrowed [`Crc16`].
#[derive(Clone, Debug)]
pub struct Crc16Digest<'a> {
  engine: &'a Crc16,
  state: u16,
  initial: u16,
}

impl Crc16Digest<'_> {
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = self.engine.update(self.state, data);
  }

  /// Checksum of everything fed so far. Idempotent.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u16 {
    self.state ^ self.engine.params.xor_out
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const CHECK_INPUT: &[u8] = b"123456789";

const _: () = assert!(Crc16::new(Crc16Params::XMODEM).checksum_bitwise(CHECK_INPUT) == 0x31C3);
const _: () = assert!(Crc16::new(Crc16Params::KERMIT).checksum_bitwise(CHECK_INPUT) == 0x2189);
const _: () = assert!(Crc16::new(Crc16Params::CCITT_FALSE).checksum_bitwise(CHECK_INPUT) == 0x29B1);
const _: () = assert!(Crc16::new(Crc16Params::USB).checksum_bitwise(CHECK_INPUT) == 0xB4C8);
