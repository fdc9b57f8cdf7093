//! Byte-at-a-time lookup tables.
//!
//! Each entry is the bitwise kernel applied to a single byte from a zero
//! register, so the table tier agrees with the bitwise tier by construction.
//!
//! Total size: 256 * 2 = 512B per configuration.

// SAFETY: every lookup indexes a 256-entry table with a `u8`.
#![allow(clippy::indexing_slicing)]

use crate::{engine::ByteKernel, params::Crc16Params};

/// Build the lookup table for `params`.
#[must_use]
pub const fn build(params: &Crc16Params) -> [u16; 256] {
  let kernel = ByteKernel::for_params(params);
  let mut table = [0u16; 256];
  let mut i = 0usize;

  while i < 256 {
    table[i] = kernel.apply(0, i as u8, params.poly);
    i += 1;
  }

  table
}

/// Advance a forward (MSB-first) register over `data`.
#[inline]
#[must_use]
pub fn update_forward(table: &[u16; 256], crc: u16, data: &[u8]) -> u16 {
  let mut crc = crc;
  for &byte in data {
    let idx = (crc >> 8) as u8 ^ byte;
    crc = (crc << 8) ^ table[usize::from(idx)];
  }
  crc
}

/// Advance a reflected (LSB-first) register over `data`.
#[inline]
#[must_use]
pub fn update_reflected(table: &[u16; 256], crc: u16, data: &[u8]) -> u16 {
  let mut crc = crc;
  for &byte in data {
    let idx = crc as u8 ^ byte;
    crc = (crc >> 8) ^ table[usize::from(idx)];
  }
  crc
}
