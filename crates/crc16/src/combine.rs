//! CRC-16 combination over GF(2).
//!
//! When you have `crc(A)` and `crc(B)`, you can compute `crc(A || B)` without
//! reprocessing `A`. Appending `n` bytes to a message advances the register by
//! the linear map "feed `n` zero bytes", which is a 16x16 matrix over GF(2).
//! Square-and-multiply raises the one-byte matrix to the `n`th power in
//! O(log n) steps.
//!
//! With a non-zero initial value or output mask the CRC is affine, not linear,
//! so the first checksum is corrected before shifting:
//!
//! ```text
//! crc(A || B) = M^len(B) * (crc(A) ^ xor_out ^ init) ^ crc(B)
//! ```

// SAFETY: all indexing uses loop indices bounded by the fixed matrix size.
#![allow(clippy::indexing_slicing)]

use crate::params::Crc16Params;

/// A 16x16 GF(2) matrix stored as 16 columns.
///
/// Column `i` is the image of the register with only bit `i` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix16([u16; 16]);

impl Gf2Matrix16 {
  /// Create the identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u16; 16];
    let mut i = 0;
    while i < 16 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Multiply the matrix by a register value.
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u16) -> u16 {
    let mut result = 0u16;
    let mut i = 0;
    while i < 16 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (self * other).
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u16; 16];
    let mut i = 0;
    while i < 16 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Matrix advancing a register by one zero bit.
#[must_use]
pub const fn shift1_matrix(params: &Crc16Params) -> Gf2Matrix16 {
  let mut m = [0u16; 16];
  let mut j = 0;

  if params.reflect {
    // Bit 0 falls off the bottom and feeds the polynomial back in.
    m[0] = params.poly;
    j = 1;
    while j < 16 {
      m[j] = 1 << (j - 1);
      j += 1;
    }
  } else {
    // Bit 15 falls off the top and feeds the polynomial back in.
    while j < 15 {
      m[j] = 1 << (j + 1);
      j += 1;
    }
    m[15] = params.poly;
  }

  Gf2Matrix16(m)
}

/// Matrix advancing a register by one zero byte.
#[must_use]
pub const fn shift8_matrix(params: &Crc16Params) -> Gf2Matrix16 {
  shift1_matrix(params).square().square().square()
}

/// Combine two finalized CRC-16 values.
///
/// Given `crc_a = crc(A)` and `crc_b = crc(B)` under `params`, computes
/// `crc(A || B)` in O(log len_b).
#[must_use]
pub const fn combine(params: &Crc16Params, crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
  if len_b == 0 {
    return crc_a;
  }

  let mut op = shift8_matrix(params);
  let mut crc = crc_a ^ params.xor_out ^ params.init;
  let mut remaining = len_b;

  while remaining != 0 {
    if remaining & 1 != 0 {
      crc = op.mul_vec(crc);
    }
    remaining >>= 1;
    if remaining == 0 {
      break;
    }
    op = op.square();
  }

  crc ^ crc_b
}
