//! Bit reflection.
//!
//! Reflected CRCs consume input LSB-first and expect a bit-reversed polynomial.
//! These helpers derive that constant where a variant is *defined*:
//!
//! ```
//! use crc16::reflect::reflect16;
//!
//! // CRC-16/KERMIT uses the CCITT polynomial, reversed.
//! const KERMIT_POLY: u16 = reflect16(0x1021);
//! assert_eq!(KERMIT_POLY, 0x8408);
//! ```
//!
//! They are never called from the per-byte loops.

macro_rules! define_reflect {
  ($(#[$outer:meta])* $name:ident, $ty:ty) => {
    $(#[$outer])*
    ///
    /// Bit 0 of the input becomes bit `bits - 1` of the output and vice versa.
    /// Input bits at positions `>= bits` are ignored. Runs exactly `bits`
    /// iterations.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is zero or wider than the integer type. In a `const`
    /// context this is a compile error.
    #[inline]
    #[must_use]
    pub const fn $name(val: $ty, bits: u32) -> $ty {
      assert!(bits >= 1 && bits <= <$ty>::BITS, "reflect width out of range");

      let mut res: $ty = 0;
      let mut check_mask: $ty = 1 << (bits - 1);
      let mut set_mask: $ty = 1;

      while check_mask != 0 {
        if val & check_mask != 0 {
          res |= set_mask;
        }
        check_mask >>= 1;
        set_mask = set_mask.wrapping_shl(1);
      }

      res
    }
  };
}

define_reflect!(
  /// Reverse the low `bits` bits of an 8-bit value.
  reflect_u8,
  u8
);
define_reflect!(
  /// Reverse the low `bits` bits of a 16-bit value.
  reflect_u16,
  u16
);
define_reflect!(
  /// Reverse the low `bits` bits of a 32-bit value.
  reflect_u32,
  u32
);
define_reflect!(
  /// Reverse the low `bits` bits of a 64-bit value.
  reflect_u64,
  u64
);

/// Reverse all 16 bits of `val`.
#[inline]
#[must_use]
pub const fn reflect16(val: u16) -> u16 {
  reflect_u16(val, 16)
}

/// Reverse all 8 bits of `val`.
#[inline]
#[must_use]
pub const fn reflect8(val: u8) -> u8 {
  reflect_u8(val, 8)
}
