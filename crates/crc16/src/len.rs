//! Buffer-length counter types.
//!
//! Slices carry a native `usize` length and the engine uses it as-is. Targets
//! that count bytes in a narrower integer can say so explicitly through
//! [`BufferLen`], choosing between a checked path
//! ([`Crc16::checksum_counted`](crate::Crc16::checksum_counted)) and the
//! truncating one ([`Crc16::checksum_truncated`](crate::Crc16::checksum_truncated)).

use crate::error::LengthError;

mod private {
  pub trait Sealed {}
}

/// An unsigned integer type used to count buffer bytes.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. Sealed.
pub trait BufferLen: private::Sealed + Copy {
  /// Width of the counter in bits.
  const BITS: u32;

  /// Longest buffer the counter can represent, saturated to `usize`.
  const MAX_LEN: usize;

  /// Reduce `len` the way a narrowing cast would (`len mod 2^BITS`).
  #[must_use]
  fn narrow(len: usize) -> usize;

  /// Fail if `len` does not fit the counter.
  ///
  /// # Errors
  ///
  /// Returns [`LengthError`] when `len > MAX_LEN`.
  #[inline]
  fn check(len: usize) -> Result<(), LengthError> {
    if len > Self::MAX_LEN {
      return Err(LengthError::new(len, Self::MAX_LEN));
    }
    Ok(())
  }

  /// The prefix of `data` a narrowed counter would actually cover.
  #[inline]
  #[must_use]
  fn truncate(data: &[u8]) -> &[u8] {
    data.get(..Self::narrow(data.len())).unwrap_or(data)
  }
}

macro_rules! impl_buffer_len {
  ($($ty:ty),* $(,)?) => {
    $(
      impl private::Sealed for $ty {}

      impl BufferLen for $ty {
        const BITS: u32 = <$ty>::BITS;
        const MAX_LEN: usize = match 1usize.checked_shl(<$ty>::BITS) {
          Some(limit) => limit - 1,
          None => usize::MAX,
        };

        #[inline]
        #[allow(clippy::cast_possible_truncation)]
        fn narrow(len: usize) -> usize {
          len as $ty as usize
        }
      }
    )*
  };
}

impl_buffer_len!(u8, u16, u32, u64, usize);
