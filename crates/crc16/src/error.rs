//! Error types.
//!
//! The engine itself is infallible; the only reported failure is a buffer that
//! does not fit a caller-chosen length counter.

use core::fmt;

/// A buffer is longer than the selected length counter can represent.
///
/// Returned by [`Crc16::checksum_counted`](crate::Crc16::checksum_counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LengthError {
  len: usize,
  max: usize,
}

impl LengthError {
  #[inline]
  #[must_use]
  pub const fn new(len: usize, max: usize) -> Self {
    Self { len, max }
  }

  /// Length of the rejected buffer.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> usize {
    self.len
  }

  /// Largest length the counter accepts.
  #[inline]
  #[must_use]
  pub const fn max_length(&self) -> usize {
    self.max
  }
}

impl fmt::Display for LengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "buffer length {} exceeds length counter maximum {}",
      self.len, self.max
    )
  }
}

impl core::error::Error for LengthError {}
