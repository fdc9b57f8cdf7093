//! Internal macros for CRC-16 preset generation.
//!
//! Every preset hasher has identical structure and differs only in its
//! parameter tuple.

/// Generate a CRC-16 preset type with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state` and `initial` registers
/// - `PARAMS`, `engine()`, `new()`, `resume()`, `checksum()`, `checksum_counted()`,
///   `checksum_truncated()`, `update()`, `finalize()`, `reset()`, `combine()`,
///   `config()`, `backend_name()`
/// - `Default`, `Checksum`, `ChecksumCombine` and (with `std`) `io::Write`
///
/// The engine, including its lookup table, is a `static` built at compile time.
macro_rules! define_crc16_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      params: $params:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      /// Current raw register.
      state: u16,
      /// Register to return to on reset.
      initial: u16,
    }

    impl $name {
      /// Parameter tuple of this preset.
      pub const PARAMS: $crate::Crc16Params = $params;

      /// The compile-time engine for this preset.
      #[inline]
      #[must_use]
      pub fn engine() -> &'static $crate::Crc16 {
        static ENGINE: $crate::Crc16 = $crate::Crc16::new($name::PARAMS);
        &ENGINE
      }

      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self {
          state: Self::PARAMS.init,
          initial: Self::PARAMS.init,
        }
      }

      /// Create a hasher that will resume from a previous checksum.
      #[inline]
      #[must_use]
      pub const fn resume(crc: u16) -> Self {
        let state = crc ^ Self::PARAMS.xor_out;
        Self { state, initial: state }
      }

      /// Compute the checksum of `data` in one shot.
      #[inline]
      #[must_use]
      pub fn checksum(data: &[u8]) -> u16 {
        Self::engine().checksum(data)
      }

      /// One-shot checksum that rejects buffers longer than `L` can count.
      ///
      /// # Errors
      ///
      /// Returns [`LengthError`](crate::LengthError) when `data.len()` does
      /// not fit `L`.
      #[inline]
      pub fn checksum_counted<L: $crate::BufferLen>(data: &[u8]) -> Result<u16, $crate::LengthError> {
        Self::engine().checksum_counted::<L>(data)
      }

      /// One-shot checksum over the prefix a narrow `L` counter would cover.
      #[inline]
      #[must_use]
      pub fn checksum_truncated<L: $crate::BufferLen>(data: &[u8]) -> u16 {
        Self::engine().checksum_truncated::<L>(data)
      }

      #[inline]
      pub fn update(&mut self, data: &[u8]) {
        self.state = Self::engine().update(self.state, data);
      }

      #[inline]
      #[must_use]
      pub const fn finalize(&self) -> u16 {
        self.state ^ Self::PARAMS.xor_out
      }

      #[inline]
      pub fn reset(&mut self) {
        self.state = self.initial;
      }

      /// Combine two checksums: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
      #[inline]
      #[must_use]
      pub const fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
        $crate::combine::combine(&Self::PARAMS, crc_a, crc_b, len_b)
      }

      /// Get the effective CRC-16 configuration.
      #[must_use]
      pub fn config() -> $crate::Crc16Config {
        $crate::config::get()
      }

      /// Name of the backend used by [`update`](Self::update).
      #[must_use]
      pub fn backend_name() -> &'static str {
        Self::config().backend_name()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = 2;
      type Output = u16;

      #[inline]
      fn new() -> Self {
        $name::new()
      }

      #[inline]
      fn with_initial(initial: u16) -> Self {
        $name::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        $name::update(self, data);
      }

      #[inline]
      fn finalize(&self) -> u16 {
        $name::finalize(self)
      }

      #[inline]
      fn reset(&mut self) {
        $name::reset(self);
      }

      #[inline]
      fn checksum(data: &[u8]) -> u16 {
        $name::checksum(data)
      }
    }

    impl $crate::ChecksumCombine for $name {
      #[inline]
      fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
        $name::combine(crc_a, crc_b, len_b)
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}
