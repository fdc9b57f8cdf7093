//! CRC-16 runtime configuration (backend selection + overrides).
//!
//! Two interchangeable tiers compute every checksum:
//!
//! - **bitwise**: the table-free byte kernels, one bit at a time
//! - **table**: 256-entry lookup, one byte at a time
//!
//! Both produce identical results. `Auto` selects the table tier. With the
//! `std` feature the choice can be overridden through `CRC16_FORCE`, read once
//! per process.

/// Environment variable consulted for a forced backend.
pub const FORCE_ENV: &str = "CRC16_FORCE";

/// Forced backend selection for CRC-16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Crc16Force {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force the bitwise kernels (slow, obviously correct).
  Bitwise,
  /// Force the lookup-table tier.
  Table,
}

impl Crc16Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }

  /// Parse an override value. Case-insensitive, surrounding whitespace ignored.
  ///
  /// Returns `None` for empty or unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
      return Some(Self::Bitwise);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
      return Some(Self::Table);
    }

    None
  }
}

/// Full CRC-16 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc16Config {
  /// Requested force mode (env/default).
  pub requested_force: Crc16Force,
  /// Backend actually used. `Auto` is resolved to a concrete tier.
  pub effective_force: Crc16Force,
}

impl Crc16Config {
  /// Name of the selected backend.
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    match self.effective_force {
      Crc16Force::Bitwise => "portable/bitwise",
      Crc16Force::Auto | Crc16Force::Table => "portable/table",
    }
  }
}

#[cfg(feature = "std")]
fn read_env_force() -> Crc16Force {
  let Ok(value) = std::env::var(FORCE_ENV) else {
    return Crc16Force::Auto;
  };

  match Crc16Force::parse(&value) {
    Some(force) => force,
    None => {
      #[cfg(feature = "log")]
      log::debug!("ignoring unrecognized {FORCE_ENV}={value:?}");
      Crc16Force::Auto
    }
  }
}

#[inline]
#[must_use]
const fn resolve(requested: Crc16Force) -> Crc16Force {
  match requested {
    Crc16Force::Auto | Crc16Force::Table => Crc16Force::Table,
    Crc16Force::Bitwise => Crc16Force::Bitwise,
  }
}

#[cfg_attr(not(any(feature = "std", test)), allow(dead_code))]
#[must_use]
pub(crate) fn config(requested_force: Crc16Force) -> Crc16Config {
  let cfg = Crc16Config {
    requested_force,
    effective_force: resolve(requested_force),
  };

  #[cfg(feature = "log")]
  log::debug!(
    "crc16 backend: {} (requested {})",
    cfg.backend_name(),
    requested_force.as_str()
  );

  cfg
}

/// Cached process-wide CRC-16 configuration.
#[inline]
#[must_use]
pub fn get() -> Crc16Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Crc16Config> = OnceLock::new();
    *CACHED.get_or_init(|| config(read_env_force()))
  }

  #[cfg(not(feature = "std"))]
  {
    Crc16Config {
      requested_force: Crc16Force::Auto,
      effective_force: resolve(Crc16Force::Auto),
    }
  }
}
