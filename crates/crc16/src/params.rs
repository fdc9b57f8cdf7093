//! CRC-16 parameter sets.
//!
//! A configuration is the tuple `(poly, init, xor_out, reflect)`. Reflected
//! presets spell their polynomial through [`reflect16`] so the relationship to
//! the catalog's normal-form polynomial stays visible.
//!
//! | Preset | Poly | Init | XorOut | Reflect | Check |
//! |--------|------|------|--------|---------|-------|
//! | [`XMODEM`](Crc16Params::XMODEM) | 0x1021 | 0x0000 | 0x0000 | no | 0x31C3 |
//! | [`KERMIT`](Crc16Params::KERMIT) | 0x8408 | 0x0000 | 0x0000 | yes | 0x2189 |
//! | [`CCITT_FALSE`](Crc16Params::CCITT_FALSE) | 0x1021 | 0xFFFF | 0x0000 | no | 0x29B1 |
//! | [`USB`](Crc16Params::USB) | 0xA001 | 0xFFFF | 0xFFFF | yes | 0xB4C8 |
//! | [`ARC`](Crc16Params::ARC) | 0xA001 | 0x0000 | 0x0000 | yes | 0xBB3D |
//! | [`MODBUS`](Crc16Params::MODBUS) | 0xA001 | 0xFFFF | 0x0000 | yes | 0x4B37 |
//! | [`IBM_SDLC`](Crc16Params::IBM_SDLC) | 0x8408 | 0xFFFF | 0xFFFF | yes | 0x906E |
//! | [`GENIBUS`](Crc16Params::GENIBUS) | 0x1021 | 0xFFFF | 0xFFFF | no | 0xD64E |
//! | [`MCRF4XX`](Crc16Params::MCRF4XX) | 0x8408 | 0xFFFF | 0x0000 | yes | 0x6F91 |
//!
//! "Check" is the checksum of the ASCII string `123456789`.

use crate::reflect::reflect16;

/// Normal-form CCITT polynomial (x^16 + x^12 + x^5 + 1).
const CCITT_POLY: u16 = 0x1021;
/// Normal-form IBM polynomial (x^16 + x^15 + x^2 + 1).
const IBM_POLY: u16 = 0x8005;

/// An immutable CRC-16 configuration.
///
/// For reflected configurations `poly` must already be in reflected form; the
/// engine never reverses it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc16Params {
  /// Generator polynomial, as consumed by the selected kernel.
  pub poly: u16,
  /// Register value before the first byte.
  pub init: u16,
  /// Mask XORed into the register once, after the last byte.
  pub xor_out: u16,
  /// Process bits LSB-first (reflected) instead of MSB-first.
  pub reflect: bool,
}

impl Crc16Params {
  /// CRC-16/XMODEM (also ZMODEM, ACORN, LTE).
  pub const XMODEM: Self = Self::new(CCITT_POLY, 0x0000, 0x0000, false);
  /// CRC-16/KERMIT (also CCITT-TRUE, V-41-LSB).
  pub const KERMIT: Self = Self::new(reflect16(CCITT_POLY), 0x0000, 0x0000, true);
  /// CRC-16/CCITT-FALSE (catalog name CRC-16/IBM-3740, also AUTOSAR).
  pub const CCITT_FALSE: Self = Self::new(CCITT_POLY, 0xFFFF, 0x0000, false);
  /// CRC-16/USB.
  pub const USB: Self = Self::new(reflect16(IBM_POLY), 0xFFFF, 0xFFFF, true);
  /// CRC-16/ARC (also IBM, LHA).
  pub const ARC: Self = Self::new(reflect16(IBM_POLY), 0x0000, 0x0000, true);
  /// CRC-16/MODBUS.
  pub const MODBUS: Self = Self::new(reflect16(IBM_POLY), 0xFFFF, 0x0000, true);
  /// CRC-16/IBM-SDLC (also X-25, ISO-HDLC).
  pub const IBM_SDLC: Self = Self::new(reflect16(CCITT_POLY), 0xFFFF, 0xFFFF, true);
  /// CRC-16/GENIBUS (also DARC, EPC, I-CODE).
  pub const GENIBUS: Self = Self::new(CCITT_POLY, 0xFFFF, 0xFFFF, false);
  /// CRC-16/MCRF4XX.
  pub const MCRF4XX: Self = Self::new(reflect16(CCITT_POLY), 0xFFFF, 0x0000, true);

  /// Every built-in preset with its display name.
  pub const PRESETS: [(&'static str, Self); 9] = [
    ("XMODEM", Self::XMODEM),
    ("KERMIT", Self::KERMIT),
    ("CCITT-FALSE", Self::CCITT_FALSE),
    ("USB", Self::USB),
    ("ARC", Self::ARC),
    ("MODBUS", Self::MODBUS),
    ("IBM-SDLC", Self::IBM_SDLC),
    ("GENIBUS", Self::GENIBUS),
    ("MCRF4XX", Self::MCRF4XX),
  ];

  #[inline]
  #[must_use]
  pub const fn new(poly: u16, init: u16, xor_out: u16, reflect: bool) -> Self {
    Self {
      poly,
      init,
      xor_out,
      reflect,
    }
  }

  /// Checksum of the empty input: `init ^ xor_out`.
  #[inline]
  #[must_use]
  pub const fn empty_checksum(&self) -> u16 {
    self.init ^ self.xor_out
  }
}
