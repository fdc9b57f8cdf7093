//! CRC-16 preset hashers.
//!
//! Each type is the engine bound to one parameter tuple at compile time.
//!
//! # Example
//!
//! ```
//! use crc16::{Crc16CcittFalse, Crc16Kermit, Crc16Usb, Crc16Xmodem};
//!
//! assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3);
//! assert_eq!(Crc16Kermit::checksum(b"123456789"), 0x2189);
//! assert_eq!(Crc16CcittFalse::checksum(b"123456789"), 0x29B1);
//! assert_eq!(Crc16Usb::checksum(b"123456789"), 0xB4C8);
//! ```

use crate::params::Crc16Params;

define_crc16_type! {
  /// CRC-16/XMODEM: poly 0x1021, init 0x0000, xorout 0x0000, MSB-first.
  pub struct Crc16Xmodem {
    params: Crc16Params::XMODEM,
  }
}

define_crc16_type! {
  /// CRC-16/KERMIT: poly 0x8408 (reflected 0x1021), init 0x0000, xorout 0x0000, LSB-first.
  pub struct Crc16Kermit {
    params: Crc16Params::KERMIT,
  }
}

define_crc16_type! {
  /// CRC-16/CCITT-FALSE: poly 0x1021, init 0xFFFF, xorout 0x0000, MSB-first.
  pub struct Crc16CcittFalse {
    params: Crc16Params::CCITT_FALSE,
  }
}

define_crc16_type! {
  /// CRC-16/USB: poly 0xA001 (reflected 0x8005), init 0xFFFF, xorout 0xFFFF, LSB-first.
  pub struct Crc16Usb {
    params: Crc16Params::USB,
  }
}

define_crc16_type! {
  /// CRC-16/ARC: poly 0xA001 (reflected 0x8005), init 0x0000, xorout 0x0000, LSB-first.
  pub struct Crc16Arc {
    params: Crc16Params::ARC,
  }
}

define_crc16_type! {
  /// CRC-16/MODBUS: poly 0xA001 (reflected 0x8005), init 0xFFFF, xorout 0x0000, LSB-first.
  pub struct Crc16Modbus {
    params: Crc16Params::MODBUS,
  }
}

define_crc16_type! {
  /// CRC-16/IBM-SDLC (X-25): poly 0x8408 (reflected 0x1021), init 0xFFFF, xorout 0xFFFF, LSB-first.
  pub struct Crc16IbmSdlc {
    params: Crc16Params::IBM_SDLC,
  }
}

define_crc16_type! {
  /// CRC-16/GENIBUS: poly 0x1021, init 0xFFFF, xorout 0xFFFF, MSB-first.
  pub struct Crc16Genibus {
    params: Crc16Params::GENIBUS,
  }
}

define_crc16_type! {
  /// CRC-16/MCRF4XX: poly 0x8408 (reflected 0x1021), init 0xFFFF, xorout 0x0000, LSB-first.
  pub struct Crc16Mcrf4xx {
    params: Crc16Params::MCRF4XX,
  }
}
