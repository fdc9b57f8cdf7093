//! Prints the reflected polynomials and the four preset checksums of `"505"`.
//!
//! Run: `cargo run -p crc16 --example crc16-demo`

use crc16::{Crc16CcittFalse, Crc16Kermit, Crc16Usb, Crc16Xmodem, reflect16};

fn main() {
  let input = b"505";

  println!("Reflect16(0x1021) = {:04X}", reflect16(0x1021));
  println!("Reflect16(0x8005) = {:04X}", reflect16(0x8005));
  println!("CRC-16/XMODEM      = {:04X}", Crc16Xmodem::checksum(input));
  println!("CRC-16/KERMIT      = {:04X}", Crc16Kermit::checksum(input));
  println!("CRC-16/CCITT-FALSE = {:04X}", Crc16CcittFalse::checksum(input));
  println!("CRC-16/USB         = {:04X}", Crc16Usb::checksum(input));
}
