//! Differential fuzzing against the `crc` crate.
//!
//! Compares every preset against an independent, well-established
//! implementation to catch any discrepancies.

#![no_main]

use crc::{
  CRC_16_ARC, CRC_16_GENIBUS, CRC_16_IBM_3740, CRC_16_IBM_SDLC, CRC_16_KERMIT, CRC_16_MCRF4XX, CRC_16_MODBUS,
  CRC_16_USB, CRC_16_XMODEM, Crc,
};
use crc16::{
  Crc16Arc, Crc16CcittFalse, Crc16Genibus, Crc16IbmSdlc, Crc16Kermit, Crc16Mcrf4xx, Crc16Modbus, Crc16Usb,
  Crc16Xmodem,
};
use libfuzzer_sys::fuzz_target;

const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);
const KERMIT: Crc<u16> = Crc::<u16>::new(&CRC_16_KERMIT);
const CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);
const USB: Crc<u16> = Crc::<u16>::new(&CRC_16_USB);
const ARC: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);
const MODBUS: Crc<u16> = Crc::<u16>::new(&CRC_16_MODBUS);
const IBM_SDLC: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);
const GENIBUS: Crc<u16> = Crc::<u16>::new(&CRC_16_GENIBUS);
const MCRF4XX: Crc<u16> = Crc::<u16>::new(&CRC_16_MCRF4XX);

fuzz_target!(|data: &[u8]| {
  differential("xmodem", Crc16Xmodem::checksum(data), &XMODEM, data);
  differential("kermit", Crc16Kermit::checksum(data), &KERMIT, data);
  differential("ccitt-false", Crc16CcittFalse::checksum(data), &CCITT_FALSE, data);
  differential("usb", Crc16Usb::checksum(data), &USB, data);
  differential("arc", Crc16Arc::checksum(data), &ARC, data);
  differential("modbus", Crc16Modbus::checksum(data), &MODBUS, data);
  differential("ibm-sdlc", Crc16IbmSdlc::checksum(data), &IBM_SDLC, data);
  differential("genibus", Crc16Genibus::checksum(data), &GENIBUS, data);
  differential("mcrf4xx", Crc16Mcrf4xx::checksum(data), &MCRF4XX, data);
});

fn differential(name: &str, ours: u16, reference: &Crc<u16>, data: &[u8]) {
  let reference = reference.checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc16/{name} differential mismatch: ours={ours:#06x}, reference={reference:#06x}, len={}",
    data.len()
  );
}
