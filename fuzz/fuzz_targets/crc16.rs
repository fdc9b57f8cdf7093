//! Fuzz target for the CRC-16 presets and runtime engine.
//!
//! Tests that:
//! - No panics on arbitrary input or parameters
//! - Incremental updates produce same result as one-shot
//! - Resume and combine produce correct results
//! - Bitwise and table tiers agree

#![no_main]

use arbitrary::Arbitrary;
use crc16::{Checksum, ChecksumCombine, Crc16, Crc16CcittFalse, Crc16Kermit, Crc16Params, Crc16Usb, Crc16Xmodem};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  poly: u16,
  init: u16,
  xor_out: u16,
  reflect: bool,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  check_preset::<Crc16Xmodem>("xmodem", data, split);
  check_preset::<Crc16Kermit>("kermit", data, split);
  check_preset::<Crc16CcittFalse>("ccitt-false", data, split);
  check_preset::<Crc16Usb>("usb", data, split);

  let params = Crc16Params::new(input.poly, input.init, input.xor_out, input.reflect);
  check_runtime(&params, data, split);
});

fn check_preset<C: Checksum<Output = u16> + ChecksumCombine>(name: &str, data: &[u8], split: usize) {
  let oneshot = C::checksum(data);

  let (a, b) = data.split_at(split);
  let mut hasher = C::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(oneshot, hasher.finalize(), "crc16/{name} incremental mismatch");

  let crc_a = C::checksum(a);
  let mut resumed = C::with_initial(crc_a);
  resumed.update(b);
  assert_eq!(oneshot, resumed.finalize(), "crc16/{name} resume mismatch");

  let combined = C::combine(crc_a, C::checksum(b), b.len());
  assert_eq!(oneshot, combined, "crc16/{name} combine mismatch");
}

fn check_runtime(params: &Crc16Params, data: &[u8], split: usize) {
  let engine = Crc16::new(*params);
  let oneshot = engine.checksum(data);

  assert_eq!(oneshot, engine.checksum_bitwise(data), "crc16 tier mismatch for {params:?}");

  let (a, b) = data.split_at(split);
  let register = engine.update(params.init, a);
  assert_eq!(oneshot, engine.checksum_with_init(register, b), "crc16 chaining mismatch for {params:?}");

  let combined = engine.combine(engine.checksum(a), engine.checksum(b), b.len());
  assert_eq!(oneshot, combined, "crc16 combine mismatch for {params:?}");
}
