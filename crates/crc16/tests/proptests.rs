//! Property-based tests for the CRC-16 engine.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation and
//! the `crc` crate as an independent oracle.

use crc::{
  CRC_16_ARC, CRC_16_GENIBUS, CRC_16_IBM_3740, CRC_16_IBM_SDLC, CRC_16_KERMIT, CRC_16_MCRF4XX, CRC_16_MODBUS,
  CRC_16_USB, CRC_16_XMODEM,
};
use crc16::{
  Checksum, Crc16, Crc16Arc, Crc16CcittFalse, Crc16Genibus, Crc16IbmSdlc, Crc16Kermit, Crc16Mcrf4xx, Crc16Modbus,
  Crc16Params, Crc16Usb, Crc16Xmodem, reflect16, reflect8,
};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

/// Generate an arbitrary parameter tuple.
fn arb_params() -> impl Strategy<Value = Crc16Params> {
  (any::<u16>(), any::<u16>(), any::<u16>(), any::<bool>())
    .prop_map(|(poly, init, xor_out, reflect)| Crc16Params::new(poly, init, xor_out, reflect))
}

// Generic Property Tests

/// Test that incremental updates produce the same result as one-shot.
fn prop_incremental_equals_oneshot<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let oneshot = C::checksum(data);

  let mut incremental = C::new();
  incremental.update(a);
  incremental.update(b);

  incremental.finalize() == oneshot
}

/// Test that multiple incremental updates produce the same result.
fn prop_multi_incremental<C: Checksum>(data: &[u8], splits: &[usize]) -> bool {
  let oneshot = C::checksum(data);

  let mut hasher = C::new();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    hasher.update(&data[prev..]);
  }

  hasher.finalize() == oneshot
}

/// Test that reset returns hasher to initial state.
fn prop_reset_works<C: Checksum>(data: &[u8]) -> bool {
  let mut hasher = C::new();
  hasher.update(data);
  hasher.reset();
  hasher.update(data);

  hasher.finalize() == C::checksum(data)
}

// Oracle Cross-Checks

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn presets_match_crc_crate(data in arb_data()) {
    prop_assert_eq!(Crc16Xmodem::checksum(&data), crc::Crc::<u16>::new(&CRC_16_XMODEM).checksum(&data));
    prop_assert_eq!(Crc16Kermit::checksum(&data), crc::Crc::<u16>::new(&CRC_16_KERMIT).checksum(&data));
    prop_assert_eq!(Crc16CcittFalse::checksum(&data), crc::Crc::<u16>::new(&CRC_16_IBM_3740).checksum(&data));
    prop_assert_eq!(Crc16Usb::checksum(&data), crc::Crc::<u16>::new(&CRC_16_USB).checksum(&data));
  }

  #[test]
  fn extra_presets_match_crc_crate(data in arb_data()) {
    prop_assert_eq!(Crc16Arc::checksum(&data), crc::Crc::<u16>::new(&CRC_16_ARC).checksum(&data));
    prop_assert_eq!(Crc16Modbus::checksum(&data), crc::Crc::<u16>::new(&CRC_16_MODBUS).checksum(&data));
    prop_assert_eq!(Crc16IbmSdlc::checksum(&data), crc::Crc::<u16>::new(&CRC_16_IBM_SDLC).checksum(&data));
    prop_assert_eq!(Crc16Genibus::checksum(&data), crc::Crc::<u16>::new(&CRC_16_GENIBUS).checksum(&data));
    prop_assert_eq!(Crc16Mcrf4xx::checksum(&data), crc::Crc::<u16>::new(&CRC_16_MCRF4XX).checksum(&data));
  }
}

// XMODEM / KERMIT Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn xmodem_incremental_equals_oneshot(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_incremental_equals_oneshot::<Crc16Xmodem>(&data, split));
  }

  #[test]
  fn xmodem_multi_incremental(data in arb_data(), splits in arb_splits(8192, 5)) {
    prop_assert!(prop_multi_incremental::<Crc16Xmodem>(&data, &splits));
  }

  #[test]
  fn kermit_incremental_equals_oneshot(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_incremental_equals_oneshot::<Crc16Kermit>(&data, split));
  }

  #[test]
  fn kermit_reset(data in arb_data()) {
    prop_assert!(prop_reset_works::<Crc16Kermit>(&data));
  }
}

// CCITT-FALSE / USB Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn ccitt_false_multi_incremental(data in arb_data(), splits in arb_splits(8192, 5)) {
    prop_assert!(prop_multi_incremental::<Crc16CcittFalse>(&data, &splits));
  }

  #[test]
  fn usb_incremental_equals_oneshot(data in arb_data(), split in 0..8192usize) {
    prop_assert!(prop_incremental_equals_oneshot::<Crc16Usb>(&data, split));
  }

  #[test]
  fn usb_reset(data in arb_data()) {
    prop_assert!(prop_reset_works::<Crc16Usb>(&data));
  }

  #[test]
  fn usb_resume_correctness(
    data in arb_data(),
    split in 0..8192usize
  ) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let mut resumed = Crc16Usb::resume(Crc16Usb::checksum(a));
    resumed.update(b);

    prop_assert_eq!(resumed.finalize(), Crc16Usb::checksum(&data));
  }

  #[test]
  fn ccitt_false_combine_associative(
    data in arb_data(),
    split1 in 0..4096usize,
    split2 in 0..4096usize
  ) {
    let split1 = split1.min(data.len());
    let split2 = (split1 + split2).min(data.len());

    let a = &data[..split1];
    let b = &data[split1..split2];
    let c = &data[split2..];

    // (crc_a || crc_b) || crc_c
    let ab = Crc16CcittFalse::combine(Crc16CcittFalse::checksum(a), Crc16CcittFalse::checksum(b), b.len());
    let abc = Crc16CcittFalse::combine(ab, Crc16CcittFalse::checksum(c), c.len());

    prop_assert_eq!(abc, Crc16CcittFalse::checksum(&data));
  }
}

// Runtime Parameter Property Tests

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn arbitrary_params_tiers_agree(params in arb_params(), data in prop::collection::vec(any::<u8>(), 0..1024)) {
    let engine = Crc16::new(params);
    prop_assert_eq!(engine.bitwise(params.init, &data), engine.table_update(params.init, &data));
    prop_assert_eq!(engine.checksum_bitwise(&data), engine.checksum(&data));
  }

  #[test]
  fn arbitrary_params_chaining(
    params in arb_params(),
    data in prop::collection::vec(any::<u8>(), 0..1024),
    split in 0..1024usize
  ) {
    let engine = Crc16::new(params);
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let register = engine.update(params.init, a);
    prop_assert_eq!(engine.checksum_with_init(register, b), engine.checksum(&data));
  }

  #[test]
  fn arbitrary_params_combine(
    params in arb_params(),
    data in prop::collection::vec(any::<u8>(), 0..1024),
    split in 0..1024usize
  ) {
    let engine = Crc16::new(params);
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    prop_assert_eq!(engine.combine(engine.checksum(a), engine.checksum(b), b.len()), engine.checksum(&data));
  }

  #[test]
  fn arbitrary_params_digest(params in arb_params(), data in arb_data(), splits in arb_splits(8192, 4)) {
    let engine = Crc16::new(params);
    let mut digest = engine.digest();
    let mut prev = 0;
    for &split in &splits {
      let split = split.min(data.len());
      if split > prev {
        digest.update(&data[prev..split]);
        prev = split;
      }
    }
    digest.update(&data[prev..]);
    prop_assert_eq!(digest.finalize(), engine.checksum(&data));
  }
}

// Reflector Property Tests

proptest! {
  #[test]
  fn reflect16_is_an_involution(value in any::<u16>()) {
    prop_assert_eq!(reflect16(reflect16(value)), value);
  }

  #[test]
  fn reflect8_is_an_involution(value in any::<u8>()) {
    prop_assert_eq!(reflect8(reflect8(value)), value);
  }

  #[test]
  fn reflect16_matches_reverse_bits(value in any::<u16>()) {
    prop_assert_eq!(reflect16(value), value.reverse_bits());
  }

  #[test]
  fn reflect_narrow_width_clears_high_bits(value in any::<u64>(), bits in 1u32..=64) {
    let mask = u64::MAX >> (64 - bits);
    let reflected = crc16::reflect::reflect_u64(value, bits);
    prop_assert_eq!(reflected & !mask, 0);
    prop_assert_eq!(crc16::reflect::reflect_u64(reflected, bits), value & mask);
  }
}
