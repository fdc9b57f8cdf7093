use crc16::{
  Checksum, ChecksumCombine, Crc16, Crc16Arc, Crc16CcittFalse, Crc16Genibus, Crc16IbmSdlc, Crc16Kermit, Crc16Mcrf4xx,
  Crc16Modbus, Crc16Params, Crc16Usb, Crc16Xmodem,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Textbook LSB-first CRC-16 with a reflected polynomial.
fn crc16_reflected_bitwise(poly_reflected: u16, init: u16, xor_out: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  for &b in data {
    crc ^= u16::from(b);
    for _ in 0..8 {
      let mask = 0u16.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & mask);
    }
  }
  crc ^ xor_out
}

/// Textbook MSB-first CRC-16.
fn crc16_normal_bitwise(poly: u16, init: u16, xor_out: u16, data: &[u8]) -> u16 {
  let mut crc = init;
  for &b in data {
    crc ^= u16::from(b) << 8;
    for _ in 0..8 {
      if (crc & 0x8000) != 0 {
        crc = (crc << 1) ^ poly;
      } else {
        crc <<= 1;
      }
    }
  }
  crc ^ xor_out
}

fn reference(params: &Crc16Params, data: &[u8]) -> u16 {
  if params.reflect {
    crc16_reflected_bitwise(params.poly, params.init, params.xor_out, data)
  } else {
    crc16_normal_bitwise(params.poly, params.init, params.xor_out, data)
  }
}

const LENGTHS: [usize; 17] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

fn check_preset<C: Checksum<Output = u16> + ChecksumCombine>(name: &str, params: &Crc16Params) {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let oneshot = C::checksum(&data);
      assert_eq!(oneshot, reference(params, &data), "{name} reference mismatch at len={len}");

      for &split in &[0usize, 1, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut h = C::new();
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "{name} streaming mismatch at len={len} split={split}");

        let mut resumed = C::with_initial(C::checksum(a));
        resumed.update(b);
        assert_eq!(resumed.finalize(), oneshot, "{name} resume mismatch at len={len} split={split}");

        let combined = C::combine(C::checksum(a), C::checksum(b), b.len());
        assert_eq!(combined, oneshot, "{name} combine mismatch at len={len} split={split}");
      }
    }
  }
}

#[test]
fn crc16_xmodem_invariants() {
  check_preset::<Crc16Xmodem>("xmodem", &Crc16Params::XMODEM);
}

#[test]
fn crc16_kermit_invariants() {
  check_preset::<Crc16Kermit>("kermit", &Crc16Params::KERMIT);
}

#[test]
fn crc16_ccitt_false_invariants() {
  check_preset::<Crc16CcittFalse>("ccitt-false", &Crc16Params::CCITT_FALSE);
}

#[test]
fn crc16_usb_invariants() {
  check_preset::<Crc16Usb>("usb", &Crc16Params::USB);
}

#[test]
fn crc16_extra_preset_invariants() {
  check_preset::<Crc16Arc>("arc", &Crc16Params::ARC);
  check_preset::<Crc16Modbus>("modbus", &Crc16Params::MODBUS);
  check_preset::<Crc16IbmSdlc>("ibm-sdlc", &Crc16Params::IBM_SDLC);
  check_preset::<Crc16Genibus>("genibus", &Crc16Params::GENIBUS);
  check_preset::<Crc16Mcrf4xx>("mcrf4xx", &Crc16Params::MCRF4XX);
}

#[test]
fn bitwise_and_table_tiers_agree() {
  for (name, params) in Crc16Params::PRESETS {
    let engine = Crc16::new(params);
    for &len in &LENGTHS {
      let data = gen_bytes(len, 0x9e37_79b9_7f4a_7c15 ^ len as u64);
      for init in [0x0000u16, 0xFFFF, 0x1D0F, params.init] {
        assert_eq!(
          engine.bitwise(init, &data),
          engine.table_update(init, &data),
          "{name} tiers disagree at len={len} init={init:#06X}"
        );
      }
    }
  }
}

#[test]
fn runtime_engine_matches_preset_types() {
  let data = gen_bytes(777, 42);
  assert_eq!(Crc16::new(Crc16Params::XMODEM).checksum(&data), Crc16Xmodem::checksum(&data));
  assert_eq!(Crc16::new(Crc16Params::KERMIT).checksum(&data), Crc16Kermit::checksum(&data));
  assert_eq!(
    Crc16::new(Crc16Params::CCITT_FALSE).checksum(&data),
    Crc16CcittFalse::checksum(&data)
  );
  assert_eq!(Crc16::new(Crc16Params::USB).checksum(&data), Crc16Usb::checksum(&data));
}

#[test]
fn chaining_via_raw_register() {
  let data = gen_bytes(512, 7);
  for (name, params) in Crc16Params::PRESETS {
    let engine = Crc16::new(params);
    let (a, b) = data.split_at(200);
    let register = engine.update(params.init, a);
    assert_eq!(
      engine.checksum_with_init(register, b),
      engine.checksum(&data),
      "{name} chaining mismatch"
    );
  }
}

#[test]
fn byte_at_a_time_matches_oneshot() {
  let data = gen_bytes(300, 3);
  let mut h = Crc16Usb::new();
  for byte in &data {
    h.update(core::slice::from_ref(byte));
  }
  assert_eq!(h.finalize(), Crc16Usb::checksum(&data));
}

#[test]
fn concurrent_checksums_agree() {
  let data = gen_bytes(4096, 11);
  let expected = Crc16CcittFalse::checksum(&data);

  std::thread::scope(|s| {
    let handles: Vec<_> = (0..8).map(|_| s.spawn(|| Crc16CcittFalse::checksum(&data))).collect();
    for handle in handles {
      assert_eq!(handle.join().unwrap(), expected);
    }
  });
}
