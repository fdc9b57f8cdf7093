//! Fuzz target for the streaming CRC-16 API.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use crc16::{Checksum, Crc16, Crc16Kermit, Crc16Params, Crc16Xmodem};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming::<Crc16Xmodem>("xmodem", data, &input.chunk_sizes);
  test_streaming::<Crc16Kermit>("kermit", data, &input.chunk_sizes);
  test_digest(data, &input.chunk_sizes);
});

fn chunks<'a>(data: &'a [u8], chunk_sizes: &'a [usize]) -> impl Iterator<Item = &'a [u8]> + 'a {
  let mut offset = 0;
  let mut chunk_idx = 0;

  core::iter::from_fn(move || {
    if offset >= data.len() {
      return None;
    }

    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    let chunk = &data[offset..end];
    offset = end;
    chunk_idx += 1;
    Some(chunk)
  })
}

fn test_streaming<C: Checksum<Output = u16>>(name: &str, data: &[u8], chunk_sizes: &[usize]) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  for chunk in chunks(data, chunk_sizes) {
    hasher.update(chunk);
  }

  assert_eq!(hasher.finalize(), expected, "crc16/{name} streaming mismatch");
}

fn test_digest(data: &[u8], chunk_sizes: &[usize]) {
  let engine = Crc16::new(Crc16Params::USB);
  let expected = engine.checksum(data);

  let mut digest = engine.digest();
  for chunk in chunks(data, chunk_sizes) {
    digest.update(chunk);
  }
  assert_eq!(digest.finalize(), expected, "crc16/usb digest mismatch");

  digest.reset();
  digest.update(data);
  assert_eq!(digest.finalize(), expected, "crc16/usb digest reset mismatch");
}
