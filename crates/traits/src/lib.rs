//! Checksum traits for the CRC-16 engine.
//!
//! This crate holds the interface every CRC-16 preset hasher conforms to. It is
//! `no_std` compatible and has zero dependencies, so downstream code can be
//! generic over a checksum without pulling in the engine itself.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | One-shot and streaming computation, resume from a prior value |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;

pub use checksum::{Checksum, ChecksumCombine};
