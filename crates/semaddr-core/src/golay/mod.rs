//! Binary Golay[24,12,8] encoder/decoder.
//!
//! The extended binary Golay code maps 12-bit messages to 24-bit codewords
//! with minimum Hamming distance 8, which guarantees unique correction of up
//! to 3 bit errors.
//!
//! # Construction
//!
//! - Systematic encoding over the cyclic [23,12,7] Golay code with generator
//!   polynomial `g(x) = x^11 + x^9 + x^7 + x^6 + x^5 + x + 1` (`0xAE3`):
//!   the message occupies bits 11..=22, the polynomial remainder fills bits
//!   0..=10.
//! - Extension to [24,12,8] by an overall even-parity bit at bit 23.
//!
//! # Decoding
//!
//! The [23,12,7] code is *perfect*: its 2048 syndromes are in bijection with
//! the error patterns of weight <= 3, so a one-shot syndrome table lookup
//! corrects the low 23 bits, and a final distance check against the
//! re-encoded codeword settles the parity bit. [`decode`] is O(1); the
//! exhaustive reference decoder [`nearest_codeword`] scans the 4096-entry
//! table and is kept for validation.
//!
//! All tables are immutable process-lifetime constants, safe for concurrent
//! read-only sharing.

mod codec;
mod tables;

pub use codec::{decode, encode, nearest_codeword, Decoded};
pub use tables::{codeword_table, CODEWORD_COUNT, MIN_DISTANCE, WORD_MASK};
