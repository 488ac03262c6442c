//! Exhaustive property verification of the Golay[24,12,8] codec.
//!
//! These are the guarantees everything downstream leans on: the address a
//! party derives is only reproducible by a near-identical text if every
//! <=3-bit corruption decodes back to the same message, in all cases, not
//! probabilistically.

use semaddr_core::golay::{codeword_table, decode, encode, CODEWORD_COUNT, MIN_DISTANCE};
use semaddr_core::types::Message12;

/// All error patterns of weight <= 3 over 24 bits: 1 + 24 + 276 + 2024 = 2325.
fn error_patterns_up_to_3() -> Vec<u32> {
    let mut patterns = vec![0u32];
    for a in 0..24u32 {
        patterns.push(1 << a);
        for b in (a + 1)..24 {
            patterns.push((1 << a) | (1 << b));
            for c in (b + 1)..24 {
                patterns.push((1 << a) | (1 << b) | (1 << c));
            }
        }
    }
    patterns
}

#[test]
fn encode_is_a_bijection() {
    let mut seen = vec![false; 1 << 24];
    for value in 0..=Message12::MAX {
        let id = encode(Message12::new(value).unwrap());
        assert!(!seen[id.as_u32() as usize], "duplicate codeword for {value:03x}");
        seen[id.as_u32() as usize] = true;
    }
    assert_eq!(seen.iter().filter(|&&s| s).count(), CODEWORD_COUNT);
}

#[test]
fn every_error_up_to_3_bits_corrects_exactly() {
    let patterns = error_patterns_up_to_3();
    assert_eq!(patterns.len(), 2325);

    for value in 0..=Message12::MAX {
        let message = Message12::new(value).unwrap();
        let codeword = encode(message).as_u32();
        for &error in &patterns {
            let decoded = decode(codeword ^ error)
                .unwrap_or_else(|e| panic!("msg {value:03x} error 0x{error:06x}: {e}"));
            assert_eq!(decoded.message, message, "msg {value:03x} error 0x{error:06x}");
            assert_eq!(decoded.corrected_bits, error.count_ones());
        }
    }
}

#[test]
fn full_pairwise_minimum_distance_is_8() {
    let table = codeword_table();
    // 4096 * 4095 / 2 = ~8.4M popcounts; cheap enough to do exhaustively.
    let mut min = u32::MAX;
    for i in 0..CODEWORD_COUNT {
        for j in (i + 1)..CODEWORD_COUNT {
            min = min.min((table[i] ^ table[j]).count_ones());
        }
    }
    assert_eq!(min, MIN_DISTANCE);
}

#[test]
fn some_weight_4_error_defeats_decoding() {
    // The distance-8 boundary is tight: find at least one (message, error)
    // pair with a weight-4 error that does not decode back to the message.
    let message = Message12::new(0x000).unwrap();
    let codeword = encode(message).as_u32();
    // Half the support of the weight-8 codeword for message 0x001.
    let error = 0x000063u32;
    assert_eq!(error.count_ones(), 4);
    match decode(codeword ^ error) {
        Err(_) => {}
        Ok(decoded) => assert_ne!(decoded.message, message),
    }
}
