//! Constant tables for the Golay[24,12,8] code.
//!
//! Built once at first use and never mutated; concurrent readers share them
//! without synchronization.

use once_cell::sync::Lazy;

/// Generator polynomial of the cyclic [23,12,7] Golay code:
/// `x^11 + x^9 + x^7 + x^6 + x^5 + x + 1`.
pub(crate) const GENERATOR_POLY: u32 = 0xAE3;

/// Degree of the generator polynomial (number of parity bits in the
/// 23-bit codeword).
pub(crate) const PARITY_BITS: u32 = 11;

/// Mask for the low 23 bits (the cyclic part of an extended codeword).
pub(crate) const CYCLIC_MASK: u32 = 0x7F_FFFF;

/// Mask for a full 24-bit word.
pub const WORD_MASK: u32 = 0xFF_FFFF;

/// Number of valid codewords (= number of 12-bit messages).
pub const CODEWORD_COUNT: usize = 1 << 12;

/// Number of syndromes of the [23,12,7] code.
const SYNDROME_COUNT: usize = 1 << PARITY_BITS;

/// Minimum Hamming distance of the extended code.
pub const MIN_DISTANCE: u32 = 8;

/// Remainder of `value` modulo the generator polynomial over GF(2).
#[inline]
pub(crate) fn poly_mod(mut value: u32) -> u32 {
    while value >> PARITY_BITS != 0 {
        let shift = 31 - value.leading_zeros() - PARITY_BITS;
        value ^= GENERATOR_POLY << shift;
    }
    value
}

/// Systematic [23,12] encoding: message in bits 11..=22, remainder parity
/// in bits 0..=10.
#[inline]
pub(crate) fn encode23(message: u16) -> u32 {
    let shifted = u32::from(message) << PARITY_BITS;
    shifted ^ poly_mod(shifted)
}

/// Extend a 23-bit codeword with an overall even-parity bit at bit 23.
#[inline]
pub(crate) fn extend24(cw23: u32) -> u32 {
    cw23 | ((cw23.count_ones() & 1) << 23)
}

/// All 4096 valid 24-bit codewords, indexed by message value.
static CODEWORDS: Lazy<[u32; CODEWORD_COUNT]> = Lazy::new(|| {
    let mut table = [0u32; CODEWORD_COUNT];
    for (message, slot) in table.iter_mut().enumerate() {
        *slot = extend24(encode23(message as u16));
    }
    table
});

/// Syndrome table over the perfect [23,12,7] code: maps each of the 2048
/// syndromes to the unique 23-bit error pattern of weight <= 3 producing it.
static SYNDROMES: Lazy<[u32; SYNDROME_COUNT]> = Lazy::new(|| {
    let mut table = [0u32; SYNDROME_COUNT];
    // Weight 1..=3 patterns; weight 0 maps syndrome 0 to pattern 0, which the
    // zero initialization already covers. The perfect-code property makes
    // this enumeration fill every slot exactly once.
    for a in 0..23u32 {
        let ea = 1u32 << a;
        table[poly_mod(ea) as usize] = ea;
        for b in (a + 1)..23 {
            let eab = ea | (1 << b);
            table[poly_mod(eab) as usize] = eab;
            for c in (b + 1)..23 {
                let eabc = eab | (1 << c);
                table[poly_mod(eabc) as usize] = eabc;
            }
        }
    }
    table
});

/// The immutable table of all 4096 valid codewords, indexed by message.
#[inline]
pub fn codeword_table() -> &'static [u32; CODEWORD_COUNT] {
    &CODEWORDS
}

/// Error pattern of weight <= 3 on the low 23 bits matching `syndrome`.
#[inline]
pub(crate) fn syndrome_error(syndrome: u32) -> u32 {
    SYNDROMES[syndrome as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codeword_table_has_4096_distinct_members() {
        let table = codeword_table();
        let distinct: HashSet<u32> = table.iter().copied().collect();
        assert_eq!(distinct.len(), CODEWORD_COUNT);
        assert!(table.iter().all(|&cw| cw <= WORD_MASK));
    }

    #[test]
    fn codewords_have_even_parity() {
        assert!(codeword_table().iter().all(|cw| cw.count_ones() % 2 == 0));
    }

    #[test]
    fn minimum_nonzero_weight_is_8() {
        // For a linear code the minimum pairwise distance equals the minimum
        // weight of a nonzero codeword.
        let min_weight = codeword_table()[1..]
            .iter()
            .map(|cw| cw.count_ones())
            .min()
            .unwrap();
        assert_eq!(min_weight, MIN_DISTANCE);
    }

    #[test]
    fn pairwise_distance_at_least_8() {
        let table = codeword_table();
        // Linearity makes the min-weight check above sufficient, but the
        // distance guarantee is the load-bearing property, so verify a
        // deterministic sample of explicit pairs as well.
        for i in (0..CODEWORD_COUNT).step_by(61) {
            for j in (i + 1..CODEWORD_COUNT).step_by(67) {
                let d = (table[i] ^ table[j]).count_ones();
                assert!(d >= MIN_DISTANCE, "d({i},{j}) = {d}");
            }
        }
    }

    #[test]
    fn syndrome_table_covers_all_weight_le_3_patterns() {
        // 1 + 23 + 253 + 1771 = 2048 patterns, one per syndrome.
        let mut seen = HashSet::new();
        for a in 0..23u32 {
            seen.insert(1u32 << a);
            for b in (a + 1)..23 {
                seen.insert((1 << a) | (1 << b));
                for c in (b + 1)..23 {
                    seen.insert((1 << a) | (1 << b) | (1 << c));
                }
            }
        }
        seen.insert(0);
        assert_eq!(seen.len(), 2048);

        for &pattern in &seen {
            assert_eq!(syndrome_error(poly_mod(pattern)), pattern);
        }
    }

    #[test]
    fn known_encodings() {
        let table = codeword_table();
        assert_eq!(table[0x000], 0x000000);
        assert_eq!(table[0x001], 0x800AE3);
        assert_eq!(table[0xABC], 0x55E21E);
        assert_eq!(table[0xFFF], 0xFFFFFF);
        assert_eq!(table[0x5A5], 0xAD2D89);
    }

    #[test]
    fn systematic_message_recovery() {
        for message in [0x000u16, 0x001, 0x5A5, 0xABC, 0xFFF] {
            let cw = encode23(message);
            assert_eq!((cw >> PARITY_BITS) as u16, message);
        }
    }
}
