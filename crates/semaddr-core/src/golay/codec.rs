//! Encode and decode operations over the constant tables.

use tracing::trace;

use super::tables::{
    codeword_table, poly_mod, syndrome_error, CYCLIC_MASK, PARITY_BITS, WORD_MASK,
};
use crate::error::CodecError;
use crate::types::{Message12, SemId};

/// Maximum number of bit errors the code corrects.
const MAX_CORRECTABLE: u32 = 3;

/// Result of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered 12-bit message.
    pub message: Message12,
    /// The codeword the received word was corrected to.
    pub codeword: SemId,
    /// Number of bit errors corrected (0..=3).
    pub corrected_bits: u32,
}

/// Encode a 12-bit message into its 24-bit Golay codeword.
///
/// Pure and O(1); encoding is a bijection between messages and the codeword
/// table.
#[inline]
#[must_use]
pub fn encode(message: Message12) -> SemId {
    SemId::from_codeword(codeword_table()[message.as_u16() as usize])
}

/// Decode a possibly corrupted 24-bit word to the nearest valid codeword.
///
/// Syndrome-decodes the cyclic 23-bit part (a single table lookup), then
/// checks the re-encoded codeword against the full received word to settle
/// the parity bit. If the nearest codeword is within 3 bit errors the result
/// is the unique intended message (minimum distance 8 guarantees
/// uniqueness); otherwise no confident correction exists.
///
/// # Errors
///
/// - [`CodecError::WordOutOfRange`] if `word` does not fit in 24 bits.
/// - [`CodecError::Ambiguous`] if every codeword is more than 3 bit errors
///   away, with the exact nearest distance for context.
pub fn decode(word: u32) -> Result<Decoded, CodecError> {
    if word > WORD_MASK {
        return Err(CodecError::WordOutOfRange { value: word });
    }

    // Any error pattern of total weight <= 3 leaves at most 3 errors on the
    // low 23 bits, which the perfect [23,12,7] code corrects exactly.
    let received23 = word & CYCLIC_MASK;
    let error23 = syndrome_error(poly_mod(received23));
    let corrected23 = received23 ^ error23;
    let message = Message12::from_truncated(corrected23 >> PARITY_BITS);

    let codeword = codeword_table()[message.as_u16() as usize];
    let distance = (word ^ codeword).count_ones();

    if distance > MAX_CORRECTABLE {
        // The failure path is rare; afford the exhaustive scan to report the
        // true nearest distance.
        let (_, _, nearest_distance) = nearest_codeword(word);
        trace!(
            target: "semaddr::golay",
            word,
            nearest_distance,
            "decode ambiguous"
        );
        return Err(CodecError::Ambiguous {
            word,
            nearest_distance,
        });
    }

    Ok(Decoded {
        message,
        codeword: SemId::from_codeword(codeword),
        corrected_bits: distance,
    })
}

/// Exhaustive nearest-codeword search over the full 4096-entry table.
///
/// Reference decoder: returns the message, its codeword, and the Hamming
/// distance, breaking ties by lowest message value. Always succeeds, even
/// beyond the correction radius, so callers comparing against [`decode`]
/// must apply the distance <= 3 cutoff themselves.
#[must_use]
pub fn nearest_codeword(word: u32) -> (Message12, SemId, u32) {
    let word = word & WORD_MASK;
    let mut best_message = 0usize;
    let mut best_distance = u32::MAX;
    for (message, &codeword) in codeword_table().iter().enumerate() {
        let d = (word ^ codeword).count_ones();
        if d < best_distance {
            best_distance = d;
            best_message = message;
            if d == 0 {
                break;
            }
        }
    }
    (
        Message12::from_truncated(best_message as u32),
        SemId::from_codeword(codeword_table()[best_message]),
        best_distance,
    )
}
