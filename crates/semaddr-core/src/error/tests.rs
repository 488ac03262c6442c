//! Error conversion and classification tests.

use super::*;

#[test]
fn sub_errors_convert_into_unified() {
    let e: SemAddrError = QuantizeError::InvalidInputShape {
        expected: 384,
        actual: 3,
    }
    .into();
    assert!(matches!(e, SemAddrError::Quantize(_)));

    let e: SemAddrError = CodecError::Ambiguous {
        word: 0x63,
        nearest_distance: 4,
    }
    .into();
    assert!(matches!(e, SemAddrError::Codec(_)));

    let e: SemAddrError = IndexError::RadiusTooLarge { radius: 25 }.into();
    assert!(matches!(e, SemAddrError::Index(_)));
}

#[test]
fn address_mismatch_is_critical() {
    let e: SemAddrError = LedgerError::AddressMismatch {
        expected: "0xF970f43E14C4db1549897fbbbec8c7efCF685028".into(),
        actual: "0x0000000000000000000000000000000000000000".into(),
    }
    .into();
    assert!(e.is_critical());

    let e: SemAddrError = LedgerError::NotDeployed {
        address: "0x0000000000000000000000000000000000000000".into(),
    }
    .into();
    assert!(!e.is_critical());
}

#[test]
fn messages_carry_full_context() {
    let e = LedgerError::AddressMismatch {
        expected: "0xAAAA".into(),
        actual: "0xBBBB".into(),
    };
    let msg = e.to_string();
    assert!(msg.contains("0xAAAA"), "missing expected address: {msg}");
    assert!(msg.contains("0xBBBB"), "missing actual address: {msg}");

    let e = CodecError::Ambiguous {
        word: 0x000063,
        nearest_distance: 4,
    };
    assert!(e.to_string().contains("0x000063"));
}
