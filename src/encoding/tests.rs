use super::*;
use crate::error::Error;

#[test]
fn test_encode_upper() {
    assert_eq!(encode_upper(&[]), "");
    assert_eq!(encode_upper(&[0x00]), "00");
    assert_eq!(encode_upper(&[0xDE, 0xAD, 0xBE, 0xEF]), "DEADBEEF");
    assert_eq!(encode_upper(&[0x01, 0x23, 0x45, 0x67, 0x89]), "0123456789");
    assert_eq!(encode_upper(&[0xAB, 0xCD, 0xEF]), "ABCDEF");
}

#[test]
fn test_decode_mixed_case() {
    assert_eq!(decode("deadBEEF").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn test_decode_skips_non_hex() {
    // The permissive decoder tolerates separators and whitespace.
    assert_eq!(
        decode("DE:AD be_ef\n").unwrap(),
        [0xDE, 0xAD, 0xBE, 0xEF]
    );
    // Everything filtered out decodes to nothing.
    assert!(decode("::  --").unwrap().is_empty());
}

#[test]
fn test_decode_odd_digit_count() {
    assert!(matches!(decode("abc"), Err(Error::Parameter { .. })));
    // Odd after filtering, too.
    assert!(matches!(decode("a:b:c"), Err(Error::Parameter { .. })));
}

#[test]
fn test_decode_strict() {
    assert_eq!(decode_strict("DeadBeef").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
    assert!(matches!(
        decode_strict("DE:AD"),
        Err(Error::Parameter { .. })
    ));
    assert!(matches!(
        decode_strict("dead beef"),
        Err(Error::Parameter { .. })
    ));
    assert!(matches!(decode_strict("abc"), Err(Error::Parameter { .. })));
}

#[test]
fn test_round_trip() {
    let data: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
    let encoded = encode_upper(&data);
    assert_eq!(encoded.len(), data.len() * 2);
    assert_eq!(decode(&encoded).unwrap(), data);
    assert_eq!(decode_strict(&encoded).unwrap(), data);
}
