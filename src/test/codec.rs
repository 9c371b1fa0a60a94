use crate::codec::{self, decode_int, decode_uint, Endian};
use crate::error::ErrorKind;
use crate::mutf8;
use crate::source::{ByteSource, Bytes};

#[test]
fn short_boundaries_round_trip() {
    for v in [i16::MIN, -1, 0, 1, i16::MAX, 0x7F, 0x80, -0x80] {
        assert_eq!(decode_int(&v.to_be_bytes(), Endian::Big) as i16, v);
        assert_eq!(decode_int(&v.to_le_bytes(), Endian::Little) as i16, v);
    }
}

#[test]
fn int_boundaries_round_trip() {
    for v in [i32::MIN, -1, 0, 1, i32::MAX, 0xFFFF, -0x8000] {
        assert_eq!(decode_int(&v.to_be_bytes(), Endian::Big) as i32, v);
        assert_eq!(decode_int(&v.to_le_bytes(), Endian::Little) as i32, v);
    }
}

#[test]
fn long_boundaries_round_trip() {
    for v in [
        i64::MIN,
        -1,
        0,
        1,
        i64::MAX,
        i32::MAX as i64 + 1,
        i32::MIN as i64 - 1,
    ] {
        assert_eq!(decode_int(&v.to_be_bytes(), Endian::Big), v);
        assert_eq!(decode_int(&v.to_le_bytes(), Endian::Little), v);
    }
}

#[test]
fn float_boundaries_round_trip() {
    for v in [
        f32::MIN,
        -1.0,
        0.0,
        1.0,
        f32::MAX,
        f32::MIN_POSITIVE,
        f32::EPSILON,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ] {
        let mut source = Bytes::new(&v.to_be_bytes());
        assert_eq!(codec::read_f32(&mut source, Endian::Big).unwrap(), v);
    }
}

#[test]
fn double_boundaries_round_trip() {
    for v in [
        f64::MIN,
        -1.0,
        0.0,
        1.0,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ] {
        let mut source = Bytes::new(&v.to_be_bytes());
        assert_eq!(codec::read_f64(&mut source, Endian::Big).unwrap(), v);
    }
}

#[test]
fn nan_bit_pattern_survives() {
    let bits = 0x7FC0_0001u32;
    let mut source = Bytes::new(&bits.to_be_bytes());
    let f = codec::read_f32(&mut source, Endian::Big).unwrap();
    assert!(f.is_nan());
    assert_eq!(f.to_bits(), bits);
}

#[test]
fn byte_contributions_shift_as_documented() {
    // 0x01 0x02: big-endian shifts byte 0 by 8 bits, little by 0.
    assert_eq!(decode_int(&[0x01, 0x02], Endian::Big), 0x0102);
    assert_eq!(decode_int(&[0x01, 0x02], Endian::Little), 0x0201);
}

#[test]
fn high_bytes_do_not_sign_extend() {
    // A leading 0xFF byte must compose as an unsigned contribution; only
    // the final width reinterprets the sign.
    assert_eq!(decode_uint(&[0xFF, 0x00], Endian::Big), 0xFF00);
    assert_eq!(decode_int(&[0xFF, 0x00], Endian::Big) as i16, -256);
}

#[test]
fn single_byte_widths_work() {
    assert_eq!(decode_int(&[0x80], Endian::Big), -128);
    assert_eq!(decode_int(&[0x80], Endian::Little), -128);
    assert_eq!(decode_uint(&[0x80], Endian::Big), 128);
}

#[test]
fn typed_reads_consume_exactly_their_width() {
    let mut data = vec![];
    data.extend_from_slice(&42i16.to_be_bytes());
    data.extend_from_slice(&(-7i32).to_be_bytes());
    data.extend_from_slice(&i64::MAX.to_be_bytes());

    let mut source = Bytes::new(&data);
    assert_eq!(codec::read_i16(&mut source, Endian::Big).unwrap(), 42);
    assert_eq!(codec::read_i32(&mut source, Endian::Big).unwrap(), -7);
    assert_eq!(codec::read_i64(&mut source, Endian::Big).unwrap(), i64::MAX);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn int_array_reads_each_element_big_endian() {
    let mut data = vec![];
    for v in [1i32, -2, i32::MAX] {
        data.extend_from_slice(&v.to_be_bytes());
    }

    let mut source = Bytes::new(&data);
    let arr = codec::read_int_array(&mut source, 3, Endian::Big).unwrap();
    assert_eq!(arr, vec![1, -2, i32::MAX]);
}

#[test]
fn long_array_truncated_is_input_failure() {
    let mut source = Bytes::new(&[0u8; 12]); // 1.5 longs
    let err = codec::read_long_array(&mut source, 2, Endian::Big).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn ascii_string_decodes() {
    assert_eq!(mutf8::decode(b"hello").unwrap(), "hello");
}

#[test]
fn two_byte_group_decodes() {
    // U+00A3 POUND SIGN.
    assert_eq!(mutf8::decode(&[0xC2, 0xA3]).unwrap(), "\u{a3}");
}

#[test]
fn three_byte_group_decodes() {
    // U+20AC EURO SIGN, squarely in the three-byte range.
    assert_eq!(mutf8::decode(&[0xE2, 0x82, 0xAC]).unwrap(), "\u{20ac}");
}

#[test]
fn three_byte_range_boundary_decodes() {
    // U+0800 is the first code point needing three bytes.
    assert_eq!(mutf8::decode(&[0xE0, 0xA0, 0x80]).unwrap(), "\u{800}");
}

#[test]
fn surrogate_pair_groups_combine() {
    // U+1F608 encoded the modified way: two three-byte groups forming a
    // surrogate pair.
    let bytes = [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x88];
    assert_eq!(mutf8::decode(&bytes).unwrap(), "😈");
}

#[test]
fn embedded_nul_uses_two_bytes() {
    assert_eq!(mutf8::decode(&[0x61, 0xC0, 0x80, 0x62]).unwrap(), "a\0b");
}

#[test]
fn wrong_continuation_msbs_are_input_failures() {
    for bytes in [
        &[0xC2, 0x41][..],       // second byte of a 2-byte group
        &[0xE2, 0x41, 0x80][..], // second byte of a 3-byte group
        &[0xE2, 0x82, 0x41][..], // third byte of a 3-byte group
    ] {
        let err = mutf8::decode(bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}

#[test]
fn four_byte_utf8_lead_is_rejected() {
    // Standard UTF-8 for U+1F608; the modified encoding has no 4-byte form.
    let err = mutf8::decode(&[0xF0, 0x9F, 0x98, 0x88]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn group_cut_short_is_input_failure() {
    let err = mutf8::decode(&[0xE2, 0x82]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn unpaired_surrogate_is_input_failure() {
    let err = mutf8::decode(&[0xED, 0xA0, 0xBD]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn string_read_consumes_declared_bytes_not_chars() {
    // 3 bytes, 1 character: the length prefix bounds consumption.
    let mut data = vec![0x00, 0x03, 0xE2, 0x82, 0xAC];
    data.push(0x61); // a trailing byte the string must not eat
    let mut source = Bytes::new(&data);

    assert_eq!(codec::read_string(&mut source).unwrap(), "\u{20ac}");
    assert_eq!(source.remaining(), 1);
}

#[test]
fn empty_string_reads() {
    let mut source = Bytes::new(&[0x00, 0x00]);
    assert_eq!(codec::read_string(&mut source).unwrap(), "");
}

#[test]
fn string_length_is_unsigned() {
    // 0x8005 would be negative as an i16; as a u16 it is just large, and
    // the source runs dry, which is an input failure rather than an attempt
    // to read -32763 bytes.
    let mut source = Bytes::new(&[0x80, 0x05, b'a']);
    let err = codec::read_string(&mut source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn skip_string_discards_exactly_the_declared_bytes() {
    let mut source = Bytes::new(&[0x00, 0x02, 0xFF, 0xFE, 0x07]);
    codec::skip_string(&mut source).unwrap();
    assert_eq!(source.read_byte().unwrap(), 0x07);
}
