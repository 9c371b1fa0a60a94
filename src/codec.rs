//! Endianness-aware assembly of scalars, arrays and strings from a
//! [`ByteSource`].
//!
//! The wire format is big-endian throughout; little-endian exists so the
//! assembly itself can be tested against both orders.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::mutf8;
use crate::source::ByteSource;

/// The order to combine bytes in when assembling a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Big,
    Little,
}

/// Assemble `bytes.len()` bytes into a signed two's-complement integer.
///
/// For big-endian, byte `i` contributes its value shifted left by
/// `8 * (n - 1 - i)` bits; for little-endian by `8 * i` bits. Bytes are
/// composed as unsigned values, so no intermediate sign-extension leaks in.
/// A width outside 1..=8 is a programmer error, not a data error.
pub(crate) fn decode_int(bytes: &[u8], endian: Endian) -> i64 {
    debug_assert!((1..=8).contains(&bytes.len()));
    match endian {
        Endian::Big => BigEndian::read_int(bytes, bytes.len()),
        Endian::Little => LittleEndian::read_int(bytes, bytes.len()),
    }
}

/// Unsigned variant of [`decode_int`], used for bit patterns (floats) and
/// unsigned length prefixes.
pub(crate) fn decode_uint(bytes: &[u8], endian: Endian) -> u64 {
    debug_assert!((1..=8).contains(&bytes.len()));
    match endian {
        Endian::Big => BigEndian::read_uint(bytes, bytes.len()),
        Endian::Little => LittleEndian::read_uint(bytes, bytes.len()),
    }
}

fn read_buf<S: ByteSource, const N: usize>(source: &mut S) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    source.read_into(&mut buf)?;
    Ok(buf)
}

pub(crate) fn read_i8<S: ByteSource>(source: &mut S) -> Result<i8> {
    Ok(source.read_byte()? as i8)
}

pub(crate) fn read_i16<S: ByteSource>(source: &mut S, endian: Endian) -> Result<i16> {
    Ok(decode_int(&read_buf::<_, 2>(source)?, endian) as i16)
}

pub(crate) fn read_i32<S: ByteSource>(source: &mut S, endian: Endian) -> Result<i32> {
    Ok(decode_int(&read_buf::<_, 4>(source)?, endian) as i32)
}

pub(crate) fn read_i64<S: ByteSource>(source: &mut S, endian: Endian) -> Result<i64> {
    Ok(decode_int(&read_buf::<_, 8>(source)?, endian))
}

pub(crate) fn read_u16<S: ByteSource>(source: &mut S, endian: Endian) -> Result<u16> {
    Ok(decode_uint(&read_buf::<_, 2>(source)?, endian) as u16)
}

pub(crate) fn read_f32<S: ByteSource>(source: &mut S, endian: Endian) -> Result<f32> {
    Ok(f32::from_bits(
        decode_uint(&read_buf::<_, 4>(source)?, endian) as u32,
    ))
}

pub(crate) fn read_f64<S: ByteSource>(source: &mut S, endian: Endian) -> Result<f64> {
    Ok(f64::from_bits(decode_uint(
        &read_buf::<_, 8>(source)?,
        endian,
    )))
}

fn try_size(len: usize, width: usize) -> Result<usize> {
    len.checked_mul(width)
        .ok_or_else(|| Error::malformed(format!("array of {len} elements is too large")))
}

pub(crate) fn read_byte_array<S: ByteSource>(source: &mut S, len: usize) -> Result<Vec<i8>> {
    let mut buf = vec![0u8; len];
    source.read_into(&mut buf)?;
    Ok(buf.into_iter().map(|b| b as i8).collect())
}

pub(crate) fn read_int_array<S: ByteSource>(
    source: &mut S,
    len: usize,
    endian: Endian,
) -> Result<Vec<i32>> {
    let mut buf = vec![0u8; try_size(len, 4)?];
    source.read_into(&mut buf)?;
    Ok(buf
        .chunks_exact(4)
        .map(|chunk| decode_int(chunk, endian) as i32)
        .collect())
}

pub(crate) fn read_long_array<S: ByteSource>(
    source: &mut S,
    len: usize,
    endian: Endian,
) -> Result<Vec<i64>> {
    let mut buf = vec![0u8; try_size(len, 8)?];
    source.read_into(&mut buf)?;
    Ok(buf
        .chunks_exact(8)
        .map(|chunk| decode_int(chunk, endian))
        .collect())
}

/// Read a length-prefixed modified-UTF-8 string: a 2-byte big-endian
/// unsigned byte count, then exactly that many bytes of string data.
pub(crate) fn read_string<S: ByteSource>(source: &mut S) -> Result<String> {
    let len = read_u16(source, Endian::Big).map_err(|e| e.context("reading UTF length"))? as usize;

    let mut buf = vec![0u8; len];
    source
        .read_into(&mut buf)
        .map_err(|e| e.context("reading UTF value"))?;

    mutf8::decode(&buf)
}

/// Discard a length-prefixed string without decoding it.
pub(crate) fn skip_string<S: ByteSource>(source: &mut S) -> Result<()> {
    let len = read_u16(source, Endian::Big).map_err(|e| e.context("reading UTF length"))? as usize;
    source
        .skip(len)
        .map_err(|e| e.context("skipping UTF value"))
}
