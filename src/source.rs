//! Byte sources the decoder can pull from.
//!
//! A [`ByteSource`] hands out sequential bytes and nothing else; it has no
//! idea NBT exists. Two real backings are provided: [`Bytes`] over a finite
//! in-memory buffer and [`Reader`] over anything implementing
//! [`std::io::Read`]. [`Empty`] stands in when there is no data at all, so
//! call sites never need a "maybe there is a source" branch.

use std::io::Read;

use crate::error::{Error, Result};

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

/// Provider of sequential bytes for a single decode.
///
/// Every operation fails with an input-kind [`Error`] when fewer bytes remain
/// than requested, or when the underlying transport errors. A source carries
/// mutable position state and must not be shared between concurrent decodes.
pub trait ByteSource: private::Sealed {
    /// Consume the next byte.
    fn read_byte(&mut self) -> Result<u8>;

    /// Consume exactly `buf.len()` bytes into `buf`.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Discard the next `length` bytes.
    fn skip(&mut self, length: usize) -> Result<()>;
}

/// A source backed by a finite, fully-present buffer.
///
/// The input is copied on construction, so later mutation of the caller's
/// buffer cannot change what the decoder sees.
pub struct Bytes {
    data: Vec<u8>,
    head: usize,
}

impl Bytes {
    pub fn new(data: &[u8]) -> Self {
        Bytes {
            data: data.to_vec(),
            head: 0,
        }
    }

    /// Number of bytes left to consume.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.head
    }

    fn out_of_bytes(&self, amount: usize) -> bool {
        amount > self.remaining()
    }
}

impl private::Sealed for Bytes {}

impl ByteSource for Bytes {
    fn read_byte(&mut self) -> Result<u8> {
        if self.out_of_bytes(1) {
            return Err(Error::input("no more bytes in source buffer"));
        }
        let b = self.data[self.head];
        self.head += 1;
        Ok(b)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.out_of_bytes(buf.len()) {
            return Err(Error::input(format!(
                "not enough bytes in source buffer to read {} ({} left)",
                buf.len(),
                self.remaining()
            )));
        }
        buf.copy_from_slice(&self.data[self.head..self.head + buf.len()]);
        self.head += buf.len();
        Ok(())
    }

    fn skip(&mut self, length: usize) -> Result<()> {
        if self.out_of_bytes(length) {
            return Err(Error::input(format!(
                "not enough bytes in source buffer to skip {length}"
            )));
        }
        self.head += length;
        Ok(())
    }
}

/// A source backed by an incremental stream.
///
/// Underlying io errors are wrapped as input failures. The reader's lifetime
/// belongs to the caller; this type never closes what it did not open.
pub struct Reader<R: Read> {
    reader: R,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Reader { reader }
    }

    /// Consumes this source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> private::Sealed for Reader<R> {}

impl<R: Read> ByteSource for Reader<R> {
    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader.read_exact(buf)?;
        Ok(())
    }

    fn skip(&mut self, length: usize) -> Result<()> {
        let discarded = std::io::copy(
            &mut self.reader.by_ref().take(length as u64),
            &mut std::io::sink(),
        )?;

        if discarded < length as u64 {
            return Err(Error::input(format!(
                "stream ended after skipping {discarded} of {length} bytes"
            )));
        }
        Ok(())
    }
}

/// A source with no bytes to provide. Every operation fails.
pub struct Empty;

impl private::Sealed for Empty {}

impl ByteSource for Empty {
    fn read_byte(&mut self) -> Result<u8> {
        Err(Error::input("source is empty; nothing to read"))
    }

    fn read_into(&mut self, _buf: &mut [u8]) -> Result<()> {
        Err(Error::input("source is empty; nothing to read"))
    }

    fn skip(&mut self, _length: usize) -> Result<()> {
        Err(Error::input("source is empty; nothing to skip"))
    }
}
