//! Detection of the compression wrapped around a serialized tag tree.
//!
//! NBT data on disk is usually gzip or zlib compressed, with nothing outside
//! the payload saying which. The first two bytes are enough to tell: gzip
//! has a fixed magic number, and a zlib header is self-checking (the 16-bit
//! value divides by 31) with known window-size and method fields.

use log::debug;

/// How a serialized payload is compressed, as sniffed from its first bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compression {
    None,
    Gzip,
    Zlib,
}

// The bytes at the start of every gzip stream.
const GZIP_MAGIC: u16 = 0x1f8b;

// Zlib headers always divide cleanly by this.
const ZLIB_FACTOR: u16 = 31;

// The highest allowed value for zlib's CINFO field (the window size).
const ZLIB_MAX_WINDOW: u16 = 7;

// The id of the only valid zlib compression method, DEFLATE.
const ZLIB_DEFLATE_METHOD: u16 = 8;

impl Compression {
    /// Classify a payload by its leading bytes. Fewer than two bytes means
    /// uncompressed; no real compressed stream is that short, and the NBT
    /// decoder will report whatever is actually wrong with the data.
    pub(crate) fn detect(header: &[u8]) -> Compression {
        let (b1, b2) = match header {
            [b1, b2, ..] => (*b1 as u16, *b2 as u16),
            _ => return Compression::None,
        };

        let magic = b1 << 8 | b2;

        let detected = if magic == GZIP_MAGIC {
            Compression::Gzip
        } else if magic % ZLIB_FACTOR == 0 {
            let window = magic >> 12 & 0xF;
            let method = magic >> 8 & 0xF;

            // A header can divide by 31 by coincidence, so the window size
            // and method fields must also hold up.
            if window <= ZLIB_MAX_WINDOW && method == ZLIB_DEFLATE_METHOD {
                Compression::Zlib
            } else {
                Compression::None
            }
        } else {
            Compression::None
        };

        if detected != Compression::None {
            debug!("detected {detected:?} compressed input");
        }

        detected
    }
}
