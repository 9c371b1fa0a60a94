//! The decoder: recursive descent over a [`ByteSource`], producing the root
//! [`TagCompound`].
//!
//! [`from_bytes`] and [`from_reader`] are the usual entry points; both sniff
//! the compression from the leading bytes and wrap the input in the matching
//! decompressor before any NBT is parsed, so the decoder itself only ever
//! sees plain bytes.
//!
//! Nothing here retries: any failure aborts the whole parse, and nested
//! failures surface with a breadcrumb of what was being read at the time.

use std::io::{Cursor, Read};

use flate2::read::{GzDecoder, ZlibDecoder};

use crate::codec::{self, Endian};
use crate::compression::Compression;
use crate::error::{Error, Result};
use crate::source::{ByteSource, Bytes, Empty, Reader};
use crate::{Entry, Tag, TagCompound, TagList, Value};

/// Decode a tag tree from a byte buffer, which may be uncompressed, gzip
/// compressed or zlib compressed.
///
/// The buffer is defensively copied (or streamed through a decompressor), so
/// the caller's data is never modified.
pub fn from_bytes(data: &[u8]) -> Result<TagCompound> {
    if data.is_empty() {
        return Decoder::new(Empty).read_root();
    }

    match Compression::detect(data) {
        Compression::None => Decoder::new(Bytes::new(data)).read_root(),
        Compression::Gzip => Decoder::new(Reader::new(GzDecoder::new(data))).read_root(),
        Compression::Zlib => Decoder::new(Reader::new(ZlibDecoder::new(data))).read_root(),
    }
}

/// Decode a tag tree from an incremental reader, sniffing compression the
/// same way as [`from_bytes`].
///
/// The reader is left wherever decoding stopped and is never closed; its
/// lifetime is the caller's business.
pub fn from_reader<R: Read>(mut reader: R) -> Result<TagCompound> {
    let mut header = [0u8; 2];
    let got = read_header(&mut reader, &mut header)?;

    // The sniffed bytes are part of the payload, so replay them in front of
    // the rest of the stream.
    let replay = Cursor::new(header).take(got as u64).chain(reader);

    match Compression::detect(&header[..got]) {
        Compression::None => Decoder::new(Reader::new(replay)).read_root(),
        Compression::Gzip => Decoder::new(Reader::new(GzDecoder::new(replay))).read_root(),
        Compression::Zlib => Decoder::new(Reader::new(ZlibDecoder::new(replay))).read_root(),
    }
}

/// Fill as much of `buf` as the reader can supply, stopping quietly at EOF.
fn read_header<R: Read>(reader: &mut R, buf: &mut [u8; 2]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Reads NBT structures from a byte source.
///
/// Most callers want [`from_bytes`] or [`from_reader`] instead; the decoder
/// is public for driving a parse by hand, for example reading a bare
/// (rootless) compound out of a larger container format.
///
/// A decoder owns its source for the duration of the parse. It is strictly
/// synchronous and holds no OS resources of its own.
pub struct Decoder<S: ByteSource> {
    source: S,
}

impl<S: ByteSource> Decoder<S> {
    pub fn new(source: S) -> Self {
        Decoder { source }
    }

    /// Consumes this decoder, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Read a whole document: one root tag.
    ///
    /// A root of `TAG_End` is an empty document and decodes to an empty
    /// compound. Otherwise the root must be a compound; its name
    /// (conventionally empty) is consumed and discarded. Any other root
    /// kind is malformed data.
    pub fn read_root(&mut self) -> Result<TagCompound> {
        let tag = self
            .read_tag()
            .map_err(|e| e.context("reading root value's type"))?;

        match tag {
            Tag::End => Ok(TagCompound::new()),
            Tag::Compound => {
                codec::skip_string(&mut self.source)
                    .map_err(|e| e.context("reading root compound's name"))?;
                self.read_compound()
            }
            other => Err(Error::malformed(format!(
                "expected {} as root, not {other}",
                Tag::Compound
            ))),
        }
    }

    /// Read the next tag-kind identifier.
    ///
    /// `TAG_End` is returned like any other kind; callers decide whether it
    /// terminates something or is out of place. An identifier with no known
    /// kind is malformed data.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let id = self
            .source
            .read_byte()
            .map_err(|e| e.context("reading type identifier"))?;

        Tag::try_from(id).map_err(|_| Error::invalid_tag(id))
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        codec::read_i8(&mut self.source)
    }

    pub fn read_short(&mut self) -> Result<i16> {
        codec::read_i16(&mut self.source, Endian::Big)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        codec::read_i32(&mut self.source, Endian::Big)
    }

    pub fn read_long(&mut self) -> Result<i64> {
        codec::read_i64(&mut self.source, Endian::Big)
    }

    pub fn read_float(&mut self) -> Result<f32> {
        codec::read_f32(&mut self.source, Endian::Big)
    }

    pub fn read_double(&mut self) -> Result<f64> {
        codec::read_f64(&mut self.source, Endian::Big)
    }

    /// Read a length-prefixed modified-UTF-8 string.
    pub fn read_string(&mut self) -> Result<String> {
        codec::read_string(&mut self.source)
    }

    pub fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let len = self.read_length(Tag::ByteArray)?;
        codec::read_byte_array(&mut self.source, len)
            .map_err(|e| e.context("reading byte array contents"))
    }

    pub fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_length(Tag::IntArray)?;
        codec::read_int_array(&mut self.source, len, Endian::Big)
            .map_err(|e| e.context("reading int array contents"))
    }

    pub fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.read_length(Tag::LongArray)?;
        codec::read_long_array(&mut self.source, len, Endian::Big)
            .map_err(|e| e.context("reading long array contents"))
    }

    /// Read a list: length, content type, then that many unnamed values.
    ///
    /// A content type of `TAG_End` is only legal for an empty list, which
    /// then defaults its content type to `TAG_Byte` since no value kind
    /// exists for `TAG_End`.
    pub fn read_list(&mut self) -> Result<TagList> {
        let len = self.read_length(Tag::List)?;

        let content_type = self
            .read_tag()
            .map_err(|e| e.context("reading list content type"))?;

        if content_type == Tag::End {
            if len > 0 {
                return Err(Error::malformed(
                    "non-empty lists must specify a content type",
                ));
            }
            return Ok(TagList::new(Tag::Byte));
        }

        let mut list = TagList::new(content_type);
        for _ in 0..len {
            let value = self
                .read_value(content_type)
                .map_err(|e| e.context(format!("reading list element (t={content_type})")))?;
            list.push(value)?;
        }
        Ok(list)
    }

    /// Read (tag, name, value) triples until a `TAG_End` terminator.
    ///
    /// Entries are inserted as they are read, so a repeated name collapses
    /// to whichever entry came last.
    pub fn read_compound(&mut self) -> Result<TagCompound> {
        let mut compound = TagCompound::new();

        loop {
            let tag = self
                .read_tag()
                .map_err(|e| e.context("reading tag type in compound"))?;

            if tag == Tag::End {
                break;
            }

            let name = self
                .read_string()
                .map_err(|e| e.context(format!("reading tag name in compound (t={tag})")))?;

            let value = self.read_value(tag).map_err(|e| {
                e.context(format!("reading tag value in compound (t={tag}, n={name})"))
            })?;

            compound.insert_entry(Entry::new(tag, name, value)?);
        }

        Ok(compound)
    }

    /// Read one value of a known kind.
    fn read_value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            // Callers strip End tags before dispatching; an End here means a
            // caller outside this module asked for the impossible.
            Tag::End => return Err(Error::malformed("TAG_End does not carry a value")),
            Tag::Byte => Value::Byte(self.read_byte()?),
            Tag::Short => Value::Short(self.read_short()?),
            Tag::Int => Value::Int(self.read_int()?),
            Tag::Long => Value::Long(self.read_long()?),
            Tag::Float => Value::Float(self.read_float()?),
            Tag::Double => Value::Double(self.read_double()?),
            Tag::ByteArray => Value::ByteArray(self.read_byte_array()?),
            Tag::IntArray => Value::IntArray(self.read_int_array()?),
            Tag::LongArray => Value::LongArray(self.read_long_array()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
        })
    }

    /// Read the signed 4-byte length prefix shared by the array kinds and
    /// lists. A negative length is malformed data, not an input failure.
    fn read_length(&mut self, tag: Tag) -> Result<usize> {
        let len = self
            .read_int()
            .map_err(|e| e.context(format!("reading length of {tag}")))?;

        if len < 0 {
            return Err(Error::malformed(format!(
                "{tag} cannot have a negative length: {len}"
            )));
        }

        Ok(len as usize)
    }
}
