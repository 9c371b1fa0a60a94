//! deepnbt decodes NBT data from *Minecraft: Java Edition* into a typed,
//! queryable tag tree. The game uses this format to store things like world
//! data and player inventories.
//!
//! * For the decoding entry points see [`from_bytes`] and [`from_reader`].
//! * For the tree itself see [`TagCompound`], [`TagList`], [`Entry`] and
//!   [`Value`].
//! * For driving the decoder by hand over your own byte source, see [`de`].
//!
//! Input may be uncompressed, gzip-compressed or zlib-compressed; the
//! compression is sniffed from the leading bytes, so no flag needs to be
//! passed alongside the data.
//!
//! # Quick example
//!
//! Reading the data version and spawn point out of a world's `level.dat`,
//! which is gzip compressed on disk. The decoder notices that on its own:
//!
//! ```no_run
//! use deepnbt::error::Result;
//!
//! fn main() -> Result<()> {
//!     let data = std::fs::read("level.dat").unwrap();
//!
//!     let root = deepnbt::from_bytes(&data)?;
//!     let level = root.compound("Data").expect("level.dat has a Data compound");
//!
//!     println!(
//!         "version {:?}, spawn at x = {:?}",
//!         level.int("DataVersion"),
//!         level.int("SpawnX"),
//!     );
//!     Ok(())
//! }
//! ```
//!
//! Every tag in the tree knows its own [`Tag`] kind, so data with no known
//! structure can still be walked by matching on [`Value`].

pub mod de;
pub mod error;
pub mod source;

mod codec;
mod compound;
mod compression;
mod entry;
mod list;
mod mutf8;
mod value;

pub use compound::TagCompound;
pub use de::{from_bytes, from_reader, Decoder};
pub use entry::Entry;
pub use list::TagList;
pub use value::Value;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

/// An NBT tag kind. This does not carry the value or the name of the data.
///
/// The discriminant of each variant is the identifier the kind is encoded
/// with on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Marks the end of a Compound, and carries no value.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A modified-UTF-8 string.
    String = 8,
    /// An ordered list of values sharing a single content type.
    List = 9,
    /// A struct-like collection of named values.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate these conversions, but the tags will very rarely
// change, so writing them out saves the compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl Tag {
    /// True for the six scalar numeric kinds.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Tag::Byte | Tag::Short | Tag::Int | Tag::Long | Tag::Float | Tag::Double
        )
    }

    /// True for the three array kinds.
    pub fn is_array(self) -> bool {
        matches!(self, Tag::ByteArray | Tag::IntArray | Tag::LongArray)
    }

    /// Whether a value of kind `source` can be used to construct a value of
    /// this kind. Numeric kinds accept each other, array kinds accept each
    /// other, everything else only accepts itself. `End` accepts nothing.
    pub fn accepts(self, source: Tag) -> bool {
        if self == Tag::End {
            return false;
        }

        self == source
            || (self.is_numeric() && source.is_numeric())
            || (self.is_array() && source.is_array())
    }
}

impl fmt::Display for Tag {
    /// Writes the conventional name of the kind: `TAG_Byte`,
    /// `TAG_Long_Array`, and so on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
            Tag::LongArray => "TAG_Long_Array",
        };
        f.write_str(name)
    }
}
