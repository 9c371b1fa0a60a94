//! Decoding of the modified UTF-8 flavour used by NBT strings.
//!
//! The encoding is byte-oriented: the length prefix counts bytes, not
//! characters, and every group of 1, 2 or 3 bytes produces one UTF-16 code
//! unit. Characters outside the basic multilingual plane appear as two
//! 3-byte groups forming a surrogate pair. This is close to, but not the
//! same as, standard UTF-8: `NUL` is encoded as a 2-byte group and 4-byte
//! sequences never occur.
//!
//! Malformed groups are classified as input failures rather than malformed
//! data, matching how string corruption has always surfaced from this
//! format's decoders.

use crate::error::{Error, Result};

/// Decode `bytes` as modified UTF-8. The entire slice is consumed; the
/// number of bytes decoded always equals `bytes.len()` exactly.
pub(crate) fn decode(bytes: &[u8]) -> Result<String> {
    // One code unit per group, so never more units than bytes.
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b1 = bytes[i] as u32;
        i += 1;

        let unit = match b1 >> 4 {
            // 0xxxxxxx: the byte's own value is the code unit.
            0x0..=0x7 => b1,

            // 110xxxxx 10xxxxxx
            0xC | 0xD => {
                let b2 = continuation(bytes, &mut i, "second")?;
                (b1 & 0x1F) << 6 | (b2 & 0x3F)
            }

            // 1110xxxx 10xxxxxx 10xxxxxx
            0xE => {
                let b2 = continuation(bytes, &mut i, "second")?;
                let b3 = continuation(bytes, &mut i, "third")?;
                (b1 & 0x0F) << 12 | (b2 & 0x3F) << 6 | (b3 & 0x3F)
            }

            _ => {
                return Err(Error::input(format!(
                    "first byte of group at offset {} has the wrong MSBs",
                    i - 1
                )))
            }
        };

        units.push(unit as u16);
    }

    String::from_utf16(&units)
        .map_err(|_| Error::input("string data contains an unpaired surrogate"))
}

/// Pull the next continuation byte of a group, checking its two high bits
/// are `10`.
fn continuation(bytes: &[u8], i: &mut usize, which: &str) -> Result<u32> {
    let b = *bytes
        .get(*i)
        .ok_or_else(|| Error::input("string data ended inside a multi-byte group"))?;
    *i += 1;

    if b & 0b1100_0000 != 0b1000_0000 {
        return Err(Error::input(format!(
            "{which} byte of group ending at offset {} has the wrong MSBs",
            *i - 1
        )));
    }

    Ok(b as u32)
}
