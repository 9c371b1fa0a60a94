//! The compound tag: an unordered collection of named entries.

use crate::error::Result;
use crate::{Entry, Tag, TagList, Value};

#[cfg(not(feature = "preserve-order"))]
type Map = std::collections::HashMap<String, Entry>;

#[cfg(feature = "preserve-order")]
type Map = indexmap::IndexMap<String, Entry>;

#[cfg(not(feature = "preserve-order"))]
type Values<'a> = std::collections::hash_map::Values<'a, String, Entry>;

#[cfg(feature = "preserve-order")]
type Values<'a> = indexmap::map::Values<'a, String, Entry>;

/// An unordered set of NBT tags, each with a name unique within the
/// compound.
///
/// Inserting under a name that is already present replaces the old entry, so
/// the compound never holds two entries with the same name. Iteration order
/// is not part of the contract; with the `preserve-order` feature the
/// compound remembers insertion order, without it the order is whatever the
/// hash map produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagCompound {
    entries: Map,
}

impl TagCompound {
    /// Create a compound with no entries.
    pub fn new() -> Self {
        TagCompound::default()
    }

    /// The number of entries in the compound.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The names of the compound's direct children. Nested compounds keep
    /// their own names to themselves.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether any entry uses `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether an entry uses `name` and is of kind `tag`.
    pub fn contains_typed(&self, name: &str, tag: Tag) -> bool {
        self.tag_of(name) == Some(tag)
    }

    /// The kind of the entry under `name`, if there is one.
    pub fn tag_of(&self, name: &str) -> Option<Tag> {
        self.entries.get(name).map(Entry::tag)
    }

    /// The value under `name`, whatever its kind.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(Entry::value)
    }

    /// The value under `name`, only if its kind matches `tag`. The per-kind
    /// getters below cover the common cases without a tag argument.
    pub fn get_typed(&self, name: &str, tag: Tag) -> Option<&Value> {
        self.entries
            .get(name)
            .filter(|e| e.tag() == tag)
            .map(Entry::value)
    }

    /// The whole entry under `name`.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Assign `value` to `name`, coercing it to `tag`. Replaces any entry
    /// already using the name.
    pub fn insert(&mut self, name: impl Into<String>, tag: Tag, value: Value) -> Result<()> {
        self.insert_entry(Entry::new(tag, name, value)?);
        Ok(())
    }

    /// Insert an already-built entry, replacing any entry with the same
    /// name.
    pub fn insert_entry(&mut self, entry: Entry) {
        self.entries.insert(entry.name().to_owned(), entry);
    }

    /// Remove and return the entry under `name`, if there is one.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn byte(&self, name: &str) -> Option<i8> {
        self.get(name)?.as_byte()
    }

    pub fn short(&self, name: &str) -> Option<i16> {
        self.get(name)?.as_short()
    }

    pub fn int(&self, name: &str) -> Option<i32> {
        self.get(name)?.as_int()
    }

    pub fn long(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_long()
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.get(name)?.as_float()
    }

    pub fn double(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_double()
    }

    pub fn byte_array(&self, name: &str) -> Option<&[i8]> {
        self.get(name)?.as_byte_array()
    }

    pub fn int_array(&self, name: &str) -> Option<&[i32]> {
        self.get(name)?.as_int_array()
    }

    pub fn long_array(&self, name: &str) -> Option<&[i64]> {
        self.get(name)?.as_long_array()
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    /// The list under `name`, whatever its content type.
    pub fn list(&self, name: &str) -> Option<&TagList> {
        self.get(name)?.as_list()
    }

    /// The list under `name`, only if its content type is `content_type`.
    pub fn list_of(&self, name: &str, content_type: Tag) -> Option<&TagList> {
        self.list(name).filter(|l| l.content_type() == content_type)
    }

    pub fn compound(&self, name: &str) -> Option<&TagCompound> {
        self.get(name)?.as_compound()
    }
}

impl IntoIterator for TagCompound {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(|(_, e)| e)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<'a> IntoIterator for &'a TagCompound {
    type Item = &'a Entry;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
