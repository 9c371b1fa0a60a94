//! The list tag: an ordered sequence of unnamed values sharing one kind.

use crate::error::Result;
use crate::{Tag, TagCompound, Value};

/// An ordered collection of unnamed NBT values, all of the list's
/// [`content_type`][TagList::content_type].
///
/// The content type is fixed when the list is created and never changes,
/// even while the list is empty; an empty-but-typed list is meaningful on
/// the wire. Duplicate elements are allowed. Every inserted value is coerced
/// to the content type (see [`Value::coerce`]), so a list of `TAG_Long` fed
/// an int stores the widened long.
///
/// Out-of-range indices are a caller bug and panic, as they do on [`Vec`];
/// the `Result`s here are only ever about values of the wrong kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TagList {
    content_type: Tag,
    elements: Vec<Value>,
}

impl TagList {
    /// Create an empty list whose elements will all be `content_type`.
    pub fn new(content_type: Tag) -> Self {
        TagList {
            content_type,
            elements: Vec::new(),
        }
    }

    /// Create a list from existing values, coercing each to `content_type`.
    /// Fails without building the list if any value cannot be coerced.
    pub fn from_values(content_type: Tag, values: Vec<Value>) -> Result<Self> {
        let mut list = TagList::new(content_type);
        list.extend(values)?;
        Ok(list)
    }

    /// The kind shared by every element, fixed for the life of the list.
    pub fn content_type(&self) -> Tag {
        self.content_type
    }

    /// The number of elements in the list.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Replace the element at `index`, returning the old value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        let value = value.coerce(self.content_type)?;
        Ok(std::mem::replace(&mut self.elements[index], value))
    }

    /// Append a value at the end of the list.
    pub fn push(&mut self, value: Value) -> Result<()> {
        let value = value.coerce(self.content_type)?;
        self.elements.push(value);
        Ok(())
    }

    /// Insert a value at `index`, shifting later elements up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        let value = value.coerce(self.content_type)?;
        self.elements.insert(index, value);
        Ok(())
    }

    /// Append values in order. All of them are checked and coerced before
    /// any is added, so a failure leaves the list untouched.
    pub fn extend(&mut self, values: Vec<Value>) -> Result<()> {
        let coerced = self.coerce_all(values)?;
        self.elements.extend(coerced);
        Ok(())
    }

    /// Insert values in order starting at `index`, shifting later elements
    /// up. All-or-nothing in the same way as [`extend`][TagList::extend].
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_all(&mut self, index: usize, values: Vec<Value>) -> Result<()> {
        let coerced = self.coerce_all(values)?;
        self.elements.splice(index..index, coerced);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Value {
        self.elements.remove(index)
    }

    /// Remove a single instance of `value`, if present. Returns whether an
    /// element was removed.
    pub fn remove_value(&mut self, value: &Value) -> bool {
        match self.elements.iter().position(|e| e == value) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.elements.contains(value)
    }

    /// Whether every supplied value has at least one equal element in the
    /// list.
    pub fn contains_all<'a>(&self, values: impl IntoIterator<Item = &'a Value>) -> bool {
        values.into_iter().all(|v| self.contains(v))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    fn coerce_all(&self, values: Vec<Value>) -> Result<Vec<Value>> {
        values
            .into_iter()
            .map(|v| v.coerce(self.content_type))
            .collect()
    }

    pub fn byte(&self, index: usize) -> Option<i8> {
        self.get(index)?.as_byte()
    }

    pub fn short(&self, index: usize) -> Option<i16> {
        self.get(index)?.as_short()
    }

    pub fn int(&self, index: usize) -> Option<i32> {
        self.get(index)?.as_int()
    }

    pub fn long(&self, index: usize) -> Option<i64> {
        self.get(index)?.as_long()
    }

    pub fn float(&self, index: usize) -> Option<f32> {
        self.get(index)?.as_float()
    }

    pub fn double(&self, index: usize) -> Option<f64> {
        self.get(index)?.as_double()
    }

    pub fn byte_array(&self, index: usize) -> Option<&[i8]> {
        self.get(index)?.as_byte_array()
    }

    pub fn int_array(&self, index: usize) -> Option<&[i32]> {
        self.get(index)?.as_int_array()
    }

    pub fn long_array(&self, index: usize) -> Option<&[i64]> {
        self.get(index)?.as_long_array()
    }

    pub fn string(&self, index: usize) -> Option<&str> {
        self.get(index)?.as_str()
    }

    pub fn list(&self, index: usize) -> Option<&TagList> {
        self.get(index)?.as_list()
    }

    pub fn compound(&self, index: usize) -> Option<&TagCompound> {
        self.get(index)?.as_compound()
    }
}

impl IntoIterator for TagList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
