//! The owned value carried by a single tag.

use crate::error::{Error, Result};
use crate::{Tag, TagCompound, TagList};

/// A complete NBT value of any kind. It owns its data.
///
/// Unlike a serde-style value, the array kinds stay distinct from lists of
/// the same element type, so a decoded tree can always tell a
/// `TAG_Int_Array` from a `TAG_List` of `TAG_Int`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    String(String),
    List(TagList),
    Compound(TagCompound),
}

/// A numeric value reduced to the widest integer or float container,
/// so one conversion path covers every pair of numeric kinds.
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Value {
    /// The tag kind this value is a native representation of.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// Convert this value into a native representation of `target`.
    ///
    /// A value already of the target kind is returned as-is without copying.
    /// Numeric kinds convert freely between each other, array kinds convert
    /// element by element, and strings, lists and compounds only accept
    /// themselves. Anything else fails with an invalid-value error.
    pub fn coerce(self, target: Tag) -> Result<Value> {
        if self.tag() == target {
            return Ok(self);
        }

        if !target.accepts(self.tag()) {
            return Err(Error::invalid_value(target, self.tag()));
        }

        Ok(if target.is_numeric() {
            self.coerce_numeric(target)
        } else {
            self.coerce_array(target)
        })
    }

    // Callers have already checked the coercion table; both kinds are
    // numeric and differ.
    fn coerce_numeric(self, target: Tag) -> Value {
        let n = match self {
            Value::Byte(v) => Numeric::Int(v as i64),
            Value::Short(v) => Numeric::Int(v as i64),
            Value::Int(v) => Numeric::Int(v as i64),
            Value::Long(v) => Numeric::Int(v),
            Value::Float(v) => Numeric::Float(v as f64),
            Value::Double(v) => Numeric::Float(v),
            _ => unreachable!("checked numeric"),
        };

        match target {
            Tag::Byte => Value::Byte(match n {
                Numeric::Int(v) => v as i8,
                Numeric::Float(v) => v as i8,
            }),
            Tag::Short => Value::Short(match n {
                Numeric::Int(v) => v as i16,
                Numeric::Float(v) => v as i16,
            }),
            Tag::Int => Value::Int(match n {
                Numeric::Int(v) => v as i32,
                Numeric::Float(v) => v as i32,
            }),
            Tag::Long => Value::Long(match n {
                Numeric::Int(v) => v,
                Numeric::Float(v) => v as i64,
            }),
            Tag::Float => Value::Float(match n {
                Numeric::Int(v) => v as f32,
                Numeric::Float(v) => v as f32,
            }),
            Tag::Double => Value::Double(match n {
                Numeric::Int(v) => v as f64,
                Numeric::Float(v) => v,
            }),
            _ => unreachable!("checked numeric"),
        }
    }

    // Same deal: both kinds are arrays and differ.
    fn coerce_array(self, target: Tag) -> Value {
        match (self, target) {
            (Value::ByteArray(v), Tag::IntArray) => {
                Value::IntArray(v.into_iter().map(|e| e as i32).collect())
            }
            (Value::ByteArray(v), Tag::LongArray) => {
                Value::LongArray(v.into_iter().map(|e| e as i64).collect())
            }
            (Value::IntArray(v), Tag::ByteArray) => {
                Value::ByteArray(v.into_iter().map(|e| e as i8).collect())
            }
            (Value::IntArray(v), Tag::LongArray) => {
                Value::LongArray(v.into_iter().map(|e| e as i64).collect())
            }
            (Value::LongArray(v), Tag::ByteArray) => {
                Value::ByteArray(v.into_iter().map(|e| e as i8).collect())
            }
            (Value::LongArray(v), Tag::IntArray) => {
                Value::IntArray(v.into_iter().map(|e| e as i32).collect())
            }
            _ => unreachable!("checked array"),
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Value::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TagList> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&TagCompound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}
