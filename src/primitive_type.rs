//! Primitive JSON types and a compact set representation for the `type` keyword.
use serde_json::Value;
use std::{convert::TryFrom, fmt, ops::BitOrAssign};

/// For faster checks in the "type" keyword validator we operate on this
/// enum and a bit mask over it instead of strings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PrimitiveType {
    /// JSON array.
    Array,
    /// JSON boolean.
    Boolean,
    /// A number without a fractional part.
    Integer,
    /// JSON null.
    Null,
    /// Any JSON number.
    Number,
    /// JSON object.
    Object,
    /// JSON string.
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => f.write_str("array"),
            PrimitiveType::Boolean => f.write_str("boolean"),
            PrimitiveType::Integer => f.write_str("integer"),
            PrimitiveType::Null => f.write_str("null"),
            PrimitiveType::Number => f.write_str("number"),
            PrimitiveType::Object => f.write_str("object"),
            PrimitiveType::String => f.write_str("string"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(()),
        }
    }
}

impl From<&Value> for PrimitiveType {
    fn from(instance: &Value) -> Self {
        match instance {
            Value::Null => PrimitiveType::Null,
            Value::Bool(_) => PrimitiveType::Boolean,
            Value::Number(_) => PrimitiveType::Number,
            Value::String(_) => PrimitiveType::String,
            Value::Array(_) => PrimitiveType::Array,
            Value::Object(_) => PrimitiveType::Object,
        }
    }
}

const fn bit_map_index(type_: PrimitiveType) -> u8 {
    match type_ {
        PrimitiveType::Array => 0,
        PrimitiveType::Boolean => 1,
        PrimitiveType::Integer => 2,
        PrimitiveType::Null => 3,
        PrimitiveType::Number => 4,
        PrimitiveType::Object => 5,
        PrimitiveType::String => 6,
    }
}

/// A set of primitive types encoded in a single byte.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct PrimitiveTypesBitMap {
    inner: u8,
}

impl PrimitiveTypesBitMap {
    pub(crate) const fn new() -> Self {
        PrimitiveTypesBitMap { inner: 0 }
    }

    #[must_use]
    pub(crate) const fn add_type(mut self, type_: PrimitiveType) -> Self {
        self.inner |= 1 << bit_map_index(type_);
        self
    }

    pub(crate) const fn contains_type(self, type_: PrimitiveType) -> bool {
        self.inner & (1 << bit_map_index(type_)) != 0
    }
}

impl BitOrAssign<PrimitiveType> for PrimitiveTypesBitMap {
    fn bitor_assign(&mut self, type_: PrimitiveType) {
        *self = self.add_type(type_);
    }
}

impl IntoIterator for PrimitiveTypesBitMap {
    type Item = PrimitiveType;
    type IntoIter = PrimitiveTypesBitMapIterator;
    fn into_iter(self) -> Self::IntoIter {
        PrimitiveTypesBitMapIterator {
            range: 0..7,
            bit_map: self,
        }
    }
}

/// Iterator over types stored in [`PrimitiveTypesBitMap`].
#[derive(Debug)]
pub struct PrimitiveTypesBitMapIterator {
    range: std::ops::Range<u8>,
    bit_map: PrimitiveTypesBitMap,
}

impl Iterator for PrimitiveTypesBitMapIterator {
    type Item = PrimitiveType;
    fn next(&mut self) -> Option<Self::Item> {
        for idx in self.range.by_ref() {
            let type_ = match idx {
                0 => PrimitiveType::Array,
                1 => PrimitiveType::Boolean,
                2 => PrimitiveType::Integer,
                3 => PrimitiveType::Null,
                4 => PrimitiveType::Number,
                5 => PrimitiveType::Object,
                6 => PrimitiveType::String,
                _ => unreachable!("Bit map size is 7"),
            };
            if self.bit_map.contains_type(type_) {
                return Some(type_);
            }
        }
        None
    }
}
