//! Scalar cell values yielded by record fields.
//!
//! A [`CellValue`] is the common currency between field accessors and the
//! layout pass: every renderable field produces one, and its `Display`
//! impl defines the canonical string form that widths are measured against.

use serde::{Deserialize, Serialize};

/// A scalar value that a record field can yield.
///
/// Only simple scalars are representable; nested or collection-valued
/// fields have no variant on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A string value
    Str(String),
    /// A single character
    Char(char),
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    Uint(u64),
    /// A floating-point number
    Float(f64),
    /// A boolean
    Bool(bool),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CellValue::Str(v) => v.clone(),
            CellValue::Char(v) => v.to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Uint(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Bool(v) => v.to_string(),
        };

        // Respect width and alignment from the formatter; cells are
        // left-justified unless the caller asks otherwise.
        if let Some(width) = f.width() {
            if f.align() == Some(std::fmt::Alignment::Right) {
                write!(f, "{:>width$}", s, width = width)
            } else {
                write!(f, "{:<width$}", s, width = width)
            }
        } else {
            f.write_str(&s)
        }
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Str(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Str(v.to_string())
    }
}

impl From<char> for CellValue {
    fn from(v: char) -> Self {
        CellValue::Char(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i8> for CellValue {
    fn from(v: i8) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i16> for CellValue {
    fn from(v: i16) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u8> for CellValue {
    fn from(v: u8) -> Self {
        CellValue::Uint(v.into())
    }
}

impl From<u16> for CellValue {
    fn from(v: u16) -> Self {
        CellValue::Uint(v.into())
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Uint(v.into())
    }
}

impl From<u64> for CellValue {
    fn from(v: u64) -> Self {
        CellValue::Uint(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(v.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}
