//! # rectab
//!
//! Render a homogeneous collection of records as a fixed-width,
//! ASCII-bordered table, written to any text sink.
//!
//! ## Overview
//!
//! A record type's renderable state is described by an ordered list of
//! [`Field`] descriptors (name + scalar accessor), supplied either
//! directly or through the [`Record`] trait. One measuring pass computes
//! each column's width as the max of the header length and every
//! stringified value's length, caching the cell text; emission then
//! writes a header row, a `+---+` separator, and one left-justified data
//! row per record.
//!
//! - **Explicit fields, no reflection**: descriptors are plain closures
//! - **Scalars only**: numbers, strings, chars, bools ([`CellValue`])
//! - **Absent values render empty**: `None` becomes a blank cell
//! - **Validation before output**: an empty collection fails without
//!   writing a single byte
//!
//! ## Example
//!
//! ```rust
//! use rectab::{render_to_string_with, Field};
//!
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let fields = vec![
//!     Field::new("Name", |p: &Person| p.name),
//!     Field::new("Age", |p: &Person| p.age),
//! ];
//! let people = [
//!     Person { name: "Al", age: 30 },
//!     Person { name: "Bo", age: 5 },
//! ];
//!
//! let out = render_to_string_with(&people, &fields).unwrap();
//! assert_eq!(
//!     out,
//!     "| Name | Age |\n\
//!      +------+-----+\n\
//!      | Al   | 30  |\n\
//!      | Bo   | 5   |\n"
//! );
//! ```

pub mod error;
pub mod field;
pub mod render;
pub mod table;
pub mod value;

pub use error::TableError;
pub use field::{Field, Record};
pub use render::{render_table, render_table_with, render_to_string, render_to_string_with};
pub use table::{Column, Table};
pub use value::CellValue;

/// Result type for rectab operations
pub type Result<T> = std::result::Result<T, TableError>;
