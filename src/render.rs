//! Emission of a measured table to a text sink.
//!
//! The sink is any [`std::io::Write`]; rows are written synchronously in
//! order (header, separator, one row per record). Validation happens
//! before the first write, so a rejected call produces no output. A write
//! failure mid-emission propagates immediately and rows already written
//! stay written; there is no rollback.

use std::io::Write;

use crate::error::TableError;
use crate::field::{Field, Record};
use crate::table::{Column, Table};
use crate::Result;

/// Render a collection of records, discovering fields via [`Record`].
///
/// Fails with [`TableError::EmptyCollection`] if `records` has no
/// elements; field discovery itself never fails, even for a type with
/// zero fields.
pub fn render_table<T, W>(records: &[T], sink: &mut W) -> Result<()>
where
    T: Record,
    W: Write,
{
    render_table_with(records, &T::fields(), sink)
}

/// Render a collection of records with an explicit field descriptor list.
pub fn render_table_with<T, W>(records: &[T], fields: &[Field<T>], sink: &mut W) -> Result<()>
where
    W: Write,
{
    if records.is_empty() {
        return Err(TableError::EmptyCollection);
    }

    let table = Table::build(records, fields);

    write_row(
        sink,
        table.columns.iter().map(|c| c.name.as_str()),
        &table.columns,
    )?;
    write_separator(sink, &table.columns)?;
    for row in &table.rows {
        write_row(sink, row.iter().map(String::as_str), &table.columns)?;
    }

    Ok(())
}

/// Render to an owned `String`, discovering fields via [`Record`].
pub fn render_to_string<T: Record>(records: &[T]) -> Result<String> {
    render_to_string_with(records, &T::fields())
}

/// Render to an owned `String` with an explicit field descriptor list.
pub fn render_to_string_with<T>(records: &[T], fields: &[Field<T>]) -> Result<String> {
    let mut buf = Vec::new();
    render_table_with(records, fields, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write one `| cell | cell |` row, each cell left-justified to its
/// column width. With zero columns this emits a bare `|`.
fn write_row<'a, W, I>(sink: &mut W, cells: I, columns: &[Column]) -> Result<()>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    for (cell, column) in cells.zip(columns) {
        write!(sink, "| {:<width$} ", cell, width = column.width)?;
    }
    writeln!(sink, "|")?;
    Ok(())
}

/// Write the `+----+----+` separator row; each segment is `width + 2`
/// dashes to cover the cell padding.
fn write_separator<W: Write>(sink: &mut W, columns: &[Column]) -> Result<()> {
    for column in columns {
        write!(sink, "+{}", "-".repeat(column.width + 2))?;
    }
    writeln!(sink, "+")?;
    Ok(())
}
