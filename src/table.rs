//! Measured table layout.
//!
//! This module provides [`Table`], the presentation-ready structure built
//! from a record collection and its field descriptors. The data flow is:
//!
//! 1. Records + field descriptors (caller input)
//! 2. `Table::build` (one measuring pass, cell text cached)
//! 3. Row emission (the `render` module)
//!
//! `Table` is pure layout data: column headers with computed widths and
//! the stringified cells, ready for emission or JSON serialization. No
//! formatting decisions live here.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A column paired with its computed display width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column header (the field name)
    pub name: String,
    /// Display width: max of the header length and every cell length
    pub width: usize,
}

/// The measured table: columns and stringified data rows.
///
/// Columns correspond 1:1, in order, to the field descriptors the table
/// was built from, and every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers with computed widths
    pub columns: Vec<Column>,
    /// One row of display strings per record, in collection order
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Measure a record collection against its field descriptors.
    ///
    /// Each accessor is evaluated exactly once per (record, field) pair;
    /// the stringified values are kept as the row cells, so emission
    /// reuses them instead of re-running accessors that may be computed
    /// properties. A column is never narrower than its header.
    pub fn build<T>(records: &[T], fields: &[Field<T>]) -> Self {
        let mut columns: Vec<Column> = fields
            .iter()
            .map(|field| Column {
                name: field.name().to_string(),
                width: field.name().chars().count(),
            })
            .collect();

        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let mut cells = Vec::with_capacity(fields.len());
            for (field, column) in fields.iter().zip(columns.iter_mut()) {
                let text = field.display(record);
                // Chars, not bytes: `{:<width$}` pads by character count.
                column.width = column.width.max(text.chars().count());
                cells.push(text);
            }
            rows.push(cells);
        }

        Table { columns, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: &'static str,
        age: u32,
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Al",
                age: 30,
            },
            Person {
                name: "Bo",
                age: 5,
            },
        ]
    }

    fn person_fields() -> Vec<Field<Person>> {
        vec![
            Field::new("Name", |p: &Person| p.name),
            Field::new("Age", |p: &Person| p.age),
        ]
    }

    #[test]
    fn test_widths_cover_header_and_values() {
        let table = Table::build(&people(), &person_fields());
        // "Name" (4) beats "Al"/"Bo" (2); "Age" (3) beats "30"/"5"
        assert_eq!(table.columns[0].width, 4);
        assert_eq!(table.columns[1].width, 3);
        for column in &table.columns {
            assert!(column.width >= column.name.chars().count());
        }
        for row in &table.rows {
            for (cell, column) in row.iter().zip(&table.columns) {
                assert!(column.width >= cell.chars().count());
            }
        }
    }

    #[test]
    fn test_wide_value_stretches_column() {
        let records = vec![Person {
            name: "Bartholomew",
            age: 41,
        }];
        let table = Table::build(&records, &person_fields());
        assert_eq!(table.columns[0].width, "Bartholomew".len());
    }

    #[test]
    fn test_rows_cache_display_text_in_order() {
        let table = Table::build(&people(), &person_fields());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["Al", "30"]);
        assert_eq!(table.rows[1], ["Bo", "5"]);
    }

    #[test]
    fn test_every_row_matches_column_count() {
        let table = Table::build(&people(), &person_fields());
        for row in &table.rows {
            assert_eq!(row.len(), table.columns.len());
        }
    }

    #[test]
    fn test_zero_fields_degenerate() {
        let fields: Vec<Field<Person>> = Vec::new();
        let table = Table::build(&people(), &fields);
        assert!(table.columns.is_empty());
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_serialize_to_json() {
        let table = Table::build(&people(), &person_fields());
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][0]["name"], "Name");
        assert_eq!(json["columns"][0]["width"], 4);
        assert_eq!(json["rows"][1][0], "Bo");
    }
}
