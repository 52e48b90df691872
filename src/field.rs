//! Field descriptors: named, ordered accessors into a record type.
//!
//! This is the stand-in for the runtime reflection the renderer would use
//! in a language that has it. A record type's renderable state is described
//! by an ordered list of [`Field`]s, supplied either directly by the caller
//! (the `_with` render operations) or through the [`Record`] trait, which
//! record types implement to return their descriptors in declaration order.
//!
//! One descriptor list serves both the width-measurement pass and the
//! emission pass, so field order is identical in the two by construction.

use crate::value::CellValue;

/// A named accessor that yields one scalar cell per record.
pub struct Field<T> {
    name: String,
    get: Box<dyn Fn(&T) -> Option<CellValue>>,
}

impl<T> Field<T> {
    /// Create a field whose accessor always yields a value.
    pub fn new<F, V>(name: impl Into<String>, get: F) -> Self
    where
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue>,
    {
        Self {
            name: name.into(),
            get: Box::new(move |record| Some(get(record).into())),
        }
    }

    /// Create a field whose accessor may yield nothing.
    ///
    /// An absent value renders as an empty cell, not a placeholder.
    pub fn optional<F, V>(name: impl Into<String>, get: F) -> Self
    where
        F: Fn(&T) -> Option<V> + 'static,
        V: Into<CellValue>,
    {
        Self {
            name: name.into(),
            get: Box::new(move |record| get(record).map(Into::into)),
        }
    }

    /// The column header for this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the accessor for one record and return the display text.
    ///
    /// Absent values map to the empty string.
    pub fn display(&self, record: &T) -> String {
        match (self.get)(record) {
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Record types that can describe their own renderable fields.
///
/// Implementations return descriptors in declaration order; the list must
/// be the same on every call.
pub trait Record {
    /// The ordered field descriptors for this type.
    fn fields() -> Vec<Field<Self>>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: String,
        age: u32,
        nickname: Option<String>,
    }

    fn sample() -> Person {
        Person {
            name: "Al".to_string(),
            age: 30,
            nickname: None,
        }
    }

    #[test]
    fn test_field_name() {
        let field = Field::new("Age", |p: &Person| p.age);
        assert_eq!(field.name(), "Age");
    }

    #[test]
    fn test_display_present_value() {
        let field = Field::new("Name", |p: &Person| p.name.clone());
        assert_eq!(field.display(&sample()), "Al");

        let field = Field::new("Age", |p: &Person| p.age);
        assert_eq!(field.display(&sample()), "30");
    }

    #[test]
    fn test_display_absent_value_is_empty() {
        let field = Field::optional("Nickname", |p: &Person| p.nickname.clone());
        assert_eq!(field.display(&sample()), "");
    }

    #[test]
    fn test_record_trait_declaration_order() {
        impl Record for Person {
            fn fields() -> Vec<Field<Self>> {
                vec![
                    Field::new("Name", |p: &Person| p.name.clone()),
                    Field::new("Age", |p: &Person| p.age),
                    Field::optional("Nickname", |p: &Person| p.nickname.clone()),
                ]
            }
        }

        let fields = Person::fields();
        let names: Vec<&str> = fields.iter().map(Field::name).collect();
        assert_eq!(names, ["Name", "Age", "Nickname"]);
    }

    #[test]
    fn test_debug_shows_name() {
        let field = Field::new("Age", |p: &Person| p.age);
        assert!(format!("{:?}", field).contains("Age"));
    }
}
