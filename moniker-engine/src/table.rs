//! The well-known type mapping table.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Curated naming overrides for specific types, applied ahead of the general
/// casing and abbreviation rules.
///
/// The table is an explicit immutable value: build it once, hand it to a
/// [`NameProposer`](crate::NameProposer), and share it freely across threads.
/// Keys are exact type names after interface-prefix stripping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellKnownTypes {
    /// Types whose plain camel-cased form is suppressed, usually because a
    /// mapped short name reads better (`id` over `guid`).
    pub filtered: IndexSet<String>,

    /// Preferred short name for a type, e.g. `Guid -> "id"`.
    pub names: IndexMap<String, String>,

    /// Suffixes combined with a token the user already typed, e.g.
    /// `Guid -> ["Id"]` so a `Foo` prefix proposes `FooId`.
    pub suffixes: IndexMap<String, Vec<String>>,
}

impl WellKnownTypes {
    /// The mappings shipped with the engine.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.names.insert("Guid".into(), "id".into());
        table.names.insert("Uuid".into(), "id".into());
        table.suffixes.insert("Guid".into(), vec!["Id".into()]);
        table.suffixes.insert("Uuid".into(), vec!["Id".into()]);
        table
            .suffixes
            .insert("int".into(), vec!["Length".into(), "Count".into()]);
        table.filtered.insert("Guid".into());
        table.filtered.insert("Uuid".into());
        table
    }

    /// Overlay `other` onto this table. Entries from `other` win on key
    /// collision; suffix lists replace rather than append.
    pub fn extend_with(&mut self, other: WellKnownTypes) {
        for (type_name, name) in other.names {
            self.names.insert(type_name, name);
        }
        for (type_name, suffixes) in other.suffixes {
            self.suffixes.insert(type_name, suffixes);
        }
        for type_name in other.filtered {
            self.filtered.insert(type_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mappings() {
        let table = WellKnownTypes::builtin();
        assert_eq!(table.names.get("Guid").map(String::as_str), Some("id"));
        assert_eq!(table.suffixes.get("int").map(Vec::len), Some(2));
        assert!(table.filtered.contains("Guid"));
    }

    #[test]
    fn test_extend_with_overrides() {
        let mut table = WellKnownTypes::builtin();
        let mut overlay = WellKnownTypes::default();
        overlay.names.insert("Guid".into(), "key".into());
        overlay.suffixes.insert("int".into(), vec!["Index".into()]);
        overlay.filtered.insert("Task".into());

        table.extend_with(overlay);

        assert_eq!(table.names.get("Guid").map(String::as_str), Some("key"));
        assert_eq!(table.suffixes.get("int").unwrap(), &["Index"]);
        assert!(table.filtered.contains("Task"));
        assert!(table.filtered.contains("Guid"));
    }
}
