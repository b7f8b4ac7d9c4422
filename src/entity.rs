//! The entity tables the reference expander resolves against.

use std::collections::HashMap;

/// A declared entity as seen by the tokenizer: a name bound to replacement
/// text.
///
/// External entities whose replacement text has not been resolved have no
/// representation here; resolving them is the business of the layer that
/// fills the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: Box<str>,
    replacement_text: Box<str>,
}

impl Entity {
    pub fn new(name: impl Into<Box<str>>, replacement_text: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            replacement_text: replacement_text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The replacement text this entity expands to.
    pub fn node_value(&self) -> &str {
        &self.replacement_text
    }
}

/// Read access to the parameter-entity and general-entity tables.
///
/// The tokenizer only ever reads through this trait; whoever consumes the
/// emitted [`EntityDecl`](crate::token::DTDToken::EntityDecl) tokens is
/// expected to populate the tables between calls to the tokenizer.
pub trait EntityContainer {
    /// Look up a parameter entity (`%name;`) by name, without the `%`.
    fn get_parameter(&self, name: &str) -> Option<&Entity>;

    /// Look up a general entity (`&name;`) by name.
    fn get_entity(&self, name: &str) -> Option<&Entity>;
}

/// A [`EntityContainer`] backed by hash maps.
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    parameters: HashMap<Box<str>, Entity>,
    entities: HashMap<Box<str>, Entity>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter entity.
    ///
    /// If the same entity is declared more than once, the first declaration
    /// encountered is binding (4.2 Entity Declarations); returns `false`
    /// when the declaration was ignored for that reason.
    pub fn declare_parameter(
        &mut self,
        name: impl Into<Box<str>>,
        replacement_text: impl Into<Box<str>>,
    ) -> bool {
        let name: Box<str> = name.into();
        match self.parameters.entry(name.clone()) {
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(Entity::new(name, replacement_text));
                true
            }
            std::collections::hash_map::Entry::Occupied(_) => false,
        }
    }

    /// Register a general entity. The first declaration wins, as for
    /// [`declare_parameter`](EntityTable::declare_parameter).
    pub fn declare_entity(
        &mut self,
        name: impl Into<Box<str>>,
        replacement_text: impl Into<Box<str>>,
    ) -> bool {
        let name: Box<str> = name.into();
        match self.entities.entry(name.clone()) {
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(Entity::new(name, replacement_text));
                true
            }
            std::collections::hash_map::Entry::Occupied(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.parameters.clear();
        self.entities.clear();
    }
}

impl EntityContainer for EntityTable {
    fn get_parameter(&self, name: &str) -> Option<&Entity> {
        self.parameters.get(name)
    }

    fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declaration_binding_tests() {
        let mut table = EntityTable::new();
        assert!(table.declare_parameter("draft", "INCLUDE"));
        assert!(!table.declare_parameter("draft", "IGNORE"));
        assert_eq!(table.get_parameter("draft").unwrap().node_value(), "INCLUDE");

        assert!(table.declare_entity("copy", "\u{a9}"));
        assert!(!table.declare_entity("copy", "(c)"));
        assert_eq!(table.get_entity("copy").unwrap().node_value(), "\u{a9}");

        // the two tables are disjoint namespaces
        assert!(table.get_entity("draft").is_none());
        assert!(table.get_parameter("copy").is_none());
    }
}
