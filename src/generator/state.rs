use crate::schema::PropertyDefinition;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A `(type, format)` pair substituted for a named type during classification.
#[derive(Debug, Clone)]
pub struct TypeOverride {
    pub json_type: String,
    pub format: String,
}

/// Configurable schema generation entry point.
///
/// Holds the alias-override table consulted before the built-in scalar
/// classification, so callers can map domain-specific named types (say, a
/// `Money` alias) to a primitive `(type, format)` of their choice.
pub struct SchemaGenerator {
    pub type_overrides: HashMap<String, TypeOverride>,
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaGenerator {
    /// Create a generator with no alias overrides.
    pub fn new() -> Self {
        Self {
            type_overrides: HashMap::new(),
        }
    }

    /// Classify the named type as the given `(type, format)` primitive.
    pub fn with_override(mut self, type_name: &str, json_type: &str, format: &str) -> Self {
        self.type_overrides.insert(
            type_name.to_string(),
            TypeOverride {
                json_type: json_type.to_string(),
                format: format.to_string(),
            },
        );
        self
    }
}

/// Holds the state for one root-type walk.
///
/// Built fresh per invocation and discarded after assembly, so concurrent
/// callers never share mutable state.
pub(crate) struct GeneratorContext<'a> {
    /// Composite descriptors currently being expanded, keyed by allocation
    /// address. Used only to bound recursion on self-referential graphs.
    pub visited: HashSet<usize>,
    /// Hoisted definitions, at most one per distinct name.
    pub definitions: BTreeMap<String, PropertyDefinition>,
    /// Counter for synthesized anonymous-composite names.
    pub counter: usize,
    pub overrides: &'a HashMap<String, TypeOverride>,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(overrides: &'a HashMap<String, TypeOverride>) -> Self {
        Self {
            visited: HashSet::new(),
            definitions: BTreeMap::new(),
            counter: 0,
            overrides,
        }
    }
}
