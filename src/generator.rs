pub mod classify;
pub mod definitions;
pub mod required;
pub mod state;
pub mod walker;

pub use required::required_keys;
pub use state::{SchemaGenerator, TypeOverride};

use crate::descriptor::TypeDescriptor;
use crate::schema::{PropertyDefinition, Schema};
use state::GeneratorContext;
use std::collections::BTreeMap;
use std::sync::Arc;

impl SchemaGenerator {
    /// Build a complete JSON Schema for the given type descriptor.
    ///
    /// The dialect URL and title are set verbatim, the root type is always
    /// `"object"`, and the hoisted-definitions table is attached only when
    /// non-empty. A non-composite root degrades to empty property and required
    /// sets.
    pub fn generate_schema(
        &self,
        ty: &Arc<TypeDescriptor>,
        title: &str,
        schema_url: &str,
    ) -> Schema {
        let mut ctx = GeneratorContext::new(&self.type_overrides);
        let (properties, required) = walker::build_properties(&mut ctx, ty, 0);

        Schema {
            schema: schema_url.to_string(),
            title: title.to_string(),
            json_type: "object".to_string(),
            required,
            properties,
            definitions: ctx.definitions,
        }
    }

    /// Build only the property mapping for the given type descriptor.
    pub fn generate_properties(
        &self,
        ty: &Arc<TypeDescriptor>,
    ) -> BTreeMap<String, PropertyDefinition> {
        let mut ctx = GeneratorContext::new(&self.type_overrides);
        let (properties, _) = walker::build_properties(&mut ctx, ty, 0);
        properties
    }
}

/// Build a complete JSON Schema with default generator settings.
///
/// ```
/// use schematic::descriptor::{FieldDescriptor, TypeDescriptor};
/// use schematic::generator::generate_schema;
///
/// let event = TypeDescriptor::composite(
///     "Event",
///     vec![
///         FieldDescriptor::new("EventName", &TypeDescriptor::string()),
///         FieldDescriptor::with_tag("Payload", &TypeDescriptor::opaque(), "payload,omitempty"),
///     ],
/// );
///
/// let schema = generate_schema(&event, "Example", "http://json-schema.org/draft-07/schema#");
/// assert_eq!(schema.required, vec!["event_name"]);
/// assert!(schema.properties.contains_key("payload"));
/// ```
pub fn generate_schema(ty: &Arc<TypeDescriptor>, title: &str, schema_url: &str) -> Schema {
    SchemaGenerator::new().generate_schema(ty, title, schema_url)
}

/// Build only the property mapping with default generator settings.
pub fn generate_properties(ty: &Arc<TypeDescriptor>) -> BTreeMap<String, PropertyDefinition> {
    SchemaGenerator::new().generate_properties(ty)
}
