use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::generator::state::GeneratorContext;
use crate::schema::PropertyDefinition;
use std::collections::BTreeMap;

/// Decide whether a composite field's schema should be hoisted into `$defs`
/// and referenced, instead of inlined.
///
/// Only direct composite fields qualify (pointer- and sequence-shaped fields
/// stay inline), and only when they carry more than two nested properties.
pub(crate) fn should_hoist(
    field_ty: &TypeDescriptor,
    nested: &BTreeMap<String, PropertyDefinition>,
) -> bool {
    nested.len() > 2 && field_ty.is_composite()
}

/// Store the nested schema under the composite's name (at most once per
/// distinct name) and return a `$ref` node pointing at it.
///
/// Anonymous composites receive a synthesized unique name. The reference node
/// carries nothing but the pointer and the field's documentation label.
pub(crate) fn hoist_definition(
    ctx: &mut GeneratorContext<'_>,
    field: &FieldDescriptor,
    field_ty: &TypeDescriptor,
    nested: BTreeMap<String, PropertyDefinition>,
    nested_required: Vec<String>,
) -> PropertyDefinition {
    let name = match &field_ty.name {
        Some(name) => name.clone(),
        None => {
            let synthesized = format!("AnonymousStruct{}", ctx.counter);
            ctx.counter += 1;
            synthesized
        }
    };

    if !ctx.definitions.contains_key(&name) {
        ctx.definitions.insert(
            name.clone(),
            PropertyDefinition {
                json_type: "object".to_string(),
                description: field.name.clone(),
                required: nested_required,
                properties: nested,
                ..Default::default()
            },
        );
    }

    PropertyDefinition {
        description: field.name.clone(),
        reference: format!("#/$defs/{name}"),
        ..Default::default()
    }
}
