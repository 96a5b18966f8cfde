use crate::common::tags::parse_tag;
use crate::descriptor::{FieldDescriptor, TypeDescriptor, TypeKind};
use crate::generator::classify::{classify, deref, Classified};
use crate::generator::definitions::{hoist_definition, should_hoist};
use crate::generator::required::required_keys;
use crate::generator::state::GeneratorContext;
use crate::schema::PropertyDefinition;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Recursively build the property mapping and required keys for one type.
///
/// Dispatches on the structural kind: sequences and pointers unwrap to their
/// composite element (pointer-to-sequence-of-composite behaves like the plain
/// sequence), composites enumerate their fields, and everything else yields an
/// empty mapping. The `branch` counter tracks the depth of the current
/// composite descent chain; see [`enter`] for the cycle policy.
pub(crate) fn build_properties(
    ctx: &mut GeneratorContext<'_>,
    ty: &Arc<TypeDescriptor>,
    branch: usize,
) -> (BTreeMap<String, PropertyDefinition>, Vec<String>) {
    let mut properties = BTreeMap::new();

    match &ty.kind {
        TypeKind::Sequence(element) => {
            if let Some(element) = element.resolve() {
                let element = deref(&element);
                if element.is_composite() && enter(ctx, &element, branch) {
                    properties = walk_fields(ctx, &element, branch);
                }
            }
        }
        TypeKind::Composite(_) => {
            if enter(ctx, ty, branch) {
                properties = walk_fields(ctx, ty, branch);
            }
        }
        TypeKind::Pointer(target) => {
            if let Some(target) = target.resolve() {
                // A pointer to a sequence of composites expands like the
                // sequence itself.
                let unwrapped = match &target.kind {
                    TypeKind::Sequence(element) => element.resolve(),
                    _ => Some(target.clone()),
                };
                if let Some(target) = unwrapped {
                    if target.is_composite() && enter(ctx, &target, branch) {
                        properties = walk_fields(ctx, &target, branch);
                    }
                }
            }
        }
        _ => {}
    }

    let required = required_keys(ty);

    (properties, required)
}

/// Cycle policy: descend into a composite unless it is already being expanded
/// and the current branch counter exceeds 1.
///
/// Each field descends with its parent call's counter plus one, so siblings
/// all restart from the parent's depth; only a genuine self-reference chain
/// trips the guard, while siblings that merely share a previously-seen type
/// still expand fully.
fn enter(ctx: &mut GeneratorContext<'_>, ty: &Arc<TypeDescriptor>, branch: usize) -> bool {
    let addr = Arc::as_ptr(ty) as usize;
    if ctx.visited.contains(&addr) && branch > 1 {
        return false;
    }
    ctx.visited.insert(addr);
    true
}

/// Enumerate a composite's fields in declaration order and build one property
/// per non-skipped field under its resolved external key.
fn walk_fields(
    ctx: &mut GeneratorContext<'_>,
    ty: &Arc<TypeDescriptor>,
    branch: usize,
) -> BTreeMap<String, PropertyDefinition> {
    let mut properties = BTreeMap::new();

    let TypeKind::Composite(fields) = &ty.kind else {
        return properties;
    };

    for field in fields {
        let tag = parse_tag(field.tag.as_deref(), &field.name);
        if tag.skip {
            continue;
        }

        let property = build_field_property(ctx, field, branch);
        properties.insert(tag.key, property);
    }

    properties
}

fn build_field_property(
    ctx: &mut GeneratorContext<'_>,
    field: &FieldDescriptor,
    branch: usize,
) -> PropertyDefinition {
    let Some(field_ty) = field.ty.resolve() else {
        tracing::warn!(field = field.name.as_str(), "dangling type reference");
        return PropertyDefinition {
            description: field.name.clone(),
            ..Default::default()
        };
    };

    let info = classify(&field_ty, ctx.overrides);

    let mut nested = BTreeMap::new();
    let mut nested_required = Vec::new();
    if !info.terminal {
        (nested, nested_required) = build_properties(ctx, &field_ty, branch + 1);
    }

    if should_hoist(&field_ty, &nested) {
        return hoist_definition(ctx, field, &field_ty, nested, nested_required);
    }

    if info.is_array {
        array_property(field, &info, nested, nested_required)
    } else {
        object_property(field, &info, nested, nested_required)
    }
}

/// Wrap a sequence field's nested properties as its item schema. The item
/// type is forced to `"object"` whenever nested properties exist.
fn array_property(
    field: &FieldDescriptor,
    info: &Classified,
    nested: BTreeMap<String, PropertyDefinition>,
    nested_required: Vec<String>,
) -> PropertyDefinition {
    let item_type = if nested.is_empty() {
        info.item_type.clone()
    } else {
        "object".to_string()
    };

    let items = PropertyDefinition {
        json_type: item_type,
        description: field.name.clone(),
        format: info.item_format.clone(),
        required: nested_required,
        properties: nested,
        ..Default::default()
    };

    PropertyDefinition {
        json_type: "array".to_string(),
        description: field.name.clone(),
        items: Some(Box::new(items)),
        ..Default::default()
    }
}

/// Build a non-sequence field's property. Nested properties force the type
/// keyword to `"object"`; terminal fields keep their classified type, which
/// for opaque fields is empty and therefore omitted on the wire.
fn object_property(
    field: &FieldDescriptor,
    info: &Classified,
    nested: BTreeMap<String, PropertyDefinition>,
    nested_required: Vec<String>,
) -> PropertyDefinition {
    let json_type = if !nested.is_empty() && info.json_type != "array" {
        "object".to_string()
    } else {
        info.json_type.clone()
    };

    PropertyDefinition {
        json_type,
        description: field.name.clone(),
        format: info.format.clone(),
        required: nested_required,
        properties: nested,
        ..Default::default()
    }
}
