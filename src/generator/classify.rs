use crate::descriptor::{ScalarKind, TypeDescriptor, TypeKind};
use crate::generator::state::TypeOverride;
use std::collections::HashMap;
use std::sync::Arc;

/// The outcome of classifying one type.
///
/// `terminal` means no further recursive expansion is needed. For sequences,
/// `item_type`/`item_format` capture the element classification used when
/// building the item schema.
#[derive(Debug, Clone, Default)]
pub(crate) struct Classified {
    pub json_type: String,
    pub format: String,
    pub terminal: bool,
    pub is_array: bool,
    pub item_type: String,
    pub item_format: String,
}

impl Classified {
    fn terminal(json_type: &str, format: &str) -> Self {
        Self {
            json_type: json_type.to_string(),
            format: format.to_string(),
            terminal: true,
            ..Default::default()
        }
    }
}

/// Map a type's structural identity to a schema primitive, or signal that the
/// walker must expand it.
pub(crate) fn classify(
    ty: &TypeDescriptor,
    overrides: &HashMap<String, TypeOverride>,
) -> Classified {
    // Alias-override table wins over structural classification.
    if let Some(name) = &ty.name {
        if let Some(ov) = overrides.get(name) {
            return Classified::terminal(&ov.json_type, &ov.format);
        }
    }

    // Byte blobs resolve before generic sequence handling, so they never
    // become arrays.
    if is_byte_blob(ty) {
        return Classified::terminal("string", "byte");
    }

    match &ty.kind {
        TypeKind::Scalar(kind) => {
            let (json_type, format) = scalar_primitive(*kind);
            Classified::terminal(json_type, format)
        }
        TypeKind::Map => Classified::terminal("object", ""),
        TypeKind::Channel | TypeKind::Function => Classified::terminal("string", ""),
        TypeKind::Opaque => Classified::terminal("", ""),
        TypeKind::Composite(_) => Classified {
            json_type: "object".to_string(),
            terminal: false,
            ..Default::default()
        },
        TypeKind::Sequence(element) => {
            let mut classified = Classified {
                json_type: "array".to_string(),
                is_array: true,
                terminal: true,
                ..Default::default()
            };
            if let Some(element) = element.resolve() {
                let element = deref(&element);
                if element.is_composite() {
                    classified.item_type = "object".to_string();
                    classified.terminal = false;
                } else {
                    let item = classify(&element, overrides);
                    classified.item_type = item.json_type;
                    classified.item_format = item.format;
                }
            }
            classified
        }
        TypeKind::Pointer(target) => match target.resolve() {
            Some(target) if target.is_composite() => Classified {
                json_type: "object".to_string(),
                terminal: false,
                ..Default::default()
            },
            Some(target) => classify(&target, overrides),
            // Dangling back-edge: nothing left to describe.
            None => Classified::terminal("", ""),
        },
    }
}

/// Unwrap one pointer level, if any.
pub(crate) fn deref(ty: &Arc<TypeDescriptor>) -> Arc<TypeDescriptor> {
    if let TypeKind::Pointer(target) = &ty.kind {
        if let Some(target) = target.resolve() {
            return target;
        }
    }
    ty.clone()
}

/// A sequence of unsigned bytes.
fn is_byte_blob(ty: &TypeDescriptor) -> bool {
    if let TypeKind::Sequence(element) = &ty.kind {
        if let Some(element) = element.resolve() {
            return matches!(element.kind, TypeKind::Scalar(ScalarKind::Uint8));
        }
    }
    false
}

fn scalar_primitive(kind: ScalarKind) -> (&'static str, &'static str) {
    match kind {
        ScalarKind::String => ("string", ""),
        ScalarKind::Bool => ("boolean", ""),
        ScalarKind::Float32 | ScalarKind::Float64 => ("number", ""),
        ScalarKind::Int
        | ScalarKind::Int8
        | ScalarKind::Int16
        | ScalarKind::Int32
        | ScalarKind::Int64
        | ScalarKind::Uint
        | ScalarKind::Uint8
        | ScalarKind::Uint16
        | ScalarKind::Uint32
        | ScalarKind::Uint64 => ("integer", ""),
        ScalarKind::Timestamp => ("string", "date-time"),
        ScalarKind::Uuid => ("string", "uuid"),
    }
}
