use crate::common::tags::parse_tag;
use crate::descriptor::{TypeDescriptor, TypeKind};

/// The one external key whose pointer-shaped fields are still required.
/// A hard-coded domain convention, deliberately not generalized.
const FORCED_REQUIRED_KEY: &str = "tags";

/// Derive the set of mandatory external keys for a composite type.
///
/// Unwraps one pointer level; any non-composite type yields an empty set.
/// A field is excluded when it is skipped, sequence-shaped (sequences are
/// always optional), opaque, or carries an `omitempty` modifier. Pointer
/// fields are excluded by default, except the reserved `tags` key, which is
/// required even when marked `omitempty`.
pub fn required_keys(ty: &TypeDescriptor) -> Vec<String> {
    if let TypeKind::Pointer(target) = &ty.kind {
        return match target.resolve() {
            Some(target) => composite_required(&target),
            None => Vec::new(),
        };
    }
    composite_required(ty)
}

fn composite_required(ty: &TypeDescriptor) -> Vec<String> {
    let TypeKind::Composite(fields) = &ty.kind else {
        return Vec::new();
    };

    let mut required = Vec::new();

    for field in fields {
        let tag = parse_tag(field.tag.as_deref(), &field.name);
        if tag.skip {
            continue;
        }

        let Some(field_ty) = field.ty.resolve() else {
            continue;
        };

        match &field_ty.kind {
            TypeKind::Sequence(_) => {}
            TypeKind::Opaque => {}
            TypeKind::Pointer(_) => {
                if tag.key == FORCED_REQUIRED_KEY {
                    required.push(tag.key);
                }
            }
            _ => {
                if !tag.omit_if_empty {
                    required.push(tag.key);
                }
            }
        }
    }

    required
}
