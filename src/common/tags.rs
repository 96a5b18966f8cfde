use crate::common::names::to_snake_case;

/// A field tag parsed once per field, before any classification happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag {
    /// The external key the field is emitted under.
    pub key: String,
    /// The field carried an `omitempty` modifier.
    pub omit_if_empty: bool,
    /// The field is omitted from the schema entirely (`-` sentinel).
    pub skip: bool,
}

/// Parse a raw tag string for the field with the given declared identifier.
///
/// The tag is a comma-delimited modifier list whose first element is the
/// external key. A missing or empty key falls back to the snake_cased
/// identifier; a key of `-` marks the field as skipped.
pub fn parse_tag(tag: Option<&str>, field_name: &str) -> FieldTag {
    let raw = tag.unwrap_or("");

    if raw == "-" {
        return FieldTag {
            key: String::new(),
            omit_if_empty: false,
            skip: true,
        };
    }

    let mut parts = raw.split(',');
    let mut key = parts.next().unwrap_or("").to_string();
    if key.is_empty() {
        key = to_snake_case(field_name);
    }

    let omit_if_empty = parts.any(|modifier| modifier == "omitempty");

    FieldTag {
        key,
        omit_if_empty,
        skip: false,
    }
}
