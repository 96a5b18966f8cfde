use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete JSON Schema document for one root type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub title: String,
    #[serde(rename = "type")]
    pub json_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    pub properties: BTreeMap<String, PropertyDefinition>,
    #[serde(rename = "$defs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, PropertyDefinition>,
}

/// A single property within a schema.
///
/// Every field is omitted from the serialized document when empty, so an
/// unconstrained ("any") property serializes with no `type` key at all, and a
/// `$ref` node carries nothing but the reference pointer and its description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyDefinition {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub json_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertyDefinition>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyDefinition>,
    #[serde(rename = "$ref", default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
}
