//! # schematic
//!
//! Generate [JSON Schema](https://json-schema.org/) documents from
//! caller-supplied type descriptors.
//!
//! ## Features
//!
//! - Recursive traversal of composite types, with cycle bounding for
//!   self-referential type graphs
//! - Required-key derivation from field tags (`omitempty`, `-` skip sentinel)
//! - Reusable sub-schemas hoisted into `$defs` and referenced via `$ref`
//! - Closed scalar classification table plus an injectable alias-override
//!   table for domain-specific named types
//! - Batch file writer and CLI tool `schematic` (behind the `cli` feature)
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use schematic::descriptor::{FieldDescriptor, TypeDescriptor};
//! use schematic::generator::generate_schema;
//!
//! let event = TypeDescriptor::composite(
//!     "Event",
//!     vec![
//!         FieldDescriptor::with_tag("Name", &TypeDescriptor::string(), "name"),
//!         FieldDescriptor::new("Labels", &TypeDescriptor::sequence(&TypeDescriptor::string())),
//!         FieldDescriptor::new("Retries", &TypeDescriptor::pointer(&TypeDescriptor::int())),
//!     ],
//! );
//!
//! let schema = generate_schema(&event, "Event", "http://json-schema.org/draft-07/schema#");
//!
//! // Sequences and pointers are optional; plain scalars are required.
//! assert_eq!(schema.required, vec!["name"]);
//! assert_eq!(schema.properties["labels"].json_type, "array");
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! schematic --path /tmp/schemas/
//! ```
//!
//! ## Crate Layout
//!
//! - [`descriptor`] — Type descriptor model and builder API
//! - [`schema`] — Serializable `Schema` / `PropertyDefinition` output types
//! - [`common`] — Name conversion and field-tag parsing helpers
//! - [`generator`] — The recursive schema-building core
//! - [`writer`] — Batch schema file writer
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod common;
pub mod descriptor;
pub mod generator;
pub mod schema;
pub mod writer;
