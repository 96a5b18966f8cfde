use crate::schema::Schema;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced while writing generated schemas to disk.
///
/// Each variant wraps its source error and names the offending path or schema
/// so a batch failure is attributable. The batch is abandoned on the first
/// failure; nothing is retried.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create schema directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize schema {title}")]
    Serialize {
        title: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write schema file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write one `.json` file per schema into `path`, creating the directory
/// recursively if it does not exist.
///
/// Each schema is serialized with two-space indentation, under a file named by
/// replacing `.` with `_` in its map key and appending `.json`.
pub fn write_schemas(
    path: impl AsRef<Path>,
    schemas: &BTreeMap<String, Schema>,
) -> Result<(), WriteError> {
    let dir = path.as_ref();

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    for (name, schema) in schemas {
        let body =
            serde_json::to_string_pretty(schema).map_err(|source| WriteError::Serialize {
                title: schema.title.clone(),
                source,
            })?;

        let file = dir.join(schema_file_name(name));
        tracing::debug!(schema = name.as_str(), file = %file.display(), "writing schema");
        fs::write(&file, body).map_err(|source| WriteError::Write { path: file, source })?;
    }

    Ok(())
}

fn schema_file_name(name: &str) -> String {
    format!("{}.json", name.replace('.', "_"))
}
