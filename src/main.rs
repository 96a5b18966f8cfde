use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use schematic::descriptor::{FieldDescriptor, TypeDescriptor};
use schematic::generator::generate_schema;
use schematic::schema::Schema;
use schematic::writer::write_schemas;

#[derive(Parser)]
#[command(name = "schematic", about = "Generate JSON Schema files for event payload types")]
struct Cli {
    /// Directory where the generated schema files are written
    #[arg(long, default_value = "/tmp/schemas/")]
    path: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = write_schemas(&cli.path, &event_schemas()) {
        tracing::error!(error = %err, "schema generation failed");
        return ExitCode::FAILURE;
    }

    tracing::info!(path = %cli.path.display(), "schemas generated");
    ExitCode::SUCCESS
}

/// The event-envelope schema map written by the CLI.
fn event_schemas() -> BTreeMap<String, Schema> {
    let tags = TypeDescriptor::composite(
        "EventTags",
        vec![
            FieldDescriptor::with_tag("EventName", &TypeDescriptor::string(), "event_name"),
            FieldDescriptor::with_tag("EventVersion", &TypeDescriptor::string(), "event_version"),
            FieldDescriptor::with_tag("EventID", &TypeDescriptor::string(), "event_id"),
        ],
    );

    let detail = TypeDescriptor::composite(
        "EventDetail",
        vec![
            FieldDescriptor::with_tag("FieldString", &TypeDescriptor::string(), "field_string"),
            FieldDescriptor::with_tag("FieldInt", &TypeDescriptor::int(), "field_int"),
        ],
    );

    let event = TypeDescriptor::composite(
        "Event",
        vec![
            FieldDescriptor::with_tag("Tags", &tags, "tags"),
            FieldDescriptor::with_tag("FieldString", &TypeDescriptor::string(), "field_string"),
            FieldDescriptor::with_tag("FieldInt", &TypeDescriptor::int(), "field_int"),
            FieldDescriptor::with_tag("FieldFloat", &TypeDescriptor::float64(), "field_float"),
            FieldDescriptor::with_tag("FieldBool", &TypeDescriptor::boolean(), "field_bool"),
            FieldDescriptor::with_tag(
                "FieldSlice",
                &TypeDescriptor::sequence(&TypeDescriptor::string()),
                "field_slice",
            ),
            FieldDescriptor::with_tag("FieldStruct", &detail, "field_struct"),
            FieldDescriptor::with_tag(
                "FieldPtr",
                &TypeDescriptor::pointer(&TypeDescriptor::string()),
                "field_ptr",
            ),
            FieldDescriptor::with_tag(
                "FieldPtrSlice",
                &TypeDescriptor::sequence(&TypeDescriptor::pointer(&TypeDescriptor::string())),
                "field_ptr_slice",
            ),
            FieldDescriptor::with_tag(
                "FieldPtrStruct",
                &TypeDescriptor::pointer(&detail),
                "field_ptr_struct",
            ),
        ],
    );

    let mut schemas = BTreeMap::new();
    schemas.insert(
        "event.name".to_string(),
        generate_schema(
            &event,
            "Cute Event Name",
            "http://json-schema.org/draft-07/schema#",
        ),
    );
    schemas
}
