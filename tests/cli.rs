#![cfg(feature = "cli")]
use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn cli_writes_event_schema() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("schemas");

    Command::cargo_bin("schematic")
        .unwrap()
        .arg("--path")
        .arg(out.to_str().unwrap())
        .assert()
        .success();

    let body = fs::read_to_string(out.join("event_name.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(json["title"], "Cute Event Name");
    assert_eq!(json["type"], "object");

    let required: Vec<&str> = json["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        required,
        vec![
            "tags",
            "field_string",
            "field_int",
            "field_float",
            "field_bool",
            "field_struct"
        ]
    );

    // The three-property tags composite is hoisted into $defs and referenced.
    assert_eq!(json["properties"]["tags"]["$ref"], "#/$defs/EventTags");
    assert_eq!(
        json["$defs"]["EventTags"]["properties"]["event_name"]["type"],
        "string"
    );

    assert_eq!(json["properties"]["field_slice"]["type"], "array");
    assert_eq!(json["properties"]["field_slice"]["items"]["type"], "string");
    assert_eq!(
        json["properties"]["field_struct"]["properties"]["field_int"]["type"],
        "integer"
    );
}
