use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SPEC: &str = r#"{
  "openapi": "3.0.3",
  "paths": {
    "/users/{id}": {
      "get": { "operationId": "get_user_by_id" }
    },
    "/items": {
      "get": { "operationId": "list_items" }
    }
  }
}"#;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_opcase"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run opcase")
}

#[test]
fn default_paths() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("openapi.json"), SPEC).unwrap();

    let out = run(tmp.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let written = fs::read_to_string(tmp.path().join("openapi_modified.json")).unwrap();
    assert!(written.contains("\"operationId\": \"getUserById\""));
    assert!(written.contains("\"operationId\": \"listItems\""));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Renamed 2 of 2 operationIds"));
}

#[test]
fn explicit_paths() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("api.json"), SPEC).unwrap();

    let out = run(tmp.path(), &["api.json", "api.camel.json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(tmp.path().join("api.camel.json").exists());
    assert!(!tmp.path().join("openapi_modified.json").exists());
}

#[test]
fn missing_input_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();

    let out = run(tmp.path(), &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("openapi.json"));
    assert!(!tmp.path().join("openapi_modified.json").exists());
}

#[test]
fn missing_operation_id_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("openapi.json"),
        r#"{"paths":{"/a":{"get":{"summary":"no id"}}}}"#,
    )
    .unwrap();

    let out = run(tmp.path(), &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("/paths/~1a/get/operationId"));
    assert!(!tmp.path().join("openapi_modified.json").exists());
}

#[test]
fn config_supplies_paths_and_case() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("spec.json"),
        r#"{"paths":{"/a":{"get":{"operationId":"get_ALL_things"}}}}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join(".opcase.yaml"),
        "input: spec.json\noutput: spec.out.json\nsegment_case: lowercase\n",
    )
    .unwrap();

    let out = run(tmp.path(), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let written = fs::read_to_string(tmp.path().join("spec.out.json")).unwrap();
    assert!(written.contains("\"getAllThings\""));
}

#[test]
fn init_writes_config_once() {
    let tmp = tempfile::tempdir().unwrap();

    let out = run(tmp.path(), &["init"]);
    assert!(out.status.success());
    let content = fs::read_to_string(tmp.path().join(".opcase.yaml")).unwrap();
    assert!(content.contains("segment_case: preserve"));

    let again = run(tmp.path(), &["init"]);
    assert!(!again.status.success());

    let forced = run(tmp.path(), &["init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn explicit_paths_ignore_default_config() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("api.json"), SPEC).unwrap();
    fs::write(tmp.path().join(".opcase.yaml"), "input: [unclosed\n").unwrap();

    let out = run(tmp.path(), &["api.json", "api.camel.json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(tmp.path().join("api.camel.json").exists());

    // Without explicit paths the default config is needed and its error surfaces.
    let defaulted = run(tmp.path(), &[]);
    assert!(!defaulted.status.success());
    assert!(String::from_utf8_lossy(&defaulted.stderr).contains(".opcase.yaml"));
}
