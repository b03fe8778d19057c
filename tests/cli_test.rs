use predicates::prelude::*;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const GREETER: &str = r#"
package demo

import "fmt"

type Greeter interface {
    Greet(name string) string
    Log(msg string)
}

type Closer interface {
    Close() error
}
"#;

fn imply(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imply"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn write_greeter(dir: &TempDir) -> String {
    let path = dir.path().join("greeter.go");
    std::fs::write(&path, GREETER).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_missing_source_prints_usage() {
    let output = imply(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Usage").eval(&stderr));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generates_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_greeter(&temp_dir);

    let output = imply(&[&source]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::starts_with("package demo\n").eval(&stdout));
    assert!(predicate::str::contains("type ImplGreeter struct{}").eval(&stdout));
    assert!(predicate::str::contains("func (i *ImplGreeter) Log(msg string) {\n}").eval(&stdout));
}

#[test]
fn test_positional_selectors() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_greeter(&temp_dir);

    let output = imply(&[&source, "Closer", "NopCloser", "democlose", "--receiver", "c"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::starts_with("package democlose\n").eval(&stdout));
    assert!(predicate::str::contains(
        "func (c *NopCloser) Close() error {\n\treturn nil\n}"
    )
    .eval(&stdout));
}

#[test]
fn test_empty_positional_falls_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_greeter(&temp_dir);

    let output = imply(&[&source, "Closer", ""]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(predicate::str::contains("type ImplCloser struct{}").eval(&stdout));
}

#[test]
fn test_interface_not_found_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_greeter(&temp_dir);

    let output = imply(&[&source, "Missing"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Interface not found").eval(&stderr));
}

#[test]
fn test_parse_error_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("broken.go");
    std::fs::write(&source, "package demo\n\ntype Broken interface {\n").unwrap();

    let output = imply(&[&source.to_string_lossy()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Error parsing file").eval(&stderr));
}

#[test]
fn test_output_file_and_config() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_greeter(&temp_dir);
    let config = temp_dir.path().join("imply.yaml");
    std::fs::write(
        &config,
        "version: \"1.0\"\ntarget:\n  interface: Greeter\nemit:\n  receiver: g\n  struct_prefix: Fake\n  prune_imports: true\n",
    )
    .unwrap();
    let target = temp_dir.path().join("out.go");

    let output = imply(&[
        &source,
        "--config",
        &config.to_string_lossy(),
        "--output",
        &target.to_string_lossy(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let generated = std::fs::read_to_string(Path::new(&target)).unwrap();
    assert!(generated.contains("func (g *FakeGreeter) Greet(name string) string {"));
    assert!(!generated.contains("import"));
}

#[test]
fn test_invalid_name_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_greeter(&temp_dir);

    let output = imply(&[&source, "Greeter", "not-an-ident"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Usage error").eval(&stderr));
}

#[test]
fn test_pruned_greeter_matches_documented_output() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("greeter.go");
    std::fs::write(
        &source,
        "package demo\n\nimport \"fmt\"\n\ntype Greeter interface {\n\tGreet(name string) string\n\tLog(msg string)\n}\n",
    )
    .unwrap();

    let output = imply(&[&source.to_string_lossy(), "--prune-imports"]);

    assert!(output.status.success());
    let expected = "package demo\n\
        \n\
        type ImplGreeter struct{}\n\
        \n\
        func (i *ImplGreeter) Greet(name string) string {\n\
        \treturn \"\"\n\
        }\n\
        \n\
        func (i *ImplGreeter) Log(msg string) {\n\
        }\n\
        \n";
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}
