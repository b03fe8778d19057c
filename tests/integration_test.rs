use imply::{Config, Imply, ImplyError};
use std::path::Path;
use tempfile::TempDir;

const STORE_SOURCE: &str = r#"
package store

import (
    "context"
    "time"
    apierrors "k8s.io/apimachinery/pkg/api/errors"
)

// User is a stored user
type User struct {
    Name string
}

// Cache is not the first interface
type Cache interface {
    Get(key string) ([]byte, bool)
    Set(key string, value []byte, ttl time.Duration)
}

type Store interface {
    Get(ctx context.Context, id int64) (*User, error)
    Count() int
    Touch(ctx context.Context) (time.Time, apierrors.Error)
}
"#;

fn write_source(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_generation_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        &temp_dir,
        "greeter.go",
        r#"
package demo

import "fmt"

type Greeter interface {
    Greet(name string) string
    Log(msg string)
}
"#,
    );

    let app = Imply::new(Config::default()).unwrap();
    let output = app.generate_file(&source).unwrap();

    let expected = "package demo\n\
        \n\
        import (\n\
        \t\"fmt\"\n\
        )\n\
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
    assert_eq!(output, expected);
}

#[test]
fn test_first_interface_is_default() {
    let app = Imply::new(Config::default()).unwrap();
    let output = app
        .generate_source(STORE_SOURCE, Path::new("store.go"))
        .unwrap();

    assert!(output.contains("type ImplCache struct{}"));
    assert!(output.contains(
        "func (i *ImplCache) Get(key string) ([]byte, bool) {\n\treturn nil, false\n}"
    ));
    assert!(output.contains(
        "func (i *ImplCache) Set(key string, value []byte, ttl time.Duration) {\n}"
    ));
    assert!(!output.contains("Count"));
}

#[test]
fn test_selected_interface_with_overrides() {
    let mut config = Config::default();
    config.target.interface = Some("Store".to_string());
    config.target.struct_name = Some("FakeStore".to_string());
    config.target.package = Some("storetest".to_string());

    let app = Imply::new(config).unwrap();
    let output = app
        .generate_source(STORE_SOURCE, Path::new("store.go"))
        .unwrap();

    assert!(output.starts_with("package storetest\n\n"));
    assert!(output.contains("\tapierrors \"k8s.io/apimachinery/pkg/api/errors\"\n"));
    assert!(output.contains("\t\"context\"\n"));
    assert!(output.contains("type FakeStore struct{}"));

    let methods: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("func "))
        .collect();
    assert_eq!(
        methods,
        vec![
            "func (i *FakeStore) Get(ctx context.Context, id int64) (*User, error) {",
            "func (i *FakeStore) Count() int {",
            "func (i *FakeStore) Touch(ctx context.Context) (time.Time, apierrors.Error) {",
        ]
    );
    assert!(output.contains("\treturn nil, nil\n"));
    assert!(output.contains("\treturn 0\n"));
    assert!(output.contains("\treturn time.Time{}, nil\n"));
}

#[test]
fn test_prune_imports() {
    let mut config = Config::default();
    config.target.interface = Some("Cache".to_string());
    config.emit.prune_imports = true;

    let app = Imply::new(config).unwrap();
    let output = app
        .generate_source(STORE_SOURCE, Path::new("store.go"))
        .unwrap();

    assert!(output.contains("import (\n\t\"time\"\n)\n"));
    assert!(!output.contains("context"));
}

#[test]
fn test_interface_not_found() {
    let mut config = Config::default();
    config.target.interface = Some("User".to_string());

    let app = Imply::new(config).unwrap();
    let err = app
        .generate_source(STORE_SOURCE, Path::new("store.go"))
        .unwrap_err();

    assert!(matches!(err, ImplyError::InterfaceNotFound { .. }));
    assert_eq!(err.to_string(), "Interface not found: User");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let app = Imply::new(Config::default()).unwrap();

    let err = app
        .generate_file(&temp_dir.path().join("missing.go"))
        .unwrap_err();
    assert!(matches!(err, ImplyError::Io { .. }));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = Config::default();
    config.emit.receiver = "not valid".to_string();

    assert!(matches!(Imply::new(config), Err(ImplyError::Config(_))));
}

#[test]
fn test_function_local_interface_is_selectable() {
    let mut config = Config::default();
    config.target.interface = Some("Local".to_string());

    let app = Imply::new(config).unwrap();
    let output = app
        .generate_source(
            "package demo\n\nfunc helper() {\n\ttype Local interface {\n\t\tHidden() int\n\t}\n}\n",
            Path::new("local.go"),
        )
        .unwrap();

    assert_eq!(
        output,
        "package demo\n\ntype ImplLocal struct{}\n\nfunc (i *ImplLocal) Hidden() int {\n\treturn 0\n}\n\n"
    );
}
