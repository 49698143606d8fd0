//! Decoding files from a temporary resource directory.

use std::fs;

use serde::Deserialize;
use tempfile::TempDir;
use trove_resource::{DecodeOptions, KeyStrategy, ResourceDir, ResourceError};

#[derive(Debug, Deserialize, PartialEq)]
struct Rating {
    title: String,
    stars: u8,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Emitter {
    particle_count: u32,
    max_speed: f64,
    fade_out: bool,
}

fn fixture(files: &[(&str, &str)]) -> (TempDir, ResourceDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        fs::write(path, contents).expect("failed to write fixture");
    }
    let resources = ResourceDir::new(dir.path());
    (dir, resources)
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn decodes_list() {
    let (_dir, resources) = fixture(&[(
        "ratings.json",
        r#"[{"title":"Dune","stars":5},{"title":"Solaris","stars":4}]"#,
    )]);

    let ratings: Vec<Rating> = resources.decode("ratings.json").unwrap();
    assert_eq!(
        ratings,
        vec![
            Rating { title: "Dune".into(), stars: 5 },
            Rating { title: "Solaris".into(), stars: 4 },
        ]
    );
}

#[test]
fn decodes_nested_path() {
    let (_dir, resources) = fixture(&[("data/one.json", r#"{"title":"x","stars":1}"#)]);

    let rating: Rating = resources.decode("data/one.json").unwrap();
    assert_eq!(rating.stars, 1);
}

#[test]
fn converts_camel_case_keys() {
    let (_dir, resources) = fixture(&[(
        "emitter.json",
        r#"{"particleCount":200,"maxSpeed":3.5,"fadeOut":true}"#,
    )]);

    let options = DecodeOptions::new().key_strategy(KeyStrategy::ConvertFromCamelCase);
    let emitter: Emitter = resources.decode_with("emitter.json", &options).unwrap();
    assert_eq!(
        emitter,
        Emitter {
            particle_count: 200,
            max_speed: 3.5,
            fade_out: true,
        }
    );

    // Without conversion the snake-case fields are missing.
    let err = resources.decode::<Emitter>("emitter.json").unwrap_err();
    assert!(matches!(err, ResourceError::Data { .. }));
}

#[test]
fn read_returns_raw_bytes() {
    let (_dir, resources) = fixture(&[("raw.json", "[]")]);
    assert_eq!(resources.read("raw.json").unwrap(), b"[]");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_file_is_not_found() {
    let (_dir, resources) = fixture(&[]);

    let err = resources.decode::<Rating>("nope.json").unwrap_err();
    assert!(matches!(err, ResourceError::NotFound { .. }));
    assert_eq!(err.name(), "nope.json");
    assert!(err.to_string().starts_with("failed to locate nope.json in "));
}

#[test]
fn directory_is_not_a_resource() {
    let (_dir, resources) = fixture(&[("sub/file.json", "{}")]);

    let err = resources.locate("sub").unwrap_err();
    assert!(matches!(err, ResourceError::NotFound { .. }));
}

#[test]
fn escaping_root_is_refused() {
    let outer = tempfile::tempdir().unwrap();
    fs::write(outer.path().join("secret.json"), "{}").unwrap();
    fs::create_dir(outer.path().join("root")).unwrap();

    let resources = ResourceDir::new(outer.path().join("root"));

    for name in ["../secret.json", "", "./../secret.json"] {
        let err = resources.locate(name).unwrap_err();
        assert!(matches!(err, ResourceError::NotFound { .. }), "{name:?}");
    }

    let absolute = outer.path().join("secret.json");
    let err = resources.locate(absolute.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ResourceError::NotFound { .. }));
}

#[cfg(unix)]
#[test]
fn symlink_out_of_root_is_refused() {
    use std::os::unix::fs::symlink;

    let outer = tempfile::tempdir().unwrap();
    fs::write(outer.path().join("secret.json"), "{}").unwrap();
    let root = outer.path().join("root");
    fs::create_dir_all(root.join("inner")).unwrap();
    fs::write(root.join("inner/real.json"), "[]").unwrap();

    symlink(outer.path().join("secret.json"), root.join("leak.json")).unwrap();
    symlink(outer.path(), root.join("up")).unwrap();
    symlink(root.join("inner/real.json"), root.join("alias.json")).unwrap();

    let resources = ResourceDir::new(&root);
    for name in ["leak.json", "up/secret.json"] {
        let err = resources.locate(name).unwrap_err();
        assert!(matches!(err, ResourceError::NotFound { .. }), "{name:?}");
    }

    // Links that stay inside the root still resolve.
    let items: Vec<u8> = resources.decode("alias.json").unwrap();
    assert!(items.is_empty());
}

#[test]
fn malformed_json_is_syntax() {
    let (_dir, resources) = fixture(&[("bad.json", r#"{"title": "x", "stars": "#)]);

    let err = resources.decode::<Rating>("bad.json").unwrap_err();
    assert!(matches!(err, ResourceError::Syntax { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn malformed_json_is_syntax_with_key_conversion() {
    let (_dir, resources) = fixture(&[("bad.json", "not json")]);

    let options = DecodeOptions::new().key_strategy(KeyStrategy::ConvertFromCamelCase);
    let err = resources.decode_with::<Rating>("bad.json", &options).unwrap_err();
    assert!(matches!(err, ResourceError::Syntax { .. }));
}

#[test]
fn missing_key_is_data() {
    let (_dir, resources) = fixture(&[("partial.json", r#"{"title":"x"}"#)]);

    let err = resources.decode::<Rating>("partial.json").unwrap_err();
    assert!(matches!(err, ResourceError::Data { .. }));
    assert!(err.to_string().contains("missing field `stars`"));
}

#[test]
fn type_mismatch_is_data() {
    let (_dir, resources) = fixture(&[("wrong.json", r#"{"title":"x","stars":"five"}"#)]);

    let err = resources.decode::<Rating>("wrong.json").unwrap_err();
    assert!(matches!(err, ResourceError::Data { .. }));
    assert!(err.to_string().starts_with("failed to decode wrong.json: "));
}

#[test]
fn null_value_is_data() {
    let (_dir, resources) = fixture(&[("null.json", r#"{"title":null,"stars":1}"#)]);

    let err = resources.decode::<Rating>("null.json").unwrap_err();
    assert!(matches!(err, ResourceError::Data { .. }));
}

#[test]
fn errors_expose_source() {
    use std::error::Error as _;

    let (_dir, resources) = fixture(&[("bad.json", "[")]);
    let err = resources.decode::<Vec<u8>>("bad.json").unwrap_err();
    assert!(err.source().is_some());
}
