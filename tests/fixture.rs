//! End-to-end tests for the fixture pipeline, run in-process with seeded
//! generators.

use json_fixture::{
    generate_fixture_with, sidecar_path, FixtureGenerator, FixturePath, FixtureValue,
};
use tempfile::TempDir;

/// Recursively check the value shape contract: strings are 10 alphanumeric
/// chars, integers sit in [0, 1000] (array elements are drawn from the
/// narrower [0, 100]), and keys are 10 alphanumeric chars at every level.
fn assert_leaf_shapes(value: &FixtureValue) {
    match value {
        FixtureValue::String(s) => {
            assert_eq!(s.len(), 10);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
        FixtureValue::Integer(i) => assert!((0..=1000).contains(i)),
        FixtureValue::Array(items) => items.iter().for_each(assert_leaf_shapes),
        FixtureValue::Object(map) => {
            for (key, child) in map {
                assert_eq!(key.len(), 10);
                assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
                assert_leaf_shapes(child);
            }
        }
    }
}

#[test]
fn generated_file_meets_size_and_shape_contract() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let mut generator = FixtureGenerator::from_seed(42);
    let report = generate_fixture_with(&mut generator, &path, 5_000).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.len() >= 5_000);
    assert_eq!(report.metrics.document_bytes, content.len() as u64);

    // Valid JSON with an object at the top level
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(parsed.is_object());

    let root: FixtureValue = serde_json::from_str(&content).unwrap();
    assert_leaf_shapes(&root);
}

#[test]
fn sidecar_path_resolves_to_a_terminal_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let mut generator = FixtureGenerator::from_seed(7);
    let report = generate_fixture_with(&mut generator, &path, 500).unwrap();

    let sidecar = std::fs::read_to_string(sidecar_path(&path)).unwrap();
    assert!(!sidecar.is_empty());
    assert!(!sidecar.chars().any(char::is_whitespace));
    assert_eq!(sidecar, report.deep_path.to_string());

    let root: FixtureValue =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let deep_path: FixturePath = sidecar.parse().unwrap();
    let target = root.lookup(&deep_path).unwrap();
    match target {
        FixtureValue::String(_) | FixtureValue::Integer(_) => {}
        FixtureValue::Array(items) => assert!(items.is_empty()),
        FixtureValue::Object(_) => panic!("deep path must not stop at an object"),
    }
}

#[test]
fn zero_size_target_still_writes_an_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");

    let mut generator = FixtureGenerator::from_seed(3);
    generate_fixture_with(&mut generator, &path, 0).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let root = parsed.as_object().unwrap();
    assert!(!root.is_empty());
}

#[test]
fn seeded_runs_are_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let path1 = temp_dir.path().join("a.json");
    let path2 = temp_dir.path().join("b.json");

    let mut gen1 = FixtureGenerator::from_seed(42);
    generate_fixture_with(&mut gen1, &path1, 1_000).unwrap();
    let mut gen2 = FixtureGenerator::from_seed(42);
    generate_fixture_with(&mut gen2, &path2, 1_000).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path1).unwrap(),
        std::fs::read_to_string(&path2).unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(sidecar_path(&path1)).unwrap(),
        std::fs::read_to_string(sidecar_path(&path2)).unwrap()
    );
}
