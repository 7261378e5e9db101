// Shared test fixtures. Compiled only for tests.
//
// JSON documents live under src/test_support/fixtures/json and are read from disk,
// so the raw inbound layer is exercised with the same data as the typed handlers.

pub mod permissions;
pub mod records;

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub fn load_json(name: &str) -> anyhow::Result<Value> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src/test_support/fixtures/json")
        .join(name);
    let json_str = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    serde_json::from_str(&json_str).with_context(|| format!("invalid JSON in fixture {name}"))
}
