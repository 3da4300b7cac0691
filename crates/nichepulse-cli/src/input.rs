//! File input and JSON output helpers shared by the command handlers.

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and deserialize a JSON file.
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be read or parsed.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Print a value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
