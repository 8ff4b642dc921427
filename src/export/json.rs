use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::ExportError;
use crate::models::Minutes;

/// Write the full record as a pretty-printed JSON document.
///
/// The document mirrors the record field-for-field: every field present by
/// key, absent scalars as `null`, list fields as arrays, categorical fields
/// as their canonical string.
pub fn save_json(minutes: &Minutes, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), minutes)?;
    tracing::info!(path = %path.display(), "wrote JSON export");
    Ok(())
}
