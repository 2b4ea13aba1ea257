use std::path::Path;

use crate::types::outcome::GenerationOutcome;
use super::{write_atomic, ExportError};

/// Write the paper together with its generation metadata as pretty JSON.
pub fn export_json(outcome: &GenerationOutcome, path: &Path) -> Result<(), ExportError> {
    let mut bytes = serde_json::to_vec_pretty(outcome)?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}
