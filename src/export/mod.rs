pub mod json;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

pub use json::export_json;
pub use text::{ensure_txt_extension, export_text, render_text};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write `bytes` to a sibling temp file, sync it, then rename over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let mut f = fs::File::create(temp_path)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    drop(f);

    fs::rename(temp_path, path)?;
    Ok(())
}
