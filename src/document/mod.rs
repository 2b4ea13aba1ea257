pub mod document;
pub mod loader;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::{Document, DocumentError};
pub use loader::{is_text_file, DocumentLoader, LoadError};
