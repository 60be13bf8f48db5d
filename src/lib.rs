//! Extracts `// BEGIN SNIPPET` ... `// END SNIPPET` blocks from a source tree
//! and collects them, with their declared dependencies, into a JSON-ready map.

pub mod cli;
pub mod error;
pub mod extractor;
pub mod markers;
pub mod scanner;
pub mod traversal;
pub mod types;

pub use error::ExtractError;
pub use scanner::{ScanOptions, scan_path};
pub use types::{Snippet, SnippetMap};
