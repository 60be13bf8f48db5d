use thiserror::Error;

/// Errors raised while pulling snippets out of a single file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// A BEGIN marker was never closed by an END marker.
    #[error("snippet `{name}` opened at line {line} has no matching END SNIPPET marker")]
    MissingTerminator { name: String, line: usize },
}
