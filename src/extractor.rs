use std::collections::BTreeSet;

use crate::error::ExtractError;
use crate::markers::{is_end, is_line_comment, parse_begin};

/// One BEGIN...END block found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub name: String,
    pub dependencies: BTreeSet<String>,
    /// Formatted body text.
    pub text: String,
    /// 1-based line of the BEGIN marker.
    pub line: usize,
}

/// Extracts every snippet occurrence from the content of one file, in order.
///
/// # Errors
/// Returns [`ExtractError::MissingTerminator`] for the first BEGIN marker
/// that is not closed before the end of the content.
pub fn extract_snippets(content: &str) -> Result<Vec<Occurrence>, ExtractError> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut out = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let Some(marker) = parse_begin(lines[idx]) else {
            idx += 1;
            continue;
        };
        let body_start = idx + 1;
        let body = find_body(&lines[body_start..]).ok_or_else(|| {
            ExtractError::MissingTerminator {
                name: marker.name.clone(),
                line: idx + 1,
            }
        })?;
        out.push(Occurrence {
            name: marker.name,
            dependencies: marker.dependencies,
            text: format_body(body),
            line: idx + 1,
        });
        // resume after the END line
        idx = body_start + body.len() + 1;
    }

    Ok(out)
}

/// Returns the raw lines preceding the first END marker, or `None` when the
/// lines run out first.
pub fn find_body<'a, 'b>(lines: &'b [&'a str]) -> Option<&'b [&'a str]> {
    lines.iter().position(|l| is_end(l)).map(|end| &lines[..end])
}

/// Drops comment-only and blank lines, keeps the rest with their own line
/// endings and makes sure a non-empty result ends in `\n`.
pub fn format_body<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() || is_line_comment(line) {
            continue;
        }
        text.push_str(line);
    }
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
