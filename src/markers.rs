use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static BEGIN_DEPENDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*//\s*BEGIN SNIPPET\s+(\S+)\s+DEPENDS ON\s+(\S+(?:\s+\S+)*)\s*$")
        .expect("invalid BEGIN ... DEPENDS ON pattern")
});

static BEGIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*//\s*BEGIN SNIPPET\s+(\S+)\s*$").expect("invalid BEGIN pattern")
});

static END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*//\s*END SNIPPET").expect("invalid END pattern"));

static LINE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*//").expect("invalid line comment pattern"));

/// A recognized `BEGIN SNIPPET` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginMarker {
    pub name: String,
    pub dependencies: BTreeSet<String>,
}

/// Parses a BEGIN marker, trying the `DEPENDS ON` form first.
///
/// Lines that look like markers but are malformed (for example a `DEPENDS ON`
/// with nothing after it) are not markers and yield `None`.
pub fn parse_begin(line: &str) -> Option<BeginMarker> {
    if let Some(caps) = BEGIN_DEPENDS_RE.captures(line) {
        return Some(BeginMarker {
            name: caps[1].to_string(),
            dependencies: caps[2].split_whitespace().map(str::to_string).collect(),
        });
    }
    BEGIN_RE.captures(line).map(|caps| BeginMarker {
        name: caps[1].to_string(),
        dependencies: BTreeSet::new(),
    })
}

pub fn is_end(line: &str) -> bool {
    END_RE.is_match(line)
}

/// True when the whole line is a `//` comment (doc comments included).
pub fn is_line_comment(line: &str) -> bool {
    LINE_COMMENT_RE.is_match(line)
}
