use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::extractor::Occurrence;

/// Accumulated state for one snippet name across every scanned file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub text: String,
    pub dependencies: BTreeSet<String>,
}

impl Snippet {
    /// Appends an occurrence's text and folds its dependencies in.
    ///
    /// Dependencies are combined by symmetric difference, not union: a name
    /// declared by an even number of occurrences drops out again. This looks
    /// unintended but existing snippet libraries rely on the exact output, so
    /// it is kept as is.
    pub fn absorb(&mut self, text: &str, dependencies: &BTreeSet<String>) {
        self.text.push_str(text);
        for dep in dependencies {
            if !self.dependencies.remove(dep) {
                self.dependencies.insert(dep.clone());
            }
        }
    }
}

/// Snippets keyed by name, in first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SnippetMap {
    snippets: IndexMap<String, Snippet>,
}

impl SnippetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, occurrence: &Occurrence) {
        self.snippets
            .entry(occurrence.name.clone())
            .or_default()
            .absorb(&occurrence.text, &occurrence.dependencies);
    }

    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Snippet)> {
        self.snippets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(name: &str, text: &str, deps: &[&str]) -> Occurrence {
        Occurrence {
            name: name.to_string(),
            dependencies: deps.iter().map(|s| (*s).to_string()).collect(),
            text: text.to_string(),
            line: 1,
        }
    }

    fn dep_list(s: &Snippet) -> Vec<&str> {
        s.dependencies.iter().map(String::as_str).collect()
    }

    #[test]
    fn repeated_dependency_cancels() {
        let mut map = SnippetMap::new();
        map.add(&occ("S", "a\n", &["X"]));
        map.add(&occ("S", "b\n", &["X", "Y"]));
        let s = map.get("S").unwrap();
        assert_eq!(s.text, "a\nb\n");
        assert_eq!(dep_list(s), ["Y"]);
    }

    #[test]
    fn odd_number_of_declarations_survives() {
        let mut map = SnippetMap::new();
        for _ in 0..3 {
            map.add(&occ("S", "", &["X"]));
        }
        assert_eq!(dep_list(map.get("S").unwrap()), ["X"]);
        map.add(&occ("S", "", &["X"]));
        assert!(map.get("S").unwrap().dependencies.is_empty());
    }

    #[test]
    fn keeps_first_discovery_order() {
        let mut map = SnippetMap::new();
        map.add(&occ("zeta", "z\n", &[]));
        map.add(&occ("alpha", "a\n", &[]));
        map.add(&occ("zeta", "z2\n", &[]));
        let names: Vec<&str> = map.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut map = SnippetMap::new();
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
        map.add(&occ("foo", "let x = 1;\n", &["bar"]));
        let s = serde_json::to_string(&map).unwrap();
        assert_eq!(
            s,
            r#"{"foo":{"text":"let x = 1;\n","dependencies":["bar"]}}"#
        );
    }
}
