use std::collections::BTreeMap;

use serde_json::Value;

/// A node of a translation tree: a template string or a named group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Text(String),
    Group(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Builds a node from JSON. Strings and objects are kept; any other value
    /// has no meaning in a translation table and yields `None`.
    fn from_json(path: &str, value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(TranslationNode::Text(text.clone())),
            Value::Object(entries) => {
                let mut children = BTreeMap::new();
                for (name, child) in entries {
                    let child_path = join_path(path, name);
                    match TranslationNode::from_json(&child_path, child) {
                        Some(node) => {
                            children.insert(name.clone(), node);
                        }
                        None => {
                            tracing::debug!("Dropping non-text translation entry {}", child_path);
                        }
                    }
                }
                Some(TranslationNode::Group(children))
            }
            _ => None,
        }
    }

    fn collect_keys(&self, prefix: &str, keys: &mut Vec<String>) {
        match self {
            TranslationNode::Text(_) => keys.push(prefix.to_string()),
            TranslationNode::Group(children) => {
                for (name, child) in children {
                    child.collect_keys(&join_path(prefix, name), keys);
                }
            }
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Translation tree for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a JSON document whose top level must be an object.
    /// Returns `None` for any other top-level value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match TranslationNode::from_json("", value)? {
            TranslationNode::Group(root) => Some(Self { root }),
            TranslationNode::Text(_) => None,
        }
    }

    /// Inserts a template at a dotted path, creating intermediate groups and
    /// replacing any text node that stands in the way
    pub fn insert(&mut self, key: &str, template: impl Into<String>) {
        let mut segments = key.split('.').peekable();
        let mut current = &mut self.root;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), TranslationNode::Text(template.into()));
                return;
            }

            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| TranslationNode::Group(BTreeMap::new()));
            if let TranslationNode::Text(_) = entry {
                *entry = TranslationNode::Group(BTreeMap::new());
            }
            current = match entry {
                TranslationNode::Group(children) => children,
                TranslationNode::Text(_) => return,
            };
        }
    }

    /// Walks the dotted key path. Absence at any step, a text node before the
    /// last segment, or a group at the end all resolve to `None`.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;

        for segment in segments {
            node = match node {
                TranslationNode::Group(children) => children.get(segment)?,
                TranslationNode::Text(_) => return None,
            };
        }

        match node {
            TranslationNode::Text(text) => Some(text.as_str()),
            TranslationNode::Group(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    /// Dotted paths of every template in the table, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for (name, node) in &self.root {
            node.collect_keys(name, &mut keys);
        }
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TranslationTable {
        TranslationTable::from_json(&json!({
            "errors": {
                "validation": {
                    "email": "Please enter a valid email",
                    "minLength": "Must be at least {{min}} characters"
                }
            },
            "search": {
                "resultsCount_one": "{{count}} result found",
                "resultsCount_other": "{{count}} results found"
            },
            "meta": { "version": 3, "tags": ["a"] }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_nested_key() {
        let table = sample();
        assert_eq!(table.resolve("errors.validation.email"), Some("Please enter a valid email"));
        assert_eq!(table.resolve("search.resultsCount_one"), Some("{{count}} result found"));
    }

    #[test]
    fn test_resolve_missing_or_non_leaf() {
        let table = sample();
        assert_eq!(table.resolve("errors.validation"), None);
        assert_eq!(table.resolve("errors.validation.email.extra"), None);
        assert_eq!(table.resolve("errors.unknown"), None);
        assert_eq!(table.resolve(""), None);
        assert_eq!(table.resolve("meta.version"), None);
    }

    #[test]
    fn test_keys_are_sorted_leaf_paths() {
        let table = sample();
        assert_eq!(
            table.keys(),
            vec![
                "errors.validation.email",
                "errors.validation.minLength",
                "search.resultsCount_one",
                "search.resultsCount_other",
            ]
        );
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_insert_builds_groups() {
        let mut table = TranslationTable::new();
        table.insert("nav.home", "Home");
        table.insert("nav.events.title", "Events");
        assert_eq!(table.resolve("nav.home"), Some("Home"));
        assert_eq!(table.resolve("nav.events.title"), Some("Events"));

        table.insert("nav.home.label", "Home page");
        assert_eq!(table.resolve("nav.home"), None);
        assert_eq!(table.resolve("nav.home.label"), Some("Home page"));
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        assert!(TranslationTable::from_json(&json!("text")).is_none());
        assert!(TranslationTable::from_json(&json!([1, 2])).is_none());
    }
}
