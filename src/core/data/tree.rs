//! Typed translation tree for a single locale.
//!
//! Leaves are either a single string or an ordered list of strings; inner
//! nodes keep their children in file order so that listings and list
//! items come out the way they were written.

use super::message::ValueType;

/// A node of the translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single display string.
    Text(String),
    /// An ordered list of display strings (feature bullets, items).
    List(Vec<String>),
    /// A named group of nodes.
    Branch(Branch),
}

impl Node {
    /// Leaf value type, `None` for branches.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Node::Text(_) => Some(ValueType::String),
            Node::List(_) => Some(ValueType::StringArray),
            Node::Branch(_) => None,
        }
    }

    /// Short name of the node kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Text(_) => "string",
            Node::List(_) => "array",
            Node::Branch(_) => "object",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Node::Branch(branch) => Some(branch),
            _ => None,
        }
    }
}

/// Ordered children of a tree level. Keys are unique within a level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    children: Vec<(String, Node)>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a child, replacing any existing child with the same key
    /// in place (position is kept).
    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        let key = key.into();
        match self.children.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.children.push((key, node)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, node)| (k.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Walk a dot-delimited path. Every segment must name a child of the
    /// node reached so far; descending into a leaf fails.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.get(first)?;
        for segment in segments {
            node = node.as_branch()?.get(segment)?;
        }
        Some(node)
    }

    /// Item of a list leaf addressed by a trailing index segment, as in
    /// `pricing.discovery.features.0`. The index must be written without
    /// sign or leading zeros.
    pub fn list_item(&self, path: &str) -> Option<&str> {
        let (parent, index) = path.rsplit_once('.')?;
        let index = parse_index(index)?;
        let items = self.lookup(parent)?.as_list()?;
        items.get(index).map(String::as_str)
    }

    /// All leaves with their full dot paths, depth-first in file order.
    pub fn leaves(&self) -> Vec<(String, &Node)> {
        let mut out = Vec::new();
        collect_leaves(self, "", &mut out);
        out
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.starts_with('0') && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical && !segment.is_empty() {
        segment.parse().ok()
    } else {
        None
    }
}

fn collect_leaves<'a>(branch: &'a Branch, prefix: &str, out: &mut Vec<(String, &'a Node)>) {
    for (key, node) in branch.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            Node::Branch(child) => collect_leaves(child, &path, out),
            leaf => out.push((path, leaf)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Branch {
        let mut plan = Branch::new();
        plan.insert("name", Node::Text("Discovery".into()));
        plan.insert(
            "features",
            Node::List(vec!["1 map".into(), "3 layers".into()]),
        );

        let mut pricing = Branch::new();
        pricing.insert("label", Node::Text("Pricing".into()));
        pricing.insert("discovery", Node::Branch(plan));

        let mut root = Branch::new();
        root.insert("pricing", Node::Branch(pricing));
        root
    }

    #[test]
    fn test_lookup_leaf() {
        let root = sample();
        assert_eq!(
            root.lookup("pricing.discovery.name").and_then(Node::as_text),
            Some("Discovery")
        );
        assert_eq!(
            root.lookup("pricing.discovery.features")
                .and_then(Node::as_list)
                .map(|items| items.len()),
            Some(2)
        );
    }

    #[test]
    fn test_lookup_missing_segments() {
        let root = sample();
        assert!(root.lookup("pricing.pro.name").is_none());
        assert!(root.lookup("").is_none());
        assert!(root.lookup("pricing..label").is_none());
        assert!(root.lookup("pricing.label.extra").is_none());
    }

    #[test]
    fn test_list_item() {
        let root = sample();
        assert_eq!(root.list_item("pricing.discovery.features.1"), Some("3 layers"));
        assert_eq!(root.list_item("pricing.discovery.features.2"), None);
        assert_eq!(root.list_item("pricing.discovery.features.00"), None);
        assert_eq!(root.list_item("pricing.discovery.features."), None);
        assert_eq!(root.list_item("pricing.label.0"), None);
        assert!(root.lookup("pricing.discovery.features.0").is_none());
    }

    #[test]
    fn test_lookup_branch() {
        let root = sample();
        let node = root.lookup("pricing.discovery").unwrap();
        assert!(node.as_branch().is_some());
        assert_eq!(node.value_type(), None);
        assert_eq!(node.kind(), "object");
        assert_eq!(root.lookup("pricing.label").map(Node::kind), Some("string"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut branch = Branch::new();
        branch.insert("a", Node::Text("1".into()));
        branch.insert("b", Node::Text("2".into()));
        branch.insert("a", Node::Text("3".into()));

        let keys: Vec<&str> = branch.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(branch.get("a").and_then(Node::as_text), Some("3"));
    }

    #[test]
    fn test_leaves_in_file_order() {
        let root = sample();
        let paths: Vec<String> = root.leaves().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec![
                "pricing.label",
                "pricing.discovery.name",
                "pricing.discovery.features"
            ]
        );
    }
}
