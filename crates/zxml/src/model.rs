//! XML data model

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parsed XML document
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    /// Leading `<?...?>` declaration, if any
    pub declaration: Option<Declaration>,
    pub root: Element,
}

/// The leading `<?target k="v" ...?>` processing instruction
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Declaration {
    pub target: String,
    pub attributes: IndexMap<String, String>,
}

/// XML element
///
/// `text` holds only the element's own character data, trimmed; text inside
/// descendants belongs to them. `namespaces` holds exactly the bindings this
/// element declares with `xmlns` / `xmlns:prefix`, keyed by prefix (`""` for
/// the default namespace). Nothing is inherited from ancestors.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub namespaces: IndexMap<String, String>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Empty element named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &str {
        split_qualified(&self.name).1
    }

    /// Namespace prefix of the name, if it has one
    pub fn prefix(&self) -> Option<&str> {
        split_qualified(&self.name).0
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// URI bound to `prefix` on this element (`""` for the default namespace)
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// Direct children whose qualified name equals `name`
    pub fn children_named<'e>(
        &'e self,
        name: &'e str,
    ) -> impl Iterator<Item = &'e Self> + 'e {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Split `prefix:local` at the last colon
fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(Element::new("ns:item").local_name(), "item");
        assert_eq!(Element::new("item").local_name(), "item");
        assert_eq!(Element::new("a:b:c").local_name(), "c");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Element::new("ns:item").prefix(), Some("ns"));
        assert_eq!(Element::new("item").prefix(), None);
    }

    #[test]
    fn test_children_named() {
        let mut root = Element::new("root");
        root.children.push(Element::new("a"));
        root.children.push(Element::new("b"));
        root.children.push(Element::new("a"));
        assert_eq!(root.children_named("a").count(), 2);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_attribute_order_is_ignored_by_eq() {
        let mut left = Element::new("a");
        left.attributes.insert("x".into(), "1".into());
        left.attributes.insert("y".into(), "2".into());
        let mut right = Element::new("a");
        right.attributes.insert("y".into(), "2".into());
        right.attributes.insert("x".into(), "1".into());
        assert_eq!(left, right);
    }
}
