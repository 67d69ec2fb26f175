use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};

use super::FieldSink;

#[doc = r#"
A reported field
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Node {
    /// A named group of fields
    Struct {
        /// The name of the struct
        name: &'static str,
        /// Its fields, in report order
        children: Vec<Node>,
    },
    /// An unsigned value
    Uint {
        /// The name of the field
        name: &'static str,
        /// The raw value
        value: u64,
        /// The display label, if the symbol table had one
        label: Option<String>,
    },
}

impl Node {
    /// The field's name
    pub fn name(&self) -> &'static str {
        match self {
            Node::Struct { name, .. } | Node::Uint { name, .. } => *name,
        }
    }

    /// The value of an unsigned field
    pub fn value(&self) -> Option<u64> {
        match self {
            Node::Uint { value, .. } => Some(*value),
            Node::Struct { .. } => None,
        }
    }

    /// The label of an unsigned field
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Uint { label, .. } => label.as_deref(),
            Node::Struct { .. } => None,
        }
    }

    /// The label, or the raw value when there is no label. `None` for structs.
    pub fn display(&self) -> Option<Cow<'_, str>> {
        match self {
            Node::Uint {
                label: Some(label), ..
            } => Some(Cow::Borrowed(label.as_str())),
            Node::Uint { value, .. } => Some(Cow::Owned(value.to_string())),
            Node::Struct { .. } => None,
        }
    }

    /// The fields of a struct. Empty for unsigned fields.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Struct { children, .. } => children,
            Node::Uint { .. } => &[],
        }
    }

    /// The first descendant found by following `path`
    pub fn get(&self, path: &[&str]) -> Option<&Node> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };
        self.children()
            .iter()
            .find(|child| child.name() == *first)?
            .get(rest)
    }
}

#[doc = r#"
Collects reported fields into memory.

# Example
```rust
# use midix_stream::prelude::*;
let mut tree = FieldTree::default();
tree.begin_struct("Controller");
tree.field_uint("controller", 7, Some("Channel Volume"));
tree.field_uint("value", 127, None);
tree.end_struct();

let controller = tree.get(&["Controller", "controller"]).unwrap();
assert_eq!(controller.value(), Some(7));
assert_eq!(controller.display().as_deref(), Some("Channel Volume"));

let value = tree.get(&["Controller", "value"]).unwrap();
assert_eq!(value.display().as_deref(), Some("127"));
```
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldTree {
    roots: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(skip))]
    open: Vec<(&'static str, Vec<Node>)>,
}

impl FieldTree {
    /// The completed top-level fields, in report order
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Consume the tree, returning the completed top-level fields
    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    /// True if a struct has been opened but not closed
    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// The first completed node found by following `path` from the top level
    pub fn get(&self, path: &[&str]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        self.roots
            .iter()
            .find(|node| node.name() == *first)?
            .get(rest)
    }

    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.roots.push(node),
        }
    }
}

impl FieldSink for FieldTree {
    fn begin_struct(&mut self, name: &'static str) {
        self.open.push((name, Vec::new()));
    }

    fn end_struct(&mut self) {
        if let Some((name, children)) = self.open.pop() {
            self.push(Node::Struct { name, children });
        }
    }

    fn field_uint(&mut self, name: &'static str, value: u64, label: Option<&str>) {
        self.push(Node::Uint {
            name,
            value,
            label: label.map(String::from),
        });
    }
}

#[test]
fn structure_closes_on_error() {
    use pretty_assertions::assert_eq;
    let mut tree = FieldTree::default();
    let out: Result<(), &str> = tree.structure("outer", |tree| {
        tree.field_uint("a", 1, None);
        tree.structure("inner", |_| Err("failed"))
    });

    assert_eq!(out, Err("failed"));
    assert!(!tree.is_open());
    assert_eq!(tree.get(&["outer", "a"]).and_then(Node::value), Some(1));
    assert!(tree.get(&["outer", "inner"]).is_some());

    let roots = tree.into_roots();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].children().len(), 2);
}
