//! Retained element tree.
//!
//! [`Document`] is the rendering surface a [`TitleBar`](crate::TitleBar)
//! mounts into. It owns a flat arena of [`Node`]s keyed by [`NodeKey`] and a
//! root ("body") node created at construction, and it records injected
//! stylesheets under their logical names.
//!
//! The document is deliberately minimal: it models exactly the surface the
//! widget needs (tags, classes, inline styles, attributes, text, parent/child
//! links) and leaves layout and painting to whatever renders it.
//!
//! # Shared state
//!
//! The root node's class list is shared presentation state: any widget's mount
//! call may set or clear the theme marker there, last write wins.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A handle to a node in a [`Document`].
    ///
    /// Keys remain valid for the lifetime of the node; operations on a stale
    /// key are ignored (mutators) or return `None`/`false` (accessors).
    pub struct NodeKey;
}

/// A single element in the tree.
#[derive(Debug, Default)]
pub struct Node {
    /// Element tag name.
    tag: String,
    /// Class list, in application order.
    classes: Vec<String>,
    /// Inline style declarations as (property, value) pairs.
    styles: Vec<(String, String)>,
    /// Plain attributes as (name, value) pairs.
    attributes: Vec<(String, String)>,
    /// Text content.
    text: String,
    /// Parent node, if attached.
    parent: Option<NodeKey>,
    /// Child nodes, in document order.
    children: Vec<NodeKey>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's class list.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The element's text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A named stylesheet registered with the document.
#[derive(Debug)]
struct StyleSheet {
    name: String,
    text: String,
}

/// The element arena a widget renders into.
pub struct Document {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
    /// Injected stylesheets, in injection order, unique by name.
    stylesheets: Vec<StyleSheet>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with a root ("body") node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new("body"));
        Self {
            nodes,
            root,
            stylesheets: Vec::new(),
        }
    }

    /// The document root node.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Access a node, if the key is still live.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    /// Create a new detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeKey {
        self.nodes.insert(Node::new(tag))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// If the child is currently attached elsewhere it is detached first.
    pub fn append_child(&mut self, parent: NodeKey, child: NodeKey) {
        if parent == child || !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Detach a node from its parent, if attached.
    pub fn detach(&mut self, key: NodeKey) {
        let Some(parent) = self.nodes.get(key).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[key].parent = None;
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|&c| c != key);
        }
    }

    /// The parent of a node, if attached.
    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.parent)
    }

    /// The children of a node, in document order.
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes.get(key).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Check whether `node` is `ancestor` itself or lies within its subtree.
    pub fn contains(&self, ancestor: NodeKey, node: NodeKey) -> bool {
        let mut current = Some(node);
        while let Some(key) = current {
            if key == ancestor {
                return true;
            }
            current = self.parent(key);
        }
        false
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Add a class to a node. Adding a class twice is a no-op.
    pub fn add_class(&mut self, key: NodeKey, class: &str) {
        if let Some(node) = self.nodes.get_mut(key) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class from a node, if present.
    pub fn remove_class(&mut self, key: NodeKey, class: &str) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Check whether a node carries a class.
    pub fn has_class(&self, key: NodeKey, class: &str) -> bool {
        self.nodes
            .get(key)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    // =========================================================================
    // Inline styles and attributes
    // =========================================================================

    /// Set an inline style declaration, replacing any previous value for the
    /// same property. Values are stored as-is; nothing is validated.
    pub fn set_style(&mut self, key: NodeKey, property: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(key) {
            let value = value.into();
            if let Some(entry) = node.styles.iter_mut().find(|(p, _)| p == property) {
                entry.1 = value;
            } else {
                node.styles.push((property.to_string(), value));
            }
        }
    }

    /// Get an inline style value by property name.
    pub fn style(&self, key: NodeKey, property: &str) -> Option<&str> {
        self.nodes.get(key).and_then(|n| {
            n.styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str())
        })
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn set_attribute(&mut self, key: NodeKey, name: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(key) {
            let value = value.into();
            if let Some(entry) = node.attributes.iter_mut().find(|(n, _)| n == name) {
                entry.1 = value;
            } else {
                node.attributes.push((name.to_string(), value));
            }
        }
    }

    /// Get an attribute value by name.
    pub fn attribute(&self, key: NodeKey, name: &str) -> Option<&str> {
        self.nodes.get(key).and_then(|n| {
            n.attributes
                .iter()
                .find(|(a, _)| a == name)
                .map(|(_, v)| v.as_str())
        })
    }

    /// Set a node's text content.
    pub fn set_text(&mut self, key: NodeKey, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.text = text.into();
        }
    }

    /// Get a node's text content.
    pub fn text(&self, key: NodeKey) -> &str {
        self.nodes.get(key).map(|n| n.text.as_str()).unwrap_or("")
    }

    // =========================================================================
    // Stylesheets
    // =========================================================================

    /// Register a stylesheet under a logical name.
    ///
    /// Injection is idempotent per name: the first call stores the sheet and
    /// returns `true`; repeated calls under the same name are no-ops returning
    /// `false`, regardless of the text they carry.
    pub fn inject_stylesheet(&mut self, name: &str, text: &str) -> bool {
        if self.has_stylesheet(name) {
            tracing::trace!(target: "casement::view", name, "stylesheet already injected");
            return false;
        }
        tracing::debug!(target: "casement::view", name, "injecting stylesheet");
        self.stylesheets.push(StyleSheet {
            name: name.to_string(),
            text: text.to_string(),
        });
        true
    }

    /// Check whether a stylesheet is registered under the given name.
    pub fn has_stylesheet(&self, name: &str) -> bool {
        self.stylesheets.iter().any(|s| s.name == name)
    }

    /// The text of a registered stylesheet.
    pub fn stylesheet(&self, name: &str) -> Option<&str> {
        self.stylesheets
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.text.as_str())
    }

    /// Number of registered stylesheets.
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }
}

static_assertions::assert_impl_all!(Document: Send, Sync);
