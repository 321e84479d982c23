//! Ordered group of renderable content.

use std::fmt;

use serde_json::Value;

use crate::error::HtmlError;
use crate::node::{Node, Render};

/// Groups renderable nodes so they can be passed around as one value.
///
/// Children render in the order they were embedded. Collections are
/// flattened on embed, so the stored children never contain sequences.
#[derive(Debug, Default)]
pub struct Container {
    children: Vec<Node>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed renderable content.
    ///
    /// Sequences and JSON arrays/objects are flattened recursively.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidRenderable`] when a flattened item cannot
    /// be rendered. Items appended before the failing one are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use oohtml_core::{Container, Render};
    ///
    /// let mut container = Container::new();
    /// container.embed("a")?.embed(vec!["b", "c"])?;
    /// assert_eq!(container.render(), "abc");
    /// # Ok::<(), oohtml_core::HtmlError>(())
    /// ```
    pub fn embed(&mut self, content: impl Into<Node>) -> Result<&mut Self, HtmlError> {
        self.push(content.into())?;
        Ok(self)
    }

    /// Embed each item in order; the variadic form of [`Container::embed`].
    ///
    /// # Errors
    ///
    /// Stops at the first item that cannot be rendered.
    pub fn embed_all<I>(&mut self, items: I) -> Result<&mut Self, HtmlError>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        for item in items {
            self.push(item.into())?;
        }
        Ok(self)
    }

    fn push(&mut self, node: Node) -> Result<(), HtmlError> {
        match node {
            Node::Sequence(nodes) => {
                for node in nodes {
                    self.push(node)?;
                }
            }
            Node::Value(Value::Array(items)) => {
                for item in items {
                    self.push(Node::Value(item))?;
                }
            }
            Node::Value(Value::Object(map)) => {
                for (_, item) in map {
                    self.push(Node::Value(item))?;
                }
            }
            node => {
                node.check()?;
                self.children.push(node);
            }
        }
        Ok(())
    }

    /// Append text that needs no renderability check.
    pub(crate) fn push_text(&mut self, text: String) {
        self.children.push(Node::from(text));
    }

    /// Embedded children in render order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of embedded children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether nothing has been embedded.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Render for Container {
    fn render_to(&self, out: &mut String) {
        for child in &self.children {
            child.write_to(out);
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Container> for Node {
    fn from(value: Container) -> Self {
        Node::markup(value)
    }
}
