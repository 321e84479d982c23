//! Pre-rendered markup.

use std::fmt;

use crate::node::{Node, Render};

/// Markup that is already HTML and renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(String);

impl Raw {
    /// Wrap pre-rendered HTML.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The wrapped HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the HTML string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Render for Raw {
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.0);
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Raw> for Node {
    fn from(value: Raw) -> Self {
        Node::markup(value)
    }
}
