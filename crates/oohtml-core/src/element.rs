//! HTML element builder.
//!
//! An [`Element`] owns a tag name, an ordered attribute map, a class set and
//! a [`Container`] of child content. Rendering produces the opening tag with
//! attributes and class, then the children and the closing tag. Self-closing
//! elements render as `<tag ... />` and never render their children, even
//! though embedded children are still stored.
//!
//! No escaping or validity checking is performed: callers escape untrusted
//! text with [`escape_html`](crate::escape_html) before embedding it.

use std::fmt::{self, Write};
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::container::Container;
use crate::error::HtmlError;
use crate::node::{Node, Render};

/// HTML element with attributes, classes and child content.
///
/// # Example
///
/// ```
/// use oohtml_core::{Element, Render};
///
/// let mut link = Element::new("a")?;
/// link.set_href("/x").embed("click me")?;
/// assert_eq!(link.render(), r#"<a href="/x">click me</a>"#);
/// # Ok::<(), oohtml_core::HtmlError>(())
/// ```
#[derive(Debug)]
pub struct Element {
    tag_name: String,
    self_closing: bool,
    base_url: Option<Rc<str>>,
    attributes: IndexMap<String, String>,
    classes: IndexSet<String>,
    content: Container,
}

impl Element {
    /// Create an element with a closing tag.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidArgumentType`] if `tag_name` is empty.
    pub fn new(tag_name: impl Into<String>) -> Result<Self, HtmlError> {
        Self::with_options(tag_name, false)
    }

    /// Create a self-closing element (e.g. `<br />`).
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidArgumentType`] if `tag_name` is empty.
    pub fn self_closing(tag_name: impl Into<String>) -> Result<Self, HtmlError> {
        Self::with_options(tag_name, true)
    }

    fn with_options(tag_name: impl Into<String>, self_closing: bool) -> Result<Self, HtmlError> {
        let tag_name = tag_name.into();
        if tag_name.is_empty() {
            return Err(HtmlError::invalid_argument(
                "tag_name",
                "a non-empty string",
                "an empty string",
            ));
        }
        Ok(Self::known(tag_name, self_closing))
    }

    /// Construct from a tag name already known to be non-empty.
    pub(crate) fn known(tag_name: impl Into<String>, self_closing: bool) -> Self {
        let tag_name = tag_name.into();
        debug_assert!(!tag_name.is_empty());
        Self {
            tag_name,
            self_closing,
            base_url: None,
            attributes: IndexMap::new(),
            classes: IndexSet::new(),
            content: Container::new(),
        }
    }

    /// Prefix values set through [`Element::set_action`] with `base_url`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<Rc<str>>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Tag name.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Whether the element renders as `<tag ... />`.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Base URL used by [`Element::set_action`], if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in render order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Class tokens in first-insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Embedded child content.
    pub fn content(&self) -> &Container {
        &self.content
    }

    /// Embed renderable content.
    ///
    /// Same semantics as [`Container::embed`]. Children of a self-closing
    /// element are stored but never rendered.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidRenderable`] for content with no text form.
    pub fn embed(&mut self, content: impl Into<Node>) -> Result<&mut Self, HtmlError> {
        self.content.embed(content)?;
        Ok(self)
    }

    /// Embed each item in order.
    ///
    /// # Errors
    ///
    /// Stops at the first item that cannot be rendered.
    pub fn embed_all<I>(&mut self, items: I) -> Result<&mut Self, HtmlError>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.content.embed_all(items)?;
        Ok(self)
    }

    pub(crate) fn push_text(&mut self, text: String) -> &mut Self {
        self.content.push_text(text);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a boolean-style attribute: `set_flag("required")` renders
    /// `required="required"`.
    pub fn set_flag(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = name.clone();
        self.set_attribute(name, value)
    }

    /// Set attributes from a JSON object.
    ///
    /// String values set the attribute; `null` uses the name as the value.
    /// The whole object is validated before any attribute is applied.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidArgumentType`] if `attributes` is not an
    /// object or one of its values is neither a string nor `null`.
    pub fn set_attributes(&mut self, attributes: &Value) -> Result<&mut Self, HtmlError> {
        let Value::Object(map) = attributes else {
            return Err(HtmlError::invalid_argument(
                "attributes",
                "an object",
                json_type_name(attributes),
            ));
        };

        if let Some((name, value)) = map
            .iter()
            .find(|(_, value)| !matches!(value, Value::String(_) | Value::Null))
        {
            return Err(HtmlError::invalid_argument(
                format!("attributes.{name}"),
                "a string or null",
                json_type_name(value),
            ));
        }

        for (name, value) in map {
            match value {
                Value::String(value) => self.set_attribute(name.as_str(), value.as_str()),
                _ => self.set_flag(name.as_str()),
            };
        }
        Ok(self)
    }

    /// Set `id`.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.set_attribute("id", id)
    }

    /// Set `href`.
    pub fn set_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.set_attribute("href", href)
    }

    /// Set `for`.
    pub fn set_for(&mut self, target: impl Into<String>) -> &mut Self {
        self.set_attribute("for", target)
    }

    /// Set `action`, prefixed with the base URL when one is configured.
    pub fn set_action(&mut self, action: impl Into<String>) -> &mut Self {
        let action = action.into();
        let value = match &self.base_url {
            Some(base) => format!("{base}{action}"),
            None => action,
        };
        self.set_attribute("action", value)
    }

    /// Set `method`.
    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.set_attribute("method", method)
    }

    /// Set `name`.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_attribute("name", name)
    }

    /// Set `id` and `name` to the same value.
    pub fn set_id_and_name(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.set_id(value.clone()).set_name(value)
    }

    /// Set `type`.
    pub fn set_type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.set_attribute("type", kind)
    }

    /// Set `value`.
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_attribute("value", value)
    }

    /// Set `style`.
    pub fn set_style(&mut self, style: impl Into<String>) -> &mut Self {
        self.set_attribute("style", style)
    }

    /// Add whitespace-separated class tokens.
    ///
    /// Duplicates are ignored; tokens render in first-insertion order.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        for token in classes.split_whitespace() {
            if !self.classes.contains(token) {
                self.classes.insert(token.to_owned());
            }
        }
        self
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Render for Element {
    fn render_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);

        for (name, value) in &self.attributes {
            let _ = write!(out, r#" {name}="{value}""#);
        }

        if !self.classes.is_empty() {
            out.push_str(r#" class=""#);
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(class);
            }
            out.push('"');
        }

        if self.self_closing {
            out.push_str(" />");
            return;
        }

        out.push('>');
        self.content.render_to(out);
        let _ = write!(out, "</{}>", self.tag_name);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::markup(value)
    }
}
