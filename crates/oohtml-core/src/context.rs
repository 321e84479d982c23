//! Injected configuration for element construction.

use std::rc::Rc;

use crate::element::Element;
use crate::error::HtmlError;

/// Configuration applied to every element a caller builds through it.
///
/// Holds the base URL prefixed to `action` attributes; cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct Context {
    base_url: Option<Rc<str>>,
}

impl Context {
    /// Context without a base URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL; an empty string disables prefixing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = (!base_url.is_empty()).then(|| Rc::from(base_url));
        self
    }

    /// Configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create an element with a closing tag.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidArgumentType`] if `tag_name` is empty.
    pub fn element(&self, tag_name: impl Into<String>) -> Result<Element, HtmlError> {
        Element::new(tag_name).map(|element| self.apply(element))
    }

    /// Create a self-closing element.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidArgumentType`] if `tag_name` is empty.
    pub fn self_closing(&self, tag_name: impl Into<String>) -> Result<Element, HtmlError> {
        Element::self_closing(tag_name).map(|element| self.apply(element))
    }

    fn apply(&self, element: Element) -> Element {
        match &self.base_url {
            Some(base_url) => element.with_base_url(Rc::clone(base_url)),
            None => element,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::Render;

    #[test]
    fn test_context_prefixes_action() {
        let context = Context::new().with_base_url("https://example.com");
        let mut form = context.element("form").unwrap();
        form.set_action("/search").set_method("get");
        assert_eq!(
            form.render(),
            r#"<form action="https://example.com/search" method="get"></form>"#
        );
    }

    #[test]
    fn test_empty_base_url_disables_prefix() {
        let context = Context::new().with_base_url("");
        assert_eq!(context.base_url(), None);

        let mut form = context.element("form").unwrap();
        form.set_action("/search");
        assert_eq!(form.attribute("action"), Some("/search"));
    }

    #[test]
    fn test_context_self_closing() {
        let context = Context::new().with_base_url("/app");
        let input = context.self_closing("input").unwrap();
        assert!(input.is_self_closing());
        assert_eq!(input.base_url(), Some("/app"));
        assert!(context.element("").is_err());
    }
}
