//! Tag constructor helpers.
//!
//! Thin wrappers over [`Element`] for common tags and page fragments.
//! Helpers taking `content` embed it with [`Element::embed`] semantics.

use crate::container::Container;
use crate::element::Element;
use crate::error::HtmlError;
use crate::escape::escape_html;
use crate::node::{Node, Render};
use crate::raw::Raw;

/// Element with a closing tag.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidArgumentType`] if `tag_name` is empty.
pub fn element(tag_name: impl Into<String>) -> Result<Element, HtmlError> {
    Element::new(tag_name)
}

/// Self-closing element.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidArgumentType`] if `tag_name` is empty.
pub fn void(tag_name: impl Into<String>) -> Result<Element, HtmlError> {
    Element::self_closing(tag_name)
}

fn with_content(tag_name: &'static str, content: Node) -> Result<Element, HtmlError> {
    let mut element = Element::known(tag_name, false);
    element.embed(content)?;
    Ok(element)
}

macro_rules! content_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($name), ">` containing `content`.")]
            ///
            /// # Errors
            ///
            /// Returns [`HtmlError::InvalidRenderable`] if `content` cannot be rendered.
            pub fn $name(content: impl Into<Node>) -> Result<Element, HtmlError> {
                with_content(stringify!($name), content.into())
            }
        )*
    };
}

content_tags!(
    html, head, body, h1, h2, h3, ul, ol, li, span, p, em, strong, sub, sup,
);

/// `<script type="text/javascript">` containing `content`.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidRenderable`] if `content` cannot be rendered.
pub fn script(content: impl Into<Node>) -> Result<Element, HtmlError> {
    let mut element = Element::known("script", false);
    element.set_type("text/javascript").embed(content)?;
    Ok(element)
}

/// HTML5 doctype declaration.
pub fn html5_doctype() -> Raw {
    Raw::new("<!DOCTYPE html>")
}

/// `<title>` with escaped text.
pub fn title(text: &str) -> Element {
    let mut element = Element::known("title", false);
    element.push_text(escape_html(text));
    element
}

/// Stylesheet `<link>` for `url` and `media`.
pub fn css_link(url: &str, media: &str) -> Element {
    let mut element = Element::known("link", true);
    element
        .set_attribute("rel", "stylesheet")
        .set_type("text/css")
        .set_href(url)
        .set_attribute("media", media);
    element
}

/// Stylesheet `<link>` for all media.
pub fn css_link_all(url: &str) -> Element {
    css_link(url, "all")
}

/// `<base>` setting the document base URL.
pub fn base(href: &str) -> Element {
    let mut element = Element::known("base", true);
    element.set_href(href);
    element
}

/// Empty `<script>` loading `url`.
pub fn script_src(url: &str) -> Element {
    let mut element = Element::known("script", false);
    element.set_type("text/javascript").set_attribute("src", url);
    element
}

/// `<meta>` declaring the content type charset.
pub fn meta_charset(charset: &str) -> Element {
    let mut element = Element::known("meta", true);
    element
        .set_attribute("http-equiv", "Content-Type")
        .set_attribute("content", format!("text/html; charset={charset}"));
    element
}

/// Conditional comment wrapping `content`.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidRenderable`] if `content` cannot be rendered.
pub fn html_if(condition: &str, content: impl Into<Node>) -> Result<Raw, HtmlError> {
    let mut body = Container::new();
    body.embed(content)?;
    Ok(Raw::new(format!(
        "<!--[if {condition}]>{}<![endif]-->",
        body.render()
    )))
}

/// Hyperlink to `href`.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidRenderable`] if `content` cannot be rendered.
pub fn a_link(href: &str, content: impl Into<Node>) -> Result<Element, HtmlError> {
    let mut element = Element::known("a", false);
    element.set_href(href).embed(content)?;
    Ok(element)
}

/// Hyperlink opening in a new window.
///
/// # Errors
///
/// Returns [`HtmlError::InvalidRenderable`] if `content` cannot be rendered.
pub fn b_link(href: &str, content: impl Into<Node>) -> Result<Element, HtmlError> {
    let mut element = a_link(href, content)?;
    element.set_attribute("target", "_blank");
    Ok(element)
}

/// Checkbox `<input>`.
pub fn checkbox() -> Element {
    let mut element = Element::known("input", false);
    element.set_type("checkbox");
    element
}

/// `<span class="code">` with escaped text.
pub fn code(text: &str) -> Element {
    let mut element = Element::known("span", false);
    element.add_class("code").push_text(escape_html(text));
    element
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_content_tags() {
        assert_eq!(p("text").unwrap().render(), "<p>text</p>");
        assert_eq!(h2(vec!["a", "b"]).unwrap().render(), "<h2>ab</h2>");
        assert_eq!(
            ul(vec![li("one").unwrap(), li("two").unwrap()])
                .unwrap()
                .render(),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_content_tag_rejects_null() {
        assert!(span(json!(null)).is_err());
    }

    #[test]
    fn test_element_and_void() {
        assert_eq!(element("section").unwrap().render(), "<section></section>");
        assert_eq!(void("hr").unwrap().render(), "<hr />");
        assert!(element("").is_err());
        assert!(void("").is_err());
    }

    #[test]
    fn test_base() {
        assert_eq!(
            base("https://example.com/").render(),
            r#"<base href="https://example.com/" />"#
        );
    }

    #[test]
    fn test_script_sets_type() {
        assert_eq!(
            script("run();").unwrap().render(),
            r#"<script type="text/javascript">run();</script>"#
        );
    }

    #[test]
    fn test_title_escapes_text() {
        assert_eq!(title("A & B").render(), "<title>A &amp; B</title>");
    }

    #[test]
    fn test_css_link() {
        assert_eq!(
            css_link_all("/site.css").render(),
            r#"<link rel="stylesheet" type="text/css" href="/site.css" media="all" />"#
        );
        assert_eq!(
            css_link("/print.css", "print").attribute("media"),
            Some("print")
        );
    }

    #[test]
    fn test_script_src() {
        assert_eq!(
            script_src("/app.js").render(),
            r#"<script type="text/javascript" src="/app.js"></script>"#
        );
    }

    #[test]
    fn test_meta_charset() {
        assert_eq!(
            meta_charset("utf-8").render(),
            r#"<meta http-equiv="Content-Type" content="text/html; charset=utf-8" />"#
        );
    }

    #[test]
    fn test_html_if() {
        let comment = html_if("lt IE 9", script_src("/shiv.js")).unwrap();
        assert_eq!(
            comment.as_str(),
            r#"<!--[if lt IE 9]><script type="text/javascript" src="/shiv.js"></script><![endif]-->"#
        );
    }

    #[test]
    fn test_links() {
        assert_eq!(
            a_link("/docs", "Docs").unwrap().render(),
            r#"<a href="/docs">Docs</a>"#
        );
        assert_eq!(
            b_link("https://example.com", "Out").unwrap().render(),
            r#"<a href="https://example.com" target="_blank">Out</a>"#
        );
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox().render(), r#"<input type="checkbox"></input>"#);
    }

    #[test]
    fn test_code_escapes_text() {
        assert_eq!(
            code("a < b").render(),
            r#"<span class="code">a &lt; b</span>"#
        );
    }

    #[test]
    fn test_doctype() {
        assert_eq!(html5_doctype().render(), "<!DOCTYPE html>");
    }
}
