//! Renderable values.
//!
//! A [`Node`] is anything that can be embedded into a
//! [`Container`](crate::Container): a primitive, a nested sequence of nodes,
//! an object implementing [`Render`], or a dynamic [`serde_json::Value`].
//!
//! Statically typed inputs are always renderable. Dynamic JSON input is
//! checked when embedded: `null` has no text form and is rejected.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::rc::Rc;

use serde_json::Value;

use crate::error::HtmlError;

/// Anything that can produce an HTML text representation.
pub trait Render {
    /// Append the rendered text to `out`.
    fn render_to(&self, out: &mut String);

    /// Render to a new string.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render_to(&self, out: &mut String) {
        (**self).render_to(out);
    }
}

/// Embeddable content.
///
/// Text converts from `&'static str`, `String` and `&String`. A borrowed
/// `&str` with a shorter lifetime has to be owned first: `name.to_owned()`.
pub enum Node {
    /// Text, emitted verbatim.
    Text(Cow<'static, str>),
    /// Integer, emitted in decimal.
    Integer(i64),
    /// Float, emitted in shortest form (`2.0` renders as `2`).
    Float(f64),
    /// Boolean, `true` renders as `1` and `false` as nothing.
    Boolean(bool),
    /// Nested nodes, flattened on embed.
    Sequence(Vec<Node>),
    /// Object with its own render operation.
    Markup(Box<dyn Render>),
    /// Dynamic value; arrays and objects are flattened on embed.
    Value(Value),
}

impl Node {
    /// Wrap any [`Render`] implementor.
    pub fn markup(value: impl Render + 'static) -> Self {
        Self::Markup(Box::new(value))
    }

    /// Check that this node can be rendered.
    ///
    /// Collections pass; their items are checked individually when embedded.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::InvalidRenderable`] for a JSON `null`.
    pub fn check(&self) -> Result<(), HtmlError> {
        match self {
            Self::Value(Value::Null) => Err(HtmlError::InvalidRenderable { kind: "null" }),
            _ => Ok(()),
        }
    }

    /// Whether this node is a collection that gets flattened on embed.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::Sequence(_) | Self::Value(Value::Array(_) | Value::Object(_))
        )
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Integer(value) => {
                let _ = write!(out, "{value}");
            }
            Self::Float(value) => {
                let _ = write!(out, "{value}");
            }
            Self::Boolean(value) => write_bool(*value, out),
            Self::Sequence(nodes) => {
                for node in nodes {
                    node.write_to(out);
                }
            }
            Self::Markup(markup) => markup.render_to(out),
            Self::Value(value) => write_value(value, out),
        }
    }
}

fn write_bool(value: bool, out: &mut String) {
    if value {
        out.push('1');
    }
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::Bool(b) => write_bool(*b, out),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(out, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(out, "{u}");
            } else if let Some(f) = n.as_f64() {
                let _ = write!(out, "{f}");
            }
        }
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            for item in items {
                write_value(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                write_value(item, out);
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Boolean(value) => f.debug_tuple("Boolean").field(value).finish(),
            Self::Sequence(nodes) => f.debug_tuple("Sequence").field(nodes).finish(),
            Self::Markup(markup) => f.debug_tuple("Markup").field(&markup.render()).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl From<&'static str> for Node {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Self::Text(Cow::Owned(value.clone()))
    }
}

impl From<Cow<'static, str>> for Node {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Text(value)
    }
}

macro_rules! node_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

node_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Node {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Integer(value),
            Err(_) => Self::Text(Cow::Owned(value.to_string())),
        }
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Integer(value),
            Err(_) => Self::Text(Cow::Owned(value.to_string())),
        }
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Box<dyn Render>> for Node {
    fn from(value: Box<dyn Render>) -> Self {
        Self::Markup(value)
    }
}

impl From<Rc<dyn Render>> for Node {
    fn from(value: Rc<dyn Render>) -> Self {
        Self::Markup(Box::new(value))
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(value: [T; N]) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Sequence(Vec::new()),
        }
    }
}

impl<T: Into<Node>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
