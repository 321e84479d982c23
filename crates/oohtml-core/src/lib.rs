//! Fluent HTML builder with recursive renderable content.
//!
//! This crate composes markup trees from code and renders them to text.
//!
//! # Architecture
//!
//! - [`Node`]: embeddable content (primitives, sequences, [`Render`]
//!   implementors, dynamic JSON values)
//! - [`Container`]: ordered list of embedded nodes, rendered by concatenation
//! - [`Element`]: tag name, attributes and classes around a [`Container`]
//!
//! Collections are flattened when embedded; rendering is a pure read of the
//! current tree and can be repeated. No escaping is applied implicitly, use
//! [`escape_html`] for untrusted text.
//!
//! # Example
//!
//! ```
//! use oohtml_core::{Render, tags};
//!
//! let mut list = tags::ul(vec![tags::li("one")?, tags::li("two")?])?;
//! list.add_class("items");
//! assert_eq!(
//!     list.render(),
//!     r#"<ul class="items"><li>one</li><li>two</li></ul>"#
//! );
//! # Ok::<(), oohtml_core::HtmlError>(())
//! ```

mod block;
mod container;
mod context;
mod element;
mod error;
mod escape;
mod node;
mod raw;
pub mod tags;

pub use block::BlockLoader;
pub use container::Container;
pub use context::Context;
pub use element::Element;
pub use error::HtmlError;
pub use escape::escape_html;
pub use node::{Node, Render};
pub use raw::Raw;
