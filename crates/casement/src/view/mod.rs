//! View layer: the retained element tree and the template renderer.

mod document;
mod template;

pub use document::{Document, Node, NodeKey};
pub use template::{render_template, TitleBarView};
