//! Template rendering.
//!
//! The title bar's markup lives in a small XML template that is compiled into
//! the library. [`render_template`] parses that markup into a [`Document`] and
//! returns a [`TitleBarView`]: a descriptor with a named handle for every
//! region the widget needs to address.
//!
//! Resolving the handles happens exactly once, while rendering, and a template
//! that lacks any required region fails construction with
//! [`Error::MalformedTemplate`] instead of surfacing later as a dangling
//! lookup.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::view::{Document, NodeKey};

/// Named handles into a rendered title-bar fragment.
///
/// Every field addresses a node the widget mutates at some point in its
/// lifecycle. The handles stay valid as long as the fragment's document does.
#[derive(Debug, Clone, Copy)]
pub struct TitleBarView {
    /// The fragment root (the bar itself).
    pub root: NodeKey,
    /// The icon region.
    pub icon: NodeKey,
    /// The title text region.
    pub title: NodeKey,
    /// The minimize control.
    pub minimize: NodeKey,
    /// The resize (maximize/restore) control.
    pub resize: NodeKey,
    /// The close control.
    pub close: NodeKey,
    /// The rectangle shape of the icon glyph.
    pub icon_rect: NodeKey,
    /// The path shape of the icon glyph.
    pub icon_path: NodeKey,
    /// The polygon shape of the icon glyph.
    pub icon_polygon: NodeKey,
}

/// Render a markup template into `doc` and resolve the typed view handles.
///
/// The template must contain a single root element, a `label` title region,
/// an `icon` region whose subtree holds exactly one `rect`, `path` and
/// `polygon` shape, and three elements with `role` attributes `minimize`,
/// `resize` and `close`.
///
/// Fails with [`Error::TemplateParse`] on unparseable markup and
/// [`Error::MalformedTemplate`] when a required region is missing.
pub fn render_template(doc: &mut Document, markup: &str) -> Result<TitleBarView> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = true;

    let mut builder = TemplateBuilder::default();

    loop {
        match reader.read_event() {
            Err(e) => return Err(Error::TemplateParse(e.to_string())),
            Ok(Event::Eof) => break,
            Ok(Event::Start(start)) => {
                let key = builder.open_element(doc, &start)?;
                builder.stack.push(key);
            }
            Ok(Event::Empty(start)) => {
                builder.open_element(doc, &start)?;
            }
            Ok(Event::End(_)) => {
                builder.stack.pop();
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| Error::TemplateParse(e.to_string()))?;
                if let Some(&top) = builder.stack.last() {
                    doc.set_text(top, text.as_ref());
                }
            }
            // Comments, processing instructions, declarations
            Ok(_) => {}
        }
    }

    builder.finish(doc)
}

/// Accumulates nodes and role handles while walking the template events.
#[derive(Default)]
struct TemplateBuilder {
    stack: Vec<NodeKey>,
    root: Option<NodeKey>,
    icon: Option<NodeKey>,
    title: Option<NodeKey>,
    minimize: Option<NodeKey>,
    resize: Option<NodeKey>,
    close: Option<NodeKey>,
    rect: Option<NodeKey>,
    path: Option<NodeKey>,
    polygon: Option<NodeKey>,
}

impl TemplateBuilder {
    /// Create an element for an opening tag, attach it, and record any role
    /// handle it provides. First occurrence wins for every handle.
    fn open_element(&mut self, doc: &mut Document, start: &BytesStart<'_>) -> Result<NodeKey> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let key = doc.create_element(&tag);

        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::TemplateParse(e.to_string()))?;
            let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::TemplateParse(e.to_string()))?
                .into_owned();

            if name == "class" {
                for class in value.split_whitespace() {
                    doc.add_class(key, class);
                }
            } else {
                if name == "role" {
                    let slot = match value.as_str() {
                        "minimize" => Some(&mut self.minimize),
                        "resize" => Some(&mut self.resize),
                        "close" => Some(&mut self.close),
                        _ => None,
                    };
                    if let Some(slot) = slot {
                        slot.get_or_insert(key);
                    }
                }
                doc.set_attribute(key, &name, value);
            }
        }

        match self.stack.last() {
            Some(&parent) => doc.append_child(parent, key),
            None => {
                if self.root.is_some() {
                    return Err(Error::TemplateParse(
                        "template has more than one root element".to_string(),
                    ));
                }
                self.root = Some(key);
            }
        }

        match tag.as_str() {
            "icon" => {
                self.icon.get_or_insert(key);
            }
            "label" => {
                self.title.get_or_insert(key);
            }
            "rect" => {
                self.rect.get_or_insert(key);
            }
            "path" => {
                self.path.get_or_insert(key);
            }
            "polygon" => {
                self.polygon.get_or_insert(key);
            }
            _ => {}
        }

        Ok(key)
    }

    /// Validate that every required region was found and that the glyph
    /// shapes live inside the icon region.
    fn finish(self, doc: &Document) -> Result<TitleBarView> {
        fn require(slot: Option<NodeKey>, role: &'static str) -> Result<NodeKey> {
            slot.ok_or(Error::MalformedTemplate { role })
        }

        let root = require(self.root, "root element")?;
        let icon = require(self.icon, "icon region")?;
        let title = require(self.title, "title region")?;
        let minimize = require(self.minimize, "minimize control")?;
        let resize = require(self.resize, "resize control")?;
        let close = require(self.close, "close control")?;
        let icon_rect = require(self.rect, "icon rect shape")?;
        let icon_path = require(self.path, "icon path shape")?;
        let icon_polygon = require(self.polygon, "icon polygon shape")?;

        for (shape, role) in [
            (icon_rect, "icon rect shape"),
            (icon_path, "icon path shape"),
            (icon_polygon, "icon polygon shape"),
        ] {
            if !doc.contains(icon, shape) {
                return Err(Error::MalformedTemplate { role });
            }
        }

        Ok(TitleBarView {
            root,
            icon,
            title,
            minimize,
            resize,
            close,
            icon_rect,
            icon_path,
            icon_polygon,
        })
    }
}
