//! Named destinations and link regions for painted boxes.

use boxpaint_render_core::{Canvas, DocumentContext, UrlResolver};
use boxpaint_tree::SourceNode;
use boxpaint_types::{AnchorId, Href, Point, Rect};

pub struct LinkAnchorRegistrar<'a> {
    urls: &'a dyn UrlResolver,
    document: &'a DocumentContext,
}

/// What [`LinkAnchorRegistrar::register_box`] added to the canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registered {
    pub anchors: usize,
    pub links: usize,
}

impl<'a> LinkAnchorRegistrar<'a> {
    pub fn new(urls: &'a dyn UrlResolver, document: &'a DocumentContext) -> Self {
        Self { urls, document }
    }

    pub fn register_named_destination<C>(&self, canvas: &mut C, id: &str, position: Point)
    where
        C: Canvas + ?Sized,
    {
        if id.is_empty() {
            return;
        }
        canvas.add_named_dest(&AnchorId::from(id), position);
    }

    /// Adds a link over `rect`, resolving `href` against the document first
    /// and falling back to the raw value when that fails.
    pub fn register_link<C>(&self, canvas: &mut C, href: &str, rect: Rect)
    where
        C: Canvas + ?Sized,
    {
        if href.is_empty() {
            return;
        }
        let target = self.urls.resolve(self.document, href).unwrap_or_else(|| {
            log::debug!("Link target '{}' could not be resolved; using it as-is", href);
            Href::from(href)
        });
        canvas.add_link(&target, rect);
    }

    /// Registers everything `source` declares for a box painted at `border_box`.
    ///
    /// Only a box whose own node is a hyperlink becomes a link; a box merely
    /// nested inside one does not.
    pub fn register_box<C>(&self, canvas: &mut C, source: &SourceNode, border_box: Rect) -> Registered
    where
        C: Canvas + ?Sized,
    {
        let mut registered = Registered::default();
        let top_left = border_box.origin();

        if let Some(id) = source.attr("id") {
            self.register_named_destination(canvas, id, top_left);
            registered.anchors += 1;
        }

        if !source.is_hyperlink() {
            return registered;
        }
        if let Some(name) = source.attr("name") {
            self.register_named_destination(canvas, name, top_left);
            registered.anchors += 1;
        }
        if let Some(href) = source.attr("href") {
            self.register_link(canvas, href, border_box);
            registered.links += 1;
        }
        registered
    }
}
