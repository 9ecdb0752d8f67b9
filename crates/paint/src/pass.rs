//! One painting pass over a whole box tree.

use boxpaint_render_core::{BaseUrlResolver, Canvas, DocumentContext, UrlResolver};
use boxpaint_tree::BoxTree;

use crate::config::PaintConfig;
use crate::painting::BoxPainter;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaintSummary {
    pub painted: usize,
    pub skipped: usize,
    pub anchors: usize,
    pub links: usize,
}

static DEFAULT_RESOLVER: BaseUrlResolver = BaseUrlResolver;

/// Paints every box of a tree in document order onto one canvas.
pub struct PaintPass<'a> {
    tree: &'a BoxTree,
    config: PaintConfig,
    urls: &'a dyn UrlResolver,
    document: DocumentContext,
}

impl<'a> PaintPass<'a> {
    pub fn new(tree: &'a BoxTree) -> Self {
        Self {
            tree,
            config: PaintConfig::default(),
            urls: &DEFAULT_RESOLVER,
            document: DocumentContext::default(),
        }
    }

    pub fn with_config(mut self, config: PaintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_url_resolver(mut self, urls: &'a dyn UrlResolver) -> Self {
        self.urls = urls;
        self
    }

    pub fn with_document(mut self, document: DocumentContext) -> Self {
        self.document = document;
        self
    }

    /// Runs the pass. A box is painted before its children and its children
    /// before its next sibling, so later boxes cover earlier ones. Measured
    /// sizes are shared between boxes of this pass only.
    pub fn run<C>(&self, canvas: &mut C) -> PaintSummary
    where
        C: Canvas + ?Sized,
    {
        let mut painter = BoxPainter::new(self.tree, self.config, self.urls, &self.document);
        let mut opacity = vec![1.0f32; self.tree.len()];
        let mut summary = PaintSummary::default();

        for id in self.tree.preorder() {
            let node = &self.tree[id];
            let inherited = node.parent().map_or(1.0, |parent| opacity[parent.index()]);
            let effective = (inherited * node.style.opacity).clamp(0.0, 1.0);
            opacity[id.index()] = effective;

            let outcome = painter.paint_box(canvas, id, effective);
            if outcome.border_box.is_some() {
                summary.painted += 1;
            } else {
                summary.skipped += 1;
            }
            summary.anchors += outcome.registered.anchors;
            summary.links += outcome.registered.links;
        }

        log::debug!(
            "Painted {} boxes ({} skipped), {} anchors, {} links, {} size cache hits",
            summary.painted,
            summary.skipped,
            summary.anchors,
            summary.links,
            painter.resolver().cache().hits()
        );
        summary
    }
}

/// Paints `tree` with default settings.
pub fn paint_tree<C>(tree: &BoxTree, canvas: &mut C) -> PaintSummary
where
    C: Canvas + ?Sized,
{
    PaintPass::new(tree).run(canvas)
}
