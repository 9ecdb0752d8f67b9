use boxpaint_render_core::{Canvas, DocumentContext, NoDebug, UrlResolver};
use boxpaint_tree::{BoxId, BoxNode, BoxTree};
use boxpaint_types::{Edges, Point, Rect, Side};

use super::background::BackgroundPainter;
use super::border::BorderPainter;
use super::links::{LinkAnchorRegistrar, Registered};
use crate::config::PaintConfig;
use crate::geometry::BoxGeometryResolver;

/// Progress of one box through [`BoxPainter::paint_box`]. Stages only move
/// forward; a box without children jumps from `Start` to `Done`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStage {
    Start,
    SizeResolved { padding_box: Rect },
    BackgroundPainted { padding_box: Rect },
    BordersPainted { border_box: Rect },
    AnchorsRegistered,
    Done,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BoxOutcome {
    /// `None` when the box painted nothing.
    pub border_box: Option<Rect>,
    pub registered: Registered,
}

/// Paints one inline box at a time: background, borders, then anchors.
///
/// Children are not visited; the caller walks the tree in document order.
pub struct BoxPainter<'a> {
    tree: &'a BoxTree,
    config: PaintConfig,
    resolver: BoxGeometryResolver<'a>,
    borders: BorderPainter,
    links: LinkAnchorRegistrar<'a>,
}

impl<'a> BoxPainter<'a> {
    pub fn new(
        tree: &'a BoxTree,
        config: PaintConfig,
        urls: &'a dyn UrlResolver,
        document: &'a DocumentContext,
    ) -> Self {
        Self {
            tree,
            config,
            resolver: BoxGeometryResolver::new(tree, config),
            borders: BorderPainter::new(config),
            links: LinkAnchorRegistrar::new(urls, document),
        }
    }

    pub fn resolver(&mut self) -> &mut BoxGeometryResolver<'a> {
        &mut self.resolver
    }

    /// Paints box `id` with the given effective opacity.
    pub fn paint_box<C>(&mut self, canvas: &mut C, id: BoxId, opacity: f32) -> BoxOutcome
    where
        C: Canvas + ?Sized,
    {
        let mut outcome = BoxOutcome::default();
        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            log::warn!("Asked to paint unknown box {}", id);
            return outcome;
        };

        let mut stage = PaintStage::Start;
        loop {
            log::trace!("Box {} at {:?}", id, stage);
            stage = match stage {
                PaintStage::Start => self.start(canvas, id, opacity),
                PaintStage::SizeResolved { padding_box } => {
                    self.paint_background(canvas, node, padding_box);
                    PaintStage::BackgroundPainted { padding_box }
                }
                PaintStage::BackgroundPainted { padding_box } => {
                    let border_box = self.paint_borders(canvas, node, padding_box);
                    outcome.border_box = Some(border_box);
                    PaintStage::BordersPainted { border_box }
                }
                PaintStage::BordersPainted { border_box } => {
                    outcome.registered = self.links.register_box(canvas, &node.source, border_box);
                    PaintStage::AnchorsRegistered
                }
                PaintStage::AnchorsRegistered => PaintStage::Done,
                PaintStage::Done => return outcome,
            };
        }
    }

    fn start<C>(&mut self, canvas: &mut C, id: BoxId, opacity: f32) -> PaintStage
    where
        C: Canvas + ?Sized,
    {
        if !self.tree[id].has_children() {
            log::trace!("Box {} has no children; nothing to paint", id);
            return PaintStage::Done;
        }
        canvas.set_opacity(opacity);

        let padding_box = if self.config.traces_inline_layout() {
            self.resolver.padding_box(id, canvas)
        } else {
            self.resolver.padding_box(id, &mut NoDebug)
        };
        match padding_box {
            Some(padding_box) => PaintStage::SizeResolved { padding_box },
            None => PaintStage::Done,
        }
    }

    fn paint_background<C>(&self, canvas: &mut C, node: &BoxNode, padding_box: Rect)
    where
        C: Canvas + ?Sized,
    {
        let background = &node.style.background;
        BackgroundPainter::paint_fill(canvas, padding_box, background.color.as_ref());
        BackgroundPainter::paint_image(canvas, padding_box, background.image.as_ref(), node.fragment);
    }

    /// Strokes left (first fragment only), top, bottom, then right (last
    /// fragment only), and returns the border box.
    ///
    /// A side a fragment does not own is given zero width for mitering, so
    /// the top and bottom strokes end square where the element continues.
    fn paint_borders<C>(&self, canvas: &mut C, node: &BoxNode, padding_box: Rect) -> Rect
    where
        C: Canvas + ?Sized,
    {
        let border = &node.style.border;
        let widths = border.widths();
        let border_box = padding_box.outset(&widths);

        let draws_start = node.fragment.is_first();
        let draws_end = node.fragment.is_last();
        let mut miters: Edges<f32> = widths;
        if !draws_start {
            miters.left = 0.0;
        }
        if !draws_end {
            miters.right = 0.0;
        }

        let Rect { x, y, width, height } = border_box;
        if draws_start {
            self.borders
                .stroke_side(canvas, Point::new(x, y), height, &border.left, &miters, Side::Left);
        }
        self.borders
            .stroke_side(canvas, Point::new(x, y), width, &border.top, &miters, Side::Top);
        self.borders.stroke_side(
            canvas,
            Point::new(x, y + height),
            width,
            &border.bottom,
            &miters,
            Side::Bottom,
        );
        if draws_end {
            self.borders.stroke_side(
                canvas,
                Point::new(x + width, y),
                height,
                &border.right,
                &miters,
                Side::Right,
            );
        }
        border_box
    }
}
