//! Paint-time measurement of inline boxes whose size was left automatic.
//!
//! An inline box's children sit side by side on one line, so its extent is
//! the sum of the children's widths and the tallest child's height.
//! Measurements are memoized per box for the lifetime of the resolver.

use boxpaint_render_core::{DebugSink, NoDebug};
use boxpaint_tree::{BoxId, BoxTree};
use boxpaint_types::{Color, Point, Rect, Size};

use crate::cache::SizeCache;
use crate::config::PaintConfig;

const DEBUG_PADDING_DASH: [f32; 2] = [0.5, 0.5];

pub struct BoxGeometryResolver<'a> {
    tree: &'a BoxTree,
    config: PaintConfig,
    cache: SizeCache,
}

impl<'a> BoxGeometryResolver<'a> {
    pub fn new(tree: &'a BoxTree, config: PaintConfig) -> Self {
        Self {
            tree,
            config,
            cache: SizeCache::new(),
        }
    }

    pub fn cache(&self) -> &SizeCache {
        &self.cache
    }

    /// Padding-box size of `id`, decided per axis: a definite axis keeps
    /// its declared extent and an automatic one takes the aggregate of the
    /// children.
    pub fn resolve_auto_size(&mut self, id: BoxId) -> Size {
        self.resolve_auto_size_traced(id, &mut NoDebug)
    }

    /// Like [`resolve_auto_size`](Self::resolve_auto_size), outlining each
    /// measured child on `sink` when inline layout tracing is enabled.
    pub fn resolve_auto_size_traced<S>(&mut self, id: BoxId, sink: &mut S) -> Size
    where
        S: DebugSink + ?Sized,
    {
        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            log::warn!("Asked to resolve the size of unknown box {}", id);
            return Size::zero();
        };
        let declared = node.geometry.padding_box_size();
        if !node.is_width_auto() && !node.is_height_auto() {
            return declared;
        }

        let mut size = self.measure_children(id, sink);
        if !node.is_width_auto() {
            size.width = declared.width;
        }
        if !node.is_height_auto() {
            size.height = declared.height;
        }
        size
    }

    /// The box's padding box on the page, or `None` for a box without
    /// children. Its origin is the first child's position shifted right by
    /// the box's own left margin.
    pub fn padding_box<S>(&mut self, id: BoxId, sink: &mut S) -> Option<Rect>
    where
        S: DebugSink + ?Sized,
    {
        let tree = self.tree;
        let first = tree.first_child(id)?;
        let origin = tree[first].geometry.position();
        let origin = Point::new(origin.x + tree[id].style.margin.left, origin.y);
        let size = self.resolve_auto_size_traced(id, sink);
        Some(Rect::from_origin_size(origin, size))
    }

    fn measure_children<S>(&mut self, id: BoxId, sink: &mut S) -> Size
    where
        S: DebugSink + ?Sized,
    {
        if let Some(size) = self.cache.get(id) {
            return size;
        }

        let tree = self.tree;
        let mut width = 0.0f32;
        let mut height = 0.0f32;

        for &child in tree.children(id) {
            if self.is_whitespace_tail(child) {
                log::trace!("Skipping trailing whitespace {} of {}", child, id);
                break;
            }

            let node = &tree[child];
            let declared = node.geometry.padding_box_size();
            let mut child_width = declared.width;
            let mut fallback_height = 0.0f32;

            if node.is_width_auto() || node.is_height_auto() {
                let measured = self.measure_children(child, sink);
                if node.is_width_auto() {
                    child_width = measured.width;
                }
                fallback_height = measured.height;
            }

            width += child_width;
            height = height.max(declared.height).max(fallback_height);

            if self.config.traces_inline_layout() {
                self.trace_child(child, sink);
            }
        }

        let size = Size::new(width, height);
        self.cache.insert(id, size);
        size
    }

    /// A lone space left at the end of a box by line wrapping.
    fn is_whitespace_tail(&self, child: BoxId) -> bool {
        self.tree[child].source.is_collapsible_whitespace()
            && self.tree.prev_sibling(child).is_some()
            && self.tree.next_sibling(child).is_none()
    }

    fn trace_child<S>(&self, child: BoxId, sink: &mut S)
    where
        S: DebugSink + ?Sized,
    {
        let node = &self.tree[child];
        let padding_box = node.geometry.padding_box();
        let border_box = padding_box.outset(&node.style.border.widths());
        sink.debug_rect(border_box, &Color::BLUE, None);
        if self.config.traces_padding_boxes() {
            sink.debug_rect(padding_box, &Color::BLUE, Some(DEBUG_PADDING_DASH));
        }
    }
}
