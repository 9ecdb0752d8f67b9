//! The box-model painter.
//!
//! Given a laid-out [`BoxTree`](boxpaint_tree::BoxTree), paints each inline
//! box's background and borders and registers its anchors and links on a
//! [`Canvas`](boxpaint_render_core::Canvas), in document order.

pub mod cache;
pub mod config;
pub mod geometry;
pub mod painting;
pub mod pass;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::SizeCache;
pub use config::PaintConfig;
pub use geometry::BoxGeometryResolver;
pub use painting::{
    BackgroundPainter, BorderPainter, BoxOutcome, BoxPainter, LinkAnchorRegistrar, PaintStage,
    Registered,
};
pub use pass::{paint_tree, PaintPass, PaintSummary};

#[cfg(test)]
mod border_test;
#[cfg(test)]
mod box_painter_test;
