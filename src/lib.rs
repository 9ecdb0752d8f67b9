//! Paints positioned inline boxes (backgrounds, borders, links) and writes
//! them to PDF.
//!
//! The work is split across the workspace crates re-exported below; this
//! crate wires them into a [`DocumentPipeline`].

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{parse_document, render_to_pdf, DocumentPipeline, PipelineBuilder};

pub use boxpaint_paint::{paint_tree, PaintConfig, PaintPass, PaintSummary};
pub use boxpaint_render_core::{BaseUrlResolver, Canvas, DebugSink, DocumentContext, UrlResolver};
pub use boxpaint_render_lopdf::{PdfDocumentBuilder, PdfPageConfig};
pub use boxpaint_style::{BoxStyle, PageSize};
pub use boxpaint_tree::{BoxDescription, BoxId, BoxTree, Fragment};
pub use boxpaint_types::{Color, Point, Rect, Size};
