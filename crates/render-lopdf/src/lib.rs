//! PDF output for the box painter using lopdf.
//!
//! [`PdfDocumentBuilder`] owns the document and hands out one
//! [`LopdfCanvas`] per page. The canvas takes top-left page coordinates and
//! flips them into PDF user space as it writes operators.

mod canvas;
mod document;

pub use canvas::{ImageXObject, LopdfCanvas, PageContent};
pub use document::{PdfDocumentBuilder, PdfPageConfig};
