//! Seams between the box painter and the outside world.
//!
//! - [`Canvas`] and [`DebugSink`]: the page surface primitives are written to
//! - [`UrlResolver`]: turns raw `href` values into link targets
//! - [`RenderError`] and coordinate helpers shared by backends

mod canvas;
mod error;
mod links;
pub mod utils;

pub use canvas::{Canvas, DebugSink, NoDebug};
pub use error::RenderError;
pub use links::{BaseUrlResolver, DocumentContext, UrlResolver};
