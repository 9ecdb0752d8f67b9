//! The per-box painters and the orchestrator that sequences them.

pub mod background;
pub mod border;
pub mod box_painter;
pub mod links;

pub use background::BackgroundPainter;
pub use border::BorderPainter;
pub use box_painter::{BoxOutcome, BoxPainter, PaintStage};
pub use links::{LinkAnchorRegistrar, Registered};
