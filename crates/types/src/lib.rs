pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::{Edges, Point, Rect, Side, Size};
pub use ids::{AnchorId, Href};
