pub mod background;
pub mod border;
pub mod dimension;
pub mod parsers;
pub mod style;

pub use background::{BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSpec};
pub use border::{BorderEdge, BorderSides, BorderStyle};
pub use dimension::{Dimension, Margins, PageSize};
pub use parsers::StyleParseError;
pub use style::BoxStyle;

#[cfg(test)]
mod style_test;
