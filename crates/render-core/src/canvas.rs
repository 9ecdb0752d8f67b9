use boxpaint_style::BackgroundImage;
use boxpaint_types::{AnchorId, Color, Href, Point, Rect};

/// Receives layout diagnostics. Every method defaults to doing nothing, so
/// production sinks need no code.
pub trait DebugSink {
    /// Outlines `rect`, dashed when `dash` is `[on, off]` lengths.
    fn debug_rect(&mut self, _rect: Rect, _color: &Color, _dash: Option<[f32; 2]>) {}
}

/// A [`DebugSink`] that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDebug;

impl DebugSink for NoDebug {}

/// The page surface the painter draws on.
///
/// Coordinates are in points with a top-left origin. Calls arrive in
/// document order and later primitives cover earlier ones.
pub trait Canvas: DebugSink {
    /// Opacity applied to every following primitive until changed.
    fn set_opacity(&mut self, opacity: f32);

    fn filled_rectangle(&mut self, rect: Rect, color: &Color);

    /// Fills a closed polygon. Border strokes are emitted as polygons so
    /// adjacent sides meet along their miter lines.
    fn filled_polygon(&mut self, points: &[Point], color: &Color);

    /// Draws `image` tiled according to its repeat and position, clipped to `area`.
    fn tile_image(&mut self, image: &BackgroundImage, area: Rect);

    fn add_named_dest(&mut self, id: &AnchorId, at: Point);

    fn add_link(&mut self, href: &Href, rect: Rect);
}
