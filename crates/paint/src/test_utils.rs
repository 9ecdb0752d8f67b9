//! A canvas double that records every primitive it receives.

use boxpaint_render_core::{Canvas, DebugSink};
use boxpaint_style::BackgroundImage;
use boxpaint_types::{AnchorId, Color, Href, Point, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Opacity(f32),
    FilledRectangle(Rect, Color),
    FilledPolygon(Vec<Point>, Color),
    TileImage(String, Rect),
    NamedDest(String, Point),
    Link(String, Rect),
    DebugRect(Rect, Color, Option<[f32; 2]>),
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<CanvasCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls other than opacity changes and debug outlines.
    pub fn primitives(&self) -> Vec<&CanvasCall> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, CanvasCall::Opacity(_) | CanvasCall::DebugRect(..)))
            .collect()
    }

    pub fn polygons(&self) -> Vec<(&[Point], &Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                CanvasCall::FilledPolygon(points, color) => Some((points.as_slice(), color)),
                _ => None,
            })
            .collect()
    }

    pub fn links(&self) -> Vec<(&str, Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                CanvasCall::Link(href, rect) => Some((href.as_str(), *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn named_dests(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                CanvasCall::NamedDest(id, _) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DebugSink for RecordingCanvas {
    fn debug_rect(&mut self, rect: Rect, color: &Color, dash: Option<[f32; 2]>) {
        self.calls.push(CanvasCall::DebugRect(rect, color.clone(), dash));
    }
}

impl Canvas for RecordingCanvas {
    fn set_opacity(&mut self, opacity: f32) {
        self.calls.push(CanvasCall::Opacity(opacity));
    }

    fn filled_rectangle(&mut self, rect: Rect, color: &Color) {
        self.calls.push(CanvasCall::FilledRectangle(rect, color.clone()));
    }

    fn filled_polygon(&mut self, points: &[Point], color: &Color) {
        self.calls
            .push(CanvasCall::FilledPolygon(points.to_vec(), color.clone()));
    }

    fn tile_image(&mut self, image: &BackgroundImage, area: Rect) {
        self.calls.push(CanvasCall::TileImage(image.src.clone(), area));
    }

    fn add_named_dest(&mut self, id: &AnchorId, at: Point) {
        self.calls.push(CanvasCall::NamedDest(id.to_string(), at));
    }

    fn add_link(&mut self, href: &Href, rect: Rect) {
        self.calls.push(CanvasCall::Link(href.to_string(), rect));
    }
}

/// Shoelace area of a simple polygon.
pub fn polygon_area(points: &[Point]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    (twice / 2.0).abs()
}
