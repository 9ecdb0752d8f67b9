//! Per-side border strokes.
//!
//! Each side is painted as filled polygons lying in a trapezoid: the outer
//! edge spans the full side length and the inner edge is pulled in by the
//! adjacent sides' widths, so neighbouring sides meet on the miter diagonal
//! with neither gap nor overlap. Styles differ only in which *bands* of that
//! trapezoid they fill (a band is the strip between two fractional depths of
//! the border width) and in which colors they use.

use boxpaint_render_core::Canvas;
use boxpaint_style::{BorderEdge, BorderStyle};
use boxpaint_types::{Color, Edges, Point, Side};

use crate::config::PaintConfig;

/// Upper bound on dashes or dots emitted for one side. Longer patterns are
/// stretched to fit.
const MAX_SEGMENTS: usize = 10_000;

/// A point in a side's own frame: `s` runs along the side from its start
/// corner, `d` runs inwards from the outer edge.
type Local = (f32, f32);

pub struct BorderPainter {
    config: PaintConfig,
}

impl BorderPainter {
    pub fn new(config: PaintConfig) -> Self {
        Self { config }
    }

    /// Strokes one side of a border box.
    ///
    /// `origin` is the outer corner the side starts from: the top-left corner
    /// for the top and left sides, the bottom-left corner for the bottom
    /// side and the top-right corner for the right side. `length` is the
    /// outer length of the side and `widths` holds all four used border
    /// widths, which set the miter at each end.
    pub fn stroke_side<C>(
        &self,
        canvas: &mut C,
        origin: Point,
        length: f32,
        edge: &BorderEdge,
        widths: &Edges<f32>,
        side: Side,
    ) where
        C: Canvas + ?Sized,
    {
        let widths = widths.clamped();
        let depth = widths.get(side);
        let color = match edge.color.as_ref() {
            Some(color) if edge.is_visible() && depth > 0.0 && length > 0.0 => color,
            _ => {
                log::trace!("Border {:?} suppressed: {:?}, width {}", side, edge.style, depth);
                return;
            }
        };

        let frame = SideFrame::new(origin, length, &widths, side);
        match edge.style {
            BorderStyle::None => {}
            BorderStyle::Solid => frame.fill_band(canvas, 0.0, 1.0, color),
            BorderStyle::Double => {
                frame.fill_band(canvas, 0.0, 1.0 / 3.0, color);
                frame.fill_band(canvas, 2.0 / 3.0, 1.0, color);
            }
            BorderStyle::Dashed => frame.fill_pattern(
                canvas,
                self.config.dash_length_ratio * depth,
                self.config.dash_gap_ratio * depth,
                color,
            ),
            BorderStyle::Dotted => frame.fill_pattern(
                canvas,
                self.config.dot_length_ratio * depth,
                self.config.dot_gap_ratio * depth,
                color,
            ),
            BorderStyle::Groove => {
                frame.fill_band(canvas, 0.0, 0.5, &self.inset_color(color, side));
                frame.fill_band(canvas, 0.5, 1.0, &self.outset_color(color, side));
            }
            BorderStyle::Ridge => {
                frame.fill_band(canvas, 0.0, 0.5, &self.outset_color(color, side));
                frame.fill_band(canvas, 0.5, 1.0, &self.inset_color(color, side));
            }
            BorderStyle::Inset => frame.fill_band(canvas, 0.0, 1.0, &self.inset_color(color, side)),
            BorderStyle::Outset => {
                frame.fill_band(canvas, 0.0, 1.0, &self.outset_color(color, side))
            }
        }
    }

    pub fn dark_variant(&self, color: &Color) -> Color {
        color.shade(self.config.shade_amount)
    }

    pub fn light_variant(&self, color: &Color) -> Color {
        color.tint(self.config.tint_amount)
    }

    /// An inset box looks sunk: lit from the bottom right.
    pub fn inset_color(&self, color: &Color, side: Side) -> Color {
        match side {
            Side::Top | Side::Left => self.dark_variant(color),
            Side::Bottom | Side::Right => self.light_variant(color),
        }
    }

    pub fn outset_color(&self, color: &Color, side: Side) -> Color {
        match side {
            Side::Top | Side::Left => self.light_variant(color),
            Side::Bottom | Side::Right => self.dark_variant(color),
        }
    }
}

struct SideFrame {
    origin: Point,
    along: (f32, f32),
    inward: (f32, f32),
    length: f32,
    depth: f32,
    start_miter: f32,
    end_miter: f32,
}

impl SideFrame {
    fn new(origin: Point, length: f32, widths: &Edges<f32>, side: Side) -> Self {
        let (start, end) = side.adjacent();
        let (along, inward) = match side {
            Side::Top => ((1.0, 0.0), (0.0, 1.0)),
            Side::Bottom => ((1.0, 0.0), (0.0, -1.0)),
            Side::Left => ((0.0, 1.0), (1.0, 0.0)),
            Side::Right => ((0.0, 1.0), (-1.0, 0.0)),
        };
        Self {
            origin,
            along,
            inward,
            length,
            depth: widths.get(side),
            start_miter: widths.get(start),
            end_miter: widths.get(end),
        }
    }

    /// The quadrilateral between fractional depths `f0` and `f1`.
    fn band(&self, f0: f32, f1: f32) -> [Local; 4] {
        [
            (self.start_miter * f0, self.depth * f0),
            (self.length - self.end_miter * f0, self.depth * f0),
            (self.length - self.end_miter * f1, self.depth * f1),
            (self.start_miter * f1, self.depth * f1),
        ]
    }

    fn to_page(&self, (s, d): Local) -> Point {
        Point::new(
            self.origin.x + self.along.0 * s + self.inward.0 * d,
            self.origin.y + self.along.1 * s + self.inward.1 * d,
        )
    }

    fn fill_local<C>(&self, canvas: &mut C, polygon: &[Local], color: &Color)
    where
        C: Canvas + ?Sized,
    {
        if polygon.len() < 3 {
            return;
        }
        let points: Vec<Point> = polygon.iter().map(|&p| self.to_page(p)).collect();
        canvas.filled_polygon(&points, color);
    }

    fn fill_band<C>(&self, canvas: &mut C, f0: f32, f1: f32, color: &Color)
    where
        C: Canvas + ?Sized,
    {
        self.fill_local(canvas, &self.band(f0, f1), color);
    }

    /// Fills the full-depth band in `on`-long pieces separated by `off`.
    fn fill_pattern<C>(&self, canvas: &mut C, on: f32, off: f32, color: &Color)
    where
        C: Canvas + ?Sized,
    {
        if on <= 0.0 || off < 0.0 {
            log::warn!("Degenerate border pattern ({} on, {} off); drawing solid", on, off);
            self.fill_band(canvas, 0.0, 1.0, color);
            return;
        }

        let (on, off) = fit_pattern(self.length, on, off);
        let band = self.band(0.0, 1.0);
        for i in 0..MAX_SEGMENTS {
            let start = i as f32 * (on + off);
            if start >= self.length {
                break;
            }
            let end = (start + on).min(self.length);
            self.fill_local(canvas, &clip_to_span(&band, start, end), color);
        }
    }
}

/// Scales a dash pattern so that `MAX_SEGMENTS` periods cover `length`.
fn fit_pattern(length: f32, on: f32, off: f32) -> (f32, f32) {
    let period = on + off;
    let needed = length / period;
    if needed <= MAX_SEGMENTS as f32 {
        return (on, off);
    }
    let scale = needed / MAX_SEGMENTS as f32;
    log::debug!(
        "Border pattern of period {} needs {:.0} pieces over {}; stretching by {}",
        period,
        needed,
        length,
        scale
    );
    (on * scale, off * scale)
}

/// Clips a convex polygon to `lo <= s <= hi` (Sutherland-Hodgman).
fn clip_to_span(polygon: &[Local], lo: f32, hi: f32) -> Vec<Local> {
    let kept = clip_half_plane(polygon, |(s, _)| s - lo);
    clip_half_plane(&kept, |(s, _)| hi - s)
}

fn clip_half_plane(polygon: &[Local], distance: impl Fn(Local) -> f32) -> Vec<Local> {
    let mut out = Vec::with_capacity(polygon.len() + 2);
    for (i, &current) in polygon.iter().enumerate() {
        let previous = polygon[(i + polygon.len() - 1) % polygon.len()];
        let dc = distance(current);
        let dp = distance(previous);
        if dc >= 0.0 {
            if dp < 0.0 {
                out.push(crossing(previous, current, dp, dc));
            }
            out.push(current);
        } else if dp >= 0.0 {
            out.push(crossing(previous, current, dp, dc));
        }
    }
    out
}

fn crossing(a: Local, b: Local, da: f32, db: f32) -> Local {
    let t = da / (da - db);
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}
