use boxpaint_types::{Point, Rect};

/// Convert a top-left origin Y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

pub fn flip_point(point: Point, page_height: f32) -> Point {
    Point::new(point.x, flip_y(point.y, page_height))
}

/// `[llx, lly, urx, ury]` of a top-left origin rectangle, as PDF annotation
/// rectangles are written.
pub fn pdf_rect(rect: Rect, page_height: f32) -> [f32; 4] {
    [
        rect.x,
        flip_y(rect.bottom(), page_height),
        rect.right(),
        flip_y(rect.y, page_height),
    ]
}
