use crate::config::PaintConfig;
use crate::painting::BorderPainter;
use crate::test_utils::{polygon_area, RecordingCanvas};
use boxpaint_style::{BorderEdge, BorderStyle};
use boxpaint_types::{Color, Edges, Point, Rect, Side};

fn edge(style: BorderStyle, width: f32, color: Color) -> BorderEdge {
    BorderEdge::new(width, style, Some(color))
}

/// Strokes all four sides of `border_box` the way the box painter does.
fn stroke_box(painter: &BorderPainter, canvas: &mut RecordingCanvas, border_box: Rect, e: &BorderEdge) {
    let widths = Edges::all(e.width);
    let Rect { x, y, width, height } = border_box;
    painter.stroke_side(canvas, Point::new(x, y), height, e, &widths, Side::Left);
    painter.stroke_side(canvas, Point::new(x, y), width, e, &widths, Side::Top);
    painter.stroke_side(canvas, Point::new(x, y + height), width, e, &widths, Side::Bottom);
    painter.stroke_side(canvas, Point::new(x + width, y), height, e, &widths, Side::Right);
}

fn total_area(canvas: &RecordingCanvas) -> f32 {
    canvas.polygons().iter().map(|(p, _)| polygon_area(p)).sum()
}

#[test]
fn test_suppressed_sides_touch_no_primitive() {
    let _ = env_logger::builder().is_test(true).try_init();
    let painter = BorderPainter::new(PaintConfig::default());
    let widths = Edges::all(2.0);
    let mut canvas = RecordingCanvas::new();

    let transparent = BorderEdge::new(2.0, BorderStyle::Solid, None);
    let clear = edge(BorderStyle::Solid, 2.0, Color { a: 0.0, ..Color::RED });
    let none = edge(BorderStyle::None, 2.0, Color::BLACK);
    for e in [&transparent, &clear, &none] {
        painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 50.0, e, &widths, Side::Top);
    }
    let zero = edge(BorderStyle::Solid, 0.0, Color::BLACK);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 50.0, &zero, &Edges::zero(), Side::Top);

    assert!(canvas.calls.is_empty());
}

#[test]
fn test_unknown_style_fails_closed() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let e = BorderEdge::new(2.0, BorderStyle::from_keyword_lossy("wavy"), Some(Color::RED));
    assert_eq!(e.style, BorderStyle::None);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 50.0, &e, &Edges::all(2.0), Side::Top);
    assert!(canvas.calls.is_empty());
}

#[test]
fn test_solid_sides_miter_into_exact_ring() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let border_box = Rect::new(13.0, 8.0, 104.0, 24.0);
    stroke_box(&painter, &mut canvas, border_box, &edge(BorderStyle::Solid, 2.0, Color::BLACK));

    let polygons = canvas.polygons();
    assert_eq!(polygons.len(), 4);
    let ring = border_box.area() - 100.0 * 20.0;
    assert!((total_area(&canvas) - ring).abs() < 1e-3);

    // Left stroke: outer edge full height, inner edge cut at 45 degrees.
    assert_eq!(
        polygons[0].0,
        &[
            Point::new(13.0, 8.0),
            Point::new(13.0, 32.0),
            Point::new(15.0, 30.0),
            Point::new(15.0, 10.0)
        ]
    );
    // Top stroke ends on the same diagonal.
    assert_eq!(
        polygons[1].0,
        &[
            Point::new(13.0, 8.0),
            Point::new(117.0, 8.0),
            Point::new(115.0, 10.0),
            Point::new(15.0, 10.0)
        ]
    );
}

#[test]
fn test_square_cut_when_neighbour_has_no_border() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let widths = Edges::new(2.0, 0.0, 0.0, 0.0);
    let e = edge(BorderStyle::Solid, 2.0, Color::BLACK);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 40.0, &e, &widths, Side::Top);
    assert!((total_area(&canvas) - 80.0).abs() < 1e-4);
}

#[test]
fn test_double_draws_outer_and_inner_thirds() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let e = edge(BorderStyle::Double, 3.0, Color::BLACK);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 104.0, &e, &Edges::all(3.0), Side::Top);

    let polygons = canvas.polygons();
    assert_eq!(polygons.len(), 2);
    assert!((polygon_area(polygons[0].0) - 103.0).abs() < 1e-3);
    assert!((polygon_area(polygons[1].0) - 99.0).abs() < 1e-3);
}

#[test]
fn test_dashed_pattern_follows_width_ratios() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let e = edge(BorderStyle::Dashed, 2.0, Color::BLACK);
    let widths = Edges::new(2.0, 0.0, 0.0, 0.0);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 30.0, &e, &widths, Side::Top);

    // 6pt dashes every 10pt: [0,6], [10,16], [20,26].
    let polygons = canvas.polygons();
    assert_eq!(polygons.len(), 3);
    assert!(polygons.iter().all(|(p, _)| (polygon_area(p) - 12.0).abs() < 1e-4));
    assert!(polygons[2].0.iter().all(|p| p.x >= 20.0 - 1e-4 && p.x <= 26.0 + 1e-4));
}

#[test]
fn test_dotted_and_configurable_ratios() {
    let e = edge(BorderStyle::Dotted, 2.0, Color::BLACK);
    let widths = Edges::new(0.0, 0.0, 0.0, 2.0);

    let mut canvas = RecordingCanvas::new();
    BorderPainter::new(PaintConfig::default())
        .stroke_side(&mut canvas, Point::new(0.0, 0.0), 10.0, &e, &widths, Side::Left);
    assert_eq!(canvas.polygons().len(), 3);

    let sparse = PaintConfig {
        dot_gap_ratio: 4.0,
        ..PaintConfig::default()
    };
    let mut canvas = RecordingCanvas::new();
    BorderPainter::new(sparse)
        .stroke_side(&mut canvas, Point::new(0.0, 0.0), 10.0, &e, &widths, Side::Left);
    assert_eq!(canvas.polygons().len(), 1);
}

#[test]
fn test_hairline_dots_cover_the_whole_side() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let e = edge(BorderStyle::Dotted, 0.01, Color::BLACK);
    let widths = Edges::new(0.01, 0.0, 0.0, 0.0);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 500.0, &e, &widths, Side::Top);

    let polygons = canvas.polygons();
    assert!(!polygons.is_empty() && polygons.len() <= 10_000);
    let furthest = polygons
        .iter()
        .flat_map(|(p, _)| p.iter().map(|pt| pt.x))
        .fold(0.0f32, f32::max);
    assert!(furthest > 499.9 && furthest <= 500.0, "furthest x = {}", furthest);
}

#[test]
fn test_dashes_stay_inside_mitered_trapezoid() {
    let painter = BorderPainter::new(PaintConfig::default());
    let mut canvas = RecordingCanvas::new();
    let e = edge(BorderStyle::Dashed, 2.0, Color::BLACK);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 30.0, &e, &Edges::all(2.0), Side::Top);

    // The first dash loses the corner triangle to the left side's miter.
    let first = canvas.polygons()[0].0.to_vec();
    assert!((polygon_area(&first) - 10.0).abs() < 1e-4);
}

#[test]
fn test_groove_and_ridge_shade_per_side() {
    let painter = BorderPainter::new(PaintConfig::default());
    let dark = Color::rgb(171, 0, 0);
    let light = Color::rgb(255, 41, 41);
    assert_eq!(painter.dark_variant(&Color::RED), dark);
    assert_eq!(painter.light_variant(&Color::RED), light);

    let mut canvas = RecordingCanvas::new();
    let groove = edge(BorderStyle::Groove, 4.0, Color::RED);
    let widths = Edges::all(4.0);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 50.0, &groove, &widths, Side::Top);
    painter.stroke_side(&mut canvas, Point::new(0.0, 20.0), 50.0, &groove, &widths, Side::Bottom);
    let colors: Vec<_> = canvas.polygons().into_iter().map(|(_, c)| c.clone()).collect();
    assert_eq!(colors, vec![dark.clone(), light.clone(), light.clone(), dark.clone()]);

    let mut canvas = RecordingCanvas::new();
    let ridge = edge(BorderStyle::Ridge, 4.0, Color::RED);
    painter.stroke_side(&mut canvas, Point::new(0.0, 0.0), 50.0, &ridge, &widths, Side::Top);
    let colors: Vec<_> = canvas.polygons().into_iter().map(|(_, c)| c.clone()).collect();
    assert_eq!(colors, vec![light, dark]);
}

#[test]
fn test_inset_and_outset_are_opposite() {
    let painter = BorderPainter::new(PaintConfig::default());
    for side in Side::ALL {
        let inset = painter.inset_color(&Color::BLUE, side);
        let outset = painter.outset_color(&Color::BLUE, side);
        assert_ne!(inset, outset);
    }
    assert_eq!(
        painter.inset_color(&Color::BLUE, Side::Top),
        painter.outset_color(&Color::BLUE, Side::Bottom)
    );

    let mut canvas = RecordingCanvas::new();
    let e = edge(BorderStyle::Inset, 2.0, Color::BLUE);
    stroke_box(&painter, &mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0), &e);
    assert_eq!(canvas.polygons().len(), 4);
    assert!((total_area(&canvas) - (400.0 - 256.0)).abs() < 1e-3);
}
