use crate::config::PaintConfig;
use crate::painting::BoxPainter;
use crate::pass::{PaintPass, PaintSummary};
use crate::test_utils::{polygon_area, CanvasCall, RecordingCanvas};
use boxpaint_render_core::{BaseUrlResolver, DocumentContext};
use boxpaint_tree::BoxTree;
use boxpaint_types::{Color, Point, Rect};
use serde_json::json;

fn tree(value: serde_json::Value) -> BoxTree {
    let _ = env_logger::builder().is_test(true).try_init();
    BoxTree::from_value(value).unwrap()
}

fn bordered_span() -> serde_json::Value {
    json!({
        "tag": "span",
        "style": "border: 2pt solid black; background-color: red; margin-left: 5pt",
        "children": [ { "text": "Hello", "x": 10, "y": 10, "width": 100, "height": 20 } ]
    })
}

#[test]
fn test_inline_box_scenario() {
    let tree = tree(bordered_span());
    let mut canvas = RecordingCanvas::new();
    let summary = PaintPass::new(&tree).run(&mut canvas);

    assert_eq!(
        summary,
        PaintSummary {
            painted: 1,
            skipped: 1,
            anchors: 0,
            links: 0
        }
    );
    assert_eq!(canvas.calls[0], CanvasCall::Opacity(1.0));
    assert_eq!(
        canvas.calls[1],
        CanvasCall::FilledRectangle(Rect::new(15.0, 10.0, 100.0, 20.0), Color::RED)
    );

    let polygons = canvas.polygons();
    assert_eq!(polygons.len(), 4);
    assert!(polygons.iter().all(|(_, c)| **c == Color::BLACK));
    // left, top, bottom, right: each starts on the 104x24 border box at (13, 8).
    let starts: Vec<Point> = polygons.iter().map(|(p, _)| p[0]).collect();
    assert_eq!(
        starts,
        vec![
            Point::new(13.0, 8.0),
            Point::new(13.0, 8.0),
            Point::new(13.0, 32.0),
            Point::new(117.0, 8.0)
        ]
    );
    assert_eq!(polygons[1].0[1], Point::new(117.0, 8.0));
    assert_eq!(polygons[0].0[1], Point::new(13.0, 32.0));
    let ring: f32 = polygons.iter().map(|(p, _)| polygon_area(p)).sum();
    assert!((ring - (104.0 * 24.0 - 100.0 * 20.0)).abs() < 1e-3);
}

#[test]
fn test_background_spans_declared_width_when_height_is_auto() {
    let tree = tree(json!({
        "tag": "span",
        "style": "width: 200pt; background-color: red",
        "width": 200,
        "children": [ { "text": "Hello", "x": 10, "y": 10, "width": 100, "height": 20 } ]
    }));
    let mut canvas = RecordingCanvas::new();
    PaintPass::new(&tree).run(&mut canvas);
    assert_eq!(
        canvas.primitives()[0],
        &CanvasCall::FilledRectangle(Rect::new(10.0, 10.0, 200.0, 20.0), Color::RED)
    );
}

#[test]
fn test_box_without_children_paints_nothing() {
    let tree = tree(json!({
        "tag": "a",
        "attributes": { "id": "lost", "href": "x.html" },
        "style": "border: 2pt solid black; background-color: red",
        "width": 10, "height": 10
    }));
    let mut canvas = RecordingCanvas::new();
    let summary = PaintPass::new(&tree).run(&mut canvas);
    assert!(canvas.calls.is_empty());
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_continuation_fragments_split_start_and_end_decorations() {
    let tree = tree(json!([
        {
            "fragment": "first",
            "style": "border: 1pt solid blue; background: red url(dot.png) no-repeat",
            "children": [ { "text": "wrapped", "x": 50, "y": 0, "width": 40, "height": 10 } ]
        },
        {
            "fragment": "middle",
            "style": "border: 1pt solid blue; background: red url(dot.png) no-repeat",
            "children": [ { "text": "across", "x": 0, "y": 12, "width": 90, "height": 10 } ]
        },
        {
            "fragment": "last",
            "style": "border: 1pt solid blue; background: red url(dot.png) no-repeat",
            "children": [ { "text": "lines", "x": 0, "y": 24, "width": 30, "height": 10 } ]
        }
    ]));
    let document = DocumentContext::default();
    let mut painter = BoxPainter::new(&tree, PaintConfig::default(), &BaseUrlResolver, &document);

    let mut per_fragment = Vec::new();
    for &root in tree.roots() {
        let mut canvas = RecordingCanvas::new();
        painter.paint_box(&mut canvas, root, 1.0);
        per_fragment.push(canvas);
    }

    let images: Vec<usize> = per_fragment
        .iter()
        .map(|c| c.calls.iter().filter(|call| matches!(call, CanvasCall::TileImage(..))).count())
        .collect();
    assert_eq!(images, vec![1, 0, 0]);

    let fills: Vec<usize> = per_fragment
        .iter()
        .map(|c| c.calls.iter().filter(|call| matches!(call, CanvasCall::FilledRectangle(..))).count())
        .collect();
    assert_eq!(fills, vec![1, 1, 1]);

    // First: left, top, bottom. Middle: top, bottom. Last: top, bottom, right.
    let sides: Vec<usize> = per_fragment.iter().map(|c| c.polygons().len()).collect();
    assert_eq!(sides, vec![3, 2, 3]);

    let first = per_fragment[0].polygons();
    assert!(first[0].0.iter().all(|p| p.x <= 50.0), "left side on the first fragment");
    let last = per_fragment[2].polygons();
    assert!(last[2].0.iter().all(|p| p.x >= 30.0), "right side on the last fragment");

    // Where the element continues, top and bottom end square.
    let middle_top = per_fragment[1].polygons()[0].0.to_vec();
    assert!((polygon_area(&middle_top) - 92.0).abs() < 1e-3);
}

#[test]
fn test_link_attribution_is_one_level_deep() {
    let tree = tree(json!({
        "tag": "a",
        "attributes": { "href": "page2.html" },
        "children": [
            {
                "tag": "b",
                "children": [
                    { "tag": "i", "children": [ { "text": "deep", "x": 0, "y": 0, "width": 20, "height": 10 } ] }
                ]
            }
        ]
    }));
    let document = DocumentContext::new("file", "", "/docs/");
    let mut canvas = RecordingCanvas::new();
    let summary = PaintPass::new(&tree).with_document(document).run(&mut canvas);

    assert_eq!(summary.links, 1);
    assert_eq!(
        canvas.links(),
        vec![("file:///docs/page2.html", Rect::new(0.0, 0.0, 20.0, 10.0))]
    );
}

#[test]
fn test_named_destinations_and_effective_opacity() {
    let tree = tree(json!({
        "tag": "a",
        "attributes": { "id": "outer", "name": "start" },
        "style": { "opacity": 0.5 },
        "children": [
            {
                "tag": "span",
                "attributes": { "id": "inner" },
                "style": "opacity: 0.5",
                "children": [ { "text": "x", "x": 4, "y": 6, "width": 8, "height": 8 } ]
            }
        ]
    }));
    let mut canvas = RecordingCanvas::new();
    let summary = PaintPass::new(&tree).run(&mut canvas);

    assert_eq!(summary.anchors, 3);
    assert_eq!(canvas.named_dests(), vec!["outer", "start", "inner"]);
    let opacities: Vec<f32> = canvas
        .calls
        .iter()
        .filter_map(|c| match c {
            CanvasCall::Opacity(o) => Some(*o),
            _ => None,
        })
        .collect();
    assert_eq!(opacities, vec![0.5, 0.25]);
}

#[test]
fn test_debug_overlay_routes_to_canvas() {
    let tree = tree(bordered_span());
    let config = PaintConfig {
        debug_layout: true,
        debug_layout_inline: true,
        ..PaintConfig::default()
    };
    let mut canvas = RecordingCanvas::new();
    PaintPass::new(&tree).with_config(config).run(&mut canvas);
    assert!(canvas
        .calls
        .contains(&CanvasCall::DebugRect(Rect::new(10.0, 10.0, 100.0, 20.0), Color::BLUE, None)));
}

#[test]
fn test_transparent_box_emits_only_opacity() {
    let tree = tree(json!({
        "style": "border: 2pt solid transparent",
        "children": [ { "text": "plain", "width": 10, "height": 10 } ]
    }));
    let mut canvas = RecordingCanvas::new();
    PaintPass::new(&tree).run(&mut canvas);
    assert!(canvas.primitives().is_empty());
}
