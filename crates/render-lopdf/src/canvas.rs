//! A [`Canvas`] that records one page as a `lopdf` content stream.

use boxpaint_render_core::utils::{flip_point, flip_y, pdf_rect};
use boxpaint_render_core::{Canvas, DebugSink};
use boxpaint_style::BackgroundImage;
use boxpaint_types::{AnchorId, Color, Href, Point, Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::Object;
use std::collections::{BTreeMap, BTreeSet, HashMap};

const DEBUG_LINE_WIDTH: f32 = 0.5;

/// An image XObject already written to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageXObject {
    pub object_id: lopdf::ObjectId,
    /// Name the page resources know the image by, e.g. `Im1`.
    pub resource_name: String,
    /// Natural size in points.
    pub size: Size,
}

/// Everything a painted page needs to be written out.
#[derive(Debug)]
pub struct PageContent {
    pub content: Content,
    /// ExtGState resource name to alpha.
    pub ext_gstates: BTreeMap<String, f32>,
    /// Resource names of the images drawn on the page.
    pub xobjects: BTreeSet<String>,
    /// Link rectangles in PDF coordinates (`[llx, lly, urx, ury]`).
    pub links: Vec<(Href, [f32; 4])>,
    /// Destination points in PDF coordinates; later entries win.
    pub named_dests: Vec<(AnchorId, Point)>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            content: Content { operations: Vec::new() },
            ext_gstates: BTreeMap::new(),
            xobjects: BTreeSet::new(),
            links: Vec::new(),
            named_dests: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct GraphicsState {
    fill_color: Option<Color>,
    /// Opacity of the box being painted.
    opacity: f32,
    /// Alpha of the ExtGState last selected, if any.
    alpha: Option<f32>,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill_color: None,
            opacity: 1.0,
            alpha: None,
        }
    }
}

pub struct LopdfCanvas<'a> {
    page_height: f32,
    images: &'a HashMap<String, ImageXObject>,
    page: PageContent,
    state: GraphicsState,
}

impl<'a> LopdfCanvas<'a> {
    pub fn new(page_height: f32, images: &'a HashMap<String, ImageXObject>) -> Self {
        Self {
            page_height,
            images,
            page: PageContent::default(),
            state: GraphicsState::default(),
        }
    }

    pub fn finish(self) -> PageContent {
        self.page
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.page.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color.as_ref() != Some(color) {
            self.push("rg", rgb_operands(color));
            self.state.fill_color = Some(color.clone());
        }
    }

    /// Selects the ExtGState for `alpha`, registering it on first use.
    fn select_alpha(&mut self, alpha: f32) {
        if self.state.alpha == Some(alpha) {
            return;
        }
        let name = Self::ext_gstate_name(alpha);
        self.push("gs", vec![Object::Name(name.as_bytes().to_vec())]);
        self.page.ext_gstates.insert(name, alpha);
        self.state.alpha = Some(alpha);
    }

    /// Box opacity combined with the color's own alpha. An unset state
    /// already paints at full alpha.
    fn apply_alpha(&mut self, color_alpha: f32) {
        let alpha = self.state.opacity * color_alpha.clamp(0.0, 1.0);
        if self.state.alpha.unwrap_or(1.0) != alpha {
            self.select_alpha(alpha);
        }
    }

    fn ext_gstate_name(alpha: f32) -> String {
        format!("GS{}", (alpha * 1000.0).round() as u32)
    }
}

fn rgb_operands(color: &Color) -> Vec<Object> {
    let [r, g, b] = color.to_unit_rgb();
    vec![r.into(), g.into(), b.into()]
}

impl DebugSink for LopdfCanvas<'_> {
    fn debug_rect(&mut self, rect: Rect, color: &Color, dash: Option<[f32; 2]>) {
        let dash_array: Vec<Object> = dash
            .map(|[on, off]| vec![on.into(), off.into()])
            .unwrap_or_default();
        self.push("q", vec![]);
        self.push("RG", rgb_operands(color));
        self.push("w", vec![DEBUG_LINE_WIDTH.into()]);
        self.push("d", vec![Object::Array(dash_array), 0.into()]);
        self.push(
            "re",
            vec![
                rect.x.into(),
                flip_y(rect.bottom(), self.page_height).into(),
                rect.width.into(),
                rect.height.into(),
            ],
        );
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }
}

impl Canvas for LopdfCanvas<'_> {
    fn set_opacity(&mut self, opacity: f32) {
        let alpha = opacity.clamp(0.0, 1.0);
        self.state.opacity = alpha;
        self.select_alpha(alpha);
    }

    fn filled_rectangle(&mut self, rect: Rect, color: &Color) {
        self.apply_alpha(color.a);
        self.set_fill_color(color);
        self.push(
            "re",
            vec![
                rect.x.into(),
                flip_y(rect.bottom(), self.page_height).into(),
                rect.width.into(),
                rect.height.into(),
            ],
        );
        self.push("f", vec![]);
    }

    fn filled_polygon(&mut self, points: &[Point], color: &Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.apply_alpha(color.a);
        self.set_fill_color(color);
        let start = flip_point(*first, self.page_height);
        self.push("m", vec![start.x.into(), start.y.into()]);
        for point in rest {
            let p = flip_point(*point, self.page_height);
            self.push("l", vec![p.x.into(), p.y.into()]);
        }
        self.push("h", vec![]);
        self.push("f", vec![]);
    }

    fn tile_image(&mut self, image: &BackgroundImage, area: Rect) {
        let Some(xobject) = self.images.get(&image.src) else {
            log::warn!("Background image '{}' is not registered; skipping", image.src);
            return;
        };
        let name = xobject.resource_name.clone();
        let tiles = image.tile_rects(area, xobject.size);
        if tiles.is_empty() {
            return;
        }
        self.apply_alpha(1.0);

        self.push("q", vec![]);
        self.push(
            "re",
            vec![
                area.x.into(),
                flip_y(area.bottom(), self.page_height).into(),
                area.width.into(),
                area.height.into(),
            ],
        );
        self.push("W", vec![]);
        self.push("n", vec![]);
        for tile in tiles {
            self.push("q", vec![]);
            self.push(
                "cm",
                vec![
                    tile.width.into(),
                    0.into(),
                    0.into(),
                    tile.height.into(),
                    tile.x.into(),
                    flip_y(tile.bottom(), self.page_height).into(),
                ],
            );
            self.push("Do", vec![Object::Name(name.as_bytes().to_vec())]);
            self.push("Q", vec![]);
        }
        self.push("Q", vec![]);
        self.page.xobjects.insert(name);
    }

    fn add_named_dest(&mut self, id: &AnchorId, at: Point) {
        self.page
            .named_dests
            .push((id.clone(), flip_point(at, self.page_height)));
    }

    fn add_link(&mut self, href: &Href, rect: Rect) {
        self.page
            .links
            .push((href.clone(), pdf_rect(rect, self.page_height)));
    }
}
