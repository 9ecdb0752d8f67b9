//! The records stored in the box arena: where a box came from, how it was
//! placed by layout, and which fragment of its source element it is.

use boxpaint_style::BoxStyle;
use boxpaint_types::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::tree::BoxId;

/// Tag used for anonymous text runs.
pub const TEXT_TAG: &str = "#text";

/// The markup node a box was generated from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl SourceNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            attributes: BTreeMap::new(),
            text: Some(content.into()),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the attribute value, treating empty values as absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn is_hyperlink(&self) -> bool {
        self.tag.eq_ignore_ascii_case("a")
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    /// True for a text run holding exactly one collapsible space, the
    /// leftover a line break leaves at the end of an inline box.
    pub fn is_collapsible_whitespace(&self) -> bool {
        self.is_text() && self.text.as_deref() == Some(" ")
    }
}

/// Which piece of its source element a box is, when layout wrapped that
/// element across several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fragment {
    /// The element fits on one line.
    #[default]
    Whole,
    First,
    Middle,
    Last,
}

impl Fragment {
    pub fn is_first(self) -> bool {
        matches!(self, Fragment::Whole | Fragment::First)
    }

    pub fn is_last(self) -> bool {
        matches!(self, Fragment::Whole | Fragment::Last)
    }

    /// Fragment markers for an element split into `count` pieces.
    pub fn sequence(count: usize) -> Vec<Fragment> {
        match count {
            0 => Vec::new(),
            1 => vec![Fragment::Whole],
            n => {
                let mut out = Vec::with_capacity(n);
                out.push(Fragment::First);
                out.extend(std::iter::repeat_n(Fragment::Middle, n - 2));
                out.push(Fragment::Last);
                out
            }
        }
    }
}

/// Placement computed by layout: the box's position and its padding-box
/// extent, in top-left page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

impl BoxGeometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Padding-box size, with negative extents from upstream clamped to zero.
    pub fn padding_box_size(&self) -> Size {
        let size = Size::new(self.width, self.height);
        let clamped = size.clamped();
        if clamped != size {
            log::warn!(
                "Clamping negative box size {}x{} to {}x{}",
                size.width,
                size.height,
                clamped.width,
                clamped.height
            );
        }
        clamped
    }

    pub fn padding_box(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.padding_box_size())
    }
}

/// One box in the arena.
#[derive(Debug, Clone)]
pub struct BoxNode {
    pub source: SourceNode,
    pub style: Arc<BoxStyle>,
    pub geometry: BoxGeometry,
    pub fragment: Fragment,
    pub(crate) parent: Option<BoxId>,
    pub(crate) children: Vec<BoxId>,
    pub(crate) index_in_parent: usize,
}

impl BoxNode {
    pub fn new(source: SourceNode, style: Arc<BoxStyle>, geometry: BoxGeometry) -> Self {
        Self {
            source,
            style,
            geometry,
            fragment: Fragment::Whole,
            parent: None,
            children: Vec::new(),
            index_in_parent: 0,
        }
    }

    /// A text run whose size layout has already measured.
    pub fn text(content: impl Into<String>, geometry: BoxGeometry) -> Self {
        let style = BoxStyle {
            width: boxpaint_style::Dimension::Pt(geometry.width),
            height: boxpaint_style::Dimension::Pt(geometry.height),
            ..BoxStyle::default()
        };
        Self::new(SourceNode::text(content), Arc::new(style), geometry)
    }

    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.fragment = fragment;
        self
    }

    pub fn parent(&self) -> Option<BoxId> {
        self.parent
    }

    pub fn children(&self) -> &[BoxId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_width_auto(&self) -> bool {
        self.style.width.is_auto()
    }

    pub fn is_height_auto(&self) -> bool {
        self.style.height.is_auto()
    }
}
