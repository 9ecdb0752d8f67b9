use crate::parsers::{self, StyleParseError};
use boxpaint_types::{Color, Edges, Side};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl BorderStyle {
    /// Maps a keyword to a style, treating anything unrecognised as `None`.
    pub fn from_keyword_lossy(keyword: &str) -> Self {
        keyword.parse().unwrap_or_else(|_| {
            log::warn!("Unknown border style '{}', treating it as 'none'", keyword);
            BorderStyle::None
        })
    }
}

impl FromStr for BorderStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "hidden" => Ok(BorderStyle::None),
            "solid" => Ok(BorderStyle::Solid),
            "dashed" => Ok(BorderStyle::Dashed),
            "dotted" => Ok(BorderStyle::Dotted),
            "double" => Ok(BorderStyle::Double),
            "groove" => Ok(BorderStyle::Groove),
            "ridge" => Ok(BorderStyle::Ridge),
            "inset" => Ok(BorderStyle::Inset),
            "outset" => Ok(BorderStyle::Outset),
            _ => Err(StyleParseError::InvalidValue {
                property: "border-style".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// One resolved border side. A `color` of `None` is `transparent`.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct BorderEdge {
    pub width: f32,
    pub style: BorderStyle,
    pub color: Option<Color>,
}

impl Eq for BorderEdge {}

impl Hash for BorderEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.style.hash(state);
        self.color.hash(state);
    }
}

impl BorderEdge {
    pub fn new(width: f32, style: BorderStyle, color: Option<Color>) -> Self {
        Self {
            width,
            style,
            color,
        }
    }

    /// Whether painting this edge can produce any mark at all.
    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None
            && self.color.as_ref().is_some_and(|c| c.a > 0.0)
            && self.width > 0.0
    }

    /// The width as used for layout: a `none` edge occupies no space.
    pub fn used_width(&self) -> f32 {
        if self.style == BorderStyle::None {
            0.0
        } else {
            self.width.max(0.0)
        }
    }
}

impl<'de> Deserialize<'de> for BorderEdge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BorderDef {
            Str(String),
            Map {
                #[serde(default)]
                width: f32,
                #[serde(default)]
                style: BorderStyle,
                #[serde(default)]
                color: Option<Color>,
            },
        }

        match BorderDef::deserialize(deserializer)? {
            BorderDef::Str(s) => {
                parsers::run_parser(parsers::parse_border, &s).map_err(de::Error::custom)
            }
            BorderDef::Map {
                width,
                style,
                color,
            } => Ok(BorderEdge::new(width, style, color)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderSides {
    #[serde(default)]
    pub top: BorderEdge,
    #[serde(default)]
    pub right: BorderEdge,
    #[serde(default)]
    pub bottom: BorderEdge,
    #[serde(default)]
    pub left: BorderEdge,
}

impl BorderSides {
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            top: edge.clone(),
            right: edge.clone(),
            bottom: edge.clone(),
            left: edge,
        }
    }

    pub fn get(&self, side: Side) -> &BorderEdge {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut BorderEdge {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Resolved widths in top/right/bottom/left order.
    pub fn widths(&self) -> Edges<f32> {
        Edges::new(
            self.top.used_width(),
            self.right.used_width(),
            self.bottom.used_width(),
            self.left.used_width(),
        )
    }
}
