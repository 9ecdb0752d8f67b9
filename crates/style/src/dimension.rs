//! Lengths, box edges and page sizes.
use crate::parsers::{self, StyleParseError};
use boxpaint_types::Edges;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A declared length on one axis. `Auto` means the painter must measure it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Pt(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Dimension::Pt(v) | Dimension::Percent(v) = self {
            v.to_bits().hash(state);
        }
    }
}

impl Eq for Dimension {}

/// Accepts `12`, `"12pt"`, `"50%"`, `"auto"`, `{"pt": 12}` or `{"percent": 50}`.
impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
            Tagged {
                pt: Option<f32>,
                percent: Option<f32>,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Dimension::Pt(v),
            Raw::Text(s) => parsers::run_parser(parsers::parse_dimension, &s).map_err(de::Error::custom)?,
            Raw::Tagged { pt: Some(v), .. } => Dimension::Pt(v),
            Raw::Tagged { percent: Some(v), .. } => Dimension::Percent(v),
            Raw::Tagged { .. } => Dimension::Auto,
        })
    }
}

/// Margin, padding or border widths in points, clockwise from the top.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn to_edges(&self) -> Edges<f32> {
        Edges::new(self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for Margins {
    type Err = StyleParseError;

    /// CSS shorthand with one to four values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_shorthand_margins(s)
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Shorthand(String),
            Sides {
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
                #[serde(default)]
                left: f32,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Margins::all(v),
            Raw::Shorthand(s) => s.parse().map_err(de::Error::custom)?,
            Raw::Sides {
                top,
                right,
                bottom,
                left,
            } => Margins {
                top,
                right,
                bottom,
                left,
            },
        })
    }
}

/// Named paper sizes for the PDF backend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl FromStr for PageSize {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleParseError::InvalidValue {
                property: "page-size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}
