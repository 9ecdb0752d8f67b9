//! Background fill and image declarations, plus the tiling geometry shared by
//! every backend that draws background images.

use crate::dimension::Dimension;
use boxpaint_types::{Color, Rect, Size};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::parsers::StyleParseError;

/// Upper bound on tiles generated for one painting area.
const MAX_TILES: usize = 10_000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    #[default]
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
}

impl BackgroundRepeat {
    pub fn repeats_x(self) -> bool {
        matches!(self, BackgroundRepeat::Repeat | BackgroundRepeat::RepeatX)
    }

    pub fn repeats_y(self) -> bool {
        matches!(self, BackgroundRepeat::Repeat | BackgroundRepeat::RepeatY)
    }
}

impl FromStr for BackgroundRepeat {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "repeat" => Ok(BackgroundRepeat::Repeat),
            "repeat-x" => Ok(BackgroundRepeat::RepeatX),
            "repeat-y" => Ok(BackgroundRepeat::RepeatY),
            "no-repeat" => Ok(BackgroundRepeat::NoRepeat),
            _ => Err(StyleParseError::InvalidValue {
                property: "background-repeat".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Offset of the first tile inside the painting area, per axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundPosition {
    pub x: Dimension,
    pub y: Dimension,
}

impl Default for BackgroundPosition {
    fn default() -> Self {
        Self {
            x: Dimension::Percent(0.0),
            y: Dimension::Percent(0.0),
        }
    }
}

impl BackgroundPosition {
    /// Percentages align the same point of tile and area, as in CSS.
    fn offset(component: Dimension, free_space: f32) -> f32 {
        match component {
            Dimension::Pt(v) => v,
            Dimension::Percent(p) => free_space * p / 100.0,
            Dimension::Auto => 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    /// Reference to the image resource. An empty string is an unresolved reference.
    pub src: String,
    #[serde(default)]
    pub repeat: BackgroundRepeat,
    #[serde(default)]
    pub position: BackgroundPosition,
}

impl BackgroundImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            repeat: BackgroundRepeat::default(),
            position: BackgroundPosition::default(),
        }
    }

    pub fn with_repeat(mut self, repeat: BackgroundRepeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn is_resolved(&self) -> bool {
        !self.src.trim().is_empty()
    }

    /// Computes where copies of a `tile`-sized image land inside `area`.
    ///
    /// Tiles are not clipped; callers clip drawing to `area`. Only tiles that
    /// intersect the area are returned.
    pub fn tile_rects(&self, area: Rect, tile: Size) -> Vec<Rect> {
        if area.is_empty() || tile.is_empty() {
            return Vec::new();
        }

        let mut start_x = area.x
            + BackgroundPosition::offset(self.position.x, area.width - tile.width);
        let mut start_y = area.y
            + BackgroundPosition::offset(self.position.y, area.height - tile.height);

        if self.repeat.repeats_x() {
            start_x -= ((start_x - area.x) / tile.width).ceil() * tile.width;
        }
        if self.repeat.repeats_y() {
            start_y -= ((start_y - area.y) / tile.height).ceil() * tile.height;
        }

        let xs = axis_positions(start_x, tile.width, area.x, area.right(), self.repeat.repeats_x());
        let ys = axis_positions(start_y, tile.height, area.y, area.bottom(), self.repeat.repeats_y());

        let mut tiles = Vec::with_capacity(xs.len() * ys.len());
        'rows: for &y in &ys {
            for &x in &xs {
                if tiles.len() >= MAX_TILES {
                    log::warn!(
                        "Background image '{}' needs more than {} tiles; truncating",
                        self.src,
                        MAX_TILES
                    );
                    break 'rows;
                }
                let rect = Rect::new(x, y, tile.width, tile.height);
                if rect.intersection(&area).is_some() {
                    tiles.push(rect);
                }
            }
        }
        tiles
    }
}

fn axis_positions(start: f32, step: f32, min: f32, max: f32, repeat: bool) -> Vec<f32> {
    if !repeat {
        return vec![start];
    }
    let mut positions = Vec::new();
    let mut pos = start;
    while pos < max && positions.len() < MAX_TILES {
        if pos + step > min {
            positions.push(pos);
        }
        pos += step;
    }
    positions
}

/// Background declaration for a box. A `color` of `None` is `transparent`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSpec {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub image: Option<BackgroundImage>,
}

impl BackgroundSpec {
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            image: None,
        }
    }
}
