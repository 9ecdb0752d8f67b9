//! The resolved style the painter reads for one box, and how it is built
//! from a flat list of CSS-like declarations.

use crate::background::{BackgroundImage, BackgroundRepeat, BackgroundSpec};
use crate::border::{BorderSides, BorderStyle};
use crate::dimension::{Dimension, Margins};
use crate::parsers::{self, StyleParseError};
use boxpaint_types::Side;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub margin: Margins,
    pub padding: Margins,
    pub border: BorderSides,
    pub background: BackgroundSpec,
    pub opacity: f32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            margin: Margins::default(),
            padding: Margins::default(),
            border: BorderSides::default(),
            background: BackgroundSpec::default(),
            opacity: 1.0,
        }
    }
}

impl BoxStyle {
    /// Builds a style from `(property, value)` pairs. Property names may be
    /// written in kebab-case (`border-left`) or camelCase (`borderLeft`).
    ///
    /// Shorthands are applied before the longhands that refine them, so
    /// `border-left-style` wins over `border` whatever the input order. Among
    /// declarations of the same rank, later ones override earlier ones.
    pub fn from_declarations<'a, I>(declarations: I) -> Result<Self, StyleParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ordered: Vec<(String, &str)> = declarations
            .into_iter()
            .map(|(property, value)| (to_kebab_case(property), value))
            .collect();
        ordered.sort_by_key(|(property, _)| cascade_rank(property));

        let mut style = BoxStyle::default();
        for (property, value) in &ordered {
            style.apply(property, value)?;
        }
        Ok(style)
    }

    /// Applies a single declaration. Unknown properties are ignored with a warning.
    pub fn apply(&mut self, property: &str, value: &str) -> Result<(), StyleParseError> {
        let property = to_kebab_case(property);
        let value = value.trim();

        if let Some(rest) = property.strip_prefix("border-") {
            return self.apply_border(rest, value);
        }

        match property.as_str() {
            "width" => self.width = parsers::run_parser(parsers::parse_dimension, value)?,
            "height" => self.height = parsers::run_parser(parsers::parse_dimension, value)?,
            "margin" => self.margin = parsers::parse_shorthand_margins(value)?,
            "padding" => self.padding = parsers::parse_shorthand_margins(value)?,
            "margin-top" => self.margin.top = parsers::run_parser(parsers::parse_length, value)?,
            "margin-right" => self.margin.right = parsers::run_parser(parsers::parse_length, value)?,
            "margin-bottom" => {
                self.margin.bottom = parsers::run_parser(parsers::parse_length, value)?
            }
            "margin-left" => self.margin.left = parsers::run_parser(parsers::parse_length, value)?,
            "padding-top" => self.padding.top = parsers::run_parser(parsers::parse_length, value)?,
            "padding-right" => {
                self.padding.right = parsers::run_parser(parsers::parse_length, value)?
            }
            "padding-bottom" => {
                self.padding.bottom = parsers::run_parser(parsers::parse_length, value)?
            }
            "padding-left" => self.padding.left = parsers::run_parser(parsers::parse_length, value)?,
            "border" => {
                let edge = parsers::run_parser(parsers::parse_border, value)?;
                self.border = BorderSides::all(edge);
            }
            "background" => self.background = parsers::parse_background(value)?,
            "background-color" => {
                self.background.color = parsers::run_parser(parsers::parse_color, value)?
            }
            "background-image" => {
                let src = parsers::run_parser(parsers::parse_image_reference, value)?;
                self.background.image = match (src, self.background.image.take()) {
                    (None, _) => None,
                    (Some(src), Some(mut image)) => {
                        image.src = src;
                        Some(image)
                    }
                    (Some(src), None) => Some(BackgroundImage::new(src)),
                };
            }
            "background-repeat" => {
                let repeat = value.parse::<BackgroundRepeat>()?;
                if let Some(image) = self.background.image.as_mut() {
                    image.repeat = repeat;
                }
            }
            "background-position" => {
                let position = parsers::run_parser(parsers::parse_background_position, value)?;
                if let Some(image) = self.background.image.as_mut() {
                    image.position = position;
                }
            }
            "opacity" => {
                let opacity = parsers::run_parser(parsers::parse_number, value)?;
                self.opacity = opacity.clamp(0.0, 1.0);
            }
            _ => log::warn!("Ignoring unsupported style property '{}'", property),
        }
        Ok(())
    }

    fn apply_border(&mut self, rest: &str, value: &str) -> Result<(), StyleParseError> {
        // border-width / border-style / border-color apply to every side.
        match rest {
            "width" => {
                let widths = parsers::parse_shorthand_border_widths(value)?;
                for side in Side::ALL {
                    self.border.get_mut(side).width = widths.to_edges().get(side);
                }
                return Ok(());
            }
            "style" => {
                let style = BorderStyle::from_keyword_lossy(value);
                for side in Side::ALL {
                    self.border.get_mut(side).style = style;
                }
                return Ok(());
            }
            "color" => {
                let color = parsers::run_parser(parsers::parse_color, value)?;
                for side in Side::ALL {
                    self.border.get_mut(side).color = color.clone();
                }
                return Ok(());
            }
            _ => {}
        }

        let (side_name, component) = match rest.split_once('-') {
            Some((side, component)) => (side, Some(component)),
            None => (rest, None),
        };
        let side = match side_name {
            "top" => Side::Top,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            _ => {
                log::warn!("Ignoring unsupported style property 'border-{}'", rest);
                return Ok(());
            }
        };

        let edge = self.border.get_mut(side);
        match component {
            None => *edge = parsers::run_parser(parsers::parse_border, value)?,
            Some("width") => edge.width = parsers::run_parser(parsers::parse_border_width, value)?,
            Some("style") => edge.style = BorderStyle::from_keyword_lossy(value),
            Some("color") => edge.color = parsers::run_parser(parsers::parse_color, value)?,
            Some(other) => {
                log::warn!("Ignoring unsupported style property 'border-{}-{}'", side_name, other)
            }
        }
        Ok(())
    }
}

fn cascade_rank(property: &str) -> usize {
    match property {
        "border" | "margin" | "padding" | "background" => 0,
        "background-repeat" | "background-position" => 2,
        p if p.starts_with("border-") => p.matches('-').count(),
        _ => 1,
    }
}

fn to_kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.trim().chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
