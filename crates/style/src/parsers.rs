//! Low-level nom parser functions for CSS-like style values.
//!
//! This module provides composable parser functions for parsing style values
//! like lengths, dimensions, colors, borders and backgrounds.

use crate::background::{BackgroundImage, BackgroundPosition, BackgroundRepeat, BackgroundSpec};
use crate::border::{BorderEdge, BorderStyle};
use crate::dimension::{Dimension, Margins};
use boxpaint_types::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till, take_while1};
use nom::character::complete::{char, digit1, multispace0, multispace1, one_of};
use nom::combinator::{map, map_opt, map_res, opt, recognize, value};
use nom::error::{Error as NomError, ErrorKind};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic() || c == '-').parse(input)
}

/// Parses a plain number such as `0.5`.
pub fn parse_number(input: &str) -> IResult<&str, f32> {
    parse_f32(input)
}

// --- Unit & Dimension Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0_f32, tag_no_case("pt")),
        value(1.0_f32, tag_no_case("px")), // Treat px as pt
        value(72.0_f32, tag_no_case("in")),
        value(28.35_f32, tag_no_case("cm")),
        value(2.835_f32, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, number * unit_multiplier.unwrap_or(1.0)))
}

/// Parses a dimension value (length, percentage, or "auto").
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        value(Dimension::Auto, tag_no_case("auto")),
        map(terminated(parse_f32, char('%')), Dimension::Percent),
        map(parse_length, Dimension::Pt),
    ))
    .parse(input)
}

fn shorthand_edges<'a, P>(input: &'a str, item: P) -> Result<Margins, StyleParseError>
where
    P: Parser<&'a str, Output = f32, Error = NomError<&'a str>>,
{
    let parts = run_parser(separated_list1(multispace1, item), input)?;
    match parts.as_slice() {
        [all] => Ok(Margins::all(*all)),
        [vertical, horizontal] => Ok(Margins {
            top: *vertical,
            right: *horizontal,
            bottom: *vertical,
            left: *horizontal,
        }),
        [top, horizontal, bottom] => Ok(Margins {
            top: *top,
            right: *horizontal,
            bottom: *bottom,
            left: *horizontal,
        }),
        [top, right, bottom, left] => Ok(Margins {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for edge shorthand: got {}, expected 1 to 4.",
            parts.len()
        ))),
    }
}

/// Parses CSS shorthand margins (1 to 4 values).
pub fn parse_shorthand_margins(input: &str) -> Result<Margins, StyleParseError> {
    shorthand_edges(input, parse_length)
}

/// Parses a `border-width` shorthand (1 to 4 widths, keywords allowed).
pub fn parse_shorthand_border_widths(input: &str) -> Result<Margins, StyleParseError> {
    shorthand_edges(input, parse_border_width)
}

// --- Color Parsers ---

fn hex_color(input: &str) -> IResult<&str, Color> {
    map_res(
        preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit())),
        |hex: &str| Color::parse_hex(&format!("#{}", hex)),
    )
    .parse(input)
}

fn rgb_color(input: &str) -> IResult<&str, Color> {
    let (rest, _) = alt((tag_no_case("rgba"), tag_no_case("rgb"))).parse(input)?;
    let (rest, parts) = delimited(
        ws(char('(')),
        separated_list1(ws(char(',')), parse_f32),
        ws(char(')')),
    )
    .parse(rest)?;

    let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
    match parts.as_slice() {
        [r, g, b] => Ok((rest, Color::rgb(channel(*r), channel(*g), channel(*b)))),
        [r, g, b, a] => Ok((
            rest,
            Color {
                r: channel(*r),
                g: channel(*g),
                b: channel(*b),
                a: a.clamp(0.0, 1.0),
            },
        )),
        _ => Err(nom::Err::Error(NomError::new(input, ErrorKind::Count))),
    }
}

fn lookup_named_color(name: &str) -> Option<Option<Color>> {
    let color = match name.to_ascii_lowercase().as_str() {
        "transparent" => return Some(None),
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::RED,
        "blue" => Color::BLUE,
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "navy" => Color::rgb(0, 0, 128),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "teal" => Color::rgb(0, 128, 128),
        "aqua" | "cyan" => Color::rgb(0, 255, 255),
        "fuchsia" | "magenta" => Color::rgb(255, 0, 255),
        "silver" => Color::rgb(192, 192, 192),
        "gray" | "grey" => Color::gray(128),
        _ => return None,
    };
    Some(Some(color))
}

/// Parses a color. `transparent` (and any fully transparent `rgba`) yields `None`.
pub fn parse_color(input: &str) -> IResult<&str, Option<Color>> {
    alt((
        map(hex_color, Some),
        map(rgb_color, |c| (c.a > 0.0).then_some(c)),
        map_opt(keyword, lookup_named_color),
    ))
    .parse(input)
}

// --- Border Parsers ---

/// Parses a border width: a length or one of `thin`, `medium`, `thick`.
pub fn parse_border_width(input: &str) -> IResult<&str, f32> {
    alt((
        parse_length,
        value(1.0_f32, tag_no_case("thin")),
        value(3.0_f32, tag_no_case("medium")),
        value(5.0_f32, tag_no_case("thick")),
    ))
    .parse(input)
}

/// Parses a border style keyword. Unknown keywords map to `none`.
pub fn parse_border_style(input: &str) -> IResult<&str, BorderStyle> {
    map(keyword, BorderStyle::from_keyword_lossy).parse(input)
}

#[derive(Clone)]
enum BorderComponent {
    Width(f32),
    Color(Option<Color>),
    Style(BorderStyle),
}

fn border_component(input: &str) -> IResult<&str, BorderComponent> {
    alt((
        map(parse_border_width, BorderComponent::Width),
        map(parse_color, BorderComponent::Color),
        map(parse_border_style, BorderComponent::Style),
    ))
    .parse(input)
}

/// Parses a CSS border shorthand (e.g., "2pt solid #00ff00") in any component order.
///
/// Missing components fall back to `medium`, `none` and black.
pub fn parse_border(input: &str) -> IResult<&str, BorderEdge> {
    map(separated_list1(multispace1, border_component), |parts| {
        let mut edge = BorderEdge::new(3.0, BorderStyle::None, Some(Color::BLACK));
        for part in parts {
            match part {
                BorderComponent::Width(w) => edge.width = w,
                BorderComponent::Color(c) => edge.color = c,
                BorderComponent::Style(s) => edge.style = s,
            }
        }
        edge
    })
    .parse(input)
}

// --- Background Parsers ---

/// Parses `none` or `url(...)`, with or without quotes.
pub fn parse_image_reference(input: &str) -> IResult<&str, Option<String>> {
    alt((
        value(None::<String>, tag_no_case("none")),
        map(
            preceded(
                tag_no_case("url("),
                terminated(take_till(|c| c == ')'), char(')')),
            ),
            |raw: &str| {
                Some(
                    raw.trim()
                        .trim_matches(|c| c == '"' || c == '\'')
                        .to_string(),
                )
            },
        ),
    ))
    .parse(input)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Either,
}

fn position_token(input: &str) -> IResult<&str, (Axis, Dimension)> {
    alt((
        value((Axis::X, Dimension::Percent(0.0)), tag_no_case("left")),
        value((Axis::X, Dimension::Percent(100.0)), tag_no_case("right")),
        value((Axis::Y, Dimension::Percent(0.0)), tag_no_case("top")),
        value((Axis::Y, Dimension::Percent(100.0)), tag_no_case("bottom")),
        value((Axis::Either, Dimension::Percent(50.0)), tag_no_case("center")),
        map(parse_dimension, |d| (Axis::Either, d)),
    ))
    .parse(input)
}

/// Parses a one- or two-component `background-position`.
pub fn parse_background_position(input: &str) -> IResult<&str, BackgroundPosition> {
    let (rest, tokens) = separated_list1(multispace1, position_token).parse(input)?;
    let center = Dimension::Percent(50.0);
    let position = match tokens.as_slice() {
        [(Axis::Y, y)] => BackgroundPosition { x: center, y: *y },
        [(_, x)] => BackgroundPosition { x: *x, y: center },
        [(Axis::Y, y), (Axis::X | Axis::Either, x)] => BackgroundPosition { x: *x, y: *y },
        [(_, x), (_, y)] => BackgroundPosition { x: *x, y: *y },
        _ => return Err(nom::Err::Error(NomError::new(input, ErrorKind::Count))),
    };
    Ok((rest, position))
}

/// Splits on whitespace that is not inside parentheses.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&input[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    tokens
}

/// Parses the `background` shorthand: color, image, repeat and position in any order.
pub fn parse_background(input: &str) -> Result<BackgroundSpec, StyleParseError> {
    let mut spec = BackgroundSpec::default();
    let mut src: Option<String> = None;
    let mut repeat = BackgroundRepeat::default();
    let mut position_tokens = Vec::new();

    for token in split_top_level(input) {
        if let Ok(reference) = run_parser(parse_image_reference, token) {
            src = reference;
        } else if let Ok(r) = token.parse::<BackgroundRepeat>() {
            repeat = r;
        } else if let Ok(color) = run_parser(parse_color, token) {
            spec.color = color;
        } else {
            position_tokens.push(token);
        }
    }

    if let Some(src) = src {
        let mut image = BackgroundImage::new(src).with_repeat(repeat);
        if !position_tokens.is_empty() {
            image.position = run_parser(parse_background_position, &position_tokens.join(" "))?;
        }
        spec.image = Some(image);
    } else if !position_tokens.is_empty() {
        return Err(StyleParseError::InvalidValue {
            property: "background".to_string(),
            value: input.to_string(),
        });
    }
    Ok(spec)
}

/// Helper to run a nom parser over a whole string and convert its result to a
/// `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = NomError<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
