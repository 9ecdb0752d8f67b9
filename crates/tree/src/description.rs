//! A serde-friendly description of a laid-out box tree.
//!
//! ```json
//! {
//!   "tag": "span",
//!   "style": "border: 2pt solid black; background-color: red; margin-left: 5pt",
//!   "attributes": { "id": "intro" },
//!   "children": [ { "text": "Hello", "x": 10, "y": 10, "width": 100, "height": 20 } ]
//! }
//! ```
//!
//! `style` is either a declaration string or an object of declarations.
//! Boxes with `text` default to the `#text` tag, others to `span`. Text runs
//! are already measured by layout, so their automatic width and height take
//! the values from their geometry.

use boxpaint_style::{BoxStyle, Dimension};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::TreeError;
use crate::node::{BoxGeometry, BoxNode, Fragment, SourceNode, TEXT_TAG};
use crate::tree::{BoxId, BoxTree};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StyleInput {
    Css(String),
    Declarations(BTreeMap<String, serde_json::Value>),
}

impl Default for StyleInput {
    fn default() -> Self {
        StyleInput::Css(String::new())
    }
}

impl StyleInput {
    fn declarations(&self) -> Result<Vec<(String, String)>, TreeError> {
        match self {
            StyleInput::Css(css) => css
                .split(';')
                .map(str::trim)
                .filter(|decl| !decl.is_empty())
                .map(|decl| {
                    decl.split_once(':')
                        .map(|(p, v)| (p.trim().to_string(), v.trim().to_string()))
                        .ok_or_else(|| TreeError::Declaration(decl.to_string()))
                })
                .collect(),
            StyleInput::Declarations(map) => Ok(map
                .iter()
                .map(|(property, value)| {
                    let value = match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (property.clone(), value)
                })
                .collect()),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoxDescription {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub style: StyleInput,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub fragment: Fragment,
    #[serde(default)]
    pub children: Vec<BoxDescription>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<BoxDescription>),
    One(Box<BoxDescription>),
}

impl BoxDescription {
    /// Parses a single root description or an array of roots.
    pub fn parse_forest(json: &str) -> Result<Vec<BoxDescription>, TreeError> {
        Ok(match serde_json::from_str::<OneOrMany>(json)? {
            OneOrMany::One(root) => vec![*root],
            OneOrMany::Many(roots) => roots,
        })
    }

    pub fn build_tree(roots: &[BoxDescription]) -> Result<BoxTree, TreeError> {
        let mut tree = BoxTree::new();
        for root in roots {
            let id = tree.add_root(root.to_node()?);
            root.add_children(&mut tree, id)?;
        }
        log::debug!("Built box tree with {} boxes", tree.len());
        Ok(tree)
    }

    fn add_children(&self, tree: &mut BoxTree, parent: BoxId) -> Result<(), TreeError> {
        for child in &self.children {
            let id = tree.add_child(parent, child.to_node()?)?;
            child.add_children(tree, id)?;
        }
        Ok(())
    }

    fn to_node(&self) -> Result<BoxNode, TreeError> {
        let tag = match (&self.tag, &self.text) {
            (Some(tag), _) => tag.clone(),
            (None, Some(_)) => TEXT_TAG.to_string(),
            (None, None) => "span".to_string(),
        };

        let declarations = self.style.declarations()?;
        let mut style = BoxStyle::from_declarations(
            declarations.iter().map(|(p, v)| (p.as_str(), v.as_str())),
        )
        .map_err(|source| TreeError::Style {
            tag: tag.clone(),
            source,
        })?;

        if self.text.is_some() {
            if style.width.is_auto() {
                style.width = Dimension::Pt(self.width);
            }
            if style.height.is_auto() {
                style.height = Dimension::Pt(self.height);
            }
        }

        let source = SourceNode {
            tag,
            attributes: self.attributes.clone(),
            text: self.text.clone(),
        };
        let geometry = BoxGeometry::new(self.x, self.y, self.width, self.height);
        Ok(BoxNode::new(source, Arc::new(style), geometry).with_fragment(self.fragment))
    }
}

impl BoxTree {
    /// Builds a tree from a JSON [`BoxDescription`] (one root or an array of roots).
    pub fn from_json(json: &str) -> Result<BoxTree, TreeError> {
        BoxDescription::build_tree(&BoxDescription::parse_forest(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<BoxTree, TreeError> {
        BoxTree::from_json(&value.to_string())
    }
}
