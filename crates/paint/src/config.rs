use serde::{Deserialize, Serialize};

/// Tunables for the box painter.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Dash length of `dashed` borders, as a multiple of the border width.
    ///
    /// Defaults to `3.0`.
    pub dash_length_ratio: f32,
    /// Gap between dashes, as a multiple of the border width. Defaults to `2.0`.
    pub dash_gap_ratio: f32,
    /// Dot size of `dotted` borders. Defaults to `1.0`.
    pub dot_length_ratio: f32,
    pub dot_gap_ratio: f32,
    /// Subtracted from each channel (in `0..=1`) to get the dark variant used
    /// by `groove`, `ridge`, `inset` and `outset`. Defaults to `0.33`.
    pub shade_amount: f32,
    /// Added to each channel for the light variant. Defaults to `0.16`.
    pub tint_amount: f32,
    pub debug_layout: bool,
    /// With `debug_layout`, outline every measured child of an inline box.
    pub debug_layout_inline: bool,
    /// With the two flags above, also outline child padding boxes (dashed).
    pub debug_layout_padding_box: bool,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            dash_length_ratio: 3.0,
            dash_gap_ratio: 2.0,
            dot_length_ratio: 1.0,
            dot_gap_ratio: 1.0,
            shade_amount: 0.33,
            tint_amount: 0.16,
            debug_layout: false,
            debug_layout_inline: false,
            debug_layout_padding_box: false,
        }
    }
}

impl PaintConfig {
    pub fn traces_inline_layout(&self) -> bool {
        self.debug_layout && self.debug_layout_inline
    }

    pub fn traces_padding_boxes(&self) -> bool {
        self.traces_inline_layout() && self.debug_layout_padding_box
    }
}
