use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Colour, Insets};
use crate::foundation::error::{EditorError, EditorResult};

/// Every constant the layout engine and overlay drawing read.
///
/// Each field defaults independently, so a JSON theme only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Code font size in logical units.
    pub font_size: f64,
    /// Syntax colouring.
    pub syntax: SyntaxColours,
    /// Spacing and inline-vs-block thresholds.
    pub layout: LayoutMetrics,
    /// Blank pill appearance.
    pub blank: BlankStyle,
    /// Selection rectangle appearance.
    pub selection: SelectionStyle,
    /// Stroke of the hover highlight rectangle.
    pub highlight_stroke: Colour,
    /// Padding around the whole view, on every edge.
    pub view_padding: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            syntax: SyntaxColours::default(),
            layout: LayoutMetrics::default(),
            blank: BlankStyle::default(),
            selection: SelectionStyle::default(),
            highlight_stroke: Colour::rgb(0xc4, 0xc4, 0xc4),
            view_padding: 6.0,
        }
    }
}

impl Theme {
    /// Parse a theme from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> EditorResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| EditorError::validation(format!("parse theme JSON: {e}")))
    }

    /// Parse a theme from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EditorError::validation(format!("open theme JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Text colours per syntactic role.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SyntaxColours {
    /// Function names.
    pub call: Colour,
    /// Variable references.
    pub variable: Colour,
    /// Literal values.
    pub literal: Colour,
    /// Comments and the comment indicator.
    pub comment: Colour,
    /// The vertical ruler marking a list.
    pub list_ruler: Colour,
    /// Anything inside a disabled subtree.
    pub disabled: Colour,
}

impl Default for SyntaxColours {
    fn default() -> Self {
        Self {
            call: Colour::rgb(0x00, 0x00, 0x00),
            variable: Colour::rgb(0x24, 0x8a, 0xf0),
            literal: Colour::rgb(0x10, 0xa8, 0x10),
            comment: Colour::rgb(0x99, 0x99, 0x99),
            list_ruler: Colour::rgb(0xdd, 0xdd, 0xdd),
            disabled: Colour::rgb(0xcc, 0xcc, 0xcc),
        }
    }
}

/// Spacing constants and the thresholds that decide inline vs block calls.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Vertical gap between stacked lines.
    pub line_spacing: f64,
    /// Vertical gap between underline levels.
    pub underline_spacing: f64,
    /// Combined argument width above which a call breaks into a block.
    pub line_break_point: f64,
    /// Argument underline depth at which a call breaks into a block.
    pub max_nesting: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            line_spacing: 10.0,
            underline_spacing: 3.0,
            line_break_point: 300.0,
            max_nesting: 3,
        }
    }
}

/// Fill and stroke pair used to paint a blank pill.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Highlight {
    /// Fill while the editor is focused.
    pub fill: Colour,
    /// Fill while the editor is not focused.
    pub blurred_fill: Colour,
    /// Stroke while the editor is focused.
    pub stroke: Colour,
    /// Stroke while the editor is not focused.
    pub blurred_stroke: Colour,
    /// Marks a drop target.
    pub droppable: bool,
}

impl Default for Highlight {
    fn default() -> Self {
        Self::new(Colour::rgb(0xf6, 0xf6, 0xf6), Colour::rgb(0xdd, 0xdd, 0xdd))
    }
}

impl Highlight {
    /// Same colours whether focused or not.
    pub const fn new(fill: Colour, stroke: Colour) -> Self {
        Self {
            fill,
            blurred_fill: fill,
            stroke,
            blurred_stroke: stroke,
            droppable: false,
        }
    }

    /// Fill for the given focus state.
    pub fn blank_fill(&self, focused: bool) -> Colour {
        if focused { self.fill } else { self.blurred_fill }
    }

    /// Stroke for the given focus state.
    pub fn blank_stroke(&self, focused: bool) -> Colour {
        if focused {
            self.stroke
        } else {
            self.blurred_stroke
        }
    }
}

/// Blank pill appearance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlankStyle {
    /// Padding between the placeholder text and the pill outline.
    pub padding: Insets,
    /// Placeholder text colour.
    pub text_colour: Colour,
    /// Colours when the blank is not highlighted.
    pub resting: Highlight,
}

impl Default for BlankStyle {
    fn default() -> Self {
        Self {
            padding: Insets::symmetric(7.0, 0.0),
            text_colour: Colour::rgb(0x88, 0x88, 0x88),
            resting: Highlight::default(),
        }
    }
}

/// Selection rectangle appearance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelectionStyle {
    /// Outward padding around the selected area.
    pub padding: f64,
    /// Corner radius.
    pub radius: f64,
    /// Fill while focused.
    pub fill: Colour,
    /// Fill while not focused.
    pub blurred_fill: Colour,
    /// Stroke while focused.
    pub stroke: Colour,
    /// Stroke while not focused.
    pub blurred_stroke: Colour,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            padding: 3.0,
            radius: 3.0,
            fill: Colour::rgb(0xe8, 0xf2, 0xfe),
            blurred_fill: Colour::rgb(0xf4, 0xf4, 0xf4),
            stroke: Colour::rgb(0x9c, 0xc5, 0xfa),
            blurred_stroke: Colour::rgb(0xdd, 0xdd, 0xdd),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/theme.rs"]
mod tests;
