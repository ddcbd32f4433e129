//! Text measurement seam used by the layout engine.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::{EditorError, EditorResult};

/// Font variant a run of text is measured in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in logical units.
    pub size: f64,
    /// Italic face.
    pub italic: bool,
    /// Bold weight.
    pub bold: bool,
}

impl TextStyle {
    /// Upright, regular weight.
    pub const fn regular(size: f64) -> Self {
        Self {
            size,
            italic: false,
            bold: false,
        }
    }

    fn key(self) -> (u64, bool, bool) {
        (self.size.to_bits(), self.italic, self.bold)
    }
}

/// Synchronous text metrics.
///
/// Having a measurer at all is the "fonts are ready" precondition of layout.
pub trait TextMeasure {
    /// Advance width and line height of `text`.
    fn measure(&mut self, text: &str, style: &TextStyle) -> Size;

    /// Width of a single space, used as the gap between inline call parts.
    fn space_width(&mut self, style: &TextStyle) -> f64 {
        self.measure(" ", style).width
    }
}

/// Fixed-advance metrics, independent of any font file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonoMeasure {
    /// Advance per character, in ems.
    pub advance: f64,
    /// Line height, in ems.
    pub line_height: f64,
}

impl Default for MonoMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.25,
        }
    }
}

impl TextMeasure for MonoMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(
            chars * self.advance * style.size,
            self.line_height * style.size,
        )
    }
}

/// Shapes text with parley using one registered font family, caching results.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family: String,
    cache: HashMap<(String, (u64, bool, bool)), Size>,
}

impl std::fmt::Debug for ParleyMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasure")
            .field("family", &self.family)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl ParleyMeasure {
    /// Register the font in `font_bytes` and measure with its first family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> EditorResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| EditorError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| EditorError::font("registered font family has no name"))?
            .to_string();

        tracing::debug!(%family, "registered measurement font");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            cache: HashMap::new(),
        })
    }

    /// Read a font file and register it.
    pub fn from_path(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))
            .map_err(EditorError::from)?;
        Self::from_font_bytes(&bytes)
    }

    /// Family name every measurement uses.
    pub fn family(&self) -> &str {
        &self.family
    }

    fn shape(&mut self, text: &str, style: &TextStyle) -> Size {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size as f32));
        if style.italic {
            builder.push_default(parley::style::StyleProperty::FontStyle(
                parley::style::FontStyle::Italic,
            ));
        }
        if style.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Size::new(f64::from(layout.full_width()), f64::from(layout.height()))
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Size {
        let key = (text.to_owned(), style.key());
        if let Some(size) = self.cache.get(&key) {
            return *size;
        }
        let size = self.shape(text, style);
        self.cache.insert(key, size);
        size
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
