//! Font metrics for measuring and encoding ruler labels

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;

/// Trait for measuring label text and encoding it for PDF rendering.
///
/// Implement this trait to centre labels accurately or to render them with
/// an embedded Type0 font.
pub trait FontMetrics {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }

    /// Encode text for the PDF Tj operator, `None` to emit a literal string
    fn encode_text(&self, _text: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Width estimate for the standard Helvetica font
///
/// Ruler labels are digits only, which Helvetica renders at a fixed
/// 0.556 em; everything else falls back to the average ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl FontMetrics for BuiltinMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        if ch.is_ascii_digit() {
            font_size * 0.556
        } else {
            font_size * DEFAULT_CHAR_WIDTH_RATIO
        }
    }
}

/// TrueType font metrics using ttf-parser for accurate glyph measurement and encoding.
///
/// This struct owns the font data and parses it on demand for measurements.
/// The caller is responsible for embedding the font into the PDF document;
/// this type only handles measurement and glyph ID encoding.
#[cfg(feature = "ttf-parser")]
pub struct TtfFontMetrics {
    font_data: Vec<u8>,
    units_per_em: f32,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create new font metrics from raw TTF/TTC font data.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0).map_err(|e| {
            crate::error::RulerError::FontError(format!("Failed to parse font: {e}"))
        })?;
        let units_per_em = face.units_per_em() as f32;
        Ok(Self {
            font_data,
            units_per_em,
        })
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.font_data, 0).ok()
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        self.face()
            .and_then(|face| {
                face.glyph_index(ch)
                    .and_then(|gid| face.glyph_hor_advance(gid))
            })
            .map(|advance| advance as f32 / self.units_per_em * font_size)
            .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let Some(face) = self.face() else {
            return text.chars().count() as f32 * font_size * DEFAULT_CHAR_WIDTH_RATIO;
        };
        text.chars()
            .map(|ch| {
                face.glyph_index(ch)
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map(|advance| advance as f32 / self.units_per_em * font_size)
                    .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
            })
            .sum()
    }

    fn encode_text(&self, text: &str) -> Option<Vec<u8>> {
        let face = self.face()?;
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let glyph_id = face.glyph_index(ch).map(|g| g.0).unwrap_or(0);
            bytes.extend_from_slice(&glyph_id.to_be_bytes());
        }
        Some(bytes)
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}
