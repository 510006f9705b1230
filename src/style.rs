//! Styling for exported margin guides

use crate::constants::*;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }

    /// Marker blue used for margin lines
    pub fn marker_blue() -> Self {
        Self::rgb(0.16, 0.45, 0.86)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Appearance of the guides drawn onto a PDF page
#[derive(Debug, Clone)]
pub struct GuideStyle {
    pub margin_line_color: Color,
    pub margin_line_width: f32,
    /// Shade the margin bands outside the writable area
    pub margin_fill: Option<Color>,
    pub ruler_background: Color,
    pub tick_color: Color,
    pub tick_width: f32,
    /// Height of the ruler band along the top edge, in points
    pub ruler_height: f32,
    /// Major tick length as a share of the ruler height
    pub major_tick_ratio: f32,
    pub minor_tick_ratio: f32,
    /// Font resource name for labels (must exist on the page)
    pub font_name: String,
    pub label_font_size: f32,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            margin_line_color: Color::marker_blue(),
            margin_line_width: DEFAULT_LINE_WIDTH,
            margin_fill: Some(Color::gray(0.95)),
            ruler_background: Color::gray(0.97),
            tick_color: Color::gray(0.3),
            tick_width: DEFAULT_LINE_WIDTH,
            ruler_height: DEFAULT_RULER_HEIGHT,
            major_tick_ratio: 0.5,
            minor_tick_ratio: 0.25,
            font_name: "F1".to_string(),
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
        }
    }
}

impl GuideStyle {
    /// Style with margin lines only, no shading
    pub fn lines_only() -> Self {
        Self {
            margin_fill: None,
            ..Default::default()
        }
    }

    pub fn with_font(mut self, font_name: impl Into<String>, size: f32) -> Self {
        self.font_name = font_name.into();
        self.label_font_size = size;
        self
    }

    pub fn with_ruler_height(mut self, height: f32) -> Self {
        self.ruler_height = height.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_clamped() {
        assert_eq!(Color::rgb(1.5, -0.2, 0.5), Color::rgb(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_guide_style_builders() {
        let style = GuideStyle::lines_only()
            .with_font("F2", 7.0)
            .with_ruler_height(-3.0);
        assert!(style.margin_fill.is_none());
        assert_eq!(style.font_name, "F2");
        assert_eq!(style.label_font_size, 7.0);
        assert_eq!(style.ruler_height, 0.0);
    }
}
