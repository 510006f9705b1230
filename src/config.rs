//! Tunable numbers for the ruler model

use crate::Result;
use crate::constants::*;
use crate::error::RulerError;

/// Configuration shared by every part of the ruler model
///
/// The defaults describe an A4 page on a 96 DPI desktop display with a
/// 768px mobile breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerConfig {
    pub page_width_cm: f32,
    pub page_height_cm: f32,
    pub desktop_px_per_cm: f32,
    pub mobile_px_per_cm: f32,
    /// Viewport widths at or below this value select the mobile layout
    pub mobile_breakpoint_px: f32,
    pub min_gap_px: f32,
    /// Distance of each default marker from its page edge
    pub default_margin_cm: f32,
    /// Share of the viewport the page is rendered at on mobile
    pub mobile_page_fraction: f32,
    pub mobile_padding_cm: f32,
    pub tick_subdivisions: u32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            page_width_cm: A4_WIDTH_CM,
            page_height_cm: A4_HEIGHT_CM,
            desktop_px_per_cm: DESKTOP_PX_PER_CM,
            mobile_px_per_cm: MOBILE_PX_PER_CM,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            min_gap_px: MIN_GAP_PX,
            default_margin_cm: DEFAULT_MARGIN_CM,
            mobile_page_fraction: MOBILE_PAGE_FRACTION,
            mobile_padding_cm: MOBILE_PADDING_CM,
            tick_subdivisions: DEFAULT_TICK_SUBDIVISIONS,
        }
    }
}

impl RulerConfig {
    /// Create the default A4 configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size in centimetres
    pub fn with_page_size(mut self, width_cm: f32, height_cm: f32) -> Self {
        self.page_width_cm = width_cm;
        self.page_height_cm = height_cm;
        self
    }

    /// Set the desktop and mobile pixel densities
    pub fn with_scales(mut self, desktop_px_per_cm: f32, mobile_px_per_cm: f32) -> Self {
        self.desktop_px_per_cm = desktop_px_per_cm;
        self.mobile_px_per_cm = mobile_px_per_cm;
        self
    }

    /// Set the mobile breakpoint in pixels
    pub fn with_breakpoint(mut self, breakpoint_px: f32) -> Self {
        self.mobile_breakpoint_px = breakpoint_px;
        self
    }

    /// Set the minimum marker separation in pixels
    pub fn with_min_gap(mut self, gap_px: f32) -> Self {
        self.min_gap_px = gap_px;
        self
    }

    /// Set the default marker distance from each page edge
    pub fn with_default_margin(mut self, margin_cm: f32) -> Self {
        self.default_margin_cm = margin_cm;
        self
    }

    /// Set the fixed mobile document padding
    pub fn with_mobile_padding(mut self, padding_cm: f32) -> Self {
        self.mobile_padding_cm = padding_cm;
        self
    }

    /// Set how many parts each centimetre of the ruler is divided into
    pub fn with_tick_subdivisions(mut self, subdivisions: u32) -> Self {
        self.tick_subdivisions = subdivisions.max(1);
        self
    }

    /// Validate the configuration
    ///
    /// Every page in pixel space must leave room for both marker handles,
    /// otherwise no legal marker pair exists.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("page_width_cm", self.page_width_cm),
            ("page_height_cm", self.page_height_cm),
            ("desktop_px_per_cm", self.desktop_px_per_cm),
            ("mobile_px_per_cm", self.mobile_px_per_cm),
            ("mobile_breakpoint_px", self.mobile_breakpoint_px),
            ("min_gap_px", self.min_gap_px),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RulerError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        let non_negative = [
            ("default_margin_cm", self.default_margin_cm),
            ("mobile_padding_cm", self.mobile_padding_cm),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(RulerError::InvalidConfig(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }

        if !(self.mobile_page_fraction > 0.0 && self.mobile_page_fraction <= 1.0) {
            return Err(RulerError::InvalidConfig(format!(
                "mobile_page_fraction must be in (0, 1], got {}",
                self.mobile_page_fraction
            )));
        }

        if self.tick_subdivisions == 0 || self.tick_subdivisions > MAX_TICK_SUBDIVISIONS {
            return Err(RulerError::InvalidConfig(format!(
                "tick_subdivisions must be in 1..={MAX_TICK_SUBDIVISIONS}, got {}",
                self.tick_subdivisions
            )));
        }

        let narrowest_px =
            self.page_width_cm * self.desktop_px_per_cm.min(self.mobile_px_per_cm);
        if narrowest_px < self.min_gap_px * 2.0 {
            return Err(RulerError::InvalidConfig(format!(
                "page is {narrowest_px}px wide, narrower than two marker gaps of {}px",
                self.min_gap_px
            )));
        }

        Ok(())
    }
}
