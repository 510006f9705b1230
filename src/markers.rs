//! Margin marker positions and the constraint math shared by drag and render
//!
//! Both marker offsets are measured in pixels from the left edge of the page.
//! A pair is legal when
//!
//! ```text
//! 0 <= left,  left + gap <= right,  gap <= right <= page_width - gap
//! ```
//!
//! Every function here clamps instead of rejecting, so any input (including
//! infinities and NaN) maps to a legal position.

use crate::config::RulerConfig;
use crate::units::{DeviceClass, PageGeometry};
use tracing::{debug, trace};

/// Which margin a marker controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Left,
    Right,
}

/// The two margin marker offsets of one document view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginMarkers {
    pub left: f32,
    pub right: f32,
}

impl MarginMarkers {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Position of the marker with the given role
    pub fn get(&self, role: MarkerRole) -> f32 {
        match role {
            MarkerRole::Left => self.left,
            MarkerRole::Right => self.right,
        }
    }

    /// Check the pair against the legal region for a page
    pub fn is_legal(&self, page_width_px: f32, min_gap: f32) -> bool {
        self.left >= 0.0
            && self.left + min_gap <= self.right
            && self.right >= min_gap
            && self.right <= page_width_px - min_gap
    }
}

/// Clamp where the lower bound wins when the range is empty
///
/// `f32::clamp` panics on `lo > hi` and propagates NaN; pointer input must
/// never do either.
fn clamp_to(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Allowed range for the left marker given the right one
pub fn left_bounds(right: f32, page_width_px: f32, min_gap: f32) -> (f32, f32) {
    (0.0, (right - min_gap).min(page_width_px - min_gap))
}

/// Allowed range for the right marker given the left one
pub fn right_bounds(left: f32, page_width_px: f32, min_gap: f32) -> (f32, f32) {
    ((left + min_gap).max(min_gap), page_width_px - min_gap)
}

/// Clamp a raw pointer x into a legal left position, holding `right` fixed
pub fn clamp_left(x: f32, right: f32, page_width_px: f32, min_gap: f32) -> f32 {
    let (lo, hi) = left_bounds(right, page_width_px, min_gap);
    clamp_to(x, lo, hi)
}

/// Clamp a raw pointer x into a legal right position, holding `left` fixed
pub fn clamp_right(x: f32, left: f32, page_width_px: f32, min_gap: f32) -> f32 {
    let (lo, hi) = right_bounds(left, page_width_px, min_gap);
    clamp_to(x, lo, hi)
}

/// Project any marker pair onto the legal region
///
/// The right marker is first bounded by the page alone, then the left marker
/// by that right marker, then the right marker by the resulting left one.
/// Legal pairs come back unchanged, so the result is idempotent and a
/// position produced by [`clamp_left`] or [`clamp_right`] is never moved
/// again at render time.
pub fn clamp_markers(left: f32, right: f32, page_width_px: f32, min_gap: f32) -> MarginMarkers {
    let right = clamp_to(right, min_gap, page_width_px - min_gap);
    let left = clamp_left(left, right, page_width_px, min_gap);
    let right = clamp_right(right, left, page_width_px, min_gap);
    MarginMarkers { left, right }
}

/// Width of the page as it is actually rendered
///
/// On mobile the page is scaled to a share of the viewport instead of its
/// fixed pixel width.
pub fn visible_width(
    class: DeviceClass,
    geometry: &PageGeometry,
    viewport_width: f32,
    config: &RulerConfig,
) -> f32 {
    match class {
        DeviceClass::Desktop => geometry.width_px(),
        DeviceClass::Mobile => viewport_width * config.mobile_page_fraction,
    }
}

/// Default marker placement for a device class
///
/// The right default is bounded twice, by the visible width and by the page
/// width, so it never passes the rendered page edge on narrow viewports.
pub fn default_markers(
    class: DeviceClass,
    geometry: &PageGeometry,
    viewport_width: f32,
    config: &RulerConfig,
) -> MarginMarkers {
    let margin = geometry.cm_to_px(config.default_margin_cm);
    let visible = visible_width(class, geometry, viewport_width, config);
    let right = (visible - margin).min(geometry.width_px() - margin);

    trace!(?class, margin, visible, right, "Computed default markers");
    MarginMarkers {
        left: margin,
        right,
    }
}

/// Markers to apply after the device class changes
///
/// Returns the new class's defaults when the class actually changed, which
/// discards any dragged positions, and `None` otherwise.
pub fn on_device_class_change(
    old: DeviceClass,
    new: DeviceClass,
    viewport_width: f32,
    config: &RulerConfig,
) -> Option<MarginMarkers> {
    if old == new {
        return None;
    }

    let geometry = PageGeometry::for_device(new, config);
    let markers = default_markers(new, &geometry, viewport_width, config);
    debug!(?old, ?new, ?markers, "Device class changed, resetting markers");
    Some(markers)
}
