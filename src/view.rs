//! Per-document ruler state
//!
//! A [`RulerView`] is created when the editor view mounts and dropped when it
//! unmounts; nothing in it outlives the view.

use crate::Result;
use crate::config::RulerConfig;
use crate::drag::{DragSession, DragState, InputSurface, RulerBounds};
use crate::markers::{self, MarginMarkers, MarkerRole};
use crate::paint::PaintRegion;
use crate::ticks::{self, Tick};
use crate::units::{DeviceClass, PageGeometry};
use tracing::{debug, instrument, trace};

/// Ruler, marker and layout state for one document view
#[derive(Debug, Clone)]
pub struct RulerView {
    config: RulerConfig,
    viewport_width: f32,
    device: DeviceClass,
    geometry: PageGeometry,
    markers: MarginMarkers,
    drag: DragState,
    ruler_visible: bool,
}

impl RulerView {
    /// Mount a view with the default A4 configuration
    pub fn new(viewport_width: f32) -> Self {
        Self::build(RulerConfig::default(), viewport_width)
    }

    /// Mount a view with a custom configuration
    pub fn with_config(config: RulerConfig, viewport_width: f32) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, viewport_width))
    }

    #[instrument(skip(config))]
    fn build(config: RulerConfig, viewport_width: f32) -> Self {
        let device = DeviceClass::from_viewport_width(viewport_width, config.mobile_breakpoint_px);
        let geometry = PageGeometry::for_device(device, &config);
        let markers = markers::default_markers(device, &geometry, viewport_width, &config);
        debug!(?device, ?markers, "Mounted ruler view");

        Self {
            config,
            viewport_width,
            device,
            geometry,
            markers,
            drag: DragState::Idle,
            ruler_visible: true,
        }
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub(crate) fn set_drag_state(&mut self, state: DragState) {
        self.drag = state;
    }

    /// Stored marker positions, as last written
    pub fn markers(&self) -> MarginMarkers {
        self.markers
    }

    pub(crate) fn store_markers(&mut self, markers: MarginMarkers) {
        self.markers = markers;
    }

    /// Overwrite both markers from outside the drag engine
    ///
    /// The values are stored as given; [`RulerView::rendered_markers`]
    /// repairs an illegal pair.
    pub fn set_markers(&mut self, left: f32, right: f32) {
        trace!(left, right, "Markers set externally");
        self.markers = MarginMarkers::new(left, right);
    }

    /// Restore the defaults for the current device class
    pub fn reset_markers(&mut self) {
        self.markers = markers::default_markers(
            self.device,
            &self.geometry,
            self.viewport_width,
            &self.config,
        );
    }

    /// Marker positions as they are drawn, re-clamped against the page
    pub fn rendered_markers(&self) -> MarginMarkers {
        markers::clamp_markers(
            self.markers.left,
            self.markers.right,
            self.geometry.width_px(),
            self.config.min_gap_px,
        )
    }

    /// Left/right padding for the editable surface
    pub fn paint_region(&self) -> PaintRegion {
        PaintRegion::compute(
            self.device,
            &self.rendered_markers(),
            &self.geometry,
            &self.config,
        )
    }

    /// React to a viewport resize
    ///
    /// Crossing the mobile breakpoint rebuilds the page geometry and resets
    /// both markers to the new class's defaults. Returns the new markers
    /// when that happened.
    #[instrument(skip(self), fields(device = ?self.device))]
    pub fn set_viewport_width(&mut self, viewport_width: f32) -> Option<MarginMarkers> {
        self.viewport_width = viewport_width;
        let next = DeviceClass::from_viewport_width(viewport_width, self.config.mobile_breakpoint_px);

        let reset =
            markers::on_device_class_change(self.device, next, viewport_width, &self.config)?;
        self.device = next;
        self.geometry = PageGeometry::for_device(next, &self.config);
        self.markers = reset;
        Some(reset)
    }

    pub fn is_ruler_visible(&self) -> bool {
        self.ruler_visible
    }

    /// Show or hide the ruler
    ///
    /// Hiding keeps the marker values and the paint region derived from
    /// them; only dragging is disabled.
    pub fn set_ruler_visible(&mut self, visible: bool) {
        debug!(visible, "Ruler visibility changed");
        self.ruler_visible = visible;
    }

    /// Flip ruler visibility and return the new state
    pub fn toggle_ruler(&mut self) -> bool {
        self.set_ruler_visible(!self.ruler_visible);
        self.ruler_visible
    }

    /// Tick marks for the ruler at the current scale
    pub fn ticks(&self) -> Vec<Tick> {
        ticks::ticks(&self.geometry, self.config.tick_subdivisions)
    }

    /// Start dragging a marker on pointer-down
    ///
    /// Returns `None` while the ruler is hidden. The returned session owns
    /// the listeners attached to `surface` and releases them when dropped.
    pub fn begin_drag<'a, S: InputSurface + ?Sized>(
        &'a mut self,
        role: MarkerRole,
        bounds: RulerBounds,
        surface: &'a mut S,
    ) -> Option<DragSession<'a, S>> {
        if !self.ruler_visible {
            debug!(?role, "Ignoring drag on hidden ruler");
            return None;
        }
        Some(DragSession::start(self, surface, bounds, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::tests::RecordingSurface;
    use crate::error::RulerError;
    use crate::units::Length;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_mount_desktop() {
        let view = RulerView::new(1440.0);
        assert_eq!(view.device_class(), DeviceClass::Desktop);
        assert!(approx(view.geometry().width_px(), 793.8));
        assert!(approx(view.markers().left, 18.9));
        assert!(approx(view.markers().right, 774.9));
        assert!(view.is_ruler_visible());
        assert_eq!(view.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_mount_mobile() {
        let view = RulerView::new(390.0);
        assert_eq!(view.device_class(), DeviceClass::Mobile);
        assert!(approx(view.geometry().width_px(), 525.0));
        assert!(approx(view.markers().left, 12.5));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RulerConfig::new().with_min_gap(-1.0);
        assert!(matches!(
            RulerView::with_config(config, 1280.0),
            Err(RulerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_breakpoint_crossing_discards_drag() {
        let mut view = RulerView::new(1280.0);
        let mut surface = RecordingSurface::default();
        {
            let mut session = view
                .begin_drag(MarkerRole::Left, RulerBounds::default(), &mut surface)
                .unwrap();
            session.move_to(300.0);
        }
        assert!(approx(view.markers().left, 300.0));

        // Resizing within the desktop class keeps the dragged marker
        assert!(view.set_viewport_width(1024.0).is_none());
        assert!(approx(view.markers().left, 300.0));

        let mobile = view.set_viewport_width(600.0).unwrap();
        assert_eq!(view.device_class(), DeviceClass::Mobile);
        assert!(approx(mobile.left, 12.5));
        assert!(approx(mobile.right, 557.5_f32.min(512.5)));
        assert_eq!(view.markers(), mobile);

        let desktop = view.set_viewport_width(1280.0).unwrap();
        assert_eq!(view.device_class(), DeviceClass::Desktop);
        assert!(approx(desktop.left, 18.9));
        assert!(approx(desktop.right, 774.9));
    }

    #[test]
    fn test_external_illegal_markers_repaired_at_render() {
        let mut view = RulerView::new(1280.0);
        view.set_markers(700.0, 650.0);

        assert_eq!(view.markers(), MarginMarkers::new(700.0, 650.0));
        let rendered = view.rendered_markers();
        assert!(rendered.is_legal(view.geometry().width_px(), 12.0));
        assert!(approx(rendered.left, 638.0));
        assert!(approx(rendered.right, 650.0));
    }

    #[test]
    fn test_reset_markers() {
        let mut view = RulerView::new(1280.0);
        view.set_markers(100.0, 200.0);
        view.reset_markers();
        assert!(approx(view.markers().left, 18.9));
        assert!(approx(view.markers().right, 774.9));
    }

    #[test]
    fn test_hidden_ruler_keeps_paint_region() {
        let mut view = RulerView::new(1280.0);
        view.set_markers(100.0, 700.0);
        let before = view.paint_region();

        assert!(!view.toggle_ruler());
        assert_eq!(view.paint_region(), before);
        assert_eq!(view.markers(), MarginMarkers::new(100.0, 700.0));

        assert!(view.toggle_ruler());
    }

    #[test]
    fn test_mobile_paint_region_ignores_markers() {
        let mut view = RulerView::new(375.0);
        view.set_markers(50.0, 200.0);
        let region = view.paint_region();
        assert_eq!(region.padding_left, Length::Cm(1.0));
        assert_eq!(region.padding_right, Length::Cm(1.0));
        assert_eq!(region.padding_left.to_string(), "1cm");
        assert_eq!(region.padding_right.to_string(), "1cm");
    }

    #[test]
    fn test_ticks_follow_scale() {
        let view = RulerView::new(1280.0);
        let ticks = view.ticks();
        let last = ticks.last().unwrap();
        assert!(approx(last.position_px, 793.8));
    }
}
