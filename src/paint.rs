//! Padding of the editable surface derived from the markers

use crate::config::RulerConfig;
use crate::markers::MarginMarkers;
use crate::units::{DeviceClass, Length, PageGeometry};

/// Left and right padding applied to the document surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintRegion {
    pub padding_left: Length,
    pub padding_right: Length,
}

impl PaintRegion {
    /// Compute padding from marker offsets
    ///
    /// On mobile the markers are bypassed in favour of a fixed margin.
    pub fn compute(
        class: DeviceClass,
        markers: &MarginMarkers,
        geometry: &PageGeometry,
        config: &RulerConfig,
    ) -> Self {
        match class {
            DeviceClass::Mobile => Self {
                padding_left: Length::Cm(config.mobile_padding_cm),
                padding_right: Length::Cm(config.mobile_padding_cm),
            },
            DeviceClass::Desktop => Self {
                padding_left: Length::Px(markers.left),
                padding_right: Length::Px(geometry.width_px() - markers.right),
            },
        }
    }

    /// Horizontal span of the writable area in pixels, `(start, end)`
    pub fn content_span_px(&self, geometry: &PageGeometry) -> (f32, f32) {
        let width = geometry.width_px();
        (
            self.padding_left.to_px(geometry.px_per_cm),
            width - self.padding_right.to_px(geometry.px_per_cm),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_desktop_padding_follows_markers() {
        let config = RulerConfig::default();
        let geometry = PageGeometry::for_device(DeviceClass::Desktop, &config);
        let markers = MarginMarkers::new(18.9, 774.9);

        let region = PaintRegion::compute(DeviceClass::Desktop, &markers, &geometry, &config);
        assert_eq!(region.padding_left, Length::Px(18.9));
        match region.padding_right {
            Length::Px(px) => assert!(approx(px, 18.9)),
            other => panic!("expected pixel padding, got {other:?}"),
        }

        let (start, end) = region.content_span_px(&geometry);
        assert!(approx(start, 18.9));
        assert!(approx(end, 774.9));
    }

    #[test]
    fn test_mobile_padding_is_fixed() {
        let config = RulerConfig::default();
        let geometry = PageGeometry::for_device(DeviceClass::Mobile, &config);

        for markers in [
            MarginMarkers::new(0.0, 12.0),
            MarginMarkers::new(200.0, 300.0),
            MarginMarkers::new(12.5, 512.5),
        ] {
            let region = PaintRegion::compute(DeviceClass::Mobile, &markers, &geometry, &config);
            assert_eq!(region.padding_left.to_string(), "1cm");
            assert_eq!(region.padding_right.to_string(), "1cm");
        }

        let region = PaintRegion::compute(
            DeviceClass::Mobile,
            &MarginMarkers::new(0.0, 12.0),
            &geometry,
            &config,
        );
        let (start, end) = region.content_span_px(&geometry);
        assert!(approx(start, 25.0));
        assert!(approx(end, 500.0));
    }
}
