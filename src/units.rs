//! Unit conversion between centimetres, screen pixels and PDF points

use crate::config::RulerConfig;
use crate::constants::POINTS_PER_CM;
use std::fmt;

/// Layout class selected from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classify a viewport width against the mobile breakpoint
    ///
    /// Widths at or below the breakpoint are mobile, matching a
    /// `max-width` media query.
    pub fn from_viewport_width(width_px: f32, breakpoint_px: f32) -> Self {
        if width_px <= breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    /// Pixels per centimetre for this class
    pub fn px_per_cm(self, config: &RulerConfig) -> f32 {
        match self {
            Self::Desktop => config.desktop_px_per_cm,
            Self::Mobile => config.mobile_px_per_cm,
        }
    }
}

/// Physical page size mapped into pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_cm: f32,
    pub height_cm: f32,
    pub px_per_cm: f32,
}

impl PageGeometry {
    /// Page geometry for a device class
    pub fn for_device(class: DeviceClass, config: &RulerConfig) -> Self {
        Self {
            width_cm: config.page_width_cm,
            height_cm: config.page_height_cm,
            px_per_cm: class.px_per_cm(config),
        }
    }

    pub fn width_px(&self) -> f32 {
        self.width_cm * self.px_per_cm
    }

    pub fn height_px(&self) -> f32 {
        self.height_cm * self.px_per_cm
    }

    pub fn cm_to_px(&self, cm: f32) -> f32 {
        cm * self.px_per_cm
    }

    pub fn px_to_cm(&self, px: f32) -> f32 {
        px / self.px_per_cm
    }

    /// Convert a pixel distance on this page into PDF points
    pub fn px_to_pt(&self, px: f32) -> f32 {
        self.px_to_cm(px) * POINTS_PER_CM
    }

    /// Page MediaBox in PDF points: `[0, 0, width, height]`
    pub fn media_box(&self) -> [f32; 4] {
        [
            0.0,
            0.0,
            self.width_cm * POINTS_PER_CM,
            self.height_cm * POINTS_PER_CM,
        ]
    }
}

/// A CSS-like length used for document padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Cm(f32),
}

impl Length {
    /// Resolve to pixels at the given density
    pub fn to_px(self, px_per_cm: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Cm(cm) => cm * px_per_cm,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Cm(cm) => write!(f, "{cm}cm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_device_class_breakpoint() {
        assert_eq!(
            DeviceClass::from_viewport_width(1280.0, 768.0),
            DeviceClass::Desktop
        );
        assert_eq!(
            DeviceClass::from_viewport_width(769.0, 768.0),
            DeviceClass::Desktop
        );
        assert_eq!(
            DeviceClass::from_viewport_width(768.0, 768.0),
            DeviceClass::Mobile
        );
        assert_eq!(
            DeviceClass::from_viewport_width(375.0, 768.0),
            DeviceClass::Mobile
        );
    }

    #[test]
    fn test_page_geometry_desktop() {
        let geometry = PageGeometry::for_device(DeviceClass::Desktop, &RulerConfig::default());
        assert!(approx(geometry.width_px(), 793.8));
        assert!(approx(geometry.height_px(), 1122.66));
        assert!(approx(geometry.cm_to_px(0.5), 18.9));
    }

    #[test]
    fn test_page_geometry_mobile() {
        let geometry = PageGeometry::for_device(DeviceClass::Mobile, &RulerConfig::default());
        assert!(approx(geometry.width_px(), 525.0));
        assert!(approx(geometry.height_px(), 742.5));
        assert!(approx(geometry.px_to_cm(50.0), 2.0));
    }

    #[test]
    fn test_media_box_is_a4_in_points() {
        let geometry = PageGeometry::for_device(DeviceClass::Desktop, &RulerConfig::default());
        let [x, y, w, h] = geometry.media_box();
        assert_eq!((x, y), (0.0, 0.0));
        assert!((w - 595.28).abs() < 0.01);
        assert!((h - 841.89).abs() < 0.01);
        // One centimetre of pixels maps to one centimetre of points
        assert!(approx(geometry.px_to_pt(37.8), POINTS_PER_CM));
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Cm(1.0).to_string(), "1cm");
        assert_eq!(Length::Px(18.9).to_string(), "18.9px");
        assert!(approx(Length::Cm(1.0).to_px(37.8), 37.8));
    }
}
