//! Centimetre tick marks along the ruler

use crate::constants::MAX_TICK_SUBDIVISIONS;
use crate::units::PageGeometry;

/// Size class of a tick mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Whole centimetre, carries a label
    Major,
    Minor,
}

/// A single tick on the ruler
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset from the page's left edge in pixels
    pub position_px: f32,
    pub kind: TickKind,
    pub label: Option<String>,
}

/// Generate ticks for the full page width
///
/// One major tick per whole centimetre from zero up to the page width, each
/// split into `subdivisions` parts by minor ticks. A fractional page width
/// gets minor ticks up to the edge but no trailing major tick.
/// `subdivisions` is bounded to `1..=MAX_TICK_SUBDIVISIONS`.
pub fn ticks(geometry: &PageGeometry, subdivisions: u32) -> Vec<Tick> {
    let subdivisions = subdivisions.clamp(1, MAX_TICK_SUBDIVISIONS);
    let step_cm = 1.0 / subdivisions as f32;
    let steps = (geometry.width_cm * subdivisions as f32 + 1e-3).floor() as u32;

    (0..=steps)
        .map(|i| {
            let cm = i as f32 * step_cm;
            let major = i % subdivisions == 0;
            Tick {
                position_px: geometry.cm_to_px(cm),
                kind: if major { TickKind::Major } else { TickKind::Minor },
                label: major.then(|| (i / subdivisions).to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulerConfig;
    use crate::units::DeviceClass;

    #[test]
    fn test_a4_ticks_half_cm() {
        let geometry = PageGeometry::for_device(DeviceClass::Desktop, &RulerConfig::default());
        let ticks = ticks(&geometry, 2);

        assert_eq!(ticks.len(), 43);
        let majors: Vec<_> = ticks.iter().filter(|t| t.kind == TickKind::Major).collect();
        assert_eq!(majors.len(), 22);
        assert_eq!(majors[0].label.as_deref(), Some("0"));
        assert_eq!(majors[21].label.as_deref(), Some("21"));
        assert!((ticks[1].position_px - 18.9).abs() < 1e-3);
        assert!(ticks[1].label.is_none());
    }

    #[test]
    fn test_zero_subdivisions_treated_as_one() {
        let geometry = PageGeometry::for_device(DeviceClass::Mobile, &RulerConfig::default());
        let ticks = ticks(&geometry, 0);
        assert_eq!(ticks.len(), 22);
        assert!(ticks.iter().all(|t| t.kind == TickKind::Major));
        assert!((ticks[21].position_px - 525.0).abs() < 1e-3);
    }

    #[test]
    fn test_subdivisions_are_bounded() {
        let geometry = PageGeometry::for_device(DeviceClass::Desktop, &RulerConfig::default());
        let ticks = ticks(&geometry, u32::MAX);
        assert_eq!(ticks.len(), 21 * MAX_TICK_SUBDIVISIONS as usize + 1);
    }

    #[test]
    fn test_fractional_page_width() {
        let config = RulerConfig::new().with_page_size(21.59, 27.94);
        let geometry = PageGeometry::for_device(DeviceClass::Desktop, &config);
        let ticks = ticks(&geometry, 2);

        // 0.0 ..= 21.5 in half centimetres
        assert_eq!(ticks.len(), 44);
        assert_eq!(ticks.last().unwrap().kind, TickKind::Minor);
    }
}
