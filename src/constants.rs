//! Constants for page dimensions, pixel scales and ruler defaults

/// A4 page width in centimetres
pub const A4_WIDTH_CM: f32 = 21.0;

/// A4 page height in centimetres
pub const A4_HEIGHT_CM: f32 = 29.7;

/// Pixels per centimetre on desktop (96 DPI / 2.54)
pub const DESKTOP_PX_PER_CM: f32 = 37.8;

/// Pixels per centimetre on mobile, a reduced scale to fit narrow viewports
pub const MOBILE_PX_PER_CM: f32 = 25.0;

/// Viewport widths at or below this many pixels are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Minimum separation between the two markers, equal to the handle width
pub const MIN_GAP_PX: f32 = 12.0;

/// Default distance of each marker from its page edge
pub const DEFAULT_MARGIN_CM: f32 = 0.5;

/// Share of the viewport width the page occupies on mobile
pub const MOBILE_PAGE_FRACTION: f32 = 0.95;

/// Fixed document padding used on mobile instead of the markers
pub const MOBILE_PADDING_CM: f32 = 1.0;

/// Default number of subdivisions between two major ruler ticks
pub const DEFAULT_TICK_SUBDIVISIONS: u32 = 2;

/// Largest accepted number of subdivisions per centimetre
pub const MAX_TICK_SUBDIVISIONS: u32 = 100;

/// PDF points per centimetre (72 points per inch)
pub const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// Default height of the ruler band in PDF points
pub const DEFAULT_RULER_HEIGHT: f32 = 18.0;

/// Default font size for ruler labels in PDF points
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 6.0;

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Default guide line width in points
pub const DEFAULT_LINE_WIDTH: f32 = 0.5;
