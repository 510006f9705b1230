//! Margin ruler geometry for A4 document editors
//!
//! This library models the horizontal ruler of a page-based rich-text
//! editor: the page size in screen pixels, two draggable margin markers kept
//! apart by a minimum gap, and the document padding derived from them. The
//! same layout can be exported as margin guides onto a PDF page.
//!
//! ```
//! use udf_ruler::{MarkerRole, PointerEvent, RulerBounds, RulerView};
//! # use udf_ruler::{InputSurface, ListenerHandle};
//! # struct Surface;
//! # impl InputSurface for Surface {
//! #     fn attach(&mut self) -> ListenerHandle { ListenerHandle(1) }
//! #     fn detach(&mut self, _: ListenerHandle) {}
//! # }
//!
//! let mut view = RulerView::new(1280.0);
//! let mut surface = Surface;
//!
//! if let Some(mut drag) = view.begin_drag(MarkerRole::Left, RulerBounds::new(0.0), &mut surface) {
//!     drag.handle(&PointerEvent::MouseMove { client_x: 900.0 });
//!     drag.handle(&PointerEvent::MouseUp);
//! }
//!
//! let markers = view.markers();
//! assert!(markers.left <= markers.right - 12.0);
//! ```

use lopdf::{Document, Object, ObjectId};
use tracing::{debug, instrument};

pub mod config;
pub mod constants;
pub mod drag;
mod drawing;
mod drawing_utils;
pub mod error;
pub mod font;
pub mod markers;
pub mod paint;
pub mod style;
pub mod ticks;
pub mod units;
pub mod view;

pub use config::RulerConfig;
pub use drag::{
    DragOutcome, DragSession, DragState, InputSurface, ListenerHandle, PointerEvent, RulerBounds,
};
pub use error::{Result, RulerError};
pub use font::{BuiltinMetrics, FontMetrics};
#[cfg(feature = "ttf-parser")]
pub use font::TtfFontMetrics;
pub use markers::{MarginMarkers, MarkerRole, clamp_markers, on_device_class_change};
pub use paint::PaintRegion;
pub use style::{Color, GuideStyle};
pub use ticks::{Tick, TickKind};
pub use units::{DeviceClass, Length, PageGeometry};
pub use view::RulerView;

/// Extension trait for lopdf::Document to draw margin guides
pub trait GuideDrawing {
    /// Draw the guides of a view onto an existing page
    ///
    /// Labels are measured with the built-in Helvetica estimate and use the
    /// font resource named in `style`, which must exist on the page.
    fn draw_margin_guides(
        &mut self,
        page_id: ObjectId,
        view: &RulerView,
        style: &GuideStyle,
    ) -> Result<()>;

    /// Same as [`GuideDrawing::draw_margin_guides`] with custom label metrics
    fn draw_margin_guides_with_metrics(
        &mut self,
        page_id: ObjectId,
        view: &RulerView,
        style: &GuideStyle,
        metrics: &dyn FontMetrics,
    ) -> Result<()>;

    /// Create guide content operations without adding them to the document
    fn create_guide_content(&self, view: &RulerView, style: &GuideStyle) -> Result<Vec<Object>>;
}

impl GuideDrawing for Document {
    fn draw_margin_guides(
        &mut self,
        page_id: ObjectId,
        view: &RulerView,
        style: &GuideStyle,
    ) -> Result<()> {
        self.draw_margin_guides_with_metrics(page_id, view, style, &BuiltinMetrics)
    }

    #[instrument(skip(self, view, style, metrics))]
    fn draw_margin_guides_with_metrics(
        &mut self,
        page_id: ObjectId,
        view: &RulerView,
        style: &GuideStyle,
        metrics: &dyn FontMetrics,
    ) -> Result<()> {
        debug!(
            device = ?view.device_class(),
            markers = ?view.rendered_markers(),
            "Drawing margin guides"
        );

        let operations = drawing::generate_guide_operations(view, style, metrics)?;
        drawing::add_operations_to_page(self, page_id, operations)?;

        Ok(())
    }

    fn create_guide_content(&self, view: &RulerView, style: &GuideStyle) -> Result<Vec<Object>> {
        drawing::generate_guide_operations(view, style, &BuiltinMetrics)
    }
}
