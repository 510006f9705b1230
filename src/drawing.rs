//! PDF drawing operations for margin guides

use crate::Result;
use crate::drawing_utils::*;
use crate::error::RulerError;
use crate::font::FontMetrics;
use crate::style::GuideStyle;
use crate::ticks::TickKind;
use crate::view::RulerView;
use lopdf::{Document, Object, ObjectId, content::Content};
use tracing::{debug, trace};

/// Height of the marker handles drawn on the ruler, in points
const HANDLE_HEIGHT: f32 = 4.0;

/// Generate PDF operations for the guides of a view
///
/// Coordinates are PDF points with the origin at the bottom-left corner of
/// the page; the page itself is the view's geometry converted to points.
pub fn generate_guide_operations(
    view: &RulerView,
    style: &GuideStyle,
    metrics: &dyn FontMetrics,
) -> Result<Vec<Object>> {
    let geometry = view.geometry();
    let [_, _, page_width, page_height] = geometry.media_box();
    let mut operations = Vec::new();

    let (start_px, end_px) = view.paint_region().content_span_px(geometry);
    let start = geometry.px_to_pt(start_px);
    let end = geometry.px_to_pt(end_px);

    let ruler_height = if view.is_ruler_visible() {
        style.ruler_height.min(page_height)
    } else {
        0.0
    };
    let body_top = page_height - ruler_height;

    debug!(
        "Generating guides: content {}..{} pt, ruler {} pt",
        start, end, ruler_height
    );

    if let Some(fill) = style.margin_fill {
        operations.extend(draw_rectangle_fill(0.0, 0.0, start, body_top, fill));
        operations.extend(draw_rectangle_fill(end, 0.0, page_width - end, body_top, fill));
    }

    operations.extend(set_stroke_style(
        style.margin_line_color,
        style.margin_line_width,
    ));
    operations.extend(draw_vertical_line(start, 0.0, body_top));
    operations.extend(draw_vertical_line(end, 0.0, body_top));

    if ruler_height > 0.0 {
        operations.extend(draw_ruler(
            view,
            style,
            metrics,
            page_width,
            page_height,
            ruler_height,
        ));
    }

    trace!("Generated {} guide objects", operations.len());
    Ok(operations)
}

/// Draw the ruler band along the top edge with ticks, labels and handles
fn draw_ruler(
    view: &RulerView,
    style: &GuideStyle,
    metrics: &dyn FontMetrics,
    page_width: f32,
    page_height: f32,
    ruler_height: f32,
) -> Vec<Object> {
    let geometry = view.geometry();
    let band_bottom = page_height - ruler_height;
    let mut operations = Vec::new();

    operations.extend(draw_rectangle_fill(
        0.0,
        band_bottom,
        page_width,
        ruler_height,
        style.ruler_background,
    ));

    operations.extend(set_stroke_style(style.tick_color, style.tick_width));
    operations.extend(draw_horizontal_line(0.0, page_width, band_bottom));

    for tick in view.ticks() {
        let x = geometry.px_to_pt(tick.position_px);
        let ratio = match tick.kind {
            TickKind::Major => style.major_tick_ratio,
            TickKind::Minor => style.minor_tick_ratio,
        };
        operations.extend(draw_vertical_line(
            x,
            page_height,
            page_height - ruler_height * ratio,
        ));

        let Some(label) = tick.label.as_deref() else {
            continue;
        };
        if label == "0" {
            continue;
        }

        let label_width = metrics.text_width(label, style.label_font_size);
        let label_x = (x - label_width / 2.0).clamp(0.0, (page_width - label_width).max(0.0));
        operations.extend(draw_text(
            label,
            metrics.encode_text(label),
            &style.font_name,
            style.label_font_size,
            style.tick_color,
            label_x,
            band_bottom + HANDLE_HEIGHT + 1.0,
        ));
    }

    // Marker handles sit on the bottom edge of the band
    let markers = view.rendered_markers();
    let handle_width = geometry.px_to_pt(view.config().min_gap_px);
    for position in [markers.left, markers.right] {
        let x = geometry.px_to_pt(position);
        operations.extend(draw_rectangle_fill(
            x,
            band_bottom,
            handle_width,
            HANDLE_HEIGHT,
            style.margin_line_color,
        ));
    }

    operations
}

/// Add operations to a page in the document
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Object>,
) -> Result<()> {
    doc.get_object(page_id)
        .map_err(|_| RulerError::PageNotFound(page_id))?;

    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );

    let content = Content {
        operations: objects_to_operations(&operations),
    };
    trace!("Converted to {} content operations", content.operations.len());

    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}
