//! Drag the margins of a desktop view and export the layout as PDF guides

use lopdf::{Document, Object, dictionary};
use tracing_subscriber::EnvFilter;
use udf_ruler::{
    GuideDrawing, GuideStyle, InputSurface, ListenerHandle, MarkerRole, PointerEvent, RulerBounds,
    RulerView,
};

/// Input surface that only logs listener changes
#[derive(Default)]
struct LoggingSurface {
    next: u64,
}

impl InputSurface for LoggingSurface {
    fn attach(&mut self) -> ListenerHandle {
        self.next += 1;
        println!("attach listeners #{}", self.next);
        ListenerHandle(self.next)
    }

    fn detach(&mut self, handle: ListenerHandle) {
        println!("detach listeners #{}", handle.0);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let mut view = RulerView::new(1280.0);
    let mut surface = LoggingSurface::default();
    let bounds = RulerBounds::new(240.0);

    // Pull the left margin to 2.5cm, then try to push the right one past the page
    if let Some(mut drag) = view.begin_drag(MarkerRole::Left, bounds, &mut surface) {
        drag.handle(&PointerEvent::MouseMove {
            client_x: 240.0 + 94.5,
        });
        drag.handle(&PointerEvent::MouseUp);
    }
    if let Some(mut drag) = view.begin_drag(MarkerRole::Right, bounds, &mut surface) {
        drag.handle(&PointerEvent::TouchMove {
            touches: vec![240.0 + 2000.0],
        });
        drag.handle(&PointerEvent::TouchEnd);
    }

    let region = view.paint_region();
    println!(
        "markers {:?}, padding-left {}, padding-right {}",
        view.markers(),
        region.padding_left,
        region.padding_right
    );

    let mut doc = Document::with_version("1.5");
    let [_, _, width, height] = view.geometry().media_box();

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![],
        "Count" => 0,
        "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
    });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
    });

    if let Ok(Object::Dictionary(pages)) = doc.get_object_mut(pages_id) {
        if let Ok(Object::Array(kids)) = pages.get_mut(b"Kids") {
            kids.push(page_id.into());
        }
        pages.set("Count", Object::Integer(1));
    }

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
        page.set("Resources", resources_id);
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.draw_margin_guides(page_id, &view, &GuideStyle::default())?;

    doc.save("margin_guides.pdf")?;
    println!("PDF saved as 'margin_guides.pdf'");

    Ok(())
}
