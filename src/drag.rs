//! Pointer drag handling for the margin markers
//!
//! A drag is modelled as a scoped subscription: [`DragSession`] attaches the
//! move and release listeners to an [`InputSurface`] when it is created and
//! detaches them when it is dropped, whichever way the drag ends.

use crate::markers::{MarkerRole, clamp_left, clamp_right};
use crate::view::RulerView;
use tracing::{debug, trace, warn};

/// Which marker, if any, is currently being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(MarkerRole),
}

impl DragState {
    pub fn active(self) -> Option<MarkerRole> {
        match self {
            Self::Idle => None,
            Self::Dragging(role) => Some(role),
        }
    }

    pub fn is_dragging(self) -> bool {
        self != Self::Idle
    }
}

/// Global pointer events delivered while a drag is active
///
/// Coordinates are client coordinates; the session converts them to ruler
/// space using [`RulerBounds`].
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    MouseMove { client_x: f32 },
    /// Client x of every active touch point, first touch drives the drag
    TouchMove { touches: Vec<f32> },
    MouseUp,
    TouchEnd,
}

/// Horizontal placement of the ruler's bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RulerBounds {
    pub left: f32,
}

impl RulerBounds {
    pub fn new(left: f32) -> Self {
        Self { left }
    }

    /// Translate a client x into ruler space
    pub fn to_ruler_x(&self, client_x: f32) -> f32 {
        client_x - self.left
    }
}

/// Opaque handle for a set of attached listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// The global surface pointer listeners are attached to
pub trait InputSurface {
    /// Attach pointer-move and pointer-up listeners for mouse and touch
    fn attach(&mut self) -> ListenerHandle;

    /// Remove listeners previously returned by [`InputSurface::attach`]
    fn detach(&mut self, handle: ListenerHandle);
}

/// Result of feeding one event to a drag session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The dragged marker moved to this clamped position
    Moved(f32),
    /// The event carried no usable position
    Ignored,
    /// The pointer was released; listeners are gone
    Ended,
}

/// An active marker drag
///
/// Holds the view mutably for its whole lifetime, so the view cannot be
/// torn down while listeners are attached.
pub struct DragSession<'a, S: InputSurface + ?Sized> {
    view: &'a mut RulerView,
    surface: &'a mut S,
    bounds: RulerBounds,
    role: MarkerRole,
    listeners: Option<ListenerHandle>,
}

impl<'a, S: InputSurface + ?Sized> DragSession<'a, S> {
    pub(crate) fn start(
        view: &'a mut RulerView,
        surface: &'a mut S,
        bounds: RulerBounds,
        role: MarkerRole,
    ) -> Self {
        let listeners = surface.attach();
        view.set_drag_state(DragState::Dragging(role));
        debug!(?role, ?listeners, "Drag started");

        Self {
            view,
            surface,
            bounds,
            role,
            listeners: Some(listeners),
        }
    }

    pub fn role(&self) -> MarkerRole {
        self.role
    }

    /// Whether the pointer is still held
    pub fn is_active(&self) -> bool {
        self.listeners.is_some()
    }

    /// Read access to the view being edited
    pub fn view(&self) -> &RulerView {
        &*self.view
    }

    /// Process one global pointer event
    pub fn handle(&mut self, event: &PointerEvent) -> DragOutcome {
        if !self.is_active() {
            return DragOutcome::Ignored;
        }

        match event {
            PointerEvent::MouseMove { client_x } => self.move_to(*client_x),
            PointerEvent::TouchMove { touches } => match touches.first() {
                Some(&client_x) => self.move_to(client_x),
                None => {
                    warn!("Touch move without touch points");
                    DragOutcome::Ignored
                }
            },
            PointerEvent::MouseUp | PointerEvent::TouchEnd => {
                self.release();
                DragOutcome::Ended
            }
        }
    }

    /// Move the dragged marker to a client x, clamped against the page and
    /// the opposite marker
    pub fn move_to(&mut self, client_x: f32) -> DragOutcome {
        if !self.is_active() {
            return DragOutcome::Ignored;
        }

        let x = self.bounds.to_ruler_x(client_x);
        let page_width = self.view.geometry().width_px();
        let gap = self.view.config().min_gap_px;
        // Drag from the positions on screen, not a possibly illegal stored pair
        let mut markers = self.view.rendered_markers();

        match self.role {
            MarkerRole::Left => markers.left = clamp_left(x, markers.right, page_width, gap),
            MarkerRole::Right => markers.right = clamp_right(x, markers.left, page_width, gap),
        }
        let position = markers.get(self.role);

        trace!(role = ?self.role, x, position, "Marker dragged");
        self.view.store_markers(markers);
        DragOutcome::Moved(position)
    }

    /// End the drag explicitly
    pub fn finish(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.listeners.take() {
            self.surface.detach(handle);
            self.view.set_drag_state(DragState::Idle);
            debug!(role = ?self.role, ?handle, "Drag ended");
        }
    }
}

impl<S: InputSurface + ?Sized> Drop for DragSession<'_, S> {
    fn drop(&mut self) {
        self.release();
    }
}
