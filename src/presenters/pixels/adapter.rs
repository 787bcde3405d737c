use std::sync::{Mutex, PoisonError};

use log::trace;
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::{
    events::render::RenderEvent, ports::presenter::InteractiveControllerPresenterPort,
};
use crate::input::gui::app::events::gui::GuiEvent;

/// Hands render events from the worker thread to the event loop thread.
///
/// Holds only the newest event; an unread older one is replaced.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            trace!("event loop closed, dropping wake-up");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
