use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, GuiError>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    /// Pulls the newest render event into the framebuffer, if one arrived.
    fn maybe_draw_frame(&mut self);
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}
