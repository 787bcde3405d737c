use crate::controllers::interactive::InteractiveController;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::{GuiAppState, KeyOutcome};
use crate::input::gui::errors::GuiError;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::debug;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    presenter: T,
    pub controller: InteractiveController,
    pub ui_state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        ui_state: GuiAppState,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            presenter,
            controller,
            ui_state,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;
        self.ui_state.invalidate_submission();

        self.presenter.resize(width, height)
    }

    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState) -> KeyOutcome {
        let outcome = self.ui_state.handle_key(key_code, state);

        if outcome == KeyOutcome::ViewChanged {
            let view = self.ui_state.view;
            debug!(
                "view: zoom {:.6} offset ({:.6}, {:.6}) shading {:.2}",
                view.zoom(),
                view.offset_x(),
                view.offset_y(),
                view.shading_intensity()
            );
        }

        outcome
    }

    /// Pulls any finished frame into the framebuffer so the HUD reflects it.
    pub fn poll_frame(&mut self) {
        self.presenter.maybe_draw_frame();
    }

    pub fn submit_render_request_if_needed(&mut self) {
        let viewport = Viewport::new(self.width, self.height);

        if viewport.is_empty() {
            return;
        }

        let request = self.ui_state.build_frame_request(viewport);

        if self.ui_state.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.ui_state.record_submission(request, generation);
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let hud_visible = self.ui_state.hud_visible;
        let view = self.ui_state.view;
        let max_iterations = self.ui_state.config.max_iterations;
        let generation = self.ui_state.latest_submitted_generation;
        let render_duration = self.presenter.last_render_duration();
        let error_message = self.presenter.last_error_message().map(str::to_owned);
        let (width, height) = (self.width, self.height);

        self.egui_ctx.run(raw_input, |ctx| {
            if !hud_visible {
                return;
            }

            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Zoom: {:.6}", view.zoom()));
                    ui.label(format!("Offset X: {:.6}", view.offset_x()));
                    ui.label(format!("Offset Y: {:.6}", view.offset_y()));
                    ui.label(format!("Shading: {:.2}", view.shading_intensity()));
                    ui.label(format!("Max iterations: {}", max_iterations));

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", width, height));
                    ui.label(format!("Latest generation: {}", generation));
                    if let Some(render_duration) = render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.small("Arrows: zoom/shading  WASD: pan  R: reset  F1: HUD  Esc: quit");
                });
        })
    }

    /// Forwards a window event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
