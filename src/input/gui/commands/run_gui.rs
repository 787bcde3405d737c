use std::marker::PhantomData;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::{
    events::gui::GuiEvent,
    gui_app::GuiApp,
    ports::presenter::GuiPresenterPort,
    state::{GuiAppState, KeyOutcome},
};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub const WINDOW_TITLE: &str = "Mandelbrot Viewer";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuiOptions {
    pub width: u32,
    pub height: u32,
    pub config: MandelbrotConfig,
    pub hud_visible: bool,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            config: MandelbrotConfig::default(),
            hud_visible: true,
        }
    }
}

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    options: GuiOptions,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, options: GuiOptions) -> Self {
        Self {
            presenter_factory,
            options,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(self.options.width, self.options.height))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let ui_state = GuiAppState::new(self.options.config, self.options.hud_visible);
        let mut app = GuiApp::new(window, &event_loop, presenter, controller, ui_state);
        let mut redraw_pending = true;
        let mut failure: Option<GuiError> = None;

        info!("window open, {} max iterations", self.options.config.max_iterations);

        event_loop.run(|event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    redraw_pending = true;
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                    if egui_repaint {
                        redraw_pending = true;
                    }

                    match event {
                        WindowEvent::CloseRequested => {
                            app.controller.shutdown();
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key_code),
                                    state,
                                    ..
                                },
                            ..
                        } if !egui_consumed => match app.handle_key(*key_code, *state) {
                            KeyOutcome::ExitRequested => {
                                app.controller.shutdown();
                                elwt.exit();
                            }
                            KeyOutcome::ViewChanged | KeyOutcome::HudToggled => {
                                redraw_pending = true;
                            }
                            KeyOutcome::Ignored => {}
                        },
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            app.poll_frame();
                            app.submit_render_request_if_needed();

                            let egui_output = app.update_ui(window);

                            app.egui_state.handle_platform_output(
                                window,
                                egui_output.platform_output.clone(),
                            );

                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            if let Err(e) = app.render(egui_output) {
                                error!("render error: {e}");
                                failure = Some(e);
                                app.controller.shutdown();
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            if let Err(e) = app.resize(size.width, size.height) {
                                error!("resize error: {e}");
                                failure = Some(e);
                                app.controller.shutdown();
                                elwt.exit();
                            }
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            if let Err(e) = app.resize(size.width, size.height) {
                                error!("resize error: {e}");
                                failure = Some(e);
                                app.controller.shutdown();
                                elwt.exit();
                            }
                            redraw_pending = true;
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })?;

        info!("window closed");

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
