use crate::adapters::pixel_format::{copy_colours_to_rgba, fill_rgba_black};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, warn};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// A frame is shown only if it is newer than the one on screen and was
/// rendered for the current surface size.
#[must_use]
pub fn should_accept_frame(
    last_presented_generation: u64,
    frame_generation: u64,
    frame_viewport: Viewport,
    surface_viewport: Viewport,
) -> bool {
    frame_generation > last_presented_generation && frame_viewport == surface_viewport
}

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        })
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.maybe_draw_frame();

        if !self.has_frame {
            fill_rgba_black(self.pixels.frame_mut());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("hud"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.has_frame = false;

        debug!("framebuffer resized to {}x{}", width, height);

        Ok(())
    }

    fn maybe_draw_frame(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let surface = Viewport::new(self.width, self.height);

                if should_accept_frame(
                    self.last_presented_generation,
                    frame.generation,
                    frame.pixel_buffer.viewport(),
                    surface,
                ) {
                    self.copy_pixel_buffer_into_pixels_frame(&frame);
                    self.has_frame = true;
                    self.last_presented_generation = frame.generation;
                    self.last_render_duration = Some(frame.render_duration);
                    self.last_error_message = None;
                } else {
                    debug!("discarding stale frame {}", frame.generation);
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    warn!("{}", error);
                    self.last_error_message = Some(error.message);
                }
            }
        }
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    fn copy_pixel_buffer_into_pixels_frame(&mut self, frame: &FrameData) {
        copy_colours_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut());
    }
}
