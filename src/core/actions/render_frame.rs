use log::trace;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::ViewState;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError {
    Config(MandelbrotError),
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid render settings: {}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::Config(err)
    }
}

impl From<Cancelled> for RenderFrameError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Renders one complete frame: maps, evaluates and colours every pixel.
///
/// An empty viewport yields an empty buffer.
pub fn render_frame(
    viewport: Viewport,
    view: ViewState,
    config: &MandelbrotConfig,
) -> Result<PixelBuffer, RenderFrameError> {
    render_frame_cancelable(viewport, view, config, &NeverCancel)
}

/// Like [`render_frame`], aborting between rows once `cancel` fires.
pub fn render_frame_cancelable<C: CancelToken>(
    viewport: Viewport,
    view: ViewState,
    config: &MandelbrotConfig,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    trace!(
        "rendering {}x{} frame at zoom {} offset ({}, {}) shading {}",
        viewport.width(),
        viewport.height(),
        view.zoom(),
        view.offset_x(),
        view.offset_y(),
        view.shading_intensity()
    );

    let algorithm = config.build_algorithm(viewport, view)?;
    let colour_map = config.build_colour_map(view);

    let escape_results = generate_fractal_parallel_rayon_cancelable(viewport, &algorithm, cancel)?;

    if cancel.is_cancelled() {
        return Err(Cancelled.into());
    }

    let pixel_buffer =
        generate_pixel_buffer_cancelable(&escape_results, &colour_map, viewport, cancel)?;

    Ok(pixel_buffer)
}
