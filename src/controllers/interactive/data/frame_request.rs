use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::ViewState;

/// Everything needed to render one frame.
///
/// `PartialEq` lets callers skip submitting a request identical to the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    pub viewport: Viewport,
    pub view: ViewState,
    pub config: MandelbrotConfig,
}

impl FrameRequest {
    #[must_use]
    pub fn new(viewport: Viewport, view: ViewState, config: MandelbrotConfig) -> Self {
        Self {
            viewport,
            view,
            config,
        }
    }
}
