use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::{
    algorithm::{MAX_ITERATIONS, MandelbrotAlgorithm},
    colour_map::MandelbrotTrigPalette,
    errors::MandelbrotError,
};
use crate::core::view::ViewState;

/// Settings that stay fixed across frames, unlike the [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_algorithm(
        &self,
        viewport: Viewport,
        view: ViewState,
    ) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(viewport, view, self.max_iterations)
    }

    #[must_use]
    pub fn build_colour_map(&self, view: ViewState) -> MandelbrotTrigPalette {
        MandelbrotTrigPalette::new(self.max_iterations, view.shading_intensity())
    }
}
