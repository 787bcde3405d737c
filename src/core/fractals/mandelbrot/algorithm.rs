use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::view::ViewState;

pub const MAX_ITERATIONS: u32 = 100;

/// |z|² at or beyond which a point is considered escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub escaped: bool,
}

/// Runs `z ← z² + c` from `z = 0` until `|z|² >= 4` or `max_iterations` steps.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z.square_add(c);
        iterations += 1;
    }

    EscapeResult {
        iterations,
        escaped: iterations < max_iterations,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    view: ViewState,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = pixel_to_complex_coords(pixel, self.viewport, &self.view);

        escape_time(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        viewport: Viewport,
        view: ViewState,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            view,
            max_iterations,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
