use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::viewport::Viewport;

/// Single-threaded reference: evaluates every pixel in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    viewport
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
