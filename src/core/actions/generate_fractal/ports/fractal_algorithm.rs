use crate::core::data::point::Point;

/// Per-pixel evaluation step of a frame.
///
/// Implementations must be pure in `pixel`: the generators call `compute`
/// from many threads in any order.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
