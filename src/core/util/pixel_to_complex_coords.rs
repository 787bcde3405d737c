use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::view::ViewState;

/// Maps a pixel to the complex plane.
///
/// The viewport centre lands on `(offset_x, offset_y)` and a quarter of each
/// viewport dimension spans one unit at zoom 1. The axes scale independently,
/// so non-square viewports stretch the image rather than crop it.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: Viewport, view: &ViewState) -> Complex {
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let real = (f64::from(pixel.x) - width / 2.0) / (width / 4.0 * view.zoom()) + view.offset_x();
    let imag = (f64::from(pixel.y) - height / 2.0) / (height / 4.0 * view.zoom()) + view.offset_y();

    Complex { real, imag }
}
