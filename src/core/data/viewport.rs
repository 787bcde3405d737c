use crate::core::data::point::Point;

/// Pixel dimensions of the drawable area.
///
/// A zero width or height is valid and describes an empty area (for example
/// a minimised window); it simply contains no pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of `point` into a buffer covering this viewport.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    /// Every pixel in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
