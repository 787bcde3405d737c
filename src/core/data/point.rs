/// A pixel position inside a [`Viewport`](crate::core::data::viewport::Viewport).
///
/// Origin is the top-left pixel, `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
