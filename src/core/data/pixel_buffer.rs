use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<Colour>;

/// One rendered frame: a colour for every pixel of a viewport, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![Colour::BLACK; viewport.size()],
        }
    }

    pub fn from_data(
        viewport: Viewport,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if viewport.size() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size: viewport.size(),
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { viewport, buffer })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &[Colour] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.viewport
            .index_of(pixel)
            .map(|index| self.buffer[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };

    #[test]
    fn test_new_creates_black_buffer() {
        let viewport = Viewport::new(10, 10);
        let buffer = PixelBuffer::new(viewport);

        assert_eq!(buffer.viewport(), viewport);
        assert_eq!(buffer.buffer_size(), 100);
        assert!(buffer.buffer().iter().all(|&c| c == Colour::BLACK));
    }

    #[test]
    fn test_new_with_empty_viewport_has_no_pixels() {
        let buffer = PixelBuffer::new(Viewport::new(0, 600));

        assert!(buffer.is_empty());
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), None);
    }

    #[test]
    fn test_from_data_valid() {
        let viewport = Viewport::new(2, 1);
        let data = vec![RED, GREEN];

        let buffer = PixelBuffer::from_data(viewport, data.clone()).unwrap();

        assert_eq!(buffer.viewport(), viewport);
        assert_eq!(buffer.buffer(), data.as_slice());
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(Viewport::new(2, 2), vec![RED]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                viewport_size: 4,
                buffer_size: 1
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(Viewport::new(1, 1), vec![RED; 3]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                viewport_size: 1,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let viewport = Viewport::new(3, 3);
        let mut data = vec![Colour::BLACK; 9];
        data[7] = RED;

        let buffer = PixelBuffer::from_data(viewport, data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 1, y: 2 }), Some(RED));
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Some(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 3, y: 1 }), None);
    }

    #[test]
    fn test_bounds_mismatch_display() {
        let err = PixelBufferError::BoundsMismatch {
            viewport_size: 12,
            buffer_size: 3,
        };

        assert_eq!(err.to_string(), "viewport size 12 does not match buffer size 3");
    }
}
