use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

/// Error type for cancelable pixel buffer generation.
#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// The input does not cover the viewport exactly.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<Cancelled> for GeneratePixelBufferError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

/// Colours one value per pixel and packs the result into a [`PixelBuffer`].
///
/// `input` must be row-major and hold exactly one value per viewport pixel.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    viewport: Viewport,
) -> Result<PixelBuffer, PixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
{
    generate_pixel_buffer_cancelable(input, mapper, viewport, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferError::PixelBuffer(err) => err,
        GeneratePixelBufferError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_pixel_buffer`], polling `cancel` once per
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    viewport: Viewport,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    C: CancelToken,
{
    if input.len() != viewport.size() {
        return Err(PixelBufferError::BoundsMismatch {
            viewport_size: viewport.size(),
            buffer_size: input.len(),
        }
        .into());
    }

    let chunks: Vec<Vec<Colour>> = input
        .par_chunks(CANCEL_CHECK_INTERVAL_PIXELS)
        .map(|chunk| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            Ok(chunk.iter().map(|&value| mapper.map(value)).collect())
        })
        .collect::<Result<_, Cancelled>>()?;

    let colours = chunks.into_iter().flatten().collect();

    Ok(PixelBuffer::from_data(viewport, colours)?)
}
