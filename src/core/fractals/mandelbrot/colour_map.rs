use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeResult;

/// Phase shift of the trig palette.
pub const PALETTE_PHASE: f64 = 3.0;

/// Escape count as a fraction of the iteration bound, in `[0, 1]`.
#[must_use]
pub fn normalise(result: EscapeResult, max_iterations: u32) -> f64 {
    debug_assert!(max_iterations > 0, "iteration bound is validated by MandelbrotConfig");

    f64::from(result.iterations.min(max_iterations)) / f64::from(max_iterations)
}

/// Raises `t` to `shading_intensity`.
///
/// `0` to a non-positive power has no real value; it is defined as `0` here so
/// a frame never carries infinities or NaNs into the palette.
#[must_use]
pub fn apply_shading(t: f64, shading_intensity: f64) -> f64 {
    if t == 0.0 && shading_intensity <= 0.0 {
        return 0.0;
    }

    t.powf(shading_intensity)
}

/// `0.5 + 0.5·cos/sin(3 + t)`. Red and blue share a formula.
#[must_use]
pub fn palette(t: f64) -> Colour {
    let phase = PALETTE_PHASE + t;
    let r = 0.5 + 0.5 * phase.cos();
    let g = 0.5 + 0.5 * phase.sin();
    let b = 0.5 + 0.5 * phase.cos();

    Colour {
        r: r as f32,
        g: g as f32,
        b: b as f32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotTrigPalette {
    max_iterations: u32,
    shading_intensity: f64,
}

impl ColourMap<EscapeResult> for MandelbrotTrigPalette {
    fn map(&self, result: EscapeResult) -> Colour {
        let mut t = normalise(result, self.max_iterations);

        // interior points stay at t = 1 whatever the shading
        if result.escaped {
            t = apply_shading(t, self.shading_intensity);
        }

        palette(t)
    }
}

impl MandelbrotTrigPalette {
    #[must_use]
    pub fn new(max_iterations: u32, shading_intensity: f64) -> Self {
        Self {
            max_iterations,
            shading_intensity,
        }
    }

    #[must_use]
    pub fn shading_intensity(&self) -> f64 {
        self.shading_intensity
    }
}
