use std::path::PathBuf;

use clap::Parser;

use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::ViewState;
use crate::core::view::state::{
    DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y, DEFAULT_SHADING_INTENSITY, DEFAULT_ZOOM,
};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Renders one Mandelbrot frame to a PPM image.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelbrot_viewer", version, allow_negative_numbers = true)]
pub struct RenderArgs {
    /// Image width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Magnification; values below 1e-12 are clamped.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    /// Real coordinate of the image centre.
    #[arg(long, default_value_t = DEFAULT_OFFSET_X)]
    pub offset_x: f64,

    /// Imaginary coordinate of the image centre.
    #[arg(long, default_value_t = DEFAULT_OFFSET_Y)]
    pub offset_y: f64,

    /// Exponent applied to the escape fraction of escaped points.
    #[arg(long, default_value_t = DEFAULT_SHADING_INTENSITY)]
    pub shading: f64,

    /// Iteration bound per point.
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Where to write the image.
    #[arg(long, short, value_name = "PATH", default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl RenderArgs {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        ViewState::new(self.zoom, self.offset_x, self.offset_y, self.shading)
    }

    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: self.max_iterations,
        }
    }
}

/// Opens an interactive Mandelbrot window.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gui", version)]
pub struct GuiArgs {
    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Iteration bound per point.
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Start with the HUD hidden.
    #[arg(long)]
    pub no_hud: bool,
}

impl GuiArgs {
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_view() {
        let args = RenderArgs::try_parse_from(["mandelbrot_viewer"]).unwrap();

        assert_eq!(args.viewport(), Viewport::new(800, 600));
        assert_eq!(args.view(), ViewState::default());
        assert_eq!(args.config(), MandelbrotConfig::default());
        assert_eq!(args.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn accepts_negative_offsets() {
        let args = RenderArgs::try_parse_from([
            "mandelbrot_viewer",
            "--offset-x",
            "-0.75",
            "--offset-y",
            "-0.1",
            "--zoom",
            "4",
            "--shading",
            "0.5",
        ])
        .unwrap();

        let view = args.view();
        assert_eq!(view.offset_x(), -0.75);
        assert_eq!(view.offset_y(), -0.1);
        assert_eq!(view.zoom(), 4.0);
        assert_eq!(view.shading_intensity(), 0.5);
    }

    #[test]
    fn zero_zoom_is_clamped() {
        let args = RenderArgs::try_parse_from(["mandelbrot_viewer", "--zoom", "0"]).unwrap();

        assert!(args.view().zoom() > 0.0);
    }

    #[test]
    fn rejects_non_numeric_width() {
        assert!(RenderArgs::try_parse_from(["mandelbrot_viewer", "--width", "wide"]).is_err());
    }

    #[test]
    fn gui_args_defaults() {
        let args = GuiArgs::try_parse_from(["gui"]).unwrap();

        assert_eq!(args.width, 800);
        assert_eq!(args.height, 600);
        assert!(!args.no_hud);
        assert_eq!(args.config().max_iterations, 100);
    }
}
