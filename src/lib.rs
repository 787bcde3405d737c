pub mod adapters;
pub mod cli;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::headless::{HeadlessController, HeadlessError};
pub use crate::controllers::interactive::InteractiveController;
pub use crate::core::actions::render_frame::{RenderFrameError, render_frame};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::view::{ViewCommand, ViewLimits, ViewState};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
