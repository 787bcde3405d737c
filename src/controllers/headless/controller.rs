use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::ViewState;

#[derive(Debug)]
pub enum HeadlessError {
    Render(RenderFrameError),
    Io(io::Error),
    NothingRendered,
}

impl fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Io(err) => write!(f, "could not write image: {}", err),
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
        }
    }
}

impl Error for HeadlessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::NothingRendered => None,
        }
    }
}

impl From<RenderFrameError> for HeadlessError {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}

impl From<io::Error> for HeadlessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Renders a single frame and hands it to a file presenter.
pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    /// Renders `view` into a fresh buffer, replacing any earlier one.
    pub fn generate(
        &mut self,
        viewport: Viewport,
        view: ViewState,
        config: &MandelbrotConfig,
    ) -> Result<Duration, HeadlessError> {
        info!(
            "rendering {}x{} frame, {} max iterations",
            viewport.width(),
            viewport.height(),
            config.max_iterations
        );

        let start = Instant::now();
        let buffer = render_frame(viewport, view, config)?;
        let duration = start.elapsed();

        info!("render took {:?}", duration);

        self.buffer = Some(buffer);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), HeadlessError> {
        let buffer = self.buffer.as_ref().ok_or(HeadlessError::NothingRendered)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        info!("wrote {}", filepath.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    struct FailingPresenter;

    impl FilePresenterPort for FailingPresenter {
        fn present(&self, _buffer: &PixelBuffer, _filepath: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = HeadlessController::new(&presenter);

        let result = controller.write("out.ppm");

        assert!(matches!(result, Err(HeadlessError::NothingRendered)));
        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_buffer() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(&presenter);

        controller
            .generate(Viewport::new(8, 6), ViewState::default(), &MandelbrotConfig::default())
            .unwrap();
        controller.write("frame.ppm").unwrap();

        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("frame.ppm"), 48)]
        );
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let presenter = RecordingPresenter::default();
        let mut controller = HeadlessController::new(&presenter);

        let result = controller.generate(
            Viewport::new(8, 6),
            ViewState::default(),
            &MandelbrotConfig { max_iterations: 0 },
        );

        assert!(matches!(result, Err(HeadlessError::Render(RenderFrameError::Config(_)))));
        assert!(controller.buffer().is_none());
    }

    #[test]
    fn test_presenter_io_error_is_propagated() {
        let mut controller = HeadlessController::new(FailingPresenter);
        controller
            .generate(Viewport::new(2, 2), ViewState::default(), &MandelbrotConfig::default())
            .unwrap();

        let err = controller.write("nowhere.ppm").unwrap_err();

        assert!(matches!(err, HeadlessError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }
}
