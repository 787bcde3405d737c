use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Surface(pixels::TextureError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Pixels(err) => write!(f, "framebuffer error: {}", err),
            Self::Surface(err) => write!(f, "could not resize framebuffer: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Surface(err)
    }
}
