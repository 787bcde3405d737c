//! Background rendering for interactive viewing.
//!
//! Callers submit [`FrameRequest`](data::frame_request::FrameRequest)
//! snapshots; a single worker thread renders the newest one and hands the
//! result to an [`InteractiveControllerPresenterPort`](ports::presenter::InteractiveControllerPresenterPort).
//! Submitting a new request cancels the frame in flight.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
