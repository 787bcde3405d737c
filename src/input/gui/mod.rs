//! Windowed viewer: winit for the window and keyboard, pixels for the
//! framebuffer, egui for the HUD.

pub mod app;
pub mod commands;
pub mod errors;
