//! Input adapters that turn user interaction into frame requests.

pub mod gui;
