pub mod events;
pub mod gui_app;
pub mod keys;
pub mod ports;
pub mod state;
