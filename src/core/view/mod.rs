pub mod controls;
pub mod limits;
pub mod state;

pub use controls::ViewCommand;
pub use limits::ViewLimits;
pub use state::ViewState;
