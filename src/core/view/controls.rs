/// A discrete adjustment to the [`ViewState`](crate::core::view::ViewState).
///
/// Input layers translate key presses into these; the core never sees keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCommand {
    ShadingDown,
    ShadingUp,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    Reset,
}
