/// User events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter.
    ///
    /// The handler decides whether to redraw; the event itself does not.
    Wake,
}
