use crate::models::WindowHandle;

/// Commands the handlers queue up for the window manager. They are drained
/// and executed by the event loop after each handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmAction {
    MoveToWorkspace(WindowHandle, String),
}
