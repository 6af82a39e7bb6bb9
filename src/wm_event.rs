use crate::models::WindowHandle;

/// Window events for the tracked application, already filtered and
/// enriched with the window's current workspace by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmEvent {
    WindowCreate {
        handle: WindowHandle,
        title: String,
        workspace: String,
    },
    WindowTitle {
        handle: WindowHandle,
        title: String,
        workspace: String,
    },
    WindowMove {
        handle: WindowHandle,
        workspace: String,
    },
    WindowClose {
        handle: WindowHandle,
    },
}
