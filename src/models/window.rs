//! Window information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A window-manager-assigned handle used to identify a window.
///
/// Stable for the lifetime of the window, unique among currently open
/// windows, and meaningless after the window closes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub i64);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currently open, tracked application window.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenWindow {
    pub handle: WindowHandle,
    pub title: String,
    pub workspace: String,
    /// True once the title has left the placeholder at least once. A window
    /// is relocated at most once, on that transition.
    pub settled: bool,
}

/// A window as reported by the window manager's tree query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub handle: WindowHandle,
    pub title: String,
    pub workspace: String,
}
