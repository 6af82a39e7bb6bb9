use serde::{Deserialize, Serialize};

/// Last known state of a window that has since closed.
///
/// Keyed by title in the tracking state; `closed_at` is a monotonic
/// sequence number used so that the most recent closure wins when two
/// windows shared a title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClosedWindowMemory {
    pub title: String,
    pub workspace: String,
    pub closed_at: u64,
}
