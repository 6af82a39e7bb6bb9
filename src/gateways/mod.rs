use crate::errors::Result;
use crate::models::WindowView;
use crate::wm_action::WmAction;
use crate::wm_event::WmEvent;

mod i3;
#[cfg(test)]
mod mock_gateway;
pub mod protocol;

pub use self::i3::I3Gateway;
#[cfg(test)]
pub use self::mock_gateway::MockGateway;

/// The window manager surface the engine consumes: an event stream, a
/// way to run queued actions, and a live-tree query for startup.
pub trait WmGateway {
    /// Wait for the next window event of the tracked application. Errors
    /// mean the connection to the window manager is gone.
    async fn next_event(&mut self) -> Result<WmEvent>;

    /// Execute one queued action. A rejected command (for example because
    /// the window closed in the meantime) is not an error.
    async fn execute_action(&mut self, action: WmAction) -> Result<()>;

    /// Currently open windows of the tracked application.
    async fn list_windows(&mut self) -> Result<Vec<WindowView>>;
}
