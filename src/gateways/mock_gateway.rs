use super::WmGateway;
use crate::errors::{FoxError, Result};
use crate::models::{WindowHandle, WindowView};
use crate::wm_action::WmAction;
use crate::wm_event::WmEvent;
use std::collections::VecDeque;

/// Scripted gateway for tests: events are popped from a queue and issued
/// move commands are recorded.
#[derive(Debug, Default)]
pub struct MockGateway {
    pub live: Vec<WindowView>,
    pub events: VecDeque<WmEvent>,
    pub moves: Vec<(WindowHandle, String)>,
}

impl WmGateway for MockGateway {
    async fn next_event(&mut self) -> Result<WmEvent> {
        self.events.pop_front().ok_or(FoxError::StreamClosed)
    }

    async fn execute_action(&mut self, action: WmAction) -> Result<()> {
        match action {
            WmAction::MoveToWorkspace(handle, workspace) => self.moves.push((handle, workspace)),
        }
        Ok(())
    }

    async fn list_windows(&mut self) -> Result<Vec<WindowView>> {
        Ok(self.live.clone())
    }
}
