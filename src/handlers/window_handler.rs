use crate::gateways::WmGateway;
use crate::manager::Manager;
use crate::models::WindowHandle;
use crate::wm_action::WmAction;
use crate::wm_event::WmEvent;

impl<WM: WmGateway> Manager<WM> {
    /// Process a single window event. Returns true if closed-window memory
    /// changed and should reach the snapshot file.
    pub fn window_event_handler(&mut self, event: WmEvent) -> bool {
        match event {
            WmEvent::WindowCreate {
                handle,
                title,
                workspace,
            } => self.window_created_handler(handle, title, workspace),
            WmEvent::WindowTitle {
                handle,
                title,
                workspace,
            } => self.window_title_handler(handle, title, workspace),
            WmEvent::WindowMove { handle, workspace } => {
                self.window_moved_handler(handle, workspace)
            }
            WmEvent::WindowClose { handle } => self.window_closed_handler(handle),
        }
    }

    /// A brand new window. Its title is assumed to still be the
    /// placeholder, so no relocation happens here.
    fn window_created_handler(
        &mut self,
        handle: WindowHandle,
        title: String,
        workspace: String,
    ) -> bool {
        tracing::debug!("new window {} on workspace {}", handle, workspace);
        self.state.upsert_open(handle, title, workspace);
        false
    }

    /// The one place relocation can happen: the first time a window's
    /// title leaves the placeholder.
    fn window_title_handler(
        &mut self,
        handle: WindowHandle,
        title: String,
        workspace: String,
    ) -> bool {
        if !self.state.contains_open(handle) {
            // We started after this window existed; adopt it late.
            tracing::debug!("title change for untracked window {}, adopting it", handle);
            self.state.upsert_open(handle, title.clone(), workspace);
        }

        let placeholder = self.config.is_placeholder(&title);
        let Some(window) = self.state.get_open_mut(handle) else {
            return false;
        };
        if window.settled {
            tracing::debug!("renamed {} to \"{}\"", handle, title);
            window.title = title;
            return false;
        }
        if placeholder {
            return false;
        }

        window.settled = true;
        window.title.clone_from(&title);
        let current = window.workspace.clone();

        let Some(memory) = self.state.take_closed_by_title(&title) else {
            tracing::debug!("settled {} titled \"{}\", no memory for it", handle, title);
            return false;
        };
        if memory.workspace != current {
            tracing::info!(
                "title \"{}\" last seen on workspace {}, moving {}",
                title,
                memory.workspace,
                handle
            );
            self.state
                .actions
                .push_back(WmAction::MoveToWorkspace(handle, memory.workspace.clone()));
            // Optimistic update; the move event confirms or corrects it.
            if let Some(window) = self.state.get_open_mut(handle) {
                window.workspace = memory.workspace;
            }
        }
        // The memory entry was consumed either way.
        true
    }

    fn window_moved_handler(&mut self, handle: WindowHandle, workspace: String) -> bool {
        match self.state.get_open_mut(handle) {
            Some(window) => {
                tracing::debug!("window {} now on workspace {}", handle, workspace);
                window.workspace = workspace;
            }
            // External state can diverge from ours; not an error.
            None => tracing::debug!("move event for untracked window {}", handle),
        }
        false
    }

    fn window_closed_handler(&mut self, handle: WindowHandle) -> bool {
        let Some(window) = self.state.remove_open(handle) else {
            tracing::debug!("close event for untracked window {}", handle);
            return false;
        };
        if self.config.is_placeholder(&window.title) {
            tracing::debug!("window {} closed before it settled, nothing to remember", handle);
            return false;
        }
        tracing::info!(
            "closed \"{}\", remembering workspace {}",
            window.title,
            window.workspace
        );
        self.state.remember_closed(window.title, window.workspace);
        true
    }
}
