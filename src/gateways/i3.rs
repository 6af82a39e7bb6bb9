//! Gateway to a running i3 or sway instance.
//!
//! Two connections to the IPC socket: one subscribed to window events and
//! drained by a background task, one used for commands and tree queries.
//! Raw `new`/`title`/`move` events only carry the container, so they are
//! enriched here with the hosting workspace via a tree query before the
//! handlers see them.

use super::protocol::{self, CommandOutcome, Node, WindowEvent};
use super::WmGateway;
use crate::config::Config;
use crate::errors::{FoxError, Result};
use crate::models::{WindowHandle, WindowView};
use crate::wm_action::WmAction;
use crate::wm_event::WmEvent;
use std::env;
use tokio::net::UnixStream;
use tokio::sync::mpsc;

#[derive(Debug)]
enum RawEvent {
    New(WindowHandle, String),
    Title(WindowHandle, String),
    Move(WindowHandle),
    Close(WindowHandle),
}

#[derive(Debug)]
pub struct I3Gateway {
    cmd: UnixStream,
    events: mpsc::UnboundedReceiver<RawEvent>,
    reader: tokio::task::JoinHandle<()>,
    app_id: String,
}

impl Drop for I3Gateway {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

impl I3Gateway {
    /// Connect to the window manager socket and subscribe to window events.
    pub async fn connect(config: &Config) -> Result<Self> {
        let path = socket_path()?;
        let cmd = UnixStream::connect(&path).await?;
        let mut event_stream = UnixStream::connect(&path).await?;

        protocol::write_message(&mut event_stream, protocol::SUBSCRIBE, br#"["window"]"#).await?;
        let (_, payload) = protocol::read_message(&mut event_stream).await?;
        let reply: CommandOutcome = serde_json::from_slice(&payload)?;
        if !reply.success {
            return Err(FoxError::Protocol(
                "window event subscription rejected".into(),
            ));
        }

        let (tx, events) = mpsc::unbounded_channel();
        let app_id = config.app_id.clone();
        let reader = tokio::spawn(read_events(event_stream, tx, app_id.clone()));

        Ok(Self {
            cmd,
            events,
            reader,
            app_id,
        })
    }

    async fn get_tree(&mut self) -> Result<Node> {
        protocol::write_message(&mut self.cmd, protocol::GET_TREE, b"").await?;
        let (_, payload) = protocol::read_message(&mut self.cmd).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    async fn workspace_of(&mut self, handle: WindowHandle) -> Result<Option<String>> {
        Ok(self.get_tree().await?.workspace_of(handle))
    }
}

impl WmGateway for I3Gateway {
    async fn next_event(&mut self) -> Result<WmEvent> {
        loop {
            let raw = self.events.recv().await.ok_or(FoxError::StreamClosed)?;
            // Windows can vanish between the event and our tree query; the
            // close event that follows cleans up, so such events are skipped.
            let event = match raw {
                RawEvent::New(handle, title) => match self.workspace_of(handle).await? {
                    Some(workspace) => WmEvent::WindowCreate {
                        handle,
                        title,
                        workspace,
                    },
                    None => continue,
                },
                RawEvent::Title(handle, title) => match self.workspace_of(handle).await? {
                    Some(workspace) => WmEvent::WindowTitle {
                        handle,
                        title,
                        workspace,
                    },
                    None => continue,
                },
                RawEvent::Move(handle) => match self.workspace_of(handle).await? {
                    Some(workspace) => WmEvent::WindowMove { handle, workspace },
                    None => continue,
                },
                RawEvent::Close(handle) => WmEvent::WindowClose { handle },
            };
            return Ok(event);
        }
    }

    async fn execute_action(&mut self, action: WmAction) -> Result<()> {
        match action {
            WmAction::MoveToWorkspace(handle, workspace) => {
                let command = format!(
                    "[con_id={handle}] move --no-auto-back-and-forth container to workspace \"{workspace}\""
                );
                protocol::write_message(&mut self.cmd, protocol::RUN_COMMAND, command.as_bytes())
                    .await?;
                let (_, payload) = protocol::read_message(&mut self.cmd).await?;
                let outcomes: Vec<CommandOutcome> = serde_json::from_slice(&payload)?;
                if let Some(failed) = outcomes.iter().find(|o| !o.success) {
                    // Usually the window closed before the command landed.
                    tracing::warn!(
                        "move of {} rejected: {}",
                        handle,
                        failed.error.as_deref().unwrap_or("unknown error")
                    );
                }
                Ok(())
            }
        }
    }

    async fn list_windows(&mut self) -> Result<Vec<WindowView>> {
        let tree = self.get_tree().await?;
        Ok(tree.application_windows(&self.app_id))
    }
}

fn socket_path() -> Result<String> {
    env::var("I3SOCK")
        .or_else(|_| env::var("SWAYSOCK"))
        .map_err(|_| FoxError::SocketNotFound)
}

async fn read_events(
    mut stream: UnixStream,
    tx: mpsc::UnboundedSender<RawEvent>,
    app_id: String,
) {
    loop {
        let (kind, payload) = match protocol::read_message(&mut stream).await {
            Ok(message) => message,
            Err(err) => {
                tracing::error!("window event stream failed: {}", err);
                break;
            }
        };
        if kind != protocol::EVENT_WINDOW {
            continue;
        }
        let event: WindowEvent = match serde_json::from_slice(&payload) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!("ignoring unparsable window event: {}", err);
                continue;
            }
        };
        if !event.container.matches_app(&app_id) {
            continue;
        }
        let handle = WindowHandle(event.container.id);
        let title = event.container.name.clone().unwrap_or_default();
        let raw = match event.change.as_str() {
            "new" => RawEvent::New(handle, title),
            "title" => RawEvent::Title(handle, title),
            "move" => RawEvent::Move(handle),
            "close" => RawEvent::Close(handle),
            // focus, urgent, fullscreen_mode and friends are not ours.
            _ => continue,
        };
        if tx.send(raw).is_err() {
            break;
        }
    }
    // Dropping the sender surfaces as StreamClosed in next_event().
}
