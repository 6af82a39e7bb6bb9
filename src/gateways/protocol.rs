//! The i3 IPC wire protocol, as spoken by i3 and sway.
//!
//! Every message is `"i3-ipc"` followed by a native-endian payload length,
//! a native-endian message type, and a JSON payload. Events are replies
//! with the high bit of the type set.

use crate::errors::{FoxError, Result};
use crate::models::{WindowHandle, WindowView};
use serde::Deserialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

pub const MAGIC: &[u8; 6] = b"i3-ipc";

pub const RUN_COMMAND: u32 = 0;
pub const SUBSCRIBE: u32 = 2;
pub const GET_TREE: u32 = 4;

pub const EVENT_WINDOW: u32 = 0x8000_0003;

/// i3's scratchpad is not a real workspace; windows parked there are
/// neither enumerated nor used as a relocation target.
const SCRATCHPAD: &str = "__i3_scratch";

pub async fn write_message(
    stream: &mut (impl AsyncWrite + Unpin),
    kind: u32,
    payload: &[u8],
) -> Result<()> {
    let mut buf = Vec::with_capacity(MAGIC.len() + 8 + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    buf.extend_from_slice(&kind.to_ne_bytes());
    buf.extend_from_slice(payload);
    stream.write_all(&buf).await?;
    Ok(())
}

pub async fn read_message(stream: &mut (impl AsyncRead + Unpin)) -> Result<(u32, Vec<u8>)> {
    let mut header = [0u8; 14];
    stream.read_exact(&mut header).await?;
    if &header[..6] != MAGIC {
        return Err(FoxError::Protocol("bad magic in message header".into()));
    }
    let len = u32::from_ne_bytes([header[6], header[7], header[8], header[9]]) as usize;
    let kind = u32::from_ne_bytes([header[10], header[11], header[12], header[13]]);
    let mut payload = vec![0u8; len];
    stream.read_exact(&mut payload).await?;
    Ok((kind, payload))
}

/// One node of the layout tree. Only the fields this daemon looks at.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Node {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub window_properties: Option<WindowProperties>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub floating_nodes: Vec<Node>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WindowProperties {
    #[serde(default)]
    pub class: Option<String>,
}

impl Node {
    /// Whether this container belongs to the tracked application. Sway
    /// reports an `app_id`; under plain i3 the X11 class is matched
    /// case-insensitively instead.
    pub fn matches_app(&self, app_id: &str) -> bool {
        if self.app_id.as_deref() == Some(app_id) {
            return true;
        }
        self.window_properties
            .as_ref()
            .and_then(|props| props.class.as_deref())
            .is_some_and(|class| class.eq_ignore_ascii_case(app_id))
    }

    /// All windows of the application, paired with the workspace that
    /// currently hosts them.
    pub fn application_windows(&self, app_id: &str) -> Vec<WindowView> {
        let mut found = Vec::new();
        self.walk(None, &mut |workspace, node| {
            if node.matches_app(app_id) {
                found.push(WindowView {
                    handle: WindowHandle(node.id),
                    title: node.name.clone().unwrap_or_default(),
                    workspace: workspace.to_string(),
                });
            }
        });
        found
    }

    /// The name of the workspace hosting the given window, if the window
    /// is still in the tree.
    pub fn workspace_of(&self, handle: WindowHandle) -> Option<String> {
        let mut found = None;
        self.walk(None, &mut |workspace, node| {
            if node.id == handle.0 && found.is_none() {
                found = Some(workspace.to_string());
            }
        });
        found
    }

    fn walk<'a>(&'a self, workspace: Option<&'a str>, visit: &mut impl FnMut(&str, &'a Node)) {
        let workspace = if self.node_type == "workspace" {
            match self.name.as_deref() {
                Some(SCRATCHPAD) | None => None,
                name => name,
            }
        } else {
            workspace
        };
        if let Some(workspace) = workspace {
            visit(workspace, self);
        }
        for child in self.nodes.iter().chain(&self.floating_nodes) {
            child.walk(workspace, visit);
        }
    }
}

/// A window event payload.
#[derive(Deserialize, Debug)]
pub struct WindowEvent {
    pub change: String,
    pub container: Node,
}

/// Outcome record used by both command replies and the subscribe reply.
#[derive(Deserialize, Debug)]
pub struct CommandOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
