use thiserror::Error;

pub type Result<T> = std::result::Result<T, FoxError>;

#[derive(Debug, Error)]
pub enum FoxError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Config error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("IPC protocol error: {0}")]
    Protocol(String),
    #[error("Window manager socket not found, is I3SOCK or SWAYSOCK set?")]
    SocketNotFound,
    #[error("Window event stream closed by the window manager")]
    StreamClosed,
}
