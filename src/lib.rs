//! Keep Firefox windows on their i3/sway workspaces.
//!
//! Firefox windows open with a generic placeholder title and only get
//! their real title a moment later, after the window manager has already
//! placed them. This crate tracks where each title was last seen and
//! moves a freshly titled window back to that workspace, surviving both
//! daemon and browser restarts through a snapshot in the XDG state
//! directory.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    async_fn_in_trait
)]
mod config;
pub mod errors;
mod event_loop;
mod gateways;
mod handlers;
mod manager;
pub mod models;
pub mod state;
pub mod utils;
mod wm_action;
mod wm_event;

pub use config::Config;
pub use gateways::{I3Gateway, WmGateway};
pub use manager::Manager;
pub use state::{Snapshot, TrackingState};
pub use utils::snapshot_file::SnapshotFile;
pub use wm_action::WmAction;
pub use wm_event::WmEvent;
