//! Drive the manager from window manager events until shutdown.

use crate::errors::Result;
use crate::gateways::WmGateway;
use crate::manager::Manager;
use crate::utils::snapshot_file::SnapshotFile;
use tokio::signal::unix::{signal, SignalKind};

impl<WM: WmGateway> Manager<WM> {
    /// Consume window events until the stream ends or a termination signal
    /// arrives. State is flushed after every closed-memory change and, best
    /// effort, on every exit path.
    pub async fn event_loop(mut self, store: &SnapshotFile) -> Result<()> {
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;

        let result = loop {
            tokio::select! {
                event = self.wm.next_event() => match event {
                    Ok(event) => {
                        if self.window_event_handler(event) {
                            self.flush_requested = true;
                        }
                    }
                    // There is no degraded mode without the event stream.
                    Err(err) => break Err(err),
                },
                _ = sigterm.recv() => {
                    tracing::info!("received SIGTERM, shutting down");
                    break Ok(());
                }
                _ = sigint.recv() => {
                    tracing::info!("received SIGINT, shutting down");
                    break Ok(());
                }
            }

            while let Some(action) = self.state.actions.pop_front() {
                if let Err(err) = self.wm.execute_action(action).await {
                    // A lost command is recovered by later events; a dead
                    // connection surfaces on the event stream right after.
                    tracing::warn!("window manager command failed: {}", err);
                }
            }

            if self.flush_requested {
                match store.save(&self.state.snapshot(&self.config)).await {
                    Ok(()) => self.flush_requested = false,
                    Err(err) => tracing::error!("could not save state, will retry: {}", err),
                }
            }
        };

        if let Err(err) = store.save(&self.state.snapshot(&self.config)).await {
            tracing::error!("could not save state on shutdown: {}", err);
        }
        result
    }
}
