use crate::config::Config;
use crate::gateways::WmGateway;
use crate::state::TrackingState;
use crate::utils::snapshot_file::SnapshotFile;

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<WM> {
    pub state: TrackingState,
    pub config: Config,
    pub wm: WM,
    pub(crate) flush_requested: bool,
}

impl<WM: WmGateway> Manager<WM> {
    pub fn new(config: Config, wm: WM) -> Self {
        let state = TrackingState::new(config.closed_window_limit);
        Self {
            state,
            config,
            wm,
            flush_requested: false,
        }
    }

    /// Seed the tracking state, once, before the event loop starts.
    ///
    /// A live window list is authoritative: those windows stay exactly
    /// where they are and any saved snapshot is stale by definition. Only
    /// when the application is not running yet is the snapshot loaded, so
    /// the windows of its upcoming startup can be relocated.
    pub async fn reconcile_startup(&mut self, store: &SnapshotFile) -> crate::errors::Result<()> {
        let live = self.wm.list_windows().await?;
        if live.is_empty() {
            match store.load().await {
                Ok(Some(snapshot)) => {
                    self.state.restore(snapshot);
                    tracing::info!(
                        "no live windows, restored {} remembered titles",
                        self.state.closed_count()
                    );
                }
                Ok(None) => tracing::info!("no live windows and no saved state, starting empty"),
                Err(err) => tracing::warn!("ignoring unreadable saved state: {}", err),
            }
        } else {
            tracing::info!(
                "found {} live windows, adopting them and discarding saved state",
                live.len()
            );
            for view in live {
                self.state
                    .upsert_open(view.handle, view.title, view.workspace)
                    .settled = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl Manager<crate::gateways::MockGateway> {
    pub fn new_test() -> Self {
        Self::new(Config::default(), crate::gateways::MockGateway::default())
    }
}
