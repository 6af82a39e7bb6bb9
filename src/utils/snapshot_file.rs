//! On-disk home of the closed-window snapshot.

use crate::errors::Result;
use crate::state::Snapshot;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Place the snapshot under the XDG state directory:
    /// `$XDG_STATE_HOME/i3fox/state.json`, or
    /// `~/.local/state/i3fox/state.json` when the variable is unset.
    pub fn place() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("i3fox")?.place_state_file("state.json")?;
        Ok(Self { path })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the snapshot. A missing file is simply no snapshot; anything
    /// unreadable or unparsable is an error for the caller to downgrade.
    pub async fn load(&self) -> Result<Option<Snapshot>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    /// Write the snapshot through a staging file and rename it into place,
    /// so an interrupted write never leaves a truncated snapshot behind.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        let staging = self.path.with_extension("json.new");
        let mut file = fs::File::create(&staging).await?;
        file.write_all(&json).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClosedWindowMemory;
    use tempfile::tempdir;

    fn snapshot() -> Snapshot {
        Snapshot {
            closed: vec![ClosedWindowMemory {
                title: "Mail \u{2013} Inbox".into(),
                workspace: "3".into(),
                closed_at: 12,
            }],
        }
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SnapshotFile::at(dir.path().join("state.json"));
        store.save(&snapshot()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(snapshot()));
        // No staging file left behind.
        assert!(!dir.path().join("state.json.new").exists());
    }

    #[tokio::test]
    async fn missing_file_is_no_snapshot() {
        let dir = tempdir().unwrap();
        let store = SnapshotFile::at(dir.path().join("state.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn garbage_on_disk_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, b"]]").await.unwrap();
        assert!(SnapshotFile::at(path).load().await.is_err());
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = SnapshotFile::at(dir.path().join("state.json"));
        store.save(&snapshot()).await.unwrap();
        store.save(&Snapshot::default()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(Snapshot::default()));
    }
}
