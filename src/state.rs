//! Save and restore tracking state.
//!
//! `TrackingState` is the single in-memory model: open windows keyed by
//! handle and closed-window memory keyed by title. It never talks to the
//! window manager or the disk; the handlers mutate it and the event loop
//! carries its queued actions and snapshots outward.

use crate::config::Config;
use crate::models::{ClosedWindowMemory, OpenWindow, WindowHandle};
use crate::wm_action::WmAction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// The serialized form of closed-window memory, ordered oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub closed: Vec<ClosedWindowMemory>,
}

#[derive(Debug)]
pub struct TrackingState {
    open: HashMap<WindowHandle, OpenWindow>,
    closed: HashMap<String, ClosedWindowMemory>,
    closed_limit: usize,
    next_seq: u64,
    pub actions: VecDeque<WmAction>,
}

impl TrackingState {
    pub fn new(closed_limit: usize) -> Self {
        Self {
            open: HashMap::new(),
            closed: HashMap::new(),
            closed_limit,
            next_seq: 0,
            actions: VecDeque::new(),
        }
    }

    /// Insert a window, or update title and workspace if it is already
    /// tracked. New windows start unsettled.
    pub fn upsert_open(
        &mut self,
        handle: WindowHandle,
        title: String,
        workspace: String,
    ) -> &mut OpenWindow {
        self.open
            .entry(handle)
            .and_modify(|w| {
                w.title.clone_from(&title);
                w.workspace.clone_from(&workspace);
            })
            .or_insert(OpenWindow {
                handle,
                title,
                workspace,
                settled: false,
            })
    }

    pub fn contains_open(&self, handle: WindowHandle) -> bool {
        self.open.contains_key(&handle)
    }

    pub fn get_open_mut(&mut self, handle: WindowHandle) -> Option<&mut OpenWindow> {
        self.open.get_mut(&handle)
    }

    pub fn remove_open(&mut self, handle: WindowHandle) -> Option<OpenWindow> {
        self.open.remove(&handle)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Record where a closed window's title was last seen, overwriting any
    /// older memory for the same title. Evicts the oldest entry once the
    /// table exceeds its limit.
    pub fn remember_closed(&mut self, title: String, workspace: String) {
        let closed_at = self.bump_seq();
        self.closed.insert(
            title.clone(),
            ClosedWindowMemory {
                title,
                workspace,
                closed_at,
            },
        );
        while self.closed.len() > self.closed_limit {
            let oldest = self
                .closed
                .values()
                .min_by_key(|m| m.closed_at)
                .map(|m| m.title.clone());
            match oldest {
                Some(title) => self.closed.remove(&title),
                None => break,
            };
        }
    }

    /// Look up memory for a title, removing it on hit so a later window
    /// with the same title is not relocated again.
    pub fn take_closed_by_title(&mut self, title: &str) -> Option<ClosedWindowMemory> {
        self.closed.remove(title)
    }

    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Serialize the memory table, merging in the currently open settled
    /// windows as the freshest entries. That way windows still open when
    /// the daemon stops are remembered on the next start.
    pub fn snapshot(&self, config: &Config) -> Snapshot {
        let mut closed: Vec<ClosedWindowMemory> = self.closed.values().cloned().collect();
        closed.sort_by_key(|m| m.closed_at);
        let mut seq = self.next_seq;
        for window in self.open.values() {
            if window.settled && !config.is_placeholder(&window.title) {
                closed.push(ClosedWindowMemory {
                    title: window.title.clone(),
                    workspace: window.workspace.clone(),
                    closed_at: seq,
                });
                seq += 1;
            }
        }
        Snapshot { closed }
    }

    /// Rebuild the closed-window memory from a snapshot. On duplicate
    /// titles the entry with the highest `closed_at` wins.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.closed.clear();
        for memory in snapshot.closed {
            self.next_seq = self.next_seq.max(memory.closed_at + 1);
            match self.closed.get(&memory.title) {
                Some(existing) if existing.closed_at > memory.closed_at => {}
                _ => {
                    self.closed.insert(memory.title.clone(), memory);
                }
            }
        }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TrackingState {
        TrackingState::new(64)
    }

    #[test]
    fn newer_closure_overwrites_memory_for_same_title() {
        let mut state = state();
        state.remember_closed("Mail \u{2013} Inbox".into(), "1".into());
        state.remember_closed("Mail \u{2013} Inbox".into(), "3".into());
        let memory = state.take_closed_by_title("Mail \u{2013} Inbox").unwrap();
        assert_eq!(memory.workspace, "3");
        // Removed on hit.
        assert!(state.take_closed_by_title("Mail \u{2013} Inbox").is_none());
    }

    #[test]
    fn closed_memory_round_trips_through_snapshot() {
        let config = Config::default();
        let mut state = state();
        state.remember_closed("a".into(), "1".into());
        state.remember_closed("b".into(), "2".into());
        state.remember_closed("a".into(), "5".into());

        let snapshot = state.snapshot(&config);
        let mut restored = TrackingState::new(64);
        restored.restore(snapshot.clone());

        assert_eq!(restored.snapshot(&config), snapshot);
        assert_eq!(restored.take_closed_by_title("a").unwrap().workspace, "5");
        // New closures still sort after everything restored.
        restored.remember_closed("b".into(), "9".into());
        assert_eq!(restored.take_closed_by_title("b").unwrap().workspace, "9");
    }

    #[test]
    fn snapshot_includes_open_settled_windows_as_freshest_memory() {
        let config = Config::default();
        let mut state = state();
        state.remember_closed("Docs".into(), "2".into());
        state
            .upsert_open(WindowHandle(7), "Docs".into(), "4".into())
            .settled = true;
        state.upsert_open(WindowHandle(8), "Mozilla Firefox".into(), "5".into());

        let snapshot = state.snapshot(&config);
        // The unsettled placeholder window is not persisted.
        assert_eq!(snapshot.closed.len(), 2);

        let mut restored = TrackingState::new(64);
        restored.restore(snapshot);
        // The live window was more recent than the stale closure.
        assert_eq!(restored.take_closed_by_title("Docs").unwrap().workspace, "4");
    }

    #[test]
    fn oldest_memory_is_evicted_past_the_limit() {
        let mut state = TrackingState::new(2);
        state.remember_closed("a".into(), "1".into());
        state.remember_closed("b".into(), "2".into());
        state.remember_closed("c".into(), "3".into());
        assert_eq!(state.closed_count(), 2);
        assert!(state.take_closed_by_title("a").is_none());
        assert!(state.take_closed_by_title("c").is_some());
    }
}
