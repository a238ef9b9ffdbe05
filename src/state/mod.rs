//! Per-screen fetch state.
//!
//! Every screen owns a [`FetchState`] which publishes the last decoded value,
//! an in-flight flag and the last error text through a [`watch`] channel.
//! Loads are numbered: when two loads overlap only the most recently issued
//! one may write its result, so a slow stale response can never replace a
//! fresher one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::AppError;

mod battles;
mod leaderboard;
mod player;

pub use battles::{BattleLog, BattleStats};
pub use leaderboard::Leaderboard;
pub use player::PlayerSearch;

/// What a screen can render at a given moment.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub result: Option<T>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    in_flight: usize,
    applied: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            result: None,
            is_loading: false,
            error_message: None,
            in_flight: 0,
            applied: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The value was stored as the new result.
    Loaded,
    /// The error text was stored, the previous result is kept.
    Failed,
    /// A more recent load already completed; this one was discarded.
    Superseded,
}

#[derive(Debug)]
pub struct FetchState<T> {
    name: &'static str,
    tx: watch::Sender<Snapshot<T>>,
    issued: AtomicU64,
}

impl<T> FetchState<T> {
    pub fn new(name: &'static str) -> Self {
        let (tx, _) = watch::channel(Snapshot::default());

        Self {
            name,
            tx,
            issued: AtomicU64::new(0),
        }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }

    /// Borrow the current snapshot without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&Snapshot<T>) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn is_loading(&self) -> bool {
        self.read(|s| s.is_loading)
    }

    pub fn error_message(&self) -> Option<String> {
        self.read(|s| s.error_message.clone())
    }

    pub fn clear_error(&self) {
        self.tx.send_if_modified(|s| s.error_message.take().is_some());
    }

    /// Drive one load to completion and publish its effect.
    pub async fn run<F>(&self, fetch: F) -> LoadOutcome
    where
        F: Future<Output = Result<T, AppError>>,
    {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        self.tx.send_modify(|s| {
            s.in_flight += 1;
            s.is_loading = true;
            s.error_message = None;
        });
        let mut guard = InFlight {
            tx: &self.tx,
            armed: true,
        };

        let outcome = fetch.await;

        let mut effect = LoadOutcome::Superseded;
        self.tx.send_modify(|s| {
            s.in_flight -= 1;
            s.is_loading = s.in_flight > 0;

            if seq <= s.applied {
                return;
            }
            s.applied = seq;

            match outcome {
                Ok(value) => {
                    s.result = Some(value);
                    s.error_message = None;
                    effect = LoadOutcome::Loaded;
                }
                Err(e) => {
                    s.error_message = Some(e.to_string());
                    effect = LoadOutcome::Failed;
                }
            }
        });
        guard.armed = false;

        match effect {
            LoadOutcome::Failed => {
                let error = self.error_message().unwrap_or_default();
                warn!(holder = self.name, seq, %error, "📡 ⚠️ Load failed");
            }
            LoadOutcome::Superseded => {
                debug!(holder = self.name, seq, "📡 Discarded stale completion");
            }
            LoadOutcome::Loaded => {}
        }

        effect
    }
}

impl<T: Clone> FetchState<T> {
    pub fn snapshot(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }

    pub fn result(&self) -> Option<T> {
        self.read(|s| s.result.clone())
    }
}

/// Keeps `is_loading` honest when a load future is dropped before completing.
struct InFlight<'a, T> {
    tx: &'a watch::Sender<Snapshot<T>>,
    armed: bool,
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.tx.send_modify(|s| {
                s.in_flight -= 1;
                s.is_loading = s.in_flight > 0;
            });
        }
    }
}
