//! Tokio-driven decay loop for native hosts.
//!
//! The loop only decides *when* a tick happens; [`PetEngine::tick`] decides
//! what changes. The engine is shared behind one async mutex so the loop and
//! user commands never mutate the pet at the same time.
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::clock::Clock;
use crate::engine::PetEngine;
use crate::storage::PetStorage;

/// Engine handle shared between the decay loop and command handlers.
pub type SharedEngine<S, C> = Arc<Mutex<PetEngine<S, C>>>;

/// Wrap an engine for sharing with a [`DecayLoop`].
pub fn share<S, C>(engine: PetEngine<S, C>) -> SharedEngine<S, C>
where
    S: PetStorage,
    C: Clock,
{
    Arc::new(Mutex::new(engine))
}

/// A running periodic decay task. Dropping it cancels the task.
#[derive(Debug, Default)]
pub struct DecayLoop {
    handle: Option<JoinHandle<()>>,
}

impl DecayLoop {
    /// Spawn the loop; the first tick fires one `period` from now.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start<S, C>(engine: SharedEngine<S, C>, period: Duration) -> Self
    where
        S: PetStorage + Send + 'static,
        C: Clock + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut guard = engine.lock().await;
                let age = guard.tick().age;
                log::trace!("decay tick, age {age}");
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the loop. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Cancel the loop and wait until its task, and its engine handle, are gone.
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for DecayLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
