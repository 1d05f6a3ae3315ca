use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use shared::{domain::FetchState, error::FactFetchError, protocol::FactResponse};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

mod source;
pub use source::HttpFactSource;

/// User-facing message for a failed fetch, regardless of the cause.
pub const FAILURE_MESSAGE: &str = "Could not load fact. Please try again.";

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Remote fact resource. One fetch per call; failures are reported through
/// [`FactFetchError`], never panics.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_random(&self) -> Result<FactResponse, FactFetchError>;
}

#[derive(Debug, Clone)]
pub enum FactEvent {
    StateChanged(FetchState),
}

/// Mediates at most one concurrent fetch against a [`FactSource`] and tracks
/// the lifecycle in a [`FetchState`] machine.
///
/// A trigger that arrives while a request is in flight is dropped, not
/// queued, so two results can never race to set state. Errors never reach
/// the caller; they are absorbed into `FetchState::Failed`.
pub struct FactController {
    source: Arc<dyn FactSource>,
    simulated_latency: Option<Duration>,
    state: Mutex<FetchState>,
    events: broadcast::Sender<FactEvent>,
}

impl FactController {
    pub fn new(source: Arc<dyn FactSource>) -> Arc<Self> {
        Self::build(source, None)
    }

    /// Sleeps for `latency` before each outbound request. Presentation
    /// nicety only; correctness does not depend on it.
    pub fn with_simulated_latency(source: Arc<dyn FactSource>, latency: Duration) -> Arc<Self> {
        Self::build(source, Some(latency))
    }

    fn build(source: Arc<dyn FactSource>, simulated_latency: Option<Duration>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            source,
            simulated_latency,
            state: Mutex::new(FetchState::Idle),
            events,
        })
    }

    /// Starts one fetch unless a request is already in flight, in which case
    /// the call is a logged no-op. The state is `Loading` by the time this
    /// returns; the outcome lands later via [`FactController::current_state`]
    /// and the event stream.
    pub async fn trigger(self: &Arc<Self>) {
        {
            let mut state = self.state.lock().await;
            if state.is_loading() {
                debug!("trigger ignored: previous request still in flight");
                return;
            }
            *state = FetchState::Loading;
        }
        let _ = self
            .events
            .send(FactEvent::StateChanged(FetchState::Loading));

        let source = Arc::clone(&self.source);
        let simulated_latency = self.simulated_latency;
        let controller = Arc::downgrade(self);
        tokio::spawn(async move {
            if let Some(latency) = simulated_latency {
                tokio::time::sleep(latency).await;
            }

            let result = source.fetch_random().await;

            // The controller may have been dropped while the request was in
            // flight; a completion without an owner must be a no-op.
            let Some(controller) = controller.upgrade() else {
                debug!("fact fetch completed after controller was dropped; discarding result");
                return;
            };
            controller.complete(result).await;
        });
    }

    /// Snapshot of the current state. No side effects.
    pub async fn current_state(&self) -> FetchState {
        self.state.lock().await.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<FactEvent> {
        self.events.subscribe()
    }

    async fn complete(&self, result: Result<FactResponse, FactFetchError>) {
        let next = match result {
            Ok(fact) => {
                debug!(text = %fact.text, "fact fetch succeeded");
                FetchState::Success { value: fact.text }
            }
            Err(err) => {
                warn!(error = %err, "fact fetch failed");
                FetchState::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                }
            }
        };

        {
            let mut state = self.state.lock().await;
            *state = next.clone();
        }
        let _ = self.events.send(FactEvent::StateChanged(next));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
