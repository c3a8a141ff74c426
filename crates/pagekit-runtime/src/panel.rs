use pagekit_sources::EventSource;
use pagekit_types::{EventFeed, FetchFailure, LoadState};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::loader::load_events;

/// Mounted events panel: one fetch per mount, published through a watch channel
///
/// Dropping the panel is teardown. The in-flight fetch is aborted and a
/// result that still arrives is discarded instead of being published.
pub struct EventsPanel {
    rx: watch::Receiver<LoadState<EventFeed>>,
    task: JoinHandle<()>,
}

impl EventsPanel {
    /// Start loading on the current tokio runtime
    pub fn mount<S>(source: S) -> Self
    where
        S: EventSource + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);

        let task = tokio::spawn(async move {
            let state = load_events(&source).await;
            if tx.send(state).is_err() {
                tracing::debug!("events panel torn down before the fetch settled");
            }
        });

        Self { rx, task }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadState<EventFeed> {
        self.rx.borrow().clone()
    }

    /// Wait for the terminal state
    pub async fn settled(&mut self) -> LoadState<EventFeed> {
        match self.rx.wait_for(|state| state.is_settled()).await {
            Ok(state) => state.clone(),
            Err(_) => LoadState::Error(FetchFailure::new("event loader stopped before settling")),
        }
    }
}

impl Drop for EventsPanel {
    fn drop(&mut self) {
        self.task.abort();
    }
}
