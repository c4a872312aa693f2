// src/store.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::TopicsApi;
use crate::types::{Source, Topic};

/// Shown when a failure renders to an empty message.
const FALLBACK_ERROR: &str = "failed to fetch hot topics";

/// What the UI renders from: one current list, a loading flag, and the last
/// failure message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicsState {
    pub topics: Vec<Topic>,
    pub loading: bool,
    pub error: Option<String>,
}

/// View-facing state container for the hot-topics list.
///
/// Owned by the view layer and handed an injected [`TopicsApi`], so tests can
/// swap the transport. A successful fetch replaces the list in full; a failed
/// one leaves it untouched and surfaces a message in `error`. Overlapping
/// calls are resolved by request generation: only the most recently initiated
/// call may write back, stale resolutions are discarded.
pub struct TopicStore {
    api: Arc<dyn TopicsApi>,
    state: Mutex<TopicsState>,
    generation: AtomicU64,
}

impl TopicStore {
    pub fn new(api: Arc<dyn TopicsApi>) -> Self {
        Self {
            api,
            state: Mutex::new(TopicsState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Clone-out snapshot of the current state.
    pub fn snapshot(&self) -> TopicsState {
        self.state.lock().expect("store mutex poisoned").clone()
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.snapshot().topics
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot().loading
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot().error
    }

    /// Refresh the list: all origins, or just `source`.
    ///
    /// Never returns the failure to the caller; the `error` field is the only
    /// propagation channel.
    pub async fn fetch_topics(&self, source: Option<Source>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut st = self.state.lock().expect("store mutex poisoned");
            st.loading = true;
            st.error = None;
        }

        let result = match source {
            Some(s) => self.api.fetch_by_source(s, None).await,
            None => self.api.fetch_all(None).await,
        };

        let mut st = self.state.lock().expect("store mutex poisoned");
        if generation != self.generation.load(Ordering::SeqCst) {
            // A newer call started while this one was in flight; its
            // resolution owns the state now.
            tracing::debug!(?source, "discarding stale hot-topics resolution");
            return;
        }

        match result {
            Ok(topics) => {
                st.topics = topics;
                st.error = None;
            }
            Err(e) => {
                tracing::warn!(error = ?e, ?source, "hot-topics fetch failed");
                st.error = Some(derive_error_message(&e));
            }
        }
        st.loading = false;
    }
}

fn derive_error_message(e: &anyhow::Error) -> String {
    let msg = e.to_string();
    if msg.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        msg
    }
}
