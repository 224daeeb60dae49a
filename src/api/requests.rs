use serde::{Deserialize, Serialize};

/// Body of `GET /watch`, shared with the agent's HTTP reward source.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WatchPayload {
    pub widgets: Vec<usize>,
}
