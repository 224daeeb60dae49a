use serde::{Deserialize, Serialize};

/// Time spent on each requested widget, in request order.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WatchResponse {
    pub timespent: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
