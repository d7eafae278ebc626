use serde::Deserialize;

use crate::services::feed_ranking::FeedMode;

/// Query string of `GET /api/feed`. The client always sends a mode; we
/// default to the inner-circle tab like the app does on first load.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub mode: Option<FeedMode>,
}

impl FeedQuery {
    pub fn mode(&self) -> FeedMode {
        self.mode.unwrap_or(FeedMode::InnerCircle)
    }
}
