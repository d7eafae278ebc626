use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member as embedded in every post. The flags drive the feed modes:
/// `is_connected` marks a mutual follow ("inner circle"), `is_place_account`
/// marks venue-owned accounts that get top billing in the places feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    pub is_connected: bool,
    pub is_influencer: bool,
    pub is_founder: bool,
    pub is_place_account: bool,
}

impl User {
    pub fn new(display_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            is_connected: false,
            is_influencer: false,
            is_founder: false,
            is_place_account: false,
        }
    }

    pub fn connected(mut self) -> Self {
        self.is_connected = true;
        self
    }

    pub fn influencer(mut self) -> Self {
        self.is_influencer = true;
        self
    }

    pub fn founder(mut self) -> Self {
        self.is_founder = true;
        self
    }

    pub fn place_account(mut self) -> Self {
        self.is_place_account = true;
        self
    }
}
