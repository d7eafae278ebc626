use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::post::RsvpStatus;

#[derive(Debug, Deserialize)]
pub struct CreatePostDTO {
    pub author_name: String,
    pub location_name: String,
    pub location_address: String,
    pub description: String,
    /// defaults to "now" when the client sends a bare check-in
    pub visited_at: Option<NaiveDateTime>,
    pub image_url: Option<String>,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RsvpDTO {
    pub status: RsvpStatus,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentDTO {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReactionOut {
    pub post_id: Uuid,
    pub reaction_count: u32,
}
