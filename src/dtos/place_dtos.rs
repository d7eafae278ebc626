use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FollowPlaceDTO {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct FollowedPlacesOut {
    pub places: Vec<String>,
}
