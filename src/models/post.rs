// src/models/post.rs - check-in records and their embedded pieces

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

/// RSVP choices offered by the client on a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    Interested,
    NotGoing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: NaiveDateTime,
}

/// A single check-in/plan record. Lives only for the session: seeded at
/// startup or appended on create, mutated in place on reaction/RSVP/comment,
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: User,
    pub location: Location,
    pub visited_at: NaiveDateTime,
    pub description: String,
    pub reaction_count: u32,
    /// One RSVP entry per user; setting again replaces the old status.
    pub rsvps: HashMap<Uuid, RsvpStatus>,
    pub comments: Vec<Comment>,
    pub image_url: Option<String>,
    /// Kilometres from the viewer. Missing means the client never measured;
    /// the places feed treats it as 0 (always nearby).
    pub distance_km: Option<f64>,
}

impl Post {
    pub fn new(author: User, location: Location, visited_at: NaiveDateTime, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            location,
            visited_at,
            description,
            reaction_count: 0,
            rsvps: HashMap::new(),
            comments: Vec::new(),
            image_url: None,
            distance_km: None,
        }
    }

    /// Ingestion-boundary checks. A post that fails these never enters the
    /// store; the feed policy itself assumes always-valid records.
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Description cannot be empty".to_string());
        }

        if self.description.len() > 500 {
            return Err("Description must be less than 500 characters".to_string());
        }

        if self.location.name.trim().is_empty() {
            return Err("Location name cannot be empty".to_string());
        }

        if self.location.name.len() > 80 {
            return Err("Location name must be less than 80 characters".to_string());
        }

        if let Some(d) = self.distance_km {
            if !d.is_finite() || d < 0.0 {
                return Err("Distance must be a non-negative number of kilometres".to_string());
            }
        }

        Ok(())
    }

    pub fn rsvp_count(&self) -> usize {
        self.rsvps.len()
    }
}
