// src/repositories/post_store.rs - session-lifetime post collection

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::{Duration, Utc};
use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::models::post::{Comment, Location, Post, RsvpStatus};
use crate::models::user::User;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
}

/// Owns the single in-memory post collection plus the viewer's
/// followed-place set. Nothing is persisted: the collection is seeded at
/// startup and lives for the process. There is no delete path.
///
/// Handlers always work on a snapshot from `list()` and re-rank it per
/// request; the store never hands out references into the lock.
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    followed_places: RwLock<HashSet<String>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            followed_places: RwLock::new(HashSet::new()),
        }
    }

    /// Store pre-populated with the demo check-ins the client normally
    /// generates on first load.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut posts = store.posts.write().expect("posts lock poisoned");
            *posts = seed_posts();
            info!("Seeded store with {} demo posts", posts.len());
        }
        store
    }

    /// Snapshot of the whole collection, newest data included.
    pub fn list(&self) -> Vec<Post> {
        self.posts.read().expect("posts lock poisoned").clone()
    }

    pub fn get(&self, post_id: Uuid) -> Result<Post, StoreError> {
        self.posts
            .read()
            .expect("posts lock poisoned")
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new check-in. The post is validated here, at the entry
    /// boundary; once stored it is assumed well-formed everywhere else.
    pub fn create_post(&self, post: Post) -> Result<Post, StoreError> {
        post.validate().map_err(StoreError::Validation)?;

        let mut posts = self.posts.write().expect("posts lock poisoned");
        posts.push(post.clone());
        info!("Post {} created at {}", post.id, post.location.name);
        Ok(post)
    }

    /// Bump the reaction counter. Returns the new count.
    pub fn add_reaction(&self, post_id: Uuid) -> Result<u32, StoreError> {
        let mut posts = self.posts.write().expect("posts lock poisoned");
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::NotFound)?;
        post.reaction_count += 1;
        Ok(post.reaction_count)
    }

    /// Set or replace the viewer's RSVP on a post. One entry per user.
    pub fn set_rsvp(&self, post_id: Uuid, user_id: Uuid, status: RsvpStatus) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().expect("posts lock poisoned");
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::NotFound)?;
        post.rsvps.insert(user_id, status);
        Ok(post.clone())
    }

    pub fn add_comment(&self, post_id: Uuid, user_id: Uuid, text: &str) -> Result<Comment, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::Validation("Comment cannot be empty".to_string()));
        }
        if text.len() > 300 {
            return Err(StoreError::Validation(
                "Comment must be less than 300 characters".to_string(),
            ));
        }

        let mut posts = self.posts.write().expect("posts lock poisoned");
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::NotFound)?;

        let comment = Comment {
            id: Uuid::new_v4(),
            user_id,
            text: text.trim().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        post.comments.push(comment.clone());
        Ok(comment)
    }

    pub fn follow_place(&self, name: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("Place name cannot be empty".to_string()));
        }
        self.followed_places
            .write()
            .expect("followed places lock poisoned")
            .insert(name.trim().to_string());
        Ok(())
    }

    pub fn unfollow_place(&self, name: &str) {
        self.followed_places
            .write()
            .expect("followed places lock poisoned")
            .remove(name.trim());
    }

    pub fn followed_places(&self) -> HashSet<String> {
        self.followed_places
            .read()
            .expect("followed places lock poisoned")
            .clone()
    }
}

/// Demo check-ins covering every author flavour the feed modes care about.
fn seed_posts() -> Vec<Post> {
    let now = Utc::now().naive_utc();

    let mut open_tap = Post::new(
        User::new("Open Tap").place_account(),
        Location {
            name: "Open Tap".to_string(),
            address: "Sector 29, Gurugram".to_string(),
        },
        now - Duration::hours(5),
        "Trivia Tuesday is back. First round on the house.".to_string(),
    );
    open_tap.reaction_count = 4;
    open_tap.distance_km = Some(2.4);

    let mut priya = Post::new(
        User::new("Priya").connected(),
        Location {
            name: "Cyber Hub".to_string(),
            address: "DLF Cyber City, Gurugram".to_string(),
        },
        now - Duration::hours(2),
        "Post-work coffee, who's around?".to_string(),
    );
    priya.reaction_count = 2;
    priya.distance_km = Some(4.1);

    let mut kabir = Post::new(
        User::new("Kabir").influencer(),
        Location {
            name: "32nd Avenue".to_string(),
            address: "Sector 15, Gurugram".to_string(),
        },
        now - Duration::hours(8),
        "New rooftop just opened, the sunset view is unreal.".to_string(),
    );
    kabir.reaction_count = 18;
    kabir.image_url = Some("https://images.vibemap.app/seed/rooftop.jpg".to_string());
    kabir.distance_km = Some(6.8);

    let mut ananya = Post::new(
        User::new("Ananya").connected().founder(),
        Location {
            name: "Galleria Market".to_string(),
            address: "DLF Phase 4, Gurugram".to_string(),
        },
        now - Duration::hours(26),
        "Saturday brunch plan, say the word and I'll book.".to_string(),
    );
    ananya.reaction_count = 7;
    ananya.distance_km = Some(3.3);

    let mut dev = Post::new(
        User::new("Dev"),
        Location {
            name: "Champa Gali".to_string(),
            address: "Saidulajab, New Delhi".to_string(),
        },
        now - Duration::hours(12),
        "Found the tiniest chai spot down the lane.".to_string(),
    );
    dev.reaction_count = 1;
    // seeded without a distance on purpose, the client sometimes has no fix

    vec![open_tap, priya, kabir, ananya, dev]
}
