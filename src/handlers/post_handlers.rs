// src/handlers/post_handlers.rs - check-in lifecycle: create, react, RSVP, comment

use actix_web::{post, put, web, HttpResponse};
use chrono::Utc;
use log::warn;
use regex::Regex;
use uuid::Uuid;

use crate::dtos::post_dtos::{CreateCommentDTO, CreatePostDTO, ReactionOut, RsvpDTO};
use crate::handlers::ApiResponse;
use crate::middleware::viewer::Viewer;
use crate::models::post::{Location, Post};
use crate::models::user::User;
use crate::repositories::post_store::{PostStore, StoreError};

fn is_valid_image_url(url: &str) -> bool {
    let re = Regex::new(r"(?i)^https?://[^\s]+$").unwrap();
    re.is_match(url)
}

fn store_error_response(e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::error("Post not found".to_string()))
        }
        StoreError::Validation(msg) => HttpResponse::BadRequest().json(ApiResponse::error(msg)),
    }
}

#[post("/posts")]
pub async fn create_post(
    store: web::Data<PostStore>,
    viewer: Viewer,
    body: web::Json<CreatePostDTO>,
) -> HttpResponse {
    let dto = body.into_inner();

    if dto.author_name.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::error("Author name cannot be empty".to_string()));
    }

    if let Some(ref url) = dto.image_url {
        if !is_valid_image_url(url) {
            return HttpResponse::BadRequest()
                .json(ApiResponse::error("Image URL must be an http(s) URL".to_string()));
        }
    }

    let mut author = User::new(dto.author_name.trim());
    author.id = viewer.user_id;

    let mut post = Post::new(
        author,
        Location {
            name: dto.location_name.trim().to_string(),
            address: dto.location_address.trim().to_string(),
        },
        dto.visited_at.unwrap_or_else(|| Utc::now().naive_utc()),
        dto.description.trim().to_string(),
    );
    post.image_url = dto.image_url;
    post.distance_km = dto.distance_km;

    match store.create_post(post) {
        Ok(created) => {
            HttpResponse::Ok().json(ApiResponse::success("Post created successfully", created))
        }
        Err(e) => {
            warn!("Failed to create post: {}", e);
            store_error_response(e)
        }
    }
}

#[post("/posts/{id}/reactions")]
pub async fn add_reaction(
    store: web::Data<PostStore>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let post_id = path.into_inner();

    match store.add_reaction(post_id) {
        Ok(count) => HttpResponse::Ok().json(ApiResponse::success(
            "Reaction added",
            ReactionOut {
                post_id,
                reaction_count: count,
            },
        )),
        Err(e) => store_error_response(e),
    }
}

#[put("/posts/{id}/rsvp")]
pub async fn set_rsvp(
    store: web::Data<PostStore>,
    viewer: Viewer,
    path: web::Path<Uuid>,
    body: web::Json<RsvpDTO>,
) -> HttpResponse {
    match store.set_rsvp(path.into_inner(), viewer.user_id, body.status) {
        Ok(post) => HttpResponse::Ok().json(ApiResponse::success("RSVP saved", post)),
        Err(e) => store_error_response(e),
    }
}

#[post("/posts/{id}/comments")]
pub async fn add_comment(
    store: web::Data<PostStore>,
    viewer: Viewer,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentDTO>,
) -> HttpResponse {
    match store.add_comment(path.into_inner(), viewer.user_id, &body.text) {
        Ok(comment) => HttpResponse::Ok().json(ApiResponse::success("Comment added", comment)),
        Err(e) => store_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_shape() {
        assert!(is_valid_image_url("https://images.vibemap.app/a.jpg"));
        assert!(is_valid_image_url("HTTP://example.com/b.png"));
        assert!(!is_valid_image_url("ftp://example.com/c.png"));
        assert!(!is_valid_image_url("not a url"));
    }
}
