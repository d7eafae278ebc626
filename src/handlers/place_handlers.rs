use actix_web::{get, post, web, HttpResponse};

use crate::dtos::place_dtos::{FollowPlaceDTO, FollowedPlacesOut};
use crate::handlers::ApiResponse;
use crate::repositories::post_store::{PostStore, StoreError};

#[get("/places/followed")]
pub async fn followed_places(store: web::Data<PostStore>) -> HttpResponse {
    let mut places: Vec<String> = store.followed_places().into_iter().collect();
    places.sort();

    HttpResponse::Ok().json(ApiResponse::success(
        "Followed places retrieved",
        FollowedPlacesOut { places },
    ))
}

#[post("/places/follow")]
pub async fn follow_place(
    store: web::Data<PostStore>,
    body: web::Json<FollowPlaceDTO>,
) -> HttpResponse {
    match store.follow_place(&body.name) {
        Ok(()) => {
            let mut places: Vec<String> = store.followed_places().into_iter().collect();
            places.sort();
            HttpResponse::Ok()
                .json(ApiResponse::success("Place followed", FollowedPlacesOut { places }))
        }
        Err(StoreError::Validation(msg)) => {
            HttpResponse::BadRequest().json(ApiResponse::error(msg))
        }
        Err(e) => HttpResponse::InternalServerError().json(ApiResponse::error(e.to_string())),
    }
}

#[post("/places/unfollow")]
pub async fn unfollow_place(
    store: web::Data<PostStore>,
    body: web::Json<FollowPlaceDTO>,
) -> HttpResponse {
    store.unfollow_place(&body.name);

    let mut places: Vec<String> = store.followed_places().into_iter().collect();
    places.sort();

    HttpResponse::Ok().json(ApiResponse::success(
        "Place unfollowed",
        FollowedPlacesOut { places },
    ))
}
