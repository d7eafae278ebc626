use actix_web::{get, web, HttpResponse};
use log::debug;

use crate::dtos::feed_dtos::FeedQuery;
use crate::handlers::ApiResponse;
use crate::repositories::post_store::PostStore;
use crate::services::feed_ranking::rank_posts;

#[get("/feed")]
pub async fn get_feed(
    store: web::Data<PostStore>,
    query: web::Query<FeedQuery>,
) -> HttpResponse {
    let mode = query.mode();
    let posts = store.list();
    let followed = store.followed_places();

    let feed = rank_posts(&posts, mode, &followed);
    debug!("Feed {:?}: {} of {} posts selected", mode, feed.len(), posts.len());

    HttpResponse::Ok().json(ApiResponse::success("Feed retrieved successfully", feed))
}
