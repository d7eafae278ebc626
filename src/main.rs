mod config;
mod dtos;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::handlers::feed_handlers::get_feed;
use crate::handlers::place_handlers::{follow_place, followed_places, unfollow_place};
use crate::handlers::post_handlers::{add_comment, add_reaction, create_post, set_rsvp};
use crate::repositories::post_store::PostStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let cfg = match config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let store = if cfg.seed_demo_data {
        PostStore::seeded()
    } else {
        PostStore::new()
    };
    let store = web::Data::new(store);

    let allowed_origins = cfg.allowed_origins.clone();

    info!("Starting server on {}", cfg.bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec![
                "content-type",
                "accept",
                "x-user-id",
                "x-requested-with",
            ])
            .supports_credentials()
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(store.clone())
            .service(
                web::scope("/api")
                    .service(get_feed)        // GET  /api/feed?mode=...
                    .service(create_post)     // POST /api/posts
                    .service(add_reaction)    // POST /api/posts/{id}/reactions
                    .service(set_rsvp)        // PUT  /api/posts/{id}/rsvp
                    .service(add_comment)     // POST /api/posts/{id}/comments
                    .service(followed_places) // GET  /api/places/followed
                    .service(follow_place)    // POST /api/places/follow
                    .service(unfollow_place), // POST /api/places/unfollow
            )
    })
    .bind(&cfg.bind_address)?
    .run()
    .await
}
