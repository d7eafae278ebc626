// src/middleware/viewer.rs - who is looking at the feed

use actix_web::error::ErrorBadRequest;
use actix_web::{dev::Payload, Error, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use uuid::Uuid;

/// The requesting user, taken from the `X-User-Id` header the client sends
/// with every call. The prototype has no accounts or auth; this is plain
/// identification so RSVPs and comments land under the right user id.
pub struct Viewer {
    pub user_id: Uuid,
}

impl FromRequest for Viewer {
    type Error = Error;
    type Future = Ready<Result<Viewer, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = match req.headers().get("X-User-Id") {
            Some(header) => match header.to_str() {
                Ok(h) => h,
                Err(_) => return ready(Err(ErrorBadRequest("Invalid X-User-Id header"))),
            },
            None => return ready(Err(ErrorBadRequest("Missing X-User-Id header"))),
        };

        match Uuid::parse_str(header.trim()) {
            Ok(user_id) => ready(Ok(Viewer { user_id })),
            Err(_) => ready(Err(ErrorBadRequest("X-User-Id must be a UUID"))),
        }
    }
}
