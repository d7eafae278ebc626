pub mod feed_handlers;
pub mod place_handlers;
pub mod post_handlers;

/// Response envelope every endpoint uses, same shape the client already
/// expects: { status, message, data }.
#[derive(serde::Serialize)]
pub struct ApiResponse<T: serde::Serialize> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: serde::Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            data: None,
        }
    }
}
