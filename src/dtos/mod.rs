pub mod feed_dtos;
pub mod place_dtos;
pub mod post_dtos;
