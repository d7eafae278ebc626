pub mod feed_ranking;
