//! Feed ranking policy
//!
//! Turns the session's post collection into the ordered view behind each of
//! the three feed tabs. Pure selection and ordering over a snapshot: no
//! clock reads, no store access, no mutation of the input. Handlers call
//! `rank_posts` on every request and re-derive the view from scratch.
//!
//! Modes:
//! - inner-circle: mutual follows only, newest check-in first
//! - trending: influencers or high-engagement posts, by interaction score
//! - places: followed places, else frequent places, else nearby, with
//!   place-account posts pinned to the top of whichever tier wins

use std::collections::HashSet;

use serde::Deserialize;

use crate::models::post::Post;

/// Engagement needed for a non-influencer post to surface in trending.
/// The comparison is strict: a score of exactly 10 does not qualify.
const TRENDING_SCORE_THRESHOLD: u32 = 10;

/// Radius of the last-resort "nearby" tier of the places feed.
const NEARBY_RADIUS_KM: f64 = 15.0;

/// Fallback venues for the places feed when the viewer follows none of the
/// places currently in the feed. Static list, same as the client ships.
const FREQUENT_PLACES: &[&str] = &[
    "Cyber Hub",
    "Sector 29",
    "Galleria Market",
    "32nd Avenue",
    "Kingdom of Dreams",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedMode {
    InnerCircle,
    Trending,
    Places,
}

/// Engagement score used by the trending feed:
/// reactions + comments + 2x RSVPs. RSVPs count double since committing to
/// show up is a stronger signal than a tap.
pub fn interaction_score(post: &Post) -> u32 {
    post.reaction_count + post.comments.len() as u32 + 2 * post.rsvps.len() as u32
}

/// Tier weight inside the places feed. Venue accounts outrank influencers,
/// influencers outrank the inner circle, everyone else sorts by recency.
fn place_priority(post: &Post) -> u32 {
    if post.author.is_place_account {
        100
    } else if post.author.is_influencer {
        50
    } else if post.author.is_connected {
        25
    } else {
        0
    }
}

/// Select and order the posts for one feed tab. Returns a fresh vector;
/// the source slice is left untouched.
pub fn rank_posts(posts: &[Post], mode: FeedMode, followed_places: &HashSet<String>) -> Vec<Post> {
    match mode {
        FeedMode::InnerCircle => {
            let mut feed: Vec<Post> = posts
                .iter()
                .filter(|p| p.author.is_connected)
                .cloned()
                .collect();
            feed.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));
            feed
        }
        FeedMode::Trending => {
            let mut scored: Vec<(Post, u32)> = posts
                .iter()
                .filter(|p| p.author.is_influencer || interaction_score(p) > TRENDING_SCORE_THRESHOLD)
                .map(|p| (p.clone(), interaction_score(p)))
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            scored.into_iter().map(|(post, _)| post).collect()
        }
        FeedMode::Places => {
            let mut feed = select_places_tier(posts, followed_places);
            feed.sort_by(|a, b| {
                place_priority(b)
                    .cmp(&place_priority(a))
                    .then(b.visited_at.cmp(&a.visited_at))
            });
            feed
        }
    }
}

/// Three-tier fallback for the places feed: followed places, then the
/// static frequent list, then anything within the nearby radius. The first
/// non-empty tier wins outright; tiers are never mixed. A post with no
/// measured distance counts as distance 0 and always makes the last tier.
fn select_places_tier(posts: &[Post], followed_places: &HashSet<String>) -> Vec<Post> {
    let followed: Vec<Post> = posts
        .iter()
        .filter(|p| followed_places.contains(&p.location.name))
        .cloned()
        .collect();
    if !followed.is_empty() {
        return followed;
    }

    let frequent: Vec<Post> = posts
        .iter()
        .filter(|p| FREQUENT_PLACES.contains(&p.location.name.as_str()))
        .cloned()
        .collect();
    if !frequent.is_empty() {
        return frequent;
    }

    posts
        .iter()
        .filter(|p| p.distance_km.unwrap_or(0.0) <= NEARBY_RADIUS_KM)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post::{Location, RsvpStatus};
    use crate::models::user::User;
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 14)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn test_post(author: User, place: &str, visited_at: NaiveDateTime) -> Post {
        let mut post = Post::new(
            author,
            Location {
                name: place.to_string(),
                address: format!("{}, Gurugram", place),
            },
            visited_at,
            format!("Checked in at {}", place),
        );
        post.distance_km = Some(3.0);
        post
    }

    fn with_engagement(mut post: Post, reactions: u32, comments: usize, rsvps: usize) -> Post {
        post.reaction_count = reactions;
        for i in 0..comments {
            post.comments.push(crate::models::post::Comment {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                text: format!("comment {}", i),
                created_at: post.visited_at,
            });
        }
        for _ in 0..rsvps {
            post.rsvps.insert(Uuid::new_v4(), RsvpStatus::Going);
        }
        post
    }

    fn no_places() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn inner_circle_keeps_only_connected_authors() {
        let posts = vec![
            test_post(User::new("Aman").connected(), "Open Tap", at_hour(10)),
            test_post(User::new("Stranger"), "Open Tap", at_hour(12)),
        ];

        let feed = rank_posts(&posts, FeedMode::InnerCircle, &no_places());

        // the stranger's later check-in never qualifies
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].author.display_name, "Aman");
    }

    #[test]
    fn inner_circle_sorts_most_recent_first() {
        let posts = vec![
            test_post(User::new("A").connected(), "Open Tap", at_hour(9)),
            test_post(User::new("B").connected(), "Cyber Hub", at_hour(17)),
            test_post(User::new("C").connected(), "Sector 29", at_hour(13)),
        ];

        let feed = rank_posts(&posts, FeedMode::InnerCircle, &no_places());

        let order: Vec<&str> = feed.iter().map(|p| p.author.display_name.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn interaction_score_weights_rsvps_double() {
        let post = with_engagement(
            test_post(User::new("A"), "Open Tap", at_hour(10)),
            3,
            1,
            4,
        );
        assert_eq!(interaction_score(&post), 3 + 1 + 8);
    }

    #[test]
    fn trending_requires_score_above_ten() {
        let at_threshold = with_engagement(
            test_post(User::new("Borderline"), "Open Tap", at_hour(10)),
            10,
            0,
            0,
        );
        let above = with_engagement(
            test_post(User::new("Busy"), "Cyber Hub", at_hour(10)),
            11,
            0,
            0,
        );

        let feed = rank_posts(&[at_threshold, above], FeedMode::Trending, &no_places());

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].author.display_name, "Busy");
    }

    #[test]
    fn trending_admits_influencer_with_zero_engagement() {
        let posts = vec![
            test_post(User::new("Quiet influencer").influencer(), "Open Tap", at_hour(10)),
            test_post(User::new("Nobody"), "Open Tap", at_hour(11)),
        ];

        let feed = rank_posts(&posts, FeedMode::Trending, &no_places());

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].author.display_name, "Quiet influencer");
    }

    #[test]
    fn trending_sorts_by_score_even_for_influencers() {
        // influencer status admits the post but buys no rank
        let influencer = with_engagement(
            test_post(User::new("Influencer").influencer(), "Open Tap", at_hour(10)),
            1,
            0,
            0,
        );
        let viral = with_engagement(
            test_post(User::new("Viral"), "Cyber Hub", at_hour(9)),
            20,
            5,
            3,
        );

        let feed = rank_posts(&[influencer, viral], FeedMode::Trending, &no_places());

        let order: Vec<&str> = feed.iter().map(|p| p.author.display_name.as_str()).collect();
        assert_eq!(order, vec!["Viral", "Influencer"]);
    }

    #[test]
    fn places_followed_tier_wins_regardless_of_recency() {
        let mut followed = HashSet::new();
        followed.insert("Open Tap".to_string());

        let posts = vec![
            test_post(User::new("A"), "Open Tap", at_hour(9)),
            test_post(User::new("B"), "Cyber Hub", at_hour(20)),
        ];

        let feed = rank_posts(&posts, FeedMode::Places, &followed);

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].location.name, "Open Tap");
    }

    #[test]
    fn places_falls_back_to_frequent_places() {
        let posts = vec![
            test_post(User::new("A"), "Cyber Hub", at_hour(10)),
            test_post(User::new("B"), "Some Rooftop", at_hour(12)),
        ];

        let feed = rank_posts(&posts, FeedMode::Places, &no_places());

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].location.name, "Cyber Hub");
    }

    #[test]
    fn places_falls_back_to_nearby_radius() {
        let mut near = test_post(User::new("A"), "Hauz Khas Social", at_hour(10));
        near.distance_km = Some(15.0);
        let mut far = test_post(User::new("B"), "Connaught Place", at_hour(12));
        far.distance_km = Some(15.1);
        let mut unmeasured = test_post(User::new("C"), "Champa Gali", at_hour(11));
        unmeasured.distance_km = None;

        let feed = rank_posts(&[near, far, unmeasured], FeedMode::Places, &no_places());

        let places: Vec<&str> = feed.iter().map(|p| p.location.name.as_str()).collect();
        // missing distance counts as 0 km, so it always qualifies
        assert!(places.contains(&"Hauz Khas Social"));
        assert!(places.contains(&"Champa Gali"));
        assert!(!places.contains(&"Connaught Place"));
    }

    #[test]
    fn places_ranks_place_accounts_above_everyone() {
        let mut followed = HashSet::new();
        followed.insert("Open Tap".to_string());

        let posts = vec![
            test_post(User::new("Friend").connected(), "Open Tap", at_hour(23)),
            test_post(User::new("Open Tap Official").place_account(), "Open Tap", at_hour(8)),
            test_post(User::new("Influencer").influencer(), "Open Tap", at_hour(22)),
            test_post(User::new("Passerby"), "Open Tap", at_hour(21)),
        ];

        let feed = rank_posts(&posts, FeedMode::Places, &followed);

        let order: Vec<&str> = feed.iter().map(|p| p.author.display_name.as_str()).collect();
        // priority beats recency: the venue's morning post still leads
        assert_eq!(
            order,
            vec!["Open Tap Official", "Influencer", "Friend", "Passerby"]
        );
    }

    #[test]
    fn places_breaks_priority_ties_by_recency() {
        let posts = vec![
            test_post(User::new("Early").connected(), "Cyber Hub", at_hour(9)),
            test_post(User::new("Late").connected(), "Cyber Hub", at_hour(18)),
        ];

        let feed = rank_posts(&posts, FeedMode::Places, &no_places());

        let order: Vec<&str> = feed.iter().map(|p| p.author.display_name.as_str()).collect();
        assert_eq!(order, vec!["Late", "Early"]);
    }

    #[test]
    fn rank_posts_leaves_source_untouched_and_is_idempotent() {
        let posts = vec![
            test_post(User::new("A").connected(), "Open Tap", at_hour(9)),
            test_post(User::new("B").connected(), "Cyber Hub", at_hour(17)),
        ];
        let source_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

        let first = rank_posts(&posts, FeedMode::InnerCircle, &no_places());
        let second = rank_posts(&posts, FeedMode::InnerCircle, &no_places());

        let after_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        assert_eq!(source_ids, after_ids);

        let first_ids: Vec<Uuid> = first.iter().map(|p| p.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn feed_mode_parses_the_client_tab_names() {
        let mode: FeedMode = serde_json::from_str("\"inner-circle\"").unwrap();
        assert_eq!(mode, FeedMode::InnerCircle);
        let mode: FeedMode = serde_json::from_str("\"trending\"").unwrap();
        assert_eq!(mode, FeedMode::Trending);
        let mode: FeedMode = serde_json::from_str("\"places\"").unwrap();
        assert_eq!(mode, FeedMode::Places);
    }

    #[test]
    fn empty_collection_yields_empty_feed_in_every_mode() {
        let posts: Vec<Post> = vec![];
        for mode in [FeedMode::InnerCircle, FeedMode::Trending, FeedMode::Places] {
            assert!(rank_posts(&posts, mode, &no_places()).is_empty());
        }
    }
}
