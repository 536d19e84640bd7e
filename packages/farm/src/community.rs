//! The community feed. Posts written here stay in memory and vanish on reload.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub time_ago: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feed {
    posts: Vec<Post>,
    liked: HashSet<u32>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            liked: HashSet::new(),
        }
    }

    pub fn sample() -> Self {
        let post = |id, author: &str, avatar: &str, content: &str, likes, comments, time_ago: &str| Post {
            id,
            author: author.to_string(),
            avatar: avatar.to_string(),
            content: content.to_string(),
            likes,
            comments,
            time_ago: time_ago.to_string(),
        };
        Self::new(vec![
            post(
                1,
                "John Smith",
                "👨‍🌾",
                "Just implemented crop rotation and seeing great results! Anyone else tried this?",
                24,
                8,
                "2 hours ago",
            ),
            post(
                2,
                "Sarah Johnson",
                "👩‍🌾",
                "Looking for advice on organic pest control methods. What works best for you?",
                15,
                12,
                "4 hours ago",
            ),
            post(
                3,
                "Mike Brown",
                "👨‍🌾",
                "Check out my latest harvest! Using the new techniques from last month's workshop.",
                32,
                6,
                "6 hours ago",
            ),
        ])
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Put a new post at the top of the feed. Blank content is ignored and returns `None`.
    pub fn publish(&mut self, author: &str, content: &str) -> Option<&Post> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let id = self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.posts.insert(
            0,
            Post {
                id,
                author: author.to_string(),
                avatar: "👨‍🌾".to_string(),
                content: content.to_string(),
                likes: 0,
                comments: 0,
                time_ago: "Just now".to_string(),
            },
        );
        self.posts.first()
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// Like or unlike a post.
    pub fn toggle_like(&mut self, id: u32) {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return;
        };
        if self.liked.remove(&id) {
            post.likes = post.likes.saturating_sub(1);
        } else {
            self.liked.insert(id);
            post.likes += 1;
        }
    }
}

/// `(value, label)` pairs for the sidebar.
pub const COMMUNITY_STATS: [(&str, &str); 3] = [
    ("1,234", "Members"),
    ("456", "Posts Today"),
    ("89", "Active Now"),
];

pub const TRENDING_TOPICS: [&str; 4] = [
    "#OrganicFarming",
    "#CropRotation",
    "#SustainableAg",
    "#FarmTech",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_prepends() {
        let mut feed = Feed::sample();
        let post = feed.publish("Asha", "  Rain finally arrived  ").unwrap();
        assert_eq!(post.id, 4);
        assert_eq!(post.content, "Rain finally arrived");
        assert_eq!(feed.posts()[0].author, "Asha");
        assert_eq!(feed.posts().len(), 4);
    }

    #[test]
    fn test_blank_post_ignored() {
        let mut feed = Feed::sample();
        assert!(feed.publish("Asha", "   ").is_none());
        assert_eq!(feed.posts().len(), 3);
    }

    #[test]
    fn test_like_toggles() {
        let mut feed = Feed::sample();
        feed.toggle_like(1);
        assert!(feed.is_liked(1));
        assert_eq!(feed.posts()[0].likes, 25);

        feed.toggle_like(1);
        assert!(!feed.is_liked(1));
        assert_eq!(feed.posts()[0].likes, 24);

        // Unknown posts are ignored
        feed.toggle_like(42);
        assert!(!feed.is_liked(42));
    }
}
