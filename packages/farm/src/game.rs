//! # Gamification: ranks, achievements and the leaderboard
//!
//! A farmer's rank comes from their session points. Thresholds:
//!
//! | Rank | Points |
//! |------|--------|
//! | Seedling | 0 |
//! | Growing Farmer | 100 |
//! | Master Farmer | 200 |

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Seedling,
    GrowingFarmer,
    MasterFarmer,
}

impl Rank {
    const LADDER: [Rank; 3] = [Rank::Seedling, Rank::GrowingFarmer, Rank::MasterFarmer];

    pub fn threshold(&self) -> u32 {
        match self {
            Rank::Seedling => 0,
            Rank::GrowingFarmer => 100,
            Rank::MasterFarmer => 200,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Seedling => "Seedling",
            Rank::GrowingFarmer => "Growing Farmer",
            Rank::MasterFarmer => "Master Farmer",
        }
    }

    pub fn for_points(points: u32) -> Self {
        Self::LADDER
            .into_iter()
            .rev()
            .find(|r| points >= r.threshold())
            .unwrap_or(Rank::Seedling)
    }

    pub fn next(&self) -> Option<Rank> {
        Self::LADDER.into_iter().find(|r| r > self)
    }
}

/// Where a farmer stands relative to the next rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankProgress {
    pub rank: Rank,
    pub next: Option<Rank>,
    /// Points still needed for `next`; 0 at the top rank.
    pub remaining: u32,
    /// Progress bar fill, `points / next threshold`, capped at 100.
    pub percent: u32,
}

impl RankProgress {
    pub fn for_points(points: u32) -> Self {
        let rank = Rank::for_points(points);
        let next = rank.next();
        let (remaining, percent) = match next {
            Some(n) => (
                n.threshold() - points,
                ((points as f64 / n.threshold() as f64) * 100.0).round().min(100.0) as u32,
            ),
            None => (0, 100),
        };
        Self {
            rank,
            next,
            remaining,
            percent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// 0..=100
    pub progress: u32,
    pub icon: String,
}

pub fn sample_achievements() -> Vec<Achievement> {
    let a = |id, title: &str, description: &str, progress, icon: &str| Achievement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        progress,
        icon: icon.to_string(),
    };
    vec![
        a(1, "Early Bird", "Complete 5 daily tasks before 9 AM", 80, "🌅"),
        a(2, "Crop Master", "Successfully grow 10 different types of crops", 60, "🌾"),
        a(3, "Market Leader", "Earn 1000 points from crop sales", 45, "💰"),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub points: u32,
    pub avatar: String,
    pub is_user: bool,
}

impl Player {
    fn new(id: u32, name: &str, points: u32, avatar: &str, is_user: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            points,
            avatar: avatar.to_string(),
            is_user,
        }
    }
}

/// Players ordered by points, highest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    players: Vec<Player>,
}

impl Leaderboard {
    /// Sorts by points descending; ties keep their given order.
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by(|a, b| b.points.cmp(&a.points));
        Self { players }
    }

    pub fn weekly_sample() -> Self {
        Self::new(vec![
            Player::new(1, "John Smith", 2450, "👨‍🌾", false),
            Player::new(2, "Sarah Johnson", 2380, "👩‍🌾", false),
            Player::new(3, "Mike Brown", 2310, "👨‍🌾", false),
            Player::new(4, "Emma Davis", 2240, "👩‍🌾", false),
            Player::new(5, "You", 2180, "👨‍🌾", true),
        ])
    }

    /// `(rank, player)` pairs, rank starting at 1.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.players.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn user_rank(&self) -> Option<usize> {
        self.ranked().find(|(_, p)| p.is_user).map(|(rank, _)| rank)
    }

    pub fn top(&self, n: usize) -> impl Iterator<Item = (usize, &Player)> {
        self.ranked().take(n)
    }
}

/// Top of the weekly board as previewed on the dashboard: `(name, avatar, points)`.
pub const TOP_FARMERS: [(&str, &str, u32); 3] = [
    ("John Smith", "👨‍🌾", 235),
    ("Sarah Johnson", "👩‍🌾", 212),
    ("Michael Brown", "👨‍🌾", 198),
];

/// The signed-in farmer's place on the dashboard preview.
pub const DASHBOARD_USER_RANK: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_for_points() {
        assert_eq!(Rank::for_points(0), Rank::Seedling);
        assert_eq!(Rank::for_points(99), Rank::Seedling);
        assert_eq!(Rank::for_points(120), Rank::GrowingFarmer);
        assert_eq!(Rank::for_points(200), Rank::MasterFarmer);
        assert_eq!(Rank::MasterFarmer.next(), None);
    }

    #[test]
    fn test_demo_progress() {
        let progress = RankProgress::for_points(120);
        assert_eq!(progress.rank, Rank::GrowingFarmer);
        assert_eq!(progress.next, Some(Rank::MasterFarmer));
        assert_eq!(progress.remaining, 80);
        assert_eq!(progress.percent, 60);
    }

    #[test]
    fn test_new_account_progress() {
        let progress = RankProgress::for_points(0);
        assert_eq!(progress.rank, Rank::Seedling);
        assert_eq!(progress.remaining, 100);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn test_top_rank_progress() {
        let progress = RankProgress::for_points(5000);
        assert_eq!(progress.next, None);
        assert_eq!(progress.remaining, 0);
        assert_eq!(progress.percent, 100);
    }

    #[test]
    fn test_leaderboard_sorted() {
        let board = Leaderboard::new(vec![
            Player::new(1, "Low", 10, "", false),
            Player::new(2, "High", 30, "", true),
            Player::new(3, "Mid", 20, "", false),
        ]);
        let names: Vec<_> = board.ranked().map(|(r, p)| (r, p.name.as_str())).collect();
        assert_eq!(names, vec![(1, "High"), (2, "Mid"), (3, "Low")]);
        assert_eq!(board.user_rank(), Some(1));
    }

    #[test]
    fn test_weekly_sample() {
        let board = Leaderboard::weekly_sample();
        assert_eq!(board.user_rank(), Some(5));
        assert_eq!(board.top(3).count(), 3);
    }

    #[test]
    fn test_achievement_progress_in_range() {
        assert!(sample_achievements().iter().all(|a| a.progress <= 100));
    }
}
