//! # Farm crate: domain data and simulated services for AgriFuture
//!
//! Everything the views display lives here as plain Rust data with small pure
//! helpers, so it can be tested without a renderer.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | Platform-aware `sleep` and `today` |
//! | [`finance`] | Transactions, ledger totals and ratios, savings goals |
//! | [`tasks`] | Toggleable task checklists |
//! | [`game`] | Achievements, leaderboard ranking, farmer ranks |
//! | [`community`] | The local post feed |
//! | [`schemes`] | Government scheme catalogue |
//! | [`upload`] | Image upload validation and previews |
//! | [`analysis`] | Mock crop disease analysis |
//! | [`weather`] | Mock weather report and crop health history |
//!
//! ## Simulated I/O
//!
//! [`weather::fetch_weather`] and [`analysis::analyze_crop`] are async and only
//! sleep before returning canned data. They are the seams where a real backend
//! request would go.

pub mod analysis;
pub mod clock;
pub mod community;
pub mod finance;
pub mod game;
pub mod schemes;
pub mod tasks;
pub mod upload;
pub mod weather;

pub use analysis::{analyze_crop, AnalysisResult};
pub use finance::{FinanceError, Ledger, SavingsGoal, Transaction, TransactionKind};
pub use upload::{UploadError, UploadedImage};
pub use weather::{fetch_weather, WeatherReport};

/// Format a whole number with thousands separators: `12000` → `"12,000"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4500), "-4,500");
    }
}
