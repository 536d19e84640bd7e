//! Government agricultural schemes shown on the schemes page.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub eligibility: String,
    pub benefits: Vec<String>,
    pub icon: String,
}

pub fn catalogue() -> Vec<Scheme> {
    let scheme = |id, title: &str, description: &str, eligibility: &str, benefits: [&str; 3], icon: &str| Scheme {
        id,
        title: title.to_string(),
        description: description.to_string(),
        eligibility: eligibility.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        icon: icon.to_string(),
    };
    vec![
        scheme(
            1,
            "PM-KISAN",
            "Direct income support of ₹6000 per year to eligible farmer families",
            "Small and Marginal Farmers",
            ["Direct cash transfer", "Financial support for farming", "No intermediaries"],
            "💰",
        ),
        scheme(
            2,
            "Soil Health Card Scheme",
            "Provides information on soil health and recommendations for fertilizers",
            "All Farmers",
            ["Free soil testing", "Customized recommendations", "Improved crop yield"],
            "🌱",
        ),
        scheme(
            3,
            "Pradhan Mantri Fasal Bima Yojana",
            "Crop insurance scheme to protect against natural calamities",
            "All Farmers with Insurable Crops",
            ["Low premium rates", "Full insurance coverage", "Quick claim settlement"],
            "🌾",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue() {
        let schemes = catalogue();
        let ids: Vec<u32> = schemes.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(schemes[0].title, "PM-KISAN");
        assert!(schemes.iter().all(|s| s.benefits.len() == 3));
    }
}
