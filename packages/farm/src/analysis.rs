//! # Mock crop disease analysis
//!
//! [`analyze_crop`] waits for the configured delay and then flips a coin:
//! half the time the crop has "Leaf Blight" at 87% confidence, otherwise it is
//! healthy. Nothing looks at the image.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clock::sleep;
use crate::upload::UploadedImage;

/// Points the result card claims for running an analysis.
pub const ANALYSIS_POINTS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_disease: bool,
    pub disease_name: String,
    pub confidence: u8,
    pub recommendations: Vec<String>,
    pub fertilizer_recommendations: Vec<String>,
}

impl AnalysisResult {
    fn with_outcome(is_disease: bool) -> Self {
        Self {
            is_disease,
            disease_name: "Leaf Blight".to_string(),
            confidence: 87,
            recommendations: vec![
                "Apply fungicide treatment within 3 days".to_string(),
                "Ensure proper spacing between plants for better airflow".to_string(),
                "Consider drip irrigation to avoid leaf wetness".to_string(),
            ],
            fertilizer_recommendations: vec![
                "Balanced NPK (10-10-10) fertilizer".to_string(),
                "Foliar spray with micronutrients".to_string(),
            ],
        }
    }

    pub fn diseased() -> Self {
        Self::with_outcome(true)
    }

    pub fn healthy() -> Self {
        Self::with_outcome(false)
    }

    pub fn headline(&self) -> String {
        if self.is_disease {
            format!("Disease Detected: {}", self.disease_name)
        } else {
            "No Disease Detected".to_string()
        }
    }
}

/// Pick an outcome with even odds.
pub fn mock_result<R: Rng + ?Sized>(rng: &mut R) -> AnalysisResult {
    AnalysisResult::with_outcome(rng.gen_bool(0.5))
}

/// Simulated analysis request.
pub async fn analyze_crop(image: &UploadedImage, delay: Duration) -> AnalysisResult {
    tracing::debug!("Analyzing {} ({} bytes)", image.name, image.size);
    sleep(delay).await;
    let result = mock_result(&mut rand::thread_rng());
    tracing::info!("Analysis of {}: {}", image.name, result.headline());
    result
}

/// `(icon, tip)` pairs shown for healthy crops.
pub const HEALTHY_TIPS: [(&str, &str); 3] = [
    ("💧", "Maintain regular watering schedule"),
    ("☀️", "Ensure adequate sunlight exposure"),
    ("🌱", "Continue with balanced fertilizer application"),
];

/// A previously analysed upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    pub title: &'static str,
    pub image_url: &'static str,
    pub alt: &'static str,
    pub verdict: &'static str,
    pub healthy: bool,
    pub uploaded: &'static str,
}

pub const RECENT_UPLOADS: [HistoryItem; 3] = [
    HistoryItem {
        title: "Corn Field",
        image_url: "https://images.pexels.com/photos/2749165/pexels-photo-2749165.jpeg",
        alt: "Corn crop",
        verdict: "Healthy",
        healthy: true,
        uploaded: "Uploaded 2 days ago",
    },
    HistoryItem {
        title: "Tomato Plants",
        image_url: "https://images.pexels.com/photos/5560867/pexels-photo-5560867.jpeg",
        alt: "Tomato plant",
        verdict: "Leaf Blight",
        healthy: false,
        uploaded: "Uploaded 5 days ago",
    },
    HistoryItem {
        title: "Wheat Field",
        image_url: "https://images.pexels.com/photos/974314/pexels-photo-974314.jpeg",
        alt: "Wheat field",
        verdict: "Healthy",
        healthy: true,
        uploaded: "Uploaded 1 week ago",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_image() -> UploadedImage {
        UploadedImage::from_bytes("leaf.png", Some("image/png"), &[1, 2, 3]).unwrap()
    }

    #[test]
    fn test_headlines() {
        assert_eq!(AnalysisResult::diseased().headline(), "Disease Detected: Leaf Blight");
        assert_eq!(AnalysisResult::healthy().headline(), "No Disease Detected");
        assert_eq!(AnalysisResult::diseased().confidence, 87);
    }

    #[test]
    fn test_both_outcomes_occur() {
        let mut rng = StdRng::seed_from_u64(7);
        let results: Vec<bool> = (0..64).map(|_| mock_result(&mut rng).is_disease).collect();
        assert!(results.iter().any(|d| *d));
        assert!(results.iter().any(|d| !*d));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_waits_for_delay() {
        let image = sample_image();
        let started = tokio::time::Instant::now();
        let result = analyze_crop(&image, Duration::from_secs(3)).await;
        assert!(started.elapsed() >= Duration::from_secs(3));
        assert_eq!(result.disease_name, "Leaf Blight");
    }
}
