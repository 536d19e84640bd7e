//! Mock weather and crop health readings for the dashboard.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::sleep;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Forecast {
    Sunny,
    Cloudy,
    Rainy,
}

impl Forecast {
    pub fn icon(&self) -> &'static str {
        match self {
            Forecast::Sunny => "☀️",
            Forecast::Cloudy => "☁️",
            Forecast::Rainy => "🌧️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Forecast::Sunny => "Sunny",
            Forecast::Cloudy => "Cloudy",
            Forecast::Rainy => "Rainy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_c: i32,
    pub humidity: u32,
    pub wind_kmh: u32,
    pub forecast: Forecast,
}

/// Simulated weather request; always sunny.
pub async fn fetch_weather(delay: Duration) -> WeatherReport {
    tracing::debug!("Fetching weather");
    sleep(delay).await;
    WeatherReport {
        temp_c: 28,
        humidity: 65,
        wind_kmh: 12,
        forecast: Forecast::Sunny,
    }
}

/// Monthly crop health scores, aligned with [`crate::finance::MONTHS`].
pub const CROP_HEALTH_HISTORY: [f64; 6] = [65.0, 72.0, 78.0, 75.0, 82.0, 85.0];

/// Latest overall crop health score.
pub const CROP_HEALTH_SCORE: u32 = 85;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthBand {
    Good,
    Fair,
    Poor,
}

impl HealthBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s > 70 => HealthBand::Good,
            s if s > 40 => HealthBand::Fair,
            _ => HealthBand::Poor,
        }
    }

    /// CSS colour variable for the score ring.
    pub fn color(&self) -> &'static str {
        match self {
            HealthBand::Good => "var(--color-success)",
            HealthBand::Fair => "var(--color-warning)",
            HealthBand::Poor => "var(--color-error)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_bands() {
        assert_eq!(HealthBand::for_score(85), HealthBand::Good);
        assert_eq!(HealthBand::for_score(71), HealthBand::Good);
        assert_eq!(HealthBand::for_score(70), HealthBand::Fair);
        assert_eq!(HealthBand::for_score(41), HealthBand::Fair);
        assert_eq!(HealthBand::for_score(40), HealthBand::Poor);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_weather() {
        let report = fetch_weather(Duration::from_secs(1)).await;
        assert_eq!(report.temp_c, 28);
        assert_eq!(report.forecast.icon(), "☀️");
    }
}
