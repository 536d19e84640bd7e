use dioxus::prelude::*;
use farm::finance::{MONTHS, SEASON_SUMMARY};
use farm::game::{RankProgress, DASHBOARD_USER_RANK, TOP_FARMERS};
use farm::tasks::TaskList;
use farm::weather::{HealthBand, CROP_HEALTH_HISTORY, CROP_HEALTH_SCORE};
use farm::{fetch_weather, group_thousands};

use crate::auth::use_auth;
use crate::charts::{DoughnutChart, LineChart, ScoreRing, Series, Slice};
use crate::config::app_config;
use crate::routes::Route;

const RECENT_ACTIVITY: [(&str, &str, &str, &str, &str); 4] = [
    ("green", "🏆", "You earned ", "15 points", " for completing daily tasks"),
    ("blue", "🌱", "Crop health improved by ", "5%", " this week"),
    ("orange", "📊", "Added ", "$500", " to your income tracker"),
    ("purple", "🏅", "Unlocked ", "\"Early Bird\"", " achievement"),
];

const ACTIVITY_TIMES: [&str; 4] = ["2 hours ago", "1 day ago", "2 days ago", "3 days ago"];

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let weather = use_resource(|| async move { fetch_weather(app_config().timing.weather()).await });
    let mut tasks = use_signal(TaskList::dashboard_sample);

    let Some(user) = auth().user else {
        return rsx! {};
    };

    let today = farm::clock::today().format("%A, %B %-d, %Y").to_string();
    let report = *weather.read();
    let progress = RankProgress::for_points(user.points);
    let band = HealthBand::for_score(CROP_HEALTH_SCORE);
    let task_items = tasks.read().tasks().to_vec();
    let (completed, total, percent) = {
        let list = tasks.read();
        (list.completed(), list.total(), list.completion_percent())
    };
    let season = Slice::from_pairs(&SEASON_SUMMARY);
    let income = SEASON_SUMMARY[0].1 as i64;
    let expenses = SEASON_SUMMARY[1].1 as i64;
    let income_label = format!("${}", group_thousands(income));
    let expenses_label = format!("${}", group_thousands(expenses));
    let profit_label = format!("${}", group_thousands(income - expenses));

    rsx! {
        div {
            class: "dashboard-container",
            div {
                class: "container",
                div {
                    class: "dashboard-header",
                    div {
                        class: "dashboard-welcome",
                        h1 { "Welcome back, {user.name}!" }
                        p { class: "dashboard-date", "{today}" }
                    }
                    div {
                        class: "dashboard-actions",
                        Link { to: Route::ImageUpload {}, class: "btn btn-primary", "Analyze Crop" }
                    }
                }

                div {
                    class: "dashboard-stats-grid",
                    div {
                        class: "dashboard-card weather-card",
                        h3 { "Weather Conditions" }
                        if let Some(report) = report {
                            div {
                                class: "weather-info",
                                div { class: "weather-icon", {report.forecast.icon()} }
                                div {
                                    class: "weather-details",
                                    p { class: "weather-temp", "{report.temp_c}°C" }
                                    p { {report.forecast.label()} }
                                    div {
                                        class: "weather-metrics",
                                        span { "💧 {report.humidity}%" }
                                        span { "💨 {report.wind_kmh} km/h" }
                                    }
                                }
                            }
                        } else {
                            div { class: "loading-spinner", "Loading weather data..." }
                        }
                    }

                    div {
                        class: "dashboard-card points-card",
                        h3 { "Points & Achievements" }
                        div {
                            class: "points-info",
                            div {
                                class: "points-total",
                                span { class: "points-icon", "🏆" }
                                span { class: "points-number", "{user.points}" }
                                span { class: "points-label", "Total Points" }
                            }
                            div {
                                class: "rank-info",
                                p { "Current Rank: " strong { {progress.rank.label()} } }
                                div {
                                    class: "progress-bar",
                                    div { class: "progress-fill", style: "width: {progress.percent}%" }
                                }
                                if let Some(next) = progress.next {
                                    p {
                                        class: "next-rank",
                                        "{progress.remaining} points to "
                                        strong { {next.label()} }
                                    }
                                } else {
                                    p { class: "next-rank", "Top rank reached" }
                                }
                            }
                        }
                        Link { to: Route::GameDashboard {}, class: "btn btn-secondary btn-sm", "View All Achievements" }
                    }

                    div {
                        class: "dashboard-card crop-health-card",
                        h3 { "Crop Health Overview" }
                        LineChart {
                            labels: MONTHS.to_vec(),
                            series: vec![Series::new("Crop Health Score", &CROP_HEALTH_HISTORY, "#2e7d32")],
                            max: 100.0,
                        }
                        div {
                            class: "crop-health-score",
                            ScoreRing { score: CROP_HEALTH_SCORE, color: band.color() }
                            div {
                                class: "health-details",
                                p { "Overall crop health is " strong { "{CROP_HEALTH_SCORE}%" } }
                                p { "Last updated: 2 hours ago" }
                            }
                        }
                    }

                    div {
                        class: "dashboard-card finance-card",
                        h3 { "Financial Summary" }
                        DoughnutChart { slices: season }
                        div {
                            class: "finance-summary",
                            div {
                                class: "finance-item",
                                span { class: "finance-label", "Total Income:" }
                                span { class: "finance-value", "{income_label}" }
                            }
                            div {
                                class: "finance-item",
                                span { class: "finance-label", "Expenses:" }
                                span { class: "finance-value", "{expenses_label}" }
                            }
                            div {
                                class: "finance-item",
                                span { class: "finance-label", "Net Profit:" }
                                span { class: "finance-value positive", "{profit_label}" }
                            }
                        }
                        Link { to: Route::FinanceTracker {}, class: "btn btn-secondary btn-sm", "View Detailed Finances" }
                    }
                }

                div {
                    class: "dashboard-bottom-grid",
                    div {
                        class: "dashboard-card tasks-card",
                        div {
                            class: "card-header",
                            h3 { "Daily Tasks" }
                            div {
                                class: "task-completion",
                                span { "{completed}/{total} completed" }
                                div {
                                    class: "progress-bar",
                                    div { class: "progress-fill", style: "width: {percent}%" }
                                }
                            }
                        }
                        ul {
                            class: "tasks-list",
                            for task in task_items {
                                li {
                                    key: "{task.id}",
                                    class: if task.completed { "task-item completed" } else { "task-item" },
                                    div {
                                        class: "task-checkbox-container",
                                        input {
                                            id: "task-{task.id}",
                                            r#type: "checkbox",
                                            checked: task.completed,
                                            onchange: move |_| tasks.write().toggle(task.id),
                                        }
                                        label { r#for: "task-{task.id}", class: "task-checkbox" }
                                    }
                                    div {
                                        class: "task-content",
                                        span { class: "task-title", "{task.title}" }
                                        span { class: "task-points", "+{task.points} points" }
                                    }
                                }
                            }
                        }
                        Link { to: Route::GameDashboard {}, class: "btn btn-primary btn-sm", "View All Tasks" }
                    }

                    div {
                        class: "dashboard-card activity-card",
                        h3 { "Recent Activity" }
                        ul {
                            class: "activity-list",
                            for ((tone, icon, before, highlight, after), time) in RECENT_ACTIVITY.into_iter().zip(ACTIVITY_TIMES) {
                                li {
                                    key: "{time}",
                                    class: "activity-item",
                                    div { class: "activity-icon {tone}", "{icon}" }
                                    div {
                                        class: "activity-content",
                                        p { class: "activity-text", "{before}" strong { "{highlight}" } "{after}" }
                                        span { class: "activity-time", "{time}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "dashboard-card community-card",
                        h3 { "Community Highlights" }
                        div {
                            class: "leaderboard-preview",
                            h4 { "Top Farmers This Week" }
                            ul {
                                class: "leaderboard-list",
                                for (i, (name, avatar, points)) in TOP_FARMERS.into_iter().enumerate() {
                                    li {
                                        key: "{name}",
                                        class: "leaderboard-item",
                                        div { class: "leaderboard-rank", {(i + 1).to_string()} }
                                        div {
                                            class: "leaderboard-user",
                                            span { class: "user-avatar", "{avatar}" }
                                            span { class: "user-name", "{name}" }
                                        }
                                        div { class: "leaderboard-points", "{points} pts" }
                                    }
                                }
                                li {
                                    class: "leaderboard-item you",
                                    div { class: "leaderboard-rank", "{DASHBOARD_USER_RANK}" }
                                    div {
                                        class: "leaderboard-user",
                                        span { class: "user-avatar", "👨‍🌾" }
                                        span { class: "user-name", "You" }
                                    }
                                    div { class: "leaderboard-points", "{user.points} pts" }
                                }
                            }
                        }
                        Link { to: Route::Community {}, class: "btn btn-secondary btn-sm", "View Community" }
                    }
                }
            }
        }
    }
}
