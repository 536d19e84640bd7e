use dioxus::prelude::*;
use farm::game::{sample_achievements, Leaderboard};
use farm::tasks::TaskList;

#[component]
pub fn GameDashboard() -> Element {
    let achievements = use_hook(sample_achievements);
    let board = use_hook(Leaderboard::weekly_sample);
    let mut tasks = use_signal(TaskList::daily_sample);

    let task_items = tasks.read().tasks().to_vec();
    let earned = tasks.read().earned_points();

    rsx! {
        div {
            class: "game-dashboard-container",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "Game Dashboard" }
                    p { "Track your progress and compete with other farmers" }
                }

                div {
                    class: "dashboard-grid",
                    section {
                        class: "achievements-section",
                        h2 { "Achievements" }
                        div {
                            class: "achievements-grid",
                            for achievement in achievements {
                                div {
                                    key: "{achievement.id}",
                                    class: "achievement-card",
                                    div { class: "achievement-icon", "{achievement.icon}" }
                                    div {
                                        class: "achievement-info",
                                        h3 { "{achievement.title}" }
                                        p { "{achievement.description}" }
                                        div {
                                            class: "progress-bar",
                                            div { class: "progress-fill", style: "width: {achievement.progress}%" }
                                        }
                                        span { class: "progress-text", "{achievement.progress}%" }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        class: "daily-tasks-section",
                        h2 { "Daily Tasks" }
                        p { class: "tasks-earned", "{earned} points earned today" }
                        div {
                            class: "tasks-list",
                            for task in task_items {
                                div {
                                    key: "{task.id}",
                                    class: if task.completed { "task-card completed" } else { "task-card" },
                                    div {
                                        class: "task-checkbox",
                                        input {
                                            r#type: "checkbox",
                                            checked: task.completed,
                                            onchange: move |_| tasks.write().toggle(task.id),
                                        }
                                    }
                                    div {
                                        class: "task-info",
                                        h3 { "{task.title}" }
                                        span { class: "task-points", "+{task.points} points" }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        class: "leaderboard-section",
                        h2 { "Leaderboard" }
                        div {
                            class: "leaderboard-list",
                            for (rank, player) in board.ranked() {
                                div {
                                    key: "{player.id}",
                                    class: if player.is_user { "leaderboard-item current-user" } else { "leaderboard-item" },
                                    div { class: "rank", "{rank}" }
                                    div { class: "player-avatar", "{player.avatar}" }
                                    div {
                                        class: "player-info",
                                        h3 { "{player.name}" }
                                        span { class: "player-points", "{player.points} points" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
