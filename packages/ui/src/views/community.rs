use dioxus::prelude::*;
use farm::community::{Feed, Post, COMMUNITY_STATS, TRENDING_TOPICS};

use crate::auth::use_auth;

#[component]
pub fn Community() -> Element {
    let auth = use_auth();
    let mut feed = use_signal(Feed::sample);
    let mut draft = use_signal(String::new);

    let publish = move |evt: FormEvent| {
        evt.prevent_default();
        let author = auth().user.map(|u| u.name).unwrap_or_else(|| "You".to_string());
        if feed.write().publish(&author, &draft()).is_some() {
            draft.set(String::new());
        }
    };

    let posts: Vec<(Post, bool)> = {
        let feed = feed.read();
        feed.posts().iter().map(|p| (p.clone(), feed.is_liked(p.id))).collect()
    };

    rsx! {
        div {
            class: "community-container",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "Farmer Community" }
                    p { "Connect, share, and learn from fellow farmers" }
                }

                div {
                    class: "community-layout",
                    div {
                        class: "main-content",
                        form {
                            class: "create-post",
                            onsubmit: publish,
                            div {
                                class: "post-input",
                                div { class: "user-avatar", "👨‍🌾" }
                                input {
                                    r#type: "text",
                                    class: "post-text-input",
                                    placeholder: "Share your farming experience...",
                                    value: "{draft}",
                                    oninput: move |e| draft.set(e.value()),
                                }
                            }
                            div {
                                class: "post-actions",
                                button { r#type: "button", class: "btn btn-secondary", "Add Photo" }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: draft().trim().is_empty(),
                                    "Post"
                                }
                            }
                        }

                        div {
                            class: "posts-feed",
                            for (post, liked) in posts {
                                div {
                                    key: "{post.id}",
                                    class: "post-card",
                                    div {
                                        class: "post-header",
                                        div {
                                            class: "post-author",
                                            div { class: "author-avatar", "{post.avatar}" }
                                            div {
                                                class: "author-info",
                                                h3 { "{post.author}" }
                                                span { class: "post-time", "{post.time_ago}" }
                                            }
                                        }
                                        button { class: "post-menu", "•••" }
                                    }
                                    div {
                                        class: "post-content",
                                        p { "{post.content}" }
                                    }
                                    div {
                                        class: "post-footer",
                                        button {
                                            class: if liked { "post-action liked" } else { "post-action" },
                                            onclick: move |_| feed.write().toggle_like(post.id),
                                            span { "👍" }
                                            " {post.likes}"
                                        }
                                        button {
                                            class: "post-action",
                                            span { "💬" }
                                            " {post.comments}"
                                        }
                                        button {
                                            class: "post-action",
                                            span { "↗️" }
                                            " Share"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    aside {
                        class: "sidebar",
                        div {
                            class: "community-stats",
                            h2 { "Community Stats" }
                            div {
                                class: "stats-grid",
                                for (value, label) in COMMUNITY_STATS {
                                    div {
                                        key: "{label}",
                                        class: "stat-card",
                                        div { class: "stat-value", "{value}" }
                                        div { class: "stat-label", "{label}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "trending-topics",
                            h2 { "Trending Topics" }
                            ul {
                                class: "topics-list",
                                for topic in TRENDING_TOPICS {
                                    li { key: "{topic}", "{topic}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
