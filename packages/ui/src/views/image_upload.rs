//! Crop image upload and mock disease analysis.
//!
//! All timers are fire-and-forget tasks. A rejection notice is cleared by the
//! task that showed it only if no newer notice replaced it in the meantime, and
//! an analysis result is kept only if the preview was not removed or replaced
//! while it ran.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use farm::analysis::{ANALYSIS_POINTS, HEALTHY_TIPS, RECENT_UPLOADS};
use farm::upload::{UploadError, UploadSource};
use farm::{analyze_crop, AnalysisResult, UploadedImage};

use crate::config::app_config;

/// A transient message plus the generation that last set it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct NoticeSlot {
    message: Option<&'static str>,
    generation: u64,
}

impl NoticeSlot {
    /// Show `message`; returns the generation a later clear must match.
    fn show(&mut self, message: &'static str) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    fn clear(&mut self) {
        self.generation += 1;
        self.message = None;
    }

    fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }
}

/// Preview, analysis result and spinner flag, with a generation that moves
/// whenever the previewed image is replaced or removed.
#[derive(Clone, Debug, Default, PartialEq)]
struct UploadPanel {
    image: Option<UploadedImage>,
    result: Option<AnalysisResult>,
    analyzing: bool,
    generation: u64,
}

impl UploadPanel {
    /// Apply a validated upload. Rejections leave the panel as it was.
    fn offer(&mut self, upload: Result<UploadedImage, UploadError>) -> Result<(), UploadError> {
        let image = upload?;
        self.generation += 1;
        self.image = Some(image);
        self.result = None;
        self.analyzing = false;
        Ok(())
    }

    /// Mark an analysis as running; returns the image and the generation its
    /// outcome must match.
    fn begin_analysis(&mut self) -> Option<(UploadedImage, u64)> {
        let image = self.image.clone()?;
        self.analyzing = true;
        Some((image, self.generation))
    }

    /// Store an outcome unless the image changed since `generation`.
    fn finish_analysis(&mut self, generation: u64, outcome: AnalysisResult) -> bool {
        if self.generation != generation {
            return false;
        }
        self.analyzing = false;
        self.result = Some(outcome);
        true
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.image = None;
        self.result = None;
        self.analyzing = false;
    }
}

#[derive(Clone, Copy)]
struct UploadState {
    panel: Signal<UploadPanel>,
    notice: Signal<NoticeSlot>,
}

impl UploadState {
    fn reject(mut self, source: UploadSource) {
        let generation = self.notice.write().show(source.rejection_message());
        spawn(async move {
            farm::clock::sleep(app_config().timing.notice()).await;
            self.notice.write().expire(generation);
        });
    }

    fn take(mut self, file: Option<FileData>, source: UploadSource) {
        let Some(file) = file else {
            self.reject(source);
            return;
        };
        spawn(async move {
            let name = file.name();
            let content_type = file.content_type();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", name, e);
                    self.reject(source);
                    return;
                }
            };
            let upload = UploadedImage::from_bytes(&name, content_type.as_deref(), &bytes);
            let offered = self.panel.write().offer(upload);
            match offered {
                Ok(()) => self.notice.write().clear(),
                Err(e) => {
                    tracing::debug!("{}", e);
                    self.reject(source);
                }
            }
        });
    }

    fn analyze(mut self) {
        let Some((image, generation)) = self.panel.write().begin_analysis() else {
            return;
        };
        spawn(async move {
            let outcome = analyze_crop(&image, app_config().timing.analysis()).await;
            if !self.panel.write().finish_analysis(generation, outcome) {
                tracing::debug!("Dropping analysis of {}, image changed", image.name);
            }
        });
    }

    fn reset(mut self) {
        self.panel.write().reset();
    }
}

#[component]
pub fn ImageUpload() -> Element {
    let state = UploadState {
        panel: use_signal(UploadPanel::default),
        notice: use_signal(NoticeSlot::default),
    };
    let panel = (state.panel)();
    let mut dragging = use_signal(|| false);

    rsx! {
        div {
            class: "image-upload-container",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "Crop Disease Detection" }
                    p { "Upload an image of your crop to detect diseases and get treatment recommendations" }
                }

                div {
                    class: "upload-section",
                    if let Some(image) = panel.image.clone() {
                        div {
                            class: "analysis-section",
                            div {
                                class: "preview-container",
                                img { src: "{image.data_url}", alt: "Crop preview", class: "image-preview" }
                                div {
                                    class: "preview-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: move |_| state.reset(),
                                        "Remove"
                                    }
                                    if !panel.analyzing && panel.result.is_none() {
                                        button {
                                            class: "btn btn-primary",
                                            onclick: move |_| state.analyze(),
                                            "Analyze Image"
                                        }
                                    }
                                }
                            }
                            if panel.analyzing {
                                div {
                                    class: "analyzing-indicator",
                                    div { class: "analyzing-spinner" }
                                    p { "Analyzing your crop image..." }
                                }
                            }
                            if let Some(result) = panel.result.clone() {
                                AnalysisReport { result }
                            }
                        }
                    } else {
                        div {
                            class: if dragging() { "upload-area dragging" } else { "upload-area" },
                            ondragover: move |evt| {
                                evt.prevent_default();
                                dragging.set(true);
                            },
                            ondragleave: move |_| dragging.set(false),
                            ondrop: move |evt| {
                                evt.prevent_default();
                                dragging.set(false);
                                state.take(evt.files().into_iter().next(), UploadSource::Drop);
                            },
                            div { class: "upload-icon", "📷" }
                            h3 { "Drag & Drop Image Here" }
                            p { "or" }
                            label {
                                class: "file-input-label",
                                "Browse Files"
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    class: "file-input",
                                    onchange: move |evt| {
                                        state.take(evt.files().into_iter().next(), UploadSource::Browse);
                                    },
                                }
                            }
                            p { class: "upload-note", "Supported formats: JPG, PNG, WEBP" }
                            if let Some(message) = (state.notice)().message {
                                p { class: "upload-error", "{message}" }
                            }
                        }
                    }
                }

                div {
                    class: "upload-history",
                    h3 { "Recent Uploads" }
                    div {
                        class: "history-grid",
                        for item in RECENT_UPLOADS {
                            div {
                                key: "{item.title}",
                                class: "history-item",
                                div {
                                    class: "history-image",
                                    img { src: item.image_url, alt: item.alt }
                                    div {
                                        class: if item.healthy { "history-badge healthy" } else { "history-badge disease" },
                                        "{item.verdict}"
                                    }
                                }
                                div {
                                    class: "history-details",
                                    h4 { "{item.title}" }
                                    p { "{item.uploaded}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AnalysisReport(result: AnalysisResult) -> Element {
    rsx! {
        div {
            class: "analysis-results",
            div {
                class: if result.is_disease { "result-header disease" } else { "result-header healthy" },
                h3 { {result.headline()} }
                if result.is_disease {
                    div { class: "confidence-badge", "{result.confidence}% Confidence" }
                }
            }

            if result.is_disease {
                div {
                    class: "recommendations",
                    h4 { "Treatment Recommendations" }
                    ul {
                        class: "recommendations-list",
                        for rec in result.recommendations.iter() {
                            li {
                                key: "{rec}",
                                class: "recommendation-item",
                                div { class: "recommendation-icon", "💡" }
                                p { "{rec}" }
                            }
                        }
                    }
                    h4 { "Fertilizer Recommendations" }
                    ul {
                        class: "recommendations-list",
                        for rec in result.fertilizer_recommendations.iter() {
                            li {
                                key: "{rec}",
                                class: "recommendation-item",
                                div { class: "recommendation-icon", "🌱" }
                                p { "{rec}" }
                            }
                        }
                    }
                    div {
                        class: "recommendation-actions",
                        button { class: "btn btn-primary", "Save to My Crops" }
                        button { class: "btn btn-secondary", "Download Report" }
                    }
                }
            } else {
                div {
                    class: "healthy-crop",
                    p { "Your crop appears to be healthy! Here are some suggestions to maintain crop health:" }
                    ul {
                        class: "recommendations-list",
                        for (icon, tip) in HEALTHY_TIPS {
                            li {
                                key: "{tip}",
                                class: "recommendation-item",
                                div { class: "recommendation-icon", "{icon}" }
                                p { "{tip}" }
                            }
                        }
                    }
                    div {
                        class: "market-price-section",
                        h4 { "Current Market Price" }
                        div {
                            class: "market-price-card",
                            div {
                                class: "market-price-header",
                                span { class: "market-crop-name", "Generic Crop" }
                                span { class: "market-price-trend positive", "+2.5% ↑" }
                            }
                            div { class: "market-price-value", "$5.75 / kg" }
                            div {
                                class: "market-price-footer",
                                span { "Updated today at 10:45 AM" }
                            }
                        }
                    }
                }
            }

            div {
                class: "points-earned",
                div { class: "points-icon", "🏆" }
                div {
                    class: "points-content",
                    p { strong { "+{ANALYSIS_POINTS} points" } " earned for crop analysis!" }
                    div {
                        class: "progress-bar",
                        div { class: "progress-fill", style: "width: 65%" }
                    }
                    p { class: "next-achievement", "35 points until next achievement" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> UploadedImage {
        UploadedImage::from_bytes("leaf.png", Some("image/png"), &[1, 2, 3]).unwrap()
    }

    #[test]
    fn test_rejected_upload_keeps_preview() {
        let mut panel = UploadPanel::default();
        panel.offer(Ok(leaf())).unwrap();
        let before = panel.clone();

        let text = UploadedImage::from_bytes("notes.txt", Some("text/plain"), b"BM tractor log");
        assert!(panel.offer(text).is_err());
        assert_eq!(panel, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut panel = UploadPanel::default();
        panel.offer(Ok(leaf())).unwrap();
        let (_, generation) = panel.begin_analysis().unwrap();
        assert!(panel.finish_analysis(generation, AnalysisResult::healthy()));

        panel.reset();
        assert_eq!(panel.image, None);
        assert_eq!(panel.result, None);
        assert!(!panel.analyzing);
        assert_eq!(panel.begin_analysis(), None);
    }

    #[test]
    fn test_analysis_of_removed_image_is_dropped() {
        let mut panel = UploadPanel::default();
        panel.offer(Ok(leaf())).unwrap();
        let (_, stale) = panel.begin_analysis().unwrap();

        // Remove and drop the very same file again while the analysis runs
        panel.reset();
        panel.offer(Ok(leaf())).unwrap();

        assert!(!panel.finish_analysis(stale, AnalysisResult::diseased()));
        assert_eq!(panel.result, None);

        let (_, current) = panel.begin_analysis().unwrap();
        assert!(panel.finish_analysis(current, AnalysisResult::diseased()));
        assert!(!panel.analyzing);
        assert_eq!(panel.result, Some(AnalysisResult::diseased()));
    }

    #[test]
    fn test_notice_expires() {
        let mut slot = NoticeSlot::default();
        let generation = slot.show("Please drop an image file");
        slot.expire(generation);
        assert_eq!(slot.message, None);
    }

    #[test]
    fn test_stale_timer_keeps_newer_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show("Please drop an image file");
        let second = slot.show("Please select an image file");

        slot.expire(first);
        assert_eq!(slot.message, Some("Please select an image file"));

        slot.expire(second);
        assert_eq!(slot.message, None);
    }

    #[test]
    fn test_clear_invalidates_pending_timer() {
        let mut slot = NoticeSlot::default();
        let generation = slot.show("Please drop an image file");
        slot.clear();
        let newer = slot.show("Please select an image file");
        slot.expire(generation);
        assert_eq!(slot.message, Some("Please select an image file"));
        assert!(newer > generation);
    }
}
