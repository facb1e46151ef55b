//! Translation popup: content selection and painting.

use super::LukulasiApp;
use eframe::egui;
use lukulasi_core::constants::POPUP_MAX_WIDTH;
use lukulasi_core::coordinator::{DisplayState, TranslationOutcome};
use lukulasi_core::popup::{compute_position, AnchorRect, ViewportSize};
use lukulasi_core::selection::{TrackerState, TriggerKind};

/// What the popup shows this frame, independent of widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PopupContent {
    Loading { original: String },
    Success { original: String, translated: String },
    Failed,
    TooLong,
}

/// Derive popup content from tracker state and the coordinator display slot.
///
/// The too-long error bypasses translation entirely. Hover tooltips stay
/// hidden while loading; the selection popup appears immediately with a
/// spinner.
pub(crate) fn popup_content(
    state: &TrackerState,
    display: Option<&DisplayState>,
) -> Option<PopupContent> {
    if matches!(state, TrackerState::SelectionTooLong) {
        return Some(PopupContent::TooLong);
    }
    let display = display?;
    match &display.outcome {
        TranslationOutcome::Loading => {
            if display.trigger.kind == TriggerKind::Hover {
                None
            } else {
                Some(PopupContent::Loading {
                    original: display.trigger.text.clone(),
                })
            }
        }
        TranslationOutcome::Success(translated) => Some(PopupContent::Success {
            original: display.trigger.text.clone(),
            translated: translated.clone(),
        }),
        TranslationOutcome::Failed => Some(PopupContent::Failed),
    }
}

/// Content length driving the size estimate used for positioning.
pub(crate) fn popup_estimate_len(content: &PopupContent) -> usize {
    match content {
        PopupContent::Loading { original } => original.chars().count() + 14,
        PopupContent::Success {
            original,
            translated,
        } => original.chars().count().max(translated.chars().count()),
        PopupContent::Failed => "Translation error".len(),
        PopupContent::TooLong => "Selected text is too long to translate".len(),
    }
}

impl LukulasiApp {
    pub(crate) fn popup_shown(&self) -> bool {
        popup_content(self.tracker.state(), self.coordinator.display()).is_some()
    }

    /// Paint the popup, recomputing geometry only when a coalesced
    /// invalidation fired or nothing is cached yet.
    pub(crate) fn show_popup(&mut self, ctx: &egui::Context) {
        if self.coalescer.take() {
            self.popup_geometry = None;
        }

        let content = popup_content(self.tracker.state(), self.coordinator.display());
        let (Some(content), Some(anchor)) = (content, self.popup_anchor) else {
            self.popup_rect = None;
            self.popup_geometry = None;
            return;
        };

        if self.popup_geometry.is_none() {
            let screen = ctx.screen_rect();
            self.popup_geometry = Some(compute_position(
                AnchorRect {
                    left: anchor.min.x,
                    top: anchor.min.y,
                    width: anchor.width(),
                    height: anchor.height(),
                },
                ViewportSize {
                    width: screen.width(),
                    height: screen.height(),
                },
                popup_estimate_len(&content),
            ));
        }
        let Some(geometry) = self.popup_geometry else {
            return;
        };

        let (source, target) = self.coordinator.languages();
        let area = egui::Area::new(egui::Id::new("translation_popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(geometry.left, geometry.top))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(POPUP_MAX_WIDTH);
                    match &content {
                        PopupContent::Loading { original } => {
                            ui.horizontal(|ui| {
                                ui.add(egui::Spinner::new().size(14.0));
                                ui.label(format!("“{}”", original));
                                ui.weak("Translating…");
                            });
                        }
                        PopupContent::Success {
                            original,
                            translated,
                        } => {
                            ui.horizontal_wrapped(|ui| {
                                ui.weak(source.code().to_uppercase());
                                ui.label(format!("“{}”", original));
                                ui.weak("→");
                                ui.weak(target.code().to_uppercase());
                                ui.strong(format!("“{}”", translated));
                            });
                        }
                        PopupContent::Failed => {
                            ui.colored_label(ui.visuals().error_fg_color, "Translation error");
                        }
                        PopupContent::TooLong => {
                            ui.colored_label(
                                ui.visuals().error_fg_color,
                                "Selected text is too long to translate",
                            );
                        }
                    }
                });
            });
        self.popup_rect = Some(area.response.rect);
    }
}
