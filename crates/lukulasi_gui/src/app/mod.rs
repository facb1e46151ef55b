//! Main application state and frame loop.

mod input_view;
mod popup_view;
mod reading;
mod util;

#[cfg(test)]
mod tests;

use crate::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent};
use eframe::egui;
use lukulasi_core::content::{ContentLibrary, ContentMeta};
use lukulasi_core::coordinator::TranslationCoordinator;
use lukulasi_core::popup::{PopupGeometry, RecomputeCoalescer};
use lukulasi_core::selection::{SelectionTracker, TrackerEvent, TranslationMode};
use lukulasi_core::token::{tokenize, Token, TokenRange};
use lukulasi_core::translate::Lang;
use lukulasi_core::{AppError, Config, StateStore, TranslationService};
use std::time::Instant;
use tracing::error;

pub(crate) const DEFAULT_WINDOW_SIZE: egui::Vec2 = egui::Vec2::new(900.0, 700.0);
pub(crate) const MIN_WINDOW_SIZE: egui::Vec2 = egui::Vec2::new(520.0, 400.0);

/// The Lukulasi reading-aid application.
pub struct LukulasiApp {
    store: StateStore,
    backend: BackendHandle,
    library: ContentLibrary,

    source_lang: Lang,
    target_lang: Lang,

    input_text: String,
    input_mode: bool,
    tokens: Vec<Token>,

    tracker: SelectionTracker,
    coordinator: TranslationCoordinator,
    last_translated: Option<TokenRange>,
    auto_clean: bool,

    // Popup/tooltip state. The anchor is the screen rect of the word or
    // selection endpoint the popup belongs to.
    popup_anchor: Option<egui::Rect>,
    popup_geometry: Option<PopupGeometry>,
    popup_rect: Option<egui::Rect>,
    coalescer: RecomputeCoalescer,

    // Reading-view frame state.
    word_rects: Vec<(usize, egui::Rect)>,
    reading_rect: Option<egui::Rect>,
    drag_anchor_token: Option<usize>,
    pending_scroll_restore: Option<f32>,
    last_scroll_offset: f32,
    last_saved_scroll: Option<i32>,
    last_viewport: Option<egui::Vec2>,

    // Content picker.
    show_library: bool,
    content_list: Vec<ContentMeta>,
    content_error: Option<String>,
}

impl LukulasiApp {
    /// Build the app: open the state store, restore the previous view, and
    /// spawn the translation worker.
    ///
    /// # Errors
    /// Returns an error when the store cannot be opened or the configured
    /// translation provider cannot be constructed.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let store = StateStore::open(&config.state_db_path)?;
        let state = store.load_view_state();
        let auto_clean = store.load_auto_clean();

        let service = TranslationService::for_kind(config.provider)?;
        let backend = spawn_backend(service);
        let library = ContentLibrary::new(config.content_dir.clone());

        let tokens = if state.input_mode {
            Vec::new()
        } else {
            tokenize(&state.input_text)
        };

        Ok(Self {
            store,
            backend,
            library,
            source_lang: config.source_lang,
            target_lang: config.target_lang,
            input_text: state.input_text,
            input_mode: state.input_mode,
            tokens,
            tracker: SelectionTracker::new(TranslationMode::Both),
            coordinator: TranslationCoordinator::new(config.source_lang, config.target_lang),
            last_translated: state.last_translated,
            auto_clean,
            popup_anchor: None,
            popup_geometry: None,
            popup_rect: None,
            coalescer: RecomputeCoalescer::new(),
            word_rects: Vec::new(),
            reading_rect: None,
            drag_anchor_token: None,
            pending_scroll_restore: state.scroll_y,
            last_scroll_offset: 0.0,
            last_saved_scroll: None,
            last_viewport: None,
            show_library: false,
            content_list: Vec::new(),
            content_error: None,
        })
    }

    fn drain_backend_events(&mut self) {
        let mut applied = false;
        for event in self.backend.evt_rx.try_iter() {
            match event {
                CoreEvent::Translated { request_id, text } => {
                    if self.coordinator.apply_success(request_id, text) {
                        applied = true;
                        let range = self
                            .coordinator
                            .display()
                            .and_then(|display| display.trigger.range);
                        if let Some(range) = range {
                            self.last_translated = Some(range);
                            self.store.save_last_translated(Some(range));
                        }
                    }
                }
                CoreEvent::TranslateFailed { request_id, cause } => {
                    if self.coordinator.apply_failure(request_id, &cause) {
                        applied = true;
                    }
                }
            }
        }
        if applied {
            // Result arrival changes the estimated popup size.
            self.coalescer.request();
        }
    }

    pub(crate) fn handle_tracker_event(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Trigger(trigger) => {
                self.coordinator.submit(trigger, Instant::now());
                self.coalescer.request();
            }
            TrackerEvent::Clear => {
                self.coordinator.clear();
                self.popup_anchor = None;
                self.popup_geometry = None;
            }
            TrackerEvent::SelectionTooLong => {
                self.coordinator.clear();
                self.coalescer.request();
            }
        }
    }

    fn set_translation_mode(&mut self, mode: TranslationMode) {
        if mode != self.tracker.mode() {
            if let Some(event) = self.tracker.set_mode(mode) {
                self.handle_tracker_event(event);
            }
        }
    }

    /// Enter reading mode with the current input text.
    fn start_reading(&mut self) {
        if self.input_text.trim().is_empty() {
            return;
        }
        self.tokens = tokenize(&self.input_text);
        self.coordinator.document_changed();
        self.tracker = SelectionTracker::new(self.tracker.mode());
        self.input_mode = false;
        self.last_translated = None;
        self.pending_scroll_restore = None;
        self.popup_anchor = None;
        self.store.save_input_text(&self.input_text);
        self.store.save_view_mode(false);
        self.store.save_last_translated(None);
    }

    /// Return to the input view, keeping or wiping the text per the
    /// auto-clean preference.
    fn back_to_input(&mut self) {
        if self.auto_clean {
            self.clear_text();
            return;
        }
        self.input_mode = true;
        self.coordinator.clear();
        self.tracker = SelectionTracker::new(self.tracker.mode());
        self.popup_anchor = None;
        self.store.save_view_mode(true);
    }

    /// Explicit clear: wipe the text and stored reading context.
    fn clear_text(&mut self) {
        self.input_text.clear();
        self.tokens.clear();
        self.input_mode = true;
        self.last_translated = None;
        self.pending_scroll_restore = None;
        self.popup_anchor = None;
        self.coordinator.document_changed();
        self.tracker = SelectionTracker::new(self.tracker.mode());
        self.store.reset_to_input();
    }

    /// Swap the language pair. Always resets to input mode and wipes the
    /// stored text.
    fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        self.coordinator
            .set_languages(self.source_lang, self.target_lang);
        self.clear_text();
    }

    fn refresh_content_list(&mut self) {
        self.content_list = self.library.list();
        self.content_error = if self.content_list.is_empty() {
            Some("No content found. Check the content directory and retry.".to_string())
        } else {
            None
        };
    }

    fn open_content(&mut self, id: &str) {
        match self.library.get(id) {
            Ok(item) => {
                self.input_text = item.text;
                self.content_error = None;
                self.show_library = false;
                self.start_reading();
            }
            Err(err) => {
                self.content_error = Some(format!("{}. Please retry.", err));
            }
        }
    }

    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Lukulasi");
            ui.separator();

            ui.label(self.source_lang.name());
            if ui.button("⇄ Swap").clicked() {
                self.swap_languages();
            }
            ui.label(self.target_lang.name());

            ui.separator();
            let mut mode = self.tracker.mode();
            egui::ComboBox::from_id_salt("translation_mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for candidate in TranslationMode::ALL {
                        ui.selectable_value(&mut mode, candidate, candidate.label());
                    }
                });
            self.set_translation_mode(mode);

            ui.separator();
            if ui.button("Library").clicked() {
                self.show_library = !self.show_library;
                if self.show_library {
                    self.refresh_content_list();
                }
            }

            if !self.input_mode {
                ui.separator();
                if ui.button("Edit text").clicked() {
                    self.back_to_input();
                }
                if ui.button("Clear").clicked() {
                    self.clear_text();
                }
            }
        });
    }

    fn ui_library_window(&mut self, ctx: &egui::Context) {
        if !self.show_library {
            return;
        }
        let mut open = self.show_library;
        let mut picked: Option<String> = None;
        let mut retry = false;
        egui::Window::new("Content library")
            .open(&mut open)
            .resizable(true)
            .show(ctx, |ui| {
                if let Some(message) = &self.content_error {
                    ui.colored_label(ui.visuals().warn_fg_color, message.as_str());
                    if ui.button("Retry").clicked() {
                        retry = true;
                    }
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for item in &self.content_list {
                        let label = format!("{} ({})", item.title, item.difficulty.label());
                        if ui.button(label).clicked() {
                            picked = Some(item.id.clone());
                        }
                        if !item.description.is_empty() {
                            ui.weak(item.description.as_str());
                        }
                        ui.separator();
                    }
                });
            });
        self.show_library = open;
        if retry {
            self.refresh_content_list();
        }
        if let Some(id) = picked {
            self.open_content(&id);
        }
    }
}

impl eframe::App for LukulasiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drain_backend_events();
        if let Some(request) = self.coordinator.poll(now) {
            if self
                .backend
                .cmd_tx
                .send(CoreCmd::Translate { request })
                .is_err()
            {
                error!("translate worker disconnected");
            }
        }

        // Viewport resizes invalidate popup geometry, but only while one is
        // shown; nothing is tracked while idle.
        let viewport = ctx.screen_rect().size();
        if self.last_viewport != Some(viewport) {
            if self.last_viewport.is_some() && self.popup_shown() {
                self.coalescer.request();
            }
            self.last_viewport = Some(viewport);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.ui_top_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.input_mode {
                self.ui_input_view(ui);
            } else {
                self.ui_reading_view(ui, ctx);
            }
        });

        self.ui_library_window(ctx);
        self.show_popup(ctx);

        // Wake up exactly when the next debounce deadline is due, and keep
        // polling for worker events while a request is in flight.
        if let Some(deadline) = self.coordinator.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        } else if self.coordinator.has_inflight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
