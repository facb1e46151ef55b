//! Reading view: word spans, hover tracking, and drag selection.

use super::util::{reading_lines, scroll_bucket};
use super::LukulasiApp;
use eframe::egui;
use lukulasi_core::selection::{SelectionAnchor, SelectionSnapshot, TrackerState};
use lukulasi_core::token::{range_text, TokenRange};

const WORD_SIZE: f32 = 17.0;
const PARAGRAPH_SPACING: f32 = 12.0;

impl LukulasiApp {
    pub(crate) fn ui_reading_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.word_rects.clear();

        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("reading_scroll")
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_scroll_restore.take() {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let lines = reading_lines(&self.tokens);
        let hovered_range = self.hover_highlight_range();
        let last_translated = self.last_translated;

        let mut word_rects: Vec<(usize, egui::Rect)> = Vec::new();
        let mut drag_started: Option<usize> = None;
        let mut clicked_word: Option<(usize, egui::Rect)> = None;

        let output = scroll.show(ui, |ui| {
            ui.add_space(8.0);
            for line in &lines {
                if line.words.is_empty() {
                    ui.add_space(PARAGRAPH_SPACING);
                    continue;
                }
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
                    for (index, word) in &line.words {
                        let mut text = egui::RichText::new(word).size(WORD_SIZE);
                        if hovered_range.is_some_and(|range| range.contains(*index)) {
                            text = text
                                .background_color(ui.visuals().selection.bg_fill)
                                .color(ui.visuals().strong_text_color());
                        } else if last_translated.is_some_and(|range| range.contains(*index)) {
                            text = text.background_color(ui.visuals().faint_bg_color);
                        }
                        let response = ui.add(
                            egui::Label::new(text).sense(egui::Sense::click_and_drag()),
                        );
                        word_rects.push((*index, response.rect));
                        if response.drag_started() {
                            drag_started = Some(*index);
                        }
                        if response.clicked() {
                            clicked_word = Some((*index, response.rect));
                        }
                    }
                });
            }
            ui.add_space(8.0);
        });

        self.word_rects = word_rects;
        self.reading_rect = Some(output.inner_rect);
        if let Some(index) = drag_started {
            self.drag_anchor_token = Some(index);
        }

        self.on_scroll_offset(output.state.offset.y);

        // A plain click is the touch surface: immediate lookup, no debounce.
        if let Some((index, rect)) = clicked_word {
            let word = self.word_content(index);
            let anchor = self.anchor_at(rect.center());
            if let Some(event) = self.tracker.touch_start(index, &word, anchor) {
                self.set_popup_anchor(rect);
                self.handle_tracker_event(event);
            }
        }

        self.process_pointer(ctx);
    }

    fn word_content(&self, index: usize) -> String {
        self.tokens
            .get(index)
            .map(|token| token.content.clone())
            .unwrap_or_default()
    }

    fn hover_highlight_range(&self) -> Option<TokenRange> {
        match self.tracker.state() {
            TrackerState::Hovering { range } => Some(*range),
            TrackerState::Selecting { range, .. } => *range,
            _ => None,
        }
    }

    fn anchor_at(&self, pos: egui::Pos2) -> SelectionAnchor {
        SelectionAnchor {
            in_reading_content: self
                .reading_rect
                .is_some_and(|rect| rect.contains(pos)),
            in_popup: self.popup_rect.is_some_and(|rect| rect.contains(pos)),
        }
    }

    pub(crate) fn set_popup_anchor(&mut self, rect: egui::Rect) {
        if self.popup_anchor != Some(rect) {
            self.popup_anchor = Some(rect);
            self.popup_geometry = None;
        }
    }

    fn on_scroll_offset(&mut self, offset: f32) {
        if (offset - self.last_scroll_offset).abs() <= f32::EPSILON {
            return;
        }
        self.last_scroll_offset = offset;
        // Scroll invalidates popup geometry only while one is shown.
        if self.popup_shown() {
            self.coalescer.request();
        }
        let bucket = scroll_bucket(offset);
        if self.last_saved_scroll != Some(bucket) {
            self.last_saved_scroll = Some(bucket);
            self.store.save_scroll_offset(offset);
        }
    }

    /// Derive hover and drag-selection signals from the pointer position
    /// against this frame's word rects.
    fn process_pointer(&mut self, ctx: &egui::Context) {
        let pointer = ctx.input(|i| i.pointer.hover_pos());
        let primary_down = ctx.input(|i| i.pointer.primary_down());
        let primary_clicked = ctx.input(|i| i.pointer.primary_clicked());

        let word_under_pointer = pointer.and_then(|pos| {
            self.word_rects
                .iter()
                .find(|(_, rect)| rect.contains(pos))
                .copied()
        });

        if let Some(start) = self.drag_anchor_token {
            if primary_down {
                if let (Some(pos), Some((index, rect))) = (pointer, word_under_pointer) {
                    let range = TokenRange::new(start, index);
                    let snapshot = SelectionSnapshot {
                        text: range_text(&self.tokens, range),
                        anchor: self.anchor_at(pos),
                        start_token: Some(start),
                        end_token: Some(index),
                    };
                    if let Some(event) = self.tracker.selection_changed(&snapshot) {
                        self.set_popup_anchor(rect);
                        self.handle_tracker_event(event);
                    }
                }
                return;
            }
            // Drag finished; the settled selection stays until cleared.
            self.drag_anchor_token = None;
            return;
        }

        let has_selection = matches!(
            self.tracker.state(),
            TrackerState::Selecting { .. } | TrackerState::SelectionTooLong
        );

        match word_under_pointer {
            Some((index, rect)) => {
                if let Some(pos) = pointer {
                    let word = self.word_content(index);
                    let anchor = self.anchor_at(pos);
                    if let Some(event) =
                        self.tracker.hover_enter(index, &word, anchor, has_selection)
                    {
                        self.set_popup_anchor(rect);
                        self.handle_tracker_event(event);
                    }
                }
            }
            None => {
                if let Some(event) = self.tracker.hover_leave() {
                    self.handle_tracker_event(event);
                }
                // Clicking empty reading area dismisses the selection.
                if primary_clicked && has_selection {
                    if let Some(pos) = pointer {
                        let anchor = self.anchor_at(pos);
                        if anchor.in_reading_content && !anchor.in_popup {
                            if let Some(event) = self.tracker.selection_cleared() {
                                self.handle_tracker_event(event);
                            }
                        }
                    }
                }
            }
        }
    }
}
