//! Input view: paste text, tweak preferences, start reading.

use super::LukulasiApp;
use eframe::egui;

impl LukulasiApp {
    pub(crate) fn ui_input_view(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(format!(
            "Paste {} text below, then start reading. Hover or select words to translate.",
            self.source_lang.name()
        ));
        ui.add_space(8.0);

        let editor_height = (ui.available_height() - 80.0).max(160.0);
        let response = ui.add_sized(
            egui::vec2(ui.available_width(), editor_height),
            egui::TextEdit::multiline(&mut self.input_text)
                .hint_text("Enter text to read…")
                .desired_rows(10),
        );
        if response.changed() {
            self.store.save_input_text(&self.input_text);
        }

        ui.horizontal(|ui| {
            ui.weak(format!("{} characters", self.input_text.chars().count()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let start = ui.add_enabled(
                    !self.input_text.trim().is_empty(),
                    egui::Button::new("Start reading"),
                );
                if start.clicked() {
                    self.start_reading();
                }
                let mut auto_clean = self.auto_clean;
                if ui
                    .checkbox(&mut auto_clean, "Clear text when done")
                    .changed()
                {
                    self.auto_clean = auto_clean;
                    self.store.save_auto_clean(auto_clean);
                }
            });
        });
    }
}
