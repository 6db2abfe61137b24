//! Export settings dialog

use eframe::egui;

use crate::core::config::ExportConfig;

/// Modal window for the export settings. Edits go into a draft copy so
/// Cancel leaves the live config untouched.
#[derive(Default)]
pub struct SettingsDialog {
    visible: bool,
    draft: ExportConfig,
}

impl SettingsDialog {
    pub fn open(&mut self, current: &ExportConfig) {
        self.draft = current.clone();
        self.visible = true;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Returns the edited settings when the user clicks Save.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ExportConfig> {
        if !self.visible {
            return None;
        }

        let mut saved = None;
        let mut close = false;

        egui::Window::new("Export Settings")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.checkbox(
                    &mut self.draft.auto_print,
                    "Open the print dialog automatically",
                );

                ui.horizontal(|ui| {
                    ui.label("Print delay:");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.print_delay_ms)
                            .range(0..=5000)
                            .suffix(" ms"),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Keep exports:");
                    ui.add(egui::DragValue::new(&mut self.draft.keep_exports).range(1..=50));
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        saved = Some(self.draft.clone());
                        close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.visible = false;
        }

        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_copies_current_settings_into_draft() {
        let mut dialog = SettingsDialog::default();
        assert!(!dialog.is_open());

        let config = ExportConfig {
            auto_print: false,
            print_delay_ms: 900,
            keep_exports: 3,
        };
        dialog.open(&config);

        assert!(dialog.is_open());
        assert!(!dialog.draft.auto_print);
        assert_eq!(dialog.draft.print_delay_ms, 900);
        assert_eq!(dialog.draft.keep_exports, 3);
    }
}
