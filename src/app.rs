//! Main application state and UI coordination

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::editor::EditorState;
use crate::core::preview::ResumePreview;
use crate::export::printer;
use crate::ui::theme;
use crate::ui::{
    form::FormPanel, preview::PreviewPanel, settings::SettingsDialog, status::StatusNotice,
};

/// View mode for the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

/// Main application state
pub struct CvForgeApp {
    /// Wizard state plus the CV record being edited
    pub editor: EditorState,
    /// Current view mode
    pub view_mode: ViewMode,
    /// Application configuration
    pub config: AppConfig,
    /// Export settings dialog
    pub settings: SettingsDialog,
    /// Transient export feedback
    pub status: StatusNotice,
}

impl CvForgeApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_default();

        Self {
            editor: EditorState::new(),
            view_mode: ViewMode::default(),
            config,
            settings: SettingsDialog::default(),
            status: StatusNotice::default(),
        }
    }

    /// Project the current record and run the export pipeline, reporting
    /// the result in the status row.
    pub fn export_pdf(&mut self) {
        let preview = ResumePreview::project(&self.editor.cv);
        match printer::print_preview(&preview, &self.config.export) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.status.info(format!("Export ready: {name}"));
            }
            Err(err) => {
                tracing::error!("Export failed: {}", err);
                self.status.error(format!("Export failed: {err}"));
            }
        }
    }

    /// Render the banner with the settings shortcut and status row
    fn render_banner(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("banner").show(ctx, |ui| {
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("\u{2699} Settings").clicked() {
                        self.settings.open(&self.config.export);
                    }
                });
            });

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("\u{2728} Futuristic CV Generator")
                        .color(theme::ACCENT)
                        .size(24.0)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new("Create professional CVs with cutting-edge design")
                        .weak(),
                );
            });

            ui.add_space(4.0);
            self.status.show(ui);
            ui.add_space(4.0);
        });
    }

    /// Edit Mode / Preview tabs
    fn render_mode_toggle(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.view_mode == ViewMode::Edit, "\u{270F} Edit Mode")
                .clicked()
            {
                self.view_mode = ViewMode::Edit;
            }
            if ui
                .selectable_label(self.view_mode == ViewMode::Preview, "\u{1F441} Preview")
                .clicked()
            {
                self.view_mode = ViewMode::Preview;
            }
        });
    }

    /// Right half of the edit view: preview heading, download button and
    /// the scrolling resume card
    fn render_live_preview(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Live Preview").strong().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2B07} Download PDF").clicked() {
                    self.export_pdf();
                }
            });
        });
        ui.add_space(6.0);

        let preview = ResumePreview::project(&self.editor.cv);
        egui::ScrollArea::vertical()
            .id_salt("live_preview_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                PreviewPanel::show(ui, &preview);
            });
    }

    /// Full-width preview mode with the download button on top
    fn render_full_preview(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            if ui
                .button(egui::RichText::new("\u{2B07} Download CV as PDF").size(16.0))
                .clicked()
            {
                self.export_pdf();
            }
        });
        ui.add_space(8.0);

        let preview = ResumePreview::project(&self.editor.cv);
        egui::ScrollArea::vertical()
            .id_salt("full_preview_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let max_width = ui.available_width().min(820.0);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(max_width);
                    PreviewPanel::show(ui, &preview);
                });
            });
    }
}

impl eframe::App for CvForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts; Ctrl+P is ignored while the settings
        // dialog is open
        let print_requested = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::P));
        if print_requested && !self.settings.is_open() {
            self.export_pdf();
        }

        // Settings dialog; save edited values right away
        if let Some(export) = self.settings.show(ctx) {
            self.config.export = export;
            if let Err(err) = self.config.save() {
                tracing::error!("Failed to save config: {}", err);
            }
        }

        self.render_banner(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_mode_toggle(ui);
            ui.separator();
            ui.add_space(4.0);

            match self.view_mode {
                ViewMode::Edit => {
                    // Split view: form on the left, live preview on the right
                    let available_width = ui.available_width();
                    ui.horizontal(|ui| {
                        ui.set_min_width(available_width);

                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            FormPanel::show(ui, &mut self.editor);
                        });

                        ui.separator();

                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            self.render_live_preview(ui);
                        });
                    });
                }
                ViewMode::Preview => {
                    self.render_full_preview(ui);
                }
            }
        });
    }
}
