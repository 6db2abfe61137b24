//! Resume preview panel
//!
//! Draws a [`ResumePreview`] as a white paper card: gradient header, then
//! the visible sections in order. All text colors are explicit because the
//! card ignores the surrounding theme.

use eframe::egui::{self, RichText};

use crate::core::cv::{EducationEntry, ExperienceEntry};
use crate::core::preview::{PreviewHeader, ResumePreview, Section};

use super::theme;

/// Paper-style preview of the projected resume
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the whole resume card
    pub fn show(ui: &mut egui::Ui, preview: &ResumePreview) {
        egui::Frame::new()
            .fill(theme::PAPER)
            .corner_radius(10.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                Self::header(ui, &preview.header);

                egui::Frame::new()
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        for section in &preview.sections {
                            Self::section(ui, section);
                            ui.add_space(14.0);
                        }
                    });
            });
    }

    /// Name and contact row over the gradient. The gradient is a mesh set
    /// into a placeholder shape so it ends up behind the text.
    fn header(ui: &mut egui::Ui, header: &PreviewHeader) {
        let background = ui.painter().add(egui::Shape::Noop);

        let inner = egui::Frame::new()
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(
                    RichText::new(&header.name)
                        .color(egui::Color32::WHITE)
                        .size(26.0)
                        .strong(),
                );

                if !header.contacts.is_empty() {
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        for contact in &header.contacts {
                            ui.label(
                                RichText::new(format!(
                                    "{} {}",
                                    contact.kind.icon(),
                                    contact.value
                                ))
                                .color(egui::Color32::WHITE)
                                .size(12.0),
                            );
                            ui.add_space(10.0);
                        }
                    });
                }
            });

        ui.painter().set(
            background,
            theme::gradient_shape(
                inner.response.rect,
                theme::GRADIENT_START,
                theme::GRADIENT_END,
            ),
        );
    }

    fn section(ui: &mut egui::Ui, section: &Section) {
        Self::section_title(ui, section.title());

        match section {
            Section::Summary(text) => {
                ui.label(RichText::new(text).color(theme::INK_BODY));
            }
            Section::Experience(entries) => {
                for entry in entries {
                    Self::experience_card(ui, entry);
                    ui.add_space(8.0);
                }
            }
            Section::Education(entries) => {
                for entry in entries {
                    Self::education_card(ui, entry);
                    ui.add_space(8.0);
                }
            }
            Section::Skills(skills) => {
                ui.horizontal_wrapped(|ui| {
                    for skill in skills {
                        Self::skill_pill(ui, skill);
                    }
                });
            }
            Section::Achievements(items) => {
                for item in items {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new("\u{1F3C6}").color(theme::AWARD_ICON).size(13.0),
                        );
                        ui.add(
                            egui::Label::new(RichText::new(item).color(theme::INK_BODY)).wrap(),
                        );
                    });
                    ui.add_space(2.0);
                }
            }
        }
    }

    /// Section heading with the 2px accent underline
    fn section_title(ui: &mut egui::Ui, title: &str) {
        ui.label(
            RichText::new(title)
                .color(theme::INK_HEADING)
                .size(18.0)
                .strong(),
        );
        ui.add_space(3.0);
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 2.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 0.0, theme::ACCENT);
        ui.add_space(8.0);
    }

    fn experience_card(ui: &mut egui::Ui, entry: &ExperienceEntry) {
        let inner = egui::Frame::new()
            .fill(theme::EXPERIENCE_CARD_BG)
            .inner_margin(egui::Margin {
                left: 12,
                right: 10,
                top: 8,
                bottom: 8,
            })
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        if !entry.position.is_empty() {
                            ui.label(
                                RichText::new(&entry.position)
                                    .color(theme::INK_HEADING)
                                    .size(15.0)
                                    .strong(),
                            );
                        }
                        if !entry.company.is_empty() {
                            ui.label(
                                RichText::new(&entry.company).color(theme::EXPERIENCE_ACCENT),
                            );
                        }
                    });
                    if !entry.duration.is_empty() {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                            Self::duration_badge(ui, &entry.duration);
                        });
                    }
                });

                if !entry.description.is_empty() {
                    ui.add_space(4.0);
                    ui.label(RichText::new(&entry.description).color(theme::INK_BODY));
                }
            });

        theme::paint_left_accent(ui.painter(), inner.response.rect, theme::EXPERIENCE_ACCENT);
    }

    fn education_card(ui: &mut egui::Ui, entry: &EducationEntry) {
        let inner = egui::Frame::new()
            .fill(theme::EDUCATION_CARD_BG)
            .inner_margin(egui::Margin {
                left: 12,
                right: 10,
                top: 8,
                bottom: 8,
            })
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        if !entry.degree.is_empty() {
                            ui.label(
                                RichText::new(&entry.degree)
                                    .color(theme::INK_HEADING)
                                    .size(15.0)
                                    .strong(),
                            );
                        }
                        if !entry.institution.is_empty() {
                            ui.label(
                                RichText::new(&entry.institution).color(theme::EDUCATION_ACCENT),
                            );
                        }
                    });
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        if !entry.year.is_empty() {
                            ui.label(
                                RichText::new(&entry.year).color(theme::INK_MUTED).size(12.0),
                            );
                        }
                        if !entry.gpa.is_empty() {
                            ui.label(
                                RichText::new(format!("GPA: {}", entry.gpa))
                                    .color(theme::INK_MUTED)
                                    .size(12.0),
                            );
                        }
                    });
                });
            });

        theme::paint_left_accent(ui.painter(), inner.response.rect, theme::EDUCATION_ACCENT);
    }

    fn duration_badge(ui: &mut egui::Ui, duration: &str) {
        egui::Frame::new()
            .fill(theme::BADGE_BG)
            .corner_radius(4.0)
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.label(RichText::new(duration).color(theme::INK_MUTED).size(11.0));
            });
    }

    fn skill_pill(ui: &mut egui::Ui, skill: &str) {
        egui::Frame::new()
            .fill(theme::ACCENT)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(8, 3))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(skill)
                        .color(egui::Color32::WHITE)
                        .size(12.0),
                );
            });
    }
}
