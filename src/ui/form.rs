//! Multi-step CV form
//!
//! Renders the active wizard step over the shared document. Widgets edit a
//! cloned value and route the result through the matching update operation,
//! so every change to the CV goes through one code path.

use eframe::egui;
use std::hash::Hash;

use crate::core::cv::{EducationField, ExperienceField, PersonalField};
use crate::core::editor::{EditorState, WizardStep};

use super::theme;

/// Wizard form panel
pub struct FormPanel;

impl FormPanel {
    /// Show the step selector, the active step and the navigation row
    pub fn show(ui: &mut egui::Ui, editor: &mut EditorState) {
        Self::step_selector(ui, editor);
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_salt("form_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                match editor.step {
                    WizardStep::Personal => Self::personal_step(ui, editor),
                    WizardStep::Experience => Self::experience_step(ui, editor),
                    WizardStep::Education => Self::education_step(ui, editor),
                    WizardStep::SkillsAwards => Self::skills_step(ui, editor),
                }

                ui.add_space(16.0);
                Self::step_nav(ui, editor);
            });
    }

    /// One clickable tab per step, current step highlighted
    fn step_selector(ui: &mut egui::Ui, editor: &mut EditorState) {
        let mut clicked = None;

        ui.columns(WizardStep::ALL.len(), |columns| {
            for (index, step) in WizardStep::ALL.into_iter().enumerate() {
                columns[index].vertical_centered(|ui| {
                    let selected = editor.step == step;
                    let label = format!("{} {}", step.icon(), step.title());
                    if ui.selectable_label(selected, label).clicked() {
                        clicked = Some(index);
                    }
                });
            }
        });

        if let Some(index) = clicked {
            editor.set_step(index);
        }
    }

    fn personal_step(ui: &mut egui::Ui, editor: &mut EditorState) {
        ui.label("Full Name");
        if let Some(value) =
            Self::text_field(ui, "full_name", "John Doe", &editor.cv.personal.full_name)
        {
            editor.cv.update_personal(PersonalField::FullName, value);
        }

        ui.label("Email");
        if let Some(value) =
            Self::text_field(ui, "email", "john@example.com", &editor.cv.personal.email)
        {
            editor.cv.update_personal(PersonalField::Email, value);
        }

        ui.label("Phone");
        if let Some(value) =
            Self::text_field(ui, "phone", "+1 (555) 123-4567", &editor.cv.personal.phone)
        {
            editor.cv.update_personal(PersonalField::Phone, value);
        }

        ui.label("Location");
        if let Some(value) =
            Self::text_field(ui, "location", "New York, NY", &editor.cv.personal.location)
        {
            editor.cv.update_personal(PersonalField::Location, value);
        }

        ui.label("Professional Summary");
        if let Some(value) = Self::multiline_field(
            ui,
            "summary",
            "Brief professional summary highlighting your key strengths and career objectives...",
            4,
            &editor.cv.personal.summary,
        ) {
            editor.cv.update_personal(PersonalField::Summary, value);
        }
    }

    fn experience_step(ui: &mut egui::Ui, editor: &mut EditorState) {
        for index in 0..editor.cv.experience.len() {
            ui.push_id(index, |ui| {
                Self::entry_card(ui, |ui| {
                    ui.strong(format!("Experience {}", index + 1));
                    ui.add_space(6.0);

                    let entry = editor.cv.experience[index].clone();

                    ui.columns(2, |columns| {
                        if let Some(value) = Self::text_field(
                            &mut columns[0],
                            "company",
                            "Company Name",
                            &entry.company,
                        ) {
                            editor
                                .cv
                                .update_experience(index, ExperienceField::Company, value);
                        }
                        if let Some(value) = Self::text_field(
                            &mut columns[1],
                            "position",
                            "Job Title",
                            &entry.position,
                        ) {
                            editor
                                .cv
                                .update_experience(index, ExperienceField::Position, value);
                        }
                    });

                    if let Some(value) =
                        Self::text_field(ui, "duration", "Jan 2020 - Present", &entry.duration)
                    {
                        editor
                            .cv
                            .update_experience(index, ExperienceField::Duration, value);
                    }

                    if let Some(value) = Self::multiline_field(
                        ui,
                        "description",
                        "Key responsibilities and achievements...",
                        3,
                        &entry.description,
                    ) {
                        editor
                            .cv
                            .update_experience(index, ExperienceField::Description, value);
                    }
                });
            });
            ui.add_space(10.0);
        }

        if Self::wide_button(ui, "+ Add Experience") {
            editor.cv.add_experience();
        }
    }

    fn education_step(ui: &mut egui::Ui, editor: &mut EditorState) {
        for index in 0..editor.cv.education.len() {
            ui.push_id(index, |ui| {
                Self::entry_card(ui, |ui| {
                    ui.strong(format!("Education {}", index + 1));
                    ui.add_space(6.0);

                    let entry = editor.cv.education[index].clone();

                    ui.columns(2, |columns| {
                        if let Some(value) = Self::text_field(
                            &mut columns[0],
                            "institution",
                            "University Name",
                            &entry.institution,
                        ) {
                            editor
                                .cv
                                .update_education(index, EducationField::Institution, value);
                        }
                        if let Some(value) = Self::text_field(
                            &mut columns[1],
                            "degree",
                            "Degree & Major",
                            &entry.degree,
                        ) {
                            editor
                                .cv
                                .update_education(index, EducationField::Degree, value);
                        }
                    });

                    ui.columns(2, |columns| {
                        if let Some(value) = Self::text_field(
                            &mut columns[0],
                            "year",
                            "Graduation Year",
                            &entry.year,
                        ) {
                            editor
                                .cv
                                .update_education(index, EducationField::Year, value);
                        }
                        if let Some(value) =
                            Self::text_field(&mut columns[1], "gpa", "GPA (optional)", &entry.gpa)
                        {
                            editor.cv.update_education(index, EducationField::Gpa, value);
                        }
                    });
                });
            });
            ui.add_space(10.0);
        }

        if Self::wide_button(ui, "+ Add Education") {
            editor.cv.add_education();
        }
    }

    fn skills_step(ui: &mut egui::Ui, editor: &mut EditorState) {
        ui.label(egui::RichText::new("Skills").strong().size(16.0));
        ui.add_space(6.0);

        if Self::staged_input(ui, "new_skill", "Add a skill...", &mut editor.new_skill) {
            editor.commit_skill();
        }
        ui.add_space(8.0);

        let mut removed = None;
        ui.horizontal_wrapped(|ui| {
            for (index, skill) in editor.cv.skills.iter().enumerate() {
                let pill = egui::Button::new(
                    egui::RichText::new(format!("{skill} \u{00D7}")).color(egui::Color32::WHITE),
                )
                .fill(theme::ACCENT)
                .corner_radius(10.0);
                if ui.add(pill).on_hover_text("Click to remove").clicked() {
                    removed = Some(index);
                }
            }
        });
        if let Some(index) = removed {
            editor.cv.remove_skill(index);
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Achievements").strong().size(16.0));
        ui.add_space(6.0);

        if Self::staged_input(
            ui,
            "new_achievement",
            "Add an achievement...",
            &mut editor.new_achievement,
        ) {
            editor.commit_achievement();
        }
        ui.add_space(8.0);

        let mut removed = None;
        for (index, achievement) in editor.cv.achievements.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(achievement);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("\u{2715}").clicked() {
                        removed = Some(index);
                    }
                });
            });
        }
        if let Some(index) = removed {
            editor.cv.remove_achievement(index);
        }
    }

    /// Previous on the left, Next on the right, disabled at the ends
    fn step_nav(ui: &mut egui::Ui, editor: &mut EditorState) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!editor.step.is_first(), egui::Button::new("Previous"))
                .clicked()
            {
                editor.prev_step();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!editor.step.is_last(), egui::Button::new("Next"))
                    .clicked()
                {
                    editor.next_step();
                }
            });
        });
    }

    /// Single-line input over a cloned value; Some(new_text) when edited
    /// this frame.
    fn text_field(
        ui: &mut egui::Ui,
        id: impl Hash,
        hint: &str,
        value: &str,
    ) -> Option<String> {
        let mut buffer = value.to_owned();
        let changed = ui
            .add(
                egui::TextEdit::singleline(&mut buffer)
                    .id_salt(id)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            )
            .changed();
        ui.add_space(8.0);
        changed.then_some(buffer)
    }

    fn multiline_field(
        ui: &mut egui::Ui,
        id: impl Hash,
        hint: &str,
        rows: usize,
        value: &str,
    ) -> Option<String> {
        let mut buffer = value.to_owned();
        let changed = ui
            .add(
                egui::TextEdit::multiline(&mut buffer)
                    .id_salt(id)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .desired_rows(rows),
            )
            .changed();
        ui.add_space(8.0);
        changed.then_some(buffer)
    }

    /// Input plus Add button for the staged skill/achievement text. True
    /// when Enter was pressed in the field or the button was clicked;
    /// Enter keeps focus so several items can be typed in a row.
    fn staged_input(ui: &mut egui::Ui, id: &str, hint: &str, buffer: &mut String) -> bool {
        let mut commit = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(buffer)
                    .id_salt(id)
                    .hint_text(hint)
                    .desired_width(ui.available_width() - 60.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                commit = true;
                response.request_focus();
            }
            if ui.button("Add").clicked() {
                commit = true;
            }
        });
        commit
    }

    fn entry_card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                add_contents(ui);
            });
    }

    fn wide_button(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                .fill(theme::ACCENT)
                .corner_radius(6.0),
        )
        .clicked()
    }
}
