//! Pure projection of a CV record into the preview document
//!
//! The projection decides, once per render pass, which sections and entries
//! are visible. Both the on-screen renderer and the print serializer consume
//! the same [`ResumePreview`], so what the user sees and what gets printed
//! cannot disagree.

use crate::core::cv::{CvData, EducationEntry, ExperienceEntry};

/// Placeholder shown in the header when no name has been entered.
pub const NAME_PLACEHOLDER: &str = "Your Name";

/// A contact detail shown in the header, paired with its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn icon(self) -> &'static str {
        match self {
            ContactKind::Email => "\u{2709}",
            ContactKind::Phone => "\u{1F4DE}",
            ContactKind::Location => "\u{1F4CD}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

/// The header block: always present, with non-empty contacts only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHeader {
    /// Display name, already defaulted to [`NAME_PLACEHOLDER`] when empty.
    pub name: String,
    /// Name exactly as typed; stays empty until the user enters one. The
    /// print page title is built from this, not from the display name.
    pub raw_name: String,
    pub contacts: Vec<Contact>,
}

/// One visible section of the preview, in display order. Entry lists are
/// already filtered down to the entries that should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(Vec<String>),
    Achievements(Vec<String>),
}

impl Section {
    /// Fixed heading text, shared by screen and print.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Summary(_) => "Professional Summary",
            Section::Experience(_) => "Professional Experience",
            Section::Education(_) => "Education",
            Section::Skills(_) => "Skills",
            Section::Achievements(_) => "Achievements",
        }
    }
}

/// The read-only projection used for on-screen display and as the print
/// payload. Projecting the same record twice yields equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePreview {
    pub header: PreviewHeader,
    pub sections: Vec<Section>,
}

/// An experience entry renders only when it names a company or a position.
pub fn experience_visible(entry: &ExperienceEntry) -> bool {
    !entry.company.is_empty() || !entry.position.is_empty()
}

/// An education entry renders only when it names an institution or a degree.
pub fn education_visible(entry: &EducationEntry) -> bool {
    !entry.institution.is_empty() || !entry.degree.is_empty()
}

impl ResumePreview {
    /// Project the record into its visible form. Each section predicate is
    /// evaluated here and nowhere else.
    pub fn project(cv: &CvData) -> Self {
        let name = if cv.personal.full_name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            cv.personal.full_name.clone()
        };

        let mut contacts = Vec::new();
        if !cv.personal.email.is_empty() {
            contacts.push(Contact {
                kind: ContactKind::Email,
                value: cv.personal.email.clone(),
            });
        }
        if !cv.personal.phone.is_empty() {
            contacts.push(Contact {
                kind: ContactKind::Phone,
                value: cv.personal.phone.clone(),
            });
        }
        if !cv.personal.location.is_empty() {
            contacts.push(Contact {
                kind: ContactKind::Location,
                value: cv.personal.location.clone(),
            });
        }

        let mut sections = Vec::new();

        if !cv.personal.summary.is_empty() {
            sections.push(Section::Summary(cv.personal.summary.clone()));
        }

        let experience: Vec<ExperienceEntry> = cv
            .experience
            .iter()
            .filter(|e| experience_visible(e))
            .cloned()
            .collect();
        if !experience.is_empty() {
            sections.push(Section::Experience(experience));
        }

        let education: Vec<EducationEntry> = cv
            .education
            .iter()
            .filter(|e| education_visible(e))
            .cloned()
            .collect();
        if !education.is_empty() {
            sections.push(Section::Education(education));
        }

        if !cv.skills.is_empty() {
            sections.push(Section::Skills(cv.skills.clone()));
        }

        if !cv.achievements.is_empty() {
            sections.push(Section::Achievements(cv.achievements.clone()));
        }

        Self {
            header: PreviewHeader {
                name,
                raw_name: cv.personal.full_name.clone(),
                contacts,
            },
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cv::{EducationField, ExperienceField, PersonalField};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_record_projects_header_only() {
        let preview = ResumePreview::project(&CvData::default());
        assert_eq!(preview.header.name, NAME_PLACEHOLDER);
        assert!(preview.header.raw_name.is_empty());
        assert!(preview.header.contacts.is_empty());
        assert!(preview.sections.is_empty());
    }

    #[test]
    fn test_header_keeps_entered_name_and_nonempty_contacts() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::FullName, "Ada Lovelace");
        cv.update_personal(PersonalField::Phone, "+1 (555) 123-4567");

        let preview = ResumePreview::project(&cv);
        assert_eq!(preview.header.name, "Ada Lovelace");
        assert_eq!(preview.header.raw_name, "Ada Lovelace");
        assert_eq!(
            preview.header.contacts,
            vec![Contact {
                kind: ContactKind::Phone,
                value: "+1 (555) 123-4567".to_string(),
            }]
        );
    }

    #[test]
    fn test_contact_order_is_email_phone_location() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::Location, "London");
        cv.update_personal(PersonalField::Email, "ada@example.com");
        cv.update_personal(PersonalField::Phone, "555-0100");

        let preview = ResumePreview::project(&cv);
        let kinds: Vec<ContactKind> = preview.header.contacts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Phone, ContactKind::Location]
        );
    }

    #[test]
    fn test_all_blank_experience_entries_hide_the_section() {
        let mut cv = CvData::default();
        cv.add_experience();
        cv.update_experience(1, ExperienceField::Duration, "2020 - 2022");
        cv.update_experience(1, ExperienceField::Description, "did things");

        // Duration/description alone do not make an entry visible.
        let preview = ResumePreview::project(&cv);
        assert!(preview.sections.is_empty());
    }

    #[test]
    fn test_only_visible_experience_entries_survive_projection() {
        let mut cv = CvData::default();
        cv.add_experience();
        cv.add_experience();
        cv.update_experience(1, ExperienceField::Position, "Engineer");

        let preview = ResumePreview::project(&cv);
        assert_eq!(preview.sections.len(), 1);
        match &preview.sections[0] {
            Section::Experience(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].position, "Engineer");
            }
            other => panic!("expected experience section, got {other:?}"),
        }
    }

    #[test]
    fn test_education_visibility_keyed_on_institution_or_degree() {
        let mut cv = CvData::default();
        cv.update_education(0, EducationField::Year, "2019");
        assert!(ResumePreview::project(&cv).sections.is_empty());

        cv.update_education(0, EducationField::Institution, "MIT");
        let preview = ResumePreview::project(&cv);
        match &preview.sections[0] {
            Section::Education(entries) => assert_eq!(entries[0].institution, "MIT"),
            other => panic!("expected education section, got {other:?}"),
        }
    }

    #[test]
    fn test_summary_section_present_iff_nonempty() {
        let mut cv = CvData::default();
        assert!(ResumePreview::project(&cv).sections.is_empty());

        cv.update_personal(PersonalField::Summary, "Builds reliable systems.");
        let preview = ResumePreview::project(&cv);
        assert_eq!(
            preview.sections,
            vec![Section::Summary("Builds reliable systems.".to_string())]
        );
    }

    #[test]
    fn test_skills_and_achievements_preserve_order() {
        let mut cv = CvData::default();
        cv.add_skill("Rust");
        cv.add_skill("SQL");
        cv.add_achievement("Shipped v1.0");

        let preview = ResumePreview::project(&cv);
        assert_eq!(
            preview.sections,
            vec![
                Section::Skills(vec!["Rust".to_string(), "SQL".to_string()]),
                Section::Achievements(vec!["Shipped v1.0".to_string()]),
            ]
        );
    }

    #[test]
    fn test_sections_keep_fixed_order_when_all_present() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::Summary, "Summary.");
        cv.update_experience(0, ExperienceField::Company, "Initech");
        cv.update_education(0, EducationField::Degree, "BSc");
        cv.add_skill("Rust");
        cv.add_achievement("Award");

        let preview = ResumePreview::project(&cv);
        let titles: Vec<&str> = preview.sections.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Professional Summary",
                "Professional Experience",
                "Education",
                "Skills",
                "Achievements",
            ]
        );
    }

    #[test]
    fn test_projection_is_pure_and_repeatable() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::FullName, "Ada");
        cv.update_experience(0, ExperienceField::Company, "Analytical Engines");
        cv.add_skill("Mathematics");

        let first = ResumePreview::project(&cv);
        let second = ResumePreview::project(&cv);
        assert_eq!(first, second);
    }
}
