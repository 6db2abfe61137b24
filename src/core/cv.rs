//! The CV record being edited and the operations that mutate it

/// Personal contact and summary block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

/// One entry in the education history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub gpa: String,
}

/// Addressable attributes of [`PersonalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Summary,
}

/// Addressable attributes of [`ExperienceEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

/// Addressable attributes of [`EducationEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    Year,
    Gpa,
}

/// The full in-memory CV for the current session.
///
/// Lives exclusively in the editor state; the preview only ever sees a
/// shared reference. Nothing here is persisted: the record starts from
/// [`CvData::default`] and is dropped when the application exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvData {
    pub personal: PersonalInfo,
    /// Work history in display order. Starts with one blank entry and only
    /// ever grows; there is no removal operation for it.
    pub experience: Vec<ExperienceEntry>,
    /// Education in display order. Same growth-only rule as `experience`.
    pub education: Vec<EducationEntry>,
    /// Committed skills, trimmed and non-empty, in insertion order.
    pub skills: Vec<String>,
    /// Committed achievements, trimmed and non-empty, in insertion order.
    pub achievements: Vec<String>,
}

impl Default for CvData {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            skills: Vec::new(),
            achievements: Vec::new(),
        }
    }
}

impl CvData {
    /// Replace one attribute of the personal block.
    pub fn update_personal(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalField::FullName => self.personal.full_name = value,
            PersonalField::Email => self.personal.email = value,
            PersonalField::Phone => self.personal.phone = value,
            PersonalField::Location => self.personal.location = value,
            PersonalField::Summary => self.personal.summary = value,
        }
    }

    /// Replace one attribute of the experience entry at `index`.
    /// An out-of-range index is a silent no-op.
    pub fn update_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) {
        let Some(entry) = self.experience.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            ExperienceField::Company => entry.company = value,
            ExperienceField::Position => entry.position = value,
            ExperienceField::Duration => entry.duration = value,
            ExperienceField::Description => entry.description = value,
        }
    }

    /// Replace one attribute of the education entry at `index`.
    /// An out-of-range index is a silent no-op.
    pub fn update_education(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) {
        let Some(entry) = self.education.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            EducationField::Institution => entry.institution = value,
            EducationField::Degree => entry.degree = value,
            EducationField::Year => entry.year = value,
            EducationField::Gpa => entry.gpa = value,
        }
    }

    /// Append a blank experience entry. Always succeeds; blank entries are
    /// valid list members and simply never show up in the preview.
    pub fn add_experience(&mut self) {
        self.experience.push(ExperienceEntry::default());
    }

    /// Append a blank education entry. Always succeeds.
    pub fn add_education(&mut self) {
        self.education.push(EducationEntry::default());
    }

    /// Commit a skill. The raw input is trimmed; whitespace-only input
    /// appends nothing. Returns whether something was appended, so the
    /// caller knows whether to clear its staging buffer.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.skills.push(trimmed.to_string());
        true
    }

    /// Commit an achievement. Same trim-and-non-empty gate as [`add_skill`].
    ///
    /// [`add_skill`]: CvData::add_skill
    pub fn add_achievement(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.achievements.push(trimmed.to_string());
        true
    }

    /// Remove the skill at `index`, keeping the order of the rest.
    /// An out-of-range index leaves the list unchanged.
    pub fn remove_skill(&mut self, index: usize) {
        if index < self.skills.len() {
            self.skills.remove(index);
        }
    }

    /// Remove the achievement at `index`. Same bounds rule as
    /// [`remove_skill`](CvData::remove_skill).
    pub fn remove_achievement(&mut self, index: usize) {
        if index < self.achievements.len() {
            self.achievements.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_has_one_blank_entry_per_history() {
        let cv = CvData::default();
        assert_eq!(cv.experience, vec![ExperienceEntry::default()]);
        assert_eq!(cv.education, vec![EducationEntry::default()]);
        assert!(cv.skills.is_empty());
        assert!(cv.achievements.is_empty());
    }

    #[test]
    fn test_update_personal_touches_exactly_one_field() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::Email, "ada@example.com");

        let mut expected = CvData::default();
        expected.personal.email = "ada@example.com".to_string();
        assert_eq!(cv, expected);
    }

    #[test]
    fn test_update_personal_overwrites_previous_value() {
        let mut cv = CvData::default();
        cv.update_personal(PersonalField::FullName, "Ada");
        cv.update_personal(PersonalField::FullName, "Ada Lovelace");
        assert_eq!(cv.personal.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_update_experience_targets_entry_by_index() {
        let mut cv = CvData::default();
        cv.add_experience();
        cv.update_experience(1, ExperienceField::Position, "Engineer");

        assert_eq!(cv.experience[0], ExperienceEntry::default());
        assert_eq!(cv.experience[1].position, "Engineer");
        assert_eq!(cv.experience[1].company, "");
    }

    #[test]
    fn test_update_experience_out_of_range_is_noop() {
        let mut cv = CvData::default();
        cv.update_experience(5, ExperienceField::Company, "Initech");
        assert_eq!(cv, CvData::default());
    }

    #[test]
    fn test_update_education_targets_entry_by_index() {
        let mut cv = CvData::default();
        cv.update_education(0, EducationField::Degree, "BSc Mathematics");
        cv.update_education(0, EducationField::Gpa, "3.9");
        assert_eq!(cv.education[0].degree, "BSc Mathematics");
        assert_eq!(cv.education[0].gpa, "3.9");
        assert_eq!(cv.education[0].institution, "");
    }

    #[test]
    fn test_add_experience_appends_blank_entry() {
        let mut cv = CvData::default();
        cv.update_experience(0, ExperienceField::Company, "Initech");
        cv.add_experience();

        assert_eq!(cv.experience.len(), 2);
        assert_eq!(cv.experience[1], ExperienceEntry::default());
        assert_eq!(cv.experience[0].company, "Initech");
    }

    #[test]
    fn test_add_education_appends_blank_entry() {
        let mut cv = CvData::default();
        cv.add_education();
        cv.add_education();
        assert_eq!(cv.education.len(), 3);
        assert!(cv.education.iter().all(|e| *e == EducationEntry::default()));
    }

    #[test]
    fn test_add_skill_trims_before_append() {
        let mut cv = CvData::default();
        assert!(cv.add_skill("Go "));
        assert_eq!(cv.skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_add_skill_rejects_whitespace_only() {
        let mut cv = CvData::default();
        assert!(!cv.add_skill(""));
        assert!(!cv.add_skill("   "));
        assert!(cv.skills.is_empty());
    }

    #[test]
    fn test_add_skill_keeps_duplicates_and_order() {
        let mut cv = CvData::default();
        cv.add_skill("Rust");
        cv.add_skill("SQL");
        cv.add_skill("Rust");
        assert_eq!(cv.skills, vec!["Rust", "SQL", "Rust"]);
    }

    #[test]
    fn test_remove_skill_preserves_order_of_rest() {
        let mut cv = CvData::default();
        cv.add_skill("Rust");
        cv.add_skill("SQL");
        cv.add_skill("Kubernetes");
        cv.remove_skill(1);
        assert_eq!(cv.skills, vec!["Rust", "Kubernetes"]);
    }

    #[test]
    fn test_remove_skill_out_of_range_is_noop() {
        let mut cv = CvData::default();
        cv.add_skill("Rust");
        cv.remove_skill(7);
        assert_eq!(cv.skills, vec!["Rust"]);
    }

    #[test]
    fn test_remove_achievement_mirrors_skill_semantics() {
        let mut cv = CvData::default();
        cv.add_achievement("Shipped v1.0");
        cv.add_achievement("Patent #1234");
        cv.remove_achievement(0);
        assert_eq!(cv.achievements, vec!["Patent #1234"]);
        cv.remove_achievement(10);
        assert_eq!(cv.achievements, vec!["Patent #1234"]);
    }
}
