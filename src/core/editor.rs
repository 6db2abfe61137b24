//! Form editor state: the CV record, the wizard position, and the
//! staging buffers for not-yet-committed skills and achievements

use crate::core::cv::CvData;

/// The four fixed wizard steps, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Personal,
    Experience,
    Education,
    SkillsAwards,
}

impl WizardStep {
    /// All steps in display order.
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Personal,
        WizardStep::Experience,
        WizardStep::Education,
        WizardStep::SkillsAwards,
    ];

    /// Position of this step in the sequence.
    pub fn index(self) -> usize {
        match self {
            WizardStep::Personal => 0,
            WizardStep::Experience => 1,
            WizardStep::Education => 2,
            WizardStep::SkillsAwards => 3,
        }
    }

    /// Step at `index`, clamped into the valid range. Direct step selection
    /// has no other guard, so the clamp lives here rather than in the UI.
    pub fn from_index(index: usize) -> Self {
        let clamped = index.min(Self::ALL.len() - 1);
        Self::ALL[clamped]
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Info",
            WizardStep::Experience => "Experience",
            WizardStep::Education => "Education",
            WizardStep::SkillsAwards => "Skills & Awards",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WizardStep::Personal => "\u{1F464}",
            WizardStep::Experience => "\u{1F4BC}",
            WizardStep::Education => "\u{1F393}",
            WizardStep::SkillsAwards => "\u{1F3C6}",
        }
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == Self::ALL.len() - 1
    }
}

/// Everything the form side of the application owns: the CV itself, the
/// current wizard step, and one staging buffer per committable list.
///
/// The staging buffers hold text the user has typed but not yet committed;
/// committing trims, appends on non-empty, and clears the buffer only when
/// something was actually appended.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cv: CvData,
    pub step: WizardStep,
    pub new_skill: String,
    pub new_achievement: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump directly to the step at `index` (clamped).
    pub fn set_step(&mut self, index: usize) {
        self.step = WizardStep::from_index(index);
    }

    /// Advance one step; a no-op on the last step.
    pub fn next_step(&mut self) {
        self.set_step(self.step.index() + 1);
    }

    /// Go back one step; a no-op on the first step.
    pub fn prev_step(&mut self) {
        self.set_step(self.step.index().saturating_sub(1));
    }

    /// Commit the skill staging buffer. Whitespace-only input is ignored
    /// and left in the buffer for the user to fix or clear.
    pub fn commit_skill(&mut self) {
        if self.cv.add_skill(&self.new_skill) {
            self.new_skill.clear();
        }
    }

    /// Commit the achievement staging buffer.
    pub fn commit_achievement(&mut self) {
        if self.cv.add_achievement(&self.new_achievement) {
            self.new_achievement.clear();
        }
    }
}
