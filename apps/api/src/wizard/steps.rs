use serde::{Deserialize, Serialize};

/// Number of screens in the editing wizard.
pub const TOTAL_STEPS: u8 = 5;

/// One screen of the editing wizard, addressed by a 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Personal = 1,
    Summary = 2,
    Experience = 3,
    Education = 4,
    Skills = 5,
}

pub const ALL_STEPS: [WizardStep; TOTAL_STEPS as usize] = [
    WizardStep::Personal,
    WizardStep::Summary,
    WizardStep::Experience,
    WizardStep::Education,
    WizardStep::Skills,
];

impl WizardStep {
    /// Maps any integer onto a step, clamping to `[1, TOTAL_STEPS]`.
    pub fn clamped(n: i64) -> Self {
        let idx = n.clamp(1, TOTAL_STEPS as i64) as usize - 1;
        ALL_STEPS[idx]
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Info",
            WizardStep::Summary => "Description",
            WizardStep::Experience => "Experience",
            WizardStep::Education => "Education",
            WizardStep::Skills => "Skills",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Let's start with your basics.",
            WizardStep::Summary => "2-3 sentences about your career goals.",
            WizardStep::Experience => "Add your relevant work history. This section is optional.",
            WizardStep::Education => "Your academic background.",
            WizardStep::Skills => "List your key skills separated by commas.",
        }
    }

    pub fn next(&self) -> Self {
        Self::clamped(self.number() as i64 + 1)
    }

    pub fn previous(&self) -> Self {
        Self::clamped(self.number() as i64 - 1)
    }

    pub fn is_first(&self) -> bool {
        self.number() == 1
    }

    pub fn is_last(&self) -> bool {
        self.number() == TOTAL_STEPS
    }
}

/// Step metadata as shown in the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepInfo {
    pub number: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl From<WizardStep> for StepInfo {
    fn from(step: WizardStep) -> Self {
        StepInfo {
            number: step.number(),
            title: step.title(),
            subtitle: step.subtitle(),
            can_go_back: !step.is_first(),
            can_go_forward: !step.is_last(),
        }
    }
}
