//! Multi-step onboarding form.
//!
//! Four steps, each checked before moving on:
//!
//! 1. basics: age, height, weight, sex
//! 2. lifestyle: job activity, sleep, stress, experience
//! 3. logistics: equipment (injuries optional)
//! 4. mission: goal, weekly training days

use crate::profile::{
    Equipment, Experience, FitnessProfile, Goal, Injury, JobActivity, ProfileDocument, Sex,
    SleepHours, StressLevel, TrainingDays,
};

pub const TOTAL_STEPS: u8 = 4;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OnboardingError {
    #[error("Please complete all fields to continue.")]
    Incomplete { step: u8 },
    #[error("{field} must be a positive number.")]
    InvalidNumber { field: &'static str },
    #[error("Already on the last step.")]
    LastStep,
}

/// Titles shown above each step.
pub fn step_title(step: u8) -> (&'static str, &'static str) {
    match step {
        1 => ("Step 1: The Hardware", "We need your specs to calculate baselines."),
        2 => ("Step 2: The Lifestyle", "This data powers our \"Burnout Prediction\" engine."),
        3 => ("Step 3: Logistics & Safety", "Inputs for the Computer Vision & Rec Engine."),
        _ => ("Step 4: The Mission", "Defining success parameters."),
    }
}

/// Form state. Text fields hold raw input; choices are unset until picked.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    step: u8,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub sex: Option<Sex>,
    pub job_activity: Option<JobActivity>,
    pub sleep: Option<SleepHours>,
    pub stress: Option<StressLevel>,
    pub experience: Option<Experience>,
    pub injuries: Vec<Injury>,
    pub equipment: Option<Equipment>,
    pub goal: Option<Goal>,
    pub training_days: Option<TrainingDays>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            step: 1,
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            sex: None,
            job_activity: None,
            sleep: None,
            stress: None,
            experience: None,
            injuries: Vec::new(),
            equipment: None,
            goal: None,
            training_days: None,
        }
    }
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, 1-based.
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    pub fn is_step_valid(&self) -> bool {
        let filled = |s: &str| !s.trim().is_empty();
        match self.step {
            1 => filled(&self.age) && filled(&self.height) && filled(&self.weight) && self.sex.is_some(),
            2 => {
                self.job_activity.is_some()
                    && self.sleep.is_some()
                    && self.stress.is_some()
                    && self.experience.is_some()
            }
            3 => self.equipment.is_some(),
            4 => self.goal.is_some() && self.training_days.is_some(),
            _ => false,
        }
    }

    pub fn next_step(&mut self) -> Result<u8, OnboardingError> {
        if self.is_last_step() {
            return Err(OnboardingError::LastStep);
        }
        if !self.is_step_valid() {
            return Err(OnboardingError::Incomplete { step: self.step });
        }
        self.step += 1;
        Ok(self.step)
    }

    /// Go back one step; stays on step 1.
    pub fn prev_step(&mut self) -> u8 {
        self.step = self.step.saturating_sub(1).max(1);
        self.step
    }

    pub fn toggle_injury(&mut self, injury: Injury) {
        if let Some(pos) = self.injuries.iter().position(|i| *i == injury) {
            self.injuries.remove(pos);
        } else {
            self.injuries.push(injury);
        }
    }

    /// Build the profile document for `user_id`. Only valid on the last step.
    pub fn finish(&self, user_id: &str) -> Result<ProfileDocument, OnboardingError> {
        if !self.is_last_step() || !self.is_step_valid() {
            return Err(OnboardingError::Incomplete { step: self.step });
        }
        let incomplete = |step| OnboardingError::Incomplete { step };

        let profile = FitnessProfile {
            age: parse_positive(&self.age, "Age")?.round() as u32,
            height_cm: parse_positive(&self.height, "Height")?,
            weight_kg: parse_positive(&self.weight, "Weight")?,
            sex: self.sex.ok_or_else(|| incomplete(1))?,
            job_activity: self.job_activity.ok_or_else(|| incomplete(2))?,
            sleep: self.sleep.ok_or_else(|| incomplete(2))?,
            stress: self.stress.ok_or_else(|| incomplete(2))?,
            experience: self.experience.ok_or_else(|| incomplete(2))?,
            injuries: self.injuries.clone(),
            equipment: self.equipment.ok_or_else(|| incomplete(3))?,
            goal: self.goal.ok_or_else(|| incomplete(4))?,
            training_days: self.training_days.ok_or_else(|| incomplete(4))?,
        };

        Ok(ProfileDocument {
            user_id: user_id.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            onboarding_completed: true,
            profile,
        })
    }
}

fn parse_positive(raw: &str, field: &'static str) -> Result<f32, OnboardingError> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(OnboardingError::InvalidNumber { field })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A form filled in through all four steps.
    pub(crate) fn completed_form() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.age = "25".into();
        form.height = "175".into();
        form.weight = "70".into();
        form.sex = Some(Sex::Female);
        assert_eq!(form.next_step(), Ok(2));
        form.job_activity = Some(JobActivity::Light);
        form.sleep = Some(SleepHours::SevenPlus);
        form.stress = Some(StressLevel::Medium);
        form.experience = Some(Experience::Beginner);
        assert_eq!(form.next_step(), Ok(3));
        form.equipment = Some(Equipment::Dumbbells);
        assert_eq!(form.next_step(), Ok(4));
        form.goal = Some(Goal::FatLoss);
        form.training_days = Some(TrainingDays::Three);
        form
    }

    #[test]
    fn test_step_one_requires_all_fields() {
        let mut form = ProfileForm::new();
        form.age = "25".into();
        form.height = "175".into();
        form.weight = "   ".into();
        form.sex = Some(Sex::Male);
        assert_eq!(form.next_step(), Err(OnboardingError::Incomplete { step: 1 }));
        assert_eq!(form.step(), 1);
    }

    #[test]
    fn test_injuries_are_optional() {
        let mut form = completed_form();
        assert!(form.injuries.is_empty());
        form.prev_step();
        assert_eq!(form.step(), 3);
        assert!(form.is_step_valid());
    }

    #[test]
    fn test_toggle_injury() {
        let mut form = ProfileForm::new();
        form.toggle_injury(Injury::Knees);
        form.toggle_injury(Injury::Wrists);
        form.toggle_injury(Injury::Knees);
        assert_eq!(form.injuries, vec![Injury::Wrists]);
    }

    #[test]
    fn test_prev_step_floor() {
        let mut form = ProfileForm::new();
        assert_eq!(form.prev_step(), 1);
    }

    #[test]
    fn test_finish_builds_document() {
        let form = completed_form();
        assert!(form.is_last_step());
        let doc = match form.finish("u1") {
            Ok(d) => d,
            Err(e) => panic!("Expected a document, got {}", e),
        };
        assert_eq!(doc.user_id, "u1");
        assert!(doc.onboarding_completed);
        assert_eq!(doc.profile.age, 25);
        assert_eq!(doc.profile.goal, Goal::FatLoss);
        assert!(chrono::DateTime::parse_from_rfc3339(&doc.created_at).is_ok());
    }

    #[test]
    fn test_finish_rejects_bad_numbers() {
        let mut form = completed_form();
        form.weight = "heavy".into();
        assert_eq!(
            form.finish("u1").err(),
            Some(OnboardingError::InvalidNumber { field: "Weight" })
        );
    }

    #[test]
    fn test_last_step_has_no_next() {
        let mut form = completed_form();
        assert_eq!(form.next_step(), Err(OnboardingError::LastStep));
    }
}
