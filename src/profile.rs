//! Fitness profile: onboarding answers, the stored document, and the small
//! derived values the screens show (BMI, goal text, display name).

/// Declares a closed set of answer options with a storage slug and a label.
macro_rules! answer_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($slug:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value stored in the profile document.
            pub fn slug(self) -> &'static str {
                match self {
                    $($name::$variant => $slug),+
                }
            }

            /// Text shown on the option button.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_slug(slug: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.slug() == slug)
            }
        }
    };
}

answer_enum!(Sex {
    Male => ("male", "Male"),
    Female => ("female", "Female"),
});

answer_enum!(JobActivity {
    Sedentary => ("sedentary", "Sedentary (Desk Job)"),
    Light => ("light", "Lightly Active (Walking/Standing)"),
    Heavy => ("heavy", "Heavy Labor (Construction/Physical)"),
});

answer_enum!(SleepHours {
    UnderFive => ("<5", "< 5h"),
    FiveToSeven => ("5-7", "5-7h"),
    SevenPlus => ("7+", "7h+"),
});

answer_enum!(StressLevel {
    Low => ("low", "Low"),
    Medium => ("medium", "Med"),
    High => ("high", "High"),
});

answer_enum!(Experience {
    Beginner => ("beginner", "Beginner (0-1 Years)"),
    Intermediate => ("intermediate", "Intermediate (1-3 Years)"),
    Advanced => ("advanced", "Advanced (3+ Years)"),
});

answer_enum!(Equipment {
    Gym => ("gym", "Full Commercial Gym"),
    Dumbbells => ("dumbbells", "Dumbbells / Home Gym"),
    Bodyweight => ("bodyweight", "Bodyweight Only"),
});

answer_enum!(Injury {
    Knees => ("Knees", "Knees"),
    LowerBack => ("Lower Back", "Lower Back"),
    Shoulders => ("Shoulders", "Shoulders"),
    Wrists => ("Wrists", "Wrists"),
});

answer_enum!(Goal {
    Muscle => ("muscle", "Hypertrophy (Muscle Gain)"),
    FatLoss => ("fat_loss", "Fat Loss (Cutting)"),
    Strength => ("strength", "Strength & Power"),
    Athletic => ("athletic", "General Athleticism"),
});

answer_enum!(TrainingDays {
    Two => ("2", "2 Days"),
    Three => ("3", "3 Days"),
    FourPlus => ("4+", "4+ Days"),
});

/// Completed onboarding answers.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessProfile {
    pub age: u32,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub sex: Sex,
    pub job_activity: JobActivity,
    pub sleep: SleepHours,
    pub stress: StressLevel,
    pub experience: Experience,
    pub injuries: Vec<Injury>,
    pub equipment: Equipment,
    pub goal: Goal,
    pub training_days: TrainingDays,
}

impl FitnessProfile {
    pub fn bmi(&self) -> Option<f32> {
        bmi(self.weight_kg, self.height_cm)
    }
}

/// The per-user document written at the end of onboarding.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDocument {
    pub user_id: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub onboarding_completed: bool,
    pub profile: FitnessProfile,
}

// ─── Derived values ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Category for a BMI value (rounded to one decimal first).
    pub fn of(bmi: f32) -> Self {
        let bmi = (bmi * 10.0).round() / 10.0;
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Healthy
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Body-mass index; `None` for a non-positive height.
pub fn bmi(weight_kg: f32, height_cm: f32) -> Option<f32> {
    if height_cm <= 0.0 {
        return None;
    }
    let m = height_cm / 100.0;
    Some(weight_kg / (m * m))
}

/// `fat_loss` → `Fat Loss`.
pub fn format_goal(slug: &str) -> String {
    slug.split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greeting name from an email's local part: `alex.r@x.io` → `Alex.r`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        return "Athlete".to_string();
    }
    capitalize(local)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_and_category() {
        let value = bmi(75.0, 180.0).unwrap();
        assert!((value - 23.15).abs() < 0.01);
        assert_eq!(BmiCategory::of(value), BmiCategory::Healthy);
        assert_eq!(BmiCategory::of(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::of(24.96), BmiCategory::Overweight);
        assert_eq!(BmiCategory::of(30.0).label(), "Obese");
        assert!(bmi(70.0, 0.0).is_none());
    }

    #[test]
    fn test_format_goal() {
        assert_eq!(format_goal("fat_loss"), "Fat Loss");
        assert_eq!(format_goal("muscle"), "Muscle");
        assert_eq!(format_goal(Goal::Athletic.slug()), "Athletic");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name_from_email("alex@example.com"), "Alex");
        assert_eq!(display_name_from_email("@example.com"), "Athlete");
    }

    #[test]
    fn test_slug_roundtrip() {
        for goal in Goal::ALL {
            assert_eq!(Goal::from_slug(goal.slug()), Some(*goal));
        }
        assert_eq!(SleepHours::from_slug("7+"), Some(SleepHours::SevenPlus));
        assert_eq!(Equipment::from_slug("boat"), None);
    }
}
