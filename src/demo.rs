//! Demo content for the diet, gamification and nearby screens.
//!
//! Everything here is fixed sample data plus the few bits of arithmetic and
//! filtering the screens need on top of it.

use url::Url;

// ─── Diet ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Meal {
    pub id: &'static str,
    pub title: &'static str,
    pub calories: u32,
    pub items: Vec<&'static str>,
    pub logged: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Macro {
    pub label: &'static str,
    pub grams: u32,
    pub target_grams: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayChip {
    pub day: &'static str,
    pub date: u32,
}

/// One day of the diet diary.
#[derive(Debug, Clone)]
pub struct DietDay {
    pub goal: &'static str,
    pub preference: &'static str,
    pub calories_target: u32,
    pub meals: Vec<Meal>,
    pub macros: Vec<Macro>,
    pub week: Vec<DayChip>,
    pub selected_date: u32,
}

impl DietDay {
    pub fn sample() -> Self {
        Self {
            goal: "Muscle Gain",
            preference: "High Protein",
            calories_target: 2400,
            meals: vec![
                Meal {
                    id: "breakfast",
                    title: "Breakfast",
                    calories: 450,
                    items: vec!["Oatmeal & Berries", "2 Boiled Eggs"],
                    logged: true,
                },
                Meal {
                    id: "lunch",
                    title: "Lunch",
                    calories: 720,
                    items: vec!["Grilled Chicken Breast", "Quinoa Salad", "Avocado"],
                    logged: true,
                },
                Meal {
                    id: "snack",
                    title: "Afternoon Snack",
                    calories: 280,
                    items: vec!["Greek Yogurt", "Almonds"],
                    logged: true,
                },
                Meal {
                    id: "dinner",
                    title: "Dinner",
                    calories: 0,
                    items: Vec::new(),
                    logged: false,
                },
            ],
            macros: vec![
                Macro { label: "Protein", grams: 110, target_grams: 180 },
                Macro { label: "Carbs", grams: 140, target_grams: 220 },
                Macro { label: "Fats", grams: 45, target_grams: 70 },
            ],
            week: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .zip(24..)
                .map(|(day, date)| DayChip { day: *day, date })
                .collect(),
            selected_date: 27,
        }
    }

    /// Calories from logged meals.
    pub fn calories_consumed(&self) -> u32 {
        self.meals.iter().filter(|m| m.logged).map(|m| m.calories).sum()
    }

    /// Calories left; negative once over target.
    pub fn calories_left(&self) -> i64 {
        self.calories_target as i64 - self.calories_consumed() as i64
    }

    /// Share of the target consumed, capped at 1.
    pub fn progress(&self) -> f32 {
        if self.calories_target == 0 {
            return 1.0;
        }
        (self.calories_consumed() as f32 / self.calories_target as f32).min(1.0)
    }

    pub fn select_date(&mut self, date: u32) -> bool {
        if self.week.iter().any(|d| d.date == date) {
            self.selected_date = date;
            true
        } else {
            false
        }
    }
}

// ─── Gamification ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestIcon {
    Water,
    Steps,
    Cardio,
    Stand,
}

#[derive(Debug, Clone)]
pub struct Quest {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: QuestIcon,
    pub progress: f32,
    pub target: f32,
    pub unit: &'static str,
    pub completed: bool,
    pub streak: u32,
}

impl Quest {
    pub fn fraction(&self) -> f32 {
        if self.target <= 0.0 {
            return 1.0;
        }
        (self.progress / self.target).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub name: &'static str,
    pub chapter: &'static str,
    pub current_level: u32,
    pub total_levels: u32,
    pub today_mission: &'static str,
    pub difficulty: &'static str,
    pub loot: &'static str,
    pub streak_days: u32,
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub name: &'static str,
    pub title: &'static str,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub campaign: Campaign,
    pub quests: Vec<Quest>,
}

impl PlayerState {
    pub fn sample() -> Self {
        Self {
            name: "Alex The Great",
            title: "Consistency King",
            level: 5,
            xp: 650,
            xp_to_next: 1000,
            campaign: Campaign {
                name: "The Iron Fortress",
                chapter: "Chapter 1: Foundation",
                current_level: 12,
                total_levels: 30,
                today_mission: "Chest & Shoulders Siege",
                difficulty: "Medium",
                loot: "50 XP + Rare Badge",
                streak_days: 12,
            },
            quests: vec![
                Quest { id: 1, title: "Hydration Hero", subtitle: "Drink 2L Water", icon: QuestIcon::Water, progress: 1.5, target: 2.0, unit: "L", completed: false, streak: 12 },
                Quest { id: 2, title: "Step Master", subtitle: "10,000 Steps", icon: QuestIcon::Steps, progress: 6500.0, target: 10000.0, unit: "", completed: false, streak: 5 },
                Quest { id: 3, title: "Zone 2 Cardio", subtitle: "30 Mins Active", icon: QuestIcon::Cardio, progress: 30.0, target: 30.0, unit: "m", completed: true, streak: 21 },
                Quest { id: 4, title: "Stand Up", subtitle: "1 Hour Standing", icon: QuestIcon::Stand, progress: 45.0, target: 60.0, unit: "m", completed: false, streak: 3 },
            ],
        }
    }

    pub fn xp_fraction(&self) -> f32 {
        if self.xp_to_next == 0 {
            return 1.0;
        }
        (self.xp as f32 / self.xp_to_next as f32).min(1.0)
    }

    /// Flip a quest's completion. Returns the new state, `None` if unknown.
    pub fn toggle_quest(&mut self, id: u32) -> Option<bool> {
        let quest = self.quests.iter_mut().find(|q| q.id == id)?;
        quest.completed = !quest.completed;
        Some(quest.completed)
    }

    pub fn completed_quests(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }
}

// ─── Nearby ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    Gym,
    Park,
    Path,
}

impl PlaceKind {
    pub fn label(self) -> &'static str {
        match self {
            PlaceKind::Gym => "Gym",
            PlaceKind::Park => "Park",
            PlaceKind::Path => "Path",
        }
    }
}

/// Category chips on the nearby screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceFilter {
    All,
    Only(PlaceKind),
}

impl PlaceFilter {
    pub const CHIPS: [PlaceFilter; 4] = [
        PlaceFilter::All,
        PlaceFilter::Only(PlaceKind::Gym),
        PlaceFilter::Only(PlaceKind::Park),
        PlaceFilter::Only(PlaceKind::Path),
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlaceFilter::All => "All",
            PlaceFilter::Only(kind) => kind.label(),
        }
    }

    pub fn matches(self, kind: PlaceKind) -> bool {
        match self {
            PlaceFilter::All => true,
            PlaceFilter::Only(k) => k == kind,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Place {
    pub id: u32,
    pub name: &'static str,
    pub kind: PlaceKind,
    pub rating: f32,
    pub distance_km: f32,
    pub address: &'static str,
    /// Marker position on the stylised map, as fractions of its size
    pub map_pos: (f32, f32),
}

impl Place {
    pub fn reminder_message(&self) -> String {
        format!(
            "We'll remind you to hit {} tomorrow morning at 7:00 AM.",
            self.name
        )
    }

    /// Directions link for "Go Now".
    pub fn directions_url(&self) -> Result<Url, url::ParseError> {
        let destination = format!("{}, {}", self.name, self.address);
        Url::parse_with_params(
            "https://www.google.com/maps/dir/",
            &[("api", "1"), ("destination", destination.as_str())],
        )
    }
}

pub fn sample_places() -> Vec<Place> {
    vec![
        Place { id: 1, name: "Iron Paradise Gym", kind: PlaceKind::Gym, rating: 4.8, distance_km: 0.8, address: "124 Spartan Ave", map_pos: (0.40, 0.30) },
        Place { id: 2, name: "Riverfront Trail", kind: PlaceKind::Path, rating: 4.9, distance_km: 1.2, address: "Entrance at 5th St", map_pos: (0.70, 0.50) },
        Place { id: 3, name: "City Park Loop", kind: PlaceKind::Park, rating: 4.5, distance_km: 2.5, address: "Central District", map_pos: (0.25, 0.65) },
    ]
}

/// Places passing `filter`, in their original order.
pub fn filter_places(places: &[Place], filter: PlaceFilter) -> Vec<&Place> {
    places.iter().filter(|p| filter.matches(p.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_totals() {
        let day = DietDay::sample();
        assert_eq!(day.calories_consumed(), 1450);
        assert_eq!(day.calories_left(), 950);
        assert!((day.progress() - 1450.0 / 2400.0).abs() < 1e-6);
        assert_eq!(day.week.len(), 7);
        assert_eq!(day.week[3], DayChip { day: "Thu", date: 27 });
    }

    #[test]
    fn test_select_date() {
        let mut day = DietDay::sample();
        assert!(day.select_date(29));
        assert_eq!(day.selected_date, 29);
        assert!(!day.select_date(1));
        assert_eq!(day.selected_date, 29);
    }

    #[test]
    fn test_quest_toggle() {
        let mut player = PlayerState::sample();
        assert_eq!(player.completed_quests(), 1);
        assert_eq!(player.toggle_quest(1), Some(true));
        assert_eq!(player.toggle_quest(3), Some(false));
        assert_eq!(player.toggle_quest(99), None);
        assert_eq!(player.completed_quests(), 1);
        assert!((player.xp_fraction() - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_quest_fraction_capped() {
        let mut quest = PlayerState::sample().quests[0].clone();
        quest.progress = 5.0;
        assert_eq!(quest.fraction(), 1.0);
    }

    #[test]
    fn test_place_filter() {
        let places = sample_places();
        assert_eq!(filter_places(&places, PlaceFilter::All).len(), 3);
        let parks = filter_places(&places, PlaceFilter::Only(PlaceKind::Park));
        assert_eq!(parks.len(), 1);
        assert_eq!(parks[0].name, "City Park Loop");
    }

    #[test]
    fn test_directions_url() {
        let place = &sample_places()[0];
        let url = match place.directions_url() {
            Ok(u) => u,
            Err(e) => panic!("Expected a URL, got {}", e),
        };
        assert_eq!(url.host_str(), Some("www.google.com"));
        let dest = url
            .query_pairs()
            .find(|(k, _)| k == "destination")
            .map(|(_, v)| v.into_owned());
        assert_eq!(dest.as_deref(), Some("Iron Paradise Gym, 124 Spartan Ave"));
        assert!(place.reminder_message().contains("Iron Paradise Gym"));
    }
}
