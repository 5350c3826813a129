//! Pizza count estimation.

/// Slices in one pizza.
pub const SLICES_PER_PIZZA: u64 = 8;

/// How hungry the party is. Drives slices per person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HungerLevel {
    Light,
    #[default]
    Medium,
    Hungry,
    VeryHungry,
}

impl HungerLevel {
    /// All levels in radio-group order.
    pub const ALL: [HungerLevel; 4] = [
        HungerLevel::Light,
        HungerLevel::Medium,
        HungerLevel::Hungry,
        HungerLevel::VeryHungry,
    ];

    /// Resolve a label by exact match. Unknown labels, including case
    /// mismatches such as `"Very Hungry"`, fall back to [`HungerLevel::Medium`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Light" => HungerLevel::Light,
            "Medium" => HungerLevel::Medium,
            "Hungry" => HungerLevel::Hungry,
            "Very hungry" => HungerLevel::VeryHungry,
            _ => HungerLevel::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HungerLevel::Light => "Light",
            HungerLevel::Medium => "Medium",
            HungerLevel::Hungry => "Hungry",
            HungerLevel::VeryHungry => "Very hungry",
        }
    }

    pub fn slices_per_person(&self) -> u64 {
        match self {
            HungerLevel::Light => 2,
            HungerLevel::Medium => 3,
            HungerLevel::Hungry => 4,
            HungerLevel::VeryHungry => 5,
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|level| level == self).unwrap_or(1)
    }

    /// Next level in the radio group, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous level in the radio group, wrapping around.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Parse a headcount. Anything that is not a non-negative 32-bit signed
/// integer counts as zero people; no error is surfaced.
pub fn parse_headcount(input: &str) -> u64 {
    input
        .parse::<i32>()
        .ok()
        .and_then(|people| u64::try_from(people).ok())
        .unwrap_or(0)
}

/// Pizzas needed for `people` at the given hunger level, rounding partial
/// pizzas up.
pub fn pizzas_for(people: u64, level: HungerLevel) -> u64 {
    (people * level.slices_per_person()).div_ceil(SLICES_PER_PIZZA)
}

/// String-level entry point used by the pizza screen.
///
/// # Example
///
/// ```
/// use pizza_party::calc::calculate_pizza_count;
///
/// assert_eq!(calculate_pizza_count("10", "Hungry"), 5);
/// assert_eq!(calculate_pizza_count("abc", "Medium"), 0);
/// assert_eq!(calculate_pizza_count("1", "UnknownLevel"), 1);
/// ```
pub fn calculate_pizza_count(headcount: &str, hunger_level: &str) -> u64 {
    pizzas_for(parse_headcount(headcount), HungerLevel::from_label(hunger_level))
}
