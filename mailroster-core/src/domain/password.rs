//! Password generation
//!
//! Generated passwords follow the template
//! `Adjective + Noun + Symbol + Year + "-" + NN`, for example
//! `CoralRiver#2025-07`. The shortest possible result is 15 characters, so
//! generated passwords always clear [`MIN_PASSWORD_LENGTH`].

use chrono::{Datelike, Local};

use crate::ports::RandomSource;

/// Minimum length for a password set by the user
pub const MIN_PASSWORD_LENGTH: usize = 12;

pub const ADJECTIVES: [&str; 20] = [
    "Blue", "Green", "Silver", "Golden", "Crimson",
    "Purple", "Azure", "Amber", "Emerald", "Ivory",
    "Scarlet", "Violet", "Copper", "Bronze", "Pearl",
    "Ruby", "Jade", "Topaz", "Coral", "Platinum",
];

pub const NOUNS: [&str; 20] = [
    "Sky", "Ocean", "Forest", "River", "Moon",
    "Star", "Cloud", "Fire", "Stone", "Leaf",
    "Wind", "Rain", "Snow", "Sun", "Wave",
    "Mountain", "Valley", "Lake", "Desert", "Meadow",
];

pub const SYMBOLS: [char; 9] = ['@', '#', '$', '&', '!', '*', '%', '+', '='];

/// Generates account passwords from the word lists
///
/// Owns the randomness source so that a whole session shares one injected
/// generator. The year defaults to the local calendar year; tests pin it with
/// [`PasswordGenerator::with_year`].
pub struct PasswordGenerator {
    rng: Box<dyn RandomSource>,
    year: Option<i32>,
}

impl PasswordGenerator {
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            year: None,
        }
    }

    /// Use a fixed year instead of the clock
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Generate a fresh password
    pub fn generate(&mut self) -> String {
        let adjective = ADJECTIVES[self.rng.next_below(ADJECTIVES.len())];
        let noun = NOUNS[self.rng.next_below(NOUNS.len())];
        let symbol = SYMBOLS[self.rng.next_below(SYMBOLS.len())];
        let digits = self.rng.next_below(100);
        let year = self.year.unwrap_or_else(|| Local::now().year());

        format!("{adjective}{noun}{symbol}{year}-{digits:02}")
    }
}

impl std::fmt::Debug for PasswordGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordGenerator")
            .field("year", &self.year)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of picks, wrapping into range
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn next_below(&mut self, bound: usize) -> usize {
            self.0.remove(0) % bound
        }
    }

    #[test]
    fn test_template_with_scripted_picks() {
        let mut generator = PasswordGenerator::new(Scripted(vec![0, 0, 0, 7])).with_year(2025);
        assert_eq!(generator.generate(), "BlueSky@2025-07");

        let mut generator = PasswordGenerator::new(Scripted(vec![19, 15, 8, 99])).with_year(2031);
        assert_eq!(generator.generate(), "PlatinumMountain=2031-99");
    }

    #[test]
    fn test_shortest_combination_clears_minimum() {
        let shortest_adjective = ADJECTIVES.iter().map(|w| w.len()).min().unwrap();
        let shortest_noun = NOUNS.iter().map(|w| w.len()).min().unwrap();
        // symbol + four-digit year + "-" + two digits
        let shortest = shortest_adjective + shortest_noun + 1 + 4 + 1 + 2;
        assert!(shortest >= MIN_PASSWORD_LENGTH);
    }

    #[test]
    fn test_uses_current_year_by_default() {
        let mut generator = PasswordGenerator::new(Scripted(vec![2, 3, 4, 5]));
        let password = generator.generate();
        let year = Local::now().year().to_string();
        assert_eq!(password, format!("SilverRiver!{year}-05"));
    }
}
