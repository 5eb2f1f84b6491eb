//! Seeded random action lists.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use strip_core::{Action, ActionCategory};

const TITLES: [&str; 4] = ["", "Reply", "Navigate", "Call"];

/// Generates random action lists from a fixed seed, so failures reproduce.
pub struct ActionGen {
    rng: StdRng,
    max_len: usize,
    title_chance: f64,
}

impl ActionGen {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_len: 6,
            title_chance: 0.3,
        }
    }

    /// Longest list generated (inclusive).
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Probability that an action gets a title (the title may still be empty).
    pub fn title_chance(mut self, chance: f64) -> Self {
        self.title_chance = chance;
        self
    }

    pub fn action(&mut self) -> Action {
        let category = *ActionCategory::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ActionCategory::Custom);
        let action = Action::new(category);
        if self.rng.gen_bool(self.title_chance) {
            let title = TITLES.choose(&mut self.rng).copied().unwrap_or_default();
            action.with_title(title)
        } else {
            action
        }
    }

    pub fn actions(&mut self) -> Vec<Action> {
        let len = self.rng.gen_range(0..=self.max_len);
        (0..len).map(|_| self.action()).collect()
    }

    /// A random reordering of `actions`.
    pub fn shuffled(&mut self, actions: &[Action]) -> Vec<Action> {
        let mut shuffled = actions.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_lists() {
        let mut a = ActionGen::new(7);
        let mut b = ActionGen::new(7);

        for _ in 0..20 {
            assert_eq!(a.actions(), b.actions());
        }
    }

    #[test]
    fn test_max_len_respected() {
        let mut generator = ActionGen::new(1).max_len(2);

        for _ in 0..50 {
            assert!(generator.actions().len() <= 2);
        }
    }
}
