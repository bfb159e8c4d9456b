use super::ConflictSelector;
use crate::basic_types::ComponentSet;
use crate::basic_types::Random;

/// A [`ConflictSelector`] which selects an uncovered conflict uniformly at random.
///
/// The number of visited nodes depends on the choices made, the minimal hitting sets found do
/// not.
#[derive(Debug)]
pub struct RandomSelector {
    random: Box<dyn Random>,
}

impl RandomSelector {
    pub fn new(random: impl Random + 'static) -> Self {
        RandomSelector {
            random: Box::new(random),
        }
    }
}

impl ConflictSelector for RandomSelector {
    fn select(&mut self, uncovered: &[&ComponentSet]) -> usize {
        self.random.generate_usize_in_range(0..uncovered.len())
    }
}
