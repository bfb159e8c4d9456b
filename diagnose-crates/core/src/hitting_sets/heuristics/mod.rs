//! Strategies which decide on which uncovered conflict set the HS-tree branches.
//!
//! The set of heuristics is closed: a [`Heuristic`] is chosen once per search and turned into a
//! [`ConflictSelector`] which is then consulted at every expanded node.
mod most_frequent;
mod random;
mod smallest;

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

pub use most_frequent::MostFrequent;
pub use random::RandomSelector;
use rand::rngs::SmallRng;
use rand::SeedableRng;
pub use smallest::Smallest;

use crate::basic_types::ComponentSet;
use crate::basic_types::DiagnosisError;

/// Selects the conflict set to branch on.
pub trait ConflictSelector: Debug {
    /// Returns the index (into `uncovered`) of the selected conflict set.
    ///
    /// `uncovered` contains the conflict sets which are not hit by the path of the expanded node,
    /// in the order in which they were provided to the search; it is never empty.
    fn select(&mut self, uncovered: &[&ComponentSet]) -> usize;
}

/// The available conflict selection heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Heuristic {
    /// Branch on the uncovered conflict with the fewest components.
    #[default]
    Smallest,
    /// Branch on the first uncovered conflict containing the component which occurs most often
    /// among the uncovered conflicts.
    #[cfg_attr(feature = "clap", value(name = "most_frequent"))]
    MostFrequent,
    /// Branch on an uncovered conflict chosen uniformly at random.
    Random,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Smallest, Heuristic::MostFrequent, Heuristic::Random];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Smallest => "smallest",
            Heuristic::MostFrequent => "most_frequent",
            Heuristic::Random => "random",
        }
    }

    /// Creates the selector of this heuristic. The random selector is seeded with `random_seed`,
    /// or from system entropy if no seed is given.
    pub fn create_selector(self, random_seed: Option<u64>) -> Box<dyn ConflictSelector> {
        match self {
            Heuristic::Smallest => Box::new(Smallest),
            Heuristic::MostFrequent => Box::new(MostFrequent),
            Heuristic::Random => {
                let rng = match random_seed {
                    Some(seed) => SmallRng::seed_from_u64(seed),
                    None => SmallRng::from_entropy(),
                };
                Box::new(RandomSelector::new(rng))
            }
        }
    }
}

impl FromStr for Heuristic {
    type Err = DiagnosisError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|heuristic| heuristic.name() == name)
            .ok_or_else(|| DiagnosisError::UnknownHeuristic(name.to_owned()))
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
