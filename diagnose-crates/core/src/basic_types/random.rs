use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::diagnose_assert_simple;

/// Abstraction for randomness, in order to swap out different sources of randomness.
///
/// The random conflict selector only depends on this trait, which allows tests to script the
/// exact sequence of choices through a deterministic implementation while regular runs use any
/// [`SeedableRng`].
pub trait Random: Debug {
    /// Generates a random usize in the provided range with equal probability; this can be seen as
    /// sampling from a uniform distribution in the range `[range.start, range.end)`.
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use diagnose_core::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let conflicts = vec!["{A, B}", "{A, C}", "{B, C}"];
    /// let selected_index = rng.generate_usize_in_range(0..conflicts.len());
    /// assert!(selected_index < conflicts.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

// Any "regular" random generator can be used where an implementation of Random is expected.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        diagnose_assert_simple!(
            !range.is_empty(),
            "Cannot sample from the empty range {range:?}"
        );
        self.gen_range(range)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use super::Random;
    use crate::diagnose_assert_simple;

    /// A test "random" generator which returns the provided `usizes` in order. Generating more
    /// values than were provided results in a panic.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
    }

    impl Random for TestRandom {
        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let selected = self.usizes.remove(0);
            diagnose_assert_simple!(
                range.contains(&selected),
                "The selected element by `TestRandom` ({selected}) is not in the provided range ({range:?}), please ensure that your test cases are correctly defined"
            );
            selected
        }
    }
}
