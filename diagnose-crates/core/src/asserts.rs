//! Assertion macros whose cost can be tuned through [`DIAGNOSE_ASSERT_LEVEL_DEFINITION`].
//!
//! Cheap checks use the `simple` level and are always active; checks which are linear (or worse)
//! in the size of the search state use the `moderate` level and are only enabled in tests or when
//! the `debug-checks` feature is active.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const DIAGNOSE_ASSERT_LEVEL_DEFINITION: u8 = DIAGNOSE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const DIAGNOSE_ASSERT_LEVEL_DEFINITION: u8 = DIAGNOSE_ASSERT_MODERATE;

pub const DIAGNOSE_ASSERT_SIMPLE: u8 = 1;
pub const DIAGNOSE_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! diagnose_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::DIAGNOSE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DIAGNOSE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! diagnose_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::DIAGNOSE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DIAGNOSE_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! diagnose_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::DIAGNOSE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DIAGNOSE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
