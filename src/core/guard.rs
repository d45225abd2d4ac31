//! Guard predicates for controlling screen transitions.
//!
//! Guards are pure boolean functions over the current screen. A transition
//! whose guard rejects the current screen is skipped.

use super::screen::Screen;

/// Pure predicate that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use roshambo::core::{Guard, Screen};
///
/// let still_open = Guard::new(|screen: &Screen| !screen.is_final());
///
/// assert!(still_open.check(&Screen::Welcome));
/// assert!(still_open.check(&Screen::Choice));
/// assert!(!still_open.check(&Screen::Closed));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&Screen) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Screen) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that admits every screen that is not final.
    pub fn not_final() -> Self {
        Self::new(|screen| !screen.is_final())
    }

    /// Check if the guard allows a transition from this screen.
    pub fn check(&self, screen: &Screen) -> bool {
        (self.predicate)(screen)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
