//! Animated impact counters
//!
//! The hero-section counters: schools protected, students covered, incidents
//! resolved. Each climbs by a fixed step per 100ms tick toward its target,
//! and the animation self-cancels after 3 seconds. Display-only figures.

use std::time::Duration;

/// Tick interval for the counter animation
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Hard cap: the animation stops after this long regardless of progress
pub const ANIMATION_CAP: Duration = Duration::from_secs(3);

/// Counter targets (display figures, not measurements)
pub const TARGETS: Counters = Counters {
    schools: 2500,
    students: 150_000,
    incidents: 95,
};

/// Per-tick increments
const STEPS: Counters = Counters {
    schools: 50,
    students: 3000,
    incidents: 2,
};

/// Snapshot of the three counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub schools: u32,
    pub students: u32,
    pub incidents: u32,
}

impl Counters {
    /// All counters at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Advance one tick; counters never overshoot their targets
    pub fn step(&self) -> Counters {
        Counters {
            schools: (self.schools + STEPS.schools).min(TARGETS.schools),
            students: (self.students + STEPS.students).min(TARGETS.students),
            incidents: (self.incidents + STEPS.incidents).min(TARGETS.incidents),
        }
    }

    /// Whether every counter has reached its target
    pub fn is_done(&self) -> bool {
        *self == TARGETS
    }
}

/// Drive the animation, invoking `render` once per tick
///
/// Finishes when all targets are reached or [`ANIMATION_CAP`] elapses,
/// whichever comes first. Returns the final snapshot.
pub async fn animate<F: FnMut(&Counters)>(mut render: F) -> Counters {
    let mut state = Counters::zero();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    let deadline = tokio::time::Instant::now() + ANIMATION_CAP;

    while !state.is_done() && tokio::time::Instant::now() < deadline {
        ticker.tick().await;
        state = state.step();
        render(&state);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state() {
        let state = Counters::zero();
        assert_eq!(state.schools, 0);
        assert_eq!(state.students, 0);
        assert_eq!(state.incidents, 0);
        assert!(!state.is_done());
    }

    #[test]
    fn test_step_increments() {
        let state = Counters::zero().step();
        assert_eq!(state.schools, 50);
        assert_eq!(state.students, 3000);
        assert_eq!(state.incidents, 2);
    }

    #[test]
    fn test_counters_never_overshoot() {
        let mut state = Counters::zero();
        for _ in 0..100 {
            state = state.step();
            assert!(state.schools <= TARGETS.schools);
            assert!(state.students <= TARGETS.students);
            assert!(state.incidents <= TARGETS.incidents);
        }
    }

    #[test]
    fn test_pure_convergence_in_fifty_steps() {
        // Without the time cap, the slowest counter (schools, 2500 / 50)
        // converges in exactly 50 steps
        let mut state = Counters::zero();
        let mut ticks = 0;
        while !state.is_done() && ticks < 100 {
            state = state.step();
            ticks += 1;
        }
        assert!(state.is_done());
        assert_eq!(ticks, 50); // schools is the slowest counter
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_respects_cap() {
        let mut frames = 0;
        let start = tokio::time::Instant::now();
        let final_state = animate(|_| frames += 1).await;

        assert!(start.elapsed() <= ANIMATION_CAP + TICK_INTERVAL);
        assert!(frames > 0);
        // Whatever the cap allowed, nothing overshoots
        assert!(final_state.schools <= TARGETS.schools);
        assert!(final_state.students <= TARGETS.students);
        assert!(final_state.incidents <= TARGETS.incidents);
    }
}
