//=========================================================================
// Fixed-Step Scheduler
//=========================================================================
//
// Decouples simulation rate from frame rate.
//
// Each host frame calls `tick(now)`. The scheduler runs as many whole
// step intervals as have elapsed since the last step boundary and moves
// the boundary forward by exactly that many intervals:
//
// ```text
//   last_step        now
//      │◄── 250 ──►│◄── 250 ──►│◄─ 180 ─►│
//      step         step        (kept for next tick)
// ```
//
// The boundary advances by `interval`, never to `now`, so delayed frames
// catch up instead of drifting.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Instant;

//=== Internal Dependencies ===============================================

use super::simulation::FixedUpdate;

//=== MonotonicClock ======================================================

/// Millisecond clock starting at zero when constructed.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Milliseconds elapsed since construction.
    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

//=== FixedStepScheduler ==================================================

/// Runs a `FixedUpdate` target once per elapsed interval.
///
/// The scheduler is either idle (less than one interval pending) or
/// catching up (running queued steps inside `tick`). It never blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStepScheduler {
    interval_ms: u64,
    last_step_ms: u64,
}

impl FixedStepScheduler {
    //--- Construction -----------------------------------------------------

    /// Creates a scheduler whose first step boundary is `start_ms`.
    ///
    /// # Panics
    ///
    /// Panics if `interval_ms == 0`.
    pub fn new(interval_ms: u64, start_ms: u64) -> Self {
        assert!(interval_ms > 0, "Step interval must be positive");
        Self {
            interval_ms,
            last_step_ms: start_ms,
        }
    }

    //--- Ticking ----------------------------------------------------------

    /// Runs every whole interval elapsed up to `now_ms`.
    ///
    /// Returns the number of steps executed (zero while idle). A `now_ms`
    /// earlier than the last boundary runs nothing.
    pub fn tick<T: FixedUpdate + ?Sized>(&mut self, now_ms: u64, target: &mut T) -> u32 {
        let mut steps = 0;

        while now_ms.saturating_sub(self.last_step_ms) >= self.interval_ms {
            target.fixed_update();
            self.last_step_ms += self.interval_ms;
            steps += 1;
        }

        steps
    }

    //--- Accessors --------------------------------------------------------

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Timestamp of the most recent step boundary.
    pub fn last_step_ms(&self) -> u64 {
        self.last_step_ms
    }

    /// Time left until the next step is due, relative to `now_ms`.
    pub fn until_next_step(&self, now_ms: u64) -> u64 {
        (self.last_step_ms + self.interval_ms).saturating_sub(now_ms)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        steps: u32,
    }

    impl FixedUpdate for Counter {
        fn fixed_update(&mut self) {
            self.steps += 1;
        }
    }

    #[test]
    fn catches_up_whole_intervals() {
        let mut scheduler = FixedStepScheduler::new(250, 0);
        let mut counter = Counter::default();

        assert_eq!(scheduler.tick(1000, &mut counter), 4);
        assert_eq!(counter.steps, 4);
        assert_eq!(scheduler.last_step_ms(), 1000);
    }

    #[test]
    fn keeps_remainder_instead_of_resetting_to_now() {
        let mut scheduler = FixedStepScheduler::new(250, 0);
        let mut counter = Counter::default();

        assert_eq!(scheduler.tick(999, &mut counter), 3);
        assert_eq!(scheduler.last_step_ms(), 750);
        assert_eq!(scheduler.until_next_step(999), 1);

        // The leftover 249ms counts toward the next step.
        assert_eq!(scheduler.tick(1000, &mut counter), 1);
        assert_eq!(scheduler.last_step_ms(), 1000);
        assert_eq!(counter.steps, 4);
    }

    #[test]
    fn idle_before_first_interval() {
        let mut scheduler = FixedStepScheduler::new(250, 100);
        let mut counter = Counter::default();

        assert_eq!(scheduler.tick(100, &mut counter), 0);
        assert_eq!(scheduler.tick(349, &mut counter), 0);
        assert_eq!(counter.steps, 0);
        assert_eq!(scheduler.last_step_ms(), 100);

        assert_eq!(scheduler.tick(350, &mut counter), 1);
        assert_eq!(scheduler.last_step_ms(), 350);
    }

    #[test]
    fn clock_going_backwards_runs_nothing() {
        let mut scheduler = FixedStepScheduler::new(250, 1000);
        let mut counter = Counter::default();

        assert_eq!(scheduler.tick(10, &mut counter), 0);
        assert_eq!(scheduler.last_step_ms(), 1000);
    }

    #[test]
    fn frame_rate_does_not_change_step_count() {
        let mut fast = FixedStepScheduler::new(250, 0);
        let mut slow = FixedStepScheduler::new(250, 0);
        let (mut a, mut b) = (Counter::default(), Counter::default());

        for now in (0..=5000).step_by(16) {
            fast.tick(now, &mut a);
        }
        for now in (0..=5000).step_by(700) {
            slow.tick(now, &mut b);
        }
        slow.tick(4992, &mut b);

        assert_eq!(a.steps, 19);
        assert_eq!(a.steps, b.steps);
    }

    #[test]
    #[should_panic(expected = "Step interval must be positive")]
    fn zero_interval_panics() {
        FixedStepScheduler::new(0, 0);
    }

    #[test]
    fn monotonic_clock_starts_near_zero() {
        let clock = MonotonicClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
        assert!(first < 1000);
    }
}
