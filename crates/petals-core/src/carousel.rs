//! Carousel/autoplay controller.
//!
//! A [`Carousel`] rotates an index over a fixed-length slide sequence. It
//! advances on its own once per interval, and any manual action (`next`,
//! `prev`, `jump_to`) restarts the countdown from zero so a full fresh
//! interval always follows user interaction.
//!
//! The countdown itself is a separate [`Countdown`] primitive so the
//! cancel-and-reschedule contract is enforced in exactly one place.

use std::time::Duration;

/// A restartable countdown.
///
/// Accumulates elapsed time in discrete steps and fires once the configured
/// interval is reached, rolling the accumulator back to zero. Between calls
/// the accumulator is always strictly below the interval.
#[derive(Debug, Clone)]
pub struct Countdown {
    interval: Duration,
    elapsed: Duration,
}

impl Countdown {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "countdown interval must be positive");
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `step`. Returns `true` when the interval completes.
    pub fn tick(&mut self, step: Duration) -> bool {
        self.elapsed += step;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Restart the countdown from zero.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Completion fraction in `[0, 1)`, zero immediately after a reset.
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.interval.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Index rotation over a fixed slide sequence with timed auto-advance.
///
/// Index arithmetic wraps with true modulo in both directions, so the index
/// is always in `[0, slide_count)`. Construction requires at least one
/// slide; all operations are total.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    index: usize,
    countdown: Countdown,
    auto_advance: bool,
}

impl Carousel {
    /// Create a carousel over `slide_count` slides, auto-advancing once per
    /// `interval`. Starts at index 0 with the countdown running.
    pub fn new(slide_count: usize, interval: Duration) -> Self {
        debug_assert!(slide_count >= 1, "carousel requires at least one slide");
        Self {
            slide_count,
            index: 0,
            countdown: Countdown::new(interval),
            auto_advance: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    /// Elapsed time since the last advance or manual action.
    pub fn elapsed(&self) -> Duration {
        self.countdown.elapsed()
    }

    /// Countdown completion fraction in `[0, 1)` for progress indicators.
    pub fn progress(&self) -> f32 {
        self.countdown.progress()
    }

    /// Advance the autoplay clock by `step`.
    ///
    /// Returns `true` when a full interval completed and the index moved
    /// one slide forward. Paused carousels accumulate no time.
    pub fn tick(&mut self, step: Duration) -> bool {
        if !self.auto_advance {
            return false;
        }
        if self.countdown.tick(step) {
            self.index = (self.index + 1) % self.slide_count;
            tracing::trace!(index = self.index, "carousel auto-advanced");
            true
        } else {
            false
        }
    }

    /// Manual step forward. Restarts the countdown.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.slide_count;
        self.countdown.reset();
    }

    /// Manual step backward; from slide 0 this lands on the last slide.
    /// Restarts the countdown.
    pub fn prev(&mut self) {
        self.index = (self.index + self.slide_count - 1) % self.slide_count;
        self.countdown.reset();
    }

    /// Jump straight to `index`. Out-of-range indices are ignored. The
    /// countdown restarts on every accepted jump, including a jump to the
    /// slide already shown.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.slide_count {
            return;
        }
        self.index = index;
        self.countdown.reset();
    }

    /// Pause or resume autoplay. Resuming grants a full fresh interval.
    pub fn set_auto_advance(&mut self, on: bool) {
        if on && !self.auto_advance {
            self.countdown.reset();
        }
        self.auto_advance = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(6000);
    const STEP: Duration = Duration::from_millis(50);

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut slider = Carousel::new(5, INTERVAL);
        slider.prev();
        assert_eq!(slider.index(), 4);
    }

    #[test]
    fn next_wraps_past_the_end() {
        let mut slider = Carousel::new(3, INTERVAL);
        for _ in 0..3 {
            slider.next();
        }
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn manual_action_restarts_the_countdown() {
        let mut slider = Carousel::new(5, INTERVAL);
        for _ in 0..40 {
            slider.tick(STEP);
        }
        assert!(slider.elapsed() > Duration::ZERO);
        slider.next();
        assert_eq!(slider.elapsed(), Duration::ZERO);
        assert_eq!(slider.progress(), 0.0);
    }

    #[test]
    fn full_interval_advances_exactly_one_slide() {
        let mut slider = Carousel::new(5, INTERVAL);
        let mut advances = 0;
        for _ in 0..120 {
            if slider.tick(STEP) {
                advances += 1;
            }
        }
        assert_eq!(advances, 1);
        assert_eq!(slider.index(), 1);
        assert_eq!(slider.elapsed(), Duration::ZERO);
    }

    #[test]
    fn jump_is_idempotent_and_resets_each_time() {
        let mut slider = Carousel::new(5, INTERVAL);
        slider.jump_to(3);
        assert_eq!(slider.index(), 3);
        for _ in 0..10 {
            slider.tick(STEP);
        }
        slider.jump_to(3);
        assert_eq!(slider.index(), 3);
        assert_eq!(slider.elapsed(), Duration::ZERO);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut slider = Carousel::new(5, INTERVAL);
        slider.jump_to(2);
        slider.jump_to(5);
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn paused_carousel_accumulates_no_time() {
        let mut slider = Carousel::new(5, INTERVAL);
        slider.set_auto_advance(false);
        for _ in 0..240 {
            assert!(!slider.tick(STEP));
        }
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.elapsed(), Duration::ZERO);
    }

    #[test]
    fn resuming_grants_a_fresh_interval() {
        let mut slider = Carousel::new(5, INTERVAL);
        for _ in 0..100 {
            slider.tick(STEP);
        }
        slider.set_auto_advance(false);
        slider.set_auto_advance(true);
        assert_eq!(slider.elapsed(), Duration::ZERO);
    }

    #[test]
    fn progress_stays_below_one_between_ticks() {
        let mut slider = Carousel::new(2, INTERVAL);
        for _ in 0..500 {
            slider.tick(STEP);
            assert!(slider.progress() < 1.0);
        }
    }

    #[test]
    fn single_slide_carousel_stays_put() {
        let mut slider = Carousel::new(1, INTERVAL);
        slider.next();
        slider.prev();
        for _ in 0..120 {
            slider.tick(STEP);
        }
        assert_eq!(slider.index(), 0);
    }
}
