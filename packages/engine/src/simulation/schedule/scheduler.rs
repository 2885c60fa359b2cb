//! Time-driven stepping
//!
//! Two states, Paused and Running; `play`/`pause` are idempotent. While
//! Running, each frame tick compares the time since the last generation with
//! `1000ms / speed` and allows at most one generation per tick. A slow frame
//! that spans several intervals drops the extra generations rather than
//! bursting to catch up, which keeps a lag spike from snowballing into more
//! computation.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Outcome of one frame tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Paused, or the first tick after (re)arming
    Idle,
    /// Running but the interval has not elapsed yet
    Waiting,
    /// Advance one generation; `dropped` counts the extra whole intervals
    /// that elapsed and are not made up
    Step { dropped: u32 },
}

#[derive(Clone, Debug)]
pub struct Scheduler {
    state: RunState,
    /// Timestamp of the last generation (or of arming); None until the
    /// first tick after play/rearm
    last_step_ms: Option<f64>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { state: RunState::Paused, last_step_ms: None }
    }

    pub fn state(&self) -> RunState { self.state }

    pub fn is_running(&self) -> bool { self.state == RunState::Running }

    /// Paused -> Running. Returns false if already running.
    pub fn play(&mut self) -> bool {
        if self.state == RunState::Running {
            return false;
        }
        self.state = RunState::Running;
        self.rearm();
        true
    }

    /// Running -> Paused. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if self.state == RunState::Paused {
            return false;
        }
        self.state = RunState::Paused;
        self.rearm();
        true
    }

    /// Forget the interval anchor; the next tick starts timing afresh
    pub fn rearm(&mut self) {
        self.last_step_ms = None;
    }

    /// `speed` is read on every call, so a change applies at the next check
    pub fn tick(&mut self, now_ms: f64, speed: u32) -> Tick {
        if self.state == RunState::Paused {
            return Tick::Idle;
        }
        // A NaN or infinite timestamp must not become the anchor
        if !now_ms.is_finite() {
            return Tick::Waiting;
        }
        let Some(last) = self.last_step_ms else {
            self.last_step_ms = Some(now_ms);
            return Tick::Idle;
        };

        let interval = 1000.0 / speed.max(1) as f64;
        let elapsed = now_ms - last;
        if elapsed <= interval {
            return Tick::Waiting;
        }

        self.last_step_ms = Some(now_ms);
        let whole = (elapsed / interval).floor() as u32;
        Tick::Step { dropped: whole.saturating_sub(1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_and_pause_are_idempotent() {
        let mut s = Scheduler::new();
        assert_eq!(s.state(), RunState::Paused);
        assert!(!s.pause());
        assert!(s.play());
        assert!(!s.play());
        assert!(s.is_running());
        assert!(s.pause());
        assert!(!s.pause());
        assert_eq!(s.state(), RunState::Paused);
    }

    #[test]
    fn paused_never_steps() {
        let mut s = Scheduler::new();
        for t in 0..100 {
            assert_eq!(s.tick(t as f64 * 1000.0, 20), Tick::Idle);
        }
    }

    #[test]
    fn steps_only_after_interval_is_exceeded() {
        let mut s = Scheduler::new();
        s.play();
        assert_eq!(s.tick(0.0, 10), Tick::Idle); // anchors at 0
        assert_eq!(s.tick(50.0, 10), Tick::Waiting);
        assert_eq!(s.tick(100.0, 10), Tick::Waiting); // equal is not "exceeds"
        assert_eq!(s.tick(101.0, 10), Tick::Step { dropped: 0 });
        assert_eq!(s.tick(150.0, 10), Tick::Waiting);
        assert_eq!(s.tick(202.0, 10), Tick::Step { dropped: 0 });
    }

    #[test]
    fn long_frame_steps_once_and_drops_the_rest() {
        let mut s = Scheduler::new();
        s.play();
        s.tick(0.0, 10);
        assert_eq!(s.tick(750.0, 10), Tick::Step { dropped: 6 });
        // Anchored at 750, not 100: no catch-up burst next frame
        assert_eq!(s.tick(766.0, 10), Tick::Waiting);
    }

    #[test]
    fn speed_change_applies_at_next_check() {
        let mut s = Scheduler::new();
        s.play();
        s.tick(0.0, 1);
        assert_eq!(s.tick(500.0, 1), Tick::Waiting);
        assert_eq!(s.tick(501.0, 20), Tick::Step { dropped: 9 });
    }

    #[test]
    fn non_finite_timestamps_are_ignored() {
        let mut s = Scheduler::new();
        s.play();
        assert_eq!(s.tick(f64::NAN, 1), Tick::Waiting);
        assert_eq!(s.tick(0.0, 1), Tick::Idle);
        assert_eq!(s.tick(f64::NAN, 1), Tick::Waiting);
        assert_eq!(s.tick(f64::INFINITY, 1), Tick::Waiting);
        assert_eq!(s.tick(f64::NEG_INFINITY, 1), Tick::Waiting);

        let steps = (1..=10)
            .filter(|&t| matches!(s.tick(t as f64, 1), Tick::Step { .. }))
            .count();
        assert_eq!(steps, 0);
        assert_eq!(s.tick(1001.0, 1), Tick::Step { dropped: 0 });
    }
}
