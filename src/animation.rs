//! Animation state and frame pacing, independent of any window backend.

/// What the event backend distilled the pending input down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    TogglePause,
    Resize(u32, u32),
    None,
}

/// Evolving animation state, advanced once per frame by the main loop.
#[derive(Debug, Clone)]
pub struct PatternState {
    pub multiplier: f64,
    increment: f64,
    paused: bool,
    stopped: bool,
}

impl PatternState {
    pub fn new(multiplier: f64, increment: f64) -> PatternState {
        PatternState {
            multiplier,
            increment,
            paused: false,
            stopped: false,
        }
    }

    /// Fold one input action into the state. Resizes are left to the window
    /// adapter; geometry is recomputed from the window size every frame.
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.stopped = true,
            InputAction::TogglePause => self.paused = !self.paused,
            InputAction::Resize(..) | InputAction::None => (),
        }
    }

    /// Advance the multiplier unless paused. It grows without bound.
    pub fn tick(&mut self) {
        if !self.paused {
            self.multiplier += self.increment;
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }
}

/// Milliseconds left to sleep after a frame took `elapsed_ms` out of its
/// `ms_per_frame` budget. Overlong frames are dropped, never compensated,
/// and a clock anomaly (elapsed below zero) skips the sleep as well.
pub fn frame_wait(ms_per_frame: i32, elapsed_ms: i32) -> Option<i32> {
    let wait = ms_per_frame - elapsed_ms;
    (wait > 0 && wait <= ms_per_frame).then_some(wait)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ticks_advance_the_multiplier_while_running() {
        let mut state = PatternState::new(1.0, 0.25);
        state.tick();
        state.tick();
        assert_eq!(state.multiplier, 1.5);
    }

    #[test]
    fn pause_freezes_the_multiplier_until_toggled_back() {
        let mut state = PatternState::new(0.0, 0.005);
        state.apply(InputAction::TogglePause);
        assert!(state.paused());

        for _ in 0..3 {
            state.tick();
        }
        assert_eq!(state.multiplier, 0.0);

        state.apply(InputAction::TogglePause);
        state.tick();
        assert_eq!(state.multiplier, 0.005);
    }

    #[test]
    fn quit_stops_from_either_state() {
        let mut running = PatternState::new(0.0, 0.1);
        running.apply(InputAction::Quit);
        assert!(running.stopped());

        let mut paused = PatternState::new(0.0, 0.1);
        paused.apply(InputAction::TogglePause);
        paused.apply(InputAction::Quit);
        assert!(paused.stopped());
    }

    #[test]
    fn resize_and_idle_leave_the_state_alone() {
        let mut state = PatternState::new(2.0, 0.1);
        state.apply(InputAction::Resize(800, 600));
        state.apply(InputAction::None);
        assert!(!state.stopped());
        assert!(!state.paused());
        assert_eq!(state.multiplier, 2.0);
    }

    #[rstest]
    #[case(16, 5, Some(11))]
    #[case(16, 0, Some(16))]
    #[case(16, 16, None)]
    #[case(16, 40, None)]
    #[case(16, -4, None)]
    fn sleeps_only_the_remaining_budget(
        #[case] ms_per_frame: i32,
        #[case] elapsed_ms: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(frame_wait(ms_per_frame, elapsed_ms), expected);
    }
}
