//! Lap transition state machine
//!
//! Tracks the highest lap number seen. A strictly greater lap number closes
//! the lap in progress (if any) and opens the new one; anything else is an
//! ordinary sample of the current lap.

/// Lap progress of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LapState {
    #[default]
    NoLapStarted,
    InLap(i64),
}

/// What the driver must do with the sample that produced a lap number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapTransition {
    /// Feed the sample to the lap in progress
    Sample,
    /// Open `lap` with this sample; no lap was in progress
    Start { lap: i64 },
    /// Close `finished` with this sample, then open `started` with it
    FinishAndStart { finished: i64, started: i64 },
}

/// State machine driven solely by the observed lap number
#[derive(Debug, Clone, Default)]
pub struct LapStateMachine {
    state: LapState,
}

impl LapStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LapState {
        self.state
    }

    /// Lap in progress, if any
    pub fn current_lap(&self) -> Option<i64> {
        match self.state {
            LapState::NoLapStarted => None,
            LapState::InLap(lap) => Some(lap),
        }
    }

    /// Advance on an observed lap number
    ///
    /// Lap numbers of zero or below never start a lap, and a lap number that
    /// goes backwards is treated as a sample of the current lap.
    pub fn observe(&mut self, lap: i64) -> LapTransition {
        match self.state {
            LapState::NoLapStarted if lap > 0 => {
                self.state = LapState::InLap(lap);
                LapTransition::Start { lap }
            }
            LapState::InLap(current) if lap > current => {
                self.state = LapState::InLap(lap);
                LapTransition::FinishAndStart {
                    finished: current,
                    started: lap,
                }
            }
            _ => LapTransition::Sample,
        }
    }

    pub fn reset(&mut self) {
        self.state = LapState::NoLapStarted;
    }
}
