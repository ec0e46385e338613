//! Deadline bookkeeping for timed pose transitions.
//!
//! Each pending step belongs to an animation track; starting a new animation
//! on a track supersedes that track's pending steps, so a re-trigger restarts
//! its timeline instead of racing stale timers.

use std::time::Instant;

use shared::SpoonPhase;

/// Animation tracks that may have pending timed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Blink,
    Sleep,
    Voice,
    Feeding,
}

/// A timed pose transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BlinkEnd,
    SleepEnd,
    SpeechEnd,
    SpoonTo(SpoonPhase),
    /// Spoon back on the plate and speech over.
    FeedingEnd,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_at: Instant,
    track: Track,
    step: Step,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    pending: Vec<Pending>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops pending steps on `track`; a fresh trigger owns the track now.
    pub fn supersede(&mut self, track: Track) {
        self.pending.retain(|p| p.track != track);
    }

    pub fn schedule(&mut self, track: Track, due_at: Instant, step: Step) {
        self.pending.push(Pending { due_at, track, step });
    }

    /// Removes and returns the steps due at `now`, in firing order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Step> {
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_at <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| p.due_at);
        due.into_iter().map(|p| p.step).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due_at).min()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
