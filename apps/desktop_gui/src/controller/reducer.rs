//! Reducer-like controller that owns the character pose and applies timed
//! steps from the sequencer.

use std::time::{Duration, Instant};

use shared::{CharacterPose, SpoonPhase};

use crate::controller::events::{ControlEvent, VoiceClip};
use crate::controller::sequencer::{Sequencer, Step, Track};

pub const STEP_PX: i32 = 20;
pub const TILT_DEG: i32 = 15;
pub const BLINK_DURATION: Duration = Duration::from_millis(200);
pub const NAP_DURATION: Duration = Duration::from_millis(3000);
pub const SPEECH_DURATION: Duration = Duration::from_millis(1000);
/// Feeding timeline, measured from the trigger: spoon reaches the mouth at
/// once, chews after one second, returns after two.
pub const FEEDING_CHEW_AFTER: Duration = Duration::from_millis(1000);
pub const FEEDING_DONE_AFTER: Duration = Duration::from_millis(2000);

pub struct CharacterController {
    pose: CharacterPose,
    sequencer: Sequencer,
}

impl CharacterController {
    pub fn new() -> Self {
        Self {
            pose: CharacterPose::default(),
            sequencer: Sequencer::new(),
        }
    }

    pub fn pose(&self) -> &CharacterPose {
        &self.pose
    }

    /// Applies one input event at `now`.
    ///
    /// Returns the clip to start when the event asks for sound; playback is
    /// the caller's concern and never feeds back into the pose.
    pub fn handle(&mut self, event: ControlEvent, now: Instant) -> Option<VoiceClip> {
        match event {
            ControlEvent::StepLeft => {
                self.pose.offset_x -= STEP_PX;
                None
            }
            ControlEvent::StepRight => {
                self.pose.offset_x += STEP_PX;
                None
            }
            ControlEvent::Tilt => {
                self.pose.rotation_deg += TILT_DEG;
                None
            }
            ControlEvent::Blink => {
                self.pose.blinking = true;
                self.sequencer.supersede(Track::Blink);
                self.sequencer
                    .schedule(Track::Blink, now + BLINK_DURATION, Step::BlinkEnd);
                None
            }
            ControlEvent::Nap => {
                self.pose.sleeping = true;
                self.sequencer.supersede(Track::Sleep);
                self.sequencer
                    .schedule(Track::Sleep, now + NAP_DURATION, Step::SleepEnd);
                None
            }
            ControlEvent::Voice(clip) if clip.is_feeding() => {
                self.pose.speech_text = clip.speech_text().to_owned();
                self.pose.speaking = true;
                self.pose.spoon = SpoonPhase::Mouth;
                // Feeding owns speech until it finishes; a re-trigger restarts
                // the whole timeline.
                self.sequencer.supersede(Track::Voice);
                self.sequencer.supersede(Track::Feeding);
                self.sequencer.schedule(
                    Track::Feeding,
                    now + FEEDING_CHEW_AFTER,
                    Step::SpoonTo(SpoonPhase::Eating),
                );
                self.sequencer
                    .schedule(Track::Feeding, now + FEEDING_DONE_AFTER, Step::FeedingEnd);
                Some(clip)
            }
            ControlEvent::Voice(clip) => {
                self.pose.speech_text = clip.speech_text().to_owned();
                self.pose.speaking = true;
                self.sequencer.supersede(Track::Voice);
                self.sequencer
                    .schedule(Track::Voice, now + SPEECH_DURATION, Step::SpeechEnd);
                Some(clip)
            }
        }
    }

    /// Applies every timed step due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for step in self.sequencer.take_due(now) {
            self.apply(step);
        }
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::BlinkEnd => self.pose.blinking = false,
            Step::SleepEnd => self.pose.sleeping = false,
            Step::SpeechEnd => self.pose.speaking = false,
            Step::SpoonTo(phase) => self.pose.spoon = phase,
            Step::FeedingEnd => {
                self.pose.spoon = SpoonPhase::Plate;
                self.pose.speaking = false;
            }
        }
    }

    /// Earliest pending deadline, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sequencer.next_deadline()
    }
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn steps_accumulate_without_clamping() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        for _ in 0..5 {
            controller.handle(ControlEvent::StepLeft, start);
        }
        controller.handle(ControlEvent::StepRight, start);
        assert_eq!(controller.pose().offset_x, -4 * STEP_PX);
    }

    #[test]
    fn tilt_accumulates_unbounded() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        for _ in 0..30 {
            controller.handle(ControlEvent::Tilt, start);
        }
        assert_eq!(controller.pose().rotation_deg, 30 * TILT_DEG);
    }

    #[test]
    fn blink_lasts_exactly_its_duration() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Blink, start);
        assert!(controller.pose().blinking);

        controller.tick(at(start, 199));
        assert!(controller.pose().blinking);
        controller.tick(at(start, 200));
        assert!(!controller.pose().blinking);
    }

    #[test]
    fn nap_lasts_exactly_three_seconds() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Nap, start);
        assert!(controller.pose().sleeping);

        controller.tick(at(start, 2999));
        assert!(controller.pose().sleeping);
        controller.tick(at(start, 3000));
        assert!(!controller.pose().sleeping);
    }

    #[test]
    fn blink_and_nap_overlap_independently() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Nap, start);
        controller.handle(ControlEvent::Blink, at(start, 100));

        controller.tick(at(start, 300));
        assert!(!controller.pose().blinking);
        assert!(controller.pose().sleeping);

        controller.tick(at(start, 3000));
        assert!(!controller.pose().sleeping);
    }

    #[test]
    fn voice_clip_speaks_for_one_second() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        let clip = controller.handle(ControlEvent::Voice(VoiceClip::Fish), start);
        assert_eq!(clip, Some(VoiceClip::Fish));
        assert!(controller.pose().speaking);
        assert_eq!(controller.pose().speech_text, "РЫБА!");

        controller.tick(at(start, 999));
        assert!(controller.pose().speaking);
        controller.tick(at(start, 1000));
        assert!(!controller.pose().speaking);
    }

    #[test]
    fn movement_events_request_no_clip() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        assert_eq!(controller.handle(ControlEvent::StepLeft, start), None);
        assert_eq!(controller.handle(ControlEvent::Tilt, start), None);
        assert_eq!(controller.handle(ControlEvent::Blink, start), None);
        assert_eq!(controller.handle(ControlEvent::Nap, start), None);
    }

    #[test]
    fn feeding_runs_the_three_phase_timeline() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        let clip = controller.handle(ControlEvent::Voice(VoiceClip::Nyam), start);
        assert_eq!(clip, Some(VoiceClip::Nyam));
        assert!(controller.pose().speaking);
        assert_eq!(controller.pose().speech_text, "НЯМ!");
        assert_eq!(controller.pose().spoon, SpoonPhase::Mouth);

        controller.tick(at(start, 999));
        assert_eq!(controller.pose().spoon, SpoonPhase::Mouth);

        controller.tick(at(start, 1000));
        assert_eq!(controller.pose().spoon, SpoonPhase::Eating);
        assert!(controller.pose().speaking);

        controller.tick(at(start, 2000));
        assert_eq!(controller.pose().spoon, SpoonPhase::Plate);
        assert!(!controller.pose().speaking);
        assert_eq!(controller.next_deadline(), None);
    }

    #[test]
    fn retriggered_feeding_restarts_the_timeline() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Voice(VoiceClip::Nyam), start);
        controller.tick(at(start, 500));
        controller.handle(ControlEvent::Voice(VoiceClip::Nyam), at(start, 500));
        assert_eq!(controller.pose().spoon, SpoonPhase::Mouth);

        // The first trigger's chew step (due at 1000) must not fire.
        controller.tick(at(start, 1000));
        assert_eq!(controller.pose().spoon, SpoonPhase::Mouth);

        controller.tick(at(start, 1500));
        assert_eq!(controller.pose().spoon, SpoonPhase::Eating);
        controller.tick(at(start, 2500));
        assert_eq!(controller.pose().spoon, SpoonPhase::Plate);
        assert!(!controller.pose().speaking);
    }

    #[test]
    fn a_new_voice_clip_supersedes_the_previous_speech_timer() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Voice(VoiceClip::Fish), start);
        controller.handle(ControlEvent::Voice(VoiceClip::Meat), at(start, 600));
        assert_eq!(controller.pose().speech_text, "МЯСО!");

        // Fish's end (due at 1000) was superseded; meat speaks until 1600.
        controller.tick(at(start, 1000));
        assert!(controller.pose().speaking);
        controller.tick(at(start, 1600));
        assert!(!controller.pose().speaking);
    }

    #[test]
    fn feeding_takes_over_an_active_speech_timer() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Voice(VoiceClip::Fish), start);
        controller.handle(ControlEvent::Voice(VoiceClip::Nyam), at(start, 500));

        // Fish's speech end (due at 1000) is gone; feeding owns speech now.
        controller.tick(at(start, 1100));
        assert!(controller.pose().speaking);
        assert_eq!(controller.pose().speech_text, "НЯМ!");
        assert_eq!(controller.pose().spoon, SpoonPhase::Mouth);

        controller.tick(at(start, 1500));
        assert_eq!(controller.pose().spoon, SpoonPhase::Eating);

        controller.tick(at(start, 2500));
        assert!(!controller.pose().speaking);
        assert_eq!(controller.pose().spoon, SpoonPhase::Plate);
    }

    #[test]
    fn a_voice_clip_during_feeding_does_not_strand_the_spoon() {
        let start = Instant::now();
        let mut controller = CharacterController::new();
        controller.handle(ControlEvent::Voice(VoiceClip::Nyam), start);
        controller.handle(ControlEvent::Voice(VoiceClip::Kasha), at(start, 500));
        assert_eq!(controller.pose().speech_text, "КАША!");

        // The feeding track still walks the spoon home.
        controller.tick(at(start, 1000));
        assert_eq!(controller.pose().spoon, SpoonPhase::Eating);
        controller.tick(at(start, 2000));
        assert_eq!(controller.pose().spoon, SpoonPhase::Plate);
        assert!(!controller.pose().speaking);
    }
}
