//! Input events and the voice-clip catalog.

/// Discrete inputs the character reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Left arrow: step 20 px left, immediately.
    StepLeft,
    /// Right arrow: step 20 px right, immediately.
    StepRight,
    /// Up arrow: tilt 15 degrees further, immediately, unbounded.
    Tilt,
    /// Down arrow: doze off for three seconds.
    Nap,
    /// Space: blink briefly.
    Blink,
    /// A sound button was clicked.
    Voice(VoiceClip),
}

/// One entry of the sound-button catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceClip {
    Fish,
    Meat,
    Rocket,
    Nyam,
    Congrats,
    Pants,
    Hello,
    Kasha,
}

impl VoiceClip {
    pub const ALL: [VoiceClip; 8] = [
        VoiceClip::Fish,
        VoiceClip::Meat,
        VoiceClip::Rocket,
        VoiceClip::Nyam,
        VoiceClip::Congrats,
        VoiceClip::Pants,
        VoiceClip::Hello,
        VoiceClip::Kasha,
    ];

    /// Button caption.
    pub fn caption(self) -> &'static str {
        match self {
            VoiceClip::Fish => "РЫБА",
            VoiceClip::Meat => "МЯСО",
            VoiceClip::Rocket => "РАКЕТА",
            VoiceClip::Nyam => "НЯМ",
            VoiceClip::Congrats => "ПОЗДРАВЛЯЮ",
            VoiceClip::Pants => "ШТАНЫ",
            VoiceClip::Hello => "ЗДРАВСТВУЙТЕ",
            VoiceClip::Kasha => "КАША",
        }
    }

    /// Speech-bubble text shown while the clip plays.
    pub fn speech_text(self) -> &'static str {
        match self {
            VoiceClip::Fish => "РЫБА!",
            VoiceClip::Meat => "МЯСО!",
            VoiceClip::Rocket => "РАКЕТА!",
            VoiceClip::Nyam => "НЯМ!",
            VoiceClip::Congrats => "ПОЗДРАВЛЯЮ!",
            VoiceClip::Pants => "ШТАНИ!",
            VoiceClip::Hello => "ЗДРАВСТВУЙТЕ!",
            VoiceClip::Kasha => "КАША!",
        }
    }

    /// Clip file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            VoiceClip::Fish => "fish",
            VoiceClip::Meat => "meat",
            VoiceClip::Rocket => "raketa",
            VoiceClip::Nyam => "nyam",
            VoiceClip::Congrats => "congrats",
            VoiceClip::Pants => "shtani",
            VoiceClip::Hello => "hello",
            VoiceClip::Kasha => "kasha",
        }
    }

    /// The one clip that also runs the spoon-feeding sequence.
    pub fn is_feeding(self) -> bool {
        matches!(self, VoiceClip::Nyam)
    }
}
