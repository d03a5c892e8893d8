use super::celebrate::Celebration;

/// The exclusive top-level behaviour of the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mood {
    Wander,
    Sleep,
    Happy,
    Angry,
    Celebrate,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Wander => "Wander",
            Mood::Sleep => "Sleep",
            Mood::Happy => "Happy",
            Mood::Angry => "Angry",
            Mood::Celebrate => "Celebrate",
        }
    }

    /// Higher wins when two moods want the pet at once.
    pub fn priority(self) -> u8 {
        match self {
            Mood::Celebrate => 4,
            Mood::Happy => 3,
            Mood::Angry => 2,
            Mood::Sleep => 1,
            Mood::Wander => 0,
        }
    }

    /// Whether external triggers (taps, feeding, cues) are accepted.
    pub fn accepts_triggers(self) -> bool {
        !matches!(self, Mood::Angry | Mood::Celebrate)
    }
}

/// Mood plus the data that only exists while that mood is active.
#[derive(Debug, Clone, Copy)]
pub(crate) enum MoodState {
    Wander,
    Sleep,
    Happy { remaining: f32 },
    Angry { remaining: f32 },
    Celebrate(Celebration),
}

impl MoodState {
    pub fn mood(&self) -> Mood {
        match self {
            MoodState::Wander => Mood::Wander,
            MoodState::Sleep => Mood::Sleep,
            MoodState::Happy { .. } => Mood::Happy,
            MoodState::Angry { .. } => Mood::Angry,
            MoodState::Celebrate(_) => Mood::Celebrate,
        }
    }
}
