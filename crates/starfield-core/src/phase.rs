/// Stage of the surrounding greeting flow. The animator only uses it to gate
/// the shooting-star spawner and the heart overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Phase {
    #[default]
    Landing,
    Story,
    Proposal,
    Success,
}

impl Phase {
    /// Map the flow controller's step index; steps past the last saturate.
    pub fn from_step(step: u32) -> Self {
        match step {
            0 => Phase::Landing,
            1 => Phase::Story,
            2 => Phase::Proposal,
            _ => Phase::Success,
        }
    }

    #[inline]
    pub fn is_story(self) -> bool {
        self == Phase::Story
    }

    #[inline]
    pub fn shows_hearts(self) -> bool {
        self >= Phase::Proposal
    }
}
