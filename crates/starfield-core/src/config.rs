use crate::device::Tier;
use crate::phase::Phase;

/// Inputs the animator receives from its environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimatorConfig {
    pub tier: Tier,
    pub phase: Phase,
}

impl AnimatorConfig {
    pub const fn new(tier: Tier, phase: Phase) -> Self {
        Self { tier, phase }
    }

    pub fn with_tier(self, tier: Tier) -> Self {
        Self { tier, ..self }
    }

    pub fn with_phase(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }

    /// Shooting stars are spawned only on desktop during the story.
    #[inline]
    pub fn spawner_enabled(&self) -> bool {
        self.tier.spawns_shooting_stars() && self.phase.is_story()
    }

    #[inline]
    pub fn hearts_enabled(&self) -> bool {
        self.tier.shows_overlay() && self.phase.shows_hearts()
    }
}
