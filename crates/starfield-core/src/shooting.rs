use crate::constants::*;
use crate::uniform;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// A transient streak falling from just above the top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingParticle {
    /// Spawn order within the session, starting at 0.
    pub serial: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    /// Visual streak length as a multiple of the velocity.
    pub trail_length: f32,
}

impl ShootingParticle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, serial: u64) -> Self {
        Self {
            serial,
            position: Vec2::new(rng.gen::<f32>() * viewport.width, SHOOTING_SPAWN_Y),
            velocity: Vec2::new(
                uniform(rng, -SHOOTING_VX_SPAN, SHOOTING_VX_SPAN),
                uniform(rng, SHOOTING_VY_MIN, SHOOTING_VY_MAX),
            ),
            life: 1.0,
            trail_length: uniform(rng, SHOOTING_TRAIL_MIN, SHOOTING_TRAIL_MAX),
        }
    }

    /// Move one frame and burn life. Returns false once the particle is spent.
    #[inline]
    pub fn step(&mut self) -> bool {
        self.position += self.velocity;
        self.life -= SHOOTING_LIFE_DECAY;
        self.life > 0.0
    }

    /// Far end of the streak, opposite to the direction of travel.
    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.position - self.velocity * self.trail_length
    }
}

/// Live shooting particles plus a running spawn counter for the session.
#[derive(Clone, Debug, Default)]
pub struct ShootingStars {
    live: Vec<ShootingParticle>,
    spawned: u64,
}

impl ShootingStars {
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: &Viewport) {
        let particle = ShootingParticle::random(rng, viewport, self.spawned);
        self.spawned += 1;
        self.live.push(particle);
    }

    /// Step every particle, hand each survivor to `draw`, and drop the spent
    /// ones in the same pass.
    pub fn update(&mut self, mut draw: impl FnMut(&ShootingParticle)) {
        self.live.retain_mut(|p| {
            let alive = p.step();
            if alive {
                draw(p);
            }
            alive
        });
    }

    pub fn live(&self) -> &[ShootingParticle] {
        &self.live
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn total_spawned(&self) -> u64 {
        self.spawned
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.spawned = 0;
    }
}
