//! Starfield backdrop animator.
//!
//! Platform-agnostic: drawing goes through [`Surface`] and all scheduling
//! (frame requests, the spawn interval, resize notifications) through
//! [`AnimationHost`], so the same animator runs on a browser canvas or under
//! a fake clock in tests.

pub mod animator;
pub mod config;
pub mod constants;
pub mod device;
pub mod gate;
pub mod hearts;
pub mod host;
pub mod phase;
pub mod shooting;
pub mod stars;
pub mod surface;
pub mod testing;
pub mod viewport;

pub use animator::*;
pub use config::*;
pub use device::*;
pub use gate::*;
pub use hearts::*;
pub use host::*;
pub use phase::*;
pub use shooting::*;
pub use stars::*;
pub use surface::*;
pub use viewport::*;

#[inline]
pub(crate) fn uniform<R: rand::Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}
