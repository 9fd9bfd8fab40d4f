use crate::config::AnimatorConfig;
use crate::constants::*;
use crate::gate::FrameGate;
use crate::hearts::heart_constellations;
use crate::host::{AnimationHost, FrameHandle, IntervalHandle, ListenerHandle};
use crate::shooting::ShootingStars;
use crate::stars::{populate, TwinklePoint};
use crate::surface::{Rgba, Surface, SurfaceError};
use crate::viewport::Viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub accepted: u64,
    pub skipped: u64,
}

// Everything the host is holding on our behalf. Released together.
#[derive(Debug, Default)]
struct Session {
    frame: Option<FrameHandle>,
    spawner: Option<IntervalHandle>,
    resize: Option<ListenerHandle>,
}

impl Session {
    fn is_active(&self) -> bool {
        self.frame.is_some() || self.spawner.is_some() || self.resize.is_some()
    }
}

/// The starfield backdrop: twinkle points, shooting stars and the heart
/// overlay, drawn onto `S` and paced by `H`.
pub struct Starfield<H: AnimationHost, S: Surface> {
    host: H,
    surface: Option<S>,
    config: AnimatorConfig,
    viewport: Viewport,
    stars: Vec<TwinklePoint>,
    shooting: ShootingStars,
    gate: FrameGate,
    rng: StdRng,
    session: Session,
    mounted: bool,
    stats: FrameStats,
}

impl<H: AnimationHost, S: Surface> Starfield<H, S> {
    /// Build an idle animator. `surface` is `None` when the host has no
    /// drawing context; the animator then never draws.
    pub fn new(host: H, surface: Option<S>, config: AnimatorConfig, seed: u64) -> Self {
        Self {
            host,
            surface,
            config,
            viewport: Viewport::default(),
            stars: Vec::new(),
            shooting: ShootingStars::default(),
            gate: FrameGate::new(config.tier.target_fps()),
            rng: StdRng::seed_from_u64(seed),
            session: Session::default(),
            mounted: false,
            stats: FrameStats::default(),
        }
    }

    /// Size the surface, create the stars on first use, and start the frame
    /// chain, the spawner (desktop story only) and the resize listener.
    pub fn mount(&mut self) {
        self.mounted = true;
        if self.session.is_active() {
            return;
        }
        if !self.config.tier.is_enabled() {
            log::debug!("[starfield] tier {} disabled; nothing to mount", self.config.tier.name());
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            log::warn!("[starfield] no drawing surface; rendering disabled");
            return;
        };

        self.viewport = self.host.viewport().normalized();
        surface.resize(&self.viewport);

        if self.stars.is_empty() {
            let count = self.config.tier.star_count();
            self.stars = populate(&mut self.rng, &self.viewport, count);
        }
        self.gate.set_target_fps(self.config.tier.target_fps());

        if self.config.spawner_enabled() {
            match self.host.start_interval(SHOOTING_INTERVAL_MS) {
                Ok(h) => self.session.spawner = Some(h),
                Err(e) => log::warn!("[starfield] spawner not started: {e}"),
            }
        }
        self.schedule_next_frame();
        match self.host.watch_resize() {
            Ok(h) => self.session.resize = Some(h),
            Err(e) => log::warn!("[starfield] resize listener not attached: {e}"),
        }

        log::info!(
            "[starfield] mounted tier={} phase={:?} stars={} viewport={}x{}@{}",
            self.config.tier.name(),
            self.config.phase,
            self.stars.len(),
            self.viewport.width,
            self.viewport.height,
            self.viewport.pixel_ratio
        );
    }

    /// Frame callback from the host. `timestamp_ms` is the host's frame clock.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        // A callback that fires after teardown has no request behind it.
        if self.session.frame.take().is_none() {
            return;
        }
        if self.gate.accept(timestamp_ms) {
            self.stats.accepted += 1;
            self.render();
        } else {
            self.stats.skipped += 1;
        }
        self.schedule_next_frame();
    }

    /// Interval callback from the host: append one shooting star.
    pub fn on_spawn_tick(&mut self) {
        if self.session.spawner.is_none() {
            return;
        }
        self.shooting.spawn(&mut self.rng, &self.viewport);
    }

    /// Re-derive surface dimensions. Existing stars and particles keep their
    /// absolute coordinates even if they now fall outside the viewport.
    pub fn on_resize(&mut self) {
        if self.session.resize.is_none() {
            return;
        }
        self.viewport = self.host.viewport().normalized();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(&self.viewport);
        }
        log::debug!(
            "[starfield] resized to {}x{}@{}",
            self.viewport.width,
            self.viewport.height,
            self.viewport.pixel_ratio
        );
    }

    /// Apply a new tier/phase. The running frame chain and spawner are stopped
    /// before anything new is started; stars and particles survive.
    pub fn reconfigure(&mut self, config: AnimatorConfig) {
        if config == self.config {
            return;
        }
        log::info!(
            "[starfield] reconfigure tier {} -> {}, phase {:?} -> {:?}",
            self.config.tier.name(),
            config.tier.name(),
            self.config.phase,
            config.phase
        );
        self.release_host_resources();
        self.config = config;
        if self.mounted {
            self.mount();
        }
    }

    /// Stop everything and drop the collections. Safe to call repeatedly and
    /// before `mount`.
    pub fn teardown(&mut self) {
        let was_active = self.session.is_active();
        self.release_host_resources();
        self.stars.clear();
        self.shooting.clear();
        self.mounted = false;
        if was_active {
            log::info!("[starfield] torn down");
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_active()
    }

    pub fn config(&self) -> AnimatorConfig {
        self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stars(&self) -> &[TwinklePoint] {
        &self.stars
    }

    pub fn shooting(&self) -> &ShootingStars {
        &self.shooting
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    fn schedule_next_frame(&mut self) {
        match self.host.request_frame() {
            Ok(h) => self.session.frame = Some(h),
            Err(e) => log::warn!("[starfield] frame chain stopped: {e}"),
        }
    }

    fn release_host_resources(&mut self) {
        if let Some(h) = self.session.frame.take() {
            self.host.cancel_frame(h);
        }
        if let Some(h) = self.session.spawner.take() {
            self.host.clear_interval(h);
        }
        if let Some(h) = self.session.resize.take() {
            self.host.unwatch_resize(h);
        }
    }

    fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.viewport.is_empty() {
            return;
        }
        let mut first_err: Option<SurfaceError> = None;
        let mut note = |res: Result<(), SurfaceError>| {
            if let Err(e) = res {
                first_err.get_or_insert(e);
            }
        };

        surface.clear(&self.viewport);

        for star in &mut self.stars {
            star.advance();
            note(surface.fill_circle(
                star.position,
                star.radius,
                Rgba::new(STAR_RGB, star.opacity()),
            ));
        }

        if self.config.hearts_enabled() {
            let outline = Rgba::new(HEART_RGB, HEART_OUTLINE_ALPHA);
            let dot = Rgba::new(HEART_RGB, HEART_DOT_ALPHA);
            for heart in heart_constellations(&self.viewport) {
                note(surface.stroke_closed_path(&heart, outline, HEART_LINE_WIDTH));
                for p in heart {
                    note(surface.fill_circle(p, HEART_DOT_RADIUS, dot));
                }
            }
        }

        if self.config.tier.spawns_shooting_stars() {
            self.shooting.update(|p| {
                note(surface.stroke_streak(
                    p.position,
                    p.tail(),
                    Rgba::new(SHOOTING_RGB, p.life),
                    SHOOTING_LINE_WIDTH,
                ));
            });
        }

        if let Some(e) = first_err {
            log::warn!("[starfield] frame drawn with errors: {e}");
        }
    }
}

impl<H: AnimationHost, S: Surface> Drop for Starfield<H, S> {
    fn drop(&mut self) {
        self.release_host_resources();
    }
}
