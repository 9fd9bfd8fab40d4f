// Host-side tests for the animator, driven by the manual host's fake clock.

use starfield_core::constants::*;
use starfield_core::testing::{run_for, DrawOp, ManualHost, RecordingSurface};
use starfield_core::{AnimatorConfig, Phase, Starfield, Tier, Viewport};

const DESKTOP_VP: Viewport = Viewport::new(1440.0, 900.0, 2.0);
const TABLET_VP: Viewport = Viewport::new(900.0, 1200.0, 2.0);
const HZ_60: f64 = 1000.0 / 60.0;
const HZ_240: f64 = 1000.0 / 240.0;

type TestStarfield = Starfield<ManualHost, RecordingSurface>;

fn make(tier: Tier, phase: Phase, viewport: Viewport) -> TestStarfield {
    Starfield::new(
        ManualHost::new(viewport),
        Some(RecordingSurface::default()),
        AnimatorConfig::new(tier, phase),
        42,
    )
}

fn mounted(tier: Tier, phase: Phase, viewport: Viewport) -> TestStarfield {
    let mut sf = make(tier, phase, viewport);
    sf.mount();
    sf
}

fn recorded(sf: &TestStarfield) -> &RecordingSurface {
    sf.surface().expect("surface present")
}

fn heart_paths(ops: &[DrawOp]) -> Vec<&Vec<glam::Vec2>> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::ClosedPath { points, .. } => Some(points),
            _ => None,
        })
        .collect()
}

#[test]
fn mobile_creates_nothing() {
    for phase in [Phase::Landing, Phase::Story, Phase::Proposal, Phase::Success] {
        let mut sf = mounted(Tier::Mobile, phase, Viewport::new(375.0, 812.0, 3.0));
        run_for(&mut sf, 10_000.0, HZ_60);
        assert!(!sf.is_running());
        assert!(sf.stars().is_empty());
        assert_eq!(sf.shooting().total_spawned(), 0);
        let host = sf.host();
        assert_eq!(host.frame_requests(), 0);
        assert_eq!(host.intervals_started(), 0);
        assert_eq!(host.resize_listeners(), 0);
        assert!(recorded(&sf).ops().is_empty());
    }
}

#[test]
fn missing_surface_draws_nothing() {
    let mut sf: TestStarfield = Starfield::new(
        ManualHost::new(DESKTOP_VP),
        None,
        AnimatorConfig::new(Tier::Desktop, Phase::Story),
        1,
    );
    sf.mount();
    run_for(&mut sf, 5_000.0, HZ_60);
    assert!(!sf.is_running());
    assert!(sf.host().is_idle());
    assert_eq!(sf.shooting().total_spawned(), 0);
}

#[test]
fn mount_sizes_surface_and_populates_stars() {
    let sf = mounted(Tier::Desktop, Phase::Landing, DESKTOP_VP);
    assert_eq!(sf.stars().len(), DESKTOP_STAR_COUNT);
    assert_eq!(recorded(&sf).ops(), &[DrawOp::Resize(DESKTOP_VP)]);
    assert_eq!(sf.host().pending_frames(), 1);
    assert_eq!(sf.host().resize_listeners(), 1);
    assert_eq!(sf.host().active_intervals(), 0);

    let sf = mounted(Tier::Tablet, Phase::Story, TABLET_VP);
    assert_eq!(sf.stars().len(), TABLET_STAR_COUNT);
    assert_eq!(sf.host().active_intervals(), 0);
}

#[test]
fn star_count_survives_resizes() {
    let mut sf = mounted(Tier::Desktop, Phase::Story, DESKTOP_VP);
    let before: Vec<_> = sf.stars().iter().map(|s| s.position).collect();
    for (i, w) in [1200.0, 1900.0, 1100.0, 2400.0].into_iter().enumerate() {
        let vp = Viewport::new(w, 700.0 + i as f32 * 50.0, 1.0);
        sf.host_mut().set_viewport(vp);
        sf.on_resize();
        assert_eq!(sf.viewport(), vp);
        run_for(&mut sf, 200.0, HZ_60);
    }
    assert_eq!(sf.stars().len(), DESKTOP_STAR_COUNT);
    let after: Vec<_> = sf.stars().iter().map(|s| s.position).collect();
    assert_eq!(before, after, "resize must not move stars");
    let resizes = recorded(&sf).count(|op| matches!(op, DrawOp::Resize(_)));
    assert_eq!(resizes, 5);
}

#[test]
fn resize_repairs_missing_pixel_ratio() {
    let mut sf = mounted(Tier::Desktop, Phase::Landing, DESKTOP_VP);
    sf.host_mut().set_viewport(Viewport::new(1300.0, 800.0, 0.0));
    sf.on_resize();
    assert_eq!(sf.viewport().pixel_ratio, 1.0);
    assert_eq!(sf.viewport().backing_size(), (1300, 800));
}

#[test]
fn particles_alive_after_every_update() {
    let mut sf = mounted(Tier::Desktop, Phase::Story, DESKTOP_VP);
    for _ in 0..120 {
        run_for(&mut sf, 100.0, HZ_60);
        for p in sf.shooting().live() {
            assert!(p.life > 0.0 && p.life <= 1.0, "life {}", p.life);
        }
    }
    assert!(sf.shooting().total_spawned() >= 5);
}

#[test]
fn spawner_only_for_desktop_story() {
    let cases = [
        (Tier::Desktop, Phase::Landing, DESKTOP_VP),
        (Tier::Desktop, Phase::Proposal, DESKTOP_VP),
        (Tier::Desktop, Phase::Success, DESKTOP_VP),
        (Tier::Tablet, Phase::Story, TABLET_VP),
        (Tier::Tablet, Phase::Landing, TABLET_VP),
    ];
    for (tier, phase, vp) in cases {
        let mut sf = mounted(tier, phase, vp);
        sf.on_spawn_tick();
        run_for(&mut sf, 20_000.0, HZ_60);
        assert_eq!(sf.shooting().total_spawned(), 0, "{tier:?} {phase:?}");
        assert_eq!(sf.host().intervals_started(), 0);
        assert_eq!(recorded(&sf).count(|op| matches!(op, DrawOp::Streak { .. })), 0);
    }
}

#[test]
fn frame_rate_capped_per_tier() {
    let mut desktop = mounted(Tier::Desktop, Phase::Landing, DESKTOP_VP);
    run_for(&mut desktop, 1_000.0, HZ_240);
    let accepted = desktop.stats().accepted;
    assert!((50..=60).contains(&accepted), "desktop accepted {accepted}");
    assert!(desktop.stats().skipped > accepted);
    assert_eq!(recorded(&desktop).frames_drawn() as u64, accepted);

    let mut tablet = mounted(Tier::Tablet, Phase::Landing, TABLET_VP);
    run_for(&mut tablet, 1_000.0, HZ_240);
    let accepted = tablet.stats().accepted;
    assert!((25..=30).contains(&accepted), "tablet accepted {accepted}");
}

#[test]
fn skipped_frames_do_not_advance_twinkle() {
    let mut sf = mounted(Tier::Tablet, Phase::Landing, TABLET_VP);
    let start: Vec<f32> = sf.stars().iter().map(|s| s.phase).collect();
    run_for(&mut sf, 1_000.0, HZ_240);
    let frames = sf.stats().accepted as f32;
    for (s, p0) in sf.stars().iter().zip(start) {
        let expected = p0 + s.twinkle_rate * frames;
        assert!((s.phase - expected).abs() < 1e-3);
    }
}

#[test]
fn teardown_twice_leaves_host_idle() {
    let mut sf = mounted(Tier::Desktop, Phase::Story, DESKTOP_VP);
    run_for(&mut sf, 3_000.0, HZ_60);
    assert!(!sf.host().is_idle());
    sf.teardown();
    sf.teardown();
    assert!(sf.host().is_idle());
    assert!(!sf.is_running());
    assert!(sf.stars().is_empty());
    assert!(sf.shooting().is_empty());

    let drawn = recorded(&sf).frames_drawn();
    run_for(&mut sf, 3_000.0, HZ_60);
    sf.on_frame(99_999.0);
    sf.on_spawn_tick();
    assert_eq!(recorded(&sf).frames_drawn(), drawn);
    assert_eq!(sf.host().pending_frames(), 0);
}

#[test]
fn teardown_before_mount_is_harmless() {
    let mut sf = make(Tier::Desktop, Phase::Story, DESKTOP_VP);
    sf.teardown();
    sf.teardown();
    assert!(sf.host().is_idle());

    let mut sf = mounted(Tier::Mobile, Phase::Story, DESKTOP_VP);
    sf.teardown();
    assert!(sf.host().is_idle());
}

#[test]
fn hearts_drawn_for_desktop_from_proposal() {
    for phase in [Phase::Proposal, Phase::Success] {
        let mut sf = mounted(Tier::Desktop, phase, DESKTOP_VP);
        run_for(&mut sf, 100.0, HZ_60);
        let paths = heart_paths(recorded(&sf).last_frame());
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| p.len() == HEART_SAMPLE_COUNT));
        let dots = recorded(&sf).last_frame().iter().filter(|op| {
            matches!(op, DrawOp::Circle { radius, .. } if *radius == HEART_DOT_RADIUS)
        });
        assert!(dots.count() >= 3 * HEART_SAMPLE_COUNT);
    }
}

#[test]
fn hearts_never_drawn_otherwise() {
    let cases = [
        (Tier::Desktop, Phase::Landing, DESKTOP_VP),
        (Tier::Desktop, Phase::Story, DESKTOP_VP),
        (Tier::Tablet, Phase::Proposal, TABLET_VP),
        (Tier::Tablet, Phase::Success, TABLET_VP),
    ];
    for (tier, phase, vp) in cases {
        let mut sf = mounted(tier, phase, vp);
        run_for(&mut sf, 500.0, HZ_60);
        assert!(recorded(&sf).frames_drawn() > 0);
        assert!(heart_paths(recorded(&sf).ops()).is_empty(), "{tier:?} {phase:?}");
    }
}

#[test]
fn hearts_track_current_viewport() {
    let mut sf = mounted(Tier::Desktop, Phase::Proposal, DESKTOP_VP);
    run_for(&mut sf, 50.0, HZ_60);
    let first = heart_paths(recorded(&sf).last_frame())[0][0];
    sf.host_mut().set_viewport(Viewport::new(2000.0, 1000.0, 1.0));
    sf.on_resize();
    run_for(&mut sf, 50.0, HZ_60);
    let second = heart_paths(recorded(&sf).last_frame())[0][0];
    assert!((first.x - 1440.0 * 0.2).abs() < 1e-3);
    assert!((second.x - 2000.0 * 0.2).abs() < 1e-3);
}

#[test]
fn story_scenario_spawns_five_and_prunes_oldest() {
    let mut sf = mounted(Tier::Desktop, Phase::Story, DESKTOP_VP);
    run_for(&mut sf, 10_000.0, HZ_60);
    assert_eq!(sf.shooting().total_spawned(), 5);

    let mut sf = mounted(Tier::Desktop, Phase::Story, DESKTOP_VP);
    run_for(&mut sf, 5_000.0, HZ_60);
    // spawned at 2000ms and 4000ms; the first lives ~1.7s of 60Hz frames
    assert_eq!(sf.shooting().total_spawned(), 2);
    let serials: Vec<u64> = sf.shooting().live().iter().map(|p| p.serial).collect();
    assert_eq!(serials, vec![1]);
    assert!(recorded(&sf).count(|op| matches!(op, DrawOp::Streak { .. })) > 100);
}

#[test]
fn empty_viewport_keeps_chain_but_draws_nothing() {
    let mut sf = mounted(Tier::Desktop, Phase::Landing, Viewport::new(0.0, 0.0, 1.0));
    run_for(&mut sf, 1_000.0, HZ_60);
    assert!(sf.is_running());
    assert_eq!(sf.host().pending_frames(), 1);
    assert_eq!(recorded(&sf).frames_drawn(), 0);
}

#[test]
fn reconfigure_stops_old_tasks_before_starting_new() {
    let mut sf = mounted(Tier::Desktop, Phase::Landing, DESKTOP_VP);
    run_for(&mut sf, 500.0, HZ_60);
    let star_positions: Vec<_> = sf.stars().iter().map(|s| s.position).collect();

    sf.reconfigure(sf.config().with_phase(Phase::Story));
    assert_eq!(sf.host().pending_frames(), 1);
    assert_eq!(sf.host().active_intervals(), 1);
    assert_eq!(sf.host().resize_listeners(), 1);

    run_for(&mut sf, 4_100.0, HZ_60);
    assert_eq!(sf.shooting().total_spawned(), 2);

    sf.reconfigure(sf.config().with_phase(Phase::Proposal));
    assert_eq!(sf.host().active_intervals(), 0);
    assert_eq!(sf.host().pending_frames(), 1);
    run_for(&mut sf, 10_000.0, HZ_60);
    assert_eq!(sf.shooting().total_spawned(), 2);
    assert!(sf.shooting().is_empty());

    let after: Vec<_> = sf.stars().iter().map(|s| s.position).collect();
    assert_eq!(star_positions, after);
}

#[test]
fn reconfigure_to_mobile_and_back() {
    let mut sf = mounted(Tier::Desktop, Phase::Landing, DESKTOP_VP);
    sf.reconfigure(sf.config().with_tier(Tier::Mobile));
    assert!(sf.host().is_idle());
    assert!(!sf.is_running());

    sf.reconfigure(sf.config().with_tier(Tier::Tablet));
    assert!(sf.is_running());
    // count stays at the value set for the session
    assert_eq!(sf.stars().len(), DESKTOP_STAR_COUNT);
    run_for(&mut sf, 1_000.0, HZ_240);
    assert!(sf.stats().accepted <= 60 + 30);
}

#[test]
fn reconfigure_after_teardown_does_not_restart() {
    let mut sf = mounted(Tier::Desktop, Phase::Landing, DESKTOP_VP);
    sf.teardown();
    sf.reconfigure(sf.config().with_phase(Phase::Story));
    assert!(sf.host().is_idle());
}

#[test]
fn same_config_is_a_no_op() {
    let mut sf = mounted(Tier::Desktop, Phase::Story, DESKTOP_VP);
    let requests = sf.host().frame_requests();
    sf.reconfigure(sf.config());
    assert_eq!(sf.host().frame_requests(), requests);
    assert_eq!(sf.host().intervals_started(), 1);
}
