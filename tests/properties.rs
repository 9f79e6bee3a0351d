use glam::Vec2;
use proptest::prelude::*;

use theme_balls::sim::resolve_pair;
use theme_balls::{Color, Disc, SimConfig, Simulation};

const C: Color = Color::rgb(0x33, 0x66, 0x99);

fn small_disc_config(count: i64, seed: u64) -> SimConfig {
    SimConfig {
        count,
        size_factor: 1.0,
        speed_divisor: 1.0,
        radius_min: 5.0,
        radius_max: 30.0,
        radius_divisor: 1.0,
        velocity_half_range: 12.0,
        palette: vec![C, Color::rgb(0xFF, 0, 0)],
        seed: Some(seed),
        clamp_after_collisions: true,
    }
}

fn pair(
    pos_a: (f32, f32),
    r_a: f32,
    vel_a: (f32, f32),
    angle: f32,
    gap: f32,
    r_b: f32,
    vel_b: (f32, f32),
) -> (Disc, Disc) {
    let a = Vec2::new(pos_a.0, pos_a.1);
    let dist = (r_a + r_b) * gap;
    let b = a + Vec2::new(angle.cos(), angle.sin()) * dist;
    (
        Disc::placed(a, r_a, Vec2::new(vel_a.0, vel_a.1), C),
        Disc::placed(b, r_b, Vec2::new(vel_b.0, vel_b.1), C),
    )
}

proptest! {
    #[test]
    fn discs_stay_inside_walls(
        seed in any::<u64>(),
        count in 0i64..25,
        width in 100.0f32..1000.0,
        height in 100.0f32..1000.0,
        dt in 0.1f32..2.0,
        steps in 1usize..60,
    ) {
        let mut sim = Simulation::with_config(&small_disc_config(count, seed)).unwrap();
        for _ in 0..steps {
            sim.step(dt, width, height);
            prop_assert_eq!(sim.placed_count(), count as usize);
            for v in sim.snapshot() {
                prop_assert!(v.x >= v.radius && v.x <= width - v.radius, "x={} r={}", v.x, v.radius);
                prop_assert!(v.y >= v.radius && v.y <= height - v.radius, "y={} r={}", v.y, v.radius);
            }
        }
    }

    #[test]
    fn resolved_pair_conserves_momentum_and_energy(
        pos_a in (100.0f32..200.0, 100.0f32..200.0),
        r_a in 2.0f32..50.0,
        r_b in 2.0f32..50.0,
        angle in 0.0f32..std::f32::consts::TAU,
        gap in 0.2f32..0.95,
        vel_a in (-10.0f32..10.0, -10.0f32..10.0),
        vel_b in (-10.0f32..10.0, -10.0f32..10.0),
    ) {
        let (mut a, mut b) = pair(pos_a, r_a, vel_a, angle, gap, r_b, vel_b);
        let p0 = a.vel * a.mass() + b.vel * b.mass();
        let e0 = a.kinetic_energy() + b.kinetic_energy();

        resolve_pair(&mut a, &mut b);

        let p1 = a.vel * a.mass() + b.vel * b.mass();
        let e1 = a.kinetic_energy() + b.kinetic_energy();
        let p_tol = 1e-4 * (p0.length() + 1000.0);
        let e_tol = 1e-4 * (e0 + 100.0);
        prop_assert!((p0 - p1).length() < p_tol, "momentum {} -> {}", p0, p1);
        prop_assert!((e0 - e1).abs() < e_tol, "energy {} -> {}", e0, e1);
    }

    #[test]
    fn overlap_removed_after_one_pass(
        pos_a in (100.0f32..200.0, 100.0f32..200.0),
        r_a in 2.0f32..50.0,
        r_b in 2.0f32..50.0,
        angle in 0.0f32..std::f32::consts::TAU,
        gap in 0.05f32..0.99,
        vel_a in (-10.0f32..10.0, -10.0f32..10.0),
        vel_b in (-10.0f32..10.0, -10.0f32..10.0),
    ) {
        let (mut a, mut b) = pair(pos_a, r_a, vel_a, angle, gap, r_b, vel_b);
        resolve_pair(&mut a, &mut b);
        let dist = a.pos().unwrap().distance(b.pos().unwrap());
        prop_assert!(dist >= (r_a + r_b) * (1.0 - 1e-4), "dist {} < {}", dist, r_a + r_b);
    }

    #[test]
    fn separating_pair_velocities_untouched(
        r_a in 2.0f32..50.0,
        r_b in 2.0f32..50.0,
        angle in 0.0f32..std::f32::consts::TAU,
        gap in 0.2f32..0.95,
        speed_a in 0.1f32..10.0,
        speed_b in 0.1f32..10.0,
    ) {
        // a moves away from b, b moves away from a
        let away = -Vec2::new(angle.cos(), angle.sin());
        let va = away * speed_a;
        let vb = -away * speed_b;
        let (mut a, mut b) = pair((150.0, 150.0), r_a, (va.x, va.y), angle, gap, r_b, (vb.x, vb.y));
        prop_assert!(!resolve_pair(&mut a, &mut b));
        prop_assert_eq!(a.vel, va);
        prop_assert_eq!(b.vel, vb);
    }

    #[test]
    fn same_seed_same_trajectory(seed in any::<u64>(), steps in 1usize..40) {
        let cfg = small_disc_config(12, seed);
        let mut a = Simulation::with_config(&cfg).unwrap();
        let mut b = Simulation::with_config(&cfg).unwrap();
        for _ in 0..steps {
            a.step(1.0, 400.0, 600.0);
            b.step(1.0, 400.0, 600.0);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn concrete_left_wall_scenario() {
    let discs = vec![Disc::placed(
        Vec2::new(5.0, 50.0),
        10.0,
        Vec2::new(-20.0, 0.0),
        C,
    )];
    let mut sim = Simulation::from_discs(discs, &SimConfig::default()).unwrap();
    sim.step(1.0, 200.0, 200.0);

    let v = sim.snapshot()[0];
    assert_eq!((v.x, v.y), (10.0, 50.0));
    assert_eq!(sim.discs()[0].vel, Vec2::new(20.0, 0.0));
}

#[test]
fn lazy_placement_five_discs() {
    let mut sim = Simulation::with_config(&small_disc_config(5, 2024)).unwrap();
    assert_eq!(sim.placed_count(), 0);
    sim.step(1.0, 100.0, 200.0);
    assert!(sim.discs().iter().all(Disc::is_placed));
    for v in sim.snapshot() {
        assert!(v.x >= v.radius && v.x <= 100.0 - v.radius);
        assert!(v.y >= v.radius && v.y <= 200.0 - v.radius);
    }
}

#[test]
fn presets_run_in_phone_viewport() {
    for preset in theme_balls::Preset::ALL {
        let cfg = preset.config().with_seed(5);
        let mut sim = Simulation::with_config(&cfg).unwrap();
        let mut clock = theme_balls::FrameClock::default();
        for _ in 0..120 {
            clock.advance(&mut sim, 1.0 / 60.0, 1080.0, 1920.0);
        }
        assert_eq!(sim.snapshot().len(), cfg.count as usize);
        assert!(sim.total_kinetic_energy().is_finite());
    }
}
