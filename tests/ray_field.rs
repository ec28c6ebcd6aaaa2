use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use raycast_demos::{cast_ray, Boundary, InputEvent, RayField, Scene, Wall};

const EPS: f32 = 1e-3;

fn window() -> Boundary {
    Boundary::new(800.0, 600.0).unwrap()
}

fn random_origins(boundary: &Boundary, count: usize) -> Vec<Vec2> {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.random_range(0.0..=boundary.width()),
                rng.random_range(0.0..=boundary.height()),
            )
        })
        .collect()
}

#[test]
fn center_at_zero_degrees_hits_right_wall() {
    let b = window();
    let sample = cast_ray(&b, b.center(), 0, 0.0);

    assert!((sample.first_distance - 400.0).abs() < EPS);
    assert!((sample.first_hit - Vec2::new(800.0, 300.0)).length() < EPS);
    assert_eq!(sample.wall, Wall::Right);
}

#[test]
fn center_at_ninety_degrees_hits_top_wall() {
    let b = window();
    let sample = cast_ray(&b, b.center(), 0, 90.0);

    assert!((sample.first_distance - 300.0).abs() < EPS);
    assert!((sample.first_hit - Vec2::new(400.0, 600.0)).length() < EPS);
    assert_eq!(sample.wall, Wall::Top);
}

#[test]
fn diagonal_in_square_reaches_corner() {
    let b = Boundary::new(500.0, 500.0).unwrap();
    let sample = cast_ray(&b, b.center(), 0, 45.0);

    let half_diagonal = (250.0f32 * 250.0 * 2.0).sqrt();
    assert!((sample.first_distance - half_diagonal).abs() < EPS);
    assert!((sample.first_hit - Vec2::new(500.0, 500.0)).length() < EPS);
    // Straight back through the center to the opposite corner
    assert!((sample.second_distance - 2.0 * half_diagonal).abs() < EPS);
    assert!((sample.second_hit - Vec2::ZERO).length() < EPS);
}

#[test]
fn every_hit_lies_on_the_boundary() {
    let b = window();
    for origin in random_origins(&b, 200) {
        let field = RayField::cast(&b, origin, 360);
        for s in field.samples() {
            assert!(b.on_boundary(s.first_hit, EPS), "first hit {:?} from {:?} at {}", s.first_hit, origin, s.angle);
            assert!(b.on_boundary(s.second_hit, EPS), "second hit {:?} from {:?} at {}", s.second_hit, origin, s.angle);
        }
    }
}

#[test]
fn distances_are_finite_and_non_negative() {
    let b = window();
    let mut origins = random_origins(&b, 100);
    // Corners and edge midpoints are the awkward cases
    origins.extend([
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
        Vec2::new(0.0, 300.0),
        Vec2::new(400.0, 0.0),
    ]);

    for origin in origins {
        for s in RayField::cast(&b, origin, 72).samples() {
            assert!(s.first_distance.is_finite() && s.first_distance >= 0.0);
            assert!(s.second_distance.is_finite() && s.second_distance >= 0.0);
        }
    }
}

#[test]
fn hit_point_matches_distance_along_ray() {
    let b = window();
    for origin in random_origins(&b, 50) {
        for s in RayField::cast(&b, origin, 64).samples() {
            let travelled = (s.first_hit - origin).length();
            assert!((travelled - s.first_distance).abs() < 5e-3);
            let bounced = (s.second_hit - s.first_hit).length();
            assert!((bounced - s.second_distance).abs() < 5e-3);
        }
    }
}

#[test]
fn full_turn_reproduces_the_same_ray() {
    let b = window();
    for origin in random_origins(&b, 20) {
        for step in 0..36 {
            let angle = step as f32 * 10.0;
            let a = cast_ray(&b, origin, 0, angle);
            let c = cast_ray(&b, origin, 0, angle + 360.0);
            assert_eq!(a.wall, c.wall);
            assert!((a.first_distance - c.first_distance).abs() < EPS);
            assert!((a.second_hit - c.second_hit).length() < EPS);
        }
    }
}

#[test]
fn bounce_moves_away_from_the_wall_it_hit() {
    let b = window();
    for origin in random_origins(&b, 50) {
        for s in RayField::cast(&b, origin, 90).samples() {
            let out = s.second_hit - s.first_hit;
            match s.wall {
                Wall::Right => assert!(out.x <= EPS),
                Wall::Left => assert!(out.x >= -EPS),
                Wall::Top => assert!(out.y <= EPS),
                Wall::Bottom => assert!(out.y >= -EPS),
                Wall::Corner => {}
            }
        }
    }
}

#[test]
fn clicks_drive_fresh_snapshots() {
    let b = window();
    let mut scene = Scene::new(b, 24);
    let clicks = [Vec2::new(0.0, 0.0), Vec2::new(799.0, 1.0), Vec2::new(400.0, 300.0)];

    for screen in clicks {
        let field = scene.update(InputEvent::Click { screen }).unwrap();
        assert_eq!(field.origin(), b.screen_to_world(screen));
        assert_eq!(*field, RayField::cast(&b, b.screen_to_world(screen), 24));
    }
}
