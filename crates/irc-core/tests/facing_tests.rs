// Host-side tests for facing classification against the anchor cubes.

use glam::Vec3;
use irc_core::*;

fn anchors() -> AnchorSet {
    AnchorSet::cardinal(ANCHOR_DISTANCE, ANCHOR_CUBE_SIZE)
}

/// Facing whose axis is strictly closest to `dir`, if there is a unique one.
fn dominant_facing(dir: Vec3) -> Option<Facing> {
    let mut scored: Vec<(f32, Facing)> = Facing::ALL
        .iter()
        .map(|&f| (dir.dot(f.axis()), f))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    (scored[0].0 > scored[1].0 + 1e-3).then_some(scored[0].1)
}

#[test]
fn cardinal_set_has_one_anchor_per_facing() {
    let set = anchors();
    assert_eq!(set.anchors().len(), 6);
    for facing in Facing::ALL {
        let matching: Vec<_> = set.anchors().iter().filter(|a| a.facing == facing).collect();
        assert_eq!(matching.len(), 1, "{facing} should have exactly one anchor");
        assert!((matching[0].center - facing.axis() * ANCHOR_DISTANCE).length() < 1e-6);
        assert!((matching[0].half_extent - ANCHOR_CUBE_SIZE * 0.5).abs() < 1e-6);
    }
}

#[test]
fn axes_follow_the_z_up_scene() {
    assert_eq!(Facing::Front.axis(), Vec3::X);
    assert_eq!(Facing::Back.axis(), -Vec3::X);
    assert_eq!(Facing::Right.axis(), Vec3::Y);
    assert_eq!(Facing::Left.axis(), -Vec3::Y);
    assert_eq!(Facing::Up.axis(), Vec3::Z);
    assert_eq!(Facing::Down.axis(), -Vec3::Z);
}

#[test]
fn looking_down_each_axis_from_the_origin() {
    let set = anchors();
    for facing in Facing::ALL {
        assert_eq!(classify(&set, Vec3::ZERO, facing.axis()), Some(facing));
    }
}

#[test]
fn direction_closest_to_one_anchor_selects_it() {
    let set = anchors();
    let mut checked = 0;
    for x in -3..=3 {
        for y in -3..=3 {
            for z in -3..=3 {
                let dir = Vec3::new(x as f32, y as f32, z as f32).normalize_or_zero();
                if dir == Vec3::ZERO {
                    continue;
                }
                if let Some(expected) = dominant_facing(dir) {
                    assert_eq!(
                        classify(&set, Vec3::ZERO, dir),
                        Some(expected),
                        "direction {dir:?}"
                    );
                    checked += 1;
                }
            }
        }
    }
    assert!(checked > 100);
}

#[test]
fn nearest_intersection_wins() {
    let set = anchors();
    // Outside the ring, looking through the back cube toward the front one
    let origin = Vec3::new(-20.0, 0.0, 0.0);
    let hits = intersect_anchors(&set, origin, Vec3::X);
    let order: Vec<Facing> = hits.iter().map(|h| h.facing).collect();
    assert_eq!(order, vec![Facing::Back, Facing::Front]);
    assert!((hits[0].distance - 5.0).abs() < 1e-4);
    assert!((hits[1].distance - 25.0).abs() < 1e-4);
    assert_eq!(classify(&set, origin, Vec3::X), Some(Facing::Back));
}

#[test]
fn camera_inside_a_cube_sees_past_it() {
    let set = anchors();
    // Default eye (0, 0, 8) sits inside the up cube and looks at the origin
    let eye = Vec3::new(0.0, 0.0, ANCHOR_DISTANCE - CAMERA_OFFSET);
    let dir = (Vec3::ZERO - eye).normalize();
    assert_eq!(classify(&set, eye, dir), Some(Facing::Down));
    let hits = intersect_anchors(&set, eye, dir);
    assert_eq!(hits.len(), 1);
    assert!((hits[0].distance - 13.0).abs() < 1e-4);
}

#[test]
fn anchors_behind_the_camera_are_not_hit() {
    let set = anchors();
    let eye = Vec3::new(0.0, 0.0, 30.0);
    assert_eq!(classify(&set, eye, Vec3::Z), None);
    assert!(intersect_anchors(&set, eye, Vec3::Z).is_empty());
}

#[test]
fn empty_anchor_set_never_classifies() {
    let set = AnchorSet::empty();
    assert!(set.is_empty());
    for facing in Facing::ALL {
        assert_eq!(classify(&set, Vec3::ZERO, facing.axis()), None);
    }
}

#[test]
fn visibility_does_not_affect_hits() {
    let mut set = anchors();
    let dir = Vec3::new(0.2, 1.0, -0.1).normalize();
    set.visible = false;
    let hidden = classify(&set, Vec3::ZERO, dir);
    set.visible = true;
    let shown = classify(&set, Vec3::ZERO, dir);
    assert_eq!(hidden, Some(Facing::Right));
    assert_eq!(hidden, shown);
}

#[test]
fn ray_aabb_basic_hit_and_miss() {
    let min = Vec3::new(5.0, -5.0, -5.0);
    let max = Vec3::new(15.0, 5.0, 5.0);
    let t = ray_aabb(Vec3::ZERO, Vec3::X, min, max);
    assert!(matches!(t, Some(t) if (t - 5.0).abs() < 1e-5));
    // parallel to the box but offset out of it
    assert_eq!(ray_aabb(Vec3::new(0.0, 6.0, 0.0), Vec3::X, min, max), None);
    // pointing away
    assert_eq!(ray_aabb(Vec3::ZERO, -Vec3::X, min, max), None);
}

#[test]
fn zero_direction_hits_nothing() {
    assert_eq!(classify(&anchors(), Vec3::ZERO, Vec3::ZERO), None);
}

#[test]
fn facing_names_and_default() {
    let names: Vec<String> = Facing::ALL.iter().map(|f| f.to_string()).collect();
    assert_eq!(names, ["front", "right", "up", "down", "left", "back"]);
    assert_eq!(Facing::default(), Facing::Right);
}
