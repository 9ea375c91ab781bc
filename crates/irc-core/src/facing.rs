//! Facing classification.
//!
//! Six invisible cube proxies sit on the cardinal axes around the model. Each
//! frame the camera casts a ray along its view direction; the closest proxy it
//! hits decides which way the viewer is facing. The overlay images are keyed by
//! that facing.

use crate::constants::{forward_vec3, right_vec3, up_vec3};
use glam::Vec3;
use smallvec::SmallVec;
use std::fmt;

/// Gross direction the camera is looking toward. Starts out as `Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Front,
    Back,
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl Facing {
    pub const ALL: [Facing; 6] = [
        Facing::Front,
        Facing::Right,
        Facing::Up,
        Facing::Down,
        Facing::Left,
        Facing::Back,
    ];

    /// Unit axis the anchor for this facing sits on.
    pub fn axis(self) -> Vec3 {
        match self {
            Facing::Front => forward_vec3(),
            Facing::Back => -forward_vec3(),
            Facing::Right => right_vec3(),
            Facing::Left => -right_vec3(),
            Facing::Up => up_vec3(),
            Facing::Down => -up_vec3(),
        }
    }

    /// Lowercase name, also the prefix of the facing's image files.
    pub fn name(self) -> &'static str {
        match self {
            Facing::Front => "front",
            Facing::Back => "back",
            Facing::Left => "left",
            Facing::Right => "right",
            Facing::Up => "up",
            Facing::Down => "down",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned cube proxy tagged with the facing it stands for.
#[derive(Clone, Debug)]
pub struct Anchor {
    pub facing: Facing,
    pub center: Vec3,
    pub half_extent: f32,
}

impl Anchor {
    pub fn min(&self) -> Vec3 {
        self.center - Vec3::splat(self.half_extent)
    }

    pub fn max(&self) -> Vec3 {
        self.center + Vec3::splat(self.half_extent)
    }
}

/// The fixed ring of anchor proxies.
///
/// `visible` only controls whether the renderer draws the proxies as a debug
/// aid; hit testing ignores it.
#[derive(Clone, Debug, Default)]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
    pub visible: bool,
}

impl AnchorSet {
    /// One cube of edge `cube_size` per cardinal direction, `distance` from the origin.
    pub fn cardinal(distance: f32, cube_size: f32) -> Self {
        let anchors = Facing::ALL
            .iter()
            .map(|&facing| Anchor {
                facing,
                center: facing.axis() * distance,
                half_extent: cube_size * 0.5,
            })
            .collect();
        Self {
            anchors,
            visible: false,
        }
    }

    /// A set with no anchors; nothing is ever hit.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// Intersection of a ray with one anchor.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub facing: Facing,
    pub distance: f32,
}

/// Slab test against the box `[min, max]`.
///
/// Returns the distance to the entry face. Faces are single sided, so a ray
/// starting inside the box (or past it) does not hit it.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    // zero direction components give infinite slab distances; a parallel ray
    // outside a slab misses, and a zero direction never gets a finite entry
    if t_near.is_finite() && t_near <= t_far && t_near >= 0.0 {
        Some(t_near)
    } else {
        None
    }
}

/// Every anchor hit by the ray, closest first.
pub fn intersect_anchors(
    anchors: &AnchorSet,
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> SmallVec<[Hit; 6]> {
    let mut hits: SmallVec<[Hit; 6]> = anchors
        .anchors
        .iter()
        .filter_map(|a| {
            ray_aabb(ray_origin, ray_dir, a.min(), a.max()).map(|distance| Hit {
                facing: a.facing,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Facing of the nearest anchor along the camera ray, or `None` when the ray
/// hits nothing (the caller keeps its current facing).
pub fn classify(anchors: &AnchorSet, camera_pos: Vec3, camera_dir: Vec3) -> Option<Facing> {
    intersect_anchors(anchors, camera_pos, camera_dir)
        .first()
        .map(|hit| hit.facing)
}
