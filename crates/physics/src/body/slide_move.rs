//! Slide move algorithm for collision response.
//!
//! Sweeps the body along its velocity and clips against whatever it hits so
//! it slides along walls and floors instead of stopping dead.

use glam::Vec3;

use crate::collision::{CollisionWorld, QueryFilter, TraceShape};

/// Maximum number of collision planes to track during slide move.
const MAX_CLIP_PLANES: usize = 5;

/// Clip velocity against a surface normal.
///
/// Removes the component of velocity going into the surface, with a small
/// overbounce to prevent sticking.
pub fn clip_velocity(velocity: Vec3, normal: Vec3, overbounce: f32) -> Vec3 {
    let backoff = velocity.dot(normal);

    let adjusted_backoff = if backoff < 0.0 {
        backoff * overbounce
    } else {
        backoff / overbounce
    };

    velocity - normal * adjusted_backoff
}

/// Move a shape through the world, sliding along every surface it touches.
///
/// `position` and `velocity` are updated in place. Returns whether the full
/// movement succeeded without any collisions.
#[allow(clippy::too_many_arguments)]
pub fn slide_move(
    world: &CollisionWorld,
    position: &mut Vec3,
    velocity: &mut Vec3,
    shape: TraceShape,
    filter: QueryFilter,
    delta_time: f32,
    overbounce: f32,
    max_iterations: usize,
) -> bool {
    let mut time_remaining = delta_time;
    let original_velocity = *velocity;
    let mut planes = [Vec3::ZERO; MAX_CLIP_PLANES];
    let mut num_planes = 0;

    for _ in 0..max_iterations {
        if velocity.length_squared() < 0.0001 || time_remaining <= 0.0 {
            break;
        }

        let target = *position + *velocity * time_remaining;
        let trace = world.trace(*position, target, shape, filter);

        if !trace.hit_something() {
            *position = trace.end_position;
            return num_planes == 0;
        }

        if trace.fraction > 0.0 {
            *position = trace.end_position;
        }
        time_remaining *= 1.0 - trace.fraction;

        let Some(normal) = trace.hit_normal else {
            continue;
        };

        if trace.all_solid {
            tracing::trace!(?position, "slide move stuck in solid");
            *velocity = Vec3::ZERO;
            return false;
        }

        if num_planes < MAX_CLIP_PLANES {
            planes[num_planes] = normal;
            num_planes += 1;
        }

        // Find a clipped velocity that leaves every plane
        let found = (0..num_planes).find_map(|i| {
            let clipped = clip_velocity(*velocity, planes[i], overbounce);
            let leaves_all = (0..num_planes)
                .filter(|&j| j != i)
                .all(|j| clipped.dot(planes[j]) >= -0.01);
            leaves_all.then_some(clipped)
        });

        match found {
            Some(clipped) => *velocity = clipped,
            None if num_planes >= 2 => {
                // Slide along the crease between the first two planes
                let crease = planes[0].cross(planes[1]).normalize_or_zero();
                *velocity = crease * original_velocity.dot(crease);
                if velocity.dot(planes[0]) < -0.01 || velocity.dot(planes[1]) < -0.01 {
                    *velocity = Vec3::ZERO;
                    return false;
                }
            }
            None => {
                *velocity = Vec3::ZERO;
                return false;
            }
        }
    }

    num_planes == 0
}
