//! Collision world containing all static geometry.
//!
//! The collision world stores brushes and answers sweep, ray and overlap
//! queries against them. Z is up.

use glam::Vec3;
use parry3d::math::{Isometry, Point, Real, Vector};
use parry3d::query::{contact, Ray};
use parry3d::shape::SharedShape;

use super::flags::ContentFlags;
use super::trace::{TraceResult, TraceShape};

/// Extra reach when looking up the surface a sweep stopped against.
const CONTACT_MARGIN: f32 = 0.05;

/// A piece of collision geometry in the world.
#[derive(Debug, Clone)]
pub struct CollisionBrush {
    /// Unique identifier for this brush.
    pub id: u32,
    /// The collision shape.
    pub shape: SharedShape,
    /// Position and orientation in world space.
    pub transform: Isometry<Real>,
    /// Content flags (solid, clip, trigger, etc.).
    pub contents: ContentFlags,
}

/// Filter applied to every query.
#[derive(Debug, Clone, Copy)]
pub struct QueryFilter {
    /// Content flags to collide with.
    pub mask: ContentFlags,
    /// Brush to skip, typically the querying character's own volume.
    pub ignore: Option<u32>,
}

impl QueryFilter {
    pub fn new(mask: ContentFlags) -> Self {
        Self { mask, ignore: None }
    }

    pub fn ignoring(mut self, brush: u32) -> Self {
        self.ignore = Some(brush);
        self
    }

    #[inline]
    fn accepts(&self, brush: &CollisionBrush) -> bool {
        self.mask.intersects(brush.contents) && self.ignore != Some(brush.id)
    }
}

impl From<ContentFlags> for QueryFilter {
    fn from(mask: ContentFlags) -> Self {
        Self::new(mask)
    }
}

/// The collision world containing all geometry.
///
/// Immutable during queries, so it can be shared across threads.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    brushes: Vec<CollisionBrush>,
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis-aligned box to the world and return its brush id.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis (x, y, z)
    /// * `contents` - Content flags for collision filtering
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, contents: ContentFlags) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let shape = SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z);
        let transform = Isometry::translation(center.x, center.y, center.z);

        tracing::trace!(id, ?center, ?half_extents, "add box brush");
        self.brushes.push(CollisionBrush {
            id,
            shape,
            transform,
            contents,
        });

        id
    }

    /// Sweep a shape from `start` to `end` (shape centers) and report the
    /// first blocking contact.
    ///
    /// The path is sampled at most [`TraceShape::max_sweep_step`] apart, so
    /// a long move cannot jump over a wall; the first blocked sample is then
    /// refined by bisection.
    pub fn trace(
        &self,
        start: Vec3,
        end: Vec3,
        shape: TraceShape,
        filter: impl Into<QueryFilter>,
    ) -> TraceResult {
        let filter = filter.into();
        let delta = end - start;
        let distance = delta.length();

        // No movement - just check if position is valid
        if distance < 0.0001 {
            return if self.overlaps(start, shape, &filter) {
                TraceResult {
                    fraction: 0.0,
                    end_position: start,
                    hit_normal: Some(Vec3::Z),
                    hit_contents: ContentFlags::SOLID,
                    started_in_solid: true,
                    all_solid: true,
                    hit_brush: None,
                }
            } else {
                TraceResult::no_hit(start)
            };
        }

        self.sweep(start, delta, distance, shape, &filter)
    }

    /// Cast a ray through the world.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (will be normalized)
    /// * `max_distance` - Maximum trace distance
    /// * `filter` - Content mask and optional excluded brush
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        filter: impl Into<QueryFilter>,
    ) -> TraceResult {
        let filter = filter.into();
        let dir = direction.normalize_or_zero();
        if dir.length_squared() < 0.5 || max_distance <= 0.0 {
            return TraceResult::no_hit(origin);
        }

        let ray = Ray::new(
            Point::new(origin.x, origin.y, origin.z),
            Vector::new(dir.x, dir.y, dir.z),
        );

        let mut closest: Option<(f32, Vec3, &CollisionBrush)> = None;

        for brush in self.brushes.iter().filter(|b| filter.accepts(b)) {
            let Some(hit) = brush
                .shape
                .cast_ray_and_get_normal(&brush.transform, &ray, max_distance, true)
            else {
                continue;
            };

            let toi = hit.time_of_impact;
            if closest.as_ref().map_or(true, |(dist, _, _)| toi < *dist) {
                let normal = Vec3::new(hit.normal.x, hit.normal.y, hit.normal.z);
                // Rays starting inside a solid report a zero normal
                let normal = if normal.length_squared() > 0.5 { normal } else { -dir };
                closest = Some((toi, normal, brush));
            }
        }

        match closest {
            Some((distance, normal, brush)) => TraceResult {
                fraction: distance / max_distance,
                end_position: origin + dir * distance,
                hit_normal: Some(normal),
                hit_contents: brush.contents,
                started_in_solid: distance <= 0.0,
                all_solid: false,
                hit_brush: Some(brush.id),
            },
            None => TraceResult::no_hit(origin + dir * max_distance),
        }
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    fn overlaps(&self, position: Vec3, shape: TraceShape, filter: &QueryFilter) -> bool {
        let test_shape = parry_shape(shape);
        let test_transform = Isometry::translation(position.x, position.y, position.z);

        self.brushes.iter().filter(|b| filter.accepts(b)).any(|brush| {
            matches!(
                contact(
                    &test_transform,
                    test_shape.as_ref(),
                    &brush.transform,
                    brush.shape.as_ref(),
                    0.0,
                ),
                Ok(Some(_))
            )
        })
    }

    fn sweep(
        &self,
        start: Vec3,
        delta: Vec3,
        distance: f32,
        shape: TraceShape,
        filter: &QueryFilter,
    ) -> TraceResult {
        let start_in_solid = self.overlaps(start, shape, filter);

        let samples = (distance / shape.max_sweep_step()).ceil().max(1.0) as u32;
        let mut clear = 0.0_f32;
        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            if self.overlaps(start + delta * t, shape, filter) {
                return self.refine_hit(start, delta, clear, t, shape, filter, start_in_solid);
            }
            clear = t;
        }

        TraceResult {
            started_in_solid: start_in_solid,
            ..TraceResult::no_hit(start + delta)
        }
    }

    /// Bisect between a clear fraction `lo` and a blocked fraction `hi`.
    #[allow(clippy::too_many_arguments)]
    fn refine_hit(
        &self,
        start: Vec3,
        delta: Vec3,
        mut lo: f32,
        mut hi: f32,
        shape: TraceShape,
        filter: &QueryFilter,
        start_in_solid: bool,
    ) -> TraceResult {
        // 12 iterations over one sample spacing is well under a unit
        for _ in 0..12 {
            let mid = (lo + hi) * 0.5;
            if self.overlaps(start + delta * mid, shape, filter) {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let end_position = start + delta * lo;

        let gap = delta.length() * (hi - lo);
        let nearest = self.nearest_contact(end_position, shape, filter, gap + CONTACT_MARGIN);
        let (hit_normal, hit_contents, hit_brush) = match nearest {
            Some((normal, brush)) => (normal, brush.contents, Some(brush.id)),
            None => ((-delta).normalize_or_zero(), ContentFlags::SOLID, None),
        };

        TraceResult {
            fraction: lo,
            end_position,
            hit_normal: Some(hit_normal),
            hit_contents,
            started_in_solid: start_in_solid,
            all_solid: start_in_solid && lo < 0.001,
            hit_brush,
        }
    }

    /// Closest brush within `prediction` of the shape, with the surface
    /// normal pointing back at the shape.
    fn nearest_contact(
        &self,
        position: Vec3,
        shape: TraceShape,
        filter: &QueryFilter,
        prediction: f32,
    ) -> Option<(Vec3, &CollisionBrush)> {
        let test_shape = parry_shape(shape);
        let test_transform = Isometry::translation(position.x, position.y, position.z);

        let mut nearest: Option<(f32, Vec3, &CollisionBrush)> = None;
        for brush in self.brushes.iter().filter(|b| filter.accepts(b)) {
            let Ok(Some(hit)) = contact(
                &test_transform,
                test_shape.as_ref(),
                &brush.transform,
                brush.shape.as_ref(),
                prediction,
            ) else {
                continue;
            };
            if nearest.as_ref().map_or(true, |(dist, _, _)| hit.dist < *dist) {
                let normal = -Vec3::new(hit.normal1.x, hit.normal1.y, hit.normal1.z);
                nearest = Some((hit.dist, normal, brush));
            }
        }
        nearest.map(|(_, normal, brush)| (normal, brush))
    }
}

fn parry_shape(shape: TraceShape) -> SharedShape {
    // Parry takes the half-height of the segment between cap centers
    SharedShape::capsule_z((shape.half_height - shape.radius).max(0.0), shape.radius)
}
