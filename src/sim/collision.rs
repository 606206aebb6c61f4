//! Contact tests between the actor and obstacle segments
//!
//! Obstacles are line segments on the ground plane; the actor is treated as
//! a point with a fixed contact radius around it.

use glam::Vec3;

use super::state::Obstacle;
use crate::consts::COLLISION_RADIUS;

/// Minimum Euclidean distance from a point to a line segment
///
/// Projects the point onto the segment and clamps the parameter to [0, 1],
/// so a zero-length segment degrades to plain point distance.
pub fn distance_to_segment(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();

    if len_sq < 0.0001 {
        // Degenerate segment
        return point.distance(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// True if the actor position touches any obstacle
///
/// Pure existential test; evaluation order is immaterial and the first
/// match short-circuits.
pub fn hit_obstacle(pos: Vec3, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| {
        let (a, b) = o.endpoints();
        distance_to_segment(pos, a, b) < COLLISION_RADIUS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn segment(start: (f32, f32), end: (f32, f32)) -> Obstacle {
        Obstacle {
            id: 1,
            start: Vec2::new(start.0, start.1),
            end: Vec2::new(end.0, end.1),
            vel_x: 0.0,
        }
    }

    #[test]
    fn test_distance_interior_projection() {
        // Segment along the x axis, point straight above its middle
        let d = distance_to_segment(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_clamps_to_endpoint() {
        // Point beyond the end of the segment, closest approach is the cap
        let d = distance_to_segment(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!((d - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_degenerate_segment() {
        let p = Vec3::new(3.0, 4.0, 0.0);
        let a = Vec3::ZERO;
        let d = distance_to_segment(p, a, a);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_collision_threshold() {
        let obstacles = [segment((-1.0, 0.0), (1.0, 0.0))];

        // Actor on the segment: distance 0 < 0.8
        assert!(hit_obstacle(Vec3::ZERO, &obstacles));
        // One unit off the segment in z: 1.0 >= 0.8
        assert!(!hit_obstacle(Vec3::new(0.0, 0.0, 1.0), &obstacles));
        // Just inside the threshold
        assert!(hit_obstacle(Vec3::new(0.0, 0.0, 0.79), &obstacles));
    }

    #[test]
    fn test_jump_clears_obstacle() {
        // Actor directly over the segment but high enough on the arc
        let obstacles = [segment((-1.0, 0.0), (1.0, 0.0))];
        assert!(!hit_obstacle(Vec3::new(0.0, 3.0, 0.0), &obstacles));
    }

    #[test]
    fn test_no_obstacles_never_hits() {
        assert!(!hit_obstacle(Vec3::ZERO, &[]));
    }
}
