// UTILS

use bevy::prelude::*;

/// Face normal of a planar polygon by Newell's method
/// https://www.khronos.org/opengl/wiki/Calculating_a_Surface_Normal
/// # Returns the unit normal, or `Vec3::ZERO` for degenerate polygons (zero area).
pub fn newell_normal(vertices: &[Vec3]) -> Vec3 {
    let n = vertices.len();
    let mut normal = Vec3::ZERO;

    for i in 0..n {
        let current = vertices[i];
        let next = vertices[(i + 1) % n];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    normal.normalize_or_zero()
}

/// Signed area of a planar polygon measured against `normal`
/// # Returns a positive area when the vertices wind counter-clockwise seen from the normal's side.
pub fn signed_area(vertices: &[Vec3], normal: Vec3) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let n = vertices.len();
    let mut cross_sum = Vec3::ZERO;

    for i in 0..n {
        let j = (i + 1) % n;
        cross_sum += vertices[i].cross(vertices[j]);
    }

    cross_sum.dot(normal.normalize_or_zero()) / 2.0
}

/// Rotation about +Y that turns a local +Z facing frame toward `outward`
/// front = 0, right = 90, back = 180, left = -90 degrees
pub fn facing_rotation(outward: Vec3) -> Quat {
    Quat::from_rotation_y(outward.x.atan2(outward.z))
}

/// point on a circle in the local XY window plane
pub fn arc_point(center: Vec2, radius: f32, degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    center + Vec2::new(radians.cos(), radians.sin()) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_newell_normal_ccw_square() {
        let square = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(newell_normal(&square), Vec3::Z);
        assert_abs_diff_eq!(signed_area(&square, Vec3::Z), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(signed_area(&square, -Vec3::Z), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_newell_normal_degenerate() {
        let line = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
        assert_eq!(newell_normal(&line), Vec3::ZERO);
    }

    #[test]
    fn test_facing_rotation_maps_local_z() {
        for outward in [Vec3::Z, Vec3::X, -Vec3::Z, -Vec3::X] {
            let mapped = facing_rotation(outward) * Vec3::Z;
            assert!(mapped.distance(outward) < 1e-5, "{outward} -> {mapped}");
        }
    }

    #[test]
    fn test_arc_point() {
        let p = arc_point(Vec2::new(0.0, 1.0), 0.5, 90.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 1.5, epsilon = 1e-6);
    }
}
