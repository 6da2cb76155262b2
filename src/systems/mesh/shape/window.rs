// window tessellation in the window's local frame
// x runs across the opening, y up from the sill, +z faces out of the wall
// every style stays inside the same width x height box so slots never move

use bevy::prelude::*;

use crate::config::{WINDOW_ARC_STEP_DEG, WINDOW_GRID_COLUMNS, WINDOW_GRID_ROWS, WINDOW_INSET};
use crate::systems::mesh::WindowStyle;
use super::utils::arc_point;
use super::{Face, MaterialRef, Quad, Triangle};

pub fn window_faces(style: WindowStyle, width: f32, height: f32) -> Vec<Face> {
    match style {
        WindowStyle::Standard => vec![Face::Quad(rect(-width / 2.0, 0.0, width / 2.0, height))],
        WindowStyle::Arched => arched(width, height),
        WindowStyle::Divided => divided(width, height),
        WindowStyle::Circular => circular(width, height),
    }
}

// local rectangle between two corners, wound counter-clockwise toward +z
fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Quad {
    Quad::new(
        [
            Vec3::new(x0, y0, WINDOW_INSET),
            Vec3::new(x1, y0, WINDOW_INSET),
            Vec3::new(x1, y1, WINDOW_INSET),
            Vec3::new(x0, y1, WINDOW_INSET),
        ],
        MaterialRef::GLASS,
    )
}

// triangle fan around `center` from `start` to `end` degrees
fn fan(center: Vec2, radius: f32, start: f32, end: f32) -> Vec<Face> {
    let segments = ((end - start) / WINDOW_ARC_STEP_DEG).round() as usize;
    let hub = center.extend(WINDOW_INSET);

    (0..segments)
        .map(|i| {
            let a = start + i as f32 * WINDOW_ARC_STEP_DEG;
            let b = a + WINDOW_ARC_STEP_DEG;
            Face::Triangle(Triangle::new(
                [
                    hub,
                    arc_point(center, radius, a).extend(WINDOW_INSET),
                    arc_point(center, radius, b).extend(WINDOW_INSET),
                ],
                MaterialRef::GLASS,
            ))
        })
        .collect()
}

// rectangular body topped by a half circle, the arc's crown touches the window top
fn arched(width: f32, height: f32) -> Vec<Face> {
    let radius = width / 2.0;
    let spring = height - radius;

    let mut faces = vec![Face::Quad(rect(-radius, 0.0, radius, spring))];
    faces.extend(fan(Vec2::new(0.0, spring), radius, 0.0, 180.0));
    faces
}

fn divided(width: f32, height: f32) -> Vec<Face> {
    let pane_w = width / WINDOW_GRID_COLUMNS as f32;
    let pane_h = height / WINDOW_GRID_ROWS as f32;
    let left = -width / 2.0;

    let mut faces = Vec::with_capacity(WINDOW_GRID_COLUMNS * WINDOW_GRID_ROWS);
    for row in 0..WINDOW_GRID_ROWS {
        for col in 0..WINDOW_GRID_COLUMNS {
            let x0 = left + col as f32 * pane_w;
            let y0 = row as f32 * pane_h;
            faces.push(Face::Quad(rect(x0, y0, x0 + pane_w, y0 + pane_h)));
        }
    }
    faces
}

// round window centred in the box, radius limited by the narrower side
fn circular(width: f32, height: f32) -> Vec<Face> {
    let radius = width.min(height) / 2.0;
    fan(Vec2::new(0.0, height / 2.0), radius, 0.0, 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1.2;
    const H: f32 = 1.8;

    fn within_footprint(faces: &[Face]) -> bool {
        faces.iter().flat_map(|f| f.vertices().iter()).all(|v| {
            v.x >= -W / 2.0 - 1e-5 && v.x <= W / 2.0 + 1e-5 && v.y >= -1e-5 && v.y <= H + 1e-5
        })
    }

    #[test]
    fn test_face_counts_per_style() {
        assert_eq!(window_faces(WindowStyle::Standard, W, H).len(), 1);
        assert_eq!(window_faces(WindowStyle::Arched, W, H).len(), 1 + 18);
        assert_eq!(window_faces(WindowStyle::Divided, W, H).len(), 6);
        assert_eq!(window_faces(WindowStyle::Circular, W, H).len(), 36);
    }

    #[test]
    fn test_all_styles_fit_same_box() {
        for style in WindowStyle::ALL {
            let faces = window_faces(style, W, H);
            assert!(within_footprint(&faces), "{:?} leaves the window box", style);
        }
    }

    #[test]
    fn test_all_window_faces_point_out() {
        for style in WindowStyle::ALL {
            for face in window_faces(style, W, H) {
                assert!(face.normal().distance(Vec3::Z) < 1e-5, "{:?} normal {}", style, face.normal());
                assert_eq!(face.material(), MaterialRef::GLASS);
            }
        }
    }

    #[test]
    fn test_arch_crown_reaches_top() {
        let faces = window_faces(WindowStyle::Arched, W, H);
        let top = faces
            .iter()
            .flat_map(|f| f.vertices().iter())
            .map(|v| v.y)
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((top - H).abs() < 1e-5);
    }

    #[test]
    fn test_divided_panes_tile_window() {
        let area: f32 = window_faces(WindowStyle::Divided, W, H)
            .iter()
            .map(|f| super::super::utils::signed_area(f.vertices(), Vec3::Z))
            .sum();
        assert!((area - W * H).abs() < 1e-4);
    }
}
