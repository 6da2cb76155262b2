// wall panels and their window rows

use bevy::prelude::*;

use crate::systems::mesh::{WallSide, WindowStyle};
use super::utils::facing_rotation;
use super::window::window_faces;
use super::{Face, MaterialRef, Quad, Wall, WindowInset};

/// Window sizing shared by every wall of a floor
#[derive(Clone, Copy, Debug)]
pub struct WindowLayout {
    pub show: bool,
    pub spacing: f32,
    pub width: f32,
    pub height: f32,
    pub style: WindowStyle,
}

/// Fence-post slot positions over `[-half, +half]`.
/// Starts at `-half + spacing` and steps by `spacing + width` while the
/// position stays `<= half - spacing`; the trailing gap is whatever is left.
pub fn window_slots(extent: f32, spacing: f32, width: f32) -> Vec<f32> {
    let half = extent / 2.0;
    let start = -half + spacing;
    let end = half - spacing;
    let step = spacing + width;

    let mut slots = Vec::new();
    if step <= 0.0 {
        return slots;
    }

    // index based so long walls do not accumulate float drift
    let mut i = 0u32;
    loop {
        let t = start + i as f32 * step;
        if t > end {
            break;
        }
        slots.push(t);
        i += 1;
    }
    slots
}

/// Build one wall between two ground points, relative to the floor's base.
/// `edge_start -> edge_end` runs so that `edge x up` is the outward normal.
pub fn generate_wall(
    side: WallSide,
    edge_start: Vec3,
    edge_end: Vec3,
    floor_height: f32,
    visible: bool,
    material: MaterialRef,
    layout: &WindowLayout,
) -> Wall {
    let edge = edge_end - edge_start;
    let outward = edge.cross(Vec3::Y).normalize_or_zero();

    if !visible {
        return Wall {
            side,
            visible,
            outward,
            panel: Vec::new(),
            windows: Vec::new(),
        };
    }

    let up = Vec3::Y * floor_height;
    let panel = Quad::new([edge_start, edge_end, edge_end + up, edge_start + up], material);

    let windows = if layout.show {
        place_windows(edge_start, edge_end, outward, floor_height, layout)
    } else {
        Vec::new()
    };

    Wall {
        side,
        visible,
        outward,
        panel: vec![panel],
        windows,
    }
}

fn place_windows(
    edge_start: Vec3,
    edge_end: Vec3,
    outward: Vec3,
    floor_height: f32,
    layout: &WindowLayout,
) -> Vec<WindowInset> {
    let edge = edge_end - edge_start;
    let midpoint = (edge_start + edge_end) / 2.0;

    // slots run along the positive world axis so front and back rows line up
    let mut axis = edge.normalize_or_zero();
    if axis.x + axis.z < 0.0 {
        axis = -axis;
    }

    let sill = (floor_height - layout.height) / 2.0;
    let rotation = facing_rotation(outward);
    let local = window_faces(layout.style, layout.width, layout.height);

    window_slots(edge.length(), layout.spacing, layout.width)
        .into_iter()
        .map(|t| {
            let center = midpoint + axis * t + Vec3::Y * sill;
            WindowInset {
                center,
                faces: local.iter().map(|f: &Face| f.transformed(rotation, center)).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn layout(style: WindowStyle) -> WindowLayout {
        WindowLayout {
            show: true,
            spacing: 3.0,
            width: 1.2,
            height: 1.8,
            style,
        }
    }

    fn front_wall(visible: bool, layout: &WindowLayout) -> Wall {
        generate_wall(
            WallSide::Front,
            Vec3::new(-10.0, 0.0, 7.5),
            Vec3::new(10.0, 0.0, 7.5),
            3.0,
            visible,
            MaterialRef::CONCRETE,
            layout,
        )
    }

    #[test]
    fn test_default_slots_on_twenty_meter_wall() {
        let slots = window_slots(20.0, 3.0, 1.2);
        let expected = [-7.0, -2.8, 1.4, 5.6];
        assert_eq!(slots.len(), expected.len());
        for (slot, want) in slots.iter().zip(expected) {
            assert_abs_diff_eq!(*slot, want, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_slot_count_formula() {
        for extent in [5.0_f32, 6.5, 9.9, 15.0, 31.3, 57.7] {
            let (spacing, width) = (3.0, 1.2);
            let expected = if extent >= 2.0 * spacing {
                ((extent - 2.0 * spacing) / (spacing + width)).floor() as usize + 1
            } else {
                0
            };
            assert_eq!(window_slots(extent, spacing, width).len(), expected, "extent {extent}");
        }
    }

    #[test]
    fn test_non_positive_step_yields_no_slots() {
        assert!(window_slots(20.0, 0.0, 0.0).is_empty());
        assert!(window_slots(20.0, -2.0, 1.0).is_empty());
    }

    #[test]
    fn test_hidden_wall_is_empty() {
        let wall = front_wall(false, &layout(WindowStyle::Standard));
        assert!(!wall.visible);
        assert!(wall.panel.is_empty());
        assert!(wall.windows.is_empty());
    }

    #[test]
    fn test_visible_wall_panel_faces_out() {
        let wall = front_wall(true, &layout(WindowStyle::Standard));
        assert_eq!(wall.panel.len(), 1);
        assert_eq!(wall.outward, Vec3::Z);
        assert!(wall.panel[0].normal.distance(Vec3::Z) < 1e-6);
        assert_eq!(wall.windows.len(), 4);
    }

    #[test]
    fn test_windows_toggle_keeps_panel() {
        let mut no_windows = layout(WindowStyle::Standard);
        no_windows.show = false;
        let wall = front_wall(true, &no_windows);
        assert_eq!(wall.panel.len(), 1);
        assert!(wall.windows.is_empty());
    }

    #[test]
    fn test_window_sill_centres_window_in_floor() {
        let wall = front_wall(true, &layout(WindowStyle::Standard));
        for window in &wall.windows {
            assert_abs_diff_eq!(window.center.y, 0.6, epsilon = 1e-5);
            assert_abs_diff_eq!(window.center.z, 7.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_style_does_not_move_slots() {
        let reference: Vec<Vec3> = front_wall(true, &layout(WindowStyle::Standard))
            .windows
            .iter()
            .map(|w| w.center)
            .collect();
        for style in WindowStyle::ALL {
            let centers: Vec<Vec3> = front_wall(true, &layout(style)).windows.iter().map(|w| w.center).collect();
            assert_eq!(centers, reference, "{:?}", style);
        }
    }

    #[test]
    fn test_side_wall_windows_face_outward() {
        // left wall of a 20 x 15 footprint
        let wall = generate_wall(
            WallSide::Left,
            Vec3::new(-10.0, 0.0, -7.5),
            Vec3::new(-10.0, 0.0, 7.5),
            3.0,
            true,
            MaterialRef::CONCRETE,
            &layout(WindowStyle::Divided),
        );
        assert_eq!(wall.outward, Vec3::NEG_X);
        assert_eq!(wall.windows.len(), window_slots(15.0, 3.0, 1.2).len());
        for window in &wall.windows {
            for face in &window.faces {
                assert!(face.normal().distance(Vec3::NEG_X) < 1e-5);
                // glass sits just outside the wall plane
                assert!(face.vertices().iter().all(|v| v.x < -10.0));
            }
        }
    }

    #[test]
    fn test_back_wall_slots_match_front() {
        let back = generate_wall(
            WallSide::Back,
            Vec3::new(10.0, 0.0, -7.5),
            Vec3::new(-10.0, 0.0, -7.5),
            3.0,
            true,
            MaterialRef::CONCRETE,
            &layout(WindowStyle::Standard),
        );
        let front = front_wall(true, &layout(WindowStyle::Standard));
        let back_x: Vec<f32> = back.windows.iter().map(|w| w.center.x).collect();
        let front_x: Vec<f32> = front.windows.iter().map(|w| w.center.x).collect();
        for (b, f) in back_x.iter().zip(&front_x) {
            assert_abs_diff_eq!(*b, *f, epsilon = 1e-5);
        }
        assert_eq!(back.outward, Vec3::NEG_Z);
    }
}
