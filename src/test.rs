// end to end generation scenarios

use approx::assert_abs_diff_eq;
use bevy::prelude::*;

use crate::systems::mesh::shape::building::{assemble_building, generate_scene};
use crate::systems::mesh::shape::stair::stair_offset_x;
use crate::systems::mesh::shape::utils::signed_area;
use crate::systems::mesh::shape::wall::window_slots;
use crate::systems::mesh::shape::{Building, Face};
use crate::systems::mesh::{BuildingParams, WallSide, WindowStyle};

fn three_story() -> BuildingParams {
    let mut params = BuildingParams::default();
    params.set_footprint(20.0, 15.0);
    params.set_floor_count(3);
    params.floor_height = 3.0;
    params
}

#[test]
fn test_three_story_scenario() {
    let params = three_story();
    assert_eq!(params.building_height(), 9.0);

    let building = assemble_building(&params);
    let elevations: Vec<f32> = building.floors.iter().map(|f| f.y).collect();
    assert_eq!(elevations, vec![0.0, 3.0, 6.0]);
    assert_eq!(building.top_y, 9.0);
    assert_eq!(building.roof.faces.len(), 4);
    assert_abs_diff_eq!(building.roof.apex.y, 9.0 + params.roof_height, epsilon = 1e-6);

    let middle = &building.floors[1];
    assert!(middle.stairwell_cutout.is_some());
    assert!(middle.stairs.is_some());

    let top = &building.floors[2];
    assert!(top.stairwell_cutout.is_some());
    assert!(top.stairs.is_none());
}

#[test]
fn test_landings_meet_cutouts_above() {
    let mut params = three_story();
    params.set_floor_count(6);
    let building = assemble_building(&params);
    let offset = stair_offset_x(params.width);

    for i in 0..building.floors.len() - 1 {
        let stairs = building.floors[i].stairs.as_ref().unwrap();
        for v in stairs.landing.vertices {
            assert_abs_diff_eq!(v.y, i as f32 * params.floor_height + params.floor_height, epsilon = 1e-5);
        }
        let run_x = stairs.steps.iter().map(|q| q.center().x).sum::<f32>() / stairs.steps.len() as f32;
        let cutout = building.floors[i + 1].stairwell_cutout.as_ref().unwrap();
        assert_abs_diff_eq!(run_x, offset, epsilon = 1e-4);
        assert_abs_diff_eq!(cutout.center().x, offset, epsilon = 1e-4);
    }
    assert!(building.floors.last().unwrap().stairs.is_none());
}

#[test]
fn test_window_rows_on_default_footprint() {
    let building = generate_scene(&three_story());
    for floor in &building.floors {
        for wall in &floor.walls {
            let extent = match wall.side {
                WallSide::Front | WallSide::Back => 20.0,
                WallSide::Left | WallSide::Right => 15.0,
            };
            assert_eq!(wall.windows.len(), window_slots(extent, 3.0, 1.2).len());
        }
    }
    let front = &building.floors[0].walls[0];
    let xs: Vec<f32> = front.windows.iter().map(|w| w.center.x).collect();
    for (x, want) in xs.iter().zip([-7.0, -2.8, 1.4, 5.6]) {
        assert_abs_diff_eq!(*x, want, epsilon = 1e-4);
    }
}

#[test]
fn test_style_switch_keeps_layout() {
    let mut params = three_story();
    let centers = |building: &Building| -> Vec<Vec3> {
        building
            .floors
            .iter()
            .flat_map(|f| f.walls.iter())
            .flat_map(|w| w.windows.iter().map(|win| win.center))
            .collect()
    };
    let reference = centers(&generate_scene(&params));
    for _ in 0..WindowStyle::ALL.len() {
        params.cycle_window_style();
        assert_eq!(centers(&generate_scene(&params)), reference);
    }
}

#[test]
fn test_hidden_walls_ignore_window_flag() {
    let mut params = three_story();
    params.toggle_all_walls();
    assert!(params.show_windows);
    let building = generate_scene(&params);
    for floor in &building.floors {
        assert!(floor.walls.iter().all(|w| w.panel.is_empty() && w.windows.is_empty()));
    }
}

#[test]
fn test_roof_toggle() {
    let mut params = three_story();
    params.toggle_roof();
    assert!(generate_scene(&params).roof.faces.is_empty());
    params.toggle_roof();
    let roof = generate_scene(&params).roof;
    assert_eq!(roof.faces.len(), 4);
    assert!(roof.faces.iter().all(|f| f.normal.y > 0.0));
}

#[test]
fn test_all_faces_wind_with_their_normal() {
    for style in WindowStyle::ALL {
        let mut params = three_story();
        params.window_style = style;
        for face in generate_scene(&params).faces() {
            let area = signed_area(face.vertices(), face.normal());
            assert!(area > 0.0, "{:?} face winds against its normal", style);
            assert_abs_diff_eq!(face.normal().length(), 1.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_degenerate_footprint_still_generates() {
    let mut params = three_story();
    params.set_footprint(0.0, 0.0);
    let building = generate_scene(&params);
    assert_eq!(building.floors.len(), 3);
    // zero width wall: no window fits, the panel is zero-area
    let front = &building.floors[0].walls[0];
    assert!(front.windows.is_empty());
    assert!(front.panel.iter().all(|q| q.normal == Vec3::ZERO));
    assert!(building.faces().iter().all(|f| match f {
        Face::Quad(q) => q.vertices.iter().all(|v| v.is_finite()),
        Face::Triangle(t) => t.vertices.iter().all(|v| v.is_finite()),
    }));
}
