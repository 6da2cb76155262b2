// one straight stair flight per floor transition
// the run climbs along +z from the floor's center line, offset a quarter width in x

use bevy::prelude::*;

use crate::systems::mesh::StairParams;
use super::{MaterialRef, Quad, StairRun};

/// x offset shared by every flight and every stairwell cutout
pub fn stair_offset_x(building_width: f32) -> f32 {
    building_width / 4.0
}

/// Depth of step `i`'s far edge; the last edge is pinned to `total_run`
/// so `num_steps * step_depth` closes exactly.
fn step_edge(stairs: &StairParams, i: u32) -> f32 {
    if i >= stairs.num_steps {
        stairs.total_run
    } else {
        i as f32 * stairs.step_depth()
    }
}

pub fn generate_stair(
    stairs: &StairParams,
    building_width: f32,
    floor_base_y: f32,
    floor_height: f32,
) -> StairRun {
    let cx = stair_offset_x(building_width);
    let x1 = cx - stairs.width / 2.0;
    let x2 = cx + stairs.width / 2.0;
    let material = MaterialRef::CONCRETE;

    let mut steps = Vec::with_capacity(stairs.num_steps as usize * 4);
    for i in 0..stairs.num_steps {
        let y1 = floor_base_y + i as f32 * stairs.step_height;
        let y2 = floor_base_y + (i + 1) as f32 * stairs.step_height;
        let z1 = step_edge(stairs, i);
        let z2 = step_edge(stairs, i + 1);

        // tread
        steps.push(Quad::new(
            [
                Vec3::new(x1, y2, z1),
                Vec3::new(x1, y2, z2),
                Vec3::new(x2, y2, z2),
                Vec3::new(x2, y2, z1),
            ],
            material,
        ));
        // front
        steps.push(Quad::new(
            [
                Vec3::new(x1, y1, z2),
                Vec3::new(x2, y1, z2),
                Vec3::new(x2, y2, z2),
                Vec3::new(x1, y2, z2),
            ],
            material,
        ));
        // right side
        steps.push(Quad::new(
            [
                Vec3::new(x2, y1, z2),
                Vec3::new(x2, y1, z1),
                Vec3::new(x2, y2, z1),
                Vec3::new(x2, y2, z2),
            ],
            material,
        ));
        // left side
        steps.push(Quad::new(
            [
                Vec3::new(x1, y1, z1),
                Vec3::new(x1, y1, z2),
                Vec3::new(x1, y2, z2),
                Vec3::new(x1, y2, z1),
            ],
            material,
        ));
        // no back face, treads are open underneath
    }

    let landing = Quad::horizontal(
        Vec2::new(x1, stairs.total_run),
        Vec2::new(x2, stairs.total_run + stairs.width),
        floor_base_y + floor_height,
        true,
        material,
    );

    StairRun {
        num_steps: stairs.num_steps,
        step_height: stairs.step_height,
        step_depth: stairs.step_depth(),
        steps,
        landing,
    }
}
