// one story: four walls, slab and ceiling, stairwell marker and the flight up

use bevy::prelude::*;

use crate::config::STAIRWELL_MARGIN;
use crate::systems::mesh::{BuildingParams, WallSide};
use super::stair::{generate_stair, stair_offset_x};
use super::wall::{generate_wall, WindowLayout};
use super::{Floor, MaterialRef, Quad};

pub fn assemble_floor(params: &BuildingParams, index: u32) -> Floor {
    let y = index as f32 * params.floor_height;
    let base = Vec3::Y * y;
    let material = MaterialRef::surface(params.material_index);

    let layout = WindowLayout {
        show: params.show_windows,
        spacing: params.window_spacing,
        width: params.window_width,
        height: params.window_height,
        style: params.window_style,
    };

    let walls = WallSide::ALL
        .iter()
        .map(|&side| {
            let (start, end) = side.edge(params.width, params.length);
            generate_wall(
                side,
                start + base,
                end + base,
                params.floor_height,
                params.wall_drawn(side),
                material,
                &layout,
            )
        })
        .collect();

    // slab and ceiling are never toggled
    let half = Vec2::new(params.width, params.length) / 2.0;
    let floor = Quad::horizontal(-half, half, y, false, material);
    let ceiling = Quad::horizontal(-half, half, y + params.floor_height, true, material);

    let stairwell_cutout = (index > 0).then(|| stairwell_cutout(params, y));
    let stairs = (index + 1 < params.num_floors)
        .then(|| generate_stair(&params.stairs, params.width, y, params.floor_height));

    Floor {
        index,
        y,
        walls,
        floor,
        ceiling,
        stairwell_cutout,
        stairs,
    }
}

// cosmetic darker patch over the slab, the slab itself is not cut
fn stairwell_cutout(params: &BuildingParams, y: f32) -> Quad {
    let cx = stair_offset_x(params.width);
    let half_w = params.stairs.width / 2.0 + STAIRWELL_MARGIN;
    Quad::horizontal(
        Vec2::new(cx - half_w, 0.0),
        Vec2::new(cx + half_w, params.stairs.total_run + params.stairs.width),
        y,
        true,
        MaterialRef::STAIRWELL,
    )
}
