// hip roof: four triangles from the footprint edges up to one apex

use bevy::prelude::*;

use super::{MaterialRef, Roof, Triangle};

pub fn generate_roof(width: f32, length: f32, apex_height: f32, base_y: f32, visible: bool) -> Roof {
    let apex = Vec3::new(0.0, base_y + apex_height, 0.0);
    if !visible {
        return Roof {
            base_y,
            apex,
            faces: Vec::new(),
        };
    }

    let hw = width / 2.0;
    let hl = length / 2.0;
    let corner = |x: f32, z: f32| Vec3::new(x, base_y, z);

    // each eave is listed so that eave x (apex - eave start) points out and up
    let eaves = [
        (corner(-hw, hl), corner(hw, hl)),   // front
        (corner(hw, -hl), corner(-hw, -hl)), // back
        (corner(-hw, -hl), corner(-hw, hl)), // left
        (corner(hw, hl), corner(hw, -hl)),   // right
    ];

    let faces = eaves
        .into_iter()
        .map(|(a, b)| Triangle::new([a, b, apex], MaterialRef::ROOF))
        .collect();

    Roof { base_y, apex, faces }
}
