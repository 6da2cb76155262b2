// the whole building, rebuilt from scratch on every call

use super::floor::assemble_floor;
use super::roof::generate_roof;
use super::Building;
use crate::systems::mesh::BuildingParams;

/// Pure function of the parameters, what the renderer pulls each pass
pub fn generate_scene(params: &BuildingParams) -> Building {
    assemble_building(params)
}

pub fn assemble_building(params: &BuildingParams) -> Building {
    let floors = (0..params.num_floors)
        .map(|index| assemble_floor(params, index))
        .collect();

    let top_y = params.building_height();
    let roof = generate_roof(params.width, params.length, params.roof_height, top_y, params.show_roof);

    Building { floors, roof, top_y }
}
