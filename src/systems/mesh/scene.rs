use bevy::prelude::*;

use super::shape::building::generate_scene;
use super::shape::material::{CATALOG, Material};
use super::shape::mesh_gen::building_buffers;
use super::shape::MaterialRef;
use super::BuildingParams;

// entity hierarchy components
#[derive(Component)]
pub struct BuildingRoot {
    pub floors: u32,
    pub height: f32,
}

#[derive(Component)]
pub struct MaterialBatch(pub MaterialRef);

// one pbr material per catalog entry, shared by every rebuild
#[derive(Resource)]
pub struct MaterialPalette(pub Vec<Handle<StandardMaterial>>);

impl MaterialPalette {
    pub fn get(&self, material: MaterialRef) -> Handle<StandardMaterial> {
        self.0
            .get(material.0)
            .or_else(|| self.0.first())
            .cloned()
            .unwrap_or_default()
    }
}

pub fn standard_material(material: &Material, stairwell: bool) -> StandardMaterial {
    let [r, g, b, a] = material.diffuse;
    StandardMaterial {
        base_color: Color::srgba(r, g, b, a),
        perceptual_roughness: material.roughness(),
        reflectance: material.specular_strength(),
        alpha_mode: if material.is_translucent() { AlphaMode::Blend } else { AlphaMode::Opaque },
        // the marker is coplanar with the slab, pull it forward
        depth_bias: if stairwell { 100.0 } else { 0.0 },
        ..default()
    }
}

pub fn setup_palette(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    let handles = CATALOG
        .iter()
        .enumerate()
        .map(|(i, material)| materials.add(standard_material(material, MaterialRef(i) == MaterialRef::STAIRWELL)))
        .collect();
    commands.insert_resource(MaterialPalette(handles));
}

pub fn spawn_building(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    palette: &MaterialPalette,
    params: &BuildingParams,
) -> Entity {
    let building = generate_scene(params);
    let batches = building_buffers(&building);

    let root = commands
        .spawn((
            BuildingRoot {
                floors: building.floors.len() as u32,
                height: building.top_y,
            },
            Transform::default(),
            Visibility::Visible,
        ))
        .id();

    let mut triangles = 0;
    let mut children = Vec::with_capacity(batches.len());
    for (material, buffers) in batches {
        triangles += buffers.triangle_count();
        let child = commands
            .spawn((
                MaterialBatch(material),
                Mesh3d(meshes.add(buffers.into_mesh())),
                MeshMaterial3d(palette.get(material)),
                Transform::default(),
                Visibility::Inherited,
            ))
            .id();
        children.push(child);
    }
    commands.entity(root).add_children(&children);

    debug!(
        "Built {} floors, {} triangles in {} material batches",
        building.floors.len(),
        triangles,
        children.len()
    );

    root
}

// full rebuild whenever the parameters change, the old tree is dropped
pub fn rebuild_building(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    palette: Res<MaterialPalette>,
    params: Res<BuildingParams>,
    query: Query<Entity, With<BuildingRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }

    spawn_building(&mut commands, &mut meshes, &palette, &params);
}
