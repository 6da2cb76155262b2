use std::collections::BTreeMap;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use super::{Building, Face, MaterialRef};

// raw triangle buffers for one material
#[derive(Default)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn push_face(&mut self, face: &Face) {
        let base = self.positions.len() as u32;
        let normal = face.normal();

        for vertex in face.vertices() {
            self.positions.push(vertex.to_array());
            self.normals.push(normal.to_array());
            self.uvs.push(planar_uv(*vertex, normal));
        }

        // quads split along the 0-2 diagonal, winding kept
        match face {
            Face::Quad(_) => self.indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]),
            Face::Triangle(_) => self.indices.extend([base, base + 1, base + 2]),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn into_mesh(self) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
        );

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs);
        mesh.insert_indices(Indices::U32(self.indices));

        mesh
    }
}

// world-space uv, projected along the normal's dominant axis (1 uv unit = 1 meter)
fn planar_uv(vertex: Vec3, normal: Vec3) -> [f32; 2] {
    let n = normal.abs();
    if n.y >= n.x && n.y >= n.z {
        [vertex.x, vertex.z]
    } else if n.x >= n.z {
        [vertex.z, vertex.y]
    } else {
        [vertex.x, vertex.y]
    }
}

/// Batch every face of the building into one buffer per material
pub fn building_buffers(building: &Building) -> BTreeMap<MaterialRef, MeshBuffers> {
    let mut batches: BTreeMap<MaterialRef, MeshBuffers> = BTreeMap::new();
    for face in building.faces() {
        batches.entry(face.material()).or_default().push_face(&face);
    }
    batches
}
