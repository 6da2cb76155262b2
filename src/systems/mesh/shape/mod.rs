// pure procedural generation of the building
// nothing in here touches the ECS, every call rebuilds from BuildingParams

use bevy::prelude::*;

use crate::systems::mesh::WallSide;

pub mod building;
pub mod floor;
pub mod material;
pub mod mesh_gen;
pub mod roof;
pub mod stair;
pub mod utils;
pub mod wall;
pub mod window;

pub use material::MaterialRef;

/// Planar four-vertex face, counter-clockwise seen from `normal`
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub vertices: [Vec3; 4],
    pub normal: Vec3,
    pub material: MaterialRef,
}

impl Quad {
    /// normal is taken from the winding, so the two can never disagree
    pub fn new(vertices: [Vec3; 4], material: MaterialRef) -> Self {
        Self {
            normal: utils::newell_normal(&vertices),
            vertices,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.vertices.iter().copied().sum::<Vec3>() / 4.0
    }

    /// axis aligned rectangle on a horizontal plane, facing up or down
    pub fn horizontal(min: Vec2, max: Vec2, y: f32, facing_up: bool, material: MaterialRef) -> Self {
        let (x0, z0) = (min.x, min.y);
        let (x1, z1) = (max.x, max.y);
        let vertices = if facing_up {
            [
                Vec3::new(x0, y, z0),
                Vec3::new(x0, y, z1),
                Vec3::new(x1, y, z1),
                Vec3::new(x1, y, z0),
            ]
        } else {
            [
                Vec3::new(x0, y, z0),
                Vec3::new(x1, y, z0),
                Vec3::new(x1, y, z1),
                Vec3::new(x0, y, z1),
            ]
        };
        Self::new(vertices, material)
    }

    fn transformed(&self, rotation: Quat, translation: Vec3) -> Self {
        Self {
            vertices: self.vertices.map(|v| rotation * v + translation),
            normal: rotation * self.normal,
            material: self.material,
        }
    }
}

/// Three-vertex face, counter-clockwise seen from `normal`
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
    pub material: MaterialRef,
}

impl Triangle {
    pub fn new(vertices: [Vec3; 3], material: MaterialRef) -> Self {
        Self {
            normal: utils::newell_normal(&vertices),
            vertices,
            material,
        }
    }

    fn transformed(&self, rotation: Quat, translation: Vec3) -> Self {
        Self {
            vertices: self.vertices.map(|v| rotation * v + translation),
            normal: rotation * self.normal,
            material: self.material,
        }
    }
}

/// Any drawable face, what the renderer walks
#[derive(Clone, Debug, PartialEq)]
pub enum Face {
    Quad(Quad),
    Triangle(Triangle),
}

impl Face {
    pub fn vertices(&self) -> &[Vec3] {
        match self {
            Face::Quad(quad) => &quad.vertices,
            Face::Triangle(tri) => &tri.vertices,
        }
    }

    pub fn normal(&self) -> Vec3 {
        match self {
            Face::Quad(quad) => quad.normal,
            Face::Triangle(tri) => tri.normal,
        }
    }

    pub fn material(&self) -> MaterialRef {
        match self {
            Face::Quad(quad) => quad.material,
            Face::Triangle(tri) => tri.material,
        }
    }

    pub fn transformed(&self, rotation: Quat, translation: Vec3) -> Self {
        match self {
            Face::Quad(quad) => Face::Quad(quad.transformed(rotation, translation)),
            Face::Triangle(tri) => Face::Triangle(tri.transformed(rotation, translation)),
        }
    }
}

/// One window slot on a wall; `center` is the bottom-center of the opening
#[derive(Clone, Debug)]
pub struct WindowInset {
    pub center: Vec3,
    pub faces: Vec<Face>,
}

#[derive(Clone, Debug)]
pub struct Wall {
    pub side: WallSide,
    pub visible: bool,
    pub outward: Vec3,
    pub panel: Vec<Quad>, // empty when the wall is hidden
    pub windows: Vec<WindowInset>,
}

#[derive(Clone, Debug)]
pub struct StairRun {
    pub num_steps: u32,
    pub step_height: f32,
    pub step_depth: f32,
    pub steps: Vec<Quad>, // four faces per step, top/front/right/left
    pub landing: Quad,
}

#[derive(Clone, Debug)]
pub struct Floor {
    pub index: u32,
    pub y: f32,
    pub walls: Vec<Wall>,
    pub floor: Quad,
    pub ceiling: Quad,
    pub stairwell_cutout: Option<Quad>,
    pub stairs: Option<StairRun>,
}

#[derive(Clone, Debug, Default)]
pub struct Roof {
    pub base_y: f32,
    pub apex: Vec3,
    pub faces: Vec<Triangle>, // empty when the roof is switched off
}

#[derive(Clone, Debug)]
pub struct Building {
    pub floors: Vec<Floor>,
    pub roof: Roof,
    pub top_y: f32,
}

impl Building {
    /// flatten every drawable face, bottom floor first, roof last
    pub fn faces(&self) -> Vec<Face> {
        let mut faces = Vec::new();
        for floor in &self.floors {
            for wall in &floor.walls {
                faces.extend(wall.panel.iter().cloned().map(Face::Quad));
                for window in &wall.windows {
                    faces.extend(window.faces.iter().cloned());
                }
            }
            faces.push(Face::Quad(floor.floor.clone()));
            faces.push(Face::Quad(floor.ceiling.clone()));
            if let Some(cutout) = &floor.stairwell_cutout {
                faces.push(Face::Quad(cutout.clone()));
            }
            if let Some(stairs) = &floor.stairs {
                faces.extend(stairs.steps.iter().cloned().map(Face::Quad));
                faces.push(Face::Quad(stairs.landing.clone()));
            }
        }
        faces.extend(self.roof.faces.iter().cloned().map(Face::Triangle));
        faces
    }
}
