// fixed surface material catalog
// faces only carry a MaterialRef, the renderer decides how to shade it

/// Phong style material, rgba quadruples plus shininess
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub name: &'static str,
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
}

/// Index into [`CATALOG`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialRef(pub usize);

impl MaterialRef {
    pub const CONCRETE: Self = Self(0);
    pub const BRICK: Self = Self(1);
    pub const GLASS: Self = Self(2);
    pub const ROOF: Self = Self(3);
    pub const STAIRWELL: Self = Self(4);

    /// wall/floor material picked by the user, unknown indices fall back to concrete
    pub fn surface(index: usize) -> Self {
        if index < WALL_MATERIAL_COUNT {
            Self(index)
        } else {
            Self::CONCRETE
        }
    }

    pub fn material(self) -> &'static Material {
        Material::resolve(self.0)
    }
}

/// materials the user can cycle through for walls and slabs
pub const WALL_MATERIAL_COUNT: usize = 2;

pub const CATALOG: [Material; 5] = [
    Material {
        name: "concrete",
        ambient: [0.6, 0.6, 0.6, 1.0],
        diffuse: [0.8, 0.8, 0.8, 1.0],
        specular: [0.2, 0.2, 0.2, 1.0],
        shininess: 10.0,
    },
    Material {
        name: "brick",
        ambient: [0.45, 0.25, 0.15, 1.0],
        diffuse: [0.75, 0.35, 0.25, 1.0],
        specular: [0.1, 0.1, 0.1, 1.0],
        shininess: 5.0,
    },
    Material {
        name: "glass",
        ambient: [0.2, 0.3, 0.4, 0.6],
        diffuse: [0.4, 0.5, 0.6, 0.6],
        specular: [0.9, 0.9, 0.9, 1.0],
        shininess: 96.0,
    },
    Material {
        name: "roof",
        ambient: [0.3, 0.3, 0.4, 1.0],
        diffuse: [0.4, 0.4, 0.5, 1.0],
        specular: [0.2, 0.2, 0.2, 1.0],
        shininess: 15.0,
    },
    // darker patch marking where the stairwell pierces a slab
    Material {
        name: "stairwell",
        ambient: [0.2, 0.2, 0.2, 1.0],
        diffuse: [0.3, 0.3, 0.3, 1.0],
        specular: [0.0, 0.0, 0.0, 1.0],
        shininess: 1.0,
    },
];

impl Material {
    pub fn resolve(index: usize) -> &'static Material {
        CATALOG.get(index).unwrap_or(&CATALOG[0])
    }

    pub fn is_translucent(&self) -> bool {
        self.diffuse[3] < 1.0
    }

    /// map phong shininess (0..128) onto a pbr roughness
    pub fn roughness(&self) -> f32 {
        1.0 - (self.shininess / 128.0).clamp(0.0, 1.0).sqrt()
    }

    pub fn specular_strength(&self) -> f32 {
        (self.specular[0] + self.specular[1] + self.specular[2]) / 3.0
    }
}
