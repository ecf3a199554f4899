//! The fixed ball-drop scene
//!
//! What exists and where lives here; how each shape is built lives in
//! [`crate::gfx::geometry`].

use cgmath::Vector3;

use crate::gfx::{geometry::HeightfieldSlope, resources::Material, scene::Light};

pub struct ShaderSpec {
    pub name: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
}

pub const SHADERS: [ShaderSpec; 5] = [
    ShaderSpec { name: "basic", vertex: "shaders/basic.vert", fragment: "shaders/basic.frag" },
    ShaderSpec { name: "building", vertex: "shaders/building.vert", fragment: "shaders/building.frag" },
    ShaderSpec { name: "street", vertex: "shaders/street.vert", fragment: "shaders/street.frag" },
    ShaderSpec { name: "ball", vertex: "shaders/basic.vert", fragment: "shaders/ball.frag" },
    ShaderSpec { name: "pole", vertex: "shaders/basic.vert", fragment: "shaders/pole.frag" },
];

pub struct TextureSpec {
    pub name: &'static str,
    pub path: &'static str,
}

pub const TEXTURES: [TextureSpec; 1] = [TextureSpec { name: "star_color", path: "tex/star.png" }];

/// Phong terms as plain arrays so tables can stay `const`
#[derive(Debug, Clone, Copy)]
pub struct PhongSpec {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl PhongSpec {
    pub fn to_material(&self) -> Material {
        Material::new(self.ambient, self.diffuse, self.specular, self.shininess)
    }
}

pub struct LightSpec {
    pub position: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl LightSpec {
    pub fn to_light(&self) -> Light {
        Light::new(Vector3::from(self.position), self.ambient, self.diffuse, self.specular)
    }
}

pub const LIGHTS: [LightSpec; 2] = [
    // White key light above the street
    LightSpec {
        position: [0.0, 8.0, 0.0],
        ambient: [0.1, 0.1, 0.1],
        diffuse: [2.0, 2.0, 2.0],
        specular: [1.0, 1.0, 1.0],
    },
    // Magenta fill toward the ball
    LightSpec {
        position: [0.0, 5.0, -3.0],
        ambient: [0.0, 0.0, 0.0],
        diffuse: [0.8, 0.0, 0.8],
        specular: [0.8, 0.5, 0.8],
    },
];

/// Night-sky gradient, RGBA
pub const BACKGROUND_TOP: [f32; 4] = [0.01, 0.01, 0.05, 1.0];
pub const BACKGROUND_BOTTOM: [f32; 4] = [0.05, 0.05, 0.15, 1.0];

pub struct GroundSpec {
    pub width: f32,
    pub length: f32,
    pub slope: HeightfieldSlope,
    pub nx: u32,
    pub nz: u32,
    pub position: [f32; 3],
    pub material: PhongSpec,
    pub shader: &'static str,
}

/// Slanted down toward the back so the far building bases sink below it
pub const GROUND: GroundSpec = GroundSpec {
    width: 15.0,
    length: 60.0,
    slope: HeightfieldSlope::new(0.0, -0.067, 0.0),
    nx: 120,
    nz: 120,
    position: [0.0, -2.0, 10.0],
    material: PhongSpec {
        ambient: [0.05, 0.05, 0.05],
        diffuse: [0.25, 0.25, 0.25],
        specular: [0.05, 0.05, 0.05],
        shininess: 8.0,
    },
    shader: "street",
};

pub struct BuildingSpec {
    pub name: &'static str,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub position: [f32; 3],
    pub diffuse: [f32; 3],
}

impl BuildingSpec {
    pub fn material(&self) -> Material {
        PhongSpec {
            diffuse: self.diffuse,
            ..BUILDING_FINISH
        }
        .to_material()
    }
}

/// Shared by every building; only the diffuse tint varies
pub const BUILDING_FINISH: PhongSpec = PhongSpec {
    ambient: [0.1, 0.1, 0.1],
    diffuse: [0.3, 0.3, 0.3],
    specular: [0.2, 0.2, 0.2],
    shininess: 32.0,
};

pub const BUILDING_SHADER: &str = "building";

/// Two rows of three, stepping back and getting taller
pub const BUILDINGS: [BuildingSpec; 6] = [
    BuildingSpec {
        name: "building_left_front",
        width: 2.0,
        depth: 3.0,
        height: 8.0,
        position: [-4.0, -3.0, 0.0],
        diffuse: [0.3, 0.35, 0.35],
    },
    BuildingSpec {
        name: "building_right_front",
        width: 2.0,
        depth: 3.0,
        height: 8.5,
        position: [4.0, -3.0, 0.0],
        diffuse: [0.3, 0.3, 0.35],
    },
    BuildingSpec {
        name: "building_left_mid",
        width: 1.5,
        depth: 2.5,
        height: 9.5,
        position: [-3.5, -2.0, -5.0],
        diffuse: [0.25, 0.25, 0.3],
    },
    BuildingSpec {
        name: "building_right_mid",
        width: 1.5,
        depth: 2.5,
        height: 10.0,
        position: [3.5, -2.0, -5.0],
        diffuse: [0.25, 0.3, 0.3],
    },
    BuildingSpec {
        name: "building_left_back",
        width: 1.0,
        depth: 2.0,
        height: 11.0,
        position: [-3.0, -1.0, -10.0],
        diffuse: [0.2, 0.2, 0.25],
    },
    BuildingSpec {
        name: "building_right_back",
        width: 1.0,
        depth: 2.0,
        height: 12.0,
        position: [3.0, -1.0, -10.0],
        diffuse: [0.2, 0.25, 0.25],
    },
];

pub struct PoleSpec {
    pub radius: f32,
    pub height: f32,
    pub slices: u32,
    pub position: [f32; 3],
    pub material: PhongSpec,
    pub shader: &'static str,
}

pub const POLE: PoleSpec = PoleSpec {
    radius: 0.15,
    height: 4.0,
    slices: 40,
    position: [0.0, -1.0, -10.0],
    material: PhongSpec {
        ambient: [0.08, 0.08, 0.08],
        diffuse: [0.7, 0.7, 0.75],
        specular: [1.0, 1.0, 1.0],
        shininess: 128.0,
    },
    shader: "pole",
};

pub struct BallSpec {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
    /// Top of the drop; the animator moves Y from here
    pub position: [f32; 3],
    pub drop_distance: f32,
    pub material: PhongSpec,
    pub shader: &'static str,
}

pub const BALL: BallSpec = BallSpec {
    radius: 1.2,
    slices: 40,
    stacks: 40,
    position: [0.0, 3.9, -10.0],
    drop_distance: 3.4,
    material: PhongSpec {
        ambient: [0.5, 0.5, 0.5],
        diffuse: [0.9, 0.9, 0.9],
        specular: [1.0, 1.0, 1.0],
        shininess: 128.0,
    },
    shader: "ball",
};
