// this is the entry point for the building generation plugin
use bevy::prelude::*;

use crate::config::*;

pub mod scene;
pub mod shape;

/// The four facades, in the order floors list their walls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right];

    pub fn index(self) -> usize {
        match self {
            WallSide::Front => 0,
            WallSide::Back => 1,
            WallSide::Left => 2,
            WallSide::Right => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WallSide::Front => "Front",
            WallSide::Back => "Back",
            WallSide::Left => "Left",
            WallSide::Right => "Right",
        }
    }

    pub fn outward(self) -> Vec3 {
        match self {
            WallSide::Front => Vec3::Z,
            WallSide::Back => Vec3::NEG_Z,
            WallSide::Left => Vec3::NEG_X,
            WallSide::Right => Vec3::X,
        }
    }

    /// ground edge of this facade for a footprint centred on the origin,
    /// ordered so that (end - start) x up is the outward normal
    pub fn edge(self, width: f32, length: f32) -> (Vec3, Vec3) {
        let hw = width / 2.0;
        let hl = length / 2.0;
        match self {
            WallSide::Front => (Vec3::new(-hw, 0.0, hl), Vec3::new(hw, 0.0, hl)),
            WallSide::Right => (Vec3::new(hw, 0.0, hl), Vec3::new(hw, 0.0, -hl)),
            WallSide::Back => (Vec3::new(hw, 0.0, -hl), Vec3::new(-hw, 0.0, -hl)),
            WallSide::Left => (Vec3::new(-hw, 0.0, -hl), Vec3::new(-hw, 0.0, hl)),
        }
    }
}

// window tessellation styles, all share the same footprint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WindowStyle {
    #[default]
    Standard,
    Arched,
    Divided,
    Circular,
}

impl WindowStyle {
    pub const ALL: [WindowStyle; 4] = [
        WindowStyle::Standard,
        WindowStyle::Arched,
        WindowStyle::Divided,
        WindowStyle::Circular,
    ];

    /// unknown selectors degrade to Standard
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    pub fn label(self) -> &'static str {
        match self {
            WindowStyle::Standard => "Standard",
            WindowStyle::Arched => "Arched",
            WindowStyle::Divided => "Divided",
            WindowStyle::Circular => "Circular",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StairParams {
    pub width: f32,
    pub step_height: f32, // fixed riser
    pub total_run: f32,
    pub num_steps: u32,
}

impl StairParams {
    pub fn step_depth(&self) -> f32 {
        self.total_run / self.num_steps as f32
    }
}

impl Default for StairParams {
    fn default() -> Self {
        Self {
            width: STAIR_WIDTH,
            step_height: STAIR_STEP_HEIGHT,
            total_run: STAIR_TOTAL_RUN,
            num_steps: STAIR_NUM_STEPS,
        }
    }
}

// building generation parameters
// every generator reads these, nothing caches what they produce
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct BuildingParams {
    pub width: f32,
    pub length: f32,
    pub floor_height: f32,
    pub num_floors: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub window_spacing: f32,
    pub roof_height: f32,
    pub stairs: StairParams,
    pub wall_visible: [bool; 4], // indexed by WallSide::index
    pub show_all_walls: bool,    // master switch, AND-ed with each wall
    pub show_windows: bool,
    pub show_roof: bool,
    pub window_style: WindowStyle,
    pub material_index: usize,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            width: BUILDING_WIDTH,
            length: BUILDING_LENGTH,
            floor_height: FLOOR_HEIGHT,
            num_floors: NUM_FLOORS,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            window_spacing: WINDOW_SPACING,
            roof_height: ROOF_HEIGHT,
            stairs: StairParams::default(),
            wall_visible: [true; 4],
            show_all_walls: true,
            show_windows: true,
            show_roof: true,
            window_style: WindowStyle::default(),
            material_index: 0,
        }
    }
}

impl BuildingParams {
    pub fn building_height(&self) -> f32 {
        self.num_floors as f32 * self.floor_height
    }

    /// a wall is drawn only when its own flag and the master flag are both on
    pub fn wall_drawn(&self, side: WallSide) -> bool {
        self.wall_visible[side.index()] && self.show_all_walls
    }

    // footprint is taken as given, degenerate sizes just give degenerate faces
    pub fn set_footprint(&mut self, width: f32, length: f32) {
        self.width = width;
        self.length = length;
    }

    pub fn set_floor_count(&mut self, floors: u32) {
        self.num_floors = floors.clamp(MIN_FLOORS, MAX_FLOORS);
    }

    pub fn add_floor(&mut self) {
        self.set_floor_count(self.num_floors + 1);
    }

    pub fn remove_floor(&mut self) {
        self.set_floor_count(self.num_floors.saturating_sub(1));
    }

    pub fn toggle_wall(&mut self, side: WallSide) {
        let flag = &mut self.wall_visible[side.index()];
        *flag = !*flag;
    }

    pub fn toggle_all_walls(&mut self) {
        self.show_all_walls = !self.show_all_walls;
    }

    pub fn toggle_windows(&mut self) {
        self.show_windows = !self.show_windows;
    }

    pub fn toggle_roof(&mut self) {
        self.show_roof = !self.show_roof;
    }

    pub fn cycle_material(&mut self) {
        self.material_index = (self.material_index + 1) % shape::material::WALL_MATERIAL_COUNT;
    }

    pub fn cycle_window_style(&mut self) {
        self.window_style = self.window_style.next();
    }
}

// main plugin for generation
pub struct BuildingGenerationPlugin;

impl Plugin for BuildingGenerationPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(BuildingParams::default())
            .add_event::<crate::systems::export::ExportEvent>()
            .add_systems(Startup, scene::setup_palette)
            .add_systems(
                Update,
                (
                    scene::rebuild_building.run_if(resource_changed::<BuildingParams>),
                    crate::systems::export::handle_export,
                ),
            );
    }
}
