// Configuration file, All measurements in real-world meters (1 unit = 1 meter)
// This controls the initial building parameters and the camera limits

// Footprint
pub const BUILDING_WIDTH: f32 = 20.0;
pub const BUILDING_LENGTH: f32 = 15.0;
pub const FOOTPRINT_MIN: f32 = 4.0;    // slider limits only, generator does not validate
pub const FOOTPRINT_MAX: f32 = 100.0;

// Floors
pub const NUM_FLOORS: u32 = 3;
pub const MIN_FLOORS: u32 = 1;
pub const MAX_FLOORS: u32 = 20;
pub const FLOOR_HEIGHT: f32 = 3.0;

// Windows
pub const WINDOW_WIDTH: f32 = 1.2;
pub const WINDOW_HEIGHT: f32 = 1.8;
pub const WINDOW_SPACING: f32 = 3.0;
pub const WINDOW_INSET: f32 = 0.01;          // glass sits just in front of the wall
pub const WINDOW_ARC_STEP_DEG: f32 = 10.0;   // arch and circle sample step
pub const WINDOW_GRID_COLUMNS: usize = 2;
pub const WINDOW_GRID_ROWS: usize = 3;

// Roof
pub const ROOF_HEIGHT: f32 = 2.0;

// Stairs, one run per floor transition
pub const STAIR_WIDTH: f32 = 2.0;
pub const STAIR_TOTAL_RUN: f32 = 3.0;
pub const STAIR_STEP_HEIGHT: f32 = 0.1667; // fixed riser, ~ floor height / steps
pub const STAIR_NUM_STEPS: u32 = 18;
pub const STAIRWELL_MARGIN: f32 = 0.3;     // cutout margin on each side of the run

// Orbit camera
pub const CAMERA_DISTANCE: f32 = 50.0;
pub const CAMERA_MIN_DISTANCE: f32 = 20.0;
pub const CAMERA_MAX_DISTANCE: f32 = 200.0;
pub const CAMERA_PITCH_LIMIT: f32 = 1.2;   // radians, keeps clear of the poles
pub const ORBIT_SENSITIVITY: f32 = 0.01;   // radians per pixel
pub const ZOOM_SENSITIVITY: f32 = 0.5;     // meters per pixel
pub const SCROLL_ZOOM_STEP: f32 = 4.0;     // pixels of drag per wheel line
pub const CAMERA_FOV_DEG: f32 = 30.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 500.0;

// Lighting
pub const AMBIENT_BRIGHTNESS: f32 = 200.0; // ~0.2 of full white
pub const KEY_LIGHT_ILLUMINANCE: f32 = 6_000.0;
pub const FILL_LIGHT_ILLUMINANCE: f32 = 2_500.0;

// Debug axes, red/green/blue for x/y/z
pub const AXIS_LENGTH: f32 = 10.0;
