// spherical orbit camera around the building's vertical center
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::config::*;
use crate::systems::interaction::egui_wants_pointer;
use crate::systems::mesh::BuildingParams;
use bevy_egui::EguiContexts;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(OrbitCamera::default())
            .insert_resource(OrbitDrag::default())
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, (camera_drag, camera_zoom, apply_orbit_camera).chain());
    }
}

/// Orbit state; angles in radians, pitch kept inside the pole guard
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub distance: f32,
    pub angle_x: f32, // pitch
    pub angle_y: f32, // yaw
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }
}

impl OrbitCamera {
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.angle_y += dx * ORBIT_SENSITIVITY;
        self.angle_x = (self.angle_x + dy * ORBIT_SENSITIVITY).clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    pub fn zoom(&mut self, dy: f32) {
        self.distance = (self.distance + dy * ZOOM_SENSITIVITY).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// the camera always looks at the middle of the building's height
    pub fn target(&self, building_height: f32) -> Vec3 {
        Vec3::new(0.0, building_height / 2.0, 0.0)
    }

    pub fn eye_position(&self, building_height: f32) -> Vec3 {
        let (sin_x, cos_x) = self.angle_x.sin_cos();
        let (sin_y, cos_y) = self.angle_y.sin_cos();
        Vec3::new(
            self.distance * sin_y * cos_x,
            self.distance * sin_x + building_height / 2.0,
            self.distance * cos_y * cos_x,
        )
    }

    pub fn transform(&self, building_height: f32) -> Transform {
        Transform::from_translation(self.eye_position(building_height))
            .looking_at(self.target(building_height), Vec3::Y)
    }
}

// last cursor position per held button
#[derive(Resource, Default)]
pub struct OrbitDrag {
    pub orbiting: Option<Vec2>,
    pub zooming: Option<Vec2>,
}

fn spawn_camera(mut commands: Commands, orbit: Res<OrbitCamera>, params: Res<BuildingParams>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(params.building_height()),
    ));
}

/// Left drag orbits, right drag zooms
fn camera_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<OrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_released(MouseButton::Left) {
        drag.orbiting = None;
    }
    if buttons.just_released(MouseButton::Right) {
        drag.zooming = None;
    }

    // presses that start over the panel belong to egui
    if !egui_wants_pointer(&mut contexts) {
        if buttons.just_pressed(MouseButton::Left) {
            drag.orbiting = cursor;
        }
        if buttons.just_pressed(MouseButton::Right) {
            drag.zooming = cursor;
        }
    }

    let Some(pos) = cursor else {
        return;
    };

    if let Some(last) = drag.orbiting {
        let delta = pos - last;
        if delta != Vec2::ZERO {
            orbit.orbit(delta.x, delta.y);
        }
        drag.orbiting = Some(pos);
    }
    if let Some(last) = drag.zooming {
        let delta = pos - last;
        if delta.y != 0.0 {
            orbit.zoom(delta.y);
        }
        drag.zooming = Some(pos);
    }
}

/// Scroll wheel, treated like a short right drag
fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut orbit: ResMut<OrbitCamera>,
    mut contexts: EguiContexts,
) {
    let over_ui = egui_wants_pointer(&mut contexts);
    for evt in scroll_evts.read() {
        if over_ui {
            continue;
        }
        let lines = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        // wheel up moves closer
        orbit.zoom(-lines * SCROLL_ZOOM_STEP);
    }
}

/// Apply OrbitCamera state to the camera transform; the target follows building height
fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    params: Res<BuildingParams>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() && !params.is_changed() {
        return;
    }
    let Ok(mut transform) = query.single_mut() else {
        return;
    };
    *transform = orbit.transform(params.building_height());
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pitch_stays_clamped() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 10_000.0);
        assert_eq!(cam.angle_x, CAMERA_PITCH_LIMIT);
        cam.orbit(0.0, -10_000.0);
        assert_eq!(cam.angle_x, -CAMERA_PITCH_LIMIT);
    }

    #[test]
    fn test_distance_stays_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(10_000.0);
        assert_eq!(cam.distance, CAMERA_MAX_DISTANCE);
        cam.zoom(-10_000.0);
        assert_eq!(cam.distance, CAMERA_MIN_DISTANCE);
    }

    #[test]
    fn test_arbitrary_sequence_respects_limits() {
        let mut cam = OrbitCamera::default();
        // deterministic pseudo random walk
        let mut state: u32 = 12345;
        for _ in 0..1000 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let a = (state >> 16) as f32 / 32768.0 - 1.0;
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let b = (state >> 16) as f32 / 32768.0 - 1.0;
            cam.orbit(a * 300.0, b * 300.0);
            cam.zoom(b * 200.0);
            assert!((-CAMERA_PITCH_LIMIT..=CAMERA_PITCH_LIMIT).contains(&cam.angle_x));
            assert!((CAMERA_MIN_DISTANCE..=CAMERA_MAX_DISTANCE).contains(&cam.distance));
        }
    }

    #[test]
    fn test_orbit_sensitivity() {
        let mut cam = OrbitCamera::default();
        cam.orbit(10.0, 20.0);
        assert_abs_diff_eq!(cam.angle_y, 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.angle_x, 0.2, epsilon = 1e-6);
        cam.zoom(10.0);
        assert_abs_diff_eq!(cam.distance, 55.0, epsilon = 1e-6);
    }

    #[test]
    fn test_eye_position_tracks_building_height() {
        let cam = OrbitCamera::default();
        let eye = cam.eye_position(9.0);
        assert_abs_diff_eq!(eye.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(eye.y, 4.5, epsilon = 1e-5);
        assert_abs_diff_eq!(eye.z, 50.0, epsilon = 1e-5);
        assert_eq!(cam.target(9.0), Vec3::new(0.0, 4.5, 0.0));
    }

    #[test]
    fn test_eye_distance_from_target() {
        let mut cam = OrbitCamera::default();
        cam.orbit(73.0, -41.0);
        let eye = cam.eye_position(12.0);
        assert_abs_diff_eq!(eye.distance(cam.target(12.0)), cam.distance, epsilon = 1e-3);
    }
}
