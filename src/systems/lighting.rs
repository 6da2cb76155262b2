// key light always on, optional fill light with shadow maps on both
use bevy::prelude::*;

use crate::config::*;

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(LightingMode::default())
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .add_systems(Startup, spawn_lights)
            .add_systems(Update, apply_lighting_mode.run_if(resource_changed::<LightingMode>));
    }
}

#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LightingMode {
    #[default]
    Single, // one directional light, no shadows
    Dual,   // key + fill, both casting shadows
}

impl LightingMode {
    pub fn toggled(self) -> Self {
        match self {
            LightingMode::Single => LightingMode::Dual,
            LightingMode::Dual => LightingMode::Single,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightingMode::Single => "Single light",
            LightingMode::Dual => "Two lights + shadows",
        }
    }

    pub fn shadows(self) -> bool {
        self == LightingMode::Dual
    }
}

#[derive(Component)]
pub struct KeyLight;

#[derive(Component)]
pub struct FillLight;

fn spawn_lights(mut commands: Commands, mode: Res<LightingMode>) {
    // same direction as a (1, 1, 1, 0) fixed-function light
    commands.spawn((
        KeyLight,
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: mode.shadows(),
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        FillLight,
        DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            shadows_enabled: mode.shadows(),
            ..default()
        },
        Transform::from_xyz(-1.0, 0.8, -0.6).looking_at(Vec3::ZERO, Vec3::Y),
        if mode.shadows() { Visibility::Visible } else { Visibility::Hidden },
    ));
}

fn apply_lighting_mode(
    mode: Res<LightingMode>,
    mut key: Query<&mut DirectionalLight, (With<KeyLight>, Without<FillLight>)>,
    mut fill: Query<(&mut DirectionalLight, &mut Visibility), (With<FillLight>, Without<KeyLight>)>,
) {
    for mut light in key.iter_mut() {
        light.shadows_enabled = mode.shadows();
    }
    for (mut light, mut visibility) in fill.iter_mut() {
        light.shadows_enabled = mode.shadows();
        *visibility = if mode.shadows() { Visibility::Visible } else { Visibility::Hidden };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mode = LightingMode::default();
        assert!(!mode.shadows());
        assert!(mode.toggled().shadows());
        assert_eq!(mode.toggled().toggled(), mode);
    }
}
