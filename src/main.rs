use bevy::prelude::*;
use bevy::window::WindowPlugin;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::gizmos::config::{GizmoConfigStore, DefaultGizmoConfigGroup};
use bevy_egui::EguiPlugin;

pub mod config;
pub mod systems;

#[cfg(test)]
pub mod test;

// import modules here
use systems::camera::OrbitCameraPlugin;
use systems::grid::GridPlugin;
use systems::lighting::LightingPlugin;
use systems::mesh::BuildingGenerationPlugin;

use crate::systems::interaction;
use crate::systems::ui::UIPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Building Generator".into(),
                mode: bevy::window::WindowMode::Windowed,
                resolution: bevy::window::WindowResolution::new(1280.0, 800.0),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())

        // my custom plugins
        .add_plugins(GridPlugin)
        .add_plugins(LightingPlugin)
        .add_plugins(BuildingGenerationPlugin)
        .add_plugins(OrbitCameraPlugin)
        .add_plugins(UIPlugin)

        .insert_resource(ClearColor(Color::srgb(0.2, 0.2, 0.2))) // world color
        .add_systems(Startup, setup_gizmos)
        // input lands before the rebuild so the next frame shows it
        .add_systems(
            Update,
            (interaction::handle_exit, interaction::handle_key_commands)
                .before(systems::mesh::scene::rebuild_building),
        )
        .run()
}

fn setup_gizmos(
    mut config_store: ResMut<GizmoConfigStore>
) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.depth_bias = -1.0; // render on top of everything else
}

