use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::systems::lighting::LightingMode;
use crate::systems::mesh::shape::MaterialRef;
use crate::systems::mesh::{BuildingParams, WallSide};
use crate::systems::ui::indicator::StatusEvent;

/// Discrete parameter commands, one per key binding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    CycleMaterial,
    ToggleWindows,
    ToggleRoof,
    ToggleAllWalls,
    ToggleWall(WallSide),
    AddFloor,
    RemoveFloor,
    CycleWindowStyle,
}

const BINDINGS: [(KeyCode, Command); 13] = [
    (KeyCode::KeyM, Command::CycleMaterial),
    (KeyCode::KeyW, Command::ToggleWindows),
    (KeyCode::KeyR, Command::ToggleRoof),
    (KeyCode::KeyA, Command::ToggleAllWalls),
    (KeyCode::Digit1, Command::ToggleWall(WallSide::Front)),
    (KeyCode::Digit2, Command::ToggleWall(WallSide::Back)),
    (KeyCode::Digit3, Command::ToggleWall(WallSide::Left)),
    (KeyCode::Digit4, Command::ToggleWall(WallSide::Right)),
    (KeyCode::Equal, Command::AddFloor), // shares the '+' key
    (KeyCode::NumpadAdd, Command::AddFloor),
    (KeyCode::Minus, Command::RemoveFloor),
    (KeyCode::NumpadSubtract, Command::RemoveFloor),
    (KeyCode::KeyS, Command::CycleWindowStyle),
];

// lighting lives outside the building parameters
const LIGHTING_KEY: KeyCode = KeyCode::KeyL;

/// Apply one command; returns the status line to show
pub fn apply_command(command: Command, params: &mut BuildingParams) -> String {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    match command {
        Command::CycleMaterial => {
            params.cycle_material();
            let name = MaterialRef::surface(params.material_index).material().name;
            format!("Material: {name}")
        }
        Command::ToggleWindows => {
            params.toggle_windows();
            format!("Windows {}", on_off(params.show_windows))
        }
        Command::ToggleRoof => {
            params.toggle_roof();
            format!("Roof {}", on_off(params.show_roof))
        }
        Command::ToggleAllWalls => {
            params.toggle_all_walls();
            format!("All walls {}", on_off(params.show_all_walls))
        }
        Command::ToggleWall(side) => {
            params.toggle_wall(side);
            format!("{} wall {}", side.label(), on_off(params.wall_visible[side.index()]))
        }
        Command::AddFloor => {
            params.add_floor();
            format!("Floors: {}", params.num_floors)
        }
        Command::RemoveFloor => {
            params.remove_floor();
            format!("Floors: {}", params.num_floors)
        }
        Command::CycleWindowStyle => {
            params.cycle_window_style();
            format!("Window style: {}", params.window_style.label())
        }
    }
}

/// Returns `true` while egui owns the pointer, world input should back off
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    match contexts.ctx_mut() {
        Ok(ctx) => ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
        Err(_) => false,
    }
}

// keyboard commands
// only the last press before the rebuild matters, they apply in key order
pub fn handle_key_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut params: ResMut<BuildingParams>,
    mut lighting: ResMut<LightingMode>,
    mut status_events: EventWriter<StatusEvent>,
    mut contexts: EguiContexts,
) {
    // typing into a panel widget is not a command
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    for (key, command) in BINDINGS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        let text = apply_command(command, &mut params);
        info!("{}", text);
        status_events.write(StatusEvent(text));
    }

    if keyboard.just_pressed(LIGHTING_KEY) {
        *lighting = lighting.toggled();
        let text = format!("Lighting: {}", lighting.label());
        info!("{}", text);
        status_events.write(StatusEvent(text));
    }
}

// application exit
pub fn handle_exit(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Exit requested");
        exit.write(AppExit::Success);
    }
}
