use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin}; // fps
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};

use crate::config::*;
use crate::systems::export::ExportEvent;
use crate::systems::grid::GridConfig;
use crate::systems::lighting::LightingMode;
use crate::systems::mesh::shape::material::{Material, WALL_MATERIAL_COUNT};
use crate::systems::mesh::{BuildingParams, WallSide, WindowStyle};

pub mod indicator;

// re-export the main items that other modules need
pub use indicator::{StatusEvent, StatusIndicator};
pub use indicator::{render_status_indicator, update_status_indicator};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        assert!(app.is_plugin_added::<EguiPlugin>());
        app
            .insert_resource(StatusIndicator::default())
            .add_event::<StatusEvent>()
            .add_systems(Update, update_status_indicator)
            .add_systems(EguiPrimaryContextPass, (ui_main, fps, render_status_indicator)); // UI rendering here
    }
}

fn ui_main(
    mut contexts: EguiContexts,
    mut params: ResMut<BuildingParams>,
    mut lighting: ResMut<LightingMode>,
    mut grid: ResMut<GridConfig>,
    mut export_events: EventWriter<ExportEvent>,
    mut status_events: EventWriter<StatusEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // edit a copy, only write back on change so the rebuild only fires when needed
    let mut edited = params.clone();
    let mut lighting_mode = *lighting;

    egui::SidePanel::left("config_panel")
        .default_width(260.0)
        .min_width(250.0)
        .max_width(400.0)
        .resizable(true)
        .show(ctx, |ui| {
            // camera
            ui.label("Camera: ");
            ui.label("Left drag - Orbit");
            ui.label("Right drag / Scroll - Zoom");

            ui.separator();

            egui::CollapsingHeader::new("Footprint")
                .default_open(true)
                .show(ui, |ui| {
                let mut width = edited.width;
                let mut length = edited.length;
                ui.add(egui::Slider::new(&mut width, FOOTPRINT_MIN..=FOOTPRINT_MAX)
                    .text("Width (m)")
                    .suffix(" m"))
                    .on_hover_text("Building extent along x, front and back walls.");
                ui.add(egui::Slider::new(&mut length, FOOTPRINT_MIN..=FOOTPRINT_MAX)
                    .text("Length (m)")
                    .suffix(" m"))
                    .on_hover_text("Building extent along z, left and right walls.");
                edited.set_footprint(width, length);

                let mut floors = edited.num_floors;
                ui.add(egui::Slider::new(&mut floors, MIN_FLOORS..=MAX_FLOORS)
                    .text("Floors"))
                    .on_hover_text("+ / - on the keyboard");
                edited.set_floor_count(floors);

                ui.label(format!("Building height: {:.1} m", edited.building_height()));
            });

            egui::CollapsingHeader::new("Windows")
                .default_open(true)
                .show(ui, |ui| {
                ui.add(egui::Slider::new(&mut edited.window_width, 0.4..=3.0)
                    .text("Width (m)")
                    .suffix(" m"));
                ui.add(egui::Slider::new(&mut edited.window_height, 0.6..=edited.floor_height)
                    .text("Height (m)")
                    .suffix(" m"));
                ui.add(egui::Slider::new(&mut edited.window_spacing, 0.5..=8.0)
                    .text("Spacing (m)")
                    .suffix(" m"))
                    .on_hover_text("Gap before the first window and between windows.");

                egui::ComboBox::from_label("Style (S)")
                    .selected_text(edited.window_style.label())
                    .show_ui(ui, |ui| {
                        for style in WindowStyle::ALL {
                            ui.selectable_value(&mut edited.window_style, style, style.label());
                        }
                    });
            });

            egui::CollapsingHeader::new("Roof")
                .default_open(true)
                .show(ui, |ui| {
                ui.add(egui::Slider::new(&mut edited.roof_height, 0.5..=10.0)
                    .text("Apex height (m)")
                    .suffix(" m"));
            });

            ui.separator();

            // visibility controls
            ui.label("Visibility:");
            ui.checkbox(&mut edited.show_all_walls, "All walls (A)");
            ui.horizontal(|ui| {
                for (i, side) in WallSide::ALL.iter().enumerate() {
                    ui.add_enabled(
                        edited.show_all_walls,
                        egui::Checkbox::new(&mut edited.wall_visible[side.index()], format!("{} ({})", side.label(), i + 1)),
                    );
                }
            });
            ui.checkbox(&mut edited.show_windows, "Windows (W)");
            ui.checkbox(&mut edited.show_roof, "Roof (R)");

            ui.separator();

            egui::ComboBox::from_label("Material (M)")
                .selected_text(Material::resolve(edited.material_index).name)
                .show_ui(ui, |ui| {
                    for index in 0..WALL_MATERIAL_COUNT {
                        ui.selectable_value(&mut edited.material_index, index, Material::resolve(index).name);
                    }
                });

            egui::ComboBox::from_label("Lighting (L)")
                .selected_text(lighting_mode.label())
                .show_ui(ui, |ui| {
                    for mode in [LightingMode::Single, LightingMode::Dual] {
                        ui.selectable_value(&mut lighting_mode, mode, mode.label());
                    }
                });

            ui.checkbox(&mut grid.enabled, "Ground grid");
            ui.checkbox(&mut grid.show_axes, "Axes");

            ui.separator();

            // export section
            ui.horizontal(|ui| {
                if ui.button("Export OBJ")
                    .on_hover_text("Export model as OBJ file, current directory")
                    .clicked() {
                    // timestamped filename, falls back to a fixed name if the clock is off
                    let timestamp = std::time::SystemTime::now()
                        .duration_since(std::time::UNIX_EPOCH)
                        .map(|d| d.as_secs())
                        .unwrap_or_default();
                    let filename = format!("building_export_{}.obj", timestamp);
                    status_events.write(StatusEvent(format!("Exporting {}", filename)));
                    export_events.write(ExportEvent { filename });
                }
            });

            ui.separator();
            ui.label("+/- Floors, S Window style");
            ui.label("1-4 Walls, A All walls");
            ui.label("ESC - Exit");
        });

    if edited != *params {
        *params = edited;
    }
    if lighting_mode != *lighting {
        *lighting = lighting_mode;
        status_events.write(StatusEvent(format!("Lighting: {}", lighting_mode.label())));
    }
}

fn fps(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Area::new(egui::Id::new("fps_counter"))
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::RIGHT), |ui| {
                    if let Some(fps_diagnostic) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
                        if let Some(fps) = fps_diagnostic.smoothed() {
                            ui.label(egui::RichText::new(format!("{:.0}", fps))
                                .size(26.0)
                                .color(egui::Color32::WHITE));
                        }
                    }
                });
            });
    }
}
