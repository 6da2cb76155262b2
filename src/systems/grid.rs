use bevy::prelude::*;
use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};

use crate::config::AXIS_LENGTH;
use crate::systems::mesh::BuildingParams;

// ground grid under the building plus the x/y/z axes at the origin
// so user can determine their bearings in 3d space, and for sense of scale
pub struct GridPlugin;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct GridGizmoGroup;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(GridConfig::default())
            .init_gizmo_group::<GridGizmoGroup>()
            .add_systems(Startup, setup_gizmos)
            .add_systems(Update, (draw_grid, draw_axes));
    }
}

// runtime toggles live here, the panel edits them
#[derive(Resource)]
pub struct GridConfig {
    pub major_spacing: f32,
    pub minor_spacing: f32,
    pub major_color: Color,
    pub minor_color: Color,
    pub margin: f32, // ground shown past the footprint
    pub enabled: bool,
    pub show_axes: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            major_spacing: 10.0,
            minor_spacing: 1.0,
            major_color: Color::srgba(0.5, 0.5, 0.5, 0.15),
            minor_color: Color::srgba(0.3, 0.3, 0.3, 0.05),
            margin: 40.0,
            enabled: true,
            show_axes: true,
        }
    }
}

impl GridConfig {
    /// Half size of the square grid, rounded out to a major line
    pub fn half_extent(&self, width: f32, length: f32) -> f32 {
        let reach = width.max(length) / 2.0 + self.margin;
        if self.major_spacing <= 0.0 {
            return reach;
        }
        (reach / self.major_spacing).ceil() * self.major_spacing
    }
}

fn setup_gizmos(
    mut config_store: ResMut<GizmoConfigStore>
) {
    let (config, _) = config_store.config_mut::<GridGizmoGroup>();
    config.depth_bias = 0.1; // render depth
}

/// Grid line coordinates covering `[min, max]`, snapped to `spacing`
pub fn grid_lines(min: f32, max: f32, spacing: f32) -> Vec<f32> {
    if spacing <= 0.0 {
        return Vec::new();
    }
    let first = (min / spacing).ceil() as i64;
    let last = (max / spacing).floor() as i64;
    (first..=last).map(|i| i as f32 * spacing).collect()
}

fn draw_grid(
    mut gizmos: Gizmos<GridGizmoGroup>,
    config: Res<GridConfig>,
    params: Res<BuildingParams>,
) {
    if !config.enabled {
        return;
    }

    let half = config.half_extent(params.width, params.length);

    for t in grid_lines(-half, half, config.minor_spacing) {
        // major lines are drawn below
        if (t % config.major_spacing).abs() <= f32::EPSILON {
            continue;
        }
        gizmos.line(Vec3::new(t, -0.01, -half), Vec3::new(t, -0.01, half), config.minor_color);
        gizmos.line(Vec3::new(-half, -0.01, t), Vec3::new(half, -0.01, t), config.minor_color);
    }

    for t in grid_lines(-half, half, config.major_spacing) {
        gizmos.line(Vec3::new(t, -0.02, -half), Vec3::new(t, -0.02, half), config.major_color);
        gizmos.line(Vec3::new(-half, -0.02, t), Vec3::new(half, -0.02, t), config.major_color);
    }
}

fn draw_axes(mut gizmos: Gizmos, config: Res<GridConfig>) {
    if !config.show_axes {
        return;
    }
    gizmos.line(Vec3::ZERO, Vec3::X * AXIS_LENGTH, Color::srgb(1.0, 0.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Y * AXIS_LENGTH, Color::srgb(0.0, 1.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Z * AXIS_LENGTH, Color::srgb(0.0, 0.0, 1.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_snap_to_spacing() {
        assert_eq!(grid_lines(-25.0, 25.0, 10.0), vec![-20.0, -10.0, 0.0, 10.0, 20.0]);
        assert_eq!(grid_lines(0.5, 3.2, 1.0), vec![1.0, 2.0, 3.0]);
        assert!(grid_lines(0.0, 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_grid_covers_footprint() {
        let config = GridConfig::default();
        assert_eq!(config.half_extent(20.0, 15.0), 50.0);
        assert_eq!(config.half_extent(100.0, 4.0), 90.0);
    }
}
