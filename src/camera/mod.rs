//! Camera rig
//!
//! Pan, zoom and orbit come from `bevy_panorbit_camera`; the glue here
//! clamps the zoom distance into a configured range and drives the idle
//! auto-rotation. Any held orbit or pan button suspends auto-rotation for
//! the duration of the drag and it resumes immediately on release.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::scene::EngineSet;

/// Marker component for the main scene camera.
#[derive(Component)]
pub struct SceneCamera;

/// Camera behavior knobs, host-overridable before startup.
#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub initial_distance: f32,
    pub auto_rotate: bool,
    /// Idle azimuth drift in radians per second.
    pub auto_rotate_speed: f32,
    /// Press/release pairs moving further than this are camera drags, not
    /// body clicks.
    pub click_drag_threshold_px: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_distance: 8.0,
            max_distance: 60.0,
            initial_distance: 22.0,
            auto_rotate: true,
            auto_rotate_speed: 0.15,
            click_drag_threshold_px: 5.0,
        }
    }
}

/// Plugin for the scene camera rig.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .add_systems(Startup, spawn_scene_camera)
            .add_systems(
                Update,
                (clamp_camera_distance, auto_rotate_camera).in_set(EngineSet::Visuals),
            );
    }
}

fn spawn_scene_camera(mut commands: Commands, config: Res<CameraConfig>) {
    let distance = clamped_distance(
        config.initial_distance,
        config.min_distance,
        config.max_distance,
    );

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(distance),
            yaw: Some(0.4),
            pitch: Some(0.35),
            force_update: true,
            ..default()
        },
        SceneCamera,
        // Labels are UI nodes; keep them on the main camera, not the
        // detail overlay's inset camera.
        IsDefaultUiCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, distance * 0.35, distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Keep the zoom target inside the configured distance range.
fn clamp_camera_distance(
    config: Res<CameraConfig>,
    mut cameras: Query<&mut PanOrbitCamera, With<SceneCamera>>,
) {
    for mut camera in cameras.iter_mut() {
        camera.target_radius = clamped_distance(
            camera.target_radius,
            config.min_distance,
            config.max_distance,
        );
    }
}

/// Advance the azimuth while auto-rotate is on and no drag is active.
fn auto_rotate_camera(
    config: Res<CameraConfig>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    time: Res<Time>,
    mut cameras: Query<&mut PanOrbitCamera, With<SceneCamera>>,
) {
    let dragging = buttons.is_some_and(|buttons| {
        buttons.pressed(MouseButton::Left)
            || buttons.pressed(MouseButton::Right)
            || buttons.pressed(MouseButton::Middle)
    });

    for mut camera in cameras.iter_mut() {
        camera.target_yaw = next_yaw(
            camera.target_yaw,
            config.auto_rotate,
            dragging,
            config.auto_rotate_speed,
            time.delta_secs(),
        );
    }
}

fn clamped_distance(distance: f32, min: f32, max: f32) -> f32 {
    distance.clamp(min, max)
}

fn next_yaw(yaw: f32, enabled: bool, dragging: bool, speed: f32, dt: f32) -> f32 {
    if enabled && !dragging {
        yaw + speed * dt
    } else {
        yaw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_clamped_into_range() {
        assert_eq!(clamped_distance(100.0, 8.0, 60.0), 60.0);
        assert_eq!(clamped_distance(1.0, 8.0, 60.0), 8.0);
        assert_eq!(clamped_distance(20.0, 8.0, 60.0), 20.0);
    }

    #[test]
    fn auto_rotate_advances_only_when_idle() {
        let stepped = next_yaw(1.0, true, false, 0.2, 0.5);
        assert!((stepped - 1.1).abs() < 1e-6);
    }

    #[test]
    fn dragging_suspends_auto_rotate() {
        assert_eq!(next_yaw(1.0, true, true, 0.2, 0.5), 1.0);
    }

    #[test]
    fn disabled_auto_rotate_never_moves() {
        assert_eq!(next_yaw(1.0, false, false, 0.2, 0.5), 1.0);
    }
}
