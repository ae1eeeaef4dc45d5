use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

use orbitview::prelude::*;
use orbitview::sample::sample_roster;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbitview".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    // The roster and camera behavior are the host-facing inputs; the demo
    // supplies the embedded sample set.
    app.insert_resource(SkillRoster {
        bodies: sample_roster(),
    });
    app.insert_resource(CameraConfig {
        auto_rotate: true,
        ..default()
    });

    app.add_plugins((
        ScenePlugin,
        OrbitPlugin,
        CameraPlugin,
        InteractionPlugin,
        VisualizationPlugin,
        DetailPlugin,
    ));

    app.add_systems(Update, log_selection_events);

    app.run();
}

/// Stand-in for the host's detail surface: log what it would receive.
fn log_selection_events(
    mut selected: MessageReader<BodySelected>,
    mut deselected: MessageReader<BodyDeselected>,
) {
    for ev in selected.read() {
        info!(
            "selected '{}' ({}, proficiency {})",
            ev.body.name, ev.body.category, ev.body.proficiency
        );
    }
    for ev in deselected.read() {
        info!("selection cleared: {}", ev.id);
    }
}
