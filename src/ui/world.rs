//! World setup systems for the camera

use bevy::prelude::*;

use super::components::MainCamera;

/// System to spawn the 2D camera looking at the whole window
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}
