//! Input handling systems

use bevy::prelude::*;

use super::components::{PendingStart, SimWorldResource};

/// Space starts the race once, Escape quits
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    sim_world: Res<SimWorldResource>,
    mut pending: ResMut<PendingStart>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Space) && !sim_world.0.is_started() {
        pending.0 = true;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
